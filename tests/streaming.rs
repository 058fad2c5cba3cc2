//! End-to-end tests driving a paired `Encoder` and `Decoder` through whole
//! header blocks, including one-octet-at-a-time streaming.

use std::cmp;

use httpbis_hpack::Decoder;
use httpbis_hpack::DecoderError;
use httpbis_hpack::Encoder;
use httpbis_hpack::Header;

use rand::Rng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decodes a whole block by feeding the decoder `chunk`-octet fragments,
/// collecting the emitted headers.
fn decode_block(
    decoder: &mut Decoder,
    block: &[u8],
    chunk: usize,
) -> Result<Vec<Header>, DecoderError> {
    let mut headers = Vec::new();
    let mut pos = 0;

    while pos < block.len() {
        let end = cmp::min(pos + chunk, block.len());
        let last = end == block.len();
        let mut frag = &block[pos..end];

        while !frag.is_empty() {
            let (header, nread) = decoder.decode(frag, last)?;
            headers.extend(header);
            frag = &frag[nread..];
        }

        pos = end;
    }

    // The block must end at a field boundary.
    let (header, nread) = decoder.decode(&[], true)?;
    assert!(header.is_none());
    assert_eq!(nread, 0);

    Ok(headers)
}

fn request_headers() -> Vec<Header> {
    vec![
        Header::new(&b":method"[..], &b"GET"[..]),
        Header::new(&b":scheme"[..], &b"https"[..]),
        Header::new(&b":authority"[..], &b"example.org"[..]),
        Header::new(&b":path"[..], &b"/"[..]),
        Header::new(&b"user-agent"[..], &b"nghttp2"[..]),
        Header::never_indexed(&b"authorization"[..], &b"basic aGVsbG86d29ybGQ="[..]),
    ]
}

/// A sequence of header lists encoded by one encoder and decoded by one
/// decoder comes back exactly, with the never-index flag preserved.
#[test]
fn test_round_trip_blocks() {
    init_logger();

    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new();

    let blocks = vec![
        request_headers(),
        // The same list again exercises the indexed paths.
        request_headers(),
        vec![
            Header::new(&b":status"[..], &b"200"[..]),
            Header::new(&b"content-type"[..], &b"text/html; charset=utf-8"[..]),
            Header::new(&b"set-cookie"[..], &b"id=deadbeef"[..]),
        ],
    ];

    for headers in &blocks {
        let block = encoder.encode(headers);
        let decoded = decode_block(&mut decoder, &block, block.len().max(1)).unwrap();
        assert_eq!(&decoded, headers);
    }
}

/// Decoding a block one octet at a time yields the same headers as decoding
/// it in a single buffer.
#[test]
fn test_streaming_equivalence() {
    init_logger();

    let mut encoder = Encoder::new(4096);
    let headers = request_headers();
    let block = encoder.encode(&headers);

    let mut whole = Decoder::new();
    let mut bytewise = Decoder::new();

    let from_whole = decode_block(&mut whole, &block, block.len()).unwrap();
    let from_bytes = decode_block(&mut bytewise, &block, 1).unwrap();

    assert_eq!(from_whole, headers);
    assert_eq!(from_bytes, headers);
}

/// An encoder whose table grew beyond what the decoder announced produces a
/// size update the decoder must reject.
#[test]
fn test_illegal_context_update() {
    init_logger();

    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new();

    decoder.change_table_size(1024);
    // Deliberately set a larger size so that the next context update carries
    // an illegal value > 1024.
    encoder.change_table_size(3000);

    let block = encoder.encode(&[]);
    assert!(!block.is_empty());

    let err = decode_block(&mut decoder, &block, block.len()).unwrap_err();
    assert_eq!(
        err,
        DecoderError::TableSizeExceedsSetting {
            size: 3000,
            max: 1024,
        }
    );

    // The decoder is poisoned from here on.
    assert_eq!(
        decoder.decode(&[0x82], true).unwrap_err(),
        DecoderError::Poisoned
    );
}

/// A legal size change is announced once and honored by the decoder.
#[test]
fn test_context_update_round_trip() {
    init_logger();

    let mut encoder = Encoder::new(4096);
    let mut decoder = Decoder::new();

    encoder.change_table_size(256);

    let headers = request_headers();
    let block = encoder.encode(&headers);
    let decoded = decode_block(&mut decoder, &block, 1).unwrap();

    assert_eq!(decoded, headers);
}

/// Randomized lists with repeated names, binary values and occasional
/// never-index flags survive the round trip at several fragmentations.
#[test]
fn test_random_round_trips() {
    init_logger();

    let mut rng = rand::thread_rng();

    let names: &[&[u8]] = &[
        b":method",
        b":path",
        b"cookie",
        b"x-trace-id",
        b"x-padding",
        b"authorization",
        b"content-length",
    ];

    for _ in 0..50 {
        let mut encoder = Encoder::new(4096);
        let mut decoder = Decoder::new();

        for _ in 0..8 {
            let count = rng.gen_range(0..6);
            let headers: Vec<Header> = (0..count)
                .map(|_| {
                    let name = names[rng.gen_range(0..names.len())].to_vec();
                    let value: Vec<u8> = (0..rng.gen_range(0..40))
                        .map(|_| rng.gen::<u8>())
                        .collect();
                    if rng.gen_range(0..8) == 0 {
                        Header::never_indexed(name, value)
                    } else {
                        Header::new(name, value)
                    }
                })
                .collect();

            let block = encoder.encode(&headers);
            let chunk = match rng.gen_range(0..3) {
                0 => 1,
                1 => rng.gen_range(1..8),
                _ => block.len().max(1),
            };

            let decoded = decode_block(&mut decoder, &block, chunk).unwrap();
            assert_eq!(decoded, headers);
        }
    }
}

/// A block cut short mid-field is reported as truncated and the decoder
/// refuses everything afterwards.
#[test]
fn test_truncated_block_poisons_decoder() {
    init_logger();

    let mut encoder = Encoder::new(4096);
    let headers = vec![Header::never_indexed(
        &b"authorization"[..],
        &b"basic aGVsbG86d29ybGQ="[..],
    )];
    let block = encoder.encode(&headers);

    let mut decoder = Decoder::new();
    let err = decode_block(&mut decoder, &block[..block.len() - 1], 1).unwrap_err();
    assert_eq!(err, DecoderError::TruncatedInput);

    assert_eq!(decoder.decode(&[], true).unwrap_err(), DecoderError::Poisoned);
}
