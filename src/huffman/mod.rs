//! Huffman coding for HPACK string literals, using the fixed code of
//! RFC 7541 Appendix B.
//!
//! Encoding walks the per-symbol code table and packs bits most significant
//! first, padding the final partial octet with the high bits of the EOS
//! symbol. Decoding is a table-driven automaton with 256 states, each input
//! octet driving two 4-bit transitions, so that a string can be decoded
//! across arbitrary input fragments without buffering.

mod table;

use self::table::DECODE_TABLE;
use self::table::ENCODE_TABLE;

use crate::decoder::DecoderError;

// Flag bits of the decode automaton cells.
const ACCEPTED: u8 = 0x1;
const SYMBOL: u8 = 0x2;
const FAIL: u8 = 0x4;

/// Returns the number of octets `src` occupies once Huffman-coded.
pub(crate) fn encode_length(src: &[u8]) -> usize {
    let bits: u64 = src
        .iter()
        .map(|&b| ENCODE_TABLE[b as usize].1 as u64)
        .sum();
    ((bits + 7) / 8) as usize
}

/// Huffman-encodes `src`, appending the output to `dst`.
pub(crate) fn encode(src: &[u8], dst: &mut Vec<u8>) {
    // Number of bits still free in the last output octet. 8 means the last
    // octet is full and a fresh one must be started.
    let mut rembits = 8;

    for &b in src {
        let (code, nbits) = ENCODE_TABLE[b as usize];

        if rembits == 8 {
            dst.push(0);
        }

        rembits = encode_symbol(dst, rembits, code, nbits as usize);
    }

    if rembits < 8 {
        // Pad the tail of the last octet with the high bits of EOS.
        let (code, nbits) = ENCODE_TABLE[256];
        let last = dst
            .last_mut()
            .expect("partial octet implies non-empty output");
        *last |= (code >> (nbits as usize - rembits)) as u8;
    }
}

/// Packs one symbol into the output, returning the updated number of free
/// bits in the last octet.
fn encode_symbol(dst: &mut Vec<u8>, mut rembits: usize, code: u32, mut nbits: usize) -> usize {
    loop {
        if rembits > nbits {
            let last = dst.last_mut().expect("encode_symbol requires an open octet");
            *last |= (code << (rembits - nbits)) as u8;
            rembits -= nbits;
            break;
        }

        let last = dst.last_mut().expect("encode_symbol requires an open octet");
        *last |= (code >> (nbits - rembits)) as u8;

        nbits -= rembits;
        rembits = 8;

        if nbits == 0 {
            break;
        }

        dst.push(0);
    }

    rembits
}

/// A streaming Huffman decoder.
///
/// The decoder holds nothing but the automaton state, so a string split
/// across input fragments can be decoded by repeated `decode` calls. It must
/// be `reset` before each new string.
pub(crate) struct HuffmanDecoder {
    state: u8,
    accepted: bool,
}

impl HuffmanDecoder {
    pub fn new() -> HuffmanDecoder {
        HuffmanDecoder {
            state: 0,
            accepted: true,
        }
    }

    /// Resets the automaton so that it can decode a new string.
    pub fn reset(&mut self) {
        self.state = 0;
        self.accepted = true;
    }

    /// Decodes `src`, appending decoded octets to `dst`. `last` signals the
    /// end of the coded string; the automaton must then rest at a symbol
    /// boundary (modulo up to seven bits of EOS padding) or the string is
    /// rejected.
    pub fn decode(&mut self, dst: &mut Vec<u8>, src: &[u8], last: bool) -> Result<(), DecoderError> {
        for &b in src {
            self.decode4(dst, b >> 4)?;
            self.decode4(dst, b & 0xf)?;
        }

        if last && !self.accepted {
            return Err(DecoderError::HuffmanDecode);
        }

        Ok(())
    }

    /// Drives the automaton by one 4-bit transition.
    fn decode4(&mut self, dst: &mut Vec<u8>, nibble: u8) -> Result<(), DecoderError> {
        let (next, flags, symbol) = DECODE_TABLE[self.state as usize][nibble as usize];

        if flags & FAIL != 0 {
            return Err(DecoderError::HuffmanDecode);
        }

        if flags & SYMBOL != 0 {
            dst.push(symbol);
        }

        self.state = next;
        self.accepted = flags & ACCEPTED != 0;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhex(s: &str) -> Vec<u8> {
        assert!(s.len() % 2 == 0);
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn encode_to_vec(src: &[u8]) -> Vec<u8> {
        let mut dst = Vec::new();
        encode(src, &mut dst);
        dst
    }

    fn decode_to_vec(src: &[u8]) -> Result<Vec<u8>, DecoderError> {
        let mut decoder = HuffmanDecoder::new();
        let mut dst = Vec::new();
        decoder.decode(&mut dst, src, true)?;
        Ok(dst)
    }

    /// Tests the encoder against the Huffman-coded strings appearing in the
    /// RFC 7541 Appendix C examples.
    #[test]
    fn test_encode_rfc7541_vectors() {
        assert_eq!(encode_to_vec(b"www.example.com"), unhex("f1e3c2e5f23a6ba0ab90f4ff"));
        assert_eq!(encode_to_vec(b"no-cache"), unhex("a8eb10649cbf"));
        assert_eq!(encode_to_vec(b"custom-value"), unhex("25a849e95bb8e8b4bf"));
        assert_eq!(encode_to_vec(b"302"), unhex("6402"));
        assert_eq!(encode_to_vec(b"private"), unhex("aec3771a4b"));
        assert_eq!(
            encode_to_vec(b"Mon, 21 Oct 2013 20:13:21 GMT"),
            unhex("d07abe941054d444a8200595040b8166e082a62d1bff")
        );
        assert_eq!(
            encode_to_vec(b"https://www.example.com"),
            unhex("9d29ad171863c78f0b97c8e9ae82ae43d3")
        );
        assert_eq!(encode_to_vec(b"307"), unhex("640eff"));
        assert_eq!(encode_to_vec(b"gzip"), unhex("9bd9ab"));
        assert_eq!(
            encode_to_vec(b"foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1"),
            unhex(
                "94e7821dd7f2e6c7b335dfdfcd5b3960d5af27087f3672c1ab270fb5291f9587\
                 316065c003ed4ee5b1063d5007"
            )
        );
    }

    /// Tests the decoder against the same Appendix C vectors.
    #[test]
    fn test_decode_rfc7541_vectors() {
        assert_eq!(
            decode_to_vec(&unhex("f1e3c2e5f23a6ba0ab90f4ff")).unwrap(),
            b"www.example.com"
        );
        assert_eq!(decode_to_vec(&unhex("a8eb10649cbf")).unwrap(), b"no-cache");
        assert_eq!(decode_to_vec(&unhex("6402")).unwrap(), b"302");
        assert_eq!(
            decode_to_vec(&unhex("9d29ad171863c78f0b97c8e9ae82ae43d3")).unwrap(),
            b"https://www.example.com"
        );
    }

    /// Tests that a handful of the published Appendix B code assignments are
    /// reproduced exactly by the generated table.
    #[test]
    fn test_code_table_spot_check() {
        assert_eq!(ENCODE_TABLE[b'0' as usize], (0x0, 5));
        assert_eq!(ENCODE_TABLE[b'a' as usize], (0x3, 5));
        assert_eq!(ENCODE_TABLE[b'z' as usize], (0x7b, 7));
        assert_eq!(ENCODE_TABLE[b' ' as usize], (0x14, 6));
        assert_eq!(ENCODE_TABLE[b':' as usize], (0x5c, 7));
        assert_eq!(ENCODE_TABLE[0], (0x1ff8, 13));
        assert_eq!(ENCODE_TABLE[255], (0x3ffffee, 26));
        // EOS
        assert_eq!(ENCODE_TABLE[256], (0x3fffffff, 30));
    }

    /// Tests that every single-octet string round-trips, which exercises all
    /// 256 symbol codes through both tables.
    #[test]
    fn test_round_trip_all_symbols() {
        for c in 0..=255u8 {
            let encoded = encode_to_vec(&[c]);
            assert_eq!(encoded.len(), encode_length(&[c]));
            assert_eq!(decode_to_vec(&encoded).unwrap(), vec![c], "symbol {}", c);
        }
    }

    /// Tests that binary (non-ASCII) strings survive the round trip.
    #[test]
    fn test_round_trip_binary() {
        let src: Vec<u8> = (0..=255u8).collect();
        let encoded = encode_to_vec(&src);
        assert_eq!(encoded.len(), encode_length(&src));
        assert_eq!(decode_to_vec(&encoded).unwrap(), src);
    }

    /// Tests that decoding one octet at a time gives the same result as
    /// decoding the whole buffer at once.
    #[test]
    fn test_streaming_decode() {
        let encoded = encode_to_vec(b"no-cache");

        let mut decoder = HuffmanDecoder::new();
        let mut dst = Vec::new();
        for (i, b) in encoded.iter().enumerate() {
            let last = i + 1 == encoded.len();
            decoder.decode(&mut dst, &[*b], last).unwrap();
        }

        assert_eq!(dst, b"no-cache");
    }

    /// Tests that a truncated coded string is rejected once the input is
    /// declared final.
    #[test]
    fn test_decode_ends_prematurely() {
        let encoded = encode_to_vec(b"Hello, World");

        let result = decode_to_vec(&encoded[..encoded.len() - 1]);

        assert_eq!(result, Err(DecoderError::HuffmanDecode));
    }

    /// Tests that an octet of all padding (eight one-bits) is rejected: the
    /// spec allows at most seven bits of EOS padding.
    #[test]
    fn test_decode_overlong_padding() {
        assert_eq!(decode_to_vec(&[0xff]), Err(DecoderError::HuffmanDecode));
    }

    /// Tests that a string containing the EOS symbol proper is rejected.
    #[test]
    fn test_decode_embedded_eos() {
        assert_eq!(
            decode_to_vec(&[0xff, 0xff, 0xff, 0xfc]),
            Err(DecoderError::HuffmanDecode)
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_to_vec(b""), Vec::<u8>::new());
        assert_eq!(encode_length(b""), 0);
        assert_eq!(decode_to_vec(b"").unwrap(), Vec::<u8>::new());
    }
}
