//! Implements all functionality related to encoding header blocks using
//! HPACK.
//!
//! Clients should use the `Encoder` struct as the API for performing HPACK
//! encoding. The encoder is total: every valid header list produces a valid
//! block, and the only failure channel is the output sink's own `io::Error`.
use std::cmp;
use std::io;
use std::num::Wrapping;

use crate::header::Header;
use crate::huffman;
use crate::HeaderTable;
use crate::HeaderValueFound;
use crate::DEFAULT_HEADER_TABLE_SIZE;

/// Header names the encoder refuses to insert into the dynamic table: their
/// values are typically high-entropy or security sensitive, so indexing them
/// buys little compression and widens the attack surface of the shared
/// compression context.
static NO_INDEXING_NAMES: &[&[u8]] = &[
    b"set-cookie",
    b"content-length",
    b"location",
    b"etag",
    b":path",
];

/// Encode an integer to the representation defined by HPACK, writing it into the provided
/// `io::Write` instance. Also allows the caller to specify the leading bits of the first
/// octet. Any bits that are already set within the last `prefix_size` bits will be cleared
/// and overwritten by the integer's representation (in other words, only the first
/// `8 - prefix_size` bits from the `leading_bits` octet are reflected in the first octet
/// emitted by the function.
pub fn encode_integer_into<W: io::Write>(
    mut value: usize,
    prefix_size: u8,
    leading_bits: u8,
    writer: &mut W,
) -> io::Result<()> {
    let Wrapping(mask) = if prefix_size >= 8 {
        Wrapping(0xFF)
    } else {
        Wrapping(1u8 << prefix_size) - Wrapping(1)
    };
    // Clear any bits within the last `prefix_size` bits of the provided `leading_bits`.
    // Failing to do so might lead to an incorrect encoding of the integer.
    let leading_bits = leading_bits & !mask;
    let mask = mask as usize;
    if value < mask {
        writer.write_all(&[leading_bits | value as u8])?;
        return Ok(());
    }

    writer.write_all(&[leading_bits | mask as u8])?;
    value -= mask;
    while value >= 128 {
        writer.write_all(&[((value % 128) + 128) as u8])?;
        value = value / 128;
    }
    writer.write_all(&[value as u8])?;
    Ok(())
}

/// Encode an integer to the representation defined by HPACK.
///
/// Returns a newly allocated `Vec` containing the encoded bytes.
/// Only `prefix_size` lowest-order bits of the first byte in the
/// array are guaranteed to be used.
#[cfg(test)]
pub(crate) fn encode_integer(value: usize, prefix_size: u8) -> Vec<u8> {
    let mut res = Vec::new();
    encode_integer_into(value, prefix_size, 0, &mut res).unwrap();
    res
}

/// Returns the flag octet of a literal representation: incremental indexing,
/// never indexed, or plain without indexing.
fn pack_first_byte(indexing: bool, never_index: bool) -> u8 {
    if indexing {
        0x40
    } else if never_index {
        0x10
    } else {
        0x00
    }
}

/// Writes a string literal, choosing the Huffman form whenever it is
/// strictly shorter than the raw octets.
pub(crate) fn encode_string_literal_into<W: io::Write>(
    octet_str: &[u8],
    writer: &mut W,
) -> io::Result<()> {
    let huffman_len = huffman::encode_length(octet_str);

    if huffman_len < octet_str.len() {
        encode_integer_into(huffman_len, 7, 0x80, writer)?;
        let mut encoded = Vec::with_capacity(huffman_len);
        huffman::encode(octet_str, &mut encoded);
        writer.write_all(&encoded)?;
    } else {
        encode_integer_into(octet_str.len(), 7, 0, writer)?;
        writer.write_all(octet_str)?;
    }

    Ok(())
}

/// Writes a dynamic table size update carrying the given size.
pub(crate) fn encode_table_size_into<W: io::Write>(size: usize, writer: &mut W) -> io::Result<()> {
    encode_integer_into(size, 5, 0x20, writer)
}

/// Writes an indexed header field (a header that is fully in the header
/// table), according to the rules of the HPACK spec, section 6.1.
pub(crate) fn encode_indexed_into<W: io::Write>(index: usize, writer: &mut W) -> io::Result<()> {
    // We need to set the most significant bit, since the bit-pattern is
    // `1xxxxxxx` for indexed headers.
    encode_integer_into(index, 7, 0x80, writer)
}

/// Writes a literal whose name is a reference into the header table,
/// followed by the value string.
pub(crate) fn encode_indexed_name_into<W: io::Write>(
    index: usize,
    value: &[u8],
    indexing: bool,
    never_index: bool,
    writer: &mut W,
) -> io::Result<()> {
    let prefix = if indexing { 6 } else { 4 };

    encode_integer_into(index, prefix, pack_first_byte(indexing, never_index), writer)?;
    encode_string_literal_into(value, writer)?;
    Ok(())
}

/// Writes a literal carrying both the name and the value as strings.
pub(crate) fn encode_new_name_into<W: io::Write>(
    name: &[u8],
    value: &[u8],
    indexing: bool,
    never_index: bool,
    writer: &mut W,
) -> io::Result<()> {
    writer.write_all(&[pack_first_byte(indexing, never_index)])?;
    encode_string_literal_into(name, writer)?;
    encode_string_literal_into(value, writer)?;
    Ok(())
}

/// Represents an HPACK encoder. Allows clients to encode arbitrary header
/// lists and tracks the encoding context. That is, encoding subsequent header
/// lists will use the context built by previous encode calls.
///
/// This is the main API for performing HPACK encoding of headers.
pub struct Encoder {
    /// The header table represents the encoder's context
    header_table: HeaderTable,
    /// Hard ceiling this encoder will ever accept for its table.
    encoder_max_table_size: usize,
    /// The smallest size requested since the last emitted context update.
    /// When the size is lowered and raised again before a block is encoded,
    /// both boundaries must be announced, so the low-watermark is remembered
    /// here until it goes out on the wire.
    settings_min_table_size: usize,
    /// Set whenever the table size changes; cleared once the next block has
    /// announced the change.
    context_update: bool,
}

impl Encoder {
    /// Creates a new `Encoder`. `encoder_max_table_size` is the maximum
    /// table size this encoder will ever accept; when it is below the
    /// protocol default of 4096 octets, the first encoded block starts with
    /// a table size update announcing the lower bound.
    pub fn new(encoder_max_table_size: usize) -> Encoder {
        let (context_update, max_table_size) = if encoder_max_table_size < DEFAULT_HEADER_TABLE_SIZE
        {
            (true, encoder_max_table_size)
        } else {
            (false, DEFAULT_HEADER_TABLE_SIZE)
        };

        Encoder {
            header_table: HeaderTable::with_max_size(max_table_size),
            encoder_max_table_size,
            settings_min_table_size: usize::MAX,
            context_update,
        }
    }

    /// Changes the maximum table size. The value is clamped to the ceiling
    /// given at construction, applied to the table immediately, and
    /// announced in the next encoded block.
    pub fn change_table_size(&mut self, n: usize) {
        let n = cmp::min(n, self.encoder_max_table_size);

        self.settings_min_table_size = cmp::min(self.settings_min_table_size, n);
        self.context_update = true;

        self.header_table.set_max_table_size(n);
    }

    /// Encodes the given headers using the HPACK rules and returns a newly
    /// allocated `Vec` containing the bytes representing the encoded header
    /// block.
    pub fn encode<'b, I>(&mut self, headers: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'b Header>,
    {
        let mut encoded: Vec<u8> = Vec::new();
        // Writing into a `Vec` cannot fail.
        self.encode_into(headers, &mut encoded).unwrap();
        encoded
    }

    /// Encodes the given headers into the given `io::Write` instance. If the io::Write raises an
    /// Error at any point, this error is propagated out. Any changes to the internal state of the
    /// encoder will not be rolled back, though, so care should be taken to ensure that the paired
    /// decoder also ends up seeing the same state updates or that their pairing is cancelled.
    pub fn encode_into<'b, I, W>(&mut self, headers: I, writer: &mut W) -> io::Result<()>
    where
        I: IntoIterator<Item = &'b Header>,
        W: io::Write,
    {
        if self.context_update {
            let settings_min_table_size = self.settings_min_table_size;

            self.context_update = false;
            self.settings_min_table_size = usize::MAX;

            let max_table_size = self.header_table.max_table_size();

            // When the size dipped below the current ceiling since the last
            // block, both boundaries are announced: first the low-watermark,
            // then the size now in effect.
            if settings_min_table_size < max_table_size {
                debug!(
                    "announcing table size low-watermark {} before current size",
                    settings_min_table_size
                );
                encode_table_size_into(settings_min_table_size, writer)?;
            }

            debug!("announcing table size {}", max_table_size);
            encode_table_size_into(max_table_size, writer)?;
        }

        for header in headers {
            self.encode_header_into(header, writer)?;
        }
        Ok(())
    }

    /// Encodes a single given header into the given `io::Write` instance.
    pub fn encode_header_into<W: io::Write>(
        &mut self,
        header: &Header,
        writer: &mut W,
    ) -> io::Result<()> {
        let found = self
            .header_table
            .search(&header.name, &header.value, header.never_index);

        if let Some((index, HeaderValueFound::Found)) = found {
            // The full header was found in one of the tables, so we
            // just encode the index.
            return encode_indexed_into(index, writer);
        }

        let indexing = self.should_index(header);

        if indexing {
            // The index written below must refer to the table as the decoder
            // will see it while resolving the name, which is before it
            // performs this same insertion on its side.
            self.header_table.add_header(header.clone());
        }

        match found {
            Some((index, _)) => encode_indexed_name_into(
                index,
                &header.value,
                indexing,
                header.never_index,
                writer,
            ),
            None => encode_new_name_into(
                &header.name,
                &header.value,
                indexing,
                header.never_index,
                writer,
            ),
        }
    }

    /// Whether the given header may be inserted into the dynamic table: the
    /// caller must not have demanded never-indexing, and the name must not be
    /// on the no-indexing list.
    fn should_index(&self, header: &Header) -> bool {
        !header.never_index
            && !NO_INDEXING_NAMES
                .iter()
                .any(|name| crate::const_time_eq(&header.name, name))
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &HeaderTable {
        &self.header_table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Decoder;

    fn hex(data: &[u8]) -> String {
        data.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// A helper function that checks whether the given buffer can be decoded
    /// into a set of headers that corresponds to the given `headers` list.
    /// Relies on using the `Decoder` struct for performing the decoding.
    fn is_decodable(buf: &[u8], expected: &[Header]) -> bool {
        let mut decoder = Decoder::new();
        let mut decoded = Vec::new();
        let mut pos = 0;

        while pos < buf.len() {
            match decoder.decode(&buf[pos..], true) {
                Ok((header, nread)) => {
                    decoded.extend(header);
                    pos += nread;
                }
                Err(_) => return false,
            }
        }

        decoded == expected
    }

    #[test]
    fn test_encode_integer() {
        assert_eq!(encode_integer(10, 5), [10]);
        assert_eq!(encode_integer(1337, 5), [31, 154, 10]);
        assert_eq!(encode_integer(127, 7), [127, 0]);
        assert_eq!(encode_integer(255, 8), [255, 0]);
        assert_eq!(encode_integer(254, 8), [254]);
        assert_eq!(encode_integer(1, 8), [1]);
        assert_eq!(encode_integer(0, 8), [0]);
        assert_eq!(encode_integer(255, 7), [127, 128, 1]);
    }

    /// Tests that encoding only the `:method` header works.
    #[test]
    fn test_encode_only_method() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        let headers = vec![Header::new(&b":method"[..], &b"GET"[..])];

        let result = encoder.encode(&headers);

        // A single indexed octet referencing static entry 2.
        assert_eq!(result, [0x82]);
        assert!(is_decodable(&result, &headers));
    }

    /// Tests that when a single custom header is sent it gets indexed by the
    /// coder.
    #[test]
    fn test_custom_header_gets_indexed() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        let headers = vec![Header::new(&b"custom-key"[..], &b"custom-value"[..])];

        let result = encoder.encode(&headers);
        assert!(is_decodable(&result, &headers));
        // The header is in the encoder's dynamic table...
        assert_eq!(encoder.table().dynamic_len(), 1);
        // ...but also indicated as such in the output.
        assert_eq!(0x40, 0x40 & result[0]);
    }

    /// Tests that when a header gets added to the dynamic table, the encoder
    /// will use the index, instead of the literal representation on the next
    /// encoding of the same header.
    #[test]
    fn test_uses_index_on_second_iteration() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        let headers = vec![Header::new(&b"custom-key"[..], &b"custom-value"[..])];
        // First encoding...
        let _ = encoder.encode(&headers);

        // Encode the same headers again!
        let result = encoder.encode(&headers);

        // The output is a single index octet: most significant bit set, and
        // the other 7 bits give 62, the first dynamic entry.
        assert_eq!(result, [0x80 | 62]);
    }

    /// Tests that when a header name is indexed, but the value isn't, the
    /// header is represented by an index (for the name) and a literal (for
    /// the value).
    #[test]
    fn test_name_indexed_value_not() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        // `:method` is in the static table, but only for GET and POST.
        let headers = vec![Header::new(&b":method"[..], &b"PUT"[..])];

        let result = encoder.encode(&headers);

        // Incremental indexing (0x40) with the lowest `:method` index, 2.
        assert_eq!(result[0], 0x40 | 2);
        assert!(is_decodable(&result, &headers));
    }

    /// Tests that multiple headers are correctly encoded (i.e. can be decoded
    /// back to their original representation).
    #[test]
    fn test_multiple_headers_encoded() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        let headers = vec![
            Header::new(&b"custom-key"[..], &b"custom-value"[..]),
            Header::new(&b":method"[..], &b"GET"[..]),
            Header::new(&b":path"[..], &b"/some/path"[..]),
        ];

        let result = encoder.encode(&headers);

        assert!(is_decodable(&result, &headers));
    }

    /// Tests a full request header list against its known wire encoding.
    #[test]
    fn test_known_block() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        let headers = vec![
            Header::new(&b":method"[..], &b"GET"[..]),
            Header::new(&b":scheme"[..], &b"https"[..]),
            Header::new(&b":authority"[..], &b"example.org"[..]),
            Header::new(&b":path"[..], &b"/"[..]),
            Header::new(&b"user-agent"[..], &b"nghttp2"[..]),
        ];

        let result = encoder.encode(&headers);

        assert_eq!(hex(&result), "828741882f91d35d055cf64d847a85aa69d29ac5");
    }

    /// Tests that names on the no-indexing list are emitted as plain
    /// literals and kept out of the dynamic table.
    #[test]
    fn test_no_indexing_names_stay_out_of_table() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        let headers = vec![Header::new(&b":path"[..], &b"/some/path"[..])];

        let result = encoder.encode(&headers);

        // Literal without indexing, 4-bit prefix, static index 4.
        assert_eq!(result[0], 0x04);
        assert_eq!(encoder.table().dynamic_len(), 0);
        assert!(is_decodable(&result, &headers));
    }

    /// Tests that a never-index header is emitted with the never-indexed
    /// representation and is not inserted into the table, even though its
    /// name would otherwise be indexable.
    #[test]
    fn test_never_index_representation() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        let headers = vec![Header::never_indexed(
            &b"authorization"[..],
            &b"basic aGVsbG86d29ybGQ="[..],
        )];

        let result = encoder.encode(&headers);

        // Indexed name (authorization is static entry 23) with the
        // never-indexed 4-bit pattern.
        assert_eq!(result[0] & 0xf0, 0x10);
        assert_eq!(encoder.table().dynamic_len(), 0);
        assert!(is_decodable(&result, &headers));

        // A fresh name takes the new-name never-indexed form.
        let headers = vec![Header::never_indexed(&b"x-secret"[..], &b"token"[..])];
        let result = encoder.encode(&headers);
        assert_eq!(result[0], 0x10);
        assert_eq!(encoder.table().dynamic_len(), 0);
        assert!(is_decodable(&result, &headers));
    }

    /// Tests that lowering and then raising the table size before encoding
    /// emits two updates, low-watermark first.
    #[test]
    fn test_size_update_emits_low_watermark_then_current() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        encoder.change_table_size(1024);
        encoder.change_table_size(4096);

        let result = encoder.encode(&[]);

        assert_eq!(result, [0x3f, 0xe1, 0x07, 0x3f, 0xe1, 0x1f]);

        // The pending state is cleared; the next block is bare.
        assert_eq!(encoder.encode(&[]), []);
    }

    /// Tests that a single size change emits a single update, and that the
    /// requested size is clamped to the encoder's ceiling.
    #[test]
    fn test_size_update_single_and_clamped() {
        let mut encoder = Encoder::new(DEFAULT_HEADER_TABLE_SIZE);
        encoder.change_table_size(8192);

        // Clamped to 4096; 4096 is not strictly below 4096, so only one
        // update is written.
        let result = encoder.encode(&[]);
        assert_eq!(result, [0x3f, 0xe1, 0x1f]);
        assert_eq!(encoder.table().max_table_size(), 4096);
    }

    /// Tests that an encoder constructed with a sub-default ceiling
    /// announces it in its first block.
    #[test]
    fn test_initial_size_update_below_default() {
        let mut encoder = Encoder::new(1000);

        let result = encoder.encode(&[]);

        // 1000 with a 5-bit prefix: 0x3f, then 1000 - 31 = 969.
        assert_eq!(result, [0x3f, 0xc9, 0x07]);
        assert_eq!(encoder.table().max_table_size(), 1000);
    }
}
