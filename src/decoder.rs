//! Implements the decoding of header blocks using HPACK.
//!
//! The decoder is driven byte by byte and accepts arbitrary fragmentation of
//! its input: `decode` consumes what it can, hands back at most one header
//! field per call, and carries enough state to resume exactly where the
//! previous fragment stopped. This makes it suitable for feeding directly
//! from transport reads without reassembling whole header blocks first.

use std::cmp;

use bytes::Bytes;

use crate::header::Header;
use crate::huffman::HuffmanDecoder;
use crate::HeaderTable;
use crate::DEFAULT_HEADER_TABLE_SIZE;

/// An error that can occur while decoding a header block.
///
/// Every error is terminal: once a `Decoder` has reported one, it refuses
/// all further input with [`DecoderError::Poisoned`].
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError {
    /// A prefixed integer in the input does not fit into 32 bits.
    #[error("prefixed integer overflows 32 bits")]
    IntegerOverflow,
    /// An indexed representation referenced index zero or an index past the
    /// end of the header table.
    #[error("illegal header table index {0}")]
    IllegalIndex(usize),
    /// A dynamic table size update exceeded the ceiling announced through
    /// `Decoder::change_table_size`.
    #[error("table size update {size} exceeds the announced maximum {max}")]
    TableSizeExceedsSetting {
        /// The size carried by the update.
        size: usize,
        /// The announced ceiling.
        max: usize,
    },
    /// A Huffman-coded string literal was malformed.
    #[error("malformed Huffman-coded string")]
    HuffmanDecode,
    /// The input was declared final while the decoder was in the middle of a
    /// header field.
    #[error("input ended prematurely")]
    TruncatedInput,
    /// The decoder is unusable because of an earlier error.
    #[error("cannot process input after an earlier error")]
    Poisoned,
}

/// The kind of representation whose octets are currently being consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opcode {
    None,
    Indexed,
    NewName,
    IndexedName,
}

/// Decoding position within the current representation. The variant plus the
/// carried integer/string counters in the `Decoder` fully describe where to
/// resume when more input arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Opcode,
    ReadTableSize,
    ReadIndex,
    CheckNameLen,
    ReadNameLen,
    ReadNameHuff,
    ReadName,
    CheckValueLen,
    ReadValueLen,
    ReadValueHuff,
    ReadValue,
}

/// Represents an HPACK decoder: an object which, given a stream of octets
/// making up header blocks, emits the header fields they represent and keeps
/// its half of the shared compression context up to date.
pub struct Decoder {
    table: HeaderTable,
    /// Name (when literal) and value octets of the field being decoded,
    /// concatenated. Reused across fields.
    nv_buf: Vec<u8>,
    huffman: HuffmanDecoder,
    /// Resolved name for an indexed-name representation.
    pending_name: Option<Bytes>,
    opcode: Opcode,
    state: State,
    /// Octets left of the string being read, or the partially decoded
    /// prefixed integer.
    left: u32,
    /// Shift to apply to the next integer continuation octet.
    shift: u32,
    /// Length of the name part of `nv_buf` once the name is complete.
    new_name_len: usize,
    /// Ceiling for stream-announced table size updates, set through
    /// `change_table_size`.
    settings_max_table_size: usize,
    /// Whether the string currently being decoded is Huffman-coded.
    huffman_encoded: bool,
    /// Whether the current representation demands insertion into the table.
    index_required: bool,
    /// Whether the current representation is never-indexed.
    never_index: bool,
    /// Set after any error; the decoder is then unusable.
    failed: bool,
}

impl Decoder {
    /// Creates a new decoder with the default 4096-octet table ceiling.
    pub fn new() -> Decoder {
        Decoder {
            table: HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE),
            nv_buf: Vec::new(),
            huffman: HuffmanDecoder::new(),
            pending_name: None,
            opcode: Opcode::None,
            state: State::Opcode,
            left: 0,
            shift: 0,
            new_name_len: 0,
            settings_max_table_size: DEFAULT_HEADER_TABLE_SIZE,
            huffman_encoded: false,
            index_required: false,
            never_index: false,
            failed: false,
        }
    }

    /// Announces a new maximum table size, as negotiated out of band (for
    /// HTTP/2, via `SETTINGS_HEADER_TABLE_SIZE`). The limit applies to every
    /// subsequent in-stream table size update, and the table is shrunk
    /// immediately so it can never sit above the new ceiling while waiting
    /// for the encoder to acknowledge it.
    pub fn change_table_size(&mut self, n: usize) {
        self.settings_max_table_size = n;
        self.table.set_max_table_size(n);
    }

    /// The number of octets buffered for the header field currently being
    /// decoded. Callers can use this to bound memory spent on a single
    /// oversized field.
    pub fn decoding_header_size(&self) -> usize {
        self.nv_buf.len()
    }

    /// Decodes octets from `src` and emits at most one header field.
    ///
    /// Returns the decoded field (if one completed) together with the number
    /// of octets consumed; the caller advances past those octets and calls
    /// again, with more input once `src` is exhausted. `last` tells the
    /// decoder that no further octets exist beyond `src`, which lets it
    /// reject blocks that stop in the middle of a field.
    ///
    /// Once this function returns an error, every subsequent call fails with
    /// [`DecoderError::Poisoned`].
    pub fn decode(
        &mut self,
        src: &[u8],
        last: bool,
    ) -> Result<(Option<Header>, usize), DecoderError> {
        if self.failed {
            return Err(DecoderError::Poisoned);
        }

        let mut cur = 0;

        while cur < src.len() {
            match self.state {
                State::Opcode => {
                    let c = src[cur];

                    if c & 0xe0 == 0x20 {
                        self.state = State::ReadTableSize;
                    } else if c & 0x80 != 0 {
                        self.opcode = Opcode::Indexed;
                        self.state = State::ReadIndex;
                    } else {
                        if c == 0x40 || c == 0x00 || c == 0x10 {
                            self.opcode = Opcode::NewName;
                            self.state = State::CheckNameLen;
                            // A new-name opcode octet carries no index bits;
                            // it is consumed right here. Other opcodes double
                            // as the first octet of a prefixed integer.
                            cur += 1;
                        } else {
                            self.opcode = Opcode::IndexedName;
                            self.state = State::ReadIndex;
                        }

                        self.index_required = c & 0x40 != 0;
                        self.never_index = c & 0xf0 == 0x10;
                    }

                    self.left = 0;
                    self.shift = 0;
                }
                State::ReadTableSize => {
                    let r = read_int(&src[cur..], self.left, self.shift, 5)
                        .map_err(|e| self.fail(e))?;
                    cur += r.nread;
                    self.left = r.value;
                    self.shift = r.shift;

                    if r.value as usize > self.settings_max_table_size {
                        return Err(self.fail(DecoderError::TableSizeExceedsSetting {
                            size: r.value as usize,
                            max: self.settings_max_table_size,
                        }));
                    }

                    if !r.done {
                        self.almost_ok(last)?;
                        return Ok((None, cur));
                    }

                    self.table.set_max_table_size(r.value as usize);
                    self.state = State::Opcode;
                }
                State::ReadIndex => {
                    let prefix = if self.opcode == Opcode::Indexed {
                        7
                    } else if self.index_required {
                        6
                    } else {
                        4
                    };

                    let r = read_int(&src[cur..], self.left, self.shift, prefix)
                        .map_err(|e| self.fail(e))?;
                    cur += r.nread;
                    self.left = r.value;
                    self.shift = r.shift;

                    if r.value as usize > self.table.max_index() {
                        return Err(self.fail(DecoderError::IllegalIndex(r.value as usize)));
                    }

                    if !r.done {
                        self.almost_ok(last)?;
                        return Ok((None, cur));
                    }

                    if r.value == 0 {
                        return Err(self.fail(DecoderError::IllegalIndex(0)));
                    }

                    let index = r.value as usize;
                    let entry = match self.table.get(index) {
                        Some(entry) => entry,
                        None => return Err(self.fail(DecoderError::IllegalIndex(index))),
                    };

                    if self.opcode == Opcode::Indexed {
                        self.state = State::Opcode;
                        return Ok((Some(entry), cur));
                    }

                    self.pending_name = Some(entry.name);
                    self.state = State::CheckValueLen;
                }
                State::CheckNameLen => {
                    // Only peek at the Huffman bit; the octet itself is the
                    // first octet of the length integer.
                    self.huffman_encoded = src[cur] & 0x80 != 0;
                    self.state = State::ReadNameLen;
                    self.left = 0;
                    self.shift = 0;
                }
                State::ReadNameLen => {
                    let r = read_int(&src[cur..], self.left, self.shift, 7)
                        .map_err(|e| self.fail(e))?;
                    cur += r.nread;
                    self.left = r.value;
                    self.shift = r.shift;

                    if !r.done {
                        self.almost_ok(last)?;
                        return Ok((None, cur));
                    }

                    if self.huffman_encoded {
                        self.huffman.reset();
                        self.state = State::ReadNameHuff;
                    } else {
                        self.state = State::ReadName;
                    }
                }
                State::ReadNameHuff => {
                    let nread = self.read_huffman(&src[cur..]).map_err(|e| self.fail(e))?;
                    cur += nread;
                    self.left -= nread as u32;

                    if self.left > 0 {
                        // Source exhausted mid-string; the truncation check
                        // below decides whether that is an error.
                        continue;
                    }

                    self.new_name_len = self.nv_buf.len();
                    self.state = State::CheckValueLen;
                }
                State::ReadName => {
                    let nread = self.read_string(&src[cur..]);
                    cur += nread;
                    self.left -= nread as u32;

                    if self.left > 0 {
                        continue;
                    }

                    self.new_name_len = self.nv_buf.len();
                    self.state = State::CheckValueLen;
                }
                State::CheckValueLen => {
                    self.huffman_encoded = src[cur] & 0x80 != 0;
                    self.state = State::ReadValueLen;
                    self.left = 0;
                    self.shift = 0;
                }
                State::ReadValueLen => {
                    let r = read_int(&src[cur..], self.left, self.shift, 7)
                        .map_err(|e| self.fail(e))?;
                    cur += r.nread;
                    self.left = r.value;
                    self.shift = r.shift;

                    if !r.done {
                        self.almost_ok(last)?;
                        return Ok((None, cur));
                    }

                    if self.left == 0 {
                        // Empty value: the field is complete.
                        let header = self.emit();
                        self.state = State::Opcode;
                        return Ok((Some(header), cur));
                    }

                    if self.huffman_encoded {
                        self.huffman.reset();
                        self.state = State::ReadValueHuff;
                    } else {
                        self.state = State::ReadValue;
                    }
                }
                State::ReadValueHuff => {
                    let nread = self.read_huffman(&src[cur..]).map_err(|e| self.fail(e))?;
                    cur += nread;
                    self.left -= nread as u32;

                    if self.left > 0 {
                        continue;
                    }

                    let header = self.emit();
                    self.state = State::Opcode;
                    return Ok((Some(header), cur));
                }
                State::ReadValue => {
                    let nread = self.read_string(&src[cur..]);
                    cur += nread;
                    self.left -= nread as u32;

                    if self.left > 0 {
                        continue;
                    }

                    let header = self.emit();
                    self.state = State::Opcode;
                    return Ok((Some(header), cur));
                }
            }
        }

        self.almost_ok(last)?;
        Ok((None, cur))
    }

    /// Latches the failure flag while passing the error through, so that the
    /// `?` operator poisons the decoder on every error path.
    fn fail(&mut self, error: DecoderError) -> DecoderError {
        self.failed = true;
        error
    }

    /// Decoding stopped because the source ran out. That is fine in the
    /// middle of a block, but if the caller declared the input final the
    /// state machine must be sitting at a field boundary.
    fn almost_ok(&mut self, last: bool) -> Result<(), DecoderError> {
        if last && self.state != State::Opcode {
            return Err(self.fail(DecoderError::TruncatedInput));
        }
        Ok(())
    }

    /// Feeds up to `left` octets of Huffman-coded string into the
    /// concatenation buffer. Returns the number of octets consumed.
    fn read_huffman(&mut self, src: &[u8]) -> Result<usize, DecoderError> {
        let left = self.left as usize;
        let (take, last) = if src.len() >= left {
            (left, true)
        } else {
            (src.len(), false)
        };

        self.huffman.decode(&mut self.nv_buf, &src[..take], last)?;

        Ok(take)
    }

    /// Feeds up to `left` octets of verbatim string into the concatenation
    /// buffer. Returns the number of octets consumed.
    fn read_string(&mut self, src: &[u8]) -> usize {
        let take = cmp::min(self.left as usize, src.len());
        self.nv_buf.extend_from_slice(&src[..take]);
        take
    }

    /// Builds the completed header field, updates the dynamic table when the
    /// representation asks for it, and clears the per-field buffers.
    fn emit(&mut self) -> Header {
        let (name, value) = match self.opcode {
            Opcode::NewName => (
                Bytes::copy_from_slice(&self.nv_buf[..self.new_name_len]),
                Bytes::copy_from_slice(&self.nv_buf[self.new_name_len..]),
            ),
            _ => {
                let name = self
                    .pending_name
                    .take()
                    .expect("indexed-name representation without a resolved name");
                (name, Bytes::copy_from_slice(&self.nv_buf))
            }
        };

        self.nv_buf.clear();

        let header = Header {
            name,
            value,
            never_index: self.never_index,
        };

        if self.index_required {
            self.table.add_header(header.clone());
        }

        header
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &HeaderTable {
        &self.table
    }
}

impl Default for Decoder {
    fn default() -> Decoder {
        Decoder::new()
    }
}

/// Result of one `read_int` step.
#[derive(Debug)]
pub(crate) struct IntRead {
    /// The integer decoded so far. Final only when `done` is set.
    pub value: u32,
    /// Whether the integer terminated within the given source.
    pub done: bool,
    /// Shift to pass back in when resuming.
    pub shift: u32,
    /// Number of octets consumed from the source.
    pub nread: usize,
}

/// Reads a prefixed integer from `src`.
///
/// To support streaming, the caller passes the accumulator and shift from the
/// previous call (`initial == 0` means the integer has not started yet, and
/// `src` must then be non-empty). Integers that do not fit into 32 bits are
/// rejected rather than silently wrapped.
pub(crate) fn read_int(
    src: &[u8],
    initial: u32,
    initial_shift: u32,
    prefix: u32,
) -> Result<IntRead, DecoderError> {
    let k: u8 = ((1u32 << prefix) - 1) as u8;
    let mut n = initial;
    let mut shift = initial_shift;
    let mut nread = 0;

    if initial == 0 {
        let c = src[0];
        nread += 1;

        if c & k != k {
            return Ok(IntRead {
                value: (c & k) as u32,
                done: true,
                shift,
                nread,
            });
        }

        n = k as u32;

        if nread == src.len() {
            return Ok(IntRead {
                value: n,
                done: false,
                shift,
                nread,
            });
        }
    }

    while nread < src.len() {
        let c = src[nread];
        let add = (c & 0x7f) as u32;

        if u32::MAX.checked_shr(shift).unwrap_or(0) < add {
            return Err(DecoderError::IntegerOverflow);
        }

        let add = add.checked_shl(shift).unwrap_or(0);

        if u32::MAX - add < n {
            return Err(DecoderError::IntegerOverflow);
        }

        n += add;

        if c & 0x80 == 0 {
            break;
        }

        nread += 1;
        shift += 7;
    }

    if nread == src.len() {
        return Ok(IntRead {
            value: n,
            done: false,
            shift,
            nread,
        });
    }

    nread += 1;

    Ok(IntRead {
        value: n,
        done: true,
        shift,
        nread,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_indexed_name_into;
    use crate::encoder::encode_integer;
    use crate::encoder::encode_new_name_into;
    use crate::encoder::encode_table_size_into;

    fn decode_one(decoder: &mut Decoder, src: &[u8]) -> (Header, usize) {
        let (header, nread) = decoder.decode(src, true).unwrap();
        (header.expect("expected a complete header"), nread)
    }

    /// Tests the RFC 7541 C.1 integer examples, whole-buffer and resumed one
    /// octet at a time.
    #[test]
    fn test_read_int_rfc7541_examples() {
        // C.1.1. Encoding 10 Using a 5-Bit Prefix
        let r = read_int(&[0x0a], 0, 0, 5).unwrap();
        assert!(r.done);
        assert_eq!(r.value, 10);
        assert_eq!(r.nread, 1);

        // C.1.2. Encoding 1337 Using a 5-Bit Prefix
        let r = read_int(&[0x1f, 0x9a, 0x0a], 0, 0, 5).unwrap();
        assert!(r.done);
        assert_eq!(r.value, 1337);
        assert_eq!(r.nread, 3);

        // C.1.3. Encoding 42 Starting at an Octet Boundary
        let r = read_int(&[0x2a], 0, 0, 8).unwrap();
        assert!(r.done);
        assert_eq!(r.value, 42);

        // 1337 again, resumed across three one-octet fragments.
        let r = read_int(&[0x1f], 0, 0, 5).unwrap();
        assert!(!r.done);
        assert_eq!((r.value, r.shift, r.nread), (31, 0, 1));
        let r = read_int(&[0x9a], 31, 0, 5).unwrap();
        assert!(!r.done);
        assert_eq!((r.value, r.shift, r.nread), (57, 7, 1));
        let r = read_int(&[0x0a], 57, 7, 5).unwrap();
        assert!(r.done);
        assert_eq!((r.value, r.nread), (1337, 1));
    }

    /// Tests the integer round trip for boundary values of every prefix
    /// size.
    #[test]
    fn test_read_int_round_trip() {
        for prefix in 1..=8u8 {
            let k = (1u32 << prefix) - 1;
            let interesting = [
                0,
                1,
                k.saturating_sub(1),
                k,
                k + 1,
                127,
                128,
                255,
                256,
                16383,
                1 << 20,
                u32::MAX - 1,
                u32::MAX,
            ];

            for &n in &interesting {
                let encoded = encode_integer(n as usize, prefix);
                let r = read_int(&encoded, 0, 0, prefix as u32).unwrap();
                assert!(r.done, "n={} prefix={}", n, prefix);
                assert_eq!(r.value, n, "n={} prefix={}", n, prefix);
                assert_eq!(r.nread, encoded.len(), "n={} prefix={}", n, prefix);
            }
        }
    }

    /// Tests that an encoded integer just past the 32-bit range is rejected
    /// with the dedicated overflow error.
    #[test]
    fn test_read_int_overflow() {
        let encoded = encode_integer(u32::MAX as usize + 1, 7);

        assert_eq!(
            read_int(&encoded, 0, 0, 7).unwrap_err(),
            DecoderError::IntegerOverflow
        );

        // The maximum itself is fine.
        let encoded = encode_integer(u32::MAX as usize, 7);
        let r = read_int(&encoded, 0, 0, 7).unwrap();
        assert!(r.done);
        assert_eq!(r.value, u32::MAX);
    }

    /// Tests decoding indexed header fields resolved from the static table.
    #[test]
    fn test_decode_indexed_static() {
        let mut decoder = Decoder::new();

        let (header, nread) = decode_one(&mut decoder, &[0x82]);
        assert_eq!(nread, 1);
        assert_eq!(header, Header::new(&b":method"[..], &b"GET"[..]));

        let (header, _) = decode_one(&mut decoder, &[0x84]);
        assert_eq!(header, Header::new(&b":path"[..], &b"/"[..]));

        let (header, _) = decode_one(&mut decoder, &[0x85]);
        assert_eq!(header, Header::new(&b":path"[..], &b"/index.html"[..]));
    }

    /// Tests decoding literals with an indexed name: one with incremental
    /// indexing, one never-indexed.
    #[test]
    fn test_decode_indexed_name() {
        let mut decoder = Decoder::new();
        let mut input = Vec::new();

        // cache-control: private, with incremental indexing.
        encode_indexed_name_into(24, b"private", true, false, &mut input).unwrap();
        let nread1 = input.len();
        // authorization: basic aGVsbG86d29ybGQ=, never indexed.
        encode_indexed_name_into(23, b"basic aGVsbG86d29ybGQ=", false, true, &mut input).unwrap();
        let nread2 = input.len() - nread1;

        let (header, nread) = decode_one(&mut decoder, &input);
        assert_eq!(nread, nread1);
        assert_eq!(header, Header::new(&b"cache-control"[..], &b"private"[..]));
        // The indexed literal landed in the dynamic table.
        assert_eq!(decoder.table().dynamic_len(), 1);

        let (header, nread) = decode_one(&mut decoder, &input[nread1..]);
        assert_eq!(nread, nread2);
        assert_eq!(
            header,
            Header::never_indexed(&b"authorization"[..], &b"basic aGVsbG86d29ybGQ="[..])
        );
        // The never-indexed literal did not.
        assert_eq!(decoder.table().dynamic_len(), 1);
    }

    /// Tests decoding literals carrying a new name.
    #[test]
    fn test_decode_new_name() {
        let mut decoder = Decoder::new();
        let mut input = Vec::new();

        encode_new_name_into(b"cache-control", b"private", true, false, &mut input).unwrap();
        let nread1 = input.len();
        encode_new_name_into(b"authorization", b"basic aGVsbG86d29ybGQ=", false, true, &mut input)
            .unwrap();
        let nread2 = input.len() - nread1;

        let (header, nread) = decode_one(&mut decoder, &input);
        assert_eq!(nread, nread1);
        assert_eq!(header, Header::new(&b"cache-control"[..], &b"private"[..]));

        let (header, nread) = decode_one(&mut decoder, &input[nread1..]);
        assert_eq!(nread, nread2);
        assert_eq!(
            header,
            Header::never_indexed(&b"authorization"[..], &b"basic aGVsbG86d29ybGQ="[..])
        );
    }

    /// Tests that an indexed field resolved from the dynamic table carries
    /// the stored flags and strings verbatim.
    #[test]
    fn test_decode_indexed_dynamic() {
        let mut decoder = Decoder::new();
        let mut input = Vec::new();

        encode_new_name_into(b"x-custom", b"v1", true, false, &mut input).unwrap();
        let split = input.len();
        // Index 62: the entry just inserted.
        input.push(0x80 | 62);

        let (first, nread) = decode_one(&mut decoder, &input);
        assert_eq!(nread, split);

        let (second, nread) = decode_one(&mut decoder, &input[split..]);
        assert_eq!(nread, 1);
        assert_eq!(first, second);
        assert_eq!(second, Header::new(&b"x-custom"[..], &b"v1"[..]));
    }

    /// Tests that index zero and out-of-range indices are rejected.
    #[test]
    fn test_decode_illegal_index() {
        let mut decoder = Decoder::new();
        assert_eq!(
            decoder.decode(&[0x80], true).unwrap_err(),
            DecoderError::IllegalIndex(0)
        );

        // The table is empty beyond the 61 static entries.
        let mut decoder = Decoder::new();
        assert_eq!(
            decoder.decode(&[0x80 | 62], true).unwrap_err(),
            DecoderError::IllegalIndex(62)
        );
    }

    /// Tests that a block ending in the middle of a field is reported as
    /// truncated, and that the decoder is poisoned afterwards.
    #[test]
    fn test_decode_string_ends_prematurely() {
        let mut decoder = Decoder::new();
        let mut input = Vec::new();
        encode_new_name_into(b"authorization", b"basic aGVsbG86d29ybGQ=", false, true, &mut input)
            .unwrap();

        let err = decoder
            .decode(&input[..input.len() - 1], true)
            .unwrap_err();
        assert_eq!(err, DecoderError::TruncatedInput);

        // Further calls fail without looking at the input.
        assert_eq!(decoder.decode(&[], true).unwrap_err(), DecoderError::Poisoned);
        assert_eq!(
            decoder.decode(&[0x82], true).unwrap_err(),
            DecoderError::Poisoned
        );
    }

    /// Tests that a partial field is fine while the block is not final, and
    /// that the field completes once the rest arrives.
    #[test]
    fn test_decode_resumes_across_fragments() {
        let mut decoder = Decoder::new();
        let mut input = Vec::new();
        encode_new_name_into(b"x-custom-header", b"some opaque value", true, false, &mut input)
            .unwrap();

        let split = input.len() - 2;
        let (header, nread) = decoder.decode(&input[..split], false).unwrap();
        assert!(header.is_none());
        assert_eq!(nread, split);
        assert!(decoder.decoding_header_size() > 0);

        let (header, nread) = decoder.decode(&input[split..], true).unwrap();
        assert_eq!(nread, 2);
        assert_eq!(
            header.unwrap(),
            Header::new(&b"x-custom-header"[..], &b"some opaque value"[..])
        );
        assert_eq!(decoder.decoding_header_size(), 0);
    }

    /// Tests that an in-stream table size update within the announced ceiling
    /// is applied to the table.
    #[test]
    fn test_decode_table_size_update() {
        let mut decoder = Decoder::new();
        let mut input = Vec::new();
        encode_table_size_into(100, &mut input).unwrap();

        let (header, nread) = decoder.decode(&input, true).unwrap();
        assert!(header.is_none());
        assert_eq!(nread, input.len());
        assert_eq!(decoder.table().max_table_size(), 100);
    }

    /// Tests that a table size update above the announced ceiling fails the
    /// block.
    #[test]
    fn test_decode_table_size_update_exceeds_setting() {
        let mut decoder = Decoder::new();
        decoder.change_table_size(1024);

        let mut input = Vec::new();
        encode_table_size_into(3000, &mut input).unwrap();

        assert_eq!(
            decoder.decode(&input, true).unwrap_err(),
            DecoderError::TableSizeExceedsSetting {
                size: 3000,
                max: 1024,
            }
        );
    }

    /// Tests that `change_table_size` shrinks the table immediately, before
    /// any in-stream update arrives.
    #[test]
    fn test_change_table_size_applies_immediately() {
        let mut decoder = Decoder::new();
        let mut input = Vec::new();
        encode_new_name_into(b"x-a", b"111111", true, false, &mut input).unwrap();
        encode_new_name_into(b"x-b", b"222222", true, false, &mut input).unwrap();

        let (_, nread1) = decode_one(&mut decoder, &input);
        decode_one(&mut decoder, &input[nread1..]);
        assert_eq!(decoder.table().dynamic_len(), 2);

        decoder.change_table_size(41);
        assert_eq!(decoder.table().dynamic_len(), 1);
        assert!(decoder.table().dynamic_size() <= 41);
    }

    /// Tests that a malformed Huffman string poisons the decoder with the
    /// dedicated error.
    #[test]
    fn test_decode_bad_huffman() {
        let mut decoder = Decoder::new();
        // New-name literal, Huffman flag set, length 4, then the EOS symbol
        // (30 one-bits padded with ones), which is never legal in a string.
        let input = [0x00, 0x84, 0xff, 0xff, 0xff, 0xff];

        assert_eq!(
            decoder.decode(&input, true).unwrap_err(),
            DecoderError::HuffmanDecode
        );
        assert_eq!(decoder.decode(&[], true).unwrap_err(), DecoderError::Poisoned);
    }
}
