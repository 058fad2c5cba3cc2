use bytes::Bytes;

use crate::HEADER_ENTRY_OVERHEAD;

/// A single header field.
///
/// Names and values are opaque byte strings; the codec reproduces them
/// verbatim (Huffman coding is a transport encoding, not a normalization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header field name.
    pub name: Bytes,
    /// Header field value.
    pub value: Bytes,
    /// Set when this field must never be inserted into an indexing table,
    /// neither here nor by any intermediary re-encoding it.
    pub never_index: bool,
}

impl Header {
    /// Creates a regular header field.
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Header {
        Header {
            name: name.into(),
            value: value.into(),
            never_index: false,
        }
    }

    /// Creates a header field carrying the never-index flag, for values such
    /// as credentials that must not end up in any compression context.
    pub fn never_indexed(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Header {
        Header {
            name: name.into(),
            value: value.into(),
            never_index: true,
        }
    }

    /// The space this field occupies in a dynamic table, as defined by the
    /// HPACK spec: name length plus value length plus a fixed 32-octet
    /// per-entry overhead.
    pub(crate) fn space(&self) -> usize {
        self.name.len() + self.value.len() + HEADER_ENTRY_OVERHEAD
    }
}
