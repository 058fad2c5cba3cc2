//! A crate implementing HPACK functionality. Exposes a simple API for
//! performing the encoding and decoding of header sets, according to the
//! HPACK spec (RFC 7541).
//!
//! The codec is a strict block codec: it performs no network I/O and no
//! framing, and it does not enforce HTTP semantics such as pseudo-header
//! ordering. An [`Encoder`] turns a list of header fields into a compressed
//! header block; a [`Decoder`] consumes the block, in arbitrarily small
//! fragments, and yields the fields back one at a time. The two peers stay
//! in sync through dynamic table size updates carried in the blocks
//! themselves.

#[macro_use]
extern crate log;

pub use self::decoder::Decoder;
pub use self::decoder::DecoderError;
pub use self::encoder::Encoder;
pub use self::header::Header;

use crate::dynamic_table::DynamicTable;
use crate::static_table::STATIC_TABLE;
use crate::static_table::STATIC_TABLE_LENGTH;

use bytes::Bytes;

pub mod decoder;
mod dynamic_table;
pub mod encoder;
mod header;
mod huffman;
mod static_table;

/// Default maximum size of the dynamic table, used by both the encoder and
/// the decoder until a size change is negotiated.
pub const DEFAULT_HEADER_TABLE_SIZE: usize = 4096;

/// Per-entry overhead the HPACK spec charges against the dynamic table
/// budget, on top of the name and value octets.
pub(crate) const HEADER_ENTRY_OVERHEAD: usize = 32;

/// Compares two byte strings in constant time, so that searching the header
/// table for secret-bearing fields (authorization, cookies) does not leak
/// their contents through a timing oracle.
pub(crate) fn const_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut c = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        c |= x ^ y;
    }
    c == 0
}

#[derive(Eq, PartialEq, Debug)]
pub(crate) enum HeaderValueFound {
    Found,
    NameOnlyFound,
}

/// The struct represents the header table obtained by merging the static and
/// dynamic tables into a single index address space, as described in section
/// `2.3.3.` of the HPACK spec.
pub(crate) struct HeaderTable {
    dynamic_table: DynamicTable,
}

impl HeaderTable {
    /// Creates a new header table whose dynamic part is bounded by the given
    /// maximum size.
    pub fn with_max_size(max_size: usize) -> HeaderTable {
        HeaderTable {
            dynamic_table: DynamicTable::with_size(max_size),
        }
    }

    /// The largest valid index in the single address space: the static
    /// entries followed by however many dynamic entries are currently live.
    pub fn max_index(&self) -> usize {
        STATIC_TABLE_LENGTH + self.dynamic_table.len()
    }

    /// The number of octets the dynamic part currently occupies.
    #[cfg(test)]
    pub fn dynamic_size(&self) -> usize {
        self.dynamic_table.size()
    }

    /// The number of entries in the dynamic part.
    #[cfg(test)]
    pub fn dynamic_len(&self) -> usize {
        self.dynamic_table.len()
    }

    /// The current ceiling of the dynamic part.
    pub fn max_table_size(&self) -> usize {
        self.dynamic_table.max_table_size()
    }

    /// Changes the ceiling of the dynamic part, evicting entries from the
    /// back until the table fits.
    pub fn set_max_table_size(&mut self, new_max_size: usize) {
        self.dynamic_table.set_max_table_size(new_max_size);
    }

    /// Adds the given header to the table. Of course, this means that the new
    /// header is added to the dynamic part of the table.
    ///
    /// If the size of the new header is larger than the current maximum table
    /// size of the dynamic table, the effect will be that the dynamic table
    /// gets emptied and the new header does *not* get inserted into it.
    pub fn add_header(&mut self, header: Header) {
        self.dynamic_table.add_header(header);
    }

    /// Returns a copy of the header with the given index in the table.
    ///
    /// The table is 1-indexed and constructed in such a way that the first
    /// entries belong to the static table, followed by entries in the dynamic
    /// table. They are merged into a single index address space, though.
    ///
    /// This is according to the [HPACK spec, section 2.3.3.]
    /// (http://http2.github.io/http2-spec/compression.html#index.address.space)
    pub fn get(&self, index: usize) -> Option<Header> {
        // The IETF defined table indexing as 1-based.
        // So, before starting, make sure the given index is within the proper
        // bounds.
        let real_index = if index > 0 { index - 1 } else { return None };

        if real_index < STATIC_TABLE_LENGTH {
            let (name, value) = STATIC_TABLE[real_index];
            Some(Header {
                name: Bytes::from_static(name),
                value: Bytes::from_static(value),
                never_index: false,
            })
        } else {
            self.dynamic_table
                .get(real_index - STATIC_TABLE_LENGTH)
                .cloned()
        }
    }

    /// Finds the given header in the header table. Tries to match both the
    /// header name and value to one of the headers in the table. If no such
    /// header exists, then falls back to returning one that matched only the
    /// name.
    ///
    /// The static table is scanned before the dynamic table, and the lowest
    /// index with a matching name wins. When `never_index` is set, the
    /// name+value match path is suppressed and the dynamic table is not
    /// consulted at all: a never-indexed field must not be represented by a
    /// full index, and the caller will not insert it either.
    ///
    /// # Returns
    ///
    /// An `Option`, where `Some` corresponds to a tuple representing the index
    /// of the header in the header tables (the 1-based index that HPACK uses)
    /// and a `HeaderValueFound` indicating whether the value of the header
    /// also matched.
    pub fn search(
        &self,
        name: &[u8],
        value: &[u8],
        never_index: bool,
    ) -> Option<(usize, HeaderValueFound)> {
        let mut matching_name: Option<usize> = None;

        for (i, &(n, v)) in STATIC_TABLE.iter().enumerate() {
            if const_time_eq(name, n) {
                if matching_name.is_none() {
                    matching_name = Some(i + 1);
                }

                if !never_index && const_time_eq(value, v) {
                    // Both name and value matched: return it immediately.
                    return Some((i + 1, HeaderValueFound::Found));
                }
            }
        }

        if never_index {
            return matching_name.map(|i| (i, HeaderValueFound::NameOnlyFound));
        }

        for (i, entry) in self.dynamic_table.iter().enumerate() {
            if const_time_eq(name, &entry.name) {
                if matching_name.is_none() {
                    matching_name = Some(STATIC_TABLE_LENGTH + i + 1);
                }

                if const_time_eq(value, &entry.value) {
                    return Some((STATIC_TABLE_LENGTH + i + 1, HeaderValueFound::Found));
                }
            }
        }

        // Finally, if there's no header with a matching name and value,
        // return one that matched only the name, if that *was* found.
        matching_name.map(|i| (i, HeaderValueFound::NameOnlyFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that indexing the header table with indices that correspond to
    /// entries found in the static table works.
    #[test]
    fn test_header_table_index_static() {
        let table = HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE);

        for (index, &(k, v)) in STATIC_TABLE.iter().enumerate() {
            let header = table.get(index + 1).unwrap();
            assert_eq!(&header.name[..], k);
            assert_eq!(&header.value[..], v);
            assert!(!header.never_index);
        }
    }

    /// Tests that when the given index is out of bounds, the `HeaderTable`
    /// returns a `None`
    #[test]
    fn test_header_table_index_out_of_bounds() {
        let table = HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE);

        assert!(table.get(0).is_none());
        assert!(table.get(STATIC_TABLE_LENGTH + 1).is_none());
    }

    /// Tests that indexing the header table with indices that correspond to
    /// entries found in the dynamic table works.
    #[test]
    fn test_header_table_index_dynamic() {
        let mut table = HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE);
        let header = Header::new(&b"a"[..], &b"b"[..]);

        table.add_header(header.clone());

        assert_eq!(table.get(STATIC_TABLE_LENGTH + 1).unwrap(), header);
        assert_eq!(table.max_index(), STATIC_TABLE_LENGTH + 1);
    }

    /// Tests that searching for an entry fully present in the static table
    /// (both name and value) works correctly.
    #[test]
    fn test_search_static_full() {
        let table = HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE);

        assert_eq!(
            table.search(b":method", b"GET", false).unwrap(),
            (2, HeaderValueFound::Found)
        );
        assert_eq!(
            table.search(b":path", b"/index.html", false).unwrap(),
            (5, HeaderValueFound::Found)
        );
    }

    /// Tests that searching for an entry which matches a static name, but not
    /// any value, falls back to the lowest index with that name.
    #[test]
    fn test_search_static_name_only() {
        let table = HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE);

        assert_eq!(
            table.search(b":method", b"PUT", false).unwrap(),
            (2, HeaderValueFound::NameOnlyFound)
        );
        assert_eq!(
            table.search(b":status", b"333", false).unwrap(),
            (8, HeaderValueFound::NameOnlyFound)
        );
        assert_eq!(
            table.search(b"www-authenticate", b"asdf", false).unwrap(),
            (61, HeaderValueFound::NameOnlyFound)
        );
    }

    /// Tests that searching for an entry which is only in the dynamic table
    /// works correctly.
    #[test]
    fn test_search_dynamic_full() {
        let mut table = HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE);
        table.add_header(Header::new(&b"x-custom-header"[..], &b"stuff"[..]));

        assert_eq!(
            table.search(b"x-custom-header", b"stuff", false).unwrap(),
            (STATIC_TABLE_LENGTH + 1, HeaderValueFound::Found)
        );
        assert_eq!(
            table
                .search(b"x-custom-header", b"different-stuff", false)
                .unwrap(),
            (STATIC_TABLE_LENGTH + 1, HeaderValueFound::NameOnlyFound)
        );
    }

    /// Tests that a never-indexed search suppresses full matches and ignores
    /// the dynamic table entirely.
    #[test]
    fn test_search_never_index() {
        let mut table = HeaderTable::with_max_size(DEFAULT_HEADER_TABLE_SIZE);
        table.add_header(Header::new(&b"x-token"[..], &b"s3cr3t"[..]));

        // Full static match degraded to a name match.
        assert_eq!(
            table.search(b":method", b"GET", true).unwrap(),
            (2, HeaderValueFound::NameOnlyFound)
        );
        // Dynamic entries are not even considered.
        assert_eq!(table.search(b"x-token", b"s3cr3t", true), None);
    }

    #[test]
    fn test_const_time_eq() {
        assert!(const_time_eq(b"", b""));
        assert!(const_time_eq(b"abc", b"abc"));
        assert!(!const_time_eq(b"abc", b"abd"));
        assert!(!const_time_eq(b"abc", b"ab"));
    }
}
