use std::collections::VecDeque;
use std::fmt;

use crate::header::Header;

/// A struct representing the dynamic table that needs to be maintained by the
/// coder.
///
/// The dynamic table contains a number of recently used headers. The size of
/// the table is constrained to a certain number of octets. If on insertion of
/// a new header into the table, the table would exceed the maximum size,
/// headers are evicted in a FIFO fashion until there is enough room for the
/// new header to be inserted. (Therefore, it is possible that though all
/// elements end up being evicted, there is still not enough space for the new
/// header: when the size of this individual header exceeds the maximum size of
/// the table.)
///
/// The current size of the table is calculated, based on the IETF definition,
/// as the sum of sizes of each header stored within the table, where the size
/// of an individual header is
/// `len_in_octets(header_name) + len_in_octets(header_value) + 32`.
///
/// Note: the maximum size of the dynamic table does not have to be equal to
/// the maximum header table size as defined by a "higher level" protocol
/// (such as the `SETTINGS_HEADER_TABLE_SIZE` setting in HTTP/2), since HPACK
/// can choose to modify the dynamic table size on the fly (as long as it keeps
/// it below the maximum value set by the protocol). So, the `DynamicTable`
/// only cares about the maximum size as set by the HPACK {en,de}coder and lets
/// *it* worry about making certain that the changes are valid according to
/// the (current) constraints of the protocol.
pub(crate) struct DynamicTable {
    table: VecDeque<Header>,
    size: usize,
    max_size: usize,
}

impl DynamicTable {
    /// Creates a new empty dynamic table with the given maximum size.
    pub fn with_size(max_size: usize) -> DynamicTable {
        DynamicTable {
            table: VecDeque::new(),
            size: 0,
            max_size,
        }
    }

    /// Returns the current size of the table in octets, as defined by the IETF
    /// HPACK spec.
    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of headers in the dynamic table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns an `Iterator` through the headers stored in the `DynamicTable`,
    /// from the most recently inserted to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.table.iter()
    }

    /// Sets the new maximum table size.
    ///
    /// If the current size of the table is larger than the new maximum size,
    /// existing headers are evicted in a FIFO fashion until the size drops
    /// below the new maximum.
    pub fn set_max_table_size(&mut self, new_max_size: usize) {
        self.max_size = new_max_size;
        // Make the table size fit within the new constraints.
        self.consolidate_table();
    }

    /// Returns the maximum size of the table in octets.
    pub fn max_table_size(&self) -> usize {
        self.max_size
    }

    /// Add a new header to the dynamic table.
    ///
    /// The table automatically gets resized, if necessary.
    ///
    /// Do note that, under the HPACK rules, it is possible the given header
    /// is not found in the dynamic table after this operation finishes, in
    /// case the total size of the given header exceeds the maximum size of the
    /// dynamic table.
    pub fn add_header(&mut self, header: Header) {
        self.size += header.space();
        debug!("new dynamic table size {}", self.size);
        // Now add it to the internal buffer
        self.table.push_front(header);
        // ...and make sure we're not over the maximum size.
        self.consolidate_table();
        debug!("after consolidation dynamic table size {}", self.size);
    }

    /// Consolidates the table entries so that the table size is below the
    /// maximum allowed size, by evicting headers from the table in a FIFO
    /// fashion.
    fn consolidate_table(&mut self) {
        while self.size > self.max_size {
            {
                let last_header = match self.table.back() {
                    Some(x) => x,
                    None => {
                        // Can never happen as the size of the table must reach
                        // 0 by the time we've exhausted all elements.
                        panic!("size of table != 0, but no headers left!");
                    }
                };
                self.size -= last_header.space();
            }
            self.table.pop_back();
        }
    }

    /// Returns a reference to the header at the given index, if found in the
    /// dynamic table. Index 0 is the most recently inserted header.
    pub fn get(&self, index: usize) -> Option<&Header> {
        self.table.get(index)
    }
}

impl fmt::Debug for DynamicTable {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &[u8], value: &[u8]) -> Header {
        Header::new(name.to_vec(), value.to_vec())
    }

    #[test]
    fn test_dynamic_table_size_calculation_simple() {
        let mut table = DynamicTable::with_size(4096);
        // Sanity check
        assert_eq!(0, table.size());

        table.add_header(header(b"a", b"b"));

        assert_eq!(32 + 2, table.size());
    }

    #[test]
    fn test_dynamic_table_size_calculation() {
        let mut table = DynamicTable::with_size(4096);

        table.add_header(header(b"a", b"b"));
        table.add_header(header(b"123", b"456"));
        table.add_header(header(b"a", b"b"));

        assert_eq!(3 * 32 + 2 + 6 + 2, table.size());
    }

    /// Tests that the `DynamicTable` gets correctly resized (by evicting old
    /// headers) if it exceeds the maximum size on an insertion.
    #[test]
    fn test_dynamic_table_auto_resize() {
        let mut table = DynamicTable::with_size(38);
        table.add_header(header(b"a", b"b"));
        assert_eq!(32 + 2, table.size());

        table.add_header(header(b"123", b"456"));

        // Resized?
        assert_eq!(32 + 6, table.size());
        // Only has the second header?
        assert_eq!(1, table.len());
        assert_eq!(table.get(0).unwrap(), &header(b"123", b"456"));
    }

    /// Tests that when inserting a new header whose size is larger than the
    /// size of the entire table, the table is fully emptied.
    #[test]
    fn test_dynamic_table_auto_resize_into_empty() {
        let mut table = DynamicTable::with_size(38);
        table.add_header(header(b"a", b"b"));
        assert_eq!(32 + 2, table.size());

        table.add_header(header(b"123", b"4567"));

        // Resized and empty?
        assert_eq!(0, table.size());
        assert_eq!(0, table.len());
    }

    /// Tests that when changing the maximum size of the `DynamicTable`, the
    /// headers are correctly evicted in order to keep its size below the new
    /// max.
    #[test]
    fn test_dynamic_table_change_max_size() {
        let mut table = DynamicTable::with_size(4096);
        table.add_header(header(b"a", b"b"));
        table.add_header(header(b"123", b"456"));
        table.add_header(header(b"c", b"d"));
        assert_eq!(3 * 32 + 2 + 6 + 2, table.size());

        table.set_max_table_size(38);

        assert_eq!(32 + 2, table.size());
        assert_eq!(1, table.len());
        assert_eq!(table.get(0).unwrap(), &header(b"c", b"d"));
    }

    /// Tests that setting the maximum table size to 0 clears the dynamic
    /// table.
    #[test]
    fn test_dynamic_table_clear() {
        let mut table = DynamicTable::with_size(4096);
        table.add_header(header(b"a", b"b"));
        table.add_header(header(b"123", b"456"));
        table.add_header(header(b"c", b"d"));
        assert_eq!(3 * 32 + 2 + 6 + 2, table.size());

        table.set_max_table_size(0);

        assert_eq!(0, table.len());
        assert_eq!(0, table.size());
        assert_eq!(0, table.max_table_size());
    }

    /// Tests that when the initial max size of the table is 0, nothing
    /// can be added to the table.
    #[test]
    fn test_dynamic_table_max_size_zero() {
        let mut table = DynamicTable::with_size(0);

        table.add_header(header(b"a", b"b"));

        assert_eq!(0, table.len());
        assert_eq!(0, table.size());
    }

    /// Tests the eviction order under a tight byte budget: pushing entries of
    /// space 43, 46 and 53 octets into a 128-octet table must evict exactly
    /// the oldest one.
    #[test]
    fn test_dynamic_table_eviction_order() {
        let mut table = DynamicTable::with_size(128);
        // space = 1 + 10 + 32 = 43
        table.add_header(header(b"a", b"0123456789"));
        // space = 2 + 12 + 32 = 46
        table.add_header(header(b"bb", b"012345678901"));
        // space = 3 + 18 + 32 = 53
        table.add_header(header(b"ccc", b"012345678901234567"));

        assert_eq!(2, table.len());
        assert_eq!(46 + 53, table.size());
        // The oldest live entry is the second one pushed.
        assert_eq!(table.get(1).unwrap(), &header(b"bb", b"012345678901"));
    }

    /// Tests that the iterator walks from the most recent to the oldest entry.
    #[test]
    fn test_dynamic_table_iter_with_elems() {
        let mut table = DynamicTable::with_size(4096);
        table.add_header(header(b"a", b"b"));
        table.add_header(header(b"123", b"456"));
        table.add_header(header(b"c", b"d"));

        let iter_res: Vec<&Header> = table.iter().collect();

        let expected = vec![header(b"c", b"d"), header(b"123", b"456"), header(b"a", b"b")];
        assert_eq!(iter_res, expected.iter().collect::<Vec<_>>());
    }
}
