//! Array-backed binary min-heap with a caller-supplied comparator.
//!
//! The heap is the engine behind Huffman tree construction: partial trees
//! are ordered by root weight and repeatedly merged. Ties are broken by
//! insertion order (FIFO), which makes extraction fully deterministic - a
//! requirement, since decompression must replay the exact merge sequence
//! the compressor performed.

use std::cmp::Ordering;

struct Entry<T> {
    item: T,
    /// Monotonic insertion sequence number, used as the tie-break key.
    seq: u64,
}

/// Binary min-heap over `T`, ordered by a caller-supplied comparator.
///
/// Standard 0-indexed array layout: the parent of index `i` is `(i - 1) / 2`,
/// its children are `2i + 1` and `2i + 2`.
pub struct MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    entries: Vec<Entry<T>>,
    compare: C,
    next_seq: u64,
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap with the given comparator.
    pub fn new(compare: C) -> Self {
        Self {
            entries: Vec::new(),
            compare,
            next_seq: 0,
        }
    }

    /// Create an empty heap with pre-allocated capacity.
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            compare,
            next_seq: 0,
        }
    }

    /// Number of elements currently in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an element, sifting it up to its position. O(log n).
    pub fn insert(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { item, seq });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the minimum element, or `None` if empty. O(log n).
    pub fn extract_min(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().expect("heap is non-empty");
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(entry.item)
    }

    /// Peek at the minimum element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.item)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let ea = &self.entries[a];
        let eb = &self.entries[b];
        match (self.compare)(&ea.item, &eb.item) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => ea.seq < eb.seq,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_heap() -> MinHeap<u32, impl Fn(&u32, &u32) -> Ordering> {
        MinHeap::new(|a: &u32, b: &u32| a.cmp(b))
    }

    #[test]
    fn test_extract_in_sorted_order() {
        let mut heap = u32_heap();
        for value in [5u32, 3, 8, 1, 9, 2, 7] {
            heap.insert(value);
        }

        let mut drained = Vec::new();
        while let Some(min) = heap.extract_min() {
            drained.push(min);
        }
        assert_eq!(drained, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_empty_extract() {
        let mut heap = u32_heap();
        assert!(heap.extract_min().is_none());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_shadow_sorted_structure() {
        // Interleave inserts and extracts; every extract must match what a
        // sorted shadow vector says the current minimum is.
        let ops: &[(bool, u32)] = &[
            (true, 40),
            (true, 10),
            (true, 30),
            (false, 0),
            (true, 5),
            (true, 50),
            (false, 0),
            (false, 0),
            (true, 20),
            (false, 0),
            (false, 0),
            (false, 0),
        ];

        let mut heap = u32_heap();
        let mut shadow: Vec<u32> = Vec::new();

        for &(is_insert, value) in ops {
            if is_insert {
                heap.insert(value);
                shadow.push(value);
                shadow.sort_unstable();
            } else {
                let expected = if shadow.is_empty() {
                    None
                } else {
                    Some(shadow.remove(0))
                };
                assert_eq!(heap.extract_min(), expected);
            }
        }
        assert_eq!(heap.len(), shadow.len());
    }

    #[test]
    fn test_ties_are_fifo() {
        // Compare only the weight field; the payload identifies insertion order.
        let mut heap = MinHeap::new(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
        heap.insert((7, 'a'));
        heap.insert((7, 'b'));
        heap.insert((3, 'x'));
        heap.insert((7, 'c'));

        assert_eq!(heap.extract_min(), Some((3, 'x')));
        assert_eq!(heap.extract_min(), Some((7, 'a')));
        assert_eq!(heap.extract_min(), Some((7, 'b')));
        assert_eq!(heap.extract_min(), Some((7, 'c')));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut heap = u32_heap();
        heap.insert(4);
        heap.insert(2);
        assert_eq!(heap.peek(), Some(&2));
        assert_eq!(heap.len(), 2);
    }
}
