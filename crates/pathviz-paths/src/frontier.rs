//! Frontier containers: [`Queue`] (FIFO), [`Stack`] (LIFO) and [`MinHeap`]
//! (binary min-heap with a caller-supplied key).

use std::collections::VecDeque;

/// Common interface of the containers a search keeps its frontier in.
pub trait Frontier {
    type Item;

    /// Create an empty frontier with room for `capacity` items. The frontier
    /// still grows past `capacity` if needed.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Add an item.
    fn push(&mut self, item: Self::Item);

    /// Remove the next item, or `None` if the frontier is empty.
    fn pop(&mut self) -> Option<Self::Item>;

    /// Number of items held.
    fn len(&self) -> usize;

    /// Whether nothing is held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every item.
    fn clear(&mut self);
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// First in, first out.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Frontier for Queue<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Frontier for Stack<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

// ---------------------------------------------------------------------------
// MinHeap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct HeapEntry<K, T> {
    key: K,
    seq: u64,
    value: T,
}

impl<K: Ord, T> HeapEntry<K, T> {
    /// Strict "comes out first" order: smaller key, then older insertion.
    #[inline]
    fn before(&self, other: &Self) -> bool {
        (&self.key, self.seq) < (&other.key, other.seq)
    }
}

/// Array-backed binary min-heap of `(key, value)` pairs.
///
/// The smallest key is extracted first; equal keys come out in insertion
/// order, so extraction order depends only on the sequence of pushes. There
/// is no decrease-key: pushing a value again simply adds another entry.
#[derive(Debug, Clone)]
pub struct MinHeap<K, T> {
    entries: Vec<HeapEntry<K, T>>,
    next_seq: u64,
}

impl<K: Ord, T> MinHeap<K, T> {
    /// Key of the entry that [`pop`](Frontier::pop) would return next.
    pub fn peek_key(&self) -> Option<&K> {
        self.entries.first().map(|e| &e.key)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.entries[i].before(&self.entries[parent]) {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.entries[left].before(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].before(&self.entries[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<K: Ord, T> Frontier for MinHeap<K, T> {
    type Item = (K, T);

    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    fn push(&mut self, (key, value): (K, T)) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(HeapEntry { key, seq, value });
        self.sift_up(self.entries.len() - 1);
    }

    fn pop(&mut self) -> Option<(K, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let top = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((top.key, top.value))
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }
}
