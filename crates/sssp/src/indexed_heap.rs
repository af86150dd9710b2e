use crate::Distance;
use crate::error::Result;
use crate::error::SsspError;

const NOT_PRESENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: Distance,
}

/// Binary min-heap over vertex ids `0..capacity` keyed by distance.
///
/// `position[v]` is the index of `v`'s entry in `entries`, or `NOT_PRESENT`.
/// Every swap moves both arrays together, which is what lets
/// `decrease_key` find a vertex without scanning.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    position: Vec<usize>,
}

impl IndexedMinHeap {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            position: vec![NOT_PRESENT; capacity],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    #[inline]
    pub fn is_in_heap(&self, vertex: usize) -> bool {
        self.position
            .get(vertex)
            .is_some_and(|&pos| pos < self.entries.len())
    }

    #[inline]
    pub fn peek(&self) -> Option<HeapEntry> {
        self.entries.first().copied()
    }

    pub fn distance_of(&self, vertex: usize) -> Option<Distance> {
        if self.is_in_heap(vertex) {
            Some(self.entries[self.position[vertex]].distance)
        } else {
            None
        }
    }

    /// Inserts `vertex` at an arbitrary key.
    pub fn insert(&mut self, vertex: usize, distance: Distance) -> Result<()> {
        let capacity = self.capacity();
        if self.entries.len() >= capacity {
            return Err(SsspError::CapacityExceeded { capacity });
        }
        if vertex >= capacity {
            return Err(SsspError::out_of_range(vertex, capacity));
        }
        if self.is_in_heap(vertex) {
            return Err(SsspError::InvalidArgument(format!(
                "vertex {vertex} is already in the heap"
            )));
        }

        self.position[vertex] = self.entries.len();
        self.entries.push(HeapEntry { vertex, distance });
        self.decrease_key(vertex, distance)
    }

    pub fn extract_min(&mut self) -> Option<HeapEntry> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let min = self.entries.pop()?;
        self.position[min.vertex] = NOT_PRESENT;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Sets the key of a present vertex and restores order upwards.
    ///
    /// A key larger than the current one is accepted but only sifted up, so
    /// callers must not raise keys.
    pub fn decrease_key(&mut self, vertex: usize, distance: Distance) -> Result<()> {
        if !self.is_in_heap(vertex) {
            return Err(SsspError::NotInHeap(vertex));
        }

        let pos = self.position[vertex];
        self.entries[pos].distance = distance;
        self.sift_up(pos);
        Ok(())
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[parent].distance <= self.entries[pos].distance {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.entries[left].distance < self.entries[smallest].distance {
                smallest = left;
            }
            if right < len && self.entries[right].distance < self.entries[smallest].distance {
                smallest = right;
            }
            if smallest == pos {
                return;
            }

            self.swap(smallest, pos);
            pos = smallest;
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.position[self.entries[a].vertex] = a;
        self.position[self.entries[b].vertex] = b;
    }
}
