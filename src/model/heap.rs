use serde::{Deserialize, Serialize};

use crate::error::{OpError, OpResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapEntry {
    pub value: i64,
    pub priority: i64,
}

impl HeapEntry {
    pub fn new(value: i64, priority: i64) -> Self {
        Self { value, priority }
    }
}

/// Index of the parent slot in an array-backed binary tree. `i` must be > 0.
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Array-backed max-heap keyed by priority.
///
/// Children of slot `i` live at `2i + 1` and `2i + 2`; every non-root slot has
/// a priority no greater than its parent's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapModel {
    entries: Vec<HeapEntry>,
    highlighted: Option<usize>,
}

impl HeapModel {
    /// Builds the heap by pushing entries one by one.
    pub fn from_entries(entries: impl IntoIterator<Item = HeapEntry>) -> Self {
        let mut heap = Self::default();
        for e in entries {
            heap.push(e);
        }
        heap.highlighted = None;
        heap
    }

    /// Entries in array (level) order.
    pub fn entries(&self) -> &[HeapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted.filter(|&i| i < self.entries.len())
    }

    /// Appends and sifts up. Returns the final slot of the new entry.
    pub fn push(&mut self, entry: HeapEntry) -> usize {
        self.entries.push(entry);
        let mut i = self.entries.len() - 1;
        while i > 0 {
            let p = parent(i);
            if self.entries[p].priority < self.entries[i].priority {
                self.entries.swap(p, i);
                i = p;
            } else {
                break;
            }
        }
        self.highlighted = None;
        i
    }

    /// Takes the root, moves the last entry into its place and sifts it down.
    pub fn pop(&mut self) -> OpResult<HeapEntry> {
        if self.entries.is_empty() {
            return Err(OpError::EmptyStructure("Priority Queue"));
        }
        let top = self.entries.swap_remove(0);
        self.sift_down(0);
        self.highlighted = None;
        Ok(top)
    }

    /// The maximum-priority entry. Highlights the root.
    pub fn front(&mut self) -> OpResult<HeapEntry> {
        let top = *self
            .entries
            .first()
            .ok_or(OpError::EmptyStructure("Priority Queue"))?;
        self.highlighted = Some(0);
        Ok(top)
    }

    /// The minimum-priority entry found by scanning every slot; the first one
    /// wins on ties. Highlights it.
    pub fn rear(&mut self) -> OpResult<HeapEntry> {
        let mut min = 0;
        for (i, e) in self.entries.iter().enumerate().skip(1) {
            if e.priority < self.entries[min].priority {
                min = i;
            }
        }
        let entry = *self
            .entries
            .get(min)
            .ok_or(OpError::EmptyStructure("Priority Queue"))?;
        self.highlighted = Some(min);
        Ok(entry)
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut largest = i;
            if left < n && self.entries[left].priority > self.entries[largest].priority {
                largest = left;
            }
            if right < n && self.entries[right].priority > self.entries[largest].priority {
                largest = right;
            }
            if largest == i {
                break;
            }
            self.entries.swap(i, largest);
            i = largest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[parent(i)].priority >= self.entries[i].priority)
    }
}
