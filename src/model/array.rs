use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{existing_slot, insert_slot};
use crate::error::OpResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayModel {
    elements: Vec<i64>,
    highlighted: Option<usize>,
}

impl ArrayModel {
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            elements: values.into_iter().collect(),
            highlighted: None,
        }
    }

    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Highlighted cell, only if it still points inside the array.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted.filter(|&i| i < self.elements.len())
    }

    /// Inserts at `index` or appends when `None`. Returns the final position.
    pub fn insert(&mut self, value: i64, index: Option<i64>) -> OpResult<usize> {
        let at = match index {
            Some(index) => insert_slot(index, self.elements.len())?,
            None => self.elements.len(),
        };
        self.elements.insert(at, value);
        self.highlighted = None;
        Ok(at)
    }

    pub fn remove(&mut self, index: i64) -> OpResult<i64> {
        let at = existing_slot(index, self.elements.len())?;
        self.highlighted = None;
        Ok(self.elements.remove(at))
    }

    /// Linear scan for the first occurrence; highlights it for the next render.
    pub fn search(&mut self, value: i64) -> Option<usize> {
        self.highlighted = self.elements.iter().position(|&v| v == value);
        self.highlighted
    }

    /// Ascending numeric order.
    pub fn sort(&mut self) {
        self.elements.sort_unstable();
        self.highlighted = None;
    }

    /// Fisher–Yates: walk from the last index down to 1, swapping each slot
    /// with a uniformly chosen slot in `0..=i`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.elements.len()).rev() {
            let j = rng.random_range(0..=i);
            self.elements.swap(i, j);
        }
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::error::OpError;

    #[test]
    fn test_insert_then_remove() {
        let mut a = ArrayModel::from_values([5, 2, 8, 1, 9]);
        assert_eq!(a.insert(6, None), Ok(5));
        assert_eq!(a.elements(), &[5, 2, 8, 1, 9, 6]);
        assert_eq!(a.remove(1), Ok(2));
        assert_eq!(a.elements(), &[5, 8, 1, 9, 6]);
    }

    #[test]
    fn test_index_bounds() {
        let mut a = ArrayModel::from_values([1, 2]);
        assert_eq!(a.insert(3, Some(2)), Ok(2));
        assert_eq!(
            a.insert(4, Some(4)),
            Err(OpError::InvalidIndex { index: 4, len: 3 })
        );
        assert_eq!(
            a.insert(4, Some(-1)),
            Err(OpError::InvalidIndex { index: -1, len: 3 })
        );
        assert_eq!(a.remove(3), Err(OpError::InvalidIndex { index: 3, len: 3 }));
        assert_eq!(a.elements(), &[1, 2, 3]);
    }

    #[test]
    fn test_sort_is_numeric() {
        let mut a = ArrayModel::from_values([10, 9, 100, -3]);
        a.sort();
        assert_eq!(a.elements(), &[-3, 9, 10, 100]);
    }

    #[test]
    fn test_search_highlight_cleared_by_mutation() {
        let mut a = ArrayModel::from_values([4, 7, 7]);
        assert_eq!(a.search(7), Some(1));
        assert_eq!(a.highlighted(), Some(1));
        assert_eq!(a.search(42), None);
        assert_eq!(a.highlighted(), None);

        a.search(7);
        a.remove(0).unwrap();
        assert_eq!(a.highlighted(), None);
    }

    #[test]
    fn test_shuffle_keeps_multiset() {
        let mut a = ArrayModel::from_values(0..20);
        let mut rng = StdRng::seed_from_u64(7);
        a.shuffle(&mut rng);
        let mut sorted = a.elements().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_small_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty = ArrayModel::default();
        empty.shuffle(&mut rng);
        assert!(empty.is_empty());

        let mut one = ArrayModel::from_values([3]);
        one.shuffle(&mut rng);
        assert_eq!(one.elements(), &[3]);
    }
}
