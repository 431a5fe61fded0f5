use serde::{Deserialize, Serialize};

use crate::error::{OpError, OpResult};

/// LIFO sequence; the last element is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackModel {
    elements: Vec<i64>,
}

impl StackModel {
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            elements: values.into_iter().collect(),
        }
    }

    /// Bottom to top.
    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, value: i64) {
        self.elements.push(value);
    }

    pub fn pop(&mut self) -> OpResult<i64> {
        self.elements.pop().ok_or(OpError::EmptyStructure("Stack"))
    }

    pub fn peek(&self) -> OpResult<i64> {
        self.elements
            .last()
            .copied()
            .ok_or(OpError::EmptyStructure("Stack"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_order_reverses_push_order() {
        let pushed = [4, -1, 9, 9, 0, 12];
        let mut s = StackModel::default();
        for v in pushed {
            s.push(v);
        }
        let popped: Vec<_> = (0..pushed.len()).map(|_| s.pop().unwrap()).collect();
        let mut expected = pushed.to_vec();
        expected.reverse();
        assert_eq!(popped, expected);
        assert_eq!(s.pop(), Err(OpError::EmptyStructure("Stack")));
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let s = StackModel::from_values([1, 2, 3]);
        assert_eq!(s.peek(), Ok(3));
        assert_eq!(s.elements(), &[1, 2, 3]);
        assert!(StackModel::default().peek().is_err());
    }
}
