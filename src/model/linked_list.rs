use serde::{Deserialize, Serialize};

use super::Position;
use crate::error::{OpError, OpResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNode {
    pub value: i64,
    /// Position of the successor, `None` for the tail.
    pub next: Option<usize>,
}

/// Singly linked list addressed by position.
///
/// Links are renumbered across the whole list after every structural change,
/// so `next` of node `i` is always `i + 1` except for the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedListModel {
    nodes: Vec<ListNode>,
    highlighted: Option<usize>,
}

impl LinkedListModel {
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut list = Self {
            nodes: values
                .into_iter()
                .map(|value| ListNode { value, next: None })
                .collect(),
            highlighted: None,
        };
        list.relink();
        list
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }

    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted.filter(|&i| i < self.nodes.len())
    }

    pub fn insert(&mut self, value: i64, position: Position) -> OpResult<usize> {
        let at = position.resolve(self.nodes.len())?;
        self.nodes.insert(at, ListNode { value, next: None });
        self.relink();
        Ok(at)
    }

    /// Removes the first node holding `value` and returns its former position.
    pub fn remove(&mut self, value: i64) -> OpResult<usize> {
        let at = self
            .position_of(value)
            .ok_or_else(|| OpError::NotFound { value, place: "list" })?;
        self.nodes.remove(at);
        self.relink();
        Ok(at)
    }

    pub fn search(&mut self, value: i64) -> Option<usize> {
        self.highlighted = self.position_of(value);
        self.highlighted
    }

    fn position_of(&self, value: i64) -> Option<usize> {
        self.nodes.iter().position(|n| n.value == value)
    }

    fn relink(&mut self) {
        let len = self.nodes.len();
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.next = (i + 1 < len).then_some(i + 1);
        }
        self.highlighted = None;
    }
}
