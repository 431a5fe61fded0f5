use serde::{Deserialize, Serialize};

use super::Position;
use crate::error::{OpError, OpResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublyNode {
    pub value: i64,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Doubly linked list addressed by position. `prev`/`next` are rebuilt for
/// every node after each structural change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublyLinkedListModel {
    nodes: Vec<DoublyNode>,
    highlighted: Option<usize>,
}

impl DoublyLinkedListModel {
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut list = Self {
            nodes: values
                .into_iter()
                .map(|value| DoublyNode {
                    value,
                    prev: None,
                    next: None,
                })
                .collect(),
            highlighted: None,
        };
        list.relink();
        list
    }

    pub fn nodes(&self) -> &[DoublyNode] {
        &self.nodes
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
        self.nodes.insert(
            at,
            DoublyNode {
                value,
                prev: None,
                next: None,
            },
        );
        self.relink();
        Ok(at)
    }

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

    /// Values from head to tail following `next` links.
    pub fn forward(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut cursor = (!self.nodes.is_empty()).then_some(0);
        while let Some(i) = cursor {
            out.push(self.nodes[i].value);
            cursor = self.nodes[i].next;
        }
        out
    }

    /// Values from tail to head following `prev` links.
    pub fn backward(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.nodes.len().checked_sub(1);
        while let Some(i) = cursor {
            out.push(self.nodes[i].value);
            cursor = self.nodes[i].prev;
        }
        out
    }

    fn position_of(&self, value: i64) -> Option<usize> {
        self.nodes.iter().position(|n| n.value == value)
    }

    fn relink(&mut self) {
        let len = self.nodes.len();
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.prev = i.checked_sub(1);
            node.next = (i + 1 < len).then_some(i + 1);
        }
        self.highlighted = None;
    }
}
