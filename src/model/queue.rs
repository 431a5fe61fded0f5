use serde::{Deserialize, Serialize};

use crate::error::{OpError, OpResult};

/// FIFO sequence with explicit `front`/`rear` markers.
///
/// `front` stays at 0: dequeue shifts every element down by one. `rear` is
/// `len - 1`, clamped to 0 once the queue runs empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueModel {
    elements: Vec<i64>,
    front: usize,
    rear: usize,
}

impl QueueModel {
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let elements: Vec<i64> = values.into_iter().collect();
        let rear = elements.len().saturating_sub(1);
        Self {
            elements,
            front: 0,
            rear,
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

    pub fn front_index(&self) -> usize {
        self.front
    }

    pub fn rear_index(&self) -> usize {
        self.rear
    }

    pub fn enqueue(&mut self, value: i64) {
        self.elements.push(value);
        self.rear = self.elements.len() - 1;
    }

    pub fn dequeue(&mut self) -> OpResult<i64> {
        if self.elements.is_empty() {
            return Err(OpError::EmptyStructure("Queue"));
        }
        let value = self.elements.remove(0);
        self.rear = self.elements.len().saturating_sub(1);
        Ok(value)
    }

    pub fn front(&self) -> OpResult<i64> {
        self.elements
            .first()
            .copied()
            .ok_or(OpError::EmptyStructure("Queue"))
    }

    pub fn rear(&self) -> OpResult<i64> {
        self.elements
            .last()
            .copied()
            .ok_or(OpError::EmptyStructure("Queue"))
    }
}
