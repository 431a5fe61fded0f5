//! Plain-data representations of every visualized structure.
//!
//! Models only know how to keep their own invariants. Explanations,
//! validation messages and logging live in [`crate::ops`].

mod array;
mod bst;
mod doubly_linked_list;
mod graph;
mod hash_table;
mod heap;
mod linked_list;
mod queue;
mod stack;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OpError, OpResult};

pub use self::array::ArrayModel;
pub use self::bst::{BstModel, TreeNode};
pub use self::doubly_linked_list::{DoublyLinkedListModel, DoublyNode};
pub use self::graph::{GraphEdge, GraphModel, GraphNode};
pub use self::hash_table::{bucket_of, HashHighlight, HashTableModel, Pair, Upsert, BUCKET_COUNT};
pub use self::heap::{parent, HeapEntry, HeapModel};
pub use self::linked_list::{LinkedListModel, ListNode};
pub use self::queue::QueueModel;
pub use self::stack::StackModel;

/// Where a list insertion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Start,
    End,
    Index(i64),
}

impl Position {
    pub(crate) fn resolve(self, len: usize) -> OpResult<usize> {
        match self {
            Position::Start => Ok(0),
            Position::End => Ok(len),
            Position::Index(index) => insert_slot(index, len),
        }
    }
}

/// Validates an insertion slot: `0 <= index <= len`.
pub(crate) fn insert_slot(index: i64, len: usize) -> OpResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i <= len)
        .ok_or(OpError::InvalidIndex { index, len })
}

/// Validates an existing position: `0 <= index < len`.
pub(crate) fn existing_slot(index: i64, len: usize) -> OpResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(OpError::InvalidIndex { index, len })
}

/// The eight visualization kinds. Graph covers the DFS/BFS demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Array,
    LinkedList,
    DoublyLinkedList,
    Stack,
    Queue,
    BinaryTree,
    PriorityQueue,
    HashTable,
    Graph,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Array,
        Variant::LinkedList,
        Variant::DoublyLinkedList,
        Variant::Stack,
        Variant::Queue,
        Variant::BinaryTree,
        Variant::PriorityQueue,
        Variant::HashTable,
        Variant::Graph,
    ];

    /// Stable identifier used by controls and persisted settings.
    pub fn id(self) -> &'static str {
        match self {
            Variant::Array => "array",
            Variant::LinkedList => "linked_list",
            Variant::DoublyLinkedList => "doubly_linked_list",
            Variant::Stack => "stack",
            Variant::Queue => "queue",
            Variant::BinaryTree => "binary_tree",
            Variant::PriorityQueue => "priority_queue",
            Variant::HashTable => "hash_table",
            Variant::Graph => "dfs_bfs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Array => "Array",
            Variant::LinkedList => "Linked List",
            Variant::DoublyLinkedList => "Doubly Linked List",
            Variant::Stack => "Stack",
            Variant::Queue => "Queue",
            Variant::BinaryTree => "Binary Search Tree",
            Variant::PriorityQueue => "Priority Queue",
            Variant::HashTable => "Hash Table",
            Variant::Graph => "Graph (DFS/BFS)",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| format!("unknown visualization: {s}"))
    }
}

/// The active structure of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Structure {
    Array(ArrayModel),
    LinkedList(LinkedListModel),
    DoublyLinkedList(DoublyLinkedListModel),
    Stack(StackModel),
    Queue(QueueModel),
    BinaryTree(BstModel),
    PriorityQueue(HeapModel),
    HashTable(HashTableModel),
    Graph(GraphModel),
}

impl Structure {
    /// Seeds the variant with its small canned example.
    pub fn initial(variant: Variant) -> Self {
        match variant {
            Variant::Array => Structure::Array(ArrayModel::from_values([5, 2, 8, 1, 9])),
            Variant::LinkedList => {
                Structure::LinkedList(LinkedListModel::from_values([1, 2, 3]))
            }
            Variant::DoublyLinkedList => {
                Structure::DoublyLinkedList(DoublyLinkedListModel::from_values([10, 20, 30]))
            }
            Variant::Stack => Structure::Stack(StackModel::from_values([1, 2, 3])),
            Variant::Queue => Structure::Queue(QueueModel::from_values([1, 2, 3])),
            Variant::BinaryTree => Structure::BinaryTree(BstModel::from_values([50, 30, 70])),
            Variant::PriorityQueue => Structure::PriorityQueue(HeapModel::from_entries([
                HeapEntry::new(40, 40),
                HeapEntry::new(30, 30),
                HeapEntry::new(20, 20),
                HeapEntry::new(10, 10),
            ])),
            Variant::HashTable => Structure::HashTable(HashTableModel::from_pairs([
                ("10", "Aayush"),
                ("5", "Klein"),
                ("15", "Gherman"),
                ("25", "Jin"),
                ("35", "Deku"),
            ])),
            Variant::Graph => Structure::Graph(GraphModel::from_parts(
                ["0", "1", "2", "3", "4"],
                [("0", "1"), ("0", "2"), ("1", "3"), ("2", "4"), ("1", "2")],
            )),
        }
    }

    /// The variant with nothing in it, used by "clear".
    pub fn empty(variant: Variant) -> Self {
        match variant {
            Variant::Array => Structure::Array(ArrayModel::default()),
            Variant::LinkedList => Structure::LinkedList(LinkedListModel::default()),
            Variant::DoublyLinkedList => {
                Structure::DoublyLinkedList(DoublyLinkedListModel::default())
            }
            Variant::Stack => Structure::Stack(StackModel::default()),
            Variant::Queue => Structure::Queue(QueueModel::default()),
            Variant::BinaryTree => Structure::BinaryTree(BstModel::default()),
            Variant::PriorityQueue => Structure::PriorityQueue(HeapModel::default()),
            Variant::HashTable => Structure::HashTable(HashTableModel::default()),
            Variant::Graph => Structure::Graph(GraphModel::default()),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Structure::Array(_) => Variant::Array,
            Structure::LinkedList(_) => Variant::LinkedList,
            Structure::DoublyLinkedList(_) => Variant::DoublyLinkedList,
            Structure::Stack(_) => Variant::Stack,
            Structure::Queue(_) => Variant::Queue,
            Structure::BinaryTree(_) => Variant::BinaryTree,
            Structure::PriorityQueue(_) => Variant::PriorityQueue,
            Structure::HashTable(_) => Variant::HashTable,
            Structure::Graph(_) => Variant::Graph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_ids_roundtrip() {
        for v in Variant::ALL {
            assert_eq!(v.id().parse::<Variant>().unwrap(), v);
        }
        assert!("matrix".parse::<Variant>().is_err());
    }

    #[test]
    fn test_initial_and_empty_match_variant() {
        for v in Variant::ALL {
            assert_eq!(Structure::initial(v).variant(), v);
            assert_eq!(Structure::empty(v).variant(), v);
        }
    }
}
