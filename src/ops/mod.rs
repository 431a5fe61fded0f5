//! The Operation Engine: validated mutations with teaching explanations.
//!
//! A [`Command`] names one operation on one variant. [`apply`] checks ranges and
//! existence before touching the model, so a rejected command leaves the
//! structure exactly as it was.

mod array;
mod doubly_linked_list;
mod graph;
mod hash_table;
mod linked_list;
mod priority_queue;
mod queue;
mod stack;
mod tree;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animator::{Traversal, TraversalKind};
use crate::error::{OpError, OpResult};
use crate::model::{HeapEntry, Position, Structure, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrayCommand {
    /// Appends when `index` is absent.
    Insert { value: i64, index: Option<i64> },
    Remove { index: i64 },
    Search { value: i64 },
    Sort,
    Shuffle,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkedListCommand {
    Insert { value: i64, at: Position },
    Remove { value: i64 },
    Search { value: i64 },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoublyLinkedListCommand {
    Insert { value: i64, at: Position },
    Remove { value: i64 },
    Search { value: i64 },
    TraverseForward,
    TraverseBackward,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackCommand {
    Push { value: i64 },
    Pop,
    Peek,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueCommand {
    Enqueue { value: i64 },
    Dequeue,
    Front,
    Rear,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeOrder {
    InOrder,
    PreOrder,
    PostOrder,
}

impl TreeOrder {
    pub fn name(self) -> &'static str {
        match self {
            TreeOrder::InOrder => "In-order",
            TreeOrder::PreOrder => "Pre-order",
            TreeOrder::PostOrder => "Post-order",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeCommand {
    Insert { value: i64 },
    Remove { value: i64 },
    Search { value: i64 },
    Traverse { order: TreeOrder },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityQueueCommand {
    Push { value: i64, priority: i64 },
    Pop,
    Front,
    Rear,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashTableCommand {
    Insert { key: String, value: String },
    Search { key: String },
    Delete { key: String },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphCommand {
    AddNode { id: String },
    AddEdge { from: String, to: String },
    Traverse { kind: TraversalKind, start: String },
    Clear,
}

/// One operation addressed to one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Array(ArrayCommand),
    LinkedList(LinkedListCommand),
    DoublyLinkedList(DoublyLinkedListCommand),
    Stack(StackCommand),
    Queue(QueueCommand),
    Tree(TreeCommand),
    PriorityQueue(PriorityQueueCommand),
    HashTable(HashTableCommand),
    Graph(GraphCommand),
}

impl Command {
    pub fn variant(&self) -> Variant {
        match self {
            Command::Array(_) => Variant::Array,
            Command::LinkedList(_) => Variant::LinkedList,
            Command::DoublyLinkedList(_) => Variant::DoublyLinkedList,
            Command::Stack(_) => Variant::Stack,
            Command::Queue(_) => Variant::Queue,
            Command::Tree(_) => Variant::BinaryTree,
            Command::PriorityQueue(_) => Variant::PriorityQueue,
            Command::HashTable(_) => Variant::HashTable,
            Command::Graph(_) => Variant::Graph,
        }
    }

    /// Replaces the whole model with an empty one.
    pub fn is_clear(&self) -> bool {
        matches!(
            self,
            Command::Array(ArrayCommand::Clear)
                | Command::LinkedList(LinkedListCommand::Clear)
                | Command::DoublyLinkedList(DoublyLinkedListCommand::Clear)
                | Command::Stack(StackCommand::Clear)
                | Command::Queue(QueueCommand::Clear)
                | Command::Tree(TreeCommand::Clear)
                | Command::PriorityQueue(PriorityQueueCommand::Clear)
                | Command::HashTable(HashTableCommand::Clear)
                | Command::Graph(GraphCommand::Clear)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub severity: Severity,
    pub message: String,
}

impl Status {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }
}

impl From<&OpError> for Status {
    fn from(err: &OpError) -> Self {
        Status::warning(err.to_string())
    }
}

/// Typed result of an operation, for callers that want more than the text.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    None,
    /// Slot the value landed in, or where a search found it.
    Index(Option<usize>),
    Value(i64),
    Entry(HeapEntry),
    Values(Vec<i64>),
    Found(bool),
    Lookup(Option<String>),
    Removed(bool),
    /// A DFS/BFS ready to be driven by the animator.
    Traversal(Traversal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: Status,
    /// Ordered explanation shown as "Step 1", "Step 2", ...
    pub steps: Vec<String>,
    /// Operation log entry, if the operation is worth recording.
    pub log: Option<String>,
    pub reply: Reply,
}

impl Outcome {
    /// Logged operation whose status repeats the log line.
    pub(crate) fn logged(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: Status::success(message.clone()),
            steps: Vec::new(),
            log: Some(message),
            reply: Reply::None,
        }
    }

    /// Operation that leaves nothing in the log.
    pub(crate) fn unlogged(status: Status) -> Self {
        Self {
            status,
            steps: Vec::new(),
            log: None,
            reply: Reply::None,
        }
    }

    pub(crate) fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn with_reply(mut self, reply: Reply) -> Self {
        self.reply = reply;
        self
    }
}

pub(crate) fn cleared(variant: Variant) -> &'static str {
    match variant {
        Variant::Array => "Array cleared",
        Variant::LinkedList => "Linked list cleared",
        Variant::DoublyLinkedList => "Doubly linked list cleared",
        Variant::Stack => "Stack cleared",
        Variant::Queue => "Queue cleared",
        Variant::BinaryTree => "Tree cleared",
        Variant::PriorityQueue => "Priority Queue cleared",
        Variant::HashTable => "Hash table cleared",
        Variant::Graph => "Graph cleared",
    }
}

/// Applies `command` to `structure`. `rng` is only drawn from by shuffle.
pub fn apply<R: Rng + ?Sized>(
    structure: &mut Structure,
    command: Command,
    rng: &mut R,
) -> OpResult<Outcome> {
    let found = structure.variant();
    let expected = command.variant();
    if found != expected {
        return Err(OpError::VariantMismatch { expected, found });
    }
    match (structure, command) {
        (Structure::Array(m), Command::Array(c)) => array::apply(m, c, rng),
        (Structure::LinkedList(m), Command::LinkedList(c)) => linked_list::apply(m, c),
        (Structure::DoublyLinkedList(m), Command::DoublyLinkedList(c)) => {
            doubly_linked_list::apply(m, c)
        }
        (Structure::Stack(m), Command::Stack(c)) => stack::apply(m, c),
        (Structure::Queue(m), Command::Queue(c)) => queue::apply(m, c),
        (Structure::BinaryTree(m), Command::Tree(c)) => tree::apply(m, c),
        (Structure::PriorityQueue(m), Command::PriorityQueue(c)) => priority_queue::apply(m, c),
        (Structure::HashTable(m), Command::HashTable(c)) => hash_table::apply(m, c),
        (Structure::Graph(m), Command::Graph(c)) => graph::apply(m, c),
        _ => Err(OpError::VariantMismatch { expected, found }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_variant_mismatch_leaves_model() {
        let mut s = Structure::initial(Variant::Stack);
        let before = s.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let err = apply(&mut s, Command::Array(ArrayCommand::Sort), &mut rng).unwrap_err();
        assert_eq!(
            err,
            OpError::VariantMismatch {
                expected: Variant::Array,
                found: Variant::Stack
            }
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_clear_empties_every_variant() {
        let clears = [
            Command::Array(ArrayCommand::Clear),
            Command::LinkedList(LinkedListCommand::Clear),
            Command::DoublyLinkedList(DoublyLinkedListCommand::Clear),
            Command::Stack(StackCommand::Clear),
            Command::Queue(QueueCommand::Clear),
            Command::Tree(TreeCommand::Clear),
            Command::PriorityQueue(PriorityQueueCommand::Clear),
            Command::HashTable(HashTableCommand::Clear),
            Command::Graph(GraphCommand::Clear),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        for cmd in clears {
            let variant = cmd.variant();
            let mut s = Structure::initial(variant);
            let out = apply(&mut s, cmd, &mut rng).unwrap();
            assert_eq!(s, Structure::empty(variant));
            assert_eq!(out.log.as_deref(), Some(cleared(variant)));
            assert!(out.steps.is_empty());
        }
    }
}
