//! Turns raw widget input into typed commands.
//!
//! Only parsing happens here. Whether an index is in range or a value exists is
//! for the operation engine to decide.

use crate::animator::TraversalKind;
use crate::error::{OpError, OpResult};
use crate::model::{Position, Variant};
use crate::ops::{
    ArrayCommand, Command, DoublyLinkedListCommand, GraphCommand, HashTableCommand,
    LinkedListCommand, PriorityQueueCommand, QueueCommand, StackCommand, TreeCommand, TreeOrder,
};

/// One UI control firing, with its text fields exactly as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<'a> {
    ArrayInsert { value: &'a str, index: &'a str },
    ArrayRemove { index: &'a str },
    ArraySearch { value: &'a str },
    ArraySort,
    ArrayShuffle,

    /// `position` is one of `start`, `end`, `index`; `index` is read only for
    /// the last one.
    ListInsert {
        value: &'a str,
        position: &'a str,
        index: &'a str,
    },
    ListRemove { value: &'a str },
    ListSearch { value: &'a str },

    DoublyInsert {
        value: &'a str,
        position: &'a str,
        index: &'a str,
    },
    DoublyRemove { value: &'a str },
    DoublySearch { value: &'a str },
    DoublyTraverseForward,
    DoublyTraverseBackward,

    StackPush { value: &'a str },
    StackPop,
    StackPeek,

    Enqueue { value: &'a str },
    Dequeue,
    QueueFront,
    QueueRear,

    TreeInsert { value: &'a str },
    TreeRemove { value: &'a str },
    TreeSearch { value: &'a str },
    TreeTraverse { order: TreeOrder },

    PriorityPush { value: &'a str, priority: &'a str },
    PriorityPop,
    PriorityFront,
    PriorityRear,

    HashInsert { key: &'a str, value: &'a str },
    HashSearch { key: &'a str },
    HashDelete { key: &'a str },

    GraphAddNode { id: &'a str },
    GraphAddEdge { from: &'a str, to: &'a str },
    GraphTraverse { kind: TraversalKind, start: &'a str },

    Clear(Variant),
}

fn number(raw: &str, field: &'static str) -> OpResult<i64> {
    raw.trim().parse().map_err(|_| OpError::InvalidInput {
        field,
        expected: "number",
    })
}

fn optional_number(raw: &str, field: &'static str) -> OpResult<Option<i64>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        number(raw, field).map(Some)
    }
}

fn text(raw: &str, field: &'static str) -> OpResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(OpError::InvalidInput {
            field,
            expected: "value",
        });
    }
    Ok(raw.to_string())
}

/// Hash keys are hashed exactly as typed, so only the empty string is refused.
fn key(raw: &str, field: &'static str) -> OpResult<String> {
    if raw.is_empty() {
        return Err(OpError::InvalidInput {
            field,
            expected: "value",
        });
    }
    Ok(raw.to_string())
}

fn position(position: &str, index: &str) -> OpResult<Position> {
    match position.trim() {
        "start" => Ok(Position::Start),
        "end" => Ok(Position::End),
        "index" => number(index, "index").map(Position::Index),
        _ => Err(OpError::InvalidInput {
            field: "position",
            expected: "start, end or index",
        }),
    }
}

fn clear(variant: Variant) -> Command {
    match variant {
        Variant::Array => Command::Array(ArrayCommand::Clear),
        Variant::LinkedList => Command::LinkedList(LinkedListCommand::Clear),
        Variant::DoublyLinkedList => Command::DoublyLinkedList(DoublyLinkedListCommand::Clear),
        Variant::Stack => Command::Stack(StackCommand::Clear),
        Variant::Queue => Command::Queue(QueueCommand::Clear),
        Variant::BinaryTree => Command::Tree(TreeCommand::Clear),
        Variant::PriorityQueue => Command::PriorityQueue(PriorityQueueCommand::Clear),
        Variant::HashTable => Command::HashTable(HashTableCommand::Clear),
        Variant::Graph => Command::Graph(GraphCommand::Clear),
    }
}

/// Validates the fields of `control` and builds the command it stands for.
pub fn bind(control: Control<'_>) -> OpResult<Command> {
    let command = match control {
        Control::ArrayInsert { value, index } => Command::Array(ArrayCommand::Insert {
            value: number(value, "value")?,
            index: optional_number(index, "index")?,
        }),
        Control::ArrayRemove { index } => Command::Array(ArrayCommand::Remove {
            index: number(index, "index")?,
        }),
        Control::ArraySearch { value } => Command::Array(ArrayCommand::Search {
            value: number(value, "value")?,
        }),
        Control::ArraySort => Command::Array(ArrayCommand::Sort),
        Control::ArrayShuffle => Command::Array(ArrayCommand::Shuffle),

        Control::ListInsert {
            value,
            position: at,
            index,
        } => Command::LinkedList(LinkedListCommand::Insert {
            value: number(value, "value")?,
            at: position(at, index)?,
        }),
        Control::ListRemove { value } => Command::LinkedList(LinkedListCommand::Remove {
            value: number(value, "value")?,
        }),
        Control::ListSearch { value } => Command::LinkedList(LinkedListCommand::Search {
            value: number(value, "value")?,
        }),

        Control::DoublyInsert {
            value,
            position: at,
            index,
        } => Command::DoublyLinkedList(DoublyLinkedListCommand::Insert {
            value: number(value, "value")?,
            at: position(at, index)?,
        }),
        Control::DoublyRemove { value } => {
            Command::DoublyLinkedList(DoublyLinkedListCommand::Remove {
                value: number(value, "value")?,
            })
        }
        Control::DoublySearch { value } => {
            Command::DoublyLinkedList(DoublyLinkedListCommand::Search {
                value: number(value, "value")?,
            })
        }
        Control::DoublyTraverseForward => {
            Command::DoublyLinkedList(DoublyLinkedListCommand::TraverseForward)
        }
        Control::DoublyTraverseBackward => {
            Command::DoublyLinkedList(DoublyLinkedListCommand::TraverseBackward)
        }

        Control::StackPush { value } => Command::Stack(StackCommand::Push {
            value: number(value, "value")?,
        }),
        Control::StackPop => Command::Stack(StackCommand::Pop),
        Control::StackPeek => Command::Stack(StackCommand::Peek),

        Control::Enqueue { value } => Command::Queue(QueueCommand::Enqueue {
            value: number(value, "value")?,
        }),
        Control::Dequeue => Command::Queue(QueueCommand::Dequeue),
        Control::QueueFront => Command::Queue(QueueCommand::Front),
        Control::QueueRear => Command::Queue(QueueCommand::Rear),

        Control::TreeInsert { value } => Command::Tree(TreeCommand::Insert {
            value: number(value, "value")?,
        }),
        Control::TreeRemove { value } => Command::Tree(TreeCommand::Remove {
            value: number(value, "value")?,
        }),
        Control::TreeSearch { value } => Command::Tree(TreeCommand::Search {
            value: number(value, "value")?,
        }),
        Control::TreeTraverse { order } => Command::Tree(TreeCommand::Traverse { order }),

        Control::PriorityPush { value, priority } => {
            Command::PriorityQueue(PriorityQueueCommand::Push {
                value: number(value, "value")?,
                priority: number(priority, "priority")?,
            })
        }
        Control::PriorityPop => Command::PriorityQueue(PriorityQueueCommand::Pop),
        Control::PriorityFront => Command::PriorityQueue(PriorityQueueCommand::Front),
        Control::PriorityRear => Command::PriorityQueue(PriorityQueueCommand::Rear),

        Control::HashInsert {
            key: raw_key,
            value,
        } => Command::HashTable(HashTableCommand::Insert {
            key: key(raw_key, "key")?,
            value: value.to_string(),
        }),
        Control::HashSearch { key: raw_key } => Command::HashTable(HashTableCommand::Search {
            key: key(raw_key, "key")?,
        }),
        Control::HashDelete { key: raw_key } => Command::HashTable(HashTableCommand::Delete {
            key: key(raw_key, "key")?,
        }),

        Control::GraphAddNode { id } => Command::Graph(GraphCommand::AddNode {
            id: text(id, "node id")?,
        }),
        Control::GraphAddEdge { from, to } => Command::Graph(GraphCommand::AddEdge {
            from: text(from, "from")?,
            to: text(to, "to")?,
        }),
        Control::GraphTraverse { kind, start } => Command::Graph(GraphCommand::Traverse {
            kind,
            start: text(start, "start node")?,
        }),

        Control::Clear(variant) => clear(variant),
    };
    Ok(command)
}
