use super::{cleared, DoublyLinkedListCommand, Outcome, Reply, Status};
use crate::error::{OpError, OpResult};
use crate::model::{DoublyLinkedListModel, Position, Variant};

fn join(values: &[i64], sep: &str) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

pub(super) fn apply(
    model: &mut DoublyLinkedListModel,
    command: DoublyLinkedListCommand,
) -> OpResult<Outcome> {
    let outcome = match command {
        DoublyLinkedListCommand::Insert { value, at } => {
            let slot = model.insert(value, at)?;
            let outcome = match at {
                Position::Start => Outcome::logged(format!("Added {value} at start of list"))
                    .with_steps([
                        format!("Create node {value}"),
                        "Set its next to previous head".to_string(),
                        "Update head and fix prev/next indices".to_string(),
                    ]),
                Position::End => Outcome::logged(format!("Added {value} at end of list"))
                    .with_steps([
                        format!("Create node {value}"),
                        "Link current tail to new node".to_string(),
                        "Update tail and indices".to_string(),
                    ]),
                Position::Index(_) => Outcome::logged(format!("Added {value} at index {slot}"))
                    .with_steps([
                        format!("Insert {value} at position {slot}"),
                        "Link it to both neighbors".to_string(),
                        "Fix prev/next indices".to_string(),
                    ]),
            };
            outcome.with_reply(Reply::Index(Some(slot)))
        }
        DoublyLinkedListCommand::Remove { value } => {
            let slot = model.remove(value)?;
            Outcome::logged(format!("Removed {value} from list"))
                .with_steps([
                    format!("Locate node {value}"),
                    "Relink its prev and next neighbors together".to_string(),
                    "Fix indices of remaining nodes".to_string(),
                ])
                .with_reply(Reply::Index(Some(slot)))
        }
        DoublyLinkedListCommand::Search { value } => match model.search(value) {
            Some(i) => Outcome::logged(format!("Found {value} at position {i}"))
                .with_steps([
                    "Traverse from head comparing each node".to_string(),
                    format!("Match found at position {i}"),
                ])
                .with_reply(Reply::Index(Some(i))),
            None => {
                let message = format!("{value} not found in list");
                Outcome::logged(message.clone())
                    .with_status(Status::info(message))
                    .with_steps([
                        "Traverse from head comparing each node",
                        "No node contains the target value",
                    ])
                    .with_reply(Reply::Index(None))
            }
        },
        DoublyLinkedListCommand::TraverseForward => {
            if model.is_empty() {
                return Err(OpError::EmptyStructure("List"));
            }
            let values = model.forward();
            let order = join(&values, " → ");
            Outcome::logged(format!("Traversed forward: {order}"))
                .with_status(Status::info(format!("Forward: {order}")))
                .with_steps([
                    "Start from head".to_string(),
                    "Follow next pointers until tail".to_string(),
                    format!("Visit order: {order}"),
                ])
                .with_reply(Reply::Values(values))
        }
        DoublyLinkedListCommand::TraverseBackward => {
            if model.is_empty() {
                return Err(OpError::EmptyStructure("List"));
            }
            let values = model.backward();
            let order = join(&values, " ← ");
            Outcome::logged(format!("Traversed backward: {order}"))
                .with_status(Status::info(format!("Backward: {order}")))
                .with_steps([
                    "Start from tail".to_string(),
                    "Follow prev pointers until head".to_string(),
                    format!("Visit order: {order}"),
                ])
                .with_reply(Reply::Values(values))
        }
        DoublyLinkedListCommand::Clear => {
            *model = DoublyLinkedListModel::default();
            Outcome::logged(cleared(Variant::DoublyLinkedList))
        }
    };
    Ok(outcome)
}
