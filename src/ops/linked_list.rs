use super::{cleared, LinkedListCommand, Outcome, Reply, Status};
use crate::error::OpResult;
use crate::model::{LinkedListModel, Position, Variant};

pub(super) fn apply(model: &mut LinkedListModel, command: LinkedListCommand) -> OpResult<Outcome> {
    let outcome = match command {
        LinkedListCommand::Insert { value, at } => {
            let slot = model.insert(value, at)?;
            let outcome = match at {
                Position::Start => Outcome::logged(format!("Added {value} at start of list"))
                    .with_steps([
                        format!("Create node {value}"),
                        "Point new node to current head".to_string(),
                        "Update head to new node".to_string(),
                    ]),
                Position::End => Outcome::logged(format!("Added {value} at end of list"))
                    .with_steps([
                        format!("Create node {value}"),
                        "Link current tail to new node".to_string(),
                        "New node becomes tail".to_string(),
                    ]),
                Position::Index(_) => Outcome::logged(format!("Added {value} at index {slot}"))
                    .with_steps([
                        format!("Insert {value} at position {slot}"),
                        "Relink next pointers to include the new node".to_string(),
                    ]),
            };
            outcome.with_reply(Reply::Index(Some(slot)))
        }
        LinkedListCommand::Remove { value } => {
            let slot = model.remove(value)?;
            Outcome::logged(format!("Removed {value} from list"))
                .with_steps([
                    format!("Find node with value {value}"),
                    "Bypass it by linking previous to next".to_string(),
                    "Update tail if last node was removed".to_string(),
                ])
                .with_reply(Reply::Index(Some(slot)))
        }
        LinkedListCommand::Search { value } => match model.search(value) {
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
        LinkedListCommand::Clear => {
            *model = LinkedListModel::default();
            Outcome::logged(cleared(Variant::LinkedList))
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpError;

    #[test]
    fn test_insert_positions() {
        let mut m = LinkedListModel::from_values([1, 2, 3]);
        apply(&mut m, LinkedListCommand::Insert { value: 0, at: Position::Start }).unwrap();
        apply(&mut m, LinkedListCommand::Insert { value: 4, at: Position::End }).unwrap();
        let out = apply(
            &mut m,
            LinkedListCommand::Insert {
                value: 9,
                at: Position::Index(2),
            },
        )
        .unwrap();
        assert_eq!(m.values(), vec![0, 1, 9, 2, 3, 4]);
        assert_eq!(out.log.as_deref(), Some("Added 9 at index 2"));
    }

    #[test]
    fn test_remove_missing_value() {
        let mut m = LinkedListModel::from_values([1, 2, 3]);
        let err = apply(&mut m, LinkedListCommand::Remove { value: 7 }).unwrap_err();
        assert_eq!(err.to_string(), "7 not found in list");
        assert_eq!(m.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut m = LinkedListModel::from_values([1]);
        assert_eq!(
            apply(
                &mut m,
                LinkedListCommand::Insert {
                    value: 5,
                    at: Position::Index(3)
                }
            ),
            Err(OpError::InvalidIndex { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_search_highlights_position() {
        let mut m = LinkedListModel::from_values([1, 2, 3]);
        let out = apply(&mut m, LinkedListCommand::Search { value: 3 }).unwrap();
        assert_eq!(out.status, Status::success("Found 3 at position 2"));
        assert_eq!(m.highlighted(), Some(2));
    }
}
