use rand::Rng;

use super::{cleared, ArrayCommand, Outcome, Reply, Status};
use crate::error::OpResult;
use crate::model::{ArrayModel, Variant};

pub(super) fn apply<R: Rng + ?Sized>(
    model: &mut ArrayModel,
    command: ArrayCommand,
    rng: &mut R,
) -> OpResult<Outcome> {
    let outcome = match command {
        ArrayCommand::Insert { value, index: None } => {
            let slot = model.insert(value, None)?;
            Outcome::logged(format!("Added {value} to end of array"))
                .with_steps([
                    format!("Append {value} to the end"),
                    "No shifting needed".to_string(),
                    format!("Array size becomes {}", model.len()),
                ])
                .with_reply(Reply::Index(Some(slot)))
        }
        ArrayCommand::Insert {
            value,
            index: Some(index),
        } => {
            let slot = model.insert(value, Some(index))?;
            Outcome::logged(format!("Inserted {value} at index {slot}"))
                .with_steps([
                    format!("Insert {value} at index {slot}"),
                    "Shift elements right from that index by one".to_string(),
                    "Place new value at target index".to_string(),
                ])
                .with_reply(Reply::Index(Some(slot)))
        }
        ArrayCommand::Remove { index } => {
            let removed = model.remove(index)?;
            Outcome::logged(format!("Removed {removed} from index {index}"))
                .with_steps([
                    format!("Remove element at index {index}"),
                    "Shift following elements left by one to fill the gap".to_string(),
                ])
                .with_reply(Reply::Value(removed))
        }
        ArrayCommand::Search { value } => match model.search(value) {
            Some(i) => Outcome::logged(format!("Found {value} at index {i}"))
                .with_steps([
                    format!("Linear search for {value}"),
                    format!("Compare sequentially until index {i} is found"),
                ])
                .with_reply(Reply::Index(Some(i))),
            None => {
                let message = format!("{value} not found in array");
                Outcome::logged(message.clone())
                    .with_status(Status::info(message))
                    .with_steps([
                        format!("Linear search for {value}"),
                        "Compared all elements, no match found".to_string(),
                    ])
                    .with_reply(Reply::Index(None))
            }
        },
        ArrayCommand::Sort => {
            model.sort();
            Outcome::logged("Array sorted in ascending order").with_steps([
                "Sort array in ascending order",
                "Using built-in sort with numeric comparator",
            ])
        }
        ArrayCommand::Shuffle => {
            model.shuffle(rng);
            Outcome::logged("Array shuffled").with_steps([
                "Shuffle using Fisher–Yates algorithm",
                "Swap each element with a random earlier index",
            ])
        }
        ArrayCommand::Clear => {
            *model = ArrayModel::default();
            Outcome::logged(cleared(Variant::Array))
        }
    };
    Ok(outcome)
}
