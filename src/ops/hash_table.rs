use super::{cleared, HashTableCommand, Outcome, Reply, Status};
use crate::error::OpResult;
use crate::model::{HashTableModel, Upsert, Variant};

pub(super) fn apply(model: &mut HashTableModel, command: HashTableCommand) -> OpResult<Outcome> {
    let outcome = match command {
        HashTableCommand::Insert { key, value } => {
            let (bucket, upsert) = model.insert(&key, &value);
            let hashed = format!("Hash '{key}' to bucket {bucket}");
            let outcome = match upsert {
                Upsert::Inserted => Outcome::logged(format!(
                    "Inserted key: {key}, value: {value} in bucket {bucket}"
                ))
                .with_steps([hashed, "Append key-value to that bucket list".to_string()]),
                Upsert::Updated => Outcome::logged(format!(
                    "Updated key: {key} with value: {value} in bucket {bucket}"
                ))
                .with_steps([hashed, "Key exists; update its value".to_string()]),
            };
            outcome.with_reply(Reply::Index(Some(bucket)))
        }
        HashTableCommand::Search { key } => {
            let (bucket, found) = model.search(&key);
            let hashed = format!("Hash '{key}' to bucket {bucket}");
            let outcome = match &found {
                Some(value) => Outcome::logged(format!(
                    "Searched key: {key}, found value: {value} in bucket {bucket}"
                ))
                .with_status(Status::success(format!(
                    "Found key: {key}, value: {value} in bucket {bucket}"
                )))
                .with_steps([hashed, "Scan bucket list to find the key".to_string()]),
                None => Outcome::logged(format!("Searched key: {key}, not found"))
                    .with_status(Status::info(format!("Key: {key} not found")))
                    .with_steps([hashed, "Key not present in that bucket list".to_string()]),
            };
            outcome.with_reply(Reply::Lookup(found))
        }
        HashTableCommand::Delete { key } => {
            let (bucket, removed) = model.delete(&key);
            let hashed = format!("Hash '{key}' to bucket {bucket}");
            let outcome = if removed {
                Outcome::logged(format!("Deleted key: {key} from bucket {bucket}"))
                    .with_steps([hashed, "Find and remove the key from the list".to_string()])
            } else {
                Outcome::logged(format!("Tried to delete key: {key}, not found"))
                    .with_status(Status::info(format!("Key: {key} not found")))
                    .with_steps([hashed, "Key not present; nothing to delete".to_string()])
            };
            outcome.with_reply(Reply::Removed(removed))
        }
        HashTableCommand::Clear => {
            *model = HashTableModel::default();
            Outcome::logged(cleared(Variant::HashTable))
        }
    };
    Ok(outcome)
}
