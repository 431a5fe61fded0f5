use super::{cleared, Outcome, QueueCommand, Reply, Status};
use crate::error::OpResult;
use crate::model::{QueueModel, Variant};

pub(super) fn apply(model: &mut QueueModel, command: QueueCommand) -> OpResult<Outcome> {
    let outcome = match command {
        QueueCommand::Enqueue { value } => {
            model.enqueue(value);
            Outcome::logged(format!("Enqueued {value} to queue")).with_steps([
                format!("Enqueue {value}"),
                "Insert at the rear and move rear pointer forward".to_string(),
            ])
        }
        QueueCommand::Dequeue => {
            let value = model.dequeue()?;
            Outcome::logged(format!("Dequeued {value} from queue"))
                .with_steps([
                    "Dequeue removes from the front".to_string(),
                    format!("Removed {value} and shifted remaining items left"),
                ])
                .with_reply(Reply::Value(value))
        }
        QueueCommand::Front => {
            let value = model.front()?;
            let message = format!("Front element: {value}");
            Outcome::logged(message.clone())
                .with_status(Status::info(message))
                .with_steps(["Front returns the element at the head without removing it"])
                .with_reply(Reply::Value(value))
        }
        QueueCommand::Rear => {
            let value = model.rear()?;
            let message = format!("Rear element: {value}");
            Outcome::logged(message.clone())
                .with_status(Status::info(message))
                .with_steps(["Rear returns the element at the tail without removing it"])
                .with_reply(Reply::Value(value))
        }
        QueueCommand::Clear => {
            *model = QueueModel::default();
            Outcome::logged(cleared(Variant::Queue))
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpError;

    #[test]
    fn test_dequeue_preserves_enqueue_order() {
        let mut m = QueueModel::default();
        for value in [4, 5, 6] {
            apply(&mut m, QueueCommand::Enqueue { value }).unwrap();
        }
        assert_eq!(m.rear_index(), 2);
        let out: Vec<_> = (0..3)
            .map(|_| apply(&mut m, QueueCommand::Dequeue).unwrap().reply)
            .collect();
        assert_eq!(out, vec![Reply::Value(4), Reply::Value(5), Reply::Value(6)]);
        assert_eq!(m.rear_index(), 0);
        assert_eq!(
            apply(&mut m, QueueCommand::Front),
            Err(OpError::EmptyStructure("Queue"))
        );
    }

    #[test]
    fn test_front_and_rear_are_read_only() {
        let mut m = QueueModel::from_values([1, 2, 3]);
        assert_eq!(apply(&mut m, QueueCommand::Front).unwrap().reply, Reply::Value(1));
        assert_eq!(apply(&mut m, QueueCommand::Rear).unwrap().reply, Reply::Value(3));
        assert_eq!(m.elements(), [1, 2, 3]);
    }
}
