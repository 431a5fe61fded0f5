use super::{cleared, Outcome, PriorityQueueCommand, Reply, Status};
use crate::error::OpResult;
use crate::model::{HeapEntry, HeapModel, Variant};

pub(super) fn apply(model: &mut HeapModel, command: PriorityQueueCommand) -> OpResult<Outcome> {
    let outcome = match command {
        PriorityQueueCommand::Push { value, priority } => {
            let slot = model.push(HeapEntry::new(value, priority));
            Outcome::logged(format!("Enqueued {value} with priority {priority}"))
                .with_steps([
                    format!("Insert ({value}, priority {priority}) into heap"),
                    "Place at the end".to_string(),
                    "Heapify up: swap with parent while greater than parent".to_string(),
                    "Stop when heap property holds".to_string(),
                ])
                .with_reply(Reply::Index(Some(slot)))
        }
        PriorityQueueCommand::Pop => {
            let max = model.pop()?;
            Outcome::logged(format!(
                "Dequeued max: {} (priority {})",
                max.value, max.priority
            ))
            .with_steps([
                "Remove root (max element)",
                "Move last element to root",
                "Heapify down: swap with larger child until heap property holds",
            ])
            .with_reply(Reply::Entry(max))
        }
        PriorityQueueCommand::Front => {
            let max = model.front()?;
            let message = format!("Front (Max): {} (priority {})", max.value, max.priority);
            Outcome::logged(message.clone())
                .with_status(Status::info(message))
                .with_steps(["The root of a max-heap is always the maximum element"])
                .with_reply(Reply::Entry(max))
        }
        PriorityQueueCommand::Rear => {
            let min = model.rear()?;
            let message = format!("Rear (Min): {} (priority {})", min.value, min.priority);
            Outcome::logged(message.clone())
                .with_status(Status::info(message))
                .with_steps(["In an unsorted array view of heap nodes, find min by scanning all nodes"])
                .with_reply(Reply::Entry(min))
        }
        PriorityQueueCommand::Clear => {
            *model = HeapModel::default();
            Outcome::logged(cleared(Variant::PriorityQueue))
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpError;

    fn seeded() -> HeapModel {
        HeapModel::from_entries([
            HeapEntry::new(40, 40),
            HeapEntry::new(30, 30),
            HeapEntry::new(20, 20),
            HeapEntry::new(10, 10),
        ])
    }

    #[test]
    fn test_push_then_pop_max() {
        let mut m = seeded();
        let out = apply(&mut m, PriorityQueueCommand::Push { value: 50, priority: 50 }).unwrap();
        assert_eq!(out.reply, Reply::Index(Some(0)));
        assert_eq!(m.entries()[0], HeapEntry::new(50, 50));
        let out = apply(&mut m, PriorityQueueCommand::Pop).unwrap();
        assert_eq!(out.reply, Reply::Entry(HeapEntry::new(50, 50)));
        assert_eq!(m.entries()[0], HeapEntry::new(40, 40));
    }

    #[test]
    fn test_front_and_rear_highlight() {
        let mut m = seeded();
        let out = apply(&mut m, PriorityQueueCommand::Rear).unwrap();
        assert_eq!(out.status.message, "Rear (Min): 10 (priority 10)");
        assert_eq!(m.highlighted(), Some(3));
        apply(&mut m, PriorityQueueCommand::Front).unwrap();
        assert_eq!(m.highlighted(), Some(0));
    }

    #[test]
    fn test_empty_heap() {
        let mut m = HeapModel::default();
        for cmd in [
            PriorityQueueCommand::Pop,
            PriorityQueueCommand::Front,
            PriorityQueueCommand::Rear,
        ] {
            assert_eq!(
                apply(&mut m, cmd),
                Err(OpError::EmptyStructure("Priority Queue"))
            );
        }
    }
}
