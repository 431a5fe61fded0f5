use super::{cleared, Outcome, Reply, StackCommand, Status};
use crate::error::OpResult;
use crate::model::{StackModel, Variant};

pub(super) fn apply(model: &mut StackModel, command: StackCommand) -> OpResult<Outcome> {
    let outcome = match command {
        StackCommand::Push { value } => {
            model.push(value);
            Outcome::logged(format!("Pushed {value} onto stack")).with_steps([
                format!("Push {value} onto stack"),
                "Place element at the top (end of array)".to_string(),
            ])
        }
        StackCommand::Pop => {
            let popped = model.pop()?;
            Outcome::logged(format!("Popped {popped} from stack"))
                .with_steps([
                    "Pop removes the top element".to_string(),
                    format!("Removed {popped} from the end"),
                ])
                .with_reply(Reply::Value(popped))
        }
        StackCommand::Peek => {
            let top = model.peek()?;
            Outcome::logged(format!("Peeked at top element: {top}"))
                .with_status(Status::info(format!("Top element: {top}")))
                .with_steps(["Peek returns the top element without removing it"])
                .with_reply(Reply::Value(top))
        }
        StackCommand::Clear => {
            *model = StackModel::default();
            Outcome::logged(cleared(Variant::Stack))
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpError;

    #[test]
    fn test_pop_reverses_push_order() {
        let mut m = StackModel::default();
        for value in [1, 2, 3] {
            apply(&mut m, StackCommand::Push { value }).unwrap();
        }
        let popped: Vec<_> = (0..3)
            .map(|_| apply(&mut m, StackCommand::Pop).unwrap().reply)
            .collect();
        assert_eq!(popped, vec![Reply::Value(3), Reply::Value(2), Reply::Value(1)]);
        assert_eq!(
            apply(&mut m, StackCommand::Pop),
            Err(OpError::EmptyStructure("Stack"))
        );
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut m = StackModel::from_values([1, 2]);
        let out = apply(&mut m, StackCommand::Peek).unwrap();
        assert_eq!(out.reply, Reply::Value(2));
        assert_eq!(m.elements(), [1, 2]);
    }
}
