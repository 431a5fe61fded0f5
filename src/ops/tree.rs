use std::cmp::Ordering;

use super::{cleared, Outcome, Reply, Status, TreeCommand, TreeOrder};
use crate::error::{OpError, OpResult};
use crate::model::{BstModel, Variant};

/// One line per node visited on the way down from the root.
fn descent(path: &[i64], value: i64) -> Vec<String> {
    path.iter()
        .map(|&node| match value.cmp(&node) {
            Ordering::Less => format!("Compare {value} with {node}: go left"),
            Ordering::Greater => format!("Compare {value} with {node}: go right"),
            Ordering::Equal => format!("Compare {value} with {node}: match"),
        })
        .collect()
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

pub(super) fn apply(model: &mut BstModel, command: TreeCommand) -> OpResult<Outcome> {
    let outcome = match command {
        TreeCommand::Insert { value } => {
            let mut steps = descent(&model.path_to(value), value);
            if model.insert(value) {
                steps.push(format!("Place {value} in the empty slot"));
                Outcome::logged(format!("Inserted {value} into tree")).with_steps(steps)
            } else {
                steps.push("Equal values are not inserted twice".to_string());
                Outcome::unlogged(Status::info(format!("{value} is already in the tree")))
                    .with_steps(steps)
            }
        }
        TreeCommand::Remove { value } => {
            let mut steps = descent(&model.path_to(value), value);
            model.remove(value)?;
            steps.extend([
                "With two children, copy the in-order successor and remove it instead".to_string(),
                "Otherwise splice the only child (or nothing) into its place".to_string(),
            ]);
            Outcome::logged(format!("Removed {value} from tree")).with_steps(steps)
        }
        TreeCommand::Search { value } => {
            let mut steps = descent(&model.path_to(value), value);
            if model.search(value) {
                Outcome::logged(format!("Found {value} in tree"))
                    .with_steps(steps)
                    .with_reply(Reply::Found(true))
            } else {
                steps.push("Reached an empty subtree".to_string());
                let message = format!("{value} not found in tree");
                Outcome::logged(message.clone())
                    .with_status(Status::info(message))
                    .with_steps(steps)
                    .with_reply(Reply::Found(false))
            }
        }
        TreeCommand::Traverse { order } => {
            if model.is_empty() {
                return Err(OpError::EmptyStructure("Tree"));
            }
            let (values, rule) = match order {
                TreeOrder::InOrder => (model.in_order(), "left subtree, node, right subtree"),
                TreeOrder::PreOrder => (model.pre_order(), "node, left subtree, right subtree"),
                TreeOrder::PostOrder => (model.post_order(), "left subtree, right subtree, node"),
            };
            let message = format!("{} traversal: {}", order.name(), join(&values));
            Outcome::logged(message.clone())
                .with_status(Status::info(message))
                .with_steps([
                    format!("Visit {rule} recursively"),
                    format!("Visit order: {}", join(&values)),
                ])
                .with_reply(Reply::Values(values))
        }
        TreeCommand::Clear => {
            *model = BstModel::default();
            Outcome::logged(cleared(Variant::BinaryTree))
        }
    };
    Ok(outcome)
}
