use super::{cleared, GraphCommand, Outcome, Reply, Status};
use crate::animator::Traversal;
use crate::error::{OpError, OpResult};
use crate::model::{GraphModel, Variant};

pub(super) fn apply(model: &mut GraphModel, command: GraphCommand) -> OpResult<Outcome> {
    let outcome = match command {
        GraphCommand::AddNode { id } => {
            model.add_node(&id)?;
            Outcome::logged(format!("Added node: {id}")).with_steps([
                format!("Add node {id}"),
                "Recompute the layout of every component".to_string(),
            ])
        }
        GraphCommand::AddEdge { from, to } => {
            let edge = model.add_edge(&from, &to)?;
            Outcome::logged(format!("Added edge: {from} → {to}"))
                .with_steps([
                    format!("Add directed edge {from} → {to}"),
                    "Recompute the layout of every component".to_string(),
                ])
                .with_reply(Reply::Index(Some(edge)))
        }
        GraphCommand::Traverse { kind, start } => {
            let start_idx = model
                .index_of(&start)
                .ok_or_else(|| OpError::MissingStartNode(start.clone()))?;
            model.set_traversal_frame(Vec::new(), Vec::new());
            let traversal = Traversal::new(kind, model, start_idx);
            Outcome::unlogged(Status::info(format!("Running {kind} from {start}")))
                .with_steps(traversal.steps().to_vec())
                .with_reply(Reply::Traversal(traversal))
        }
        GraphCommand::Clear => {
            *model = GraphModel::default();
            Outcome::logged(cleared(Variant::Graph))
        }
    };
    Ok(outcome)
}
