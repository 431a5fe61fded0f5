use thiserror::Error;

use crate::model::Variant;

/// Every way an operation can be refused.
///
/// All variants are recoverable: the model is left exactly as it was before
/// the command was applied. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    /// Raw widget input could not be turned into a typed value.
    #[error("Please enter a valid {expected} for {field}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid index {index} (size is {len})")]
    InvalidIndex { index: i64, len: usize },

    #[error("{value} not found in {place}")]
    NotFound { value: i64, place: &'static str },

    #[error("{0} is empty")]
    EmptyStructure(&'static str),

    #[error("Node {0} already exists")]
    DuplicateNode(String),

    #[error("Edge {from} → {to} already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("Both nodes must exist ({from} → {to})")]
    MissingEndpoint { from: String, to: String },

    #[error("Start node {0} does not exist")]
    MissingStartNode(String),

    #[error("Command for {expected} sent while {found} is active")]
    VariantMismatch { expected: Variant, found: Variant },

    #[error("A traversal is running; wait for it to finish")]
    TraversalInProgress,
}

pub type OpResult<T> = Result<T, OpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            OpError::InvalidIndex { index: 7, len: 5 }.to_string(),
            "Invalid index 7 (size is 5)"
        );
        assert_eq!(OpError::EmptyStructure("Stack").to_string(), "Stack is empty");
        assert_eq!(
            OpError::DuplicateEdge {
                from: "A".to_string(),
                to: "B".to_string()
            }
            .to_string(),
            "Edge A → B already exists"
        );
        assert_eq!(
            OpError::InvalidInput {
                field: "value",
                expected: "number"
            }
            .to_string(),
            "Please enter a valid number for value"
        );
    }
}
