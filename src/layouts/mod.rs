//! Deterministic placement of nodes from topology alone.
//!
//! Every layout has a serializable `State` holding its spacing parameters;
//! the defaults reproduce the 800×400 teaching canvas.

pub mod circular;
pub mod forest;
pub mod heap;
pub mod tree;
