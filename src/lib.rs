//! Core of an interactive data structure visualizer.
//!
//! A [`Session`] owns one [`Structure`], applies [`Command`]s to it through the
//! operation engine, records a bounded [`OperationLog`] and paces DFS/BFS
//! traversals with the [`Animator`]. Every frame is a pure [`render`] of the
//! model into a [`Diagram`], which [`DiagramView`] paints with egui.

pub mod animator;
pub mod controls;
pub mod events;
pub mod layouts;
pub mod model;
pub mod ops;
pub mod render;

mod error;
mod oplog;
mod session;
mod settings;
mod view;

pub use self::animator::{Animator, CancelToken, Phase, Tick, Traversal, TraversalKind};
pub use self::controls::{bind, Control};
pub use self::error::{OpError, OpResult};
pub use self::events::{Event, EventSink};
pub use self::model::{Position, Structure, Variant};
pub use self::ops::{apply, Command, Outcome, Reply, Severity, Status};
pub use self::oplog::{LogEntry, OperationLog};
pub use self::render::{render, Diagram, Shape};
pub use self::session::Session;
pub use self::settings::{Settings, SettingsCanvas};
pub use self::view::{fit, DiagramView};
