//! The Renderer: a pure function from a model to a [`Diagram`].
//!
//! Every call rebuilds the whole picture, so rendering the same model twice
//! yields equal diagrams. Empty collections draw a centered message instead
//! of a blank canvas.

mod array;
mod diagram;
mod doubly_linked_list;
mod graph;
mod hash_table;
mod heap;
mod linked_list;
pub mod palette;
mod queue;
mod stack;
mod tree;

use egui::{Align2, Pos2, Vec2};

use crate::model::Structure;
use crate::settings::SettingsCanvas;

pub use self::diagram::{Diagram, Shape};

pub fn render(structure: &Structure, canvas: &SettingsCanvas) -> Diagram {
    let size = match structure {
        Structure::HashTable(_) => canvas.hash_table_size,
        _ => canvas.default_size,
    };
    match structure {
        Structure::Array(m) => array::render(m, size),
        Structure::LinkedList(m) => linked_list::render(m, size),
        Structure::DoublyLinkedList(m) => doubly_linked_list::render(m, size),
        Structure::Stack(m) => stack::render(m, size),
        Structure::Queue(m) => queue::render(m, size),
        Structure::BinaryTree(m) => tree::render(m, size),
        Structure::PriorityQueue(m) => heap::render(m, size),
        Structure::HashTable(m) => hash_table::render(m, size),
        Structure::Graph(m) => graph::render(m, size),
    }
}

/// A diagram holding only `message`, centered horizontally at height `y`.
pub(crate) fn placeholder(size: Vec2, y: f32, message: &str) -> Diagram {
    let mut d = Diagram::new(size);
    d.text(
        Pos2::new(size.x / 2., y),
        Align2::CENTER_CENTER,
        message,
        16.,
        palette::GRAY,
    );
    d
}
