use egui::{Align2, Pos2, Vec2};

use super::linked_list::{draw_nodes, link, node_rect, NODE, START};
use super::{palette, placeholder, Diagram};
use crate::model::DoublyLinkedListModel;

pub(super) fn render(model: &DoublyLinkedListModel, size: Vec2) -> Diagram {
    let nodes = model.nodes();
    if nodes.is_empty() {
        return placeholder(size, START.y, "Empty Doubly Linked List");
    }
    let mut d = Diagram::new(size);
    let mid = START.y + NODE.y / 2.;
    for (i, node) in nodes.iter().enumerate() {
        if node.next.is_some() {
            link(&mut d, i, mid - 15., false, "next");
        }
        if let Some(prev) = node.prev {
            link(&mut d, prev, mid + 15., true, "prev");
        }
    }
    draw_nodes(&mut d, nodes.iter().map(|n| n.value), model.highlighted());

    let tail = node_rect(nodes.len() - 1);
    let nulls = [
        Pos2::new(START.x - 30., mid + 15.),
        Pos2::new(tail.right() + 30., mid - 15.),
    ];
    for pos in nulls {
        d.text(pos, Align2::CENTER_CENTER, "NULL", 12., palette::GRAY);
    }
    d
}
