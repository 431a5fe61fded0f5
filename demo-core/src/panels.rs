use egui::Ui;
use egui_dsviz::{ops::TreeOrder, Control, TraversalKind, Variant};

/// Text typed into the control forms. Shared by every variant so switching
/// keeps what the user entered.
pub struct Inputs {
    pub value: String,
    pub index: String,
    pub position: &'static str,
    pub priority: String,
    pub key: String,
    pub entry: String,
    pub node: String,
    pub from: String,
    pub to: String,
    pub start: String,
    pub kind: TraversalKind,
    pub order: TreeOrder,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            value: String::new(),
            index: String::new(),
            position: "end",
            priority: String::new(),
            key: String::new(),
            entry: String::new(),
            node: String::new(),
            from: String::new(),
            to: String::new(),
            start: "0".to_string(),
            kind: TraversalKind::Dfs,
            order: TreeOrder::InOrder,
        }
    }
}

fn field(ui: &mut Ui, label: &str, buf: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(buf).desired_width(90.0));
    });
}

fn position(ui: &mut Ui, inputs: &mut Inputs) {
    ui.horizontal(|ui| {
        for p in ["start", "end", "index"] {
            ui.radio_value(&mut inputs.position, p, p);
        }
    });
    if inputs.position == "index" {
        field(ui, "Index", &mut inputs.index);
    }
}

/// Draws the form for `variant` and returns the control the user fired.
pub fn show<'a>(ui: &mut Ui, variant: Variant, inputs: &'a mut Inputs) -> Option<Control<'a>> {
    let mut fired = None;
    match variant {
        Variant::Array => {
            field(ui, "Value", &mut inputs.value);
            field(ui, "Index", &mut inputs.index);
            ui.horizontal_wrapped(|ui| {
                if ui.button("Insert").clicked() {
                    fired = Some(0);
                }
                if ui.button("Remove").clicked() {
                    fired = Some(1);
                }
                if ui.button("Search").clicked() {
                    fired = Some(2);
                }
                if ui.button("Sort").clicked() {
                    fired = Some(3);
                }
                if ui.button("Shuffle").clicked() {
                    fired = Some(4);
                }
            });
            fired.map(|b| match b {
                0 => Control::ArrayInsert {
                    value: &inputs.value,
                    index: &inputs.index,
                },
                1 => Control::ArrayRemove {
                    index: &inputs.index,
                },
                2 => Control::ArraySearch {
                    value: &inputs.value,
                },
                3 => Control::ArraySort,
                _ => Control::ArrayShuffle,
            })
        }
        Variant::LinkedList | Variant::DoublyLinkedList => {
            let doubly = variant == Variant::DoublyLinkedList;
            field(ui, "Value", &mut inputs.value);
            position(ui, inputs);
            ui.horizontal_wrapped(|ui| {
                if ui.button("Insert").clicked() {
                    fired = Some(0);
                }
                if ui.button("Remove").clicked() {
                    fired = Some(1);
                }
                if ui.button("Search").clicked() {
                    fired = Some(2);
                }
                if doubly && ui.button("Forward").clicked() {
                    fired = Some(3);
                }
                if doubly && ui.button("Backward").clicked() {
                    fired = Some(4);
                }
            });
            let (value, at, index) = (&inputs.value, inputs.position, &inputs.index);
            fired.map(|b| match (doubly, b) {
                (false, 0) => Control::ListInsert {
                    value,
                    position: at,
                    index,
                },
                (false, 1) => Control::ListRemove { value },
                (false, _) => Control::ListSearch { value },
                (true, 0) => Control::DoublyInsert {
                    value,
                    position: at,
                    index,
                },
                (true, 1) => Control::DoublyRemove { value },
                (true, 2) => Control::DoublySearch { value },
                (true, 3) => Control::DoublyTraverseForward,
                (true, _) => Control::DoublyTraverseBackward,
            })
        }
        Variant::Stack => {
            field(ui, "Value", &mut inputs.value);
            ui.horizontal(|ui| {
                if ui.button("Push").clicked() {
                    fired = Some(0);
                }
                if ui.button("Pop").clicked() {
                    fired = Some(1);
                }
                if ui.button("Peek").clicked() {
                    fired = Some(2);
                }
            });
            fired.map(|b| match b {
                0 => Control::StackPush {
                    value: &inputs.value,
                },
                1 => Control::StackPop,
                _ => Control::StackPeek,
            })
        }
        Variant::Queue => {
            field(ui, "Value", &mut inputs.value);
            ui.horizontal(|ui| {
                if ui.button("Enqueue").clicked() {
                    fired = Some(0);
                }
                if ui.button("Dequeue").clicked() {
                    fired = Some(1);
                }
                if ui.button("Front").clicked() {
                    fired = Some(2);
                }
                if ui.button("Rear").clicked() {
                    fired = Some(3);
                }
            });
            fired.map(|b| match b {
                0 => Control::Enqueue {
                    value: &inputs.value,
                },
                1 => Control::Dequeue,
                2 => Control::QueueFront,
                _ => Control::QueueRear,
            })
        }
        Variant::BinaryTree => {
            field(ui, "Value", &mut inputs.value);
            ui.horizontal(|ui| {
                if ui.button("Insert").clicked() {
                    fired = Some(0);
                }
                if ui.button("Remove").clicked() {
                    fired = Some(1);
                }
                if ui.button("Search").clicked() {
                    fired = Some(2);
                }
            });
            ui.horizontal(|ui| {
                for order in [TreeOrder::InOrder, TreeOrder::PreOrder, TreeOrder::PostOrder] {
                    ui.radio_value(&mut inputs.order, order, order.name());
                }
                if ui.button("Traverse").clicked() {
                    fired = Some(3);
                }
            });
            fired.map(|b| match b {
                0 => Control::TreeInsert {
                    value: &inputs.value,
                },
                1 => Control::TreeRemove {
                    value: &inputs.value,
                },
                2 => Control::TreeSearch {
                    value: &inputs.value,
                },
                _ => Control::TreeTraverse {
                    order: inputs.order,
                },
            })
        }
        Variant::PriorityQueue => {
            field(ui, "Value", &mut inputs.value);
            field(ui, "Priority", &mut inputs.priority);
            ui.horizontal(|ui| {
                if ui.button("Push").clicked() {
                    fired = Some(0);
                }
                if ui.button("Pop").clicked() {
                    fired = Some(1);
                }
                if ui.button("Front").clicked() {
                    fired = Some(2);
                }
                if ui.button("Rear").clicked() {
                    fired = Some(3);
                }
            });
            fired.map(|b| match b {
                0 => Control::PriorityPush {
                    value: &inputs.value,
                    priority: &inputs.priority,
                },
                1 => Control::PriorityPop,
                2 => Control::PriorityFront,
                _ => Control::PriorityRear,
            })
        }
        Variant::HashTable => {
            field(ui, "Key", &mut inputs.key);
            field(ui, "Value", &mut inputs.entry);
            ui.horizontal(|ui| {
                if ui.button("Insert").clicked() {
                    fired = Some(0);
                }
                if ui.button("Search").clicked() {
                    fired = Some(1);
                }
                if ui.button("Delete").clicked() {
                    fired = Some(2);
                }
            });
            fired.map(|b| match b {
                0 => Control::HashInsert {
                    key: &inputs.key,
                    value: &inputs.entry,
                },
                1 => Control::HashSearch { key: &inputs.key },
                _ => Control::HashDelete { key: &inputs.key },
            })
        }
        Variant::Graph => {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut inputs.node).desired_width(60.0));
                if ui.button("Add node").clicked() {
                    fired = Some(0);
                }
            });
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut inputs.from).desired_width(40.0));
                ui.label("→");
                ui.add(egui::TextEdit::singleline(&mut inputs.to).desired_width(40.0));
                if ui.button("Add edge").clicked() {
                    fired = Some(1);
                }
            });
            ui.horizontal(|ui| {
                for kind in [TraversalKind::Dfs, TraversalKind::Bfs] {
                    ui.radio_value(&mut inputs.kind, kind, kind.name());
                }
                ui.label("from");
                ui.add(egui::TextEdit::singleline(&mut inputs.start).desired_width(40.0));
                if ui.button("Run").clicked() {
                    fired = Some(2);
                }
            });
            fired.map(|b| match b {
                0 => Control::GraphAddNode { id: &inputs.node },
                1 => Control::GraphAddEdge {
                    from: &inputs.from,
                    to: &inputs.to,
                },
                _ => Control::GraphTraverse {
                    kind: inputs.kind,
                    start: &inputs.start,
                },
            })
        }
    }
}
