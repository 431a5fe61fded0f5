use eframe::{App, CreationContext};
use egui::{self, Align2, CollapsingHeader, Color32, RichText, ScrollArea, Ui};
use egui_dsviz::{
    bind, Command, Control, DiagramView, OpResult, Phase, Session, Status, Variant,
};
use instant::Instant;

mod panels;
mod status;
mod ui_consts;

#[cfg(feature = "events")]
pub const EVENTS_LIMIT: usize = 200;

#[cfg(feature = "events")]
pub use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
pub use egui_dsviz::Event;

use crate::panels::Inputs;
use crate::status::{StatusKind, StatusQueue};
use crate::ui_consts::{
    HEADING_TEXT_SIZE, LOG_SCROLL_MAX_HEIGHT, SECTION_SPACING, SIDE_PANEL_WIDTH,
    STEPS_SCROLL_MAX_HEIGHT, UI_MARGIN,
};

pub struct DemoApp {
    pub session: Session,
    pub inputs: Inputs,
    pub status: StatusQueue,
    pub show_sidebar: bool,
    #[cfg(feature = "events")]
    pub last_events: Vec<String>,
    #[cfg(feature = "events")]
    pub event_consumer: crate::Receiver<Event>,
}

impl DemoApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        #[cfg(feature = "events")]
        let (event_publisher, event_consumer) = crate::unbounded();

        let session = Session::new(Variant::Array);
        #[cfg(feature = "events")]
        let session = session.with_sink(Box::new(event_publisher));

        Self {
            session,
            inputs: Inputs::default(),
            status: StatusQueue::new(),
            show_sidebar: true,
            #[cfg(feature = "events")]
            last_events: Vec::new(),
            #[cfg(feature = "events")]
            event_consumer,
        }
    }

    fn submit(&mut self, bound: OpResult<Command>) {
        match bound {
            Ok(command) => {
                // a rejected command leaves its warning as the session status
                if let Err(err) = self.session.apply(command) {
                    log::debug!("command rejected: {err}");
                }
                if let Some(s) = self.session.status() {
                    self.status.push(s);
                }
            }
            Err(err) => {
                log::warn!("input rejected: {err}");
                self.status.push(&Status::from(&err));
            }
        }
    }

    fn switch(&mut self, variant: Variant) {
        self.session.switch(variant);
        self.status.clear();
    }

    fn ui_variant_selector(&mut self, ui: &mut Ui) {
        let current = self.session.variant();
        let mut selected = current;
        egui::ComboBox::from_label("Structure")
            .selected_text(current.title())
            .show_ui(ui, |ui| {
                for v in Variant::ALL {
                    ui.selectable_value(&mut selected, v, v.title());
                }
            });
        if selected != current {
            self.switch(selected);
        }
    }

    fn ui_controls(&mut self, ui: &mut Ui) {
        let busy = self.session.is_busy();
        let variant = self.session.variant();
        let mut fired = None;
        ui.add_enabled_ui(!busy, |ui| {
            if let Some(control) = panels::show(ui, variant, &mut self.inputs) {
                fired = Some(bind(control));
            }
        });
        // Clear and reset stay usable while a traversal runs; both cancel it.
        let mut clear = false;
        let mut reset = false;
        ui.horizontal(|ui| {
            clear = ui.button("Clear").clicked();
            reset = ui.button("Reset").clicked();
        });

        if let Some(bound) = fired {
            self.submit(bound);
        }
        if clear {
            self.submit(bind(Control::Clear(variant)));
        }
        if reset {
            self.session.reset();
            if let Some(s) = self.session.status() {
                self.status.push(s);
            }
        }
        if busy {
            ui.label(RichText::new("Traversal running…").italics());
        }
    }

    fn ui_steps(&self, ui: &mut Ui) {
        CollapsingHeader::new("Step explanation")
            .default_open(true)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("steps")
                    .max_height(STEPS_SCROLL_MAX_HEIGHT)
                    .show(ui, |ui| {
                        for (i, step) in self.session.steps().iter().enumerate() {
                            ui.label(format!("Step {}: {step}", i + 1));
                        }
                    });
            });
    }

    fn ui_log(&self, ui: &mut Ui) {
        CollapsingHeader::new("Operation log")
            .default_open(true)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("log")
                    .max_height(LOG_SCROLL_MAX_HEIGHT)
                    .show(ui, |ui| {
                        let now = Instant::now();
                        for entry in self.session.log().iter() {
                            let ago = now.saturating_duration_since(entry.at).as_secs();
                            ui.label(format!("{ago}s ago  {}", entry.message));
                        }
                    });
            });
    }

    #[cfg(feature = "events")]
    fn ui_events(&mut self, ui: &mut Ui) {
        while let Ok(event) = self.event_consumer.try_recv() {
            self.last_events.push(format!("{event:?}"));
        }
        if self.last_events.len() > EVENTS_LIMIT {
            let overflow = self.last_events.len() - EVENTS_LIMIT;
            self.last_events.drain(..overflow);
        }
        CollapsingHeader::new("Events").show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt("events")
                .min_scrolled_height(ui_consts::EVENTS_MIN_HEIGHT)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for e in &self.last_events {
                        ui.small(e);
                    }
                });
        });
    }

    fn draw_status(&mut self, ui: &Ui) {
        self.status.retain_active();
        let pos = ui.max_rect().left_top() + egui::vec2(UI_MARGIN, UI_MARGIN);
        if let Some(m) = self.status.latest() {
            let font = egui::TextStyle::Monospace.resolve(ui.style());
            let color = match m.kind {
                StatusKind::Danger => ui.visuals().error_fg_color,
                StatusKind::Warning => ui.visuals().warn_fg_color,
                StatusKind::Success => Color32::from_rgb(80, 200, 120),
                StatusKind::Info => ui.visuals().hyperlink_color,
            };
            ui.painter()
                .text(pos, Align2::LEFT_TOP, m.text.clone(), font, color);
        }
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let was_running = self.session.phase() == Phase::Running;
        let now = Instant::now();
        self.session.tick(now);
        if was_running && self.session.phase() == Phase::Completed {
            if let Some(s) = self.session.status() {
                self.status.push(s);
            }
        }
        if let Some(wait) = self.session.time_until_next_frame(now) {
            ctx.request_repaint_after(wait);
        }

        if self.show_sidebar {
            egui::SidePanel::right("right")
                .default_width(SIDE_PANEL_WIDTH)
                .min_width(SIDE_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        ui.label(RichText::new(self.session.variant().title()).size(HEADING_TEXT_SIZE));
                        self.ui_variant_selector(ui);
                        ui.add_space(SECTION_SPACING);
                        self.ui_controls(ui);
                        ui.add_space(SECTION_SPACING);
                        self.ui_steps(ui);
                        self.ui_log(ui);
                        #[cfg(feature = "events")]
                        self.ui_events(ui);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let diagram = self.session.render();
            ui.add(DiagramView::new(&diagram));
            self.draw_status(ui);
            if !self.status.is_empty() {
                ui.ctx().request_repaint_after(std::time::Duration::from_millis(250));
            }
        });
    }
}
