//! The single context object a UI shell holds: the active variant, its model,
//! the operation log and the traversal animator.

use std::time::Duration;

use instant::Instant;
use rand::{rngs::StdRng, SeedableRng};

use crate::animator::{Animator, Phase, Tick};
use crate::error::{OpError, OpResult};
use crate::events::{
    Event, EventSink, PayloadLogged, PayloadSteps, PayloadTraversalDone, PayloadTraversalFrame,
};
use crate::model::{Structure, Variant};
use crate::ops::{self, Command, Reply, Status};
use crate::oplog::OperationLog;
use crate::render::{self, Diagram};
use crate::settings::Settings;

pub struct Session {
    settings: Settings,
    structure: Structure,
    log: OperationLog,
    animator: Animator,
    status: Option<Status>,
    steps: Vec<String>,
    rng: StdRng,
    sink: Option<Box<dyn EventSink>>,
}

impl Session {
    pub fn new(variant: Variant) -> Self {
        let settings = Settings::default();
        Self {
            structure: Structure::initial(variant),
            log: OperationLog::new(settings.log_capacity),
            animator: Animator::new(settings.step_delay),
            status: None,
            steps: Vec::new(),
            rng: StdRng::from_os_rng(),
            sink: None,
            settings,
        }
    }

    /// Replaces the settings. The log is rebuilt empty with the new capacity.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.log = OperationLog::new(settings.log_capacity);
        self.animator = Animator::new(settings.step_delay);
        self.settings = settings;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Makes shuffles reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn variant(&self) -> Variant {
        self.structure.variant()
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Last status shown to the user.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Last published step explanation.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn phase(&self) -> Phase {
        self.animator.phase()
    }

    /// True while a traversal is running; mutating controls should be disabled.
    pub fn is_busy(&self) -> bool {
        self.animator.is_running()
    }

    /// Drops the current model and seeds `variant` with its canned example.
    pub fn switch(&mut self, variant: Variant) {
        self.animator.cancel();
        self.structure = Structure::initial(variant);
        self.steps.clear();
        log::info!("switched to {variant}");
    }

    pub fn reset(&mut self) {
        let variant = self.variant();
        self.animator.cancel();
        self.structure = Structure::initial(variant);
        self.log.clear();
        self.publish_steps(Vec::new());
        self.publish_status(Status::info("Visualization reset"));
        log::info!("{variant} reset");
    }

    /// Runs one command against the active model.
    ///
    /// While a traversal is running only a clear of the active variant is
    /// accepted, and it cancels the walk first. A rejected command leaves the model untouched and reports a
    /// warning status.
    pub fn apply(&mut self, command: Command) -> OpResult<Reply> {
        self.apply_at(command, Instant::now())
    }

    pub fn apply_at(&mut self, command: Command, now: Instant) -> OpResult<Reply> {
        if self.animator.is_running() {
            if command.is_clear() && command.variant() == self.variant() {
                self.animator.cancel();
            } else {
                return Err(self.reject(OpError::TraversalInProgress));
            }
        }

        log::debug!("apply {command:?}");
        let outcome = match ops::apply(&mut self.structure, command, &mut self.rng) {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.reject(err)),
        };

        if let Some(message) = outcome.log {
            self.log.push_at(now, message.clone());
            self.emit(Event::Logged(PayloadLogged { message }));
        }
        self.publish_status(outcome.status);
        self.publish_steps(outcome.steps);

        if let Reply::Traversal(traversal) = &outcome.reply {
            self.animator.start(traversal.clone(), now);
        }
        Ok(outcome.reply)
    }

    /// Advances a running traversal. Returns true when the diagram changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Structure::Graph(graph) = &mut self.structure else {
            return false;
        };
        match self.animator.tick(now, graph) {
            Tick::Wait => false,
            Tick::Cancelled => true,
            Tick::Frame(step) => {
                let (visited, edges) = match self.animator.traversal() {
                    Some(t) => (t.visited_ids(graph), t.traversed_edges().to_vec()),
                    None => return false,
                };
                graph.set_traversal_frame(visited.clone(), edges.clone());
                self.emit(Event::TraversalFrame(PayloadTraversalFrame {
                    step,
                    visited,
                    traversed_edges: edges,
                }));
                true
            }
            Tick::Done(traversal) => {
                let order = traversal.visited_ids(graph);
                let summary = traversal.summary(graph);
                graph.set_traversal_frame(order.clone(), Vec::new());
                log::info!("{summary}");

                self.log.push_at(now, summary.clone());
                self.emit(Event::Logged(PayloadLogged {
                    message: summary.clone(),
                }));
                self.publish_status(Status::success(summary));
                self.publish_steps(traversal.steps().to_vec());
                self.emit(Event::TraversalDone(PayloadTraversalDone {
                    kind: traversal.kind(),
                    order,
                }));
                true
            }
        }
    }

    /// Plays the rest of a running traversal without waiting between frames.
    pub fn finish_traversal(&mut self) {
        let mut now = Instant::now();
        while self.animator.is_running() {
            self.tick(now);
            now += self.settings.step_delay;
        }
    }

    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        self.animator.time_until_next(now)
    }

    pub fn render(&self) -> Diagram {
        render::render(&self.structure, &self.settings.canvas)
    }

    fn reject(&mut self, err: OpError) -> OpError {
        log::warn!("{} rejected: {err}", self.variant());
        self.publish_status(Status::from(&err));
        err
    }

    fn publish_status(&mut self, status: Status) {
        self.emit(Event::Status(status.clone()));
        self.status = Some(status);
    }

    fn publish_steps(&mut self, steps: Vec<String>) {
        self.emit(Event::Steps(PayloadSteps {
            steps: steps.clone(),
        }));
        self.steps = steps;
    }

    fn emit(&self, event: Event) {
        if let Some(sink) = &self.sink {
            sink.send(event);
        }
    }
}
