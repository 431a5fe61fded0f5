//! DFS/BFS over the graph model, one visible step at a time.
//!
//! A [`Traversal`] is a resumable walk: every call to [`Traversal::advance`]
//! performs the work up to the next point where the diagram should be redrawn
//! and returns the explanation for it. [`Animator`] paces those calls with a
//! fixed delay and owns the `Idle → Running → Completed` lifecycle.

use std::collections::VecDeque;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use instant::Instant;
use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::model::GraphModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalKind {
    Dfs,
    Bfs,
}

impl TraversalKind {
    pub fn name(self) -> &'static str {
        match self {
            TraversalKind::Dfs => "DFS",
            TraversalKind::Bfs => "BFS",
        }
    }
}

impl Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outgoing edges of one node and how far we got through them.
#[derive(Debug, Clone, PartialEq)]
struct Cursor {
    node: NodeIndex,
    edges: Vec<(usize, NodeIndex)>,
    next: usize,
}

impl Cursor {
    fn new(graph: &GraphModel, node: NodeIndex) -> Self {
        Self {
            node,
            edges: graph.out_edges(node),
            next: 0,
        }
    }

    fn next_edge(&mut self) -> Option<(usize, NodeIndex)> {
        let edge = self.edges.get(self.next).copied();
        self.next += 1;
        edge
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Walk {
    /// Explicit call stack of the recursive DFS. `pending` is the node whose
    /// visit is due on the next step.
    Dfs {
        pending: Option<NodeIndex>,
        stack: Vec<Cursor>,
    },
    Bfs {
        queue: VecDeque<NodeIndex>,
        expanding: Option<Cursor>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    kind: TraversalKind,
    visited: Vec<NodeIndex>,
    traversed_edges: Vec<usize>,
    steps: Vec<String>,
    walk: Walk,
}

impl Traversal {
    /// The start node must exist in `graph`.
    pub fn new(kind: TraversalKind, graph: &GraphModel, start: NodeIndex) -> Self {
        let start_id = graph.id(start);
        let mut steps = vec![format!("Start {kind} from {start_id}")];
        let walk = match kind {
            TraversalKind::Dfs => Walk::Dfs {
                pending: Some(start),
                stack: Vec::new(),
            },
            TraversalKind::Bfs => {
                steps.push(format!("Enqueue {start_id}"));
                Walk::Bfs {
                    queue: VecDeque::from([start]),
                    expanding: None,
                }
            }
        };
        Self {
            kind,
            visited: Vec::new(),
            traversed_edges: Vec::new(),
            steps,
            walk,
        }
    }

    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    pub fn visited(&self) -> &[NodeIndex] {
        &self.visited
    }

    pub fn traversed_edges(&self) -> &[usize] {
        &self.traversed_edges
    }

    /// Every explanation produced so far, including the opening ones.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn visited_ids(&self, graph: &GraphModel) -> Vec<String> {
        self.visited
            .iter()
            .map(|&n| graph.id(n).to_string())
            .collect()
    }

    /// `"DFS: A → B → C"`.
    pub fn summary(&self, graph: &GraphModel) -> String {
        format!("{}: {}", self.kind, self.visited_ids(graph).join(" → "))
    }

    pub fn is_finished(&self) -> bool {
        match &self.walk {
            Walk::Dfs { pending, stack } => pending.is_none() && stack.is_empty(),
            Walk::Bfs { queue, expanding } => queue.is_empty() && expanding.is_none(),
        }
    }

    /// Runs until the next redraw point. `None` once the walk is over.
    pub fn advance(&mut self, graph: &GraphModel) -> Option<&str> {
        let step = match &mut self.walk {
            Walk::Dfs { pending, stack } => {
                dfs_step(graph, pending, stack, &mut self.visited, &mut self.traversed_edges)
            }
            Walk::Bfs { queue, expanding } => {
                bfs_step(graph, queue, expanding, &mut self.visited, &mut self.traversed_edges)
            }
        }?;
        self.steps.push(step);
        self.steps.last().map(String::as_str)
    }

    /// Drives the walk to completion without pacing.
    pub fn run_to_end(&mut self, graph: &GraphModel) {
        while self.advance(graph).is_some() {}
    }
}

fn dfs_step(
    graph: &GraphModel,
    pending: &mut Option<NodeIndex>,
    stack: &mut Vec<Cursor>,
    visited: &mut Vec<NodeIndex>,
    traversed: &mut Vec<usize>,
) -> Option<String> {
    if let Some(node) = pending.take() {
        visited.push(node);
        stack.push(Cursor::new(graph, node));
        return Some(format!("Visit {}", graph.id(node)));
    }
    while let Some(top) = stack.last_mut() {
        match top.next_edge() {
            Some((edge, target)) if !visited.contains(&target) => {
                traversed.push(edge);
                *pending = Some(target);
                return Some(format!(
                    "Traverse edge {} → {}",
                    graph.id(top.node),
                    graph.id(target)
                ));
            }
            Some(_) => {}
            None => {
                stack.pop();
            }
        }
    }
    None
}

fn bfs_step(
    graph: &GraphModel,
    queue: &mut VecDeque<NodeIndex>,
    expanding: &mut Option<Cursor>,
    visited: &mut Vec<NodeIndex>,
    traversed: &mut Vec<usize>,
) -> Option<String> {
    loop {
        if let Some(cursor) = expanding.as_mut() {
            while let Some((edge, target)) = cursor.next_edge() {
                if !visited.contains(&target) && !queue.contains(&target) {
                    queue.push_back(target);
                    traversed.push(edge);
                    let (from, to) = (graph.id(cursor.node), graph.id(target));
                    return Some(format!("Discover {to} via {from} → {to}; enqueue {to}"));
                }
            }
        }
        *expanding = None;
        let node = queue.pop_front()?;
        if visited.contains(&node) {
            continue;
        }
        visited.push(node);
        *expanding = Some(Cursor::new(graph, node));
        return Some(format!("Dequeue {} and visit", graph.id(node)));
    }
}

/// Shared flag that stops a running traversal at its next tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Completed,
}

/// What a call to [`Animator::tick`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// Nothing running, or the delay has not elapsed yet.
    Wait,
    /// A new frame: the diagram should be redrawn.
    Frame(String),
    /// The walk is over; the finished traversal is handed back.
    Done(Traversal),
    Cancelled,
}

#[derive(Debug)]
pub struct Animator {
    phase: Phase,
    running: Option<(Traversal, CancelToken)>,
    next_at: Option<Instant>,
    step_delay: Duration,
}

impl Animator {
    pub fn new(step_delay: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            running: None,
            next_at: None,
            step_delay,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn traversal(&self) -> Option<&Traversal> {
        self.running.as_ref().map(|(t, _)| t)
    }

    /// Starts `traversal`, replacing (and cancelling) any walk in flight. The
    /// first frame is due immediately.
    pub fn start(&mut self, traversal: Traversal, now: Instant) -> CancelToken {
        self.cancel();
        let token = CancelToken::default();
        self.running = Some((traversal, token.clone()));
        self.next_at = Some(now);
        self.phase = Phase::Running;
        token
    }

    pub fn cancel(&mut self) {
        if let Some((_, token)) = self.running.take() {
            token.cancel();
        }
        self.next_at = None;
        self.phase = Phase::Idle;
    }

    /// Time left before the next frame is due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_at
            .filter(|_| self.is_running())
            .map(|at| at.saturating_duration_since(now))
    }

    pub fn tick(&mut self, now: Instant, graph: &GraphModel) -> Tick {
        let Some((traversal, token)) = self.running.as_mut() else {
            return Tick::Wait;
        };
        if token.is_cancelled() {
            self.cancel();
            return Tick::Cancelled;
        }
        if self.next_at.is_some_and(|at| now < at) {
            return Tick::Wait;
        }
        if let Some(step) = traversal.advance(graph) {
            let step = step.to_string();
            self.next_at = Some(now + self.step_delay);
            return Tick::Frame(step);
        }
        self.next_at = None;
        self.phase = Phase::Completed;
        match self.running.take() {
            Some((traversal, _)) => Tick::Done(traversal),
            None => Tick::Wait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> GraphModel {
        GraphModel::from_parts(["A", "B", "C"], [("A", "B"), ("A", "C"), ("B", "C")])
    }

    fn run(kind: TraversalKind, graph: &GraphModel, start: &str) -> Traversal {
        let mut t = Traversal::new(kind, graph, graph.index_of(start).unwrap());
        t.run_to_end(graph);
        t
    }

    #[test]
    fn test_dfs_edge_insertion_order() {
        let g = abc();
        let t = run(TraversalKind::Dfs, &g, "A");
        assert_eq!(t.visited_ids(&g), vec!["A", "B", "C"]);
        assert_eq!(
            t.steps(),
            [
                "Start DFS from A",
                "Visit A",
                "Traverse edge A → B",
                "Visit B",
                "Traverse edge B → C",
                "Visit C",
            ]
        );
        assert_eq!(t.traversed_edges(), [0, 2]);
        assert_eq!(t.summary(&g), "DFS: A → B → C");
        assert!(t.is_finished());
    }

    #[test]
    fn test_bfs_steps() {
        let g = abc();
        let t = run(TraversalKind::Bfs, &g, "A");
        assert_eq!(t.visited_ids(&g), vec!["A", "B", "C"]);
        assert_eq!(
            t.steps(),
            [
                "Start BFS from A",
                "Enqueue A",
                "Dequeue A and visit",
                "Discover B via A → B; enqueue B",
                "Discover C via A → C; enqueue C",
                "Dequeue B and visit",
                "Dequeue C and visit",
            ]
        );
        assert_eq!(t.traversed_edges(), [0, 1]);
    }

    #[test]
    fn test_unreachable_nodes_not_visited() {
        let g = GraphModel::from_parts(["A", "B", "C"], [("B", "A")]);
        let t = run(TraversalKind::Dfs, &g, "A");
        assert_eq!(t.visited_ids(&g), vec!["A"]);
        let t = run(TraversalKind::Bfs, &g, "B");
        assert_eq!(t.visited_ids(&g), vec!["B", "A"]);
    }

    #[test]
    fn test_cycles_visit_once() {
        let g = GraphModel::from_parts(["A", "B", "C"], [("A", "B"), ("B", "C"), ("C", "A")]);
        for kind in [TraversalKind::Dfs, TraversalKind::Bfs] {
            let t = run(kind, &g, "B");
            assert_eq!(t.visited_ids(&g), vec!["B", "C", "A"]);
        }
    }

    #[test]
    fn test_animator_paces_frames() {
        let g = abc();
        let delay = Duration::from_millis(600);
        let mut a = Animator::new(delay);
        let t0 = Instant::now();
        let t = Traversal::new(TraversalKind::Dfs, &g, g.index_of("A").unwrap());
        a.start(t, t0);
        assert_eq!(a.phase(), Phase::Running);

        assert_eq!(a.tick(t0, &g), Tick::Frame("Visit A".to_string()));
        assert_eq!(a.tick(t0 + Duration::from_millis(100), &g), Tick::Wait);
        assert_eq!(a.time_until_next(t0), Some(delay));

        let mut now = t0;
        let mut frames = 1;
        loop {
            now += delay;
            match a.tick(now, &g) {
                Tick::Frame(_) => frames += 1,
                Tick::Done(t) => {
                    assert_eq!(t.visited_ids(&g), vec!["A", "B", "C"]);
                    break;
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(frames, 5);
        assert_eq!(a.phase(), Phase::Completed);
        assert_eq!(a.tick(now + delay, &g), Tick::Wait);
    }

    #[test]
    fn test_cancel_token_stops_walk() {
        let g = abc();
        let mut a = Animator::new(Duration::ZERO);
        let now = Instant::now();
        let token = a.start(
            Traversal::new(TraversalKind::Bfs, &g, g.index_of("A").unwrap()),
            now,
        );
        assert!(matches!(a.tick(now, &g), Tick::Frame(_)));
        token.cancel();
        assert_eq!(a.tick(now, &g), Tick::Cancelled);
        assert_eq!(a.phase(), Phase::Idle);
        assert!(a.traversal().is_none());
    }

    #[test]
    fn test_start_replaces_running_walk() {
        let g = abc();
        let mut a = Animator::new(Duration::ZERO);
        let now = Instant::now();
        let first = a.start(
            Traversal::new(TraversalKind::Dfs, &g, g.index_of("A").unwrap()),
            now,
        );
        a.start(
            Traversal::new(TraversalKind::Bfs, &g, g.index_of("C").unwrap()),
            now,
        );
        assert!(first.is_cancelled());
        assert_eq!(a.traversal().map(|t| t.kind()), Some(TraversalKind::Bfs));
    }
}
