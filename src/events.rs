//! Notifications the session publishes while it works.
//!
//! Every event is serializable so a UI shell on the other side of a channel
//! (or a test) can observe exactly what the user would have been shown.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::animator::TraversalKind;
use crate::ops::Status;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadSteps {
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadLogged {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadTraversalFrame {
    pub step: String,
    pub visited: Vec<String>,
    pub traversed_edges: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadTraversalDone {
    pub kind: TraversalKind,
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Status(Status),
    Steps(PayloadSteps),
    Logged(PayloadLogged),
    TraversalFrame(PayloadTraversalFrame),
    TraversalDone(PayloadTraversalDone),
}

/// Receiver of session events.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for RefCell<Vec<Event>> {
    fn send(&self, event: Event) {
        self.borrow_mut().push(event);
    }
}

impl<T: EventSink + ?Sized> EventSink for Rc<T> {
    fn send(&self, event: Event) {
        (**self).send(event);
    }
}

#[cfg(feature = "events")]
impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        if crossbeam::channel::Sender::send(self, event).is_err() {
            log::warn!("event receiver dropped");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ops::Severity;

    #[test]
    fn test_contract_status() {
        let event = Event::Status(Status::new(Severity::Warning, "Stack is empty"));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"Status":{"severity":"Warning","message":"Stack is empty"}}"#
        );

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_traversal_done() {
        let event = Event::TraversalDone(PayloadTraversalDone {
            kind: TraversalKind::Dfs,
            order: vec!["A".to_string(), "B".to_string()],
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"TraversalDone":{"kind":"Dfs","order":["A","B"]}}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_refcell_sink_collects() {
        let sink = Rc::new(RefCell::new(Vec::<Event>::new()));
        let dyn_sink: Box<dyn EventSink> = Box::new(sink.clone());
        dyn_sink.send(Event::Logged(PayloadLogged {
            message: "Array shuffled".to_string(),
        }));
        assert_eq!(sink.borrow().len(), 1);
    }

    #[cfg(feature = "events")]
    #[test]
    fn test_channel_sink() {
        let (tx, rx) = crossbeam::channel::unbounded();
        EventSink::send(&tx, Event::Steps(PayloadSteps { steps: vec![] }));
        assert_eq!(rx.try_recv().unwrap(), Event::Steps(PayloadSteps { steps: vec![] }));
    }
}
