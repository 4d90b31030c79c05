//! Event fan-out to registered handlers.
//!
//! Handlers run in ascending `priority()`; equal priorities keep registration
//! order. A failing or panicking handler is logged and skipped; it never
//! affects the command that produced the events or the other handlers.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, trace, warn};

use crate::events::model::{DomainEvent, EventKind};

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("handler rejected event: {0}")]
    Rejected(String),
    #[error("handler failed: {0}")]
    Failed(String),
}

/// Subscriber to domain events. Every operation is required.
pub trait EventHandler: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError>;

    /// Whether events of `kind` should be delivered to this handler.
    fn can_handle(&self, kind: EventKind) -> bool;

    /// Lower runs first.
    fn priority(&self) -> i32;
}

/// Delivery counts for one `publish` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    pub delivered: usize,
    pub failed: usize,
}

#[derive(Default)]
pub struct EventPublisher {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, keeping the table sorted by priority.
    pub fn register(&self, handler: Arc<dyn EventHandler>) {
        let mut handlers = self.handlers.write();
        // Insert after every handler with priority <= ours so ties keep registration order.
        let at = handlers.partition_point(|h| h.priority() <= handler.priority());
        handlers.insert(at, handler);
    }

    /// Number of registered handlers that accept `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers
            .read()
            .iter()
            .filter(|h| h.can_handle(kind))
            .count()
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// Deliver `events` in order to every interested handler.
    pub fn publish(&self, events: &[DomainEvent]) -> PublishSummary {
        // Snapshot so handlers may register others without deadlocking.
        let handlers: Vec<Arc<dyn EventHandler>> = self.handlers.read().clone();
        let mut summary = PublishSummary::default();

        for event in events {
            let kind = event.kind();
            for handler in handlers.iter().filter(|h| h.can_handle(kind)) {
                match catch_unwind(AssertUnwindSafe(|| handler.handle(event))) {
                    Ok(Ok(())) => {
                        summary.delivered += 1;
                        trace!(handler = handler.name(), event = %kind, "Event delivered");
                    }
                    Ok(Err(err)) => {
                        summary.failed += 1;
                        warn!(
                            handler = handler.name(),
                            event = %kind,
                            game_id = event.game_id,
                            event_id = %event.event_id,
                            error = %err,
                            "Event handler failed"
                        );
                    }
                    Err(_) => {
                        summary.failed += 1;
                        error!(
                            handler = handler.name(),
                            event = %kind,
                            game_id = event.game_id,
                            event_id = %event.event_id,
                            "Event handler panicked"
                        );
                    }
                }
            }
        }

        summary
    }
}

impl std::fmt::Debug for EventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&'static str> = self.handlers.read().iter().map(|h| h.name()).collect();
        f.debug_struct("EventPublisher")
            .field("handlers", &names)
            .finish()
    }
}
