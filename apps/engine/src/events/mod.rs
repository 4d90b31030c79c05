pub mod handlers;
pub mod model;
pub mod publisher;

pub use handlers::{ScoreboardHandler, Standing, TracingEventHandler};
pub use model::{DomainEvent, EventKind, EventPayload, EVENT_SCHEMA_VERSION};
pub use publisher::{EventHandler, EventPublisher, HandlerError, PublishSummary};
