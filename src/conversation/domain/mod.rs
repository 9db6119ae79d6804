//! Domain types for the message log.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. All types are immutable after construction, apart from the
//! append-only [`MessageLog`], and serialisable via serde.

mod ids;
mod log;
mod message;
mod role;
mod token;

pub use ids::{MessageId, RunId, SequenceNumber};
pub use log::MessageLog;
pub use message::{Message, MessageBody};
pub use role::{ParseRoleError, Role};
pub use token::{FINISH, RoutingToken, RoutingVocabulary, WorkerName};
