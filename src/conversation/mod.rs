//! The shared, append-only conversation record.
//!
//! Every component of an orchestration run reads the same [`domain::MessageLog`]
//! and at most one component appends to it per step: the seeding request,
//! the supervisor's routing decision, or a worker's result.
//!
//! - Domain types in [`domain`]
//! - Error types in [`error`]

pub mod domain;
pub mod error;
