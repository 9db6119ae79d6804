//! The orchestration graph: supervisor, router, and worker nodes wired
//! into a state machine that drives one conversation to completion.
//!
//! - Domain types in [`domain`]
//! - Routing in [`router`]
//! - Graph execution in [`services`]

pub mod domain;
pub mod error;
pub mod router;
pub mod services;

#[cfg(test)]
mod tests;
