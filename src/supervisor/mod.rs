//! The supervisor decision function.
//!
//! Given the full message log, the supervisor asks a completion service
//! which worker should act next and validates the raw answer into exactly
//! one routing token. Unrecognised or empty output always resolves to
//! `FINISH`, which is what guarantees that a run terminates.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The decision service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
