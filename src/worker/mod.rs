//! Worker agent nodes and their registry.
//!
//! A worker wraps an opaque reasoning loop and a fixed toolset behind a
//! uniform node contract: read the latest substantive message, run the
//! loop on it, append exactly one agent-result message. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Node execution and registration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
