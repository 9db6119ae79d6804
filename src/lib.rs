//! Switchyard: supervised multi-agent orchestration.
//!
//! A supervisor reads a shared conversation log and names the next worker
//! agent, or `FINISH`. Workers run a bounded reasoning loop over their
//! toolset and append an attributed answer. A router maps each decision to
//! the next graph state until the run ends.
//!
//! # Architecture
//!
//! Switchyard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for language models, reasoning
//!   loops, and tools
//! - **Adapters**: Concrete implementations of ports (scripted in-memory
//!   adapters ship with the crate)
//!
//! # Modules
//!
//! - [`conversation`]: The append-only message log and routing tokens
//! - [`worker`]: Worker agent nodes, tools, and the worker registry
//! - [`supervisor`]: Supervisor prompt, decision validation, and service
//! - [`graph`]: Router, configuration, and the orchestrator state machine

pub mod conversation;
pub mod graph;
pub mod supervisor;
pub mod worker;
