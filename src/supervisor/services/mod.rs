//! Supervisor decision service.

mod supervisor;

pub use supervisor::{Supervisor, SupervisorError, SupervisorOutcome, SupervisorResult};
