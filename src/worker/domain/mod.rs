//! Domain model for worker agents.

mod error;
mod profile;

pub use error::WorkerDomainError;
pub use profile::WorkerProfile;
