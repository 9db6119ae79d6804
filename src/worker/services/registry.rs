//! Registry of the worker nodes available to one orchestrator.

use super::WorkerNode;
use crate::conversation::domain::{RoutingVocabulary, WorkerName};
use crate::worker::domain::WorkerProfile;
use thiserror::Error;

/// Errors returned while populating a worker registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A worker with the same name is already registered.
    #[error("duplicate worker name: {0}")]
    DuplicateWorker(WorkerName),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Ordered mapping from worker name to worker node.
///
/// The registry is fixed once the orchestrator is built; lookups compare
/// names exactly and in registration order.
#[derive(Debug, Clone, Default)]
pub struct WorkerRegistry {
    workers: Vec<WorkerNode>,
}

impl WorkerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a worker node.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateWorker`] when a worker with the same
    /// name is already registered.
    pub fn register(&mut self, node: WorkerNode) -> RegistryResult<()> {
        if self.get(node.name()).is_some() {
            return Err(RegistryError::DuplicateWorker(node.name().clone()));
        }
        self.workers.push(node);
        Ok(())
    }

    /// Finds a worker by name.
    #[must_use]
    pub fn get(&self, name: &WorkerName) -> Option<&WorkerNode> {
        self.workers.iter().find(|node| node.name() == name)
    }

    /// Finds a worker whose name equals `token` exactly.
    ///
    /// A token that merely contains or is contained in a worker name does
    /// not match.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&WorkerNode> {
        self.workers
            .iter()
            .find(|node| node.name().as_str() == token)
    }

    /// Iterates over worker names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &WorkerName> {
        self.workers.iter().map(WorkerNode::name)
    }

    /// Iterates over worker profiles in registration order.
    pub fn profiles(&self) -> impl Iterator<Item = &WorkerProfile> {
        self.workers.iter().map(WorkerNode::profile)
    }

    /// Returns the legal routing tokens for this registry.
    #[must_use]
    pub fn vocabulary(&self) -> RoutingVocabulary {
        RoutingVocabulary::new(self.names().cloned())
    }

    /// Returns the number of registered workers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Returns `true` when no worker is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
