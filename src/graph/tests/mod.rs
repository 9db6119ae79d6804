//! Unit tests for the orchestration graph.
