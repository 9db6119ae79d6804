//! Unit tests for the supervisor module.
