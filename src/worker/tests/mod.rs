//! Unit tests for the worker module.
