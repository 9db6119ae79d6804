//! Adapter implementations of the supervisor ports.

mod scripted;

pub use scripted::ScriptedCompletion;
