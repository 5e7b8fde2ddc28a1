//! Worker bridge: commands queued by the UI and the runtime that serves them.

pub mod commands;
pub mod runtime;
