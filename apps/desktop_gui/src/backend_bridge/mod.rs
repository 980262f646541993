//! Backend worker: owns the tokio runtime and the HTTP clients, fed by a
//! command queue from the UI thread.

pub mod commands;
pub mod runtime;
