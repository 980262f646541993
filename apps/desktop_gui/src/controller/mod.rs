//! Controller layer: backend events, the result panel view model, and command
//! dispatch.

pub mod events;
pub mod orchestration;
pub mod view_model;
