//! Client side of the sentiment analysis service: input validation, the
//! single in-flight request lifecycle, and the result-to-panel mapping.

pub mod config;
pub mod controller;
pub mod presentation;
pub mod service;
pub mod validation;

pub use config::{load_settings, Endpoints, Settings, SettingsError};
pub use controller::{AnalysisController, Presenter, TriggerRejected, UiState};
pub use presentation::{render_spec, FailureView, PanelClass, RenderSpec, FAILURE_MESSAGE};
pub use service::{ClassificationService, HttpClassificationService, ServiceProbe};
pub use validation::{validate, ValidatedText};
