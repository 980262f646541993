//! Events sent from the backend worker to the UI thread.

use shared::{domain::AnalysisResult, error::RequestError, protocol::HealthReport};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    AnalysisResolved(Result<AnalysisResult, RequestError>),
    HealthChecked(Result<HealthReport, RequestError>),
}
