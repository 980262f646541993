//! Backend commands queued from UI to backend worker.

use shared::domain::AnalysisRequest;

#[derive(Debug)]
pub enum BackendCommand {
    Analyze { request: AnalysisRequest },
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analyze { .. } => "analyze",
            Self::CheckHealth => "check_health",
        }
    }
}
