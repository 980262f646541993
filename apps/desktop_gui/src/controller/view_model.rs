//! State behind the result panel, driven by the analysis controller.

use client_core::{FailureView, PanelClass, Presenter, RenderSpec};
use shared::{error::RequestError, protocol::HealthReport};

#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Success(RenderSpec),
    Failure(FailureView),
}

impl PanelContent {
    pub fn panel(&self) -> PanelClass {
        match self {
            Self::Success(view) => view.panel,
            Self::Failure(view) => view.panel,
        }
    }
}

#[derive(Debug, Default)]
pub struct ResultPanelModel {
    pub loading: bool,
    pub content: Option<PanelContent>,
    pub notice: Option<String>,
}

impl ResultPanelModel {
    pub fn acknowledge_notice(&mut self) {
        self.notice = None;
    }
}

impl Presenter for ResultPanelModel {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn clear_result(&mut self) {
        self.content = None;
    }

    fn render_success(&mut self, view: &RenderSpec) {
        self.content = Some(PanelContent::Success(view.clone()));
    }

    fn render_failure(&mut self, view: &FailureView) {
        self.content = Some(PanelContent::Failure(*view));
    }

    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthBadge {
    #[default]
    Unknown,
    Checking,
    Up,
    Degraded {
        ml_service: Option<String>,
    },
    Unreachable,
}

impl HealthBadge {
    pub fn from_outcome(outcome: &Result<HealthReport, RequestError>) -> Self {
        match outcome {
            Ok(report) if report.is_up() => Self::Up,
            Ok(report) => Self::Degraded {
                ml_service: report.ml_service_status.clone(),
            },
            Err(_) => Self::Unreachable,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Checking)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Unknown => "Servicio: sin comprobar".to_string(),
            Self::Checking => "Servicio: comprobando...".to_string(),
            Self::Up => "Servicio: disponible".to_string(),
            Self::Degraded {
                ml_service: Some(ml),
            } => format!("Servicio: degradado (clasificador {ml})"),
            Self::Degraded { ml_service: None } => "Servicio: degradado".to_string(),
            Self::Unreachable => "Servicio: no disponible".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
