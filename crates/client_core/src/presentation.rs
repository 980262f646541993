//! Pure mapping from a classification result to what the result panel shows.

use serde::Serialize;
use shared::domain::{AnalysisResult, SentimentLabel};

pub const FAILURE_MESSAGE: &str = "❌ No se pudo analizar el texto. Intenta nuevamente.";

pub const POSITIVE_BAR_HEX: &str = "#198754";
pub const NEGATIVE_BAR_HEX: &str = "#dc3545";
pub const NEUTRAL_BAR_HEX: &str = "#6c757d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelClass {
    Positive,
    Negative,
    Neutral,
}

impl PanelClass {
    pub fn for_label(label: &SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => Self::Positive,
            SentimentLabel::Negative => Self::Negative,
            SentimentLabel::Other(_) => Self::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    pub fn bar_hex(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_BAR_HEX,
            Self::Negative => NEGATIVE_BAR_HEX,
            Self::Neutral => NEUTRAL_BAR_HEX,
        }
    }

    /// Same color as [`PanelClass::bar_hex`], for surfaces that take raw channels.
    pub fn bar_rgb(self) -> [u8; 3] {
        match self {
            Self::Positive => [0x19, 0x87, 0x54],
            Self::Negative => [0xdc, 0x35, 0x45],
            Self::Neutral => [0x6c, 0x75, 0x7d],
        }
    }
}

/// Everything a presenter needs to draw a successful result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpec {
    pub panel: PanelClass,
    pub prediction: String,
    pub bar_color: &'static str,
    /// `probability * 100`, not clamped. A misbehaving service can push this
    /// outside `0..=100` and the bar overflows accordingly.
    pub bar_width_percent: f64,
    pub probability_text: String,
}

impl RenderSpec {
    pub fn bar_width_css(&self) -> String {
        format!("{}%", self.bar_width_percent)
    }
}

pub fn render_spec(result: &AnalysisResult) -> RenderSpec {
    let panel = PanelClass::for_label(&result.prediction);
    let percent = result.probability * 100.0;
    RenderSpec {
        panel,
        prediction: result.prediction.to_string(),
        bar_color: panel.bar_hex(),
        bar_width_percent: percent,
        probability_text: format!("{percent:.2}"),
    }
}

/// What the panel shows when a request fails. The bar is not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FailureView {
    pub panel: PanelClass,
    pub message: &'static str,
}

impl Default for FailureView {
    fn default() -> Self {
        Self {
            panel: PanelClass::Neutral,
            message: FAILURE_MESSAGE,
        }
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
