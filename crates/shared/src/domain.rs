use std::fmt;

use serde::{Deserialize, Serialize};

pub const POSITIVE_LABEL: &str = "Positivo";
pub const NEGATIVE_LABEL: &str = "Negativo";

/// Label returned by the classification service.
///
/// Only the two labels the service is known to emit get their own variant;
/// everything else (neutral, unknown, future labels) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Other(String),
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => POSITIVE_LABEL,
            Self::Negative => NEGATIVE_LABEL,
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(value: String) -> Self {
        match value.as_str() {
            POSITIVE_LABEL => Self::Positive,
            NEGATIVE_LABEL => Self::Negative,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for SentimentLabel {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SentimentLabel> for String {
    fn from(value: SentimentLabel) -> Self {
        match value {
            SentimentLabel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the outbound classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Body of a successful classification response.
///
/// `probability` is trusted as sent; it is neither clamped nor range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: SentimentLabel,
    pub probability: f64,
}
