use thiserror::Error;

pub const EMPTY_INPUT_NOTICE: &str = "Por favor ingresa un texto para analizar";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", EMPTY_INPUT_NOTICE)]
    Empty,
}

impl ValidationError {
    /// Text for the blocking notice shown to the user.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Empty => EMPTY_INPUT_NOTICE,
        }
    }
}

/// Failure of one outbound call to the classification service.
///
/// Variants exist for logging; the rendered output never distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl RequestError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
