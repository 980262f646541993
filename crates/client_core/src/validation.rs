use shared::{domain::AnalysisRequest, error::ValidationError};

/// Input that passed validation. Holds the text exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedText(String);

impl ValidatedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_request(self) -> AnalysisRequest {
        AnalysisRequest { text: self.0 }
    }
}

// U+FEFF is not `char::is_whitespace` but browsers trim it from input values.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Rejects empty and whitespace-only input.
///
/// Trimming only decides acceptance; the returned text is the untrimmed
/// original so the outgoing request carries what the user typed.
pub fn validate(raw: &str) -> Result<ValidatedText, ValidationError> {
    if raw.trim_matches(is_blank_char).is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(ValidatedText(raw.to_string()))
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
