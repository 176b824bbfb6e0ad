//! API response types.
//!
//! Request bodies reuse [`crate::io::import::CalculationRequest`] and
//! [`crate::equipment::EquipmentRecord`]; results are serialized directly.

use serde::Serialize;

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_message() {
        let json = serde_json::to_value(ErrorResponse::new("bad body")).ok();
        assert_eq!(
            json.as_ref().and_then(|v| v.get("error")).and_then(|v| v.as_str()),
            Some("bad body")
        );
    }
}
