use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItineraryError {
    /// Caller input rejected before any outbound call was made.
    #[error("{}", invalid_request_message(.missing, .problems))]
    InvalidRequest {
        missing: Vec<String>,
        problems: Vec<String>,
    },

    #[error("Failed to generate travel options: {0}")]
    Upstream(String),
}

impl ItineraryError {
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }
}

fn invalid_request_message(missing: &[String], problems: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Missing required fields: {}", missing.join(", ")));
    }
    parts.extend(problems.iter().cloned());
    if parts.is_empty() {
        return "Invalid trip request".to_string();
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_lists_missing_fields_and_problems() {
        let err = ItineraryError::InvalidRequest {
            missing: vec!["destination".into(), "startDate".into()],
            problems: vec!["travelers must be at least 1".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required fields: destination, startDate; travelers must be at least 1"
        );
        assert!(err.is_invalid_request());
    }

    #[test]
    fn upstream_carries_underlying_message() {
        let err = ItineraryError::Upstream("Gemini API error (401): bad key".into());
        assert_eq!(
            err.to_string(),
            "Failed to generate travel options: Gemini API error (401): bad key"
        );
        assert!(!err.is_invalid_request());
    }
}
