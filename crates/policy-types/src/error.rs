/// Error taxonomy for the policy analysis boundary.
///
/// The core operations are total over string input; these variants fire only
/// at the validation boundary (`PolicyDocument::validate`) or inside the
/// document-loading collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PolicyError::InvalidInput("policy text too short".to_string());
        assert_eq!(err.to_string(), "Invalid input: policy text too short");

        let err = PolicyError::UnsupportedFormat(".xlsx".to_string());
        assert!(err.to_string().contains(".xlsx"));
    }
}
