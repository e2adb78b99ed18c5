use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("overlap_size must be less than max_chunk_size");
        assert_eq!(
            error.to_string(),
            "Validation error: overlap_size must be less than max_chunk_size"
        );
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("hashing", "dimension mismatch");
        assert_eq!(
            error.to_string(),
            "Provider error: hashing - dimension mismatch"
        );
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("write rejected");
        assert_eq!(error.to_string(), "Storage error: write rejected");
    }
}
