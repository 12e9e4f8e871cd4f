use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Empty input: please describe your symptoms")]
    EmptyInput,

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Generation error: {0}")]
    Generation(String),
}

impl TriageError {
    /// Label used for metrics and span attributes.
    pub fn kind(&self) -> &'static str {
        match self {
            TriageError::EmptyInput => "empty_input",
            TriageError::Retrieval(_) => "retrieval_failure",
            TriageError::Generation(_) => "generation_failure",
        }
    }
}

pub type TriageResult<T> = Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_error() {
        let error = TriageError::EmptyInput;
        assert_eq!(
            error.to_string(),
            "Empty input: please describe your symptoms"
        );
    }

    #[test]
    fn test_retrieval_error() {
        let error = TriageError::Retrieval("index unavailable".to_string());
        assert_eq!(error.to_string(), "Retrieval error: index unavailable");
    }

    #[test]
    fn test_generation_error() {
        let error = TriageError::Generation("quota exceeded".to_string());
        assert_eq!(error.to_string(), "Generation error: quota exceeded");
    }

    #[test]
    fn test_error_kinds() {
        let test_cases = vec![
            (TriageError::EmptyInput, "empty_input"),
            (
                TriageError::Retrieval("test".to_string()),
                "retrieval_failure",
            ),
            (
                TriageError::Generation("test".to_string()),
                "generation_failure",
            ),
        ];

        for (error, kind) in test_cases {
            assert_eq!(error.kind(), kind);
        }
    }

    #[test]
    fn test_triage_result_err() {
        fn returns_err() -> TriageResult<i32> {
            Err(TriageError::EmptyInput)
        }
        let result = returns_err();
        assert!(result.is_err());
    }
}
