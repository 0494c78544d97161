use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Results not found: page has no service results container")]
    ResultsNotFound,

    #[error("No services found in the results container")]
    NoServices,

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    PageStructure,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::Http(_) | LookupError::UnexpectedStatus { .. } => ErrorCategory::Transport,
            LookupError::ResultsNotFound | LookupError::NoServices => ErrorCategory::PageStructure,
            LookupError::InvalidSelector { .. }
            | LookupError::Pattern(_)
            | LookupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Transport => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::PageStructure => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::Http(e) if e.is_timeout() => {
                "The rail-record server did not answer in time".to_string()
            }
            LookupError::Http(_) => "Could not reach the rail-record server".to_string(),
            LookupError::UnexpectedStatus { status, .. } => {
                format!("The rail-record server answered with HTTP {}", status)
            }
            LookupError::ResultsNotFound => "Results not found".to_string(),
            LookupError::NoServices => "No services found for this headcode".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => {
                "Check your network connection or raise --timeout-seconds"
            }
            ErrorCategory::PageStructure => {
                "Check the headcode and date; the page layout may also have changed"
            }
            ErrorCategory::Configuration => "Check the command line options",
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let status = LookupError::UnexpectedStatus {
            status: 503,
            url: "https://example.com".to_string(),
        };
        assert_eq!(status.category(), ErrorCategory::Transport);
        assert_eq!(status.exit_code(), 1);

        assert_eq!(LookupError::NoServices.category(), ErrorCategory::PageStructure);
        assert_eq!(LookupError::ResultsNotFound.exit_code(), 3);

        let config = LookupError::InvalidConfigValueError {
            field: "timeout_seconds".to_string(),
            value: "0".to_string(),
            reason: "too small".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
    }

    #[test]
    fn test_user_friendly_message_mentions_status() {
        let err = LookupError::UnexpectedStatus {
            status: 404,
            url: "https://example.com".to_string(),
        };
        assert!(err.user_friendly_message().contains("404"));
        assert_eq!(LookupError::ResultsNotFound.user_friendly_message(), "Results not found");
    }
}
