use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate article id: {id}")]
    DuplicateArticleError { id: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Content,
    Storage,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigValidationError { .. } | SiteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SiteError::DateError(_)
            | SiteError::DuplicateArticleError { .. }
            | SiteError::ValidationError { .. } => ErrorCategory::Content,
            SiteError::ZipError(_) | SiteError::IoError(_) => ErrorCategory::Storage,
            SiteError::SerializationError(_)
            | SiteError::RenderError { .. }
            | SiteError::TemplateError(_) => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Content => ErrorSeverity::Critical,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Rendering => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            SiteError::ZipError(_) => {
                "Retry without --archive or free up disk space in the output directory".to_string()
            }
            SiteError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and section names".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            SiteError::DateError(_) => {
                "Publication dates must use the YYYY-MM-DD format".to_string()
            }
            SiteError::DuplicateArticleError { id } => {
                format!("Give every article a unique id (duplicated: '{}')", id)
            }
            SiteError::ValidationError { .. } => {
                "Review the article data for missing fields or ids with characters other than letters, digits, '-' and '_'".to_string()
            }
            SiteError::SerializationError(_)
            | SiteError::RenderError { .. }
            | SiteError::TemplateError(_) => {
                "Run with --verbose and report the failing page".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Content => format!("Site content is invalid: {}", self),
            ErrorCategory::Storage => format!("Could not write the site: {}", self),
            ErrorCategory::Rendering => format!("Could not render the site: {}", self),
        }
    }

    /// 對應 CLI 結束代碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_high_severity() {
        let err = SiteError::InvalidConfigValueError {
            field: "build.output_path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("build.output_path"));
    }

    #[test]
    fn test_duplicate_article_is_critical() {
        let err = SiteError::DuplicateArticleError { id: "3".to_string() };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("Site content is invalid"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SiteError = io.into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.exit_code(), 2);
    }
}
