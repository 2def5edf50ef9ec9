use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Boxed source error carried by render failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Body returned for every 5xx response; the cause stays in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Client-supplied invoice data violated one or more constraints
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTML or PDF rendering failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(err) => HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "error": err.issues() })),
            _ => HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}

/// Machine-readable category of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Field missing or of the wrong JSON type
    InvalidType,
    /// String empty, number below its minimum, or list empty
    TooSmall,
    /// Number, or an amount derived from it, beyond the decimal range
    TooBig,
    /// String present but malformed (e.g. email)
    InvalidString,
    /// Date string that cannot be parsed
    InvalidDate,
}

/// One step of the location of an issue inside the request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Key(k) => write!(f, "{}", k),
        }
    }
}

/// A single field-level constraint violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }

    /// Dotted form of the path, e.g. `items.0.quantity`
    pub fn field(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Every constraint an invoice payload violated, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Returns `None` when there is nothing to report
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    pub fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// True when some issue is located at or below `field` (dotted form)
    pub fn touches(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| {
            let path = issue.field();
            path == field || path.starts_with(&format!("{}.", field))
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field(), issue.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Failures while turning an invoice into a document
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Browser launch failed: {0}")]
    Launch(#[source] BoxError),

    #[error("Page load failed: {0}")]
    Navigation(#[source] BoxError),

    #[error("PDF print failed: {0}")]
    Print(#[source] BoxError),

    #[error("Rendering timed out after {0:?}")]
    Timeout(Duration),

    #[error("Browser release failed: {0}")]
    Release(#[source] BoxError),
}

impl RenderError {
    pub fn launch(err: impl Into<BoxError>) -> Self {
        RenderError::Launch(err.into())
    }

    pub fn navigation(err: impl Into<BoxError>) -> Self {
        RenderError::Navigation(err.into())
    }

    pub fn print(err: impl Into<BoxError>) -> Self {
        RenderError::Print(err.into())
    }

    pub fn release(err: impl Into<BoxError>) -> Self {
        RenderError::Release(err.into())
    }
}
