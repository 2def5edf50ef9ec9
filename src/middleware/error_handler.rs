use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::core::error::{AppError, IssueCode, ValidationError, ValidationIssue};

/// JSON extractor config shared by every route taking a body
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

/// Map body extraction failures (bad JSON, wrong content type, oversize)
/// to the same 400 shape as field validation, with an empty path
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected request body");

    let issue = ValidationIssue::new(IssueCode::InvalidType, Vec::new(), err.to_string());
    AppError::Validation(ValidationError::single(issue)).into()
}
