pub mod currency;
pub mod error;

pub use currency::{round_amount, Currency};
pub use error::{
    AppError, IssueCode, PathSegment, RenderError, Result, ValidationError, ValidationIssue,
};
