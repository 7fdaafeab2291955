mod app_error;
mod conversions;
mod validation_mapping;


pub use app_error::{
    AppError, AppResult, ValidationIssue, CODE_INVALID_TYPE, CODE_RANGE, CODE_REQUIRED,
};
pub(crate) use validation_mapping::collect_validation_issues;
