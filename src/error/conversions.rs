use crate::config::ConfigError;
use crate::error::app_error::AppError;
use crate::error::validation_mapping::collect_validation_issues;

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_validation_issues(None, &err, &mut issues);
        AppError::from_issues(issues)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}
