use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Hard ceiling on `max_per_page` shared by every report endpoint.
pub const MAX_PER_PAGE_CEILING: i64 = 3000;

pub const DEFAULT_PAGE: i64 = 1;

/// Raw query string parameters as received from the client.
///
/// Values stay untyped here; `RequestValidator` parses them so that every
/// malformed field can be reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQueryParams {
    /// Inclusive date to start search from. Default 15 days ago
    #[param(example = "2022-01-01")]
    pub start_date: Option<String>,
    /// Inclusive date to end search. Default today
    #[param(example = "2022-01-15")]
    pub end_date: Option<String>,
    /// For paginating results
    #[param(example = "1")]
    pub page: Option<String>,
    /// Max results per page
    #[param(example = "1000")]
    pub max_per_page: Option<String>,
}

impl ReportQueryParams {
    /// Builds the parameter set from raw key/value pairs. Unrecognised keys are
    /// skipped and a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "start_date" => &mut params.start_date,
                "end_date" => &mut params.end_date,
                "page" => &mut params.page,
                "max_per_page" => &mut params.max_per_page,
                other => {
                    tracing::debug!(parameter = %other, "ignoring unknown report query parameter");
                    continue;
                }
            };
            *slot = Some(value.into());
        }
        params
    }
}

/// Canonical, fully defaulted form of a report query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct QueryDescriptor {
    /// Inclusive lower bound of the search window
    #[schema(example = "2022-01-01")]
    pub start_date: NaiveDate,
    /// Inclusive upper bound of the search window
    #[schema(example = "2022-01-15")]
    pub end_date: NaiveDate,
    #[schema(example = 1)]
    pub page: i64,
    #[validate(range(max = MAX_PER_PAGE_CEILING, message = "Must be less than or equal to 3000."))]
    #[schema(example = 3000, maximum = 3000)]
    pub max_per_page: i64,
}

/// Body returned when a request or response fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Offending field mapped to a human readable message
    pub errors: BTreeMap<String, String>,
}

/// Standard error response structure for non-validation failures
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: String,
}
