use std::fmt;
use std::num::IntErrorKind;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{debug, info};
use validator::Validate;

use crate::api::dtos::{
    PopDetailsListResponse, ProofOfPlayBatch, ProofOfPlayRecord, ProofOfPlayRow, QueryDescriptor,
    ReportQueryParams, DEFAULT_PAGE, MISSING_FIELD_MESSAGE,
};
use crate::application::clock::{Clock, SystemClock};
use crate::config::ReportsConfig;
use crate::error::{collect_validation_issues, AppError, AppResult, ValidationIssue, CODE_REQUIRED};

const INVALID_DATE: &str = "Not a valid date.";
const INVALID_INTEGER: &str = "Not a valid integer.";

/// The report endpoints whose queries share one parameter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ProofOfPlay,
    Impressions,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::ProofOfPlay => f.write_str("proof_of_play"),
            ReportKind::Impressions => f.write_str("impressions"),
        }
    }
}

/// Turns raw report query parameters into a [`QueryDescriptor`] and shapes
/// proof-of-play pages into list responses.
///
/// Missing dates are resolved against the injected [`Clock`] on every call,
/// never cached.
#[derive(Clone)]
pub struct RequestValidator {
    settings: ReportsConfig,
    clock: Arc<dyn Clock>,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self {
            settings: ReportsConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl RequestValidator {
    pub fn new(settings: ReportsConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        settings.validate()?;
        Ok(Self { settings, clock })
    }

    pub fn settings(&self) -> &ReportsConfig {
        &self.settings
    }

    pub fn validate_pop_details_request(
        &self,
        params: &ReportQueryParams,
    ) -> AppResult<QueryDescriptor> {
        self.validate_request(ReportKind::ProofOfPlay, params)
    }

    pub fn validate_impression_request(
        &self,
        params: &ReportQueryParams,
    ) -> AppResult<QueryDescriptor> {
        self.validate_request(ReportKind::Impressions, params)
    }

    /// Parses every supplied parameter, fills in the missing ones and checks
    /// the page size ceiling. All problems are reported together.
    pub fn validate_request(
        &self,
        kind: ReportKind,
        params: &ReportQueryParams,
    ) -> AppResult<QueryDescriptor> {
        let today = self.clock.today();
        let mut issues = Vec::new();

        let start_date = parse_field(&mut issues, "start_date", &params.start_date, parse_date)
            .unwrap_or_else(|| self.default_start_date(today));
        let end_date =
            parse_field(&mut issues, "end_date", &params.end_date, parse_date).unwrap_or(today);
        let page =
            parse_field(&mut issues, "page", &params.page, parse_integer).unwrap_or(DEFAULT_PAGE);
        let max_per_page = parse_field(
            &mut issues,
            "max_per_page",
            &params.max_per_page,
            parse_integer,
        )
        .unwrap_or_else(|| self.default_max_per_page(kind));

        let query = QueryDescriptor {
            start_date,
            end_date,
            page,
            max_per_page,
        };

        if let Err(errors) = query.validate() {
            collect_validation_issues(None, &errors, &mut issues);
        }

        if !issues.is_empty() {
            info!(
                report = %kind,
                issue_count = issues.len(),
                "rejected report query"
            );
            return Err(AppError::from_issues(issues));
        }

        debug!(
            report = %kind,
            start_date = %query.start_date,
            end_date = %query.end_date,
            page = query.page,
            max_per_page = query.max_per_page,
            "resolved report query"
        );
        Ok(query)
    }

    /// Pairs a validated query with one page of proof-of-play rows. Every row
    /// must carry the required columns; a single gap fails the whole page.
    pub fn shape_pop_details_response(
        &self,
        query: QueryDescriptor,
        rows: Vec<ProofOfPlayRow>,
        total_count: u64,
    ) -> AppResult<PopDetailsListResponse> {
        let batch = ProofOfPlayBatch { proof_list: rows };
        if let Err(errors) = batch.validate() {
            let error = AppError::from(errors);
            info!(
                report = %ReportKind::ProofOfPlay,
                issue_count = error.validation_issues().len(),
                "rejected proof-of-play page"
            );
            return Err(error);
        }

        let proof_list = batch
            .proof_list
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                ProofOfPlayRecord::try_from(row).map_err(|field| {
                    AppError::from_issues(vec![ValidationIssue::new(
                        format!("proof_list[{index}].{field}"),
                        MISSING_FIELD_MESSAGE,
                        CODE_REQUIRED,
                    )])
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PopDetailsListResponse {
            query,
            total_count,
            current_page_count: proof_list.len() as u64,
            proof_list,
        })
    }

    fn default_start_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(self.settings.lookback_days.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }

    fn default_max_per_page(&self, kind: ReportKind) -> i64 {
        match kind {
            ReportKind::ProofOfPlay => self.settings.pop_default_max_per_page,
            ReportKind::Impressions => self.settings.impression_default_max_per_page,
        }
    }
}

/// `None` when the parameter is absent or malformed; malformed values are
/// recorded as type issues.
fn parse_field<T>(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    raw: &Option<String>,
    parse: fn(&str) -> Result<T, &'static str>,
) -> Option<T> {
    let raw = raw.as_deref()?;
    match parse(raw) {
        Ok(value) => Some(value),
        Err(message) => {
            issues.push(ValidationIssue::invalid_type(field, message));
            None
        }
    }
}

/// Strict `YYYY-MM-DD`: four-digit year, one or two digit month and day,
/// no sign and no surrounding whitespace.
fn parse_date(value: &str) -> Result<NaiveDate, &'static str> {
    let mut parts = value.split('-');
    let well_formed = matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(year), Some(month), Some(day), None)
            if year.len() == 4
                && (1..=2).contains(&month.len())
                && (1..=2).contains(&day.len())
                && [year, month, day]
                    .iter()
                    .all(|part| part.bytes().all(|byte| byte.is_ascii_digit()))
    );
    if !well_formed {
        return Err(INVALID_DATE);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| INVALID_DATE)
}

/// Integers outside `i64` saturate so that bounds checks, not parsing,
/// decide whether they are acceptable.
fn parse_integer(value: &str) -> Result<i64, &'static str> {
    match value.trim().parse::<i64>() {
        Ok(parsed) => Ok(parsed),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(INVALID_INTEGER),
        },
    }
}
