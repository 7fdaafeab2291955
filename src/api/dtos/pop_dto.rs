use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::QueryDescriptor;

pub const MISSING_FIELD_MESSAGE: &str = "Missing data for required field.";

/// A proof-of-play row as handed over by the reporting data source.
///
/// Every column is optional on this side; `Validate` enforces the ones a
/// response must carry before the row becomes a [`ProofOfPlayRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ProofOfPlayRow {
    #[validate(required(message = "Missing data for required field."))]
    pub date: Option<String>,
    #[validate(required(message = "Missing data for required field."))]
    pub media_paid_brand: Option<String>,
    #[validate(required(message = "Missing data for required field."))]
    pub player_paid_brand: Option<String>,
    #[validate(required(message = "Missing data for required field."))]
    pub store_number: Option<String>,
    #[validate(
        required(message = "Missing data for required field."),
        range(min = 0, message = "Must be greater than or equal to 0.")
    )]
    pub plays: Option<i64>,
    #[validate(required(message = "Missing data for required field."))]
    pub media_name: Option<String>,
    #[validate(required(message = "Missing data for required field."))]
    pub media_length: Option<i64>,
    pub media_program_goal: Option<String>,
    #[validate(required(message = "Missing data for required field."))]
    pub player_in_store_category_location: Option<String>,
    #[validate(required(message = "Missing data for required field."))]
    pub player_form_factor: Option<String>,
    pub player_orientation: Option<String>,
    pub player_agnostic_floorplan_location: Option<String>,
    pub advertised_product_category_3: Option<String>,
    pub sku_1_primary: Option<String>,
    pub sku_2: Option<String>,
    pub sku_3: Option<String>,
}

/// One play of a media asset on an in-store player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProofOfPlayRecord {
    #[schema(example = "2022-02-02")]
    pub date: String,
    #[schema(example = "Clorox")]
    pub media_paid_brand: String,
    #[schema(example = "Clorox")]
    pub player_paid_brand: String,
    #[schema(example = "6350")]
    pub store_number: String,
    #[schema(example = 372, minimum = 0)]
    pub plays: u64,
    #[schema(example = "Clorox_CleanUpCleanerAndBleach_360x1920P_20NOV21.mp4")]
    pub media_name: String,
    /// Length of the media asset in seconds
    #[schema(example = 57)]
    pub media_length: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Product Benefit")]
    pub media_program_goal: Option<String>,
    #[schema(example = "Window Treatments")]
    pub player_in_store_category_location: String,
    #[schema(example = "Vertical Video Banner")]
    pub player_form_factor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Landscape")]
    pub player_orientation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Aisle 1 for electric shades")]
    pub player_agnostic_floorplan_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "028-004-CLEANING")]
    pub advertised_product_category_3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "518238")]
    pub sku_1_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "1001805909")]
    pub sku_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "1000031996")]
    pub sku_3: Option<String>,
}

impl TryFrom<ProofOfPlayRow> for ProofOfPlayRecord {
    type Error = &'static str;

    /// Fails with the name of the first missing required column. Callers are
    /// expected to run `Validate` first so that every gap is reported.
    fn try_from(row: ProofOfPlayRow) -> Result<Self, Self::Error> {
        let plays = row.plays.ok_or("plays")?;
        Ok(Self {
            date: row.date.ok_or("date")?,
            media_paid_brand: row.media_paid_brand.ok_or("media_paid_brand")?,
            player_paid_brand: row.player_paid_brand.ok_or("player_paid_brand")?,
            store_number: row.store_number.ok_or("store_number")?,
            plays: u64::try_from(plays).map_err(|_| "plays")?,
            media_name: row.media_name.ok_or("media_name")?,
            media_length: row.media_length.ok_or("media_length")?,
            media_program_goal: row.media_program_goal,
            player_in_store_category_location: row
                .player_in_store_category_location
                .ok_or("player_in_store_category_location")?,
            player_form_factor: row.player_form_factor.ok_or("player_form_factor")?,
            player_orientation: row.player_orientation,
            player_agnostic_floorplan_location: row.player_agnostic_floorplan_location,
            advertised_product_category_3: row.advertised_product_category_3,
            sku_1_primary: row.sku_1_primary,
            sku_2: row.sku_2,
            sku_3: row.sku_3,
        })
    }
}

/// Batch wrapper so the rows of one page are validated with their index.
#[derive(Debug, Validate)]
pub struct ProofOfPlayBatch {
    #[validate(nested)]
    pub proof_list: Vec<ProofOfPlayRow>,
}

/// Paginated proof-of-play listing. The query that produced the page is
/// echoed at the top level of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PopDetailsListResponse {
    #[serde(flatten)]
    pub query: QueryDescriptor,
    /// Records matching the query across all pages
    pub total_count: u64,
    /// Records in this page
    pub current_page_count: u64,
    pub proof_list: Vec<ProofOfPlayRecord>,
}
