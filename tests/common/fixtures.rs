#![allow(dead_code)]

use pop_report_api::api::dtos::{ProofOfPlayRow, QueryDescriptor, ReportQueryParams};

use super::date;

pub fn params(
    start_date: Option<&str>,
    end_date: Option<&str>,
    page: Option<&str>,
    max_per_page: Option<&str>,
) -> ReportQueryParams {
    ReportQueryParams {
        start_date: start_date.map(str::to_string),
        end_date: end_date.map(str::to_string),
        page: page.map(str::to_string),
        max_per_page: max_per_page.map(str::to_string),
    }
}

pub fn january_query() -> QueryDescriptor {
    QueryDescriptor {
        start_date: date(2022, 1, 1),
        end_date: date(2022, 1, 15),
        page: 2,
        max_per_page: 500,
    }
}

/// A row with every required column and none of the optional ones.
pub fn complete_row() -> ProofOfPlayRow {
    ProofOfPlayRow {
        date: Some("2022-02-02".to_string()),
        media_paid_brand: Some("Clorox".to_string()),
        player_paid_brand: Some("Clorox".to_string()),
        store_number: Some("6350".to_string()),
        plays: Some(372),
        media_name: Some("Clorox_CleanUpCleanerAndBleach_360x1920P_20NOV21.mp4".to_string()),
        media_length: Some(57),
        player_in_store_category_location: Some("Window Treatments".to_string()),
        player_form_factor: Some("Vertical Video Banner".to_string()),
        ..ProofOfPlayRow::default()
    }
}

pub fn described_row() -> ProofOfPlayRow {
    ProofOfPlayRow {
        media_program_goal: Some("Product Benefit".to_string()),
        player_orientation: Some("Landscape".to_string()),
        player_agnostic_floorplan_location: Some("Aisle 1 for electric shades".to_string()),
        advertised_product_category_3: Some("028-004-CLEANING".to_string()),
        sku_1_primary: Some("518238".to_string()),
        sku_2: Some("1001805909".to_string()),
        sku_3: Some("1000031996".to_string()),
        ..complete_row()
    }
}
