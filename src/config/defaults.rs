pub fn default_logging_level() -> String {
    "info".to_string()
}

pub fn default_logging_json_format() -> bool {
    false
}

pub fn default_lookback_days() -> i64 {
    15
}

pub fn default_pop_max_per_page() -> i64 {
    3000
}

pub fn default_impression_max_per_page() -> i64 {
    1000
}
