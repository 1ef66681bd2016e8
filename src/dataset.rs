//! CSV loading and filtering for the city datasets.
//!
//! Column presence is detected from the header at runtime: Chicago and New
//! York City carry `Gender` and `Birth Year`, Washington does not. Optional
//! cells that are empty become `None`, never an empty value.

use std::collections::HashMap;
use std::fs::File;

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, MonthFilter, Trip};
use crate::utils::path::expand_tilde;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const REQUIRED_COLUMNS: [&str; 5] = [
    "start time",
    "trip duration",
    "start station",
    "end station",
    "user type",
];

/// The trips of one city, already narrowed to the active filter selection.
#[derive(Debug)]
pub struct Dataset {
    pub city: City,
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Load the backing file for `city` and keep the rows matching the filters.
/// Any unparseable start time or duration fails the whole load.
pub fn load(
    cfg: &Config,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> AppResult<Dataset> {
    let path = expand_tilde(&cfg.data_dir).join(city.data_file());
    if !path.exists() {
        return Err(AppError::MissingDataFile(path.display().to_string()));
    }

    let file = File::open(&path)?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);

    for col in REQUIRED_COLUMNS {
        if !header_map.contains_key(col) {
            return Err(AppError::MissingColumn(
                col.to_string(),
                path.display().to_string(),
            ));
        }
    }

    let has_gender = header_map.contains_key("gender");
    let has_birth_year = header_map.contains_key("birth year");

    let mut all = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts on the line after the header; CSV lines are 1-based
        let line = idx + 2;
        let record = result?;
        all.push(parse_row(&record, &header_map, line)?);
    }

    let trips = apply_filters(&all, month, day);

    Ok(Dataset {
        city,
        trips,
        has_gender,
        has_birth_year,
    })
}

/// Narrow `trips` to the rows matching both filters (AND semantics).
/// All/All is the identity; the source slice is never mutated.
pub fn apply_filters(trips: &[Trip], month: MonthFilter, day: DayFilter) -> Vec<Trip> {
    trips
        .iter()
        .filter(|t| month.matches(t.month) && day.matches(t.weekday))
        .cloned()
        .collect()
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a BOM;
    // strip it or column detection reports the column missing.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    line: usize,
) -> AppResult<Trip> {
    let raw_start = get_optional(record, header_map, "start time").unwrap_or("");
    let start_time = NaiveDateTime::parse_from_str(raw_start, TIMESTAMP_FORMAT).map_err(|_| {
        AppError::InvalidTimestamp {
            value: raw_start.to_string(),
            line,
        }
    })?;

    let raw_duration = get_optional(record, header_map, "trip duration").unwrap_or("");
    let duration_secs = raw_duration
        .parse::<f64>()
        .map_err(|_| AppError::InvalidDuration {
            value: raw_duration.to_string(),
            line,
        })?;

    let start_station = get_optional(record, header_map, "start station")
        .unwrap_or("")
        .to_string();
    let end_station = get_optional(record, header_map, "end station")
        .unwrap_or("")
        .to_string();

    let user_type = get_optional(record, header_map, "user type").map(str::to_string);
    let gender = get_optional(record, header_map, "gender").map(str::to_string);
    // pandas-style exports render the year as a float ("1992.0")
    let birth_year = get_optional(record, header_map, "birth year")
        .and_then(|s| s.parse::<f64>().ok())
        .map(|y| y as i32);

    Ok(Trip::new(
        start_time,
        duration_secs,
        start_station,
        end_station,
        user_type,
        gender,
        birth_year,
    ))
}

fn get_optional<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}
