use rbikestats::config::Config;
use rbikestats::dataset::{apply_filters, load};
use rbikestats::errors::AppError;
use rbikestats::models::{City, DayFilter, MonthFilter, TripMonth};

mod common;
use common::{seed_cities, setup_data_dir, write_file};

fn cfg_for(dir: &str) -> Config {
    Config {
        data_dir: dir.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_all_known_cities_load_from_well_formed_files() {
    let dir = setup_data_dir("load_all_cities");
    seed_cities(&dir);
    let cfg = cfg_for(&dir);

    for city in City::ALL {
        let ds = load(&cfg, city, MonthFilter::All, DayFilter::All).expect("load city");
        assert!(!ds.is_empty(), "{} fixture should not be empty", city.code());
    }
}

#[test]
fn test_all_all_is_the_identity_filter() {
    let dir = setup_data_dir("load_identity");
    seed_cities(&dir);
    let cfg = cfg_for(&dir);

    let ds = load(&cfg, City::Chicago, MonthFilter::All, DayFilter::All).expect("load");
    assert_eq!(ds.len(), 6);

    let refiltered = apply_filters(&ds.trips, MonthFilter::All, DayFilter::All);
    assert_eq!(refiltered.len(), ds.len());
}

#[test]
fn test_month_filtering_is_idempotent() {
    let dir = setup_data_dir("load_idempotent");
    seed_cities(&dir);
    let cfg = cfg_for(&dir);

    let january = MonthFilter::Month(TripMonth::January);
    let ds = load(&cfg, City::Chicago, january, DayFilter::All).expect("load");
    assert_eq!(ds.len(), 2);

    let again = apply_filters(&ds.trips, january, DayFilter::All);
    assert_eq!(again.len(), ds.len());
    for (a, b) in ds.trips.iter().zip(again.iter()) {
        assert_eq!(a.start_time, b.start_time);
    }
}

#[test]
fn test_month_and_day_filters_compose_with_and_semantics() {
    let dir = setup_data_dir("load_compose");
    seed_cities(&dir);
    let cfg = cfg_for(&dir);

    // June has two trips; only one of them is a Monday
    let ds = load(
        &cfg,
        City::Chicago,
        MonthFilter::Month(TripMonth::June),
        DayFilter::Day(chrono::Weekday::Mon),
    )
    .expect("load");
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.trips[0].start_station, "State St");
}

#[test]
fn test_filtering_derives_columns_once_per_load() {
    let dir = setup_data_dir("load_derived");
    seed_cities(&dir);
    let cfg = cfg_for(&dir);

    let ds = load(&cfg, City::Chicago, MonthFilter::All, DayFilter::All).expect("load");
    for trip in &ds.trips {
        assert!((1..=12).contains(&trip.month));
    }
    assert_eq!(ds.trips[0].month, 1);
    assert_eq!(ds.trips[0].weekday, chrono::Weekday::Sun);
}

#[test]
fn test_optional_columns_are_detected_per_city() {
    let dir = setup_data_dir("load_columns");
    seed_cities(&dir);
    let cfg = cfg_for(&dir);

    let chi = load(&cfg, City::Chicago, MonthFilter::All, DayFilter::All).expect("load chi");
    assert!(chi.has_gender);
    assert!(chi.has_birth_year);

    let wash = load(&cfg, City::Washington, MonthFilter::All, DayFilter::All).expect("load wash");
    assert!(!wash.has_gender);
    assert!(!wash.has_birth_year);
}

#[test]
fn test_absent_cells_become_none_not_empty_values() {
    let dir = setup_data_dir("load_absent");
    seed_cities(&dir);
    let cfg = cfg_for(&dir);

    let ds = load(&cfg, City::Chicago, MonthFilter::All, DayFilter::All).expect("load");
    // row 3 has no gender/birth year, row 5 has no user type
    assert_eq!(ds.trips[2].gender, None);
    assert_eq!(ds.trips[2].birth_year, None);
    assert_eq!(ds.trips[4].user_type, None);
    assert_eq!(ds.trips[0].birth_year, Some(1992));
}

#[test]
fn test_missing_data_file_is_a_dedicated_error() {
    let dir = setup_data_dir("load_missing_file");
    let cfg = cfg_for(&dir);

    let err = load(&cfg, City::Chicago, MonthFilter::All, DayFilter::All)
        .expect_err("load should fail");
    assert!(matches!(err, AppError::MissingDataFile(_)));
}

#[test]
fn test_malformed_timestamp_fails_the_whole_load() {
    let dir = setup_data_dir("load_bad_timestamp");
    write_file(
        &dir,
        "chicago.csv",
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St,Clark St,Subscriber\n\
         not-a-timestamp,2017-01-02 09:35:57,904,Canal St,State St,Subscriber\n",
    );
    let cfg = cfg_for(&dir);

    let err = load(&cfg, City::Chicago, MonthFilter::All, DayFilter::All)
        .expect_err("load should fail");
    assert!(matches!(err, AppError::InvalidTimestamp { line: 3, .. }));
}

#[test]
fn test_missing_required_column_is_reported_by_name() {
    let dir = setup_data_dir("load_missing_column");
    write_file(
        &dir,
        "chicago.csv",
        "Start Time,End Time,Trip Duration,Start Station,End Station\n\
         2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St,Clark St\n",
    );
    let cfg = cfg_for(&dir);

    let err = load(&cfg, City::Chicago, MonthFilter::All, DayFilter::All)
        .expect_err("load should fail");
    match err {
        AppError::MissingColumn(col, _) => assert_eq!(col, "user type"),
        other => panic!("unexpected error: {other}"),
    }
}
