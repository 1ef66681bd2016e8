use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One ride entry: start time, duration, stations, and the optional
/// demographic fields that only some cities provide.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub month: u32,        // derived once at load, 1-12
    pub weekday: Weekday,  // derived once at load
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        duration_secs: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            start_time,
            month: start_time.month(),
            weekday: start_time.weekday(),
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Synthesized "start to end" trip combination
    pub fn combination(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}
