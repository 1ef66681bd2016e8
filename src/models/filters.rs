use chrono::Weekday;

use super::city::City;

/// The dataset covers January through June only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripMonth {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl TripMonth {
    /// Convert a 3-letter prompt code (already case-folded) into a month
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "jan" => Some(TripMonth::January),
            "feb" => Some(TripMonth::February),
            "mar" => Some(TripMonth::March),
            "apr" => Some(TripMonth::April),
            "may" => Some(TripMonth::May),
            "jun" => Some(TripMonth::June),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TripMonth::January => "january",
            TripMonth::February => "february",
            TripMonth::March => "march",
            TripMonth::April => "april",
            TripMonth::May => "may",
            TripMonth::June => "june",
        }
    }

    /// 1-based month index as derived from the start timestamp
    pub fn number(&self) -> u32 {
        match self {
            TripMonth::January => 1,
            TripMonth::February => 2,
            TripMonth::March => 3,
            TripMonth::April => 4,
            TripMonth::May => 5,
            TripMonth::June => 6,
        }
    }
}

/// Display name for a derived month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(TripMonth),
}

impl MonthFilter {
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => m.number() == month,
        }
    }

    /// Lowercase name, "all" included, as echoed back to the user
    pub fn name(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Month(m) => m.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Convert a 3-letter prompt code (already case-folded) into a day filter
    pub fn from_code(code: &str) -> Option<Weekday> {
        match code {
            "sun" => Some(Weekday::Sun),
            "mon" => Some(Weekday::Mon),
            "tue" => Some(Weekday::Tue),
            "wed" => Some(Weekday::Wed),
            "thu" => Some(Weekday::Thu),
            "fri" => Some(Weekday::Fri),
            "sat" => Some(Weekday::Sat),
            _ => None,
        }
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }

    /// Lowercase name, "all" included, as echoed back to the user
    pub fn name(&self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Day(Weekday::Mon) => "monday",
            DayFilter::Day(Weekday::Tue) => "tuesday",
            DayFilter::Day(Weekday::Wed) => "wednesday",
            DayFilter::Day(Weekday::Thu) => "thursday",
            DayFilter::Day(Weekday::Fri) => "friday",
            DayFilter::Day(Weekday::Sat) => "saturday",
            DayFilter::Day(Weekday::Sun) => "sunday",
        }
    }
}

/// Full English weekday name, as derived for every trip
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Validated (city, month, day) triple for one session loop iteration.
#[derive(Debug, Clone, Copy)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
