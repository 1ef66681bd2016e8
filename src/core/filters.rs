//! The filter collector: city, month and day prompts.

use std::io::BufRead;

use crate::models::{City, DayFilter, FilterSelection, MonthFilter, TripMonth};

use super::prompt::{OnExhausted, ask};

const CITY_PROMPT: &str = "Please enter the name of the city to analyze.\n\
Enter CHI for Chicago\n\
Enter NYC for New York City\n\
Enter WASH for Washington\n\
You will be given 3 attempts.";

const MONTH_PROMPT: &str = "Please enter the month to analyze.\n\
You may select ALL or one of the following:\n\
    JAN, FEB, MAR, APR, MAY, JUN\n\
After 3 attempts we will default to ALL";

const DAY_PROMPT: &str = "Please enter the day of week to analyze.\n\
You may select ALL or one of the following:\n\
    SUN, MON, TUE, WED, THU, FRI, SAT\n\
After 3 attempts we will default to ALL";

/// Ask for city, month and day. `None` means the city could not be
/// resolved within the attempt limit; month and day are never asked then.
pub fn collect_filters<R: BufRead>(input: &mut R) -> Option<FilterSelection> {
    let city = ask(
        input,
        CITY_PROMPT,
        "Maximum attempts reached",
        OnExhausted::GiveUp,
        City::from_code,
    )?;

    let month = ask(
        input,
        MONTH_PROMPT,
        "Maximum attempts reached. Default to ALL.",
        OnExhausted::Default(MonthFilter::All),
        parse_month,
    )
    .unwrap_or(MonthFilter::All);

    let day = ask(
        input,
        DAY_PROMPT,
        "Maximum attempts exceeded. Default to ALL.",
        OnExhausted::Default(DayFilter::All),
        parse_day,
    )
    .unwrap_or(DayFilter::All);

    Some(FilterSelection { city, month, day })
}

/// First 3 characters of the answer, case-folded
fn short_code(answer: &str) -> String {
    answer.to_lowercase().chars().take(3).collect()
}

pub fn parse_month(answer: &str) -> Option<MonthFilter> {
    let code = short_code(answer);
    if code == "all" {
        return Some(MonthFilter::All);
    }
    TripMonth::from_code(&code).map(MonthFilter::Month)
}

pub fn parse_day(answer: &str) -> Option<DayFilter> {
    let code = short_code(answer);
    if code == "all" {
        return Some(DayFilter::All);
    }
    DayFilter::from_code(&code).map(DayFilter::Day)
}
