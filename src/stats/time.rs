//! Statistics on the most frequent times of travel.

use ansi_term::Colour;

use crate::dataset::Dataset;
use crate::models::filters::{month_name, weekday_name};
use crate::utils::formatting::{bold, hour12};

use super::{NO_DATA, mode_count};

pub fn report(ds: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n",
        bold("Calculating The Most Frequent Times of Travel...")
    ));

    if ds.is_empty() {
        out.push_str(&format!("\n{}\n", NO_DATA));
        return out;
    }

    if let Some((month, count)) = mode_count(ds.trips.iter().map(|t| t.month)) {
        out.push_str(&format!(
            "\nThe most common month for travel is {} ({} trips)\n",
            Colour::Cyan.paint(month_name(month)),
            count
        ));
    }

    if let Some((day, count)) = mode_count(ds.trips.iter().map(|t| weekday_name(t.weekday))) {
        out.push_str(&format!(
            "\nThe most common day of the week for travel is {} ({} trips)\n",
            Colour::Cyan.paint(day),
            count
        ));
    }

    if let Some((hour, count)) = mode_count(ds.trips.iter().map(|t| t.start_hour())) {
        let (display, am_pm) = hour12(hour);
        out.push_str(&format!(
            "\nThe most common hour to initiate travel is {} ({} trips)\n",
            Colour::Cyan.paint(format!("{}{}", display, am_pm)),
            count
        ));
    }

    out
}
