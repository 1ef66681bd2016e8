//! Statistics on the most popular stations and trip combination.

use ansi_term::Colour;

use crate::dataset::Dataset;
use crate::utils::formatting::{bold, title_case};

use super::{NO_DATA, mode_count};

pub fn report(ds: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n",
        bold("Calculating The Most Popular Stations and Trip...")
    ));

    if ds.is_empty() {
        out.push_str(&format!("\n{}\n", NO_DATA));
        return out;
    }

    if let Some((station, count)) = mode_count(ds.trips.iter().map(|t| t.start_station.as_str())) {
        out.push_str(&format!(
            "\nThe most common station for initiation of travel is {} ({} trips)\n",
            Colour::Cyan.paint(title_case(station)),
            count
        ));
    }

    if let Some((station, count)) = mode_count(ds.trips.iter().map(|t| t.end_station.as_str())) {
        out.push_str(&format!(
            "\nThe most common station for completion of travel is {} ({} trips)\n",
            Colour::Cyan.paint(title_case(station)),
            count
        ));
    }

    if let Some((combo, count)) = mode_count(ds.trips.iter().map(|t| t.combination())) {
        out.push_str(&format!(
            "\nThe most frequent combination start/end station is {} ({} trips)\n",
            Colour::Cyan.paint(combo),
            count
        ));
    }

    out
}
