//! Statistics on the total and average trip duration.

use ansi_term::Colour;

use crate::dataset::Dataset;
use crate::utils::formatting::{bold, secs2hms, secs2hms_f};

use super::NO_DATA;

pub fn report(ds: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", bold("Calculating Trip Duration...")));

    if ds.is_empty() {
        out.push_str(&format!("\n{}\n", NO_DATA));
        return out;
    }

    let total: f64 = ds.trips.iter().map(|t| t.duration_secs).sum();

    // Washington carries fractional seconds; the total is reported on
    // whole seconds, the mean keeps the fraction.
    let (hours, mins, secs) = secs2hms(total.trunc() as i64);
    out.push_str(&format!(
        "\nThe total travel time is {} (H:M:S)\n",
        Colour::Cyan.paint(format!("{}:{}:{}", hours, mins, secs))
    ));

    let mean = total / ds.len() as f64;
    let (hours, mins, secs) = secs2hms_f(mean);
    out.push_str(&format!(
        "\nThe average travel time is {} (H:M:S)\n",
        Colour::Cyan.paint(format!("{:.0}:{:.0}:{:.2}", hours, mins, secs))
    ));

    out
}
