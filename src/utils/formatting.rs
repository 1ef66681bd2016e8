//! Formatting utilities used for the statistic reports.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Decompose whole seconds into (hours, minutes, seconds) by successive
/// integer division.
pub fn secs2hms(total: i64) -> (i64, i64, i64) {
    let (mins, secs) = (total / 60, total % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    (hours, mins, secs)
}

/// Same decomposition for a fractional seconds value; the fraction stays
/// in the seconds component.
pub fn secs2hms_f(total: f64) -> (f64, f64, f64) {
    let mins = (total / 60.0).floor();
    let secs = total - mins * 60.0;
    let hours = (mins / 60.0).floor();
    let mins = mins - hours * 60.0;
    (hours, mins, secs)
}

/// Render an hour of day (0-23) in 12-hour form. Hours strictly greater
/// than 12 wrap to PM; 0 and 12 stay as-is and are labelled AM.
pub fn hour12(hour: u32) -> (u32, &'static str) {
    if hour > 12 {
        (hour - 12, "PM")
    } else {
        (hour, "AM")
    }
}

/// Capitalize the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
