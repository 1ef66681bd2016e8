//! Bounded-retry prompting over any line-oriented reader.
//!
//! The city, month and day questions all share the same shape: ask, parse,
//! retry up to three times, then either give up or fall back to a default.
//! Keeping the state machine generic over `BufRead` keeps it testable
//! without a terminal.

use std::io::BufRead;

use crate::ui::messages;

pub const MAX_ATTEMPTS: u32 = 3;

/// Policy applied once every attempt was invalid.
pub enum OnExhausted<T> {
    GiveUp,
    Default(T),
}

/// Ask up to [`MAX_ATTEMPTS`] times, parsing each answer with `parse`.
/// EOF counts as an invalid answer, so a closed input still terminates.
/// Returns `None` only under the `GiveUp` policy.
pub fn ask<R, T, F>(
    input: &mut R,
    instructions: &str,
    exhausted_msg: &str,
    on_exhausted: OnExhausted<T>,
    parse: F,
) -> Option<T>
where
    R: BufRead,
    F: Fn(&str) -> Option<T>,
{
    let mut attempts = 0;
    while attempts < MAX_ATTEMPTS {
        println!("{}", instructions);
        let answer = read_line(input);
        attempts += 1;

        if let Some(value) = parse(&answer) {
            return Some(value);
        }
    }

    messages::warning(exhausted_msg);
    match on_exhausted {
        OnExhausted::GiveUp => None,
        OnExhausted::Default(value) => Some(value),
    }
}

/// Read one trimmed line; empty on EOF or error.
pub fn read_line<R: BufRead>(input: &mut R) -> String {
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(_) => buf.trim().to_string(),
        Err(_) => String::new(),
    }
}
