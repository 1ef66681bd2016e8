//! The interactive session loop.
//!
//! COLLECT_FILTERS -> LOAD -> REPORT -> RAW_DATA -> RESTART, repeated until
//! the user declines to restart or exhausts the city attempts.

use std::io::BufRead;
use std::time::Instant;

use crate::config::Config;
use crate::dataset::{self, Dataset};
use crate::errors::AppResult;
use crate::stats;
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::title_case;
use crate::utils::table::Table;

use super::filters::collect_filters;
use super::prompt::read_line;

pub fn run_session<R: BufRead>(input: &mut R, cfg: &Config) -> AppResult<()> {
    loop {
        messages::header("Welcome. Let's explore Bikeshare data");
        println!(
            "Available cities: Chicago (CHI), New York City (NYC), Washington (WASH)\n\
             Timeframe: January (JAN) to June (JUN) 2017!"
        );
        messages::paragraph(
            "You will be asked for a city, a month and a day of week; the session \
             then prints travel time, station, trip duration and user statistics \
             for the matching trips.",
        );

        let Some(selection) = collect_filters(input) else {
            println!("\nInvalid City entered. You will need to begin again.\n");
            return Ok(());
        };
        println!("{}", cfg.separator());

        match dataset::load(cfg, selection.city, selection.month, selection.day) {
            Ok(ds) => {
                messages::info(format!(
                    "Analyzing data for City: {}, Month: {}, Day of Week: {}",
                    selection.city.label(),
                    title_case(selection.month.name()),
                    title_case(selection.day.name())
                ));
                println!("Number of records analyzed: {}", ds.len());

                report_all(&ds, cfg);
                browse_raw_data(input, &ds, cfg);
            }
            Err(e) => {
                // fatal for this iteration only; reporters are skipped
                messages::error(&e);
            }
        }

        if !prompt_restart(input) {
            println!(
                "\nExiting now.\nThank you for using our system.\n\
                 If you would like additional analysis, please restart.\n"
            );
            return Ok(());
        }
    }
}

/// Run the four reporters in fixed order, timing each one.
fn report_all(ds: &Dataset, cfg: &Config) {
    let reporters: [fn(&Dataset) -> String; 4] = [
        stats::time::report,
        stats::station::report,
        stats::duration::report,
        stats::user::report,
    ];

    for render in reporters {
        let started = Instant::now();
        print!("{}", render(ds));
        println!("\nThis took {:.6} seconds.", started.elapsed().as_secs_f64());
        println!("{}", cfg.separator());
    }
}

fn browse_raw_data<R: BufRead>(input: &mut R, ds: &Dataset, cfg: &Config) {
    println!(
        "\nWould you like to see the raw data?\n\
         Data will be displayed {} rows at a time.\n\
         Enter YES or NO.\n\
         The default is NO - press Enter to accept.",
        cfg.page_size
    );

    let mut offset = 0;
    while read_line(input).eq_ignore_ascii_case("yes") {
        print!("{}", render_page(ds, offset, cfg.page_size));
        offset += cfg.page_size;

        println!(
            "\nWould you like to see more raw data?\n\
             Enter YES or NO.\n\
             The default is NO - press Enter to accept."
        );
    }
}

/// One page of raw trips as an aligned table. Paging past the end yields
/// an empty or partial page, never an error.
fn render_page(ds: &Dataset, offset: usize, page: usize) -> String {
    let mut headers = vec![
        "Start Time".to_string(),
        "Duration".to_string(),
        "Start Station".to_string(),
        "End Station".to_string(),
        "User Type".to_string(),
    ];
    if ds.has_gender {
        headers.push("Gender".to_string());
    }
    if ds.has_birth_year {
        headers.push("Birth Year".to_string());
    }

    let mut table = Table::new(headers);
    for trip in ds.trips.iter().skip(offset).take(page) {
        let mut row = vec![
            trip.start_time_str(),
            trip.duration_secs.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            colorize_optional(trip.user_type.as_deref().unwrap_or("--")),
        ];
        if ds.has_gender {
            row.push(colorize_optional(trip.gender.as_deref().unwrap_or("--")));
        }
        if ds.has_birth_year {
            row.push(colorize_optional(
                &trip
                    .birth_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "--".to_string()),
            ));
        }
        table.add_row(row);
    }

    table.render()
}

fn prompt_restart<R: BufRead>(input: &mut R) -> bool {
    println!(
        "\nWould you like to restart?\n\
         Enter YES or NO.\n\
         The default is NO - press Enter to accept."
    );
    read_line(input).eq_ignore_ascii_case("yes")
}
