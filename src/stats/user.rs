//! Statistics on the users behind the trips.

use ansi_term::Colour;

use crate::dataset::Dataset;
use crate::utils::formatting::bold;

use super::{NO_DATA, group_counts, mode_count};

pub fn report(ds: &Dataset) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", bold("Calculating User Stats...")));

    if ds.is_empty() {
        out.push_str(&format!("\n{}\n", NO_DATA));
        return out;
    }

    out.push_str(&format!(
        "\nThe total number of users in the analyzed data is {}\n",
        ds.len()
    ));

    let (type_counts, no_type) =
        group_counts(ds.trips.iter().map(|t| t.user_type.as_deref()));
    out.push_str("\nNumber of Users by User Type:\n");
    for (user_type, count) in &type_counts {
        out.push_str(&format!("    {}: {}\n", user_type, count));
    }
    out.push_str(&format!(
        "\nThere is no user type available for {} users\n",
        no_type
    ));

    if ds.has_gender {
        let (gender_counts, no_gender) =
            group_counts(ds.trips.iter().map(|t| t.gender.as_deref()));
        out.push_str("\nNumber of Users by Gender:\n");
        for (gender, count) in &gender_counts {
            out.push_str(&format!("    {}: {}\n", gender, count));
        }
        out.push_str(&format!(
            "\nThere is no gender available for {} users\n",
            no_gender
        ));
    } else {
        out.push_str("\nAnalysis by Gender is not available for the selected city\n");
    }

    if ds.has_birth_year {
        out.push_str(&birth_year_section(ds));
    } else {
        out.push_str("\nAnalysis by Birth Year is not available for the selected city\n");
    }

    out
}

fn birth_year_section(ds: &Dataset) -> String {
    let mut out = String::new();

    let years: Vec<i32> = ds.trips.iter().filter_map(|t| t.birth_year).collect();
    let absent = ds.len() - years.len();

    // The column can exist while every row of the subset left it blank.
    if let (Some(oldest), Some(youngest)) = (years.iter().min(), years.iter().max()) {
        out.push_str(&format!(
            "\nThe oldest user was born in: {}\n",
            Colour::Cyan.paint(oldest.to_string())
        ));
        out.push_str(&format!(
            "\nThe youngest user was born in: {}\n",
            Colour::Cyan.paint(youngest.to_string())
        ));

        if let Some((year, count)) = mode_count(years.iter().copied()) {
            out.push_str(&format!(
                "\nThe most common birth year for users is: {} ({} users)\n",
                Colour::Cyan.paint(year.to_string()),
                count
            ));
        }
    } else {
        out.push_str("\nNo birth year values in the current selection\n");
    }

    out.push_str(&format!(
        "\nThere is no birth year available for {} users\n",
        absent
    ));

    out
}
