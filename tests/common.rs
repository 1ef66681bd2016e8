#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbs() -> Command {
    cargo_bin_cmd!("rbikestats")
}

/// Create a unique test data directory inside the system temp dir and
/// remove any leftover from a previous run
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikestats_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");
    dir
}

pub fn write_file(dir: &str, name: &str, content: &str) {
    let mut path = PathBuf::from(dir);
    path.push(name);
    fs::write(&path, content).expect("write fixture csv");
}

/// Chicago fixture: 6 trips over Jan/Feb/Mar/Jun with full demographics.
/// Known answers: month mode January (2), day mode Monday (3), hour mode
/// 9AM (4), start mode Canal St (3), end mode Clark St (3), combo mode
/// "Canal St to Clark St" (2), total duration 7702 s.
pub const CHICAGO_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St,Clark St,Subscriber,Male,1992.0
2017-01-02 09:20:53,2017-01-02 09:35:57,904,Canal St,State St,Subscriber,Female,1992.0
2017-02-03 15:02:09,2017-02-03 15:22:01,1193,State St,Canal St,Customer,,
2017-03-06 14:09:31,2017-03-06 14:30:00,1229,Canal St,Clark St,Subscriber,Male,1981.0
2017-06-11 09:15:30,2017-06-11 09:45:30,1800,Clark St,State St,,Female,2002.0
2017-06-12 09:01:00,2017-06-12 09:31:00,1800,State St,Clark St,Subscriber,Male,
";

/// New York City fixture: the tied-combination scenario.
pub const NEW_YORK_CITY_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-01 00:00:00,2017-01-01 00:10:00,600,A,X,Subscriber,Male,1990.0
2017-01-02 00:00:00,2017-01-02 00:10:00,600,A,Y,Subscriber,Female,1991.0
2017-01-03 00:00:00,2017-01-03 00:10:00,600,B,X,Customer,,
";

/// Washington fixture: no Gender / Birth Year columns, fractional durations.
pub const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-04-01 08:00:00,2017-04-01 08:10:00,600.5,A St,X St,Registered
2017-04-02 08:30:00,2017-04-02 08:40:00,610.25,A St,Y St,Casual
2017-05-05 17:00:00,2017-05-05 17:20:00,1200.0,B St,X St,Registered
";

/// Seed all three city files with the small, known datasets
pub fn seed_cities(dir: &str) {
    write_file(dir, "chicago.csv", CHICAGO_CSV);
    write_file(dir, "new_york_city.csv", NEW_YORK_CITY_CSV);
    write_file(dir, "washington.csv", WASHINGTON_CSV);
}
