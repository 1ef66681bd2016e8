use clap::Parser;

/// Command-line interface definition for rbikestats.
/// The session itself is interactive; the only arguments are overrides.
#[derive(Parser)]
#[command(
    name = "rbikestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore bikeshare trip data for Chicago, New York City and Washington",
    long_about = None
)]
pub struct Cli {
    /// Override the directory containing the city CSV files
    #[arg(long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (skip the user configuration file)
    #[arg(long = "test", hide = true)]
    pub test: bool,
}
