use clap::Parser;

/// Add a duration to an initial time.
#[derive(Parser, Debug)]
#[command(name = "timecalc", version, about = "Add a duration to an initial time")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The starting time, "H:MM AM/PM" or "HH:MM" (e.g. "3:00 PM", "15:00").
    #[arg(required_unless_present = "api")]
    pub initial_time: Option<String>,

    /// The duration to add: "H:MM:SS", "H:MM", "D days, H:MM:SS",
    /// "D days, H:MM" or ":SS" (e.g. "3:10", "1 day, 2:05:30").
    #[arg(required_unless_present = "api")]
    pub duration: Option<String>,

    /// Whole days to add to the result (may be negative).
    #[arg(
        long = "days-offset",
        visible_alias = "days_offset",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub days_offset: i64,

    /// Anchor the calculation on a calendar date (YYYY-MM-DD).
    #[arg(long = "start-date")]
    pub start_date: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Read a calculate_time request body from stdin and write the response body to stdout.
    #[arg(
        long,
        conflicts_with_all = ["initial_time", "duration", "days_offset", "start_date", "json"]
    )]
    pub api: bool,
}
