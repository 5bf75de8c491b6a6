mod cli;
mod logging;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use timecalc::{
    calculate_time, combine, compose_anchored, parse_date, parse_duration, parse_time,
    render_result, AnchoredReport, Style,
};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Output of a plain clock calculation.
#[derive(Serialize)]
struct ClockOutput {
    result: String,
    time: timecalc::Time,
    days: i64,
    #[serde(flatten)]
    anchored: Option<AnchoredReport>,
}

fn run(cli: Cli) -> Result<i32> {
    if cli.api {
        return serve_stdin();
    }

    // clap guarantees both positionals unless --api is present.
    let (Some(initial_time), Some(duration)) = (cli.initial_time, cli.duration) else {
        anyhow::bail!("initial time and duration are required");
    };

    let time = parse_time(&initial_time)?;
    let duration = parse_duration(&duration)?;
    tracing::debug!(%time, %duration, days_offset = cli.days_offset, "parsed inputs");

    let combined = combine(time, &duration)?;
    let total_days = combined.total_days(cli.days_offset)?;

    let anchored = match cli.start_date.as_deref() {
        Some(date) => {
            let date = parse_date(date)?;
            Some(compose_anchored(time, &duration, date, cli.days_offset)?.report())
        }
        None => None,
    };

    if cli.json {
        let output = ClockOutput {
            result: render_result(combined.time, total_days, Style::Terminal),
            time: combined.time,
            days: total_days,
            anchored,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if let Some(report) = anchored {
        println!("Start: {}", report.start_datetime_str);
        println!("End: {}", report.end_datetime_str);
        println!("Duration: {}", report.duration_details_str);
    } else {
        println!(
            "{}",
            render_result(combined.time, total_days, Style::Terminal)
        );
    }

    Ok(0)
}

/// Answer one calculate_time request read from stdin.
fn serve_stdin() -> Result<i32> {
    let mut body = String::new();
    io::stdin()
        .read_to_string(&mut body)
        .context("failed to read request body from stdin")?;

    let response = calculate_time(&body);
    tracing::info!(status = response.status, "handled request");
    println!("{}", serde_json::to_string(&response.body)?);

    Ok(if response.is_success() { 0 } else { 1 })
}
