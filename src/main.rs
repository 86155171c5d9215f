use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use log::info;
use regex::Regex;

use meetfind::app::{Application, SearchOptions};
use meetfind::config::Config;
use meetfind::slots::AcceptanceWindow;

fn main() -> Result<()> {
    meetfind::init_logger();

    let config = Config::load()?;
    let mut day = Local::now().date_naive();
    let mut window = config.window.to_window()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--date" => {
                let value =
                    args.get(i + 1).ok_or_else(|| anyhow!("--date requires a value"))?;
                day = parse_date(value)?;
                i += 2;
            }
            "--window" => {
                let value =
                    args.get(i + 1).ok_or_else(|| anyhow!("--window requires a value"))?;
                window = parse_window(value)?;
                i += 2;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                return Err(anyhow!("Unknown argument: {}", other));
            }
        }
    }

    info!("Searching {} with window {:02}:00-{:02}:00", day, window.start(), window.end());
    let app = Application::new(SearchOptions { day, window });
    app.run()
}

fn print_usage() {
    println!("Usage: meetfind [--date YYYY-MM-DD] [--window START-END]");
    println!();
    println!("  --date    Reference day for the search (default: today)");
    println!("  --window  Acceptable local hours, inclusive (default: 9-20)");
}

/// Accepts YYYY-MM-DD only.
fn parse_date(value: &str) -> Result<NaiveDate> {
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    if !re.is_match(value) {
        return Err(anyhow!("Date must have format YYYY-MM-DD, got {:?}", value));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| anyhow!("Invalid date {:?}: {}", value, e))
}

/// Accepts "START-END" hour pairs like "9-20".
fn parse_window(value: &str) -> Result<AcceptanceWindow> {
    let re = Regex::new(r"^(\d{1,2})-(\d{1,2})$").unwrap();
    let caps = re
        .captures(value)
        .ok_or_else(|| anyhow!("Window must have format START-END, e.g. 9-20, got {:?}", value))?;
    let start: u32 = caps[1].parse()?;
    let end: u32 = caps[2].parse()?;
    Ok(AcceptanceWindow::new(start, end)?)
}
