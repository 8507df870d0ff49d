//! `text2dt` — resolve a free-form date/time expression to a timestamp.

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use serde_json::json;
use text2datetime::{resolve_with_options, DateOrder, ParseOptions, FORMAT_HELP};

#[derive(Parser)]
#[command(
    name = "text2dt",
    version,
    about = "Resolve a free-form date/time expression to an absolute timestamp",
    after_long_help = FORMAT_HELP
)]
struct Cli {
    /// The expression, e.g. "tomorrow 5:00AM" or "+3d 12:00" (quoting optional)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Reference instant, YYYY-MM-DDTHH:MM:SS (defaults to the current local time)
    #[arg(long, value_parser = parse_anchor)]
    anchor: Option<NaiveDateTime>,

    /// Read N/N/N dates as day/month/year instead of month/day/year
    #[arg(long)]
    day_first: bool,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_anchor(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| format!("'{s}' is not a YYYY-MM-DDTHH:MM:SS timestamp"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let expression = cli.expression.join(" ");
    let anchor = cli
        .anchor
        .unwrap_or_else(|| Local::now().naive_local());
    let options = ParseOptions {
        date_order: if cli.day_first {
            DateOrder::DayFirst
        } else {
            DateOrder::MonthFirst
        },
    };

    let resolved = resolve_with_options(&expression, anchor, &options)?;

    if cli.json {
        let output = json!({
            "input": expression,
            "anchor": anchor.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "resolved": resolved.format("%Y-%m-%dT%H:%M:%S").to_string(),
        });
        println!("{output}");
    } else {
        println!("{}", resolved.format("%Y-%m-%d %H:%M:%S"));
    }
    Ok(())
}
