use clap::Parser;

pub mod search;

const TIME_FORMAT_HELP: &str = "\
Time can be specified in two formats:
  1. Absolute: HH:MM:SS, Toronto local time (e.g. 14:30:00)
  2. Relative: offset from now (e.g. -1h, -30m, -2d, -1h30m, now)
     Supported units: d (days), h (hours), m (minutes), s (seconds)
     Examples: -1h (1 hour ago), -30m (30 min ago), -1d2h (1 day 2 hours ago), now";

#[derive(Parser)]
#[command(name = "datadog-logs", version, about = "Query Datadog logs", after_help = TIME_FORMAT_HELP)]
pub struct Cli {
  #[command(flatten)]
  pub args: search::SearchArgs,
}

pub fn run(cli: Cli) -> Result<(), String> {
  search::run(cli.args)
}
