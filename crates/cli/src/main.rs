use clap::Parser;
use datadog_logs_cli::commands::{run, Cli};

fn main() {
  let cli = Cli::parse();
  if let Err(message) = run(cli) {
    eprintln!("{message}");
    std::process::exit(1);
  }
}
