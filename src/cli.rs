use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "agenda", version, about = "Show the next upcoming events from an iCalendar feed")]
pub struct Cli {
    /// URL to download the events from
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// File to read the events from
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Number of events to display [default: 5]
    #[arg(long)]
    pub limit: Option<usize>,

    /// Config file (defaults to <config dir>/agenda/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
