use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE", default_value = "paperbox.svg")]
    pub output: PathBuf,
    /// Also write a JSON summary of the generated net
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,
    /// Fail instead of warn when the net does not fit within the page margins
    #[arg(long)]
    pub strict: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
