use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "threshold",
    version,
    about = "Terminal reader for THRESHOLD, a supernatural noir serial.",
    long_about = None
)]
pub struct Cli {
    /// Page to open: home, chapters, reader, or lore (unknown names open home)
    #[clap(name = "PAGE")]
    pub page: Option<String>,

    /// Open the reader at the given chapter id
    #[clap(short = 'n', long, value_name = "ID")]
    pub chapter: Option<u32>,

    /// Print the chapter index to stdout and exit
    #[clap(short, long)]
    pub list: bool,

    /// Print one chapter's text to stdout and exit
    #[clap(short, long, value_name = "ID")]
    pub dump: Option<u32>,

    /// Use a specific configuration file
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Enable debug output
    #[clap(long)]
    pub debug: bool,
}
