use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "micrn")]
#[command(version = "1.0")]
#[command(about = "A small terminal text editor with Emacs keys and two buffers")]
pub struct CliArgs {
    /// Files to open: the first in buffer 1, the second in buffer 2
    #[arg(num_args = 0..=2)]
    pub files: Vec<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write log output to this file (the terminal is in raw mode)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
