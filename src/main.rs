//! CLI entry point for the halftone pattern renderer

use clap::Parser;
use halftone::io::cli::{Cli, FileProcessor};

fn main() -> halftone::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
