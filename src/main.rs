//! CLI entry point for weighted icon-tile mosaic synthesis

use clap::Parser;
use pixelmosaic::io::cli::{Cli, FileProcessor};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> pixelmosaic::Result<()> {
    let cli = Cli::parse();
    // Only fails when a logger is already installed, which leaves logging working
    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
