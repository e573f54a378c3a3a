//! CLI entry point for the randomized panel generator

use clap::Parser;
use randopanel::io::cli::{Cli, PanelProcessor};
use randopanel::io::logging;

fn main() -> randopanel::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut processor = PanelProcessor::new(cli);
    processor.process()
}
