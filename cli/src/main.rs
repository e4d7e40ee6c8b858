mod commands;
mod terminal;

use std::io::{self, BufWriter};

use commands::CommandLine;
use ipfilter_common::config::Config;
use ipfilter_core::pipeline;
use terminal::logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let summary = pipeline::run(stdin, &mut stdout)?;
    info!(
        "{} addresses sorted, filters matched {} / {} / {}",
        summary.total, summary.filtered[0], summary.filtered[1], summary.filtered[2]
    );

    Ok(())
}
