use clap::{ArgAction, Parser};

/// Addresses are read from stdin, one per line; results go to stdout.
#[derive(Parser)]
#[command(name = "ip_filter")]
#[command(version)]
#[command(about = "Sorts IPv4 addresses from stdin in reverse order and prints fixed filtered views.")]
pub struct CommandLine {
    /// Print more diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
