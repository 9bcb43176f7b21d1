mod audit;
mod build_tree;

use audit::Audit;
use build_tree::BuildTree;
use clap::ArgAction;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.command.run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::EnvFilter;

        let default_level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // RUST_LOG, when set, takes precedence over the -v flags.
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Build a requirement tree from a catalog event stream
    BuildTree(BuildTree),

    /// Run an eligibility audit for a term
    Audit(Audit),
}

impl Command {
    fn run(self) -> anyhow::Result<()> {
        match self {
            Self::BuildTree(cmd) => cmd.run(),
            Self::Audit(cmd) => cmd.run(),
        }
    }
}
