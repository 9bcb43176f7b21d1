use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use athaudit::{CatalogEvent, build_requirement_forest};
use clap::Parser;
use tracing::instrument;

/// Command arguments for `athaudit build-tree`.
#[derive(Debug, Parser)]
#[command(about = "Build a requirement tree from a catalog event stream")]
pub struct BuildTree {
    /// Path to a JSON array of catalog events.
    events: PathBuf,

    /// Where to write the requirement forest (JSON); stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl BuildTree {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self) -> anyhow::Result<()> {
        let file = File::open(&self.events)
            .with_context(|| format!("failed to open {}", self.events.display()))?;
        let events: Vec<CatalogEvent> =
            serde_json::from_reader(BufReader::new(file)).context("malformed event stream")?;

        let forest = build_requirement_forest(&events).context("tree construction failed")?;

        match self.output {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, &forest)?;
                writeln!(writer)?;
            }
            None => {
                serde_json::to_writer_pretty(std::io::stdout(), &forest)?;
                println!();
            }
        }

        Ok(())
    }
}
