use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use athaudit::{StudentSlice, TermCode, run_batch_audit};
use clap::Parser;
use tracing::{info, instrument};

/// Command arguments for `athaudit audit`.
#[derive(Debug, Parser)]
#[command(about = "Run an eligibility audit for every student enrolled in a term")]
pub struct Audit {
    /// The term to audit, as a YYYYTT code (e.g. 202320).
    #[arg(short, long)]
    term: TermCode,

    /// Path to a JSON array of student slices (major + enrollment records).
    students: PathBuf,

    /// Where to write audit results (JSON); stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Audit {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self) -> anyhow::Result<()> {
        let file = File::open(&self.students)
            .with_context(|| format!("failed to open {}", self.students.display()))?;
        let students: Vec<StudentSlice> =
            serde_json::from_reader(BufReader::new(file)).context("malformed student data")?;

        let results = run_batch_audit(self.term, &students);
        for result in &results {
            info!(
                student = result.student_id,
                eligible = result.eligible,
                gpa = result.gpa,
                ptc = result.ptc,
                "audited"
            );
        }

        match self.output {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, &results)?;
                writeln!(writer)?;
            }
            None => {
                serde_json::to_writer_pretty(std::io::stdout(), &results)?;
                println!();
            }
        }

        Ok(())
    }
}
