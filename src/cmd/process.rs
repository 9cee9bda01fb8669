//! Process command - reads operation batches line by line and prints taxes

use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::ops;
use crate::tax::calculate_taxes;

#[derive(Args, Debug)]
pub struct ProcessCommand {
    /// File with one JSON array of operations per line. Reads from stdin if
    /// not specified.
    #[arg(default_value = "-")]
    file: PathBuf,
}

impl ProcessCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let stdout = io::stdout();
        if self.file.as_os_str() == "-" {
            let stdin = io::stdin();
            run(stdin.lock(), stdout.lock())
        } else {
            let reader = BufReader::new(File::open(&self.file)?);
            run(reader, stdout.lock())
        }
    }
}

/// Process batches until EOF or the first empty line. One input line is one
/// batch; a line that fails to decode is skipped, never fatal.
fn run<R: BufRead, W: Write>(reader: R, mut writer: W) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let operations = match ops::read_batch(&line) {
            Ok(operations) => operations,
            Err(e) => {
                log::warn!("skipping undecodable batch: {}", e);
                continue;
            }
        };

        let results = calculate_taxes(&operations);
        writeln!(writer, "{}", ops::write_batch(&results)?)?;
    }
    Ok(())
}
