//! The audit sink: an optional plaintext log of every generated
//! `(password, tail)` pair, written as `"<password> -> <tail_hex>\n"`.
//! Producing it is controlled entirely by the generator CLI; the core
//! engine only calls back into whatever `AuditSink` it is handed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rainbow_core::AuditSink;

pub struct AuditFile {
    writer: BufWriter<File>,
}

impl AuditFile {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("unable to open audit file at {}", path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl AuditSink for AuditFile {
    fn record(&mut self, password: &[u8], tail: &[u8]) {
        // Best-effort: a failed audit write must not abort generation.
        if let Err(e) = writeln!(
            self.writer,
            "{} -> {}",
            String::from_utf8_lossy(password),
            hex::encode(tail)
        ) {
            tracing::warn!(error = %e, "failed to write audit line");
        }
    }
}
