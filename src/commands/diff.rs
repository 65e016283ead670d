use crate::areas::document::DocumentSource;
use crate::areas::session::Session;
use colored::Colorize;
use std::io::Write;

impl<D: DocumentSource> Session<D> {
    /// Write the diff between two states: the full unified diff with the
    /// header lines emphasized, or the one-line summary.
    pub fn diff(&mut self, before: u64, after: u64, compact: bool) -> anyhow::Result<()> {
        let lines = self.diff_for(before, after, !compact)?;

        if compact {
            let summary = lines.first().map(String::as_str).unwrap_or_default();
            writeln!(self.writer(), "{summary}")?;
            return Ok(());
        }

        for (i, line) in lines.iter().enumerate() {
            if i < 2 {
                writeln!(self.writer(), "{}", line.bold())?;
            } else {
                writeln!(self.writer(), "{line}")?;
            }
        }

        Ok(())
    }
}
