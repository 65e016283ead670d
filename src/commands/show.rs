use crate::areas::document::DocumentSource;
use crate::areas::session::Session;
use colored::Colorize;
use std::io::Write;

impl<D: DocumentSource> Session<D> {
    /// Write the change preview for `target`: what reverting the current
    /// state to it would touch.
    pub fn show(&mut self, target: u64) -> anyhow::Result<()> {
        let lines = self.change_preview(target)?;

        // the body always carries context lines; only markers mean change
        let changed = lines
            .iter()
            .skip(2)
            .any(|line| line.starts_with(['-', '+']));
        if !changed {
            writeln!(
                self.writer(),
                "No difference between the current state and state {target}!"
            )?;
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
