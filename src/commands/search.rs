use crate::areas::document::DocumentSource;
use crate::areas::session::Session;
use std::io::Write;

impl<D: DocumentSource> Session<D> {
    /// Find the first state near the current one whose change introduced
    /// or removed a line matching `pattern`, scanning older states by
    /// default and newer ones when `newer` is set.
    pub fn find(&mut self, pattern: &str, newer: bool) -> anyhow::Result<()> {
        let from = self.current()?;
        match self.search(pattern, from, newer)? {
            Some(state) => writeln!(self.writer(), "found match in state {state}")?,
            None => writeln!(self.writer(), "no state matches {pattern}")?,
        }

        Ok(())
    }
}
