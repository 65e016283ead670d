use crate::areas::document::DocumentSource;
use crate::areas::session::Session;
use std::io::Write;

impl<D: DocumentSource> Session<D> {
    /// Write the full ASCII graph, newest state first.
    pub fn graph(&mut self, verbose: bool) -> anyhow::Result<()> {
        let block = self.render_graph(verbose)?;
        writeln!(self.writer(), "{block}")?;

        Ok(())
    }
}
