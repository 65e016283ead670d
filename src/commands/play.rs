use crate::areas::document::DocumentSource;
use crate::areas::session::Session;
use crate::error::RundoError;
use std::io::Write;

impl<D: DocumentSource> Session<D> {
    /// Write the sequence of states a playback from the current state to
    /// `target` steps through. An unreachable target is reported, not an
    /// error: nothing has been mutated.
    pub fn play(&mut self, target: u64) -> anyhow::Result<()> {
        match self.play_path(target) {
            Ok(path) => {
                for state in path {
                    writeln!(self.writer(), "undo to {state}")?;
                }
                Ok(())
            }
            Err(err) => match err.downcast_ref::<RundoError>() {
                Some(RundoError::NoPath { .. }) => {
                    writeln!(self.writer(), "No path to that state from here!")?;
                    Ok(())
                }
                _ => Err(err),
            },
        }
    }
}
