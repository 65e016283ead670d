use crate::artifacts::history::RawEntry;
use crate::error::RundoError;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// The host side of the boundary: whoever tracks the live document.
///
/// The session only ever reads through this trait. `identity` and
/// `seq_last` together decide cache validity; `snapshot` must be able to
/// materialize any historical state on demand (results are cached by the
/// session, never here).
pub trait DocumentSource {
    /// Stable identity of the tracked document (a path, a buffer name).
    fn identity(&self) -> &str;

    /// Highest sequence number the history has ever reached.
    fn seq_last(&self) -> u64;

    /// The host's own notion of the current state, used when no node
    /// carries the curhead marker.
    fn seq_cur(&self) -> u64;

    /// The raw, nested history description.
    fn entries(&self) -> &[RawEntry];

    /// The full text of one historical state, as lines.
    fn snapshot(&self, n: u64) -> anyhow::Result<Vec<String>>;
}

/// A history document loaded from a JSON file: the nested entries plus a
/// snapshot of every state's text. This is what the CLI feeds the session;
/// an editor host would implement [`DocumentSource`] directly instead.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    document: String,
    seq_last: u64,
    #[serde(default)]
    seq_cur: u64,
    #[serde(default)]
    entries: Vec<RawEntry>,
    #[serde(default)]
    snapshots: HashMap<u64, Vec<String>>,
}

impl JsonDocument {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read history document {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let document: JsonDocument =
            serde_json::from_str(raw).context("cannot parse history document")?;
        Ok(document)
    }
}

impl DocumentSource for JsonDocument {
    fn identity(&self) -> &str {
        &self.document
    }

    fn seq_last(&self) -> u64 {
        self.seq_last
    }

    fn seq_cur(&self) -> u64 {
        self.seq_cur
    }

    fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    fn snapshot(&self, n: u64) -> anyhow::Result<Vec<String>> {
        self.snapshots
            .get(&n)
            .cloned()
            .ok_or_else(|| RundoError::NotFound(n).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RundoError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const RAW: &str = r#"{
        "document": "notes.txt",
        "seq_last": 2,
        "seq_cur": 2,
        "entries": [
            {"seq": 1, "time": 100},
            {"seq": 2, "time": 200}
        ],
        "snapshots": {
            "0": ["hello"],
            "1": ["hello", "world"],
            "2": ["hello", "there"]
        }
    }"#;

    #[rstest]
    fn loads_a_document_from_json() {
        let document = JsonDocument::from_json(RAW).expect("document should parse");

        assert_eq!(document.identity(), "notes.txt");
        assert_eq!(document.seq_last(), 2);
        assert_eq!(document.entries().len(), 2);
        assert_eq!(
            document.snapshot(2).unwrap(),
            vec!["hello".to_string(), "there".to_string()]
        );
    }

    #[rstest]
    fn missing_snapshots_are_not_found() {
        let document = JsonDocument::from_json(RAW).expect("document should parse");

        let err = document.snapshot(9).expect_err("9 has no snapshot");
        assert_eq!(
            err.downcast_ref::<RundoError>(),
            Some(&RundoError::NotFound(9))
        );
    }
}
