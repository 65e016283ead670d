use serde::{Deserialize, Deserializer};

/// One entry of the host's raw undo-tree description, as loosely shaped as
/// the host reports it: the timestamp may be a number or `false`, branch
/// continuations nest under `alt`, and the markers are plain flags. A
/// missing sequence number fails deserialization outright; everything else
/// is validated when the node set is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    pub seq: u64,
    #[serde(default, deserialize_with = "number_or_false")]
    pub time: Option<i64>,
    #[serde(default)]
    pub alt: Vec<RawEntry>,
    #[serde(default)]
    pub curhead: bool,
    #[serde(default)]
    pub save: bool,
}

impl RawEntry {
    /// A plain main-line entry with a timestamp.
    pub fn numbered(seq: u64, time: i64) -> Self {
        RawEntry {
            seq,
            time: Some(time),
            alt: Vec::new(),
            curhead: false,
            save: false,
        }
    }
}

/// Hosts report "no timestamp" as the literal `false`.
fn number_or_false<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimeField {
        Seconds(i64),
        Flag(bool),
    }

    match Option::<TimeField>::deserialize(deserializer)? {
        Some(TimeField::Seconds(ts)) => Ok(Some(ts)),
        Some(TimeField::Flag(_)) | None => Ok(None),
    }
}
