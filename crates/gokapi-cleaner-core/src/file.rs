use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a Gokapi `/files/list` response.
///
/// Only `Id`, `Name` and `ExpireAt` drive the sweep. The rest of the
/// payload (download counters, flags, content type) is kept in `extra`
/// so a record can be logged or re-serialized without losing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub expire_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, expire_at: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            expire_at,
            expire_at_string: None,
            size: None,
            extra: Map::new(),
        }
    }

    /// Human-readable expiry for log lines, falling back to the raw timestamp.
    pub fn expiry_label(&self) -> String {
        match &self.expire_at_string {
            Some(s) => format!("{s} // {}", self.expire_at),
            None => self.expire_at.to_string(),
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expire_at < now
    }
}
