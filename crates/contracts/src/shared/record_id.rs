use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a backend-owned record.
///
/// The backend is not consistent about id types: consultants come back with
/// string ids while tier plans, limits and features use numbers. Both forms
/// are accepted on input and kept as text; output is always a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => RecordId(s),
            Raw::Int(n) => RecordId(n.to_string()),
            Raw::Unsigned(n) => RecordId(n.to_string()),
        })
    }
}

/// Field deserializer for free-form values the backend sends either as text
/// or as a number (limit values, display orders rendered as text).
pub fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id: Option<RecordId> = Option::deserialize(deserializer)?;
    Ok(id.map(|id| id.0).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_numeric_ids() {
        let text: RecordId = serde_json::from_str("\"c1\"").unwrap();
        let number: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(text.as_str(), "c1");
        assert_eq!(number.as_str(), "42");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::new("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn text_or_number_accepts_null() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "text_or_number", default)]
            value: String,
        }
        let row: Row = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(row.value, "");
        let row: Row = serde_json::from_str(r#"{"value":25}"#).unwrap();
        assert_eq!(row.value, "25");
    }
}
