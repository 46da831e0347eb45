use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the citation of a question
pub const REFERENCE_FIELD: &str = "biblicalReference";

/// Field holding the question identifier
pub const ID_FIELD: &str = "id";

/// One entry of the question bank.
///
/// The record is kept as raw JSON so that fields other than `biblicalReference` are
/// written back untouched and in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRecord(pub Value);

impl QuestionRecord {
    /// Identifier used in reports; `unknown` when missing
    #[must_use]
    pub fn id(&self) -> String {
        match self.0.get(ID_FIELD) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "unknown".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// The citation, if the record has a string `biblicalReference`
    #[must_use]
    pub fn biblical_reference(&self) -> Option<&str> {
        self.0.get(REFERENCE_FIELD).and_then(Value::as_str)
    }

    /// Replace the citation. Records that are not JSON objects are left alone.
    pub fn set_biblical_reference(&mut self, reference: impl Into<String>) {
        if let Value::Object(map) = &mut self.0 {
            map.insert(REFERENCE_FIELD.to_string(), Value::String(reference.into()));
        }
    }
}
