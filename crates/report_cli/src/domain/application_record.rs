use derive_getters::Getters;
use serde::Deserialize;
use serde_json::Value;

/// Rendered in place of a missing title, company or metadata value
pub const NULL_PLACEHOLDER: &str = "None";

/// One tailored job application as persisted by the career pipeline
///
/// Every field is optional on disk. Whether a field is required is decided
/// at render time, not while decoding. Title, company and metadata accept
/// any JSON value; the three text fields must be strings when present.
#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    title: Option<Value>,
    company: Option<Value>,
    reasoning: Option<String>,
    tailored_resume: Option<String>,
    cover_letter: Option<String>,
    id: Option<Value>,
    score: Option<Value>,
    status: Option<Value>,
    url: Option<Value>,
    created_at: Option<Value>,
}

impl ApplicationRecord {
    /// Decode a single record from an already-parsed JSON element
    pub fn from_json(value: &Value) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }

    /// Job title for display, `None` when absent
    pub fn title_or_placeholder(&self) -> String {
        display_value(self.title.as_ref())
    }

    /// Company name for display, `None` when absent
    pub fn company_or_placeholder(&self) -> String {
        display_value(self.company.as_ref())
    }

    /// Tailored resume text, empty when absent
    pub fn resume_text(&self) -> &str {
        self.tailored_resume.as_deref().unwrap_or_default()
    }

    /// Cover letter text, empty when absent
    pub fn cover_letter_text(&self) -> &str {
        self.cover_letter.as_deref().unwrap_or_default()
    }
}

/// Render an optional JSON metadata value for display
///
/// Strings are shown without quotes, other values in their JSON form.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NULL_PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
