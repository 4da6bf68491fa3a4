//! Hybrid text/metadata list elements.
//!
//! Accomplishment and action-item entries are stored as plain strings
//! until the user attaches project/milestone metadata, at which point the
//! stored value becomes a JSON object string `{"text":..,"project":..,
//! "milestone":..}`. Internally the two cases are a proper tagged variant;
//! the stringly legacy encoding only exists in the serde impls at the
//! persistence boundary.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextItem {
    Plain(String),
    Structured {
        text: String,
        project: String,
        milestone: String,
    },
}

/// Persisted object form. Field order is the canonical key order of the
/// stored JSON; keep it stable for diffability.
#[derive(Debug, Serialize, Deserialize)]
struct StructuredPayload {
    #[serde(default)]
    text: String,
    #[serde(default)]
    project: String,
    #[serde(default)]
    milestone: String,
}

impl TextItem {
    /// Builds an item from its parts, collapsing back to a bare string
    /// when no metadata is attached so plain entries never get wrapped.
    pub fn from_parts(
        text: impl Into<String>,
        project: impl Into<String>,
        milestone: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let project = project.into();
        let milestone = milestone.into();
        if project.is_empty() && milestone.is_empty() {
            TextItem::Plain(text)
        } else {
            TextItem::Structured {
                text,
                project,
                milestone,
            }
        }
    }

    /// Interprets a stored value. A string is only treated as structured
    /// when it is brace-bounded and parses as a JSON object; anything else
    /// is opaque plain text. A brace-bounded string that fails to parse is
    /// kept as plain text and logged.
    pub fn decode(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            match serde_json::from_str::<StructuredPayload>(trimmed) {
                Ok(payload) => {
                    return TextItem::from_parts(payload.text, payload.project, payload.milestone);
                }
                Err(err) => {
                    warn!(target: "app::codec", error = %err, "brace-bounded entry is not valid JSON, keeping as plain text");
                }
            }
        }
        TextItem::Plain(raw.to_string())
    }

    /// Produces the stored form: the bare text for plain items, the JSON
    /// object string otherwise. `encode` never wraps a plain item.
    pub fn encode(&self) -> String {
        match self {
            TextItem::Plain(text) => text.clone(),
            TextItem::Structured {
                text,
                project,
                milestone,
            } => {
                let payload = StructuredPayload {
                    text: text.clone(),
                    project: project.clone(),
                    milestone: milestone.clone(),
                };
                // Serializing a plain struct cannot fail.
                serde_json::to_string(&payload).unwrap_or_else(|_| text.clone())
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TextItem::Plain(text) => text,
            TextItem::Structured { text, .. } => text,
        }
    }

    pub fn project(&self) -> &str {
        match self {
            TextItem::Plain(_) => "",
            TextItem::Structured { project, .. } => project,
        }
    }

    pub fn milestone(&self) -> &str {
        match self {
            TextItem::Plain(_) => "",
            TextItem::Structured { milestone, .. } => milestone,
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        match self {
            TextItem::Plain(text) => *text = value.into(),
            TextItem::Structured { text, .. } => *text = value.into(),
        }
    }

    /// Attaches or clears metadata, normalizing the variant as needed.
    pub fn set_metadata(&mut self, project: impl Into<String>, milestone: impl Into<String>) {
        *self = TextItem::from_parts(self.text().to_string(), project, milestone);
    }

    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }
}

impl Default for TextItem {
    fn default() -> Self {
        TextItem::Plain(String::new())
    }
}

impl Serialize for TextItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for TextItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TextItem::decode(&raw))
    }
}
