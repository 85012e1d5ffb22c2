//! Bed types and their client-side de-duplication.

use serde::{Deserialize, Serialize};

/// A category of bed (e.g. ICU, pediatric).
///
/// The backend does not guarantee unique names, see [`dedup_by_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BedType {
    /// Create a bed type with the given name and display name.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            uuid: None,
            name: name.into(),
            display_name: display_name.into(),
            description: None,
        }
    }

    /// Label shown to users; falls back to `name` when the backend sent no
    /// display name.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

/// Keep the first bed type for every distinct `name`, preserving order.
#[must_use]
pub fn dedup_by_name(raw: Vec<BedType>) -> Vec<BedType> {
    let mut unique: Vec<BedType> = Vec::with_capacity(raw.len());
    for bed_type in raw {
        if !unique.iter().any(|seen| seen.name == bed_type.name) {
            unique.push(bed_type);
        }
    }
    unique
}
