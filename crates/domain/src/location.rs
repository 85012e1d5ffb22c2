//! Location — a physical place; wards are locations carrying the ward tag.

use serde::{Deserialize, Serialize};

use crate::id::{LocationId, LocationTagId};

/// A physical place known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub uuid: LocationId,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub tags: Vec<LocationTag>,
}

/// A label attached to a location (e.g. "Admission Location").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTag {
    pub uuid: LocationTagId,
    #[serde(default)]
    pub display: String,
}

impl Location {
    /// Create a location without tags.
    #[must_use]
    pub fn new(uuid: LocationId, display: impl Into<String>) -> Self {
        Self {
            uuid,
            display: display.into(),
            tags: Vec::new(),
        }
    }

    /// Attach a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: LocationTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Whether the location carries the given tag, i.e. is a ward when
    /// `tag` is the configured ward tag.
    #[must_use]
    pub fn has_tag(&self, tag: LocationTagId) -> bool {
        self.tags.iter().any(|t| t.uuid == tag)
    }
}
