//! Beds, the create/edit payload, and beds joined to their ward.

use serde::{Deserialize, Serialize};

use crate::bed_type::BedType;
use crate::id::{BedId, LocationId};
use crate::location::Location;

/// Status values the backend is known to use. Not enforced: any string the
/// backend returns is kept as-is.
pub const KNOWN_STATUSES: [&str; 2] = ["AVAILABLE", "OCCUPIED"];

/// An addressable physical bed as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub uuid: BedId,
    /// Numeric database id, when the backend exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub bed_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_type: Option<BedType>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub row: u32,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub column: u32,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_uuid: Option<LocationId>,
}

impl Bed {
    /// Create a bed with only the fields every listing needs.
    #[must_use]
    pub fn new(uuid: BedId, bed_number: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            uuid,
            id: None,
            bed_number: bed_number.into(),
            bed_type: None,
            row: 0,
            column: 0,
            status: status.into(),
            location_uuid: None,
        }
    }
}

/// Body of a create or edit request: the bed shape minus server-assigned
/// fields. Sent as-is, no client-side field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedPayload {
    pub bed_number: String,
    /// Name of the bed type.
    pub bed_type: String,
    pub row: u32,
    pub column: u32,
    pub status: String,
    pub location_uuid: LocationId,
}

impl BedPayload {
    /// Build a payload describing an existing bed, e.g. to prefill an edit
    /// form. Returns `None` when the bed carries no location.
    #[must_use]
    pub fn from_bed(bed: &Bed) -> Option<Self> {
        Some(Self {
            bed_number: bed.bed_number.clone(),
            bed_type: bed
                .bed_type
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            row: bed.row,
            column: bed.column,
            status: bed.status.clone(),
            location_uuid: bed.location_uuid?,
        })
    }
}

/// A bed with the ward it was fetched for. Only built by
/// [`aggregation`](crate::aggregation); never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedWithLocation {
    #[serde(flatten)]
    pub bed: Bed,
    pub location: Location,
}
