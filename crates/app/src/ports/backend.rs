//! Backend port — the remote bed-management service.

use std::future::Future;
use std::sync::Arc;

use bedmgmt_domain::bed::{Bed, BedPayload};
use bedmgmt_domain::bed_type::BedType;
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::{BedId, LocationId, LocationTagId};
use bedmgmt_domain::location::Location;

/// Read and write access to locations, beds and bed types held by the
/// remote service.
///
/// Implementations perform exactly one request per call; no caching, no
/// retries.
pub trait BedBackend {
    /// All locations carrying `tag`.
    fn list_locations_by_tag(
        &self,
        tag: LocationTagId,
    ) -> impl Future<Output = Result<Vec<Location>, BedMgmtError>> + Send;

    /// Every location, tagged or not.
    fn list_locations(&self) -> impl Future<Output = Result<Vec<Location>, BedMgmtError>> + Send;

    /// A single location, or `None` when the backend does not know it.
    fn get_location(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, BedMgmtError>> + Send;

    /// Beds assigned to the given location, in backend order.
    fn list_beds_for_location(
        &self,
        location: LocationId,
    ) -> impl Future<Output = Result<Vec<Bed>, BedMgmtError>> + Send;

    /// A single bed, or `None` when the backend does not know it.
    fn get_bed(&self, id: BedId) -> impl Future<Output = Result<Option<Bed>, BedMgmtError>> + Send;

    /// Raw bed types, possibly containing duplicate names.
    fn list_bed_types(&self) -> impl Future<Output = Result<Vec<BedType>, BedMgmtError>> + Send;

    /// Create a bed from `payload`.
    fn create_bed(
        &self,
        payload: BedPayload,
    ) -> impl Future<Output = Result<Bed, BedMgmtError>> + Send;

    /// Replace the fields of bed `id` with `payload`.
    fn edit_bed(
        &self,
        id: BedId,
        payload: BedPayload,
    ) -> impl Future<Output = Result<Bed, BedMgmtError>> + Send;
}

impl<T: BedBackend + Send + Sync> BedBackend for Arc<T> {
    fn list_locations_by_tag(
        &self,
        tag: LocationTagId,
    ) -> impl Future<Output = Result<Vec<Location>, BedMgmtError>> + Send {
        (**self).list_locations_by_tag(tag)
    }

    fn list_locations(&self) -> impl Future<Output = Result<Vec<Location>, BedMgmtError>> + Send {
        (**self).list_locations()
    }

    fn get_location(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, BedMgmtError>> + Send {
        (**self).get_location(id)
    }

    fn list_beds_for_location(
        &self,
        location: LocationId,
    ) -> impl Future<Output = Result<Vec<Bed>, BedMgmtError>> + Send {
        (**self).list_beds_for_location(location)
    }

    fn get_bed(&self, id: BedId) -> impl Future<Output = Result<Option<Bed>, BedMgmtError>> + Send {
        (**self).get_bed(id)
    }

    fn list_bed_types(&self) -> impl Future<Output = Result<Vec<BedType>, BedMgmtError>> + Send {
        (**self).list_bed_types()
    }

    fn create_bed(
        &self,
        payload: BedPayload,
    ) -> impl Future<Output = Result<Bed, BedMgmtError>> + Send {
        (**self).create_bed(payload)
    }

    fn edit_bed(
        &self,
        id: BedId,
        payload: BedPayload,
    ) -> impl Future<Output = Result<Bed, BedMgmtError>> + Send {
        (**self).edit_bed(id, payload)
    }
}
