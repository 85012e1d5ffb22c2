//! Ward bed service — wards, their beds, and the flat bed listing.
//!
//! The listing fetches every ward's beds concurrently and only looks at the
//! results once all of them have settled. What happens to a ward whose
//! fetch failed is decided by [`WardFailurePolicy`].

use futures::future::join_all;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use bedmgmt_domain::aggregation;
use bedmgmt_domain::bed::{Bed, BedWithLocation};
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::{LocationId, LocationTagId};
use bedmgmt_domain::location::Location;

use crate::ports::BedBackend;

/// How the listing treats a ward whose bed fetch failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WardFailurePolicy {
    /// The first failing ward (in ward order) fails the whole listing.
    #[default]
    AbortAll,
    /// Failing wards are logged and left out; the others are listed.
    SkipFailed,
}

/// Application service for ward-centric queries.
pub struct WardBedService<B> {
    backend: B,
    ward_tag: LocationTagId,
    failure_policy: WardFailurePolicy,
}

impl<B: BedBackend + Sync> WardBedService<B> {
    /// Create a new service; wards are the locations tagged `ward_tag`.
    pub fn new(backend: B, ward_tag: LocationTagId, failure_policy: WardFailurePolicy) -> Self {
        Self {
            backend,
            ward_tag,
            failure_policy,
        }
    }

    /// All locations carrying the ward tag.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn list_wards(&self) -> Result<Vec<Location>, BedMgmtError> {
        self.backend.list_locations_by_tag(self.ward_tag).await
    }

    /// Every bed of every ward, each carrying its ward.
    ///
    /// Wards without beds are left out. Returns [`BedMgmtError::Cancelled`]
    /// as soon as `cancel` fires, and also when it fired while the last
    /// fetch was settling, so a caller never applies results it no longer
    /// wants.
    ///
    /// # Errors
    ///
    /// Returns the ward fetch error, the first per-ward bed fetch error
    /// under [`WardFailurePolicy::AbortAll`], or `Cancelled`.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn list_ward_beds(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<BedWithLocation>, BedMgmtError> {
        let listing = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("ward bed listing cancelled while in flight");
                return Err(BedMgmtError::Cancelled);
            }
            listing = self.aggregate() => listing?,
        };

        if cancel.is_cancelled() {
            return Err(BedMgmtError::Cancelled);
        }
        tracing::debug!(beds = listing.len(), "ward bed listing ready");
        Ok(listing)
    }

    /// Beds of a single location, in backend order.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn beds_for_ward(&self, location: LocationId) -> Result<Vec<Bed>, BedMgmtError> {
        self.backend.list_beds_for_location(location).await
    }

    /// Display name of a location, `None` when it cannot be resolved.
    pub async fn location_name(&self, location: LocationId) -> Option<String> {
        match self.backend.get_location(location).await {
            Ok(found) => found.map(|l| l.display),
            Err(err) => {
                tracing::warn!(location = %location, error = %err, "failed to resolve location name");
                None
            }
        }
    }

    async fn aggregate(&self) -> Result<Vec<BedWithLocation>, BedMgmtError> {
        let wards = self.list_wards().await?;
        let fetches = wards
            .iter()
            .map(|ward| self.backend.list_beds_for_location(ward.uuid));
        let settled = join_all(fetches).await;

        let mut groups = Vec::with_capacity(wards.len());
        for (ward, result) in wards.into_iter().zip(settled) {
            match result {
                Ok(beds) => {
                    tracing::trace!(ward = %ward.uuid, beds = beds.len(), "fetched ward beds");
                    groups.push((ward, beds));
                }
                Err(err) => match self.failure_policy {
                    WardFailurePolicy::AbortAll => return Err(err),
                    WardFailurePolicy::SkipFailed => {
                        tracing::warn!(ward = %ward.uuid, error = %err, "skipping ward whose beds could not be fetched");
                    }
                },
            }
        }

        Ok(aggregation::aggregate(groups))
    }
}
