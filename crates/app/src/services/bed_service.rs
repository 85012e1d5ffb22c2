//! Bed service — create, edit and look up single beds.
//!
//! Mutations submit the payload as-is. Callers refetch listings after a
//! successful mutation; nothing is invalidated here.

use bedmgmt_domain::bed::{Bed, BedPayload};
use bedmgmt_domain::error::{BedMgmtError, NotFoundError};
use bedmgmt_domain::id::BedId;
use bedmgmt_domain::location::Location;

use crate::ports::BedBackend;

/// Whether a form submission creates a new bed or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(BedId),
}

/// Application service for bed mutations.
pub struct BedService<B> {
    backend: B,
}

impl<B: BedBackend> BedService<B> {
    /// Create a new service backed by the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Create a bed.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    #[tracing::instrument(skip(self, payload), fields(bed_number = %payload.bed_number))]
    pub async fn create_bed(&self, payload: BedPayload) -> Result<Bed, BedMgmtError> {
        let bed = self.backend.create_bed(payload).await?;
        tracing::info!(bed = %bed.uuid, "bed created");
        Ok(bed)
    }

    /// Edit bed `id`.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    #[tracing::instrument(skip(self, payload), fields(bed_number = %payload.bed_number))]
    pub async fn edit_bed(&self, id: BedId, payload: BedPayload) -> Result<Bed, BedMgmtError> {
        let bed = self.backend.edit_bed(id, payload).await?;
        tracing::info!(bed = %bed.uuid, "bed updated");
        Ok(bed)
    }

    /// Dispatch a form submission to [`create_bed`](Self::create_bed) or
    /// [`edit_bed`](Self::edit_bed).
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn submit(&self, mode: FormMode, payload: BedPayload) -> Result<Bed, BedMgmtError> {
        match mode {
            FormMode::Create => self.create_bed(payload).await,
            FormMode::Edit(id) => self.edit_bed(id, payload).await,
        }
    }

    /// Look up a bed by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BedMgmtError::NotFound`] when the backend does not know
    /// `id`, or the backend error.
    #[tracing::instrument(skip(self))]
    pub async fn get_bed(&self, id: BedId) -> Result<Bed, BedMgmtError> {
        self.backend.get_bed(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Bed",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Every location a bed can be assigned to.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn list_locations(&self) -> Result<Vec<Location>, BedMgmtError> {
        self.backend.list_locations().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryBackend;
    use bedmgmt_domain::id::LocationId;

    fn payload(location: LocationId) -> BedPayload {
        BedPayload {
            bed_number: "B-101".to_string(),
            bed_type: "ICU".to_string(),
            row: 1,
            column: 2,
            status: "AVAILABLE".to_string(),
            location_uuid: location,
        }
    }

    #[tokio::test]
    async fn should_submit_create_payload_unchanged() {
        let svc = BedService::new(InMemoryBackend::default());
        let location = LocationId::new();

        let bed = svc
            .submit(FormMode::Create, payload(location))
            .await
            .unwrap();

        assert_eq!(bed.bed_number, "B-101");
        let created = svc.backend.created.lock().unwrap();
        assert_eq!(created.as_slice(), &[payload(location)]);
        assert!(svc.backend.edited.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_submit_edit_to_given_bed() {
        let svc = BedService::new(InMemoryBackend::default());
        let id = BedId::new();
        let location = LocationId::new();

        let bed = svc
            .submit(FormMode::Edit(id), payload(location))
            .await
            .unwrap();

        assert_eq!(bed.uuid, id);
        let edited = svc.backend.edited.lock().unwrap();
        assert_eq!(edited.as_slice(), &[(id, payload(location))]);
        assert!(svc.backend.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_backend_error_when_mutation_fails() {
        let svc = BedService::new(InMemoryBackend {
            fail_mutations: true,
            ..InMemoryBackend::default()
        });

        let result = svc.create_bed(payload(LocationId::new())).await;
        assert!(matches!(result, Err(BedMgmtError::Backend(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_bed_missing() {
        let svc = BedService::new(InMemoryBackend::default());
        let result = svc.get_bed(BedId::new()).await;
        assert!(matches!(result, Err(BedMgmtError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_find_existing_bed() {
        let mut backend = InMemoryBackend::default();
        let ward = backend.add_ward("Ward A", 1);
        let existing = backend.beds[&ward.uuid][0].clone();
        let svc = BedService::new(backend);

        let bed = svc.get_bed(existing.uuid).await.unwrap();
        assert_eq!(bed, existing);
    }
}
