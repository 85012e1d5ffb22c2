//! Stub backend and state builders for handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bedmgmt_app::ports::BedBackend;
use bedmgmt_app::services::bed_service::BedService;
use bedmgmt_app::services::bed_type_loader::BedTypeLoader;
use bedmgmt_app::services::ward_bed_service::{WardBedService, WardFailurePolicy};
use bedmgmt_domain::bed::{Bed, BedPayload};
use bedmgmt_domain::bed_type::BedType;
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::{BedId, LocationId, LocationTagId};
use bedmgmt_domain::location::Location;

use crate::state::AppState;

#[derive(Default)]
pub struct StubBackend {
    pub wards: Vec<Location>,
    pub beds: HashMap<LocationId, Vec<Bed>>,
    pub bed_types: Vec<BedType>,
    pub reject_mutations: bool,
    pub created: Mutex<Vec<BedPayload>>,
    pub edited: Mutex<Vec<(BedId, BedPayload)>>,
    pub bed_type_fetches: AtomicUsize,
}

fn rejected() -> BedMgmtError {
    BedMgmtError::Backend(Box::new(std::io::Error::other("bed number already taken")))
}

fn saved(payload: &BedPayload) -> Bed {
    let mut bed = Bed::new(BedId::new(), payload.bed_number.clone(), payload.status.clone());
    bed.location_uuid = Some(payload.location_uuid);
    bed
}

impl BedBackend for StubBackend {
    async fn list_locations_by_tag(
        &self,
        _tag: LocationTagId,
    ) -> Result<Vec<Location>, BedMgmtError> {
        Ok(self.wards.clone())
    }

    async fn list_locations(&self) -> Result<Vec<Location>, BedMgmtError> {
        Ok(self.wards.clone())
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, BedMgmtError> {
        Ok(self.wards.iter().find(|w| w.uuid == id).cloned())
    }

    async fn list_beds_for_location(
        &self,
        location: LocationId,
    ) -> Result<Vec<Bed>, BedMgmtError> {
        Ok(self.beds.get(&location).cloned().unwrap_or_default())
    }

    async fn get_bed(&self, id: BedId) -> Result<Option<Bed>, BedMgmtError> {
        Ok(self.beds.values().flatten().find(|b| b.uuid == id).cloned())
    }

    async fn list_bed_types(&self) -> Result<Vec<BedType>, BedMgmtError> {
        self.bed_type_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.bed_types.clone())
    }

    async fn create_bed(&self, payload: BedPayload) -> Result<Bed, BedMgmtError> {
        if self.reject_mutations {
            return Err(rejected());
        }
        let bed = saved(&payload);
        self.created.lock().unwrap().push(payload);
        Ok(bed)
    }

    async fn edit_bed(&self, id: BedId, payload: BedPayload) -> Result<Bed, BedMgmtError> {
        if self.reject_mutations {
            return Err(rejected());
        }
        let bed = saved(&payload);
        self.edited.lock().unwrap().push((id, payload));
        Ok(bed)
    }
}

/// A backend with one ward per `(name, bed_count)` pair and a single ICU bed
/// type.
pub fn backend_with_wards(wards: &[(&str, usize)]) -> StubBackend {
    let mut backend = StubBackend {
        bed_types: vec![
            BedType::new("ICU", "Intensive care"),
            BedType::new("ICU", "Intensive care (duplicate)"),
        ],
        ..StubBackend::default()
    };
    for (name, count) in wards {
        let ward = Location::new(LocationId::new(), *name);
        let beds = (1..=*count)
            .map(|i| {
                let mut bed = Bed::new(BedId::new(), format!("{name}-{i}"), "AVAILABLE");
                bed.location_uuid = Some(ward.uuid);
                bed
            })
            .collect();
        backend.beds.insert(ward.uuid, beds);
        backend.wards.push(ward);
    }
    backend
}

pub fn test_state(backend: StubBackend) -> AppState<Arc<StubBackend>> {
    test_state_shared(Arc::new(backend))
}

pub fn test_state_shared(backend: Arc<StubBackend>) -> AppState<Arc<StubBackend>> {
    AppState::new(
        BedService::new(Arc::clone(&backend)),
        BedTypeLoader::new(Arc::clone(&backend)),
        WardBedService::new(backend, LocationTagId::new(), WardFailurePolicy::AbortAll),
    )
}
