//! In-memory [`BedBackend`] shared by the unit tests of this crate.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use bedmgmt_domain::bed::{Bed, BedPayload};
use bedmgmt_domain::bed_type::BedType;
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::{BedId, LocationId, LocationTagId};
use bedmgmt_domain::location::{Location, LocationTag};

use crate::ports::BedBackend;

pub fn unavailable() -> BedMgmtError {
    BedMgmtError::Backend(Box::new(std::io::Error::other("backend unavailable")))
}

#[derive(Default)]
pub struct InMemoryBackend {
    pub ward_tag: Option<LocationTagId>,
    pub locations: Vec<Location>,
    pub beds: HashMap<LocationId, Vec<Bed>>,
    pub bed_types: Vec<BedType>,
    pub failing_locations: HashSet<LocationId>,
    pub fail_wards: bool,
    pub fail_bed_types: bool,
    pub fail_mutations: bool,
    pub hang_on_beds: bool,
    pub created: Mutex<Vec<BedPayload>>,
    pub edited: Mutex<Vec<(BedId, BedPayload)>>,
    pub bed_fetches: AtomicUsize,
}

impl InMemoryBackend {
    pub fn with_ward_tag(tag: LocationTagId) -> Self {
        Self {
            ward_tag: Some(tag),
            ..Self::default()
        }
    }

    /// Register a ward holding `bed_count` beds and return it.
    pub fn add_ward(&mut self, name: &str, bed_count: usize) -> Location {
        let mut ward = Location::new(LocationId::new(), name);
        if let Some(tag) = self.ward_tag {
            ward = ward.with_tag(LocationTag {
                uuid: tag,
                display: "Admission Location".to_string(),
            });
        }
        let beds = (1..=bed_count)
            .map(|i| {
                let mut bed = Bed::new(BedId::new(), format!("{name}-{i}"), "AVAILABLE");
                bed.location_uuid = Some(ward.uuid);
                bed
            })
            .collect();
        self.locations.push(ward.clone());
        self.beds.insert(ward.uuid, beds);
        ward
    }

    fn all_beds(&self) -> impl Iterator<Item = &Bed> {
        self.beds.values().flatten()
    }
}

impl BedBackend for InMemoryBackend {
    fn list_locations_by_tag(
        &self,
        tag: LocationTagId,
    ) -> impl Future<Output = Result<Vec<Location>, BedMgmtError>> + Send {
        let result = if self.fail_wards {
            Err(unavailable())
        } else {
            Ok(self
                .locations
                .iter()
                .filter(|l| l.has_tag(tag))
                .cloned()
                .collect())
        };
        async move { result }
    }

    fn list_locations(&self) -> impl Future<Output = Result<Vec<Location>, BedMgmtError>> + Send {
        let result = Ok(self.locations.clone());
        async move { result }
    }

    fn get_location(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, BedMgmtError>> + Send {
        let result = Ok(self.locations.iter().find(|l| l.uuid == id).cloned());
        async move { result }
    }

    fn list_beds_for_location(
        &self,
        location: LocationId,
    ) -> impl Future<Output = Result<Vec<Bed>, BedMgmtError>> + Send {
        self.bed_fetches.fetch_add(1, Ordering::SeqCst);
        let hang = self.hang_on_beds;
        let result = if self.failing_locations.contains(&location) {
            Err(unavailable())
        } else {
            Ok(self.beds.get(&location).cloned().unwrap_or_default())
        };
        async move {
            if hang {
                std::future::pending::<()>().await;
            }
            result
        }
    }

    fn get_bed(&self, id: BedId) -> impl Future<Output = Result<Option<Bed>, BedMgmtError>> + Send {
        let result = Ok(self.all_beds().find(|b| b.uuid == id).cloned());
        async move { result }
    }

    fn list_bed_types(&self) -> impl Future<Output = Result<Vec<BedType>, BedMgmtError>> + Send {
        let result = if self.fail_bed_types {
            Err(unavailable())
        } else {
            Ok(self.bed_types.clone())
        };
        async move { result }
    }

    fn create_bed(
        &self,
        payload: BedPayload,
    ) -> impl Future<Output = Result<Bed, BedMgmtError>> + Send {
        let result = if self.fail_mutations {
            Err(unavailable())
        } else {
            self.created.lock().unwrap().push(payload.clone());
            let mut bed = Bed::new(BedId::new(), payload.bed_number, payload.status);
            bed.location_uuid = Some(payload.location_uuid);
            Ok(bed)
        };
        async move { result }
    }

    fn edit_bed(
        &self,
        id: BedId,
        payload: BedPayload,
    ) -> impl Future<Output = Result<Bed, BedMgmtError>> + Send {
        let result = if self.fail_mutations {
            Err(unavailable())
        } else {
            self.edited.lock().unwrap().push((id, payload.clone()));
            let mut bed = Bed::new(id, payload.bed_number, payload.status);
            bed.location_uuid = Some(payload.location_uuid);
            Ok(bed)
        };
        async move { result }
    }
}
