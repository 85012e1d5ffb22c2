//! Ward detail — the beds of a single ward, paged.

use tokio_util::sync::CancellationToken;

use bedmgmt_domain::bed::Bed;
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::LocationId;
use bedmgmt_domain::pagination::{PAGE_SIZES, Page, paginate};

use super::LoadState;
use crate::ports::BedBackend;
use crate::services::ward_bed_service::WardBedService;

/// Header text when the ward's name cannot be resolved.
pub const UNKNOWN_WARD: &str = "--";

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardBedRow {
    pub id: String,
    pub number: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

impl From<&Bed> for WardBedRow {
    fn from(bed: &Bed) -> Self {
        let bed_type = bed.bed_type.as_ref();
        Self {
            id: bed.id.map_or_else(|| bed.uuid.to_string(), |id| id.to_string()),
            number: bed.bed_number.clone(),
            name: bed_type.map(|t| t.label().to_string()).unwrap_or_default(),
            description: bed_type
                .and_then(|t| t.description.clone())
                .unwrap_or_default(),
            status: bed.status.clone(),
        }
    }
}

/// What the table area of the ward screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WardTable {
    Skeleton,
    Error { message: String },
    Empty,
    Rows(Page<WardBedRow>),
}

/// Everything the ward screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardView {
    pub location: LocationId,
    pub title: String,
    pub table: WardTable,
    pub page_sizes: Vec<usize>,
}

/// Per-view state of the ward screen.
#[derive(Debug)]
pub struct WardBeds {
    location: LocationId,
    name: Option<String>,
    beds: LoadState<Vec<Bed>>,
    page_size: usize,
    page: usize,
    cancel: CancellationToken,
}

impl WardBeds {
    /// A ward view that has not fetched anything yet.
    #[must_use]
    pub fn new(location: LocationId, page_size: usize, page: usize, cancel: CancellationToken) -> Self {
        Self {
            location,
            name: None,
            beds: LoadState::Loading,
            page_size,
            page,
            cancel,
        }
    }

    /// Fetch the ward's beds and name concurrently and apply them unless
    /// the view was dismissed meanwhile. Returns whether anything was
    /// applied.
    pub async fn refresh<B>(&mut self, wards: &WardBedService<B>) -> bool
    where
        B: BedBackend + Sync,
    {
        let location = self.location;
        let fetch = async move {
            tokio::join!(
                wards.beds_for_ward(location),
                wards.location_name(location)
            )
        };
        let settled = tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            settled = fetch => Some(settled),
        };

        match settled {
            Some((beds, name)) if !self.cancel.is_cancelled() => {
                self.apply(beds, name);
                true
            }
            _ => {
                tracing::debug!(location = %self.location, "ward view dismissed before fetch settled");
                false
            }
        }
    }

    fn apply(&mut self, beds: Result<Vec<Bed>, BedMgmtError>, name: Option<String>) {
        self.beds = beds.into();
        self.name = name;
    }

    /// Header text: the ward's display name, or [`UNKNOWN_WARD`].
    #[must_use]
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_WARD)
    }

    #[must_use]
    pub fn view(&self) -> WardView {
        let table = match &self.beds {
            LoadState::Loading => WardTable::Skeleton,
            LoadState::Failed(err) => WardTable::Error {
                message: err.to_string(),
            },
            LoadState::Ready(beds) if beds.is_empty() => WardTable::Empty,
            LoadState::Ready(beds) => WardTable::Rows(
                paginate(beds.iter().collect(), self.page_size, self.page).map(WardBedRow::from),
            ),
        };

        WardView {
            location: self.location,
            title: self.title().to_string(),
            table,
            page_sizes: PAGE_SIZES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ward_bed_service::WardFailurePolicy;
    use crate::testing::InMemoryBackend;
    use bedmgmt_domain::bed_type::BedType;
    use bedmgmt_domain::id::{BedId, LocationTagId};

    fn service(backend: InMemoryBackend) -> WardBedService<InMemoryBackend> {
        WardBedService::new(backend, LocationTagId::new(), WardFailurePolicy::AbortAll)
    }

    #[test]
    fn should_prefer_numeric_id_and_bed_type_fields() {
        let mut bed = Bed::new(BedId::new(), "B-3", "AVAILABLE");
        bed.id = Some(3);
        let mut bed_type = BedType::new("ICU", "Intensive care");
        bed_type.description = Some("Monitored".to_string());
        bed.bed_type = Some(bed_type);

        let row = WardBedRow::from(&bed);

        assert_eq!(row.id, "3");
        assert_eq!(row.number, "B-3");
        assert_eq!(row.name, "Intensive care");
        assert_eq!(row.description, "Monitored");
        assert_eq!(row.status, "AVAILABLE");
    }

    #[test]
    fn should_fall_back_to_uuid_and_blank_type_columns() {
        let bed = Bed::new(BedId::new(), "B-4", "OCCUPIED");
        let row = WardBedRow::from(&bed);
        assert_eq!(row.id, bed.uuid.to_string());
        assert!(row.name.is_empty());
        assert!(row.description.is_empty());
    }

    #[tokio::test]
    async fn should_show_ward_name_and_rows_after_refresh() {
        let mut backend = InMemoryBackend::default();
        let ward = backend.add_ward("Ward A", 12);
        let svc = service(backend);

        let mut view = WardBeds::new(ward.uuid, 10, 2, CancellationToken::new());
        assert!(view.refresh(&svc).await);

        let rendered = view.view();
        assert_eq!(rendered.title, "Ward A");
        let WardTable::Rows(page) = rendered.table else {
            panic!("expected rows");
        };
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn should_show_placeholder_title_and_empty_state_for_unknown_location() {
        let svc = service(InMemoryBackend::default());

        let mut view = WardBeds::new(LocationId::new(), 10, 1, CancellationToken::new());
        view.refresh(&svc).await;

        let rendered = view.view();
        assert_eq!(rendered.title, "--");
        assert_eq!(rendered.table, WardTable::Empty);
    }

    #[tokio::test]
    async fn should_stay_in_skeleton_when_dismissed() {
        let mut backend = InMemoryBackend::default();
        let ward = backend.add_ward("Ward A", 1);
        let svc = service(backend);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut view = WardBeds::new(ward.uuid, 10, 1, cancel);
        assert!(!view.refresh(&svc).await);
        assert_eq!(view.view().table, WardTable::Skeleton);
    }
}
