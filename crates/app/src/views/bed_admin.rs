//! Bed administration listing — every bed of every ward, paged.

use tokio_util::sync::CancellationToken;

use bedmgmt_domain::bed::BedWithLocation;
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::{BedId, LocationId};
use bedmgmt_domain::pagination::{PAGE_SIZES, Page, paginate};

use super::LoadState;
use crate::ports::BedBackend;
use crate::services::bed_type_loader::{BedTypeLoader, BedTypes};
use crate::services::ward_bed_service::WardBedService;

/// Heading of the listing card.
pub const TITLE: &str = "Ward Allocation";

/// Shown in the occupation status column. Occupation is not derived from
/// bed state yet.
pub const OCCUPATION_STATUS_PLACEHOLDER: &str = "--";

/// Entries of a row's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Allocate,
    Edit,
}

impl RowAction {
    pub const ALL: [Self; 2] = [Self::Allocate, Self::Edit];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Allocate => "Allocate",
            Self::Edit => "Edit",
        }
    }

    /// Row actions have no behavior wired yet; menus render them disabled.
    #[must_use]
    pub fn is_implemented(self) -> bool {
        false
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedRow {
    pub id: BedId,
    pub bed_number: String,
    pub location_id: LocationId,
    pub location: String,
    pub occupation_status: &'static str,
    pub current_status: String,
    pub actions: [RowAction; 2],
}

impl From<&BedWithLocation> for BedRow {
    fn from(record: &BedWithLocation) -> Self {
        Self {
            id: record.bed.uuid,
            bed_number: record.bed.bed_number.clone(),
            location_id: record.location.uuid,
            location: record.location.display.clone(),
            occupation_status: OCCUPATION_STATUS_PLACEHOLDER,
            current_status: record.bed.status.clone(),
            actions: RowAction::ALL,
        }
    }
}

/// The populated listing: current page plus the page sizes on offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedTable {
    pub page: Page<BedRow>,
    pub page_sizes: Vec<usize>,
}

/// What the listing screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BedAdministrationView {
    Skeleton,
    Error { message: String },
    Empty,
    Table(BedTable),
}

/// Per-view state of the listing screen.
#[derive(Debug)]
pub struct BedListing {
    beds: LoadState<Vec<BedWithLocation>>,
    bed_types: BedTypes,
    page_size: usize,
    page: usize,
    cancel: CancellationToken,
}

impl BedListing {
    /// A listing that has not fetched anything yet.
    #[must_use]
    pub fn new(page_size: usize, page: usize, cancel: CancellationToken) -> Self {
        Self {
            beds: LoadState::Loading,
            bed_types: BedTypes::loading(),
            page_size,
            page,
            cancel,
        }
    }

    /// Whether results may still be applied.
    #[must_use]
    fn is_live(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Record the outcome of a ward bed fetch. Returns `false` (and leaves
    /// the state untouched) when the view was dismissed or the fetch was
    /// cancelled.
    pub fn apply_beds(&mut self, result: Result<Vec<BedWithLocation>, BedMgmtError>) -> bool {
        if !self.is_live() || matches!(result, Err(BedMgmtError::Cancelled)) {
            return false;
        }
        self.beds = result.into();
        true
    }

    /// Record loaded bed types, unless the view was dismissed.
    pub fn apply_bed_types(&mut self, bed_types: BedTypes) -> bool {
        if !self.is_live() {
            return false;
        }
        self.bed_types = bed_types;
        true
    }

    /// Fetch ward beds and bed types concurrently and apply both.
    ///
    /// Returns whether the bed listing was applied.
    pub async fn refresh<B>(
        &mut self,
        wards: &WardBedService<B>,
        bed_types: &BedTypeLoader<B>,
    ) -> bool
    where
        B: BedBackend + Sync,
    {
        let (beds, loaded_types) =
            tokio::join!(wards.list_ward_beds(&self.cancel), bed_types.load());
        let applied = self.apply_beds(beds);
        self.apply_bed_types(loaded_types);
        applied
    }

    /// Bed types loaded alongside the listing, for the add-bed form.
    #[must_use]
    pub fn bed_types(&self) -> &BedTypes {
        &self.bed_types
    }

    /// Render state: skeleton while anything is loading, then error, empty
    /// or the current page.
    #[must_use]
    pub fn view(&self) -> BedAdministrationView {
        if self.bed_types.is_loading {
            return BedAdministrationView::Skeleton;
        }
        match &self.beds {
            LoadState::Loading => BedAdministrationView::Skeleton,
            LoadState::Failed(err) => BedAdministrationView::Error {
                message: err.to_string(),
            },
            LoadState::Ready(beds) if beds.is_empty() => BedAdministrationView::Empty,
            LoadState::Ready(beds) => {
                let page = paginate(beds.iter().collect(), self.page_size, self.page)
                    .map(BedRow::from);
                BedAdministrationView::Table(BedTable {
                    page,
                    page_sizes: PAGE_SIZES.to_vec(),
                })
            }
        }
    }
}
