//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use bedmgmt_app::ports::BedBackend;
use bedmgmt_app::services::bed_service::BedService;
use bedmgmt_app::services::bed_type_loader::BedTypeLoader;
use bedmgmt_app::services::ward_bed_service::WardBedService;
use bedmgmt_domain::pagination::DEFAULT_PAGE_SIZE;

/// Application state shared across all axum handlers.
///
/// Generic over the backend type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the backend itself does not need to be `Clone`;
/// only the `Arc` wrappers are cloned.
pub struct AppState<B> {
    /// Bed create/edit/lookup service.
    pub bed_service: Arc<BedService<B>>,
    /// De-duplicating bed type loader.
    pub bed_type_loader: Arc<BedTypeLoader<B>>,
    /// Ward listing and aggregation service.
    pub ward_bed_service: Arc<WardBedService<B>>,
    /// Cancelled when the server shuts down; every page render works on a
    /// child of this token.
    pub shutdown: CancellationToken,
    /// Page size used when a request does not pick one.
    pub default_page_size: usize,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            bed_service: Arc::clone(&self.bed_service),
            bed_type_loader: Arc::clone(&self.bed_type_loader),
            ward_bed_service: Arc::clone(&self.ward_bed_service),
            shutdown: self.shutdown.clone(),
            default_page_size: self.default_page_size,
        }
    }
}

impl<B> AppState<B>
where
    B: BedBackend + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        bed_service: BedService<B>,
        bed_type_loader: BedTypeLoader<B>,
        ward_bed_service: WardBedService<B>,
    ) -> Self {
        Self::from_arcs(
            Arc::new(bed_service),
            Arc::new(bed_type_loader),
            Arc::new(ward_bed_service),
        )
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    pub fn from_arcs(
        bed_service: Arc<BedService<B>>,
        bed_type_loader: Arc<BedTypeLoader<B>>,
        ward_bed_service: Arc<WardBedService<B>>,
    ) -> Self {
        Self {
            bed_service,
            bed_type_loader,
            ward_bed_service,
            shutdown: CancellationToken::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Tie page renders to the given shutdown token.
    #[must_use]
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Override the page size used when a request does not pick one.
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }
}
