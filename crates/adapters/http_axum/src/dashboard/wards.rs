//! Dashboard page for a single ward.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};

use bedmgmt_app::ports::BedBackend;
use bedmgmt_app::views::ward::{WardBedRow, WardBeds, WardTable};
use bedmgmt_domain::id::LocationId;

use super::{PageQuery, Panel, Table};
use crate::error::DashboardError;
use crate::state::AppState;

/// Ward detail page template.
#[derive(Template)]
#[template(path = "ward_beds.html")]
pub struct WardTemplate {
    title: String,
    panel: Panel<WardBedRow>,
}

impl IntoResponse for WardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /wards/:location` — the beds of one ward, paged.
pub async fn detail<B>(
    State(state): State<AppState<B>>,
    Path(location): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<WardTemplate, DashboardError>
where
    B: BedBackend + Send + Sync + 'static,
{
    let location = LocationId::parse(&location)?;
    let cancel = state.shutdown.child_token();
    let _guard = cancel.clone().drop_guard();

    let mut ward = WardBeds::new(
        location,
        query.page_size.unwrap_or(state.default_page_size),
        query.page.unwrap_or(1),
        cancel,
    );
    ward.refresh(&state.ward_bed_service).await;

    let view = ward.view();
    let panel = match view.table {
        WardTable::Skeleton => Panel::Skeleton,
        WardTable::Error { message } => Panel::Error(message),
        WardTable::Empty => Panel::Empty,
        WardTable::Rows(page) => Panel::Table(Table::new(
            &format!("/wards/{location}"),
            page,
            &view.page_sizes,
        )),
    };

    Ok(WardTemplate {
        title: view.title,
        panel,
    })
}
