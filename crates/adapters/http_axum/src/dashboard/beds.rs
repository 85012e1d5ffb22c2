//! Dashboard pages for the bed listing and the add/edit bed form.

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use bedmgmt_app::ports::BedBackend;
use bedmgmt_app::services::bed_service::FormMode;
use bedmgmt_app::services::bed_type_loader::BedTypes;
use bedmgmt_app::views::bed_admin::{BedAdministrationView, BedListing, BedRow, TITLE};
use bedmgmt_app::views::bed_form::{self, BedForm, BedFormValues};
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::BedId;
use bedmgmt_domain::location::Location;

use super::{PageQuery, Panel, Table};
use crate::error::{DashboardError, status_for};
use crate::state::AppState;

const LIST_PATH: &str = "/beds";

/// A bed form together with where it posts to.
pub struct Editor {
    pub form: BedForm,
    pub action: String,
}

/// Bed listing page template, optionally with the add-bed modal open.
#[derive(Template)]
#[template(path = "bed_list.html")]
pub struct BedListTemplate {
    title: &'static str,
    panel: Panel<BedRow>,
    modal: Option<Editor>,
}

impl IntoResponse for BedListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Standalone bed form page template.
#[derive(Template)]
#[template(path = "bed_form_page.html")]
pub struct BedFormTemplate {
    editor: Editor,
}

impl IntoResponse for BedFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

fn panel(view: BedAdministrationView) -> Panel<BedRow> {
    match view {
        BedAdministrationView::Skeleton => Panel::Skeleton,
        BedAdministrationView::Error { message } => Panel::Error(message),
        BedAdministrationView::Empty => Panel::Empty,
        BedAdministrationView::Table(table) => {
            Panel::Table(Table::new(LIST_PATH, table.page, &table.page_sizes))
        }
    }
}

fn action_for(mode: FormMode) -> String {
    match mode {
        FormMode::Create => LIST_PATH.to_string(),
        FormMode::Edit(id) => format!("{LIST_PATH}/{id}"),
    }
}

/// Load bed types and locations for the form selects.
async fn load_editor<B>(state: &AppState<B>, mode: FormMode, values: BedFormValues) -> Editor
where
    B: BedBackend + Send + Sync + 'static,
{
    let (bed_types, locations) = tokio::join!(
        state.bed_type_loader.load(),
        state.bed_service.list_locations()
    );
    editor(mode, values, &bed_types, locations)
}

/// The add-bed modal, reusing the bed types loaded with the listing.
async fn add_editor<B>(state: &AppState<B>, bed_types: &BedTypes) -> Editor
where
    B: BedBackend + Send + Sync + 'static,
{
    let locations = state.bed_service.list_locations().await;
    editor(FormMode::Create, BedFormValues::default(), bed_types, locations)
}

/// Load failures do not prevent rendering; they are shown on the form.
fn editor(
    mode: FormMode,
    values: BedFormValues,
    bed_types: &BedTypes,
    locations: Result<Vec<Location>, BedMgmtError>,
) -> Editor {
    let (locations, locations_error) = match locations {
        Ok(locations) => (locations, None),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load locations for bed form");
            (Vec::new(), Some(format!("Locations could not be loaded: {err}")))
        }
    };

    let mut form = BedForm::new(mode, values, &bed_types.bed_types, &locations);
    if let Some(err) = &bed_types.error {
        form = form.with_error(format!("Bed types could not be loaded: {err}"));
    } else if let Some(message) = locations_error {
        form = form.with_error(message);
    }

    Editor {
        form,
        action: action_for(mode),
    }
}

/// Re-render the form with the submitted values and why they were refused.
async fn rejected<B>(
    state: &AppState<B>,
    mode: FormMode,
    values: BedFormValues,
    err: &BedMgmtError,
) -> Response
where
    B: BedBackend + Send + Sync + 'static,
{
    tracing::warn!(error = %err, "bed form submission rejected");
    let status = match err {
        BedMgmtError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        other => status_for(other),
    };

    let mut editor = load_editor(state, mode, values).await;
    editor.form = editor.form.with_error(err.to_string());
    (status, BedFormTemplate { editor }).into_response()
}

/// `GET /beds` — every bed of every ward, paged; `?modal=add` opens the
/// add-bed form on top.
pub async fn list<B>(
    State(state): State<AppState<B>>,
    Query(query): Query<PageQuery>,
) -> BedListTemplate
where
    B: BedBackend + Send + Sync + 'static,
{
    let cancel = state.shutdown.child_token();
    let _guard = cancel.clone().drop_guard();

    let mut listing = BedListing::new(
        query.page_size.unwrap_or(state.default_page_size),
        query.page.unwrap_or(1),
        cancel,
    );
    listing
        .refresh(&state.ward_bed_service, &state.bed_type_loader)
        .await;

    let modal = if query.modal.as_deref() == Some("add") {
        Some(add_editor(&state, listing.bed_types()).await)
    } else {
        None
    };

    BedListTemplate {
        title: TITLE,
        panel: panel(listing.view()),
        modal,
    }
}

/// `POST /beds` — create a bed (PRG).
pub async fn create<B>(
    State(state): State<AppState<B>>,
    Form(values): Form<BedFormValues>,
) -> Response
where
    B: BedBackend + Send + Sync + 'static,
{
    match bed_form::submit(&state.bed_service, FormMode::Create, &values).await {
        Ok(_) => Redirect::to(LIST_PATH).into_response(),
        Err(err) => rejected(&state, FormMode::Create, values, &err).await,
    }
}

/// `GET /beds/:id/edit` — form prefilled with the bed's current fields.
pub async fn edit<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<BedFormTemplate, DashboardError>
where
    B: BedBackend + Send + Sync + 'static,
{
    let id = BedId::parse(&id)?;
    let bed = state.bed_service.get_bed(id).await?;

    let editor = load_editor(&state, FormMode::Edit(id), BedFormValues::from_bed(&bed)).await;
    Ok(BedFormTemplate { editor })
}

/// `POST /beds/:id` — edit a bed (PRG).
pub async fn update<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
    Form(values): Form<BedFormValues>,
) -> Result<Response, DashboardError>
where
    B: BedBackend + Send + Sync + 'static,
{
    let mode = FormMode::Edit(BedId::parse(&id)?);
    Ok(
        match bed_form::submit(&state.bed_service, mode, &values).await {
            Ok(_) => Redirect::to(LIST_PATH).into_response(),
            Err(err) => rejected(&state, mode, values, &err).await,
        },
    )
}
