//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod beds;
#[allow(clippy::missing_errors_doc)]
pub mod wards;

use axum::Router;
use axum::response::Redirect;
use axum::routing::{get, post};
use serde::Deserialize;

use bedmgmt_app::ports::BedBackend;
use bedmgmt_app::views::bed_form::SelectOption;
use bedmgmt_domain::pagination::Page;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: BedBackend + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/beds", get(beds::list::<B>).post(beds::create::<B>))
        .route("/beds/{id}", post(beds::update::<B>))
        .route("/beds/{id}/edit", get(beds::edit::<B>))
        .route("/wards/{location}", get(wards::detail::<B>))
}

/// `GET /` — the bed listing is the landing page.
async fn home() -> Redirect {
    Redirect::to("/beds")
}

/// Paging parameters shared by every listing page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    /// `add` opens the add-bed modal on the bed listing.
    pub modal: Option<String>,
}

/// What the table area of a listing page shows.
pub enum Panel<R> {
    Skeleton,
    Error(String),
    Empty,
    Table(Table<R>),
}

/// Rows of the current page with their pagination footer.
pub struct Table<R> {
    pub rows: Vec<R>,
    pub pager: Pager,
}

impl<R> Table<R> {
    fn new(base: &str, page: Page<R>, page_sizes: &[usize]) -> Self {
        let pager = Pager::new(base, &page, page_sizes);
        Self {
            rows: page.items,
            pager,
        }
    }
}

/// A numbered link in the pagination footer.
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

/// Pagination footer: previous/next, page numbers, page-size choices and
/// the item range on display.
pub struct Pager {
    pub base: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub first_item: usize,
    pub last_item: usize,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub pages: Vec<PageLink>,
    pub page_sizes: Vec<SelectOption>,
}

impl Pager {
    fn new<T>(base: &str, page: &Page<T>, page_sizes: &[usize]) -> Self {
        let href = |number: usize| format!("{base}?page={number}&page_size={}", page.page_size);
        let first_item = if page.items.is_empty() {
            0
        } else {
            (page.current_page - 1) * page.page_size + 1
        };
        let current = page.page_size.to_string();

        Self {
            base: base.to_string(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            first_item,
            last_item: (first_item + page.items.len()).saturating_sub(1),
            previous: page.has_previous().then(|| href(page.current_page - 1)),
            next: page.has_next().then(|| href(page.current_page + 1)),
            pages: (1..=page.total_pages)
                .map(|number| PageLink {
                    number,
                    href: href(number),
                    current: number == page.current_page,
                })
                .collect(),
            page_sizes: page_sizes
                .iter()
                .map(|size| {
                    let value = size.to_string();
                    SelectOption {
                        selected: value == current,
                        label: value.clone(),
                        value,
                    }
                })
                .collect(),
        }
    }
}
