//! Client-side pagination over an in-memory list.
//!
//! Pages are 1-based. There is always at least one page, even for an empty
//! list, and every requested page is clamped into `[1, total_pages]`.

/// Page sizes offered to users.
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Slices a list into pages of `page_size` items.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Paginator<T> {
    /// Start on page 1. A `page_size` of 0 is treated as 1.
    #[must_use]
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Items on the current page.
    #[must_use]
    pub fn results(&self) -> &[T] {
        let (start, end) = self.bounds();
        self.items.get(start..end).unwrap_or(&[])
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// `ceil(total / page_size)`, never less than 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Move to `page`, clamped into `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Change the page size. The current page number is kept, clamped into
    /// the new page range.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.go_to(self.current_page);
    }

    /// Consume the paginator, keeping only the current page.
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        let (start, end) = self.bounds();
        let total_items = self.items.len();
        let total_pages = self.total_pages();
        let items = self
            .items
            .into_iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect();

        Page {
            items,
            current_page: self.current_page,
            total_pages,
            total_items,
            page_size: self.page_size,
        }
    }

    fn bounds(&self) -> (usize, usize) {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.items.len());
        (start.min(end), end)
    }
}

/// An owned snapshot of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Transform every item, keeping the page metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            page_size: self.page_size,
        }
    }
}

/// Build a page straight from a requested page number and size.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page_size: usize, page: usize) -> Page<T> {
    let mut paginator = Paginator::new(items, page_size);
    paginator.go_to(page);
    paginator.into_page()
}
