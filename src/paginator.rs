use tracing::debug;

use crate::{
    AppError,
    config::Config,
    page_size::PageSizeMenu,
    pagination::{PageToken, Pagination, Result, compute_pagination},
};

/// Caller-held pagination state for one table.
///
/// Holds the element count, the selected page size and the current page, and
/// keeps the current page within bounds as either of the others changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    menu: PageSizeMenu,
    total: usize,
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    /// Creates a paginator on the first page. `page_size` must be on `menu`.
    pub fn new(menu: PageSizeMenu, page_size: usize, total: usize) -> Result<Self> {
        let page_size = menu.validate(page_size)?;
        Ok(Self { menu, total, page_size, current_page: 0 })
    }

    /// Creates a paginator using the configured menu and default page size.
    pub fn from_config(config: &Config, total: usize) -> std::result::Result<Self, AppError> {
        Ok(Self::new(config.page_size_menu()?, config.default_page_size, total)?)
    }

    /// Number of elements being paginated.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Currently selected page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The menu page sizes are chosen from.
    pub fn menu(&self) -> &PageSizeMenu {
        &self.menu
    }

    /// `ceil(total / page_size)`.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Updates the element count, e.g. after a filter, and clamps the page.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        let clamped = self.current_page.min(self.last_page());
        if clamped != self.current_page {
            debug!(from = self.current_page, to = clamped, total, "Clamped current page.");
            self.current_page = clamped;
        }
    }

    /// Switches to another page size from the menu and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.page_size = self.menu.validate(page_size)?;
        self.current_page = 0;
        debug!(page_size, "Page size changed, reset to first page.");
        Ok(())
    }

    /// Moves to `page`, clamped to the last page. Returns the new page.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.current_page = page.min(self.last_page());
        debug!(requested = page, current = self.current_page, "Moved to page.");
        self.current_page
    }

    /// Advances one page. Returns false on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.last_page() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page. Returns false on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to the first page.
    pub fn first(&mut self) {
        self.current_page = 0;
    }

    /// Jumps to the last page.
    pub fn last(&mut self) {
        self.current_page = self.last_page();
    }

    /// Handles a click on a rendered token. Ellipses are not clickable.
    pub fn select(&mut self, token: PageToken) -> bool {
        match token {
            PageToken::Page(page) => {
                let before = self.current_page;
                self.go_to(page) != before
            }
            PageToken::Ellipsis => false,
        }
    }

    /// Runs the calculator on the current state.
    pub fn pagination(&self) -> Result<Pagination> {
        compute_pagination(self.total, self.page_size, self.current_page)
    }

    /// The part of `items` shown on the current page.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.current_page.saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}
