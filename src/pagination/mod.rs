mod paginated;

use serde::Serialize;
use thiserror::Error;

pub use paginated::Paginated;

/// Number of pages shown on each side of the current page.
pub const SIBLING_COUNT: usize = 2;
/// Largest page count rendered without any ellipsis.
pub const MAX_PAGE_COUNT: usize = 2 * SIBLING_COUNT + 5;
/// Pages kept in a row next to the first or last page when only one side
/// collapses.
pub const SIDE_PAGE_COUNT: usize = 2 * SIBLING_COUNT + 3;

/// Errors raised by the calculator and the page-size menu.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// An input is outside its documented range.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl PaginationError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PaginationError::InvalidArgument { name, reason: reason.into() }
    }
}

/// Result alias for pagination operations.
pub type Result<T> = std::result::Result<T, PaginationError>;

/// A single entry in the rendered page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "index")]
pub enum PageToken {
    /// A zero-based page index.
    Page(usize),
    /// A collapsed run of at least two pages.
    Ellipsis,
}

/// Inclusive `[start, end]` element indices covered by one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    /// First element index.
    pub start: usize,
    /// Last element index, inclusive.
    pub end: usize,
}

impl VisibleRange {
    /// Number of elements in the range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Half-open form, suitable for slicing.
    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end + 1
    }
}

/// Result of a pagination computation.
///
/// Per-page ranges are derived on demand through [`Pagination::range_of`] and
/// [`Pagination::page_ranges`], so the size of this value does not grow with
/// the page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Number of elements in the whole collection.
    pub total_elements: usize,
    /// Elements per page.
    pub page_size: usize,
    /// `ceil(total_elements / page_size)`, zero for an empty collection.
    pub page_count: usize,
    /// The requested page after clamping to `[0, page_count - 1]`.
    pub current_page: usize,
    /// `None` when there are no elements.
    pub visible_range: Option<VisibleRange>,
    /// Page controls to render, see [`page_tokens`].
    pub tokens: Vec<PageToken>,
}

impl Pagination {
    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Index of the last page, if any.
    pub fn last_page(&self) -> Option<usize> {
        self.page_count.checked_sub(1)
    }

    /// True when a page follows the current one.
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.page_count
    }

    /// True when a page precedes the current one.
    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    /// Element range of `page`, or `None` past the last page.
    pub fn range_of(&self, page: usize) -> Option<VisibleRange> {
        range_of(self.total_elements, self.page_size, page)
    }

    /// Element ranges of every page, in order.
    pub fn page_ranges(&self) -> impl Iterator<Item = VisibleRange> + '_ {
        (0..self.page_count).filter_map(move |page| self.range_of(page))
    }
}

/// Validated calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of elements in the collection.
    pub total_elements: usize,
    /// Elements per page, always positive.
    pub page_size: usize,
    /// Requested page, not yet clamped.
    pub current_page: usize,
}

impl PageRequest {
    /// Builds a request from signed values, rejecting negatives and a
    /// non-positive page size.
    pub fn from_signed(total_elements: i64, page_size: i64, current_page: i64) -> Result<Self> {
        if page_size <= 0 {
            return Err(PaginationError::invalid(
                "page_size",
                format!("must be greater than 0, got {page_size}"),
            ));
        }

        Ok(Self {
            total_elements: non_negative("total_elements", total_elements)?,
            page_size: non_negative("page_size", page_size)?,
            current_page: non_negative("current_page", current_page)?,
        })
    }

    /// Runs [`compute_pagination`] on this request.
    pub fn compute(&self) -> Result<Pagination> {
        compute_pagination(self.total_elements, self.page_size, self.current_page)
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(PaginationError::invalid(name, format!("must not be negative, got {value}")));
    }
    usize::try_from(value)
        .map_err(|_| PaginationError::invalid(name, format!("{value} does not fit in usize")))
}

/// Computes page count, the visible range of the current page and the page
/// tokens to render.
///
/// `current_page` is clamped to the last page instead of failing, since it is
/// routinely stale after the collection shrinks. A `page_size` of zero is an
/// error.
pub fn compute_pagination(
    total_elements: usize,
    page_size: usize,
    current_page: usize,
) -> Result<Pagination> {
    if page_size == 0 {
        return Err(PaginationError::invalid("page_size", "must be greater than 0, got 0"));
    }

    let page_count = total_elements.div_ceil(page_size);
    let current_page = current_page.min(page_count.saturating_sub(1));
    let visible_range = range_of(total_elements, page_size, current_page);
    let tokens = page_tokens(page_count, current_page);

    Ok(Pagination { total_elements, page_size, page_count, current_page, visible_range, tokens })
}

// `page_size` must be positive.
fn range_of(total_elements: usize, page_size: usize, page: usize) -> Option<VisibleRange> {
    if page >= total_elements.div_ceil(page_size) {
        return None;
    }
    // page < page_count, so the product stays within total_elements - 1.
    let start = page * page_size;
    let end = start.saturating_add(page_size - 1).min(total_elements - 1);
    Some(VisibleRange { start, end })
}

/// Same as [`compute_pagination`] for callers holding signed values.
pub fn compute_pagination_signed(
    total_elements: i64,
    page_size: i64,
    current_page: i64,
) -> Result<Pagination> {
    PageRequest::from_signed(total_elements, page_size, current_page)?.compute()
}

/// Builds the page-control sequence for `page_count` pages with
/// `current_page` selected.
pub fn page_tokens(page_count: usize, current_page: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if page_count <= MAX_PAGE_COUNT {
        return (0..page_count).map(Page).collect();
    }

    let last = page_count - 1;
    let current_page = current_page.min(last);
    let left = current_page.saturating_sub(SIBLING_COUNT);
    let right = current_page.saturating_add(SIBLING_COUNT).min(last);

    // A side collapses only when it hides two or more pages.
    let collapse_left = left > 2;
    let collapse_right = right.saturating_add(2) < last;

    match (collapse_left, collapse_right) {
        (false, true) => (0..SIDE_PAGE_COUNT).map(Page).chain([Ellipsis, Page(last)]).collect(),
        (true, false) => [Page(0), Ellipsis]
            .into_iter()
            .chain((page_count - SIDE_PAGE_COUNT..page_count).map(Page))
            .collect(),
        (true, true) => [Page(0), Ellipsis]
            .into_iter()
            .chain((left..=right).map(Page))
            .chain([Ellipsis, Page(last)])
            .collect(),
        // Unreachable above MAX_PAGE_COUNT, kept so no page is ever hidden.
        (false, false) => (0..page_count).map(Page).collect(),
    }
}
