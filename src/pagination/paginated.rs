use super::{Pagination, Result, compute_pagination};

/// A collection of items together with the page currently shown from it.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Paginated<T> {
    /// Every item, not only the current page.
    pub items: Vec<T>,
    /// Zero-based, always within `[0, total_pages - 1]` after construction.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// `items.len()` at construction.
    pub total_items: usize,
    /// Page count at construction.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wraps `items`, clamping `page` to the last available page.
    pub fn new(items: Vec<T>, page: usize, page_size: usize) -> Result<Self> {
        let pagination = compute_pagination(items.len(), page_size, page)?;

        Ok(Paginated {
            total_items: items.len(),
            total_pages: pagination.page_count,
            page: pagination.current_page,
            page_size,
            items,
        })
    }

    /// True when a page follows the current one.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// True when a page precedes the current one.
    pub fn has_prev(&self) -> bool {
        self.page > 0 && self.total_pages > 0
    }

    /// Items on the current page.
    pub fn page_items(&self) -> &[T] {
        let start = self.page.saturating_mul(self.page_size).min(self.items.len());
        let end = start.saturating_add(self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Recomputes the page controls for the current page.
    pub fn pagination(&self) -> Result<Pagination> {
        compute_pagination(self.total_items, self.page_size, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{PageToken, PaginationError};

    #[test]
    fn test_page_items_for_middle_and_last_page() {
        let items: Vec<u32> = (1..=23).collect();

        let paginated = Paginated::new(items.clone(), 1, 10).unwrap();
        assert_eq!(paginated.page_items(), &items[10..20]);
        assert!(paginated.has_next());
        assert!(paginated.has_prev());

        let paginated = Paginated::new(items.clone(), 2, 10).unwrap();
        assert_eq!(paginated.page_items(), &[21, 22, 23]);
        assert!(!paginated.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        let paginated = Paginated::new(vec!['a', 'b', 'c'], 7, 2).unwrap();
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.total_pages, 2);
        assert_eq!(paginated.page_items(), &['c']);
    }

    #[test]
    fn test_empty_items() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 10).unwrap();
        assert_eq!(paginated.total_pages, 0);
        assert!(paginated.page_items().is_empty());
        assert!(!paginated.has_next());
        assert!(!paginated.has_prev());
        assert!(paginated.pagination().unwrap().tokens.is_empty());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = Paginated::new(vec![1, 2, 3], 0, 0);
        assert!(matches!(
            result,
            Err(PaginationError::InvalidArgument { name: "page_size", .. })
        ));
    }

    #[test]
    fn test_pagination_matches_page() {
        let paginated = Paginated::new((0..50).collect::<Vec<_>>(), 4, 5).unwrap();
        let pagination = paginated.pagination().unwrap();

        assert_eq!(pagination.current_page, 4);
        assert_eq!(pagination.visible_range.unwrap().as_range(), 20..25);
        assert!(pagination.tokens.contains(&PageToken::Page(4)));
    }
}
