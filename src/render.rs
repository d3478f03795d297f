use std::fmt;

use crate::pagination::{PageToken, Pagination};

const ELLIPSIS: &str = "…";

/// Pages are shown 1-based.
impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(index) => write!(f, "{}", index + 1),
            PageToken::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// Renders the page controls on one line, with the current page in brackets.
pub fn format_tokens(pagination: &Pagination) -> String {
    pagination
        .tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(index) if *index == pagination.current_page => format!("[{token}]"),
            _ => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describes the visible slice, e.g. `Showing 51-55 of 100 (Page 11 of 20)`.
pub fn format_summary(pagination: &Pagination) -> String {
    match pagination.visible_range {
        Some(range) => format!(
            "Showing {}-{} of {} (Page {} of {})",
            range.start + 1,
            range.end + 1,
            pagination.total_elements,
            pagination.current_page + 1,
            pagination.page_count
        ),
        None => "No items found.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::compute_pagination;

    #[test]
    fn test_format_tokens_collapsed() {
        let pagination = compute_pagination(100, 5, 10).unwrap();
        assert_eq!(format_tokens(&pagination), "1 … 9 10 [11] 12 13 … 20");
    }

    #[test]
    fn test_format_tokens_short() {
        let pagination = compute_pagination(12, 5, 0).unwrap();
        assert_eq!(format_tokens(&pagination), "[1] 2 3");
    }

    #[test]
    fn test_format_tokens_empty() {
        let pagination = compute_pagination(0, 5, 0).unwrap();
        assert_eq!(format_tokens(&pagination), "");
    }

    #[test]
    fn test_format_summary() {
        let pagination = compute_pagination(100, 5, 10).unwrap();
        assert_eq!(format_summary(&pagination), "Showing 51-55 of 100 (Page 11 of 20)");
    }

    #[test]
    fn test_format_summary_last_partial_page() {
        let pagination = compute_pagination(17, 5, 999).unwrap();
        assert_eq!(format_summary(&pagination), "Showing 16-17 of 17 (Page 4 of 4)");
    }

    #[test]
    fn test_format_summary_no_items() {
        let pagination = compute_pagination(0, 10, 0).unwrap();
        assert_eq!(format_summary(&pagination), "No items found.");
    }
}
