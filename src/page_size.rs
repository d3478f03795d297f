use crate::pagination::{PaginationError, Result};

const DEFAULT_BASE: usize = 10;
const DEFAULT_CHOICES: usize = 5;

/// The fixed menu of selectable page sizes: `base, 2 * base, ..., choices * base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeMenu {
    base: usize,
    choices: usize,
}

impl PageSizeMenu {
    /// Creates a menu of `choices` sizes stepping by `base`. Both must be
    /// positive and the largest size must fit in `usize`.
    pub fn new(base: usize, choices: usize) -> Result<Self> {
        if base == 0 {
            return Err(PaginationError::invalid("page_size_base", "must be greater than 0"));
        }
        if choices == 0 {
            return Err(PaginationError::invalid("page_size_choices", "must be greater than 0"));
        }
        if base.checked_mul(choices).is_none() {
            return Err(PaginationError::invalid(
                "page_size_choices",
                format!("{choices} choices of {base} overflow usize"),
            ));
        }

        Ok(Self { base, choices })
    }

    /// Page sizes in ascending order.
    pub fn options(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.choices).map(move |n| n * self.base)
    }

    /// True when `page_size` is one of the menu's options.
    pub fn contains(&self, page_size: usize) -> bool {
        page_size > 0 && page_size % self.base == 0 && page_size / self.base <= self.choices
    }

    /// Returns `page_size` if it is on the menu.
    pub fn validate(&self, page_size: usize) -> Result<usize> {
        if self.contains(page_size) {
            Ok(page_size)
        } else {
            let options: Vec<String> = self.options().map(|o| o.to_string()).collect();
            Err(PaginationError::invalid(
                "page_size",
                format!("{page_size} is not one of [{}]", options.join(", ")),
            ))
        }
    }
}

impl Default for PageSizeMenu {
    fn default() -> Self {
        Self { base: DEFAULT_BASE, choices: DEFAULT_CHOICES }
    }
}
