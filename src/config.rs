use std::env;

use thiserror::Error;

use crate::{page_size::PageSizeMenu, pagination::PaginationError};

const DEFAULT_PAGE_SIZE_BASE: usize = 10;
const DEFAULT_PAGE_SIZE_CHOICES: usize = 5;
const DEFAULT_PAGE_SIZE: usize = 10;

/// Errors raised while loading the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting holds a value the page-size menu cannot accept.
    #[error("Invalid value for {name}={value}: {reason}")]
    InvalidValue {
        /// The environment variable.
        name: &'static str,
        /// The value in effect.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Represents the application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The smallest selectable page size; every choice is a multiple of it.
    pub page_size_base: usize,
    /// How many page sizes the menu offers.
    pub page_size_choices: usize,
    /// The page size used until the user picks another one.
    pub default_page_size: usize,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Values that fail to parse fall back to their defaults. The resulting
    /// menu must be non-empty and contain the default page size.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            page_size_base: env_or("PAGE_SIZE_BASE", DEFAULT_PAGE_SIZE_BASE),
            page_size_choices: env_or("PAGE_SIZE_CHOICES", DEFAULT_PAGE_SIZE_CHOICES),
            default_page_size: env_or("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        };

        config
            .page_size_menu()?
            .validate(config.default_page_size)
            .map_err(|e| config.invalid_value(e))?;
        Ok(config)
    }

    /// Builds the page-size menu described by this configuration.
    pub fn page_size_menu(&self) -> Result<PageSizeMenu, ConfigError> {
        PageSizeMenu::new(self.page_size_base, self.page_size_choices)
            .map_err(|e| self.invalid_value(e))
    }

    // Attributes a menu error to the setting it came from.
    fn invalid_value(&self, err: PaginationError) -> ConfigError {
        let PaginationError::InvalidArgument { name, reason } = err;
        let (name, value) = match name {
            "page_size_base" => ("PAGE_SIZE_BASE", self.page_size_base),
            "page_size_choices" => ("PAGE_SIZE_CHOICES", self.page_size_choices),
            _ => ("DEFAULT_PAGE_SIZE", self.default_page_size),
        };
        ConfigError::InvalidValue { name, value: value.to_string(), reason }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size_base: DEFAULT_PAGE_SIZE_BASE,
            page_size_choices: DEFAULT_PAGE_SIZE_CHOICES,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn env_or(key: &str, default: usize) -> usize {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
