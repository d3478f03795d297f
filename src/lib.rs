#![warn(missing_docs)]
//! Page windows for paginated tables.
//!
//! Given an element count, a page size and the current page, computes the
//! page count, the element range shown on the current page and the page
//! controls to render, collapsing long runs of pages into ellipses.

/// Command-line front end.
pub mod cli;
/// The configuration for the application.
pub mod config;
/// The fixed menu of selectable page sizes.
pub mod page_size;
/// The pagination window calculator.
pub mod pagination;
/// Caller-held page state.
pub mod paginator;
/// Text rendering of page controls.
pub mod render;

use thiserror::Error;

use crate::{cli::Cli, config::ConfigError, pagination::PaginationError};

/// Errors surfaced by [`run`].
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The request was rejected by the calculator.
    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),
    /// JSON output could not be produced.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Loads the configuration and runs the command, returning its output.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let config = config::Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded.");

    cli::execute(cli, &config)
}
