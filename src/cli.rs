use clap::Parser;
use tracing::debug;

use crate::{
    AppError,
    config::Config,
    pagination::{PageRequest, PaginationError},
    paginator::Paginator,
    render::{format_summary, format_tokens},
};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "page-window")]
#[command(about = "Compute the page window and page controls for a paginated table")]
#[command(version, allow_negative_numbers = true)]
#[command(after_help = "Examples:
  page-window 100                       # First page with the default page size
  page-window 100 --page 10 -s 10       # Page index 10 (zero-based)
  page-window 100 --json                # Full computation as JSON

Environment Variables:
  PAGE_SIZE_BASE      Smallest selectable page size (default 10)
  PAGE_SIZE_CHOICES   Number of page sizes on the menu (default 5)
  DEFAULT_PAGE_SIZE   Page size used when --page-size is not given (default 10)")]
pub struct Cli {
    /// Total number of elements in the collection
    pub total: i64,

    /// Zero-based index of the current page, clamped to the last page
    #[arg(short, long, default_value_t = 0)]
    pub page: i64,

    /// Elements per page; must be one of the configured page sizes
    #[arg(short = 's', long)]
    pub page_size: Option<i64>,

    /// Print the full computation as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs one computation and returns the text to print.
pub fn execute(cli: &Cli, config: &Config) -> Result<String, AppError> {
    let page_size = match cli.page_size {
        Some(page_size) => page_size,
        None => i64::try_from(config.default_page_size).map_err(|_| {
            PaginationError::invalid(
                "page_size",
                format!("default page size {} does not fit in i64", config.default_page_size),
            )
        })?,
    };
    let request = PageRequest::from_signed(cli.total, page_size, cli.page)?;
    debug!(?request, "Parsed request.");

    let mut paginator = Paginator::from_config(config, request.total_elements)?;
    if request.page_size != paginator.page_size() {
        paginator.set_page_size(request.page_size)?;
    }
    paginator.go_to(request.current_page);
    let pagination = paginator.pagination()?;

    if cli.json {
        return Ok(serde_json::to_string_pretty(&pagination)?);
    }

    let summary = format_summary(&pagination);
    if pagination.is_empty() {
        return Ok(summary);
    }
    Ok(format!("{summary}\n{}", format_tokens(&pagination)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("page-window").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse(&["100", "--page", "3", "-s", "20", "--json"]);
        assert_eq!(cli.total, 100);
        assert_eq!(cli.page, 3);
        assert_eq!(cli.page_size, Some(20));
        assert!(cli.json);
    }

    #[test]
    fn test_parse_negative_values() {
        let cli = parse(&["-5", "--page", "-1"]);
        assert_eq!(cli.total, -5);
        assert_eq!(cli.page, -1);
    }

    #[test]
    fn test_execute_text() {
        let cli = parse(&["200", "--page", "10"]);
        let output = execute(&cli, &Config::default()).unwrap();
        assert_eq!(output, "Showing 101-110 of 200 (Page 11 of 20)\n1 … 9 10 [11] 12 13 … 20");
    }

    #[test]
    fn test_execute_clamps_page() {
        let cli = parse(&["35", "--page", "999"]);
        let output = execute(&cli, &Config::default()).unwrap();
        assert_eq!(output, "Showing 31-35 of 35 (Page 4 of 4)\n1 2 3 [4]");
    }

    #[test]
    fn test_execute_empty() {
        let cli = parse(&["0"]);
        let output = execute(&cli, &Config::default()).unwrap();
        assert_eq!(output, "No items found.");
    }

    #[test]
    fn test_execute_json() {
        let cli = parse(&["15", "-s", "10", "--json"]);
        let output = execute(&cli, &Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["page_count"], 2);
        assert_eq!(value["visible_range"]["start"], 0);
        assert_eq!(value["visible_range"]["end"], 9);
        assert_eq!(value["tokens"][1]["index"], 1);
    }

    #[test]
    fn test_execute_rejects_invalid_input() {
        let config = Config::default();

        let err = execute(&parse(&["10", "-s", "0"]), &config).unwrap_err();
        assert!(matches!(err, AppError::Pagination(PaginationError::InvalidArgument { .. })));

        let err = execute(&parse(&["-1"]), &config).unwrap_err();
        assert!(matches!(
            err,
            AppError::Pagination(PaginationError::InvalidArgument { name: "total_elements", .. })
        ));

        let err = execute(&parse(&["10", "-s", "15"]), &config).unwrap_err();
        assert!(matches!(
            err,
            AppError::Pagination(PaginationError::InvalidArgument { name: "page_size", .. })
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_execute_rejects_default_page_size_beyond_i64() {
        let config =
            Config { page_size_base: 1, page_size_choices: 1, default_page_size: usize::MAX };

        let err = execute(&parse(&["10"]), &config).unwrap_err();
        match err {
            AppError::Pagination(PaginationError::InvalidArgument { name, reason }) => {
                assert_eq!(name, "page_size");
                assert!(reason.contains("does not fit in i64"), "unexpected reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_execute_large_total() {
        let cli = parse(&["1000000000000", "--page", "5000000"]);
        let output = execute(&cli, &Config::default()).unwrap();
        assert_eq!(
            output,
            "Showing 50000001-50000010 of 1000000000000 (Page 5000001 of 100000000000)\n\
             1 … 4999999 5000000 [5000001] 5000002 5000003 … 100000000000"
        );
    }
}
