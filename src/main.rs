use clap::Parser;
use page_window::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match page_window::run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("Error: {e}");
            std::process::exit(1);
        }
    }
}
