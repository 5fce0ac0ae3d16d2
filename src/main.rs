// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout only ever holds the icon list)
// 3. Resolve the icon names for the chosen source
// 4. Render them and print
// 5. Exit with proper code (0 = success or help, 1 = any error)
// =============================================================================

// The resolver and renderers live in the library half of the crate (src/lib.rs)
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use milist::cli::Cli;
use milist::config::ApiConfig;
use milist::icons::{IconLister, Source};
use milist::output;

#[tokio::main]
async fn main() {
    // try_parse instead of parse: clap would exit with 2 on bad arguments,
    // we want 1 for every error
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // print() sends help to stdout and errors to stderr
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins when set; otherwise only warnings unless --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("milist={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    // Validate before anything else so a bad --source never reaches the network
    let source: Source = match &cli.source {
        Some(source) => source.parse()?,
        None => {
            eprintln!("No source specified, using '{}'", Source::Code);
            Source::Code
        }
    };

    let mut config = ApiConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_api_base(url)?;
    }
    if let Some(url) = &cli.raw_url {
        config = config.with_raw_base(url)?;
    }
    tracing::debug!(authenticated = config.token.is_some(), api = %config.api_base, "configured");

    let lister = IconLister::new(config)?;

    eprintln!("Fetching {} icons...", source);
    let icons = lister.list_source(source).await?;

    let rendered = output::render(&icons, cli.output_format(), chrono::Local::now().date_naive())?;
    print!("{}", rendered);

    Ok(())
}
