//! Terminal front end for the countries list.
//!
//! # Usage
//!
//! ```bash
//! # Load the default feed and print it
//! cargo run
//!
//! # Use another feed and print JSON rows
//! cargo run -- --url http://localhost:8080/countries.json --format json
//!
//! # Fail instead of prompting for a retry
//! cargo run -- --no-interactive
//! ```
//!
//! # Environment Variables
//!
//! See [`countries_list::config`] for the full list.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use countries_list::application::services::CountriesService;
use countries_list::config::{Config, load_from_env};
use countries_list::infrastructure::connectivity::{AlwaysOnline, ConnectivityProbe, TcpProbe};
use countries_list::infrastructure::http::{FetchClient, HttpCountrySource};
use countries_list::presentation::{NO_NETWORK_MESSAGE, Prompt, ScreenController, ScreenModel};
use dialoguer::Confirm;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Fetch and display the countries list.
#[derive(Parser)]
#[command(name = "countries")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Feed URL (overrides COUNTRIES_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit on failure instead of offering a retry
    #[arg(long)]
    no_interactive: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env(cli.url.as_deref())?;

    init_tracing(&config);
    config.print_summary();

    let client = FetchClient::new(config.http_timeouts()).context("Failed to build HTTP client")?;
    let source = Arc::new(HttpCountrySource::new(client));
    let service = Arc::new(CountriesService::new(source, config.countries_url.clone()));

    if config.connectivity_check {
        let probe = TcpProbe::for_url(&config.countries_url, config.http_timeouts().connect)
            .context("Failed to set up connectivity probe")?;
        run(ScreenController::new(service, probe), &cli).await
    } else {
        run(ScreenController::new(service, AlwaysOnline::new()), &cli).await
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Observes the state stream until the list is shown or the user gives up.
async fn run<P: ConnectivityProbe>(
    mut controller: ScreenController<HttpCountrySource, P>,
    cli: &Cli,
) -> Result<()> {
    let mut rx = controller.service().subscribe();
    let mut prompt = controller.start().await;

    loop {
        if prompt == Prompt::NoNetwork {
            eprintln!("{}", NO_NETWORK_MESSAGE.yellow());
            if !ask_retry(cli)? {
                anyhow::bail!("No network available");
            }
            prompt = controller.retry_requested().await;
            continue;
        }

        tokio::select! {
            changed = rx.changed() => changed.context("Countries state channel closed")?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                return Ok(());
            }
        }

        let state = rx.borrow_and_update().clone();
        let (model, next) = controller.observe(&state).await;
        render(&model, cli.format)?;

        if state.is_loading {
            continue;
        }

        if model.error_text.is_none() {
            if model.rows.is_empty() && cli.format == OutputFormat::Text {
                println!("{}", "No countries".dimmed());
            }
            return Ok(());
        }

        prompt = next;
        if prompt == Prompt::None {
            if !ask_retry(cli)? {
                anyhow::bail!("Failed to load countries");
            }
            prompt = controller.retry_requested().await;
        }
    }
}

fn render(model: &ScreenModel, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", model.to_text()),
        OutputFormat::Json => {
            if let Some(error) = &model.error_text {
                eprintln!("{}", error.red());
            } else if !model.show_spinner {
                println!("{}", model.rows_to_json()?);
            }
        }
    }
    Ok(())
}

fn ask_retry(cli: &Cli) -> Result<bool> {
    if cli.no_interactive {
        return Ok(false);
    }

    let retry = Confirm::new()
        .with_prompt("Retry?")
        .default(true)
        .interact()?;
    Ok(retry)
}
