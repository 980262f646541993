use std::{
    io::{self, Read},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, AnalysisController, HttpClassificationService, ServiceProbe, TriggerRejected,
    UiState,
};
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::{format_health, format_stats, TerminalPresenter};

const EXIT_REQUEST_FAILED: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "sentiment", about = "Classify the sentiment of a text")]
struct Cli {
    /// Base URL of the sentiment service; overrides sentiment.toml and env vars.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one text for classification. Pass `-` to read it from stdin.
    Analyze {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Show service health.
    Health,
    /// Show aggregate classification statistics.
    Stats {
        #[arg(long)]
        json: bool,
    },
}

fn read_text_arg(text: String) -> Result<String> {
    if text != "-" {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings().with_api_url(cli.api_url);
    let endpoints = settings
        .endpoints()
        .context("cannot build service endpoints from settings")?;

    match cli.command {
        Command::Analyze { text, json } => {
            let text = read_text_arg(text)?;
            let service = HttpClassificationService::new(endpoints.analyze);
            let mut presenter = TerminalPresenter::new(io::stdout(), io::stderr(), json);
            let mut controller = AnalysisController::new();

            let code = match controller.analyze(&service, &text, &mut presenter).await {
                Ok(UiState::Success(_)) => ExitCode::SUCCESS,
                Ok(_) => ExitCode::from(EXIT_REQUEST_FAILED),
                Err(TriggerRejected::Invalid(_)) => ExitCode::from(EXIT_INVALID_INPUT),
                Err(TriggerRejected::Busy) => ExitCode::from(EXIT_REQUEST_FAILED),
            };
            Ok(code)
        }
        Command::Health => {
            let report = ServiceProbe::new(endpoints)
                .check_health()
                .await
                .context("health check failed")?;
            println!("{}", format_health(&report));
            Ok(if report.is_up() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_REQUEST_FAILED)
            })
        }
        Command::Stats { json } => {
            let stats = ServiceProbe::new(endpoints)
                .fetch_stats()
                .await
                .context("failed to fetch statistics")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", format_stats(&stats));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
