mod commands;
mod config;
mod llm;
mod state;
mod summary;
mod view;

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use commands::Command;
use config::Config;
use llm::GeminiClient;
use state::{RequestStatus, ViewController};
use summary::SummaryClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    let config = Config::from_env();

    // Logs go to stderr; stdout carries the rendered summary.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    for warning in &config.warnings {
        warn!("{}", warning);
    }
    if !config.has_api_key() {
        warn!("No API key configured (API_KEY / GEMINI_API_KEY); requests will be rejected");
    }
    info!(
        model = %config.model,
        base_url = %config.base_url,
        timeout = ?config.timeout,
        "Configuration loaded"
    );

    let llm = Arc::new(GeminiClient::new(&config)?);
    let service = Arc::new(SummaryClient::new(llm));
    let mut controller = ViewController::new(service);

    controller.fetch(show).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Command::Refresh => {
                controller.refresh(show).await;
            }
            Command::Quit => break,
            Command::Empty => show(controller.status()),
            Command::Unknown(other) => {
                println!("Unknown command `{}`. {}", other, commands::HELP);
            }
        }
    }

    info!("Exiting");
    Ok(())
}

/// Redraw the screen for the current status.
fn show(status: &RequestStatus) {
    println!("\n{}", view::render(status));
    if !status.is_loading() {
        println!("{}", commands::HELP);
    }
}
