// ABOUTME: Entry point for the notehub TUI
// ABOUTME: Handles CLI args, config loading, and TUI launch

use anyhow::Result;
use clap::Parser;
use notehub_client::{ClientConfig, NotesClient};
use notehub_tui::app::App;
use notehub_tui::client::Client;
use notehub_tui::types::DEFAULT_PER_PAGE;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "notehub")]
#[command(about = "Terminal client for NoteHub notes")]
#[command(version)]
struct Args {
    /// Initial search text
    #[arg(short, long)]
    search: Option<String>,

    /// Notes per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    page_size: u32,

    /// API base URL (overrides NOTEHUB_API_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    notehub_log::init_file("notehub");

    let args = Args::parse();

    let mut config = match ClientConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(base_url) = args.base_url {
        config = ClientConfig::new(base_url, config.token);
    }
    tracing::debug!(base_url = %config.base_url, "starting notehub");

    let notes = match NotesClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let (outcome_tx, outcome_rx) = mpsc::channel(32);
    let client = Client::new(notes, outcome_tx);
    let mut app = App::new(args.page_size.max(1), args.search);

    notehub_tui::run::run(&mut app, client, outcome_rx).await
}
