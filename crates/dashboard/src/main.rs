//! Terminal dashboard: fetches the aggregation endpoints and renders them
//! as tables. Each widget degrades independently; a failed fetch shows a
//! placeholder instead of taking the whole view down.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod render;

#[derive(Parser)]
#[command(name = "ledgerview-dashboard", about = "Invoice analytics terminal dashboard")]
struct Cli {
    /// Base URL of the ledgerview API.
    #[arg(long, default_value = "http://localhost:8080")]
    api_base: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the full dashboard (default).
    Show,
    /// Ask the chat-with-data endpoint a question.
    Chat { question: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    ledgerview_observability::init();

    let cli = Cli::parse();
    let api = client::ApiClient::new(cli.api_base);

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {
            let dashboard = api.fetch_dashboard().await;
            render::dashboard(&dashboard);
        }
        Command::Chat { question } => {
            let answer = api.chat(&question).await?;
            render::chat_answer(&answer);
        }
    }

    Ok(())
}
