use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rental_console::config::Config;
use rental_console::infrastructure::HttpClient;
use rental_console::repl;
use rental_console::services::ConsoleState;
use rental_console::views::Page;

#[tokio::main]
async fn main() {
    // stdout carries the page, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env().apply_args(&args);
    tracing::info!("Using rental service at {}", config.base_url);

    let client = HttpClient::new(&config.base_url);
    let mut page = Page::new(ConsoleState::new(client), &config.base_url);
    page.mount().await;

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = repl::run(&mut page, stdin, tokio::io::stdout()).await {
        tracing::error!("Console stopped: {}", e);
        std::process::exit(1);
    }
}
