use std::io::IsTerminal;

use ticker_panels::config::fetch_config;
use ticker_panels::{TickerClient, TickerError, TickerPanel};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<(), TickerError> {
    let interactive = std::io::stdout().is_terminal();

    // The TUI owns the screen, so only errors are logged while it runs.
    let max_level = if interactive { Level::ERROR } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .init();

    let app_config = fetch_config()?;
    let client = TickerClient::new(&app_config.ticker)?;

    if interactive {
        let pair = client.currency_pair().to_string();
        let endpoint = client.endpoint().to_string();
        return ticker_panels::tui::run(client, pair, endpoint).await;
    }

    // Without a terminal, activate once and log what the panels would show.
    let mut panel = TickerPanel::new();
    panel.activate(&client).await;

    if let Some(error) = panel.error() {
        return Err(error.clone().into());
    }

    for record in panel.records() {
        info!(
            symbol = %record.symbol,
            last = %record.last,
            volume = %record.volume,
            best_bid = %record.best_bid,
            best_ask = %record.best_ask,
            spread = %record.spread(),
            usd = %record.usd,
            "Ticker"
        );
    }

    Ok(())
}
