use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema::{
    config::{AppConfig, Config, LogFormat},
    controllers::{self, Console},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config.app);

    info!("Starting cinema seat reservation");

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    controllers::run_session(&mut console, &config.hall)
        .await
        .context("Console session failed")?;

    info!("Session finished");
    Ok(())
}

// Логи пишутся в stderr, чтобы не смешиваться с выводом меню
fn init_tracing(app: &AppConfig) {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&app.rust_log));

    match app.log_format {
        LogFormat::Plain => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
