use std::io;

use birthday_admin::{session, Config, Terminal, UreqTransport};
use birthday_core::{BirthdayAdmin, BirthdayClient};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "birthday_admin=info,birthday_core=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .init();
    }

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "starting birthday admin");

    let terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let mut admin = BirthdayAdmin::new(BirthdayClient::new(&config.api_url), UreqTransport::new(), terminal);
    session::run(&mut admin, || chrono::Local::now().date_naive())?;
    Ok(())
}
