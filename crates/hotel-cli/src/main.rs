mod auth;
mod config;
mod session;

use anyhow::Context;
use env_logger::Env;
use hotel_core::Hotel;
use tokio::io::BufReader;

use crate::auth::ConfiguredOperator;
use crate::config::AppConfig;
use crate::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Keep the interactive console quiet unless RUST_LOG asks otherwise.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = AppConfig::load().context("loading configuration")?;

    let hotel = match &config.hotel_name {
        Some(name) => Hotel::with_name(name.as_str()),
        None => Hotel::new(),
    };
    let authenticator = ConfiguredOperator::new(config.operator.clone());

    let mut session = Session::new(
        hotel,
        Box::new(authenticator),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .with_max_login_attempts(config.max_login_attempts);

    if let Err(e) = session.run().await {
        log::error!("session failed: {e:#}");
        return Err(e);
    }
    Ok(())
}
