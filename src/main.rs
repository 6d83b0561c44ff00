mod chat;
mod config;
mod context;
mod event;
mod handler;
mod helper;
mod logging;
mod plugin;
mod preferences;
mod store;
#[cfg(test)]
mod testing;

use anyhow::{anyhow, Result};
use serenity::{all::GatewayIntents, Client};
use tracing::error;

#[tokio::main]
async fn main() {
    crate::logging::init();

    if let Err(err) = run().await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = crate::config::Config::load().await?;
    let token = cfg.discord_token(std::env::var(crate::config::TOKEN_ENV_VAR).ok())?;

    let backend = crate::store::open(&cfg.database)
        .await
        .map_err(|e| anyhow!("Database connection error: {:#}", e))?;
    let prefs = crate::preferences::PreferenceStore::new(backend);
    let handler = handler::Handler::new(cfg, prefs);

    // Things we want discord to tell us about.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    Client::builder(&token, intents)
        .event_handler(handler)
        .await?
        .start()
        .await
        .map_err(|e| anyhow!("Error authenticating with Discord, check your bot token: {}", e))
}
