mod commands;
mod common;
mod config;
mod events;
mod instruction;
mod store;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;

use config::Config;
use store::SwitchStore;

pub struct Data {
    config: Config,
    switches: SwitchStore,
}
pub type Error = anyhow::Error;
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load("dicer.toml").context("Failed to load dicer.toml")?;

    let database = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true),
        )
        .await
        .context("Failed to connect to the database")?;

    let switches = SwitchStore::new(database);
    switches
        .ensure_schema()
        .await
        .context("Failed to create the group switch table")?;

    let token = std::env::var("DISCORD_TOKEN").context("Missing DISCORD_TOKEN")?;
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![],
            event_handler: |ctx, event, framework, user_data| {
                Box::pin(events::handle_event(ctx, event, framework, user_data))
            },
            ..Default::default()
        })
        .setup(|_ctx, _ready, _framework| Box::pin(async move { Ok(Data { config, switches }) }))
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;
    client.start().await?;

    Ok(())
}
