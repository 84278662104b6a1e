mod api;
mod commands;
mod config;
mod dispatch;
mod knowledge;
mod llm;
mod ports;
mod state;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use poise::{Framework, FrameworkOptions, PrefixFrameworkOptions};
use tracing::{error, info, warn, Level};

use api::RemoteDataClient;
use config::Settings;
use dispatch::Dispatcher;
use knowledge::prompt::PromptContext;
use knowledge::PROJECT;
use llm::LlmClient;
use ports::{PortChecker, SocketProbe};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let settings = Settings::from_env()?;
    let guild_id = settings.guild_id.map(serenity::GuildId::new);

    // Built once, shared read-only by every AI request
    let prompt = PromptContext::from_project(&PROJECT);
    let llm_client = Arc::new(LlmClient::new(
        settings.llm_base_url.clone(),
        settings.llm_model.clone(),
        settings.llm_api_key.clone(),
        prompt,
    ));
    if llm_client.is_configured() {
        info!(model = %settings.llm_model, "LLM client initialized");
    } else {
        warn!("GROQ_API_KEY not set, AI replies will report the service as not configured");
    }

    let data = Arc::new(RemoteDataClient::new(
        settings.api_url.clone(),
        settings.api_key.clone(),
    ));
    info!(api_url = %settings.api_url, "Remote data client initialized");

    let dispatcher = Arc::new(Dispatcher::new(
        data,
        PortChecker::new(Arc::new(SocketProbe::default())),
        llm_client,
        settings.prefix.clone(),
    ));

    let app_state = AppState {
        dispatcher,
        prefix: settings.prefix.clone(),
    };

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: commands::all(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(settings.prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(commands::on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(commands::on_event(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot connected as: {} ({})", ready.user.name, ready.user.id);
                info!("Bot is in {} guild(s)", ready.guilds.len());

                ctx.set_activity(Some(serenity::ActivityData::watching("Xandeum Network")));

                let commands = &framework.options().commands;
                info!("Registering {} command(s)", commands.len());

                if let Some(gid) = guild_id {
                    info!("Registering to guild {} (instant)", gid);
                    poise::builtins::register_in_guild(ctx, commands, gid).await?;
                } else {
                    info!("Registering globally (up to 1 hour delay)");
                    poise::builtins::register_globally(ctx, commands).await?;
                }

                Ok(app_state)
            })
        })
        .build();

    info!(prefix = %settings.prefix, "Starting Xandeum Discord bot...");

    let mut client = serenity::ClientBuilder::new(&settings.discord_token, intents)
        .framework(framework)
        .await
        .context("Failed to create client")?;

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }

    Ok(())
}
