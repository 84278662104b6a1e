use poise::serenity_prelude as serenity;
use tracing::info;

use super::{origin, reply, split_chunks};
use crate::dispatch::{Command, CommandRequest};
use crate::llm;
use crate::state::{AppState, Context};

/// Ask the AI a question
#[poise::command(prefix_command, slash_command)]
pub async fn ai(
    ctx: Context<'_>,
    #[description = "Your question about Xandeum"]
    #[rest]
    question: Option<String>,
) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Ai, question).await
}

/// Gateway events outside the command framework: free-form questions.
pub async fn on_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, AppState, anyhow::Error>,
    data: &AppState,
) -> Result<(), anyhow::Error> {
    let serenity::FullEvent::Message { new_message } = event else {
        return Ok(());
    };
    if new_message.author.bot {
        return Ok(());
    }

    let bot_id = framework.bot_id.get();
    if !llm::should_respond(&new_message.content, &data.prefix, bot_id) {
        return Ok(());
    }

    info!(user = %new_message.author.name, "Free-form AI question");
    let _typing = new_message.channel_id.start_typing(&ctx.http);

    let request = CommandRequest::new(
        Command::Ai,
        llm::strip_mention(&new_message.content, bot_id),
        origin(&new_message.author, new_message.channel_id),
    );
    let text = data.dispatcher.dispatch(&request).await;

    for chunk in split_chunks(&text) {
        new_message.channel_id.say(&ctx.http, chunk).await?;
    }
    Ok(())
}
