mod ai;
mod dao;
mod info;
mod live;
mod nodes;

use poise::serenity_prelude as serenity;
use tracing::error;

use crate::dispatch::{Command, CommandRequest, GENERIC_ERROR};
use crate::state::{AppState, Context};

pub use ai::on_event;

/// Discord rejects messages over 2000 characters.
const MAX_CHUNK: usize = 1990;

/// Every command, registered both as `!name` and `/name`.
pub fn all() -> Vec<poise::Command<AppState, anyhow::Error>> {
    vec![
        live::price(),
        live::stake(),
        live::validators(),
        live::governance(),
        live::network(),
        info::help(),
        info::overview(),
        info::technical(),
        info::token(),
        info::eras(),
        info::docs(),
        nodes::pnode(),
        nodes::pnode_setup(),
        nodes::pnode_update(),
        nodes::pnode_ports(),
        nodes::vnode(),
        nodes::vnode_setup(),
        nodes::vnode_update(),
        nodes::vnode_ports(),
        nodes::devnet(),
        ai::ai(),
        dao::dao(),
        dao::dao_proposals(),
        dao::dao_vote(),
    ]
}

fn origin(author: &serenity::User, channel: serenity::ChannelId) -> String {
    format!("{}@{}", author.name, channel)
}

/// Run `command` through the dispatcher and send the reply.
async fn reply(ctx: Context<'_>, command: Command, args: Option<String>) -> Result<(), anyhow::Error> {
    // Probes and completions can outlast the 3s interaction deadline
    if matches!(command, Command::Ai | Command::PNodePorts | Command::VNodePorts) {
        ctx.defer().await?;
    }

    let request = CommandRequest::new(
        command,
        args.unwrap_or_default(),
        origin(ctx.author(), ctx.channel_id()),
    );
    let text = ctx.data().dispatcher.dispatch(&request).await;

    for chunk in split_chunks(&text) {
        ctx.say(chunk).await?;
    }
    Ok(())
}

/// Split text into Discord-safe chunks, preferring line then word boundaries.
pub(crate) fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        if remaining.len() <= MAX_CHUNK {
            chunks.push(remaining);
            break;
        }

        let mut limit = MAX_CHUNK;
        while !remaining.is_char_boundary(limit) {
            limit -= 1;
        }
        let window = &remaining[..limit];
        let split_at = window
            .rfind('\n')
            .or_else(|| window.rfind(' '))
            .map(|i| i + 1)
            .unwrap_or(limit);

        chunks.push(&remaining[..split_at]);
        remaining = &remaining[split_at..];
    }
    chunks
}

pub async fn on_error(error: poise::FrameworkError<'_, AppState, anyhow::Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().qualified_name, "Command error: {}", error);
            if let Err(e) = ctx.say(GENERIC_ERROR).await {
                error!("Failed to send error reply: {}", e);
            }
        }
        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
            if let Err(e) = ctx.say(format!("Missing required argument: {}", error)).await {
                error!("Failed to send error reply: {}", e);
            }
        }
        // Unknown commands are not ours to answer
        poise::FrameworkError::UnknownCommand { .. } => {}
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_every_command() {
        let commands = all();
        assert_eq!(commands.len(), Command::ALL.len());
        for command in Command::ALL {
            assert!(
                commands.iter().any(|c| c.name == command.name()),
                "{} not registered",
                command.name()
            );
        }
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_chunks("hello"), vec!["hello"]);
        assert!(split_chunks("").is_empty());
    }

    #[test]
    fn test_long_text_splits_on_newlines() {
        let line = "• a reasonably long line of help text for chunking\n";
        let text = line.repeat(100);
        let chunks = split_chunks(&text);

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.len() <= MAX_CHUNK));
        assert!(chunks[..chunks.len() - 1].iter().all(|c| c.ends_with('\n')));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_unbroken_multibyte_text_does_not_panic() {
        let text = "🎉".repeat(1000);
        let chunks = split_chunks(&text);
        assert!(chunks.iter().all(|c| c.len() <= MAX_CHUNK));
        assert_eq!(chunks.concat(), text);
    }
}
