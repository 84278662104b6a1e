use super::reply;
use crate::dispatch::Command;
use crate::state::Context;

/// Show all available commands
#[poise::command(prefix_command, slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Help, None).await
}

/// Show project overview
#[poise::command(prefix_command, slash_command)]
pub async fn overview(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Overview, None).await
}

/// Show technical specifications
#[poise::command(prefix_command, slash_command)]
pub async fn technical(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Technical, None).await
}

/// Show token information
#[poise::command(prefix_command, slash_command)]
pub async fn token(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Token, None).await
}

/// Show innovation eras roadmap
#[poise::command(prefix_command, slash_command)]
pub async fn eras(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Eras, None).await
}

/// Show documentation links
#[poise::command(prefix_command, slash_command)]
pub async fn docs(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Docs, None).await
}
