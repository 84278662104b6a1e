use super::reply;
use crate::dispatch::Command;
use crate::state::Context;

/// Get current XAND price
#[poise::command(prefix_command, slash_command)]
pub async fn price(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Price, None).await
}

/// Get staking information
#[poise::command(prefix_command, slash_command)]
pub async fn stake(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Stake, None).await
}

/// Get validators information
#[poise::command(prefix_command, slash_command)]
pub async fn validators(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Validators, None).await
}

/// Get governance proposals
#[poise::command(prefix_command, slash_command)]
pub async fn governance(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Governance, None).await
}

/// Get network status
#[poise::command(prefix_command, slash_command)]
pub async fn network(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Network, None).await
}
