use super::reply;
use crate::dispatch::Command;
use crate::state::Context;

/// Show DAO information and governance platform
#[poise::command(prefix_command, slash_command)]
pub async fn dao(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Dao, None).await
}

/// Show current DAO proposals
#[poise::command(prefix_command, slash_command, rename = "dao-proposals")]
pub async fn dao_proposals(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::DaoProposals, None).await
}

/// Show DAO voting information
#[poise::command(prefix_command, slash_command, rename = "dao-vote")]
pub async fn dao_vote(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::DaoVote, None).await
}
