use super::reply;
use crate::dispatch::Command;
use crate::state::Context;

/// Show pNode information and setup guides
#[poise::command(prefix_command, slash_command)]
pub async fn pnode(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::PNode, None).await
}

/// Show pNode setup requirements and guide
#[poise::command(prefix_command, slash_command, rename = "pnode-setup")]
pub async fn pnode_setup(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::PNodeSetup, None).await
}

/// Show pNode update instructions
#[poise::command(prefix_command, slash_command, rename = "pnode-update")]
pub async fn pnode_update(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::PNodeUpdate, None).await
}

/// Test pNode port connectivity
#[poise::command(prefix_command, slash_command, rename = "pnode-ports")]
pub async fn pnode_ports(
    ctx: Context<'_>,
    #[description = "Public IPv4 address of your pNode"] ip_address: Option<String>,
) -> Result<(), anyhow::Error> {
    reply(ctx, Command::PNodePorts, ip_address).await
}

/// Show vNode information and setup guides
#[poise::command(prefix_command, slash_command)]
pub async fn vnode(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::VNode, None).await
}

/// Show vNode setup requirements and guide
#[poise::command(prefix_command, slash_command, rename = "vnode-setup")]
pub async fn vnode_setup(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::VNodeSetup, None).await
}

/// Show vNode update instructions
#[poise::command(prefix_command, slash_command, rename = "vnode-update")]
pub async fn vnode_update(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::VNodeUpdate, None).await
}

/// Test vNode port connectivity
#[poise::command(prefix_command, slash_command, rename = "vnode-ports")]
pub async fn vnode_ports(
    ctx: Context<'_>,
    #[description = "Public IPv4 address of your vNode"] ip_address: Option<String>,
) -> Result<(), anyhow::Error> {
    reply(ctx, Command::VNodePorts, ip_address).await
}

/// Show DevNet information and resources
#[poise::command(prefix_command, slash_command)]
pub async fn devnet(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    reply(ctx, Command::Devnet, None).await
}
