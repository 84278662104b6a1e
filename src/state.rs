use std::sync::Arc;

use crate::dispatch::Dispatcher;

/// Shared with every command invocation. Read-only after startup.
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub prefix: String,
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
