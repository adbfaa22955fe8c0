// src/state.rs
use std::sync::Arc;

use crate::config::LexBotConfig;
use crate::services::gateway::ConversationGateway;
use crate::services::lex::LexRuntime;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub gateway: ConversationGateway,
}

impl AppState {
    pub fn new(runtime: Arc<dyn LexRuntime>, bot: LexBotConfig) -> Self {
        Self {
            gateway: ConversationGateway::new(runtime, bot),
        }
    }
}
