// src/services/gateway.rs
use std::{collections::HashMap, sync::Arc};

use thiserror::Error;

use super::lex::{
    Interpretation, LexIntent, LexRuntime, LexSessionState, RecognizeTextReply, RuntimeError,
};
use crate::{
    config::LexBotConfig,
    message::{ChatRequest, ChatResponse, SessionInfo},
};

pub const UNKNOWN_STATE: &str = "Unknown";

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Any failure reported by the bot runtime.
    #[error("{context}")]
    RemoteService {
        context: &'static str,
        #[source]
        source: RuntimeError,
    },
}

impl GatewayError {
    fn remote(context: &'static str) -> impl FnOnce(RuntimeError) -> Self {
        move |source| Self::RemoteService { context, source }
    }
}

/// Forwards chat turns and session calls to the Lex bot named in `bot`.
#[derive(Clone)]
pub struct ConversationGateway {
    runtime: Arc<dyn LexRuntime>,
    bot: LexBotConfig,
}

impl ConversationGateway {
    pub fn new(runtime: Arc<dyn LexRuntime>, bot: LexBotConfig) -> Self {
        Self { runtime, bot }
    }

    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, GatewayError> {
        tracing::debug!(session_id = %request.session_id, text = %request.message, "Sending message to Lex");

        let reply = self
            .runtime
            .recognize_text(&self.bot, &request.session_id, &request.message)
            .await
            .inspect_err(|e| {
                tracing::error!(session_id = %request.session_id, error = %e, "Error calling Amazon Lex")
            })
            .map_err(GatewayError::remote("Failed to communicate with Lex bot"))?;

        tracing::debug!(session_id = %request.session_id, "Received response from Lex");
        Ok(to_chat_response(&request.session_id, reply))
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<(), GatewayError> {
        self.runtime
            .delete_session(&self.bot, session_id)
            .await
            .inspect_err(|e| tracing::error!(session_id, error = %e, "Error deleting session"))
            .map_err(GatewayError::remote("Failed to delete session"))?;

        tracing::info!(session_id, "Session deleted");
        Ok(())
    }

    pub async fn get_session(&self, session_id: &str) -> Result<SessionInfo, GatewayError> {
        let snapshot = self
            .runtime
            .get_session(&self.bot, session_id)
            .await
            .inspect_err(|e| tracing::error!(session_id, error = %e, "Error getting session"))
            .map_err(GatewayError::remote("Failed to get session"))?;

        Ok(SessionInfo {
            session_id: snapshot.session_id.unwrap_or_else(|| session_id.to_string()),
            messages: snapshot.messages,
            interpretations: snapshot.interpretations,
        })
    }
}

/// Map a recognize-text reply onto the chat response shape.
pub fn to_chat_response(session_id: &str, reply: RecognizeTextReply) -> ChatResponse {
    let intent = reply.session_state.as_ref().and_then(|s| s.intent.as_ref());

    ChatResponse {
        session_id: session_id.to_string(),
        messages: reply
            .messages
            .into_iter()
            .map(|m| m.content.unwrap_or_default())
            .collect(),
        session_state: session_state_name(reply.session_state.as_ref()),
        intent: intent.map(|i| i.name.clone()),
        slots: intent.map(interpreted_slots).unwrap_or_default(),
        interpretation_source: render_interpretations(reply.interpretations.as_deref()),
    }
}

/// The intent's state, or [`UNKNOWN_STATE`] when any part is missing.
pub fn session_state_name(state: Option<&LexSessionState>) -> String {
    state
        .and_then(|s| s.intent.as_ref())
        .and_then(|i| i.state.clone())
        .unwrap_or_else(|| UNKNOWN_STATE.to_string())
}

/// Slot name to interpreted value. Slots without one are left out.
pub fn interpreted_slots(intent: &LexIntent) -> HashMap<String, String> {
    intent
        .slots
        .iter()
        .filter_map(|(name, slot)| {
            let value = slot.as_ref()?.value.as_ref()?.interpreted_value.clone()?;
            Some((name.clone(), value))
        })
        .collect()
}

/// Renders the whole interpretations list, or `""` when Lex sent none.
pub fn render_interpretations(interpretations: Option<&[Interpretation]>) -> String {
    interpretations
        .map(|list| format!("{list:?}"))
        .unwrap_or_default()
}
