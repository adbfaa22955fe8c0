// src/message.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::services::lex::{Interpretation, LexMessage};

/// Field-level checks run on a request body after it is decoded.
pub trait Validate {
    fn validate(&self) -> Result<(), &'static str>;
}

/// Inbound chat turn. Missing fields deserialize as empty strings so that
/// validation, not JSON decoding, reports them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: String,
    pub user_id: Option<String>,
}

/// Both `message` and `session_id` must contain non-whitespace text.
impl Validate for ChatRequest {
    fn validate(&self) -> Result<(), &'static str> {
        if self.message.trim().is_empty() {
            return Err("Message cannot be empty");
        }
        if self.session_id.trim().is_empty() {
            return Err("Session ID cannot be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: String,
    pub messages: Vec<String>,
    pub session_state: String,
    pub intent: Option<String>,
    pub slots: HashMap<String, String>,
    pub interpretation_source: String,
}

impl ChatResponse {
    /// Body returned when a message could not be processed.
    pub fn processing_error() -> Self {
        Self {
            messages: vec!["Error processing your request".to_string()],
            ..Default::default()
        }
    }
}

/// Remote session state, passed through as Lex reported it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    pub messages: Vec<LexMessage>,
    pub interpretations: Vec<Interpretation>,
}
