// src/services/lex/types.rs
//! Crate-owned mirrors of the Lex V2 runtime shapes the gateway reads.
//!
//! Only the fields the gateway maps or passes through are kept. Absent remote
//! values stay `None` so the mapping can tell "missing" from "empty".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexMessage {
    pub content: Option<String>,
    pub content_type: String,
    pub image_response_card: Option<ImageResponseCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponseCard {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub buttons: Vec<CardButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardButton {
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexValue {
    pub original_value: Option<String>,
    pub interpreted_value: Option<String>,
    #[serde(default)]
    pub resolved_values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexSlot {
    pub value: Option<LexValue>,
    /// `Scalar` or `List`.
    pub shape: Option<String>,
    /// Entries of a list-shaped slot.
    #[serde(default)]
    pub values: Vec<LexSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexIntent {
    pub name: String,
    /// e.g. `InProgress`, `ReadyForFulfillment`, `Fulfilled`.
    pub state: Option<String>,
    pub confirmation_state: Option<String>,
    /// Lex reports unfilled slots with a null value.
    #[serde(default)]
    pub slots: HashMap<String, Option<LexSlot>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexSessionState {
    pub intent: Option<LexIntent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub intent: Option<LexIntent>,
    pub nlu_confidence: Option<f64>,
    pub sentiment_response: Option<SentimentResponse>,
    /// `Lex` or `Bedrock`.
    pub interpretation_source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResponse {
    pub sentiment: Option<String>,
    pub sentiment_score: Option<SentimentScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub mixed: f64,
}

/// Reply to a recognize-text call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognizeTextReply {
    pub messages: Vec<LexMessage>,
    pub session_state: Option<LexSessionState>,
    pub interpretations: Option<Vec<Interpretation>>,
}

/// Reply to a get-session call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub session_id: Option<String>,
    pub messages: Vec<LexMessage>,
    pub interpretations: Vec<Interpretation>,
}
