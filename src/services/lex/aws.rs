// src/services/lex/aws.rs
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_lexruntimev2::{Client, config::Region, types as sdk};

use super::{
    CardButton, ImageResponseCard, Interpretation, LexIntent, LexMessage, LexRuntime,
    LexSessionState, LexSlot, LexValue, RecognizeTextReply, RuntimeError, SentimentResponse,
    SentimentScore, SessionSnapshot,
};
use crate::config::LexBotConfig;

/// [`LexRuntime`] backed by the AWS SDK. The client is cheap to clone and
/// safe to share between requests.
#[derive(Debug, Clone)]
pub struct AwsLexRuntime {
    client: Client,
}

impl AwsLexRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS provider chain, optionally
    /// pinning the region.
    pub async fn from_env(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl LexRuntime for AwsLexRuntime {
    async fn recognize_text(
        &self,
        bot: &LexBotConfig,
        session_id: &str,
        text: &str,
    ) -> Result<RecognizeTextReply, RuntimeError> {
        let output = self
            .client
            .recognize_text()
            .bot_id(&bot.bot_id)
            .bot_alias_id(&bot.bot_alias_id)
            .locale_id(&bot.locale_id)
            .session_id(session_id)
            .text(text)
            .send()
            .await
            .map_err(aws_sdk_lexruntimev2::Error::from)?;

        // The SDK reports an absent list as empty.
        let interpretations = output.interpretations();

        Ok(RecognizeTextReply {
            messages: output.messages().iter().map(message).collect(),
            session_state: output.session_state().map(session_state),
            interpretations: (!interpretations.is_empty())
                .then(|| interpretations.iter().map(interpretation).collect()),
        })
    }

    async fn delete_session(
        &self,
        bot: &LexBotConfig,
        session_id: &str,
    ) -> Result<(), RuntimeError> {
        self.client
            .delete_session()
            .bot_id(&bot.bot_id)
            .bot_alias_id(&bot.bot_alias_id)
            .locale_id(&bot.locale_id)
            .session_id(session_id)
            .send()
            .await
            .map_err(aws_sdk_lexruntimev2::Error::from)?;
        Ok(())
    }

    async fn get_session(
        &self,
        bot: &LexBotConfig,
        session_id: &str,
    ) -> Result<SessionSnapshot, RuntimeError> {
        let output = self
            .client
            .get_session()
            .bot_id(&bot.bot_id)
            .bot_alias_id(&bot.bot_alias_id)
            .locale_id(&bot.locale_id)
            .session_id(session_id)
            .send()
            .await
            .map_err(aws_sdk_lexruntimev2::Error::from)?;

        Ok(SessionSnapshot {
            session_id: output.session_id().map(str::to_string),
            messages: output.messages().iter().map(message).collect(),
            interpretations: output.interpretations().iter().map(interpretation).collect(),
        })
    }
}

fn message(m: &sdk::Message) -> LexMessage {
    LexMessage {
        content: m.content().map(str::to_string),
        content_type: m.content_type().as_str().to_string(),
        image_response_card: m.image_response_card().map(image_response_card),
    }
}

fn image_response_card(c: &sdk::ImageResponseCard) -> ImageResponseCard {
    ImageResponseCard {
        title: c.title().to_string(),
        subtitle: c.subtitle().map(str::to_string),
        image_url: c.image_url().map(str::to_string),
        buttons: c
            .buttons()
            .iter()
            .map(|b| CardButton {
                text: b.text().to_string(),
                value: b.value().to_string(),
            })
            .collect(),
    }
}

fn session_state(s: &sdk::SessionState) -> LexSessionState {
    LexSessionState { intent: s.intent().map(intent) }
}

fn intent(i: &sdk::Intent) -> LexIntent {
    let slots = i
        .slots()
        .map(|slots| {
            slots
                .iter()
                .map(|(name, s)| (name.clone(), Some(slot(s))))
                .collect()
        })
        .unwrap_or_default();

    LexIntent {
        name: i.name().to_string(),
        state: i.state().map(|s| s.as_str().to_string()),
        confirmation_state: i.confirmation_state().map(|s| s.as_str().to_string()),
        slots,
    }
}

fn slot(s: &sdk::Slot) -> LexSlot {
    LexSlot {
        value: s.value().map(|v| LexValue {
            original_value: v.original_value().map(str::to_string),
            interpreted_value: Some(v.interpreted_value().to_string()),
            resolved_values: v.resolved_values().to_vec(),
        }),
        shape: s.shape().map(|shape| shape.as_str().to_string()),
        values: s.values().iter().map(slot).collect(),
    }
}

fn interpretation(i: &sdk::Interpretation) -> Interpretation {
    Interpretation {
        intent: i.intent().map(intent),
        nlu_confidence: i.nlu_confidence().map(|c| c.score()),
        sentiment_response: i.sentiment_response().map(|r| SentimentResponse {
            sentiment: r.sentiment().map(|s| s.as_str().to_string()),
            sentiment_score: r.sentiment_score().map(|score| SentimentScore {
                positive: score.positive(),
                negative: score.negative(),
                neutral: score.neutral(),
                mixed: score.mixed(),
            }),
        }),
        interpretation_source: i.interpretation_source().map(|s| s.as_str().to_string()),
    }
}
