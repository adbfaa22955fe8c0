// src/services/lex/mod.rs
pub mod aws;
pub mod types;

pub use aws::AwsLexRuntime;
pub use types::*;

use async_trait::async_trait;

use crate::config::LexBotConfig;

/// Failure reported by the runtime, whatever its kind.
pub type RuntimeError = Box<dyn std::error::Error + Send + Sync>;

/// The remote Lex V2 bot runtime. Implementations must be shareable across
/// concurrent requests.
#[async_trait]
pub trait LexRuntime: Send + Sync {
    async fn recognize_text(
        &self,
        bot: &LexBotConfig,
        session_id: &str,
        text: &str,
    ) -> Result<RecognizeTextReply, RuntimeError>;

    async fn delete_session(
        &self,
        bot: &LexBotConfig,
        session_id: &str,
    ) -> Result<(), RuntimeError>;

    async fn get_session(
        &self,
        bot: &LexBotConfig,
        session_id: &str,
    ) -> Result<SessionSnapshot, RuntimeError>;
}
