#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use lex_gateway::config::LexBotConfig;
use lex_gateway::routes::create_router;
use lex_gateway::services::lex::{
    Interpretation, LexIntent, LexMessage, LexRuntime, LexSessionState, LexSlot, LexValue,
    RecognizeTextReply, RuntimeError, SessionSnapshot,
};
use lex_gateway::state::AppState;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub fn bot() -> LexBotConfig {
    LexBotConfig {
        bot_id: "BOT123".to_string(),
        bot_alias_id: "TSTALIASID".to_string(),
        locale_id: "en_US".to_string(),
    }
}

/// In-memory bot runtime that records calls and can be told to fail.
#[derive(Default)]
pub struct FakeLexRuntime {
    pub fail: bool,
    pub reply: RecognizeTextReply,
    pub snapshot: SessionSnapshot,
    pub recognize_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    /// (bot, session id, text) of the last recognize-text call.
    pub last_recognize: Mutex<Option<(LexBotConfig, String, String)>>,
    pub last_session: Mutex<Option<String>>,
}

impl FakeLexRuntime {
    pub fn replying(reply: RecognizeTextReply) -> Self {
        Self { reply, ..Default::default() }
    }

    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self { snapshot, ..Default::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn total_calls(&self) -> usize {
        self.recognize_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
            + self.get_calls.load(Ordering::SeqCst)
    }

    fn outcome<T>(&self, value: T) -> Result<T, RuntimeError> {
        if self.fail {
            Err("AccessDeniedException: not authorized to call Lex".into())
        } else {
            Ok(value)
        }
    }
}

#[async_trait]
impl LexRuntime for FakeLexRuntime {
    async fn recognize_text(
        &self,
        bot: &LexBotConfig,
        session_id: &str,
        text: &str,
    ) -> Result<RecognizeTextReply, RuntimeError> {
        self.recognize_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_recognize.lock().unwrap() =
            Some((bot.clone(), session_id.to_string(), text.to_string()));
        self.outcome(self.reply.clone())
    }

    async fn delete_session(
        &self,
        _bot: &LexBotConfig,
        session_id: &str,
    ) -> Result<(), RuntimeError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_session.lock().unwrap() = Some(session_id.to_string());
        self.outcome(())
    }

    async fn get_session(
        &self,
        _bot: &LexBotConfig,
        session_id: &str,
    ) -> Result<SessionSnapshot, RuntimeError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_session.lock().unwrap() = Some(session_id.to_string());
        self.outcome(self.snapshot.clone())
    }
}

pub fn app(runtime: Arc<FakeLexRuntime>) -> Router {
    let state = Arc::new(AppState::new(runtime, bot()));
    create_router().with_state(state)
}

pub fn text(content: &str) -> LexMessage {
    LexMessage {
        content: Some(content.to_string()),
        content_type: "PlainText".to_string(),
        image_response_card: None,
    }
}

/// A `BookHotel` reply with one filled slot and one empty one.
pub fn booking_reply() -> RecognizeTextReply {
    let intent = LexIntent {
        name: "BookHotel".to_string(),
        state: Some("InProgress".to_string()),
        confirmation_state: None,
        slots: HashMap::from([
            (
                "City".to_string(),
                Some(LexSlot {
                    value: Some(LexValue {
                        original_value: Some("NYC".to_string()),
                        interpreted_value: Some("New York".to_string()),
                        resolved_values: vec!["New York".to_string()],
                    }),
                    ..Default::default()
                }),
            ),
            ("Nights".to_string(), None),
        ]),
    };

    RecognizeTextReply {
        messages: vec![text("Sure."), text("How many nights?")],
        session_state: Some(LexSessionState { intent: Some(intent.clone()) }),
        interpretations: Some(vec![Interpretation {
            intent: Some(intent),
            nlu_confidence: Some(0.75),
            interpretation_source: Some("Lex".to_string()),
            ..Default::default()
        }]),
    }
}

/// Shared buffer that collects formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines logged at ERROR level.
    pub fn errors(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

pub struct LogWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter(self.0.clone())
    }
}

/// Route this thread's logs into a buffer until the guard is dropped.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
