// src/config/mod.rs
pub mod env_file;

pub use env_file::{ENV_FILE, EnvEntry, EnvOverlay};

use thiserror::Error;

pub const BOT_ID: &str = "aws.lex.bot.id";
pub const BOT_ALIAS_ID: &str = "aws.lex.bot.alias.id";
pub const LOCALE_ID: &str = "aws.lex.locale.id";
pub const REGION: &str = "aws.region";
pub const SERVER_ADDRESS: &str = "server.address";
pub const SERVER_PORT: &str = "server.port";

const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration value `{0}`")]
    Missing(&'static str),
    #[error("could not resolve placeholder `${{{placeholder}}}` in `{key}`")]
    UnresolvedPlaceholder { key: &'static str, placeholder: String },
    #[error("invalid port `{0}`")]
    InvalidPort(String),
}

/// Fixed identifiers sent with every Lex call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexBotConfig {
    pub bot_id: String,
    pub bot_alias_id: String,
    pub locale_id: String,
}

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub lex: LexBotConfig,
    /// Overrides the region from the AWS default provider chain.
    pub region: Option<String>,
    pub address: String,
    pub port: u16,
}

impl AppConfig {
    /// Resolve against the overlay and the process environment.
    pub fn from_env(overlay: &EnvOverlay) -> Result<Self, ConfigError> {
        Self::resolve(overlay, |key| std::env::var(key).ok())
    }

    /// Resolve against the overlay and an arbitrary environment lookup.
    pub fn resolve<F>(overlay: &EnvOverlay, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Source { overlay, env };

        let lex = LexBotConfig {
            bot_id: source.required(BOT_ID)?,
            bot_alias_id: source.required(BOT_ALIAS_ID)?,
            locale_id: source.required(LOCALE_ID)?,
        };

        let port = match source.optional(SERVER_PORT)? {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            lex,
            region: source.optional(REGION)?,
            address: source
                .optional(SERVER_ADDRESS)?
                .unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

struct Source<'a, F> {
    overlay: &'a EnvOverlay,
    env: F,
}

impl<F> Source<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Overlay first, then environment; dotted keys also match their
    /// upper-snake form (`aws.lex.bot.id` -> `AWS_LEX_BOT_ID`).
    fn lookup(&self, key: &str) -> Option<String> {
        let relaxed = relaxed_name(key);
        self.overlay
            .get(key)
            .map(str::to_string)
            .or_else(|| (self.env)(key))
            .or_else(|| self.overlay.get(&relaxed).map(str::to_string))
            .or_else(|| (self.env)(&relaxed))
    }

    fn optional(&self, key: &'static str) -> Result<Option<String>, ConfigError> {
        match self.lookup(key) {
            Some(raw) => {
                let value = self.substitute(key, &raw)?;
                Ok((!value.trim().is_empty()).then_some(value))
            }
            None => Ok(None),
        }
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.optional(key)?.ok_or(ConfigError::Missing(key))
    }

    /// Replace `${NAME}` and `${NAME:default}` placeholders. Resolved values
    /// are not scanned again.
    fn substitute(&self, key: &'static str, input: &str) -> Result<String, ConfigError> {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '$' || chars.peek() != Some(&'{') {
                result.push(ch);
                continue;
            }
            chars.next(); // consume '{'

            let mut placeholder = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                placeholder.push(c);
            }

            if !closed || placeholder.is_empty() {
                // Malformed, emit literal.
                result.push_str("${");
                result.push_str(&placeholder);
                if closed {
                    result.push('}');
                }
                continue;
            }

            let (name, default) = match placeholder.split_once(':') {
                Some((name, default)) => (name, Some(default)),
                None => (placeholder.as_str(), None),
            };

            match self.lookup(name).or_else(|| default.map(str::to_string)) {
                Some(value) => result.push_str(&value),
                None => {
                    return Err(ConfigError::UnresolvedPlaceholder { key, placeholder });
                }
            }
        }

        Ok(result)
    }
}

fn relaxed_name(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
