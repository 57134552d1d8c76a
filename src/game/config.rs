//! Game configuration
//!
//! Options arrive loosely typed from the command line. Resolving them never
//! fails: a bad secret falls back to a generated one and a bad attempt limit
//! falls back to [`DEFAULT_ATTEMPT_LIMIT`]. Each fallback is reported so the
//! caller can log it.

use crate::core::{Code, CodeGenerator, ValidationError};
use std::num::NonZeroU32;
use thiserror::Error;

/// Attempts allowed when none (or a non-positive number) is configured
pub const DEFAULT_ATTEMPT_LIMIT: NonZeroU32 = match NonZeroU32::new(10) {
    Some(limit) => limit,
    None => panic!("default attempt limit must be positive"),
};

/// Number shown for the first round
pub const FIRST_ROUND: u32 = 0;

/// Read an attempt limit the way C's `atoi` does
///
/// Leading whitespace and one sign are accepted, then digits are read until
/// the first non-digit. Text with no leading digits reads as 0, which the
/// resolver then rejects as non-positive. Huge values saturate.
pub fn parse_attempt_limit(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Raw options as supplied by the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOptions {
    /// Secret given with `-c`
    pub explicit_secret: Option<String>,
    /// Limit given with `-t`
    pub attempt_limit: Option<i64>,
}

/// A rejected option and the fallback that replaced it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("secret '{value}' rejected ({reason}), generating one instead")]
    InvalidSecret {
        value: String,
        reason: ValidationError,
    },

    #[error("attempt limit {0} is not positive, using {}", DEFAULT_ATTEMPT_LIMIT)]
    NonPositiveAttempts(i64),
}

/// Immutable settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    secret: Code,
    attempt_limit: NonZeroU32,
}

impl GameConfig {
    pub fn new(secret: Code, attempt_limit: NonZeroU32) -> Self {
        GameConfig {
            secret,
            attempt_limit,
        }
    }

    /// Resolve raw options, drawing a secret from `generator` when needed
    ///
    /// Returns the config together with every fallback that was applied.
    /// The generator is only consulted when no valid secret was given.
    pub fn resolve(
        options: &GameOptions,
        generator: &mut CodeGenerator,
    ) -> (GameConfig, Vec<ConfigError>) {
        let mut fallbacks = Vec::new();

        let explicit = options
            .explicit_secret
            .as_deref()
            .and_then(|value| match Code::parse(value) {
                Ok(code) => Some(code),
                Err(reason) => {
                    fallbacks.push(ConfigError::InvalidSecret {
                        value: value.to_string(),
                        reason,
                    });
                    None
                }
            });
        let secret = explicit.unwrap_or_else(|| generator.generate());

        let attempt_limit = match options.attempt_limit {
            None => DEFAULT_ATTEMPT_LIMIT,
            Some(n) => match u32::try_from(n).ok().and_then(NonZeroU32::new) {
                Some(limit) => limit,
                None if n > 0 => NonZeroU32::MAX,
                None => {
                    fallbacks.push(ConfigError::NonPositiveAttempts(n));
                    DEFAULT_ATTEMPT_LIMIT
                }
            },
        };

        (GameConfig::new(secret, attempt_limit), fallbacks)
    }

    pub fn secret(&self) -> &Code {
        &self.secret
    }

    pub fn attempt_limit(&self) -> NonZeroU32 {
        self.attempt_limit
    }
}
