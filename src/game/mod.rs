//! Configuration, round state machine and its input/output collaborators

pub mod config;
pub mod events;
pub mod logger;
pub mod round;
pub mod source;

pub use config::{
    parse_attempt_limit, ConfigError, GameConfig, GameOptions, DEFAULT_ATTEMPT_LIMIT,
    FIRST_ROUND,
};
pub use events::{EventSink, GameEvent};
pub use logger::{GameLogger, OutputFormat, OutputMode, VerbosityLevel};
pub use round::{play, GameEndReason, GameResult, RoundController, RoundState};
pub use source::{GuessSource, LineSource, ScriptedSource};
