//! Display events emitted by the round controller
//!
//! The game engine never formats text. It reports what happened as a
//! [`GameEvent`] and lets an [`EventSink`] decide how to present it.

use crate::core::{Code, Score, ValidationError};
use serde::{Deserialize, Serialize};

/// Something the player should be told about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Game start greeting
    Welcome,
    /// Waiting for a guess for this round
    Prompt { round: u32 },
    /// The last line was rejected; the round is not consumed
    InvalidInput { reason: ValidationError },
    /// Feedback for a valid, non-winning guess
    RoundResult { well_placed: u8, misplaced: u8 },
    /// The secret was found
    Won,
    /// No attempts left
    Exhausted { secret: Code },
}

impl GameEvent {
    pub fn round_result(score: Score) -> Self {
        GameEvent::RoundResult {
            well_placed: score.well_placed,
            misplaced: score.misplaced,
        }
    }

    /// Outcome events are kept even at minimal verbosity
    pub fn is_outcome(&self) -> bool {
        matches!(self, GameEvent::Won | GameEvent::Exhausted { .. })
    }
}

/// Receiver for game events (terminal printer, test recorder, ...)
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Collects events in order, for tests and replays
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
