//! Round controller
//!
//! Drives one game: prompt, read a line, validate, score, decide. Invalid
//! input is answered with [`GameEvent::InvalidInput`] and the same round is
//! asked again without consuming an attempt. A win ends the game at once;
//! otherwise the game ends when the attempt limit is used up or the input
//! runs dry.

use crate::core::{score, Code, Score};
use crate::game::config::{GameConfig, FIRST_ROUND};
use crate::game::events::{EventSink, GameEvent};
use crate::game::source::GuessSource;
use serde::{Deserialize, Serialize};

/// Where the controller currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for a guess for the given round number
    AwaitingInput(u32),
    /// A valid guess was scored; the outcome is decided on the next step
    Scored(Score),
    /// The secret was found
    Won,
    /// The attempt limit was reached
    Exhausted,
    /// Input ended before the game did
    AbortedEarly,
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RoundState::Won | RoundState::Exhausted | RoundState::AbortedEarly
        )
    }
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    Won,
    Exhausted,
    AbortedEarly,
}

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Why the game ended
    pub end_reason: GameEndReason,
    /// Valid guesses scored, including a winning one
    pub attempts_used: u32,
    /// The secret of this game
    pub secret: Code,
}

/// State machine for one game
pub struct RoundController<'a> {
    config: &'a GameConfig,
    state: RoundState,
    /// Valid guesses scored so far
    attempts_used: u32,
    /// Lines rejected by validation
    rejected_inputs: u32,
}

impl<'a> RoundController<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        RoundController {
            config,
            state: RoundState::AwaitingInput(FIRST_ROUND),
            attempts_used: 0,
            rejected_inputs: 0,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn rejected_inputs(&self) -> u32 {
        self.rejected_inputs
    }

    /// Perform a single transition and return the new state
    ///
    /// `AwaitingInput` blocks on `source` for one line. Terminal states are
    /// left unchanged.
    pub fn step(&mut self, source: &mut dyn GuessSource, sink: &mut dyn EventSink) -> RoundState {
        self.state = match self.state {
            RoundState::AwaitingInput(round) => {
                sink.emit(&GameEvent::Prompt { round });
                match source.next_line() {
                    None => RoundState::AbortedEarly,
                    Some(line) => match Code::parse(&line) {
                        Ok(guess) => RoundState::Scored(score(self.config.secret(), &guess)),
                        Err(reason) => {
                            self.rejected_inputs = self.rejected_inputs.saturating_add(1);
                            sink.emit(&GameEvent::InvalidInput { reason });
                            RoundState::AwaitingInput(round)
                        }
                    },
                }
            }
            RoundState::Scored(result) => {
                self.attempts_used += 1;
                if result.is_win() {
                    sink.emit(&GameEvent::Won);
                    RoundState::Won
                } else {
                    sink.emit(&GameEvent::round_result(result));
                    if self.attempts_used >= self.config.attempt_limit().get() {
                        sink.emit(&GameEvent::Exhausted {
                            secret: *self.config.secret(),
                        });
                        RoundState::Exhausted
                    } else {
                        RoundState::AwaitingInput(FIRST_ROUND + self.attempts_used)
                    }
                }
            }
            terminal => terminal,
        };
        self.state
    }

    /// Run until a terminal state is reached
    pub fn run(&mut self, source: &mut dyn GuessSource, sink: &mut dyn EventSink) -> GameResult {
        while !self.state.is_terminal() {
            self.step(source, sink);
        }

        let end_reason = match self.state {
            RoundState::Won => GameEndReason::Won,
            RoundState::Exhausted => GameEndReason::Exhausted,
            _ => GameEndReason::AbortedEarly,
        };

        GameResult {
            end_reason,
            attempts_used: self.attempts_used,
            secret: *self.config.secret(),
        }
    }
}

/// Greet the player and play a whole game
pub fn play(
    config: &GameConfig,
    source: &mut dyn GuessSource,
    sink: &mut dyn EventSink,
) -> GameResult {
    sink.emit(&GameEvent::Welcome);
    RoundController::new(config).run(source, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;
    use crate::game::source::ScriptedSource;
    use std::num::NonZeroU32;

    fn config(secret: &str, limit: u32) -> GameConfig {
        GameConfig::new(
            Code::parse(secret).unwrap(),
            NonZeroU32::new(limit).unwrap(),
        )
    }

    #[test]
    fn test_initial_state() {
        let config = config("0123", 10);
        let controller = RoundController::new(&config);
        assert_eq!(controller.state(), RoundState::AwaitingInput(FIRST_ROUND));
        assert_eq!(controller.attempts_used(), 0);
    }

    #[test]
    fn test_invalid_input_keeps_round() {
        let config = config("0123", 10);
        let mut controller = RoundController::new(&config);
        let mut source = ScriptedSource::new(["12", "1123", "abcd"]);
        let mut events: Vec<GameEvent> = Vec::new();

        for _ in 0..3 {
            let state = controller.step(&mut source, &mut events);
            assert_eq!(state, RoundState::AwaitingInput(0));
        }
        assert_eq!(controller.attempts_used(), 0);
        assert_eq!(controller.rejected_inputs(), 3);
        assert_eq!(
            events[1],
            GameEvent::InvalidInput {
                reason: ValidationError::WrongLength { len: 2 }
            }
        );
    }

    #[test]
    fn test_rejected_input_count_saturates() {
        let config = config("0123", 10);
        let mut controller = RoundController::new(&config);
        controller.rejected_inputs = u32::MAX;
        let mut events: Vec<GameEvent> = Vec::new();

        let state = controller.step(&mut ScriptedSource::new(["bad"]), &mut events);
        assert_eq!(state, RoundState::AwaitingInput(0));
        assert_eq!(controller.rejected_inputs(), u32::MAX);
    }

    #[test]
    fn test_scored_then_next_round() {
        let config = config("0123", 10);
        let mut controller = RoundController::new(&config);
        let mut source = ScriptedSource::new(["1023"]);
        let mut events: Vec<GameEvent> = Vec::new();

        assert_eq!(
            controller.step(&mut source, &mut events),
            RoundState::Scored(Score::new(2, 2))
        );
        assert_eq!(
            controller.step(&mut source, &mut events),
            RoundState::AwaitingInput(1)
        );
        assert_eq!(
            events,
            vec![
                GameEvent::Prompt { round: 0 },
                GameEvent::RoundResult {
                    well_placed: 2,
                    misplaced: 2
                },
            ]
        );
    }

    #[test]
    fn test_win_short_circuits() {
        let config = config("0123", 1);
        let mut controller = RoundController::new(&config);
        let mut source = ScriptedSource::new(["0123", "4567"]);
        let mut events: Vec<GameEvent> = Vec::new();

        let result = controller.run(&mut source, &mut events);
        assert_eq!(result.end_reason, GameEndReason::Won);
        assert_eq!(result.attempts_used, 1);
        assert_eq!(events.last(), Some(&GameEvent::Won));
        // The extra line is never read
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_exhausted_after_limit() {
        let config = config("0123", 3);
        let mut controller = RoundController::new(&config);
        let mut source = ScriptedSource::new(["4567", "bad", "4568", "4578", "0123"]);
        let mut events: Vec<GameEvent> = Vec::new();

        let result = controller.run(&mut source, &mut events);
        assert_eq!(result.end_reason, GameEndReason::Exhausted);
        assert_eq!(result.attempts_used, 3);
        assert_eq!(controller.rejected_inputs(), 1);
        assert_eq!(
            events.last(),
            Some(&GameEvent::Exhausted {
                secret: Code::parse("0123").unwrap()
            })
        );
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_end_of_input_aborts() {
        let config = config("0123", 10);
        let mut controller = RoundController::new(&config);
        let mut source = ScriptedSource::default();
        let mut events: Vec<GameEvent> = Vec::new();

        let result = controller.run(&mut source, &mut events);
        assert_eq!(result.end_reason, GameEndReason::AbortedEarly);
        assert_eq!(result.attempts_used, 0);
        assert_eq!(events, vec![GameEvent::Prompt { round: 0 }]);
    }

    #[test]
    fn test_terminal_state_is_sticky() {
        let config = config("0123", 10);
        let mut controller = RoundController::new(&config);
        let mut events: Vec<GameEvent> = Vec::new();
        controller.run(&mut ScriptedSource::new(["0123"]), &mut events);

        let before = events.len();
        let mut source = ScriptedSource::new(["4567"]);
        assert_eq!(controller.step(&mut source, &mut events), RoundState::Won);
        assert_eq!(events.len(), before);
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_play_greets_first() {
        let config = config("0123", 10);
        let mut events: Vec<GameEvent> = Vec::new();
        let result = play(&config, &mut ScriptedSource::new(["0123"]), &mut events);
        assert_eq!(result.end_reason, GameEndReason::Won);
        assert_eq!(events.first(), Some(&GameEvent::Welcome));
    }
}
