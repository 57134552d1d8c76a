//! my-mastermind - a terminal code-breaking game
//!
//! A secret of four distinct digits from `0`..`8` is drawn (or given), and
//! the player guesses until every digit is well placed or the attempt limit
//! runs out. The engine is split into the pure core (codes, scoring,
//! generation) and the game layer (configuration, the round state machine
//! and the collaborators that feed it lines and display its events).

pub mod core;
pub mod error;
pub mod game;

pub use error::{MastermindError, Result};
