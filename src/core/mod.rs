//! Core engine types: players, state, RNG, configuration, errors.
//!
//! Everything here is rules-agnostic plumbing. The turn logic that
//! mutates `Game` lives in `rules`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, PlayChoices, DEFAULT_STARTING_LIVES, MAX_PLAYERS};
pub use error::{ChoiceError, CreateError, InvariantViolation};
pub use player::{Hand, Player, HAND_SIZE};
pub use rng::{GameRng, GameRngState};
pub use state::{CardCensus, Game, GameStats};
