//! # zombie-chickens
//!
//! Rules engine for Zombie Chickens, a 1-4 player farm-defense card game.
//!
//! Players spend the day building defensive stacks from a shared day deck,
//! then face a night of zombie chickens and events dealt from the night
//! deck. The last farm standing wins.
//!
//! ## Design Principles
//!
//! 1. **Resumable**: the game suspends whenever a player must choose and
//!    resumes exactly where it stopped. Re-advancing a suspended game
//!    re-issues the same prompt without touching state.
//!
//! 2. **Side effects once**: cards are dealt, discarded and lives lost only
//!    in input handlers, never while building a prompt.
//!
//! 3. **Conserved cards**: nothing is created or destroyed after setup,
//!    which `Game::check_invariants` verifies.
//!
//! 4. **Deterministic**: one seed fixes every shuffle, and a bincode
//!    checkpoint restores a game mid-prompt.
//!
//! ## Modules
//!
//! - `cards`: farm items, zombies, events, night cards
//! - `core`: players, game state, RNG, configuration, errors
//! - `decks`: the day and night decks with their discard piles
//! - `farm`: stacks, placement and defense resolution
//! - `rules`: the turn state machine
//! - `session`: the facade presentation layers drive
//! - `render`: text rendering and input sources

pub mod cards;
pub mod core;
pub mod decks;
pub mod farm;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{EventKind, FarmItem, NightCard, ZombieKind, ZombieTrait};

pub use crate::core::{
    ChoiceError, CreateError, Game, GameConfig, GameRng, GameStats, InvariantViolation,
    PlayChoices, Player,
};

pub use crate::farm::{Farm, PlacementOutcome, Stack, StackShape};

pub use crate::rules::{InputContext, Progress, Prompt, RenderHint, Stage};

pub use crate::session::{GameSession, GameSnapshot, SharedSession};

pub use crate::render::{drive, DriveOutcome, InputSource, Renderer, TextRenderer};
