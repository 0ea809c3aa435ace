//! Deck management for the two independent decks.
//!
//! Each deck owns its discard pile. Drawing from an empty deck shuffles
//! the pile back in with the game's `GameRng`, so supply is conserved and
//! reshuffles are reproducible from the seed.

pub mod day;
pub mod night;

pub use day::DayDeck;
pub use night::NightDeck;
