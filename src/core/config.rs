//! Game configuration types.
//!
//! - `PlayChoices`: per-player automation that suppresses unambiguous prompts
//! - `GameConfig`: seed, starting lives and debug rigging for a new game
//!
//! Configuration is fixed at creation except for `PlayChoices`, which a
//! player may change at any time through the session.

use serde::{Deserialize, Serialize};

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 4;

/// Starting lives indexed by player count minus one.
pub const DEFAULT_STARTING_LIVES: [i32; MAX_PLAYERS] = [5, 5, 4, 4];

/// Per-player automation preferences.
///
/// When a flag is on, the farm places a card by its tie-break rule instead
/// of asking which stack to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayChoices {
    /// Load ammo into the emptiest shotgun without asking.
    pub autoload_shotgun: bool,
    /// Add hay bales to the fullest incomplete wall without asking.
    pub auto_build_hay_wall: bool,
}

impl PlayChoices {
    /// Every placement decision is left to the player.
    pub const MANUAL: PlayChoices = PlayChoices {
        autoload_shotgun: false,
        auto_build_hay_wall: false,
    };

    #[must_use]
    pub const fn new(autoload_shotgun: bool, auto_build_hay_wall: bool) -> Self {
        Self {
            autoload_shotgun,
            auto_build_hay_wall,
        }
    }
}

impl Default for PlayChoices {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Complete configuration for a new game.
///
/// ```
/// use zombie_chickens::core::{GameConfig, PlayChoices};
///
/// let config = GameConfig::new(42)
///     .with_default_choices(PlayChoices::MANUAL)
///     .with_starting_lives([3, 3, 2, 2]);
/// assert_eq!(config.lives_for(2), Some(3));
/// assert_eq!(config.lives_for(5), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every deck shuffle in the game.
    pub seed: u64,

    /// Automation preferences every player starts with.
    pub default_choices: PlayChoices,

    /// Starting lives by player count (index 0 is a solo game).
    pub starting_lives: [i32; MAX_PLAYERS],

    /// Reorder the night deck so events come first (Blood Moon, Winter
    /// Solstice, the other events, then zombies). Debug rigging only.
    pub events_on_top: bool,
}

impl GameConfig {
    /// Create a configuration with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            default_choices: PlayChoices::default(),
            starting_lives: DEFAULT_STARTING_LIVES,
            events_on_top: false,
        }
    }

    /// Set the automation every player starts with.
    #[must_use]
    pub fn with_default_choices(mut self, choices: PlayChoices) -> Self {
        self.default_choices = choices;
        self
    }

    /// Override the starting-lives table.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: [i32; MAX_PLAYERS]) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Put events on top of the night deck.
    #[must_use]
    pub fn events_on_top(mut self) -> Self {
        self.events_on_top = true;
        self
    }

    /// Starting lives for a game with `player_count` players.
    #[must_use]
    pub fn lives_for(&self, player_count: usize) -> Option<i32> {
        player_count
            .checked_sub(1)
            .and_then(|i| self.starting_lives.get(i))
            .copied()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lives_table() {
        let config = GameConfig::default();
        assert_eq!(config.lives_for(0), None);
        assert_eq!(config.lives_for(1), Some(5));
        assert_eq!(config.lives_for(2), Some(5));
        assert_eq!(config.lives_for(3), Some(4));
        assert_eq!(config.lives_for(4), Some(4));
        assert_eq!(config.lives_for(5), None);
    }

    #[test]
    fn test_play_choices_default_on() {
        let choices = PlayChoices::default();
        assert!(choices.autoload_shotgun);
        assert!(choices.auto_build_hay_wall);
        assert_ne!(choices, PlayChoices::MANUAL);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(9).events_on_top();
        assert_eq!(config.seed, 9);
        assert!(config.events_on_top);
    }
}
