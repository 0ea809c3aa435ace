//! Owned, read-only copies of game state for presentation layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{FarmItem, NightCard};
use crate::core::{Game, GameStats, PlayChoices, Player};
use crate::rules::{Phase, Prompt, Stage};

/// One player as a renderer sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub lives: i32,
    /// Filled hand slots, in slot order.
    pub hand: Vec<FarmItem>,
    /// Farm stacks in play order.
    pub stacks: Vec<Vec<FarmItem>>,
    /// Queued night cards, head first.
    pub night_cards: Vec<NightCard>,
    pub choices: PlayChoices,
}

impl PlayerSnapshot {
    fn of(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            lives: player.lives,
            hand: player.hand.items().collect(),
            stacks: player
                .farm
                .stacks()
                .iter()
                .map(|s| s.items().to_vec())
                .collect(),
            night_cards: player.farm.night_cards().iter().copied().collect(),
            choices: player.choices,
        }
    }
}

/// Everything needed to draw the table, detached from the live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub night_num: u32,
    pub stage: Stage,
    /// Index of the player whose turn it is.
    pub current: usize,
    pub active_input_player: usize,
    pub public_cards: [Option<FarmItem>; 2],
    pub day_deck_len: usize,
    pub day_discard_len: usize,
    /// Discarded copies of each day card; cards with none are absent.
    pub day_discard: BTreeMap<FarmItem, u32>,
    pub night_deck_len: usize,
    pub night_discard_len: usize,
    /// The night discard pile, oldest first.
    pub night_discard: Vec<NightCard>,
    pub players: Vec<PlayerSnapshot>,
    pub stats: GameStats,
    pub prompt: Option<Prompt>,
}

impl GameSnapshot {
    #[must_use]
    pub fn of(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            night_num: game.night_num(),
            stage: game.stage().clone(),
            current: game.current_index(),
            active_input_player: game.active_input_player(),
            public_cards: game.public_cards(),
            day_deck_len: game.day_deck().len(),
            day_discard_len: game.day_deck().discard_len(),
            day_discard: FarmItem::ALL
                .iter()
                .map(|&item| (item, game.day_deck().discarded(item)))
                .filter(|&(_, n)| n > 0)
                .collect(),
            night_deck_len: game.night_deck().len(),
            night_discard_len: game.night_deck().discard_len(),
            night_discard: game.night_deck().discarded().collect(),
            players: game.players().iter().map(PlayerSnapshot::of).collect(),
            stats: game.stats(),
            prompt: game.pending_prompt().cloned(),
        }
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerSnapshot> {
        self.players.get(self.current)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.is_empty()
    }
}
