//! Resumption state: where in the turn the game currently stands.
//!
//! Each sub-stage carries exactly the scratch data needed to resume it, so
//! a suspended game can be re-advanced (or checkpointed and restored)
//! without recomputing anything from state that may have moved on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{EventKind, FarmItem, ZombieKind};

/// Part of the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Morning,
    Afternoon,
    Night,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// The current sub-stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Day(DayStage),
    Night(NightStage),
}

/// Sub-stages of one player's day turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStage {
    /// Optionally swap one hand card for a fresh draw.
    OptionalDiscard,
    /// Play the first card.
    Play1,
    /// First card left the hand but needs a stack.
    Play1Stack {
        item: FarmItem,
        candidates: SmallVec<[usize; 4]>,
    },
    /// Play the second card.
    Play2,
    /// Second card left the hand but needs a stack.
    Play2Stack {
        item: FarmItem,
        candidates: SmallVec<[usize; 4]>,
    },
    /// Refill the hand from the public pair or the deck.
    Draw,
}

/// Sub-stages of the night.
///
/// Every stage after `ProcessCards` refers to the head card of the current
/// player's queue, which stays queued until the stage resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NightStage {
    /// Deal night cards to every farm.
    Deal,
    /// Pick the next card to resolve.
    ProcessCards,
    /// A free defense kills the zombie; confirm only.
    ZombieAutoKilled { zombie: ZombieKind, stack: usize },
    /// Nothing on the farm can stop the zombie.
    NoDefense { zombie: ZombieKind },
    /// Pick a defending stack or take the hit.
    ChooseDefense {
        zombie: ZombieKind,
        candidates: SmallVec<[usize; 4]>,
    },
    /// An exploding zombie is about to destroy `stack`; spend a shield?
    ChooseShield { zombie: ZombieKind, stack: usize },
    /// The zombie gets through; confirm the life loss.
    ConfirmLifeLoss { zombie: ZombieKind },
    /// `player` is out of lives; confirm removal.
    Eliminated { player: usize },
    /// Show the event text before it runs.
    EventConfirm { event: EventKind },
    /// Collect farm discards for a discard event.
    EventDiscard {
        event: EventKind,
        progress: DiscardProgress,
    },
}

/// Position within a discard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardProgress {
    /// Offset from the drawing player, in turn order.
    pub player_offset: usize,
    /// Items this player still has to discard.
    pub remaining: u8,
}

/// Progress through the current round of night cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NightRound {
    /// Players still to visit this round.
    pub remaining: usize,
    /// Whether any card was resolved this round.
    pub progressed: bool,
}

impl NightRound {
    #[must_use]
    pub fn start(players: usize) -> Self {
        Self {
            remaining: players,
            progressed: false,
        }
    }
}

impl Stage {
    /// Where every day begins.
    pub const START: Stage = Stage::Day(DayStage::OptionalDiscard);

    /// Short name for logs and displays.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Day(DayStage::OptionalDiscard) => "OptionalDiscard",
            Stage::Day(DayStage::Play1) => "Play1",
            Stage::Day(DayStage::Play1Stack { .. }) => "Play1Stack",
            Stage::Day(DayStage::Play2) => "Play2",
            Stage::Day(DayStage::Play2Stack { .. }) => "Play2Stack",
            Stage::Day(DayStage::Draw) => "Draw",
            Stage::Night(NightStage::Deal) => "Deal",
            Stage::Night(NightStage::ProcessCards) => "ProcessCards",
            Stage::Night(NightStage::ZombieAutoKilled { .. }) => "ZombieAutoKilled",
            Stage::Night(NightStage::NoDefense { .. }) => "NoDefense",
            Stage::Night(NightStage::ChooseDefense { .. }) => "ChooseDefense",
            Stage::Night(NightStage::ChooseShield { .. }) => "ChooseShield",
            Stage::Night(NightStage::ConfirmLifeLoss { .. }) => "ConfirmLifeLoss",
            Stage::Night(NightStage::Eliminated { .. }) => "Eliminated",
            Stage::Night(NightStage::EventConfirm { .. }) => "EventConfirm",
            Stage::Night(NightStage::EventDiscard { .. }) => "EventDiscard",
        }
    }

    /// Whether this stage suspends for input rather than running itself.
    #[must_use]
    pub fn takes_input(&self) -> bool {
        !matches!(
            self,
            Stage::Night(NightStage::Deal) | Stage::Night(NightStage::ProcessCards)
        )
    }

    /// A card held between leaving the hand and landing on a farm.
    #[must_use]
    pub fn held_item(&self) -> Option<FarmItem> {
        match self {
            Stage::Day(DayStage::Play1Stack { item, .. } | DayStage::Play2Stack { item, .. }) => {
                Some(*item)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
