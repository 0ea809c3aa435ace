//! Players and their hands.
//!
//! ## Hand
//!
//! Five fixed card slots. An empty slot is `None`, never a missing entry.
//! The hand is kept compacted and sorted: filled slots come first in
//! canonical item order, so slot numbers shown to a player are stable
//! between prompts.
//!
//! ## Player
//!
//! Name, remaining lives, hand, farm and automation preferences. A player
//! at zero lives or fewer is eliminated and removed from the turn order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::PlayChoices;
use crate::cards::FarmItem;
use crate::farm::Farm;

/// Number of card slots in a hand.
pub const HAND_SIZE: usize = 5;

/// A player's hand of day cards.
///
/// ```
/// use zombie_chickens::cards::FarmItem;
/// use zombie_chickens::core::Hand;
///
/// let mut hand = Hand::from_items([FarmItem::Fuel, FarmItem::HayBale]);
/// assert_eq!(hand.get(1), Some(FarmItem::HayBale));
/// assert_eq!(hand.take(1), Some(FarmItem::HayBale));
/// assert_eq!(hand.get(1), Some(FarmItem::Fuel));
/// assert_eq!(hand.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    slots: [Option<FarmItem>; HAND_SIZE],
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from up to five items. Extra items are ignored.
    pub fn from_items(items: impl IntoIterator<Item = FarmItem>) -> Self {
        let mut hand = Self::new();
        for item in items {
            if !hand.insert(item) {
                break;
            }
        }
        hand
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots[HAND_SIZE - 1].is_some()
    }

    /// Card in 1-based slot `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<FarmItem> {
        slot.checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .copied()
            .flatten()
    }

    /// Raw slots, empty ones included.
    #[must_use]
    pub fn slots(&self) -> &[Option<FarmItem>; HAND_SIZE] {
        &self.slots
    }

    /// Filled slots in order.
    pub fn items(&self) -> impl Iterator<Item = FarmItem> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Remove and return the card in 1-based slot `slot`.
    pub fn take(&mut self, slot: usize) -> Option<FarmItem> {
        let item = slot
            .checked_sub(1)
            .and_then(|i| self.slots.get_mut(i))
            .and_then(Option::take);
        self.compact();
        item
    }

    /// Put a card in the first free slot. Returns false if the hand is full.
    pub fn insert(&mut self, item: FarmItem) -> bool {
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(slot) => {
                *slot = Some(item);
                self.compact();
                true
            }
            None => false,
        }
    }

    /// Empty the hand, returning every card it held.
    pub fn drain(&mut self) -> SmallVec<[FarmItem; HAND_SIZE]> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    /// Valid 1-based slot numbers.
    #[must_use]
    pub fn slot_choices(&self) -> SmallVec<[i32; 8]> {
        (1..=self.len() as i32).collect()
    }

    fn compact(&mut self) {
        // None sorts before Some, so sort the filled prefix explicitly.
        let mut items: SmallVec<[FarmItem; HAND_SIZE]> = self.items().collect();
        items.sort_unstable();
        self.slots = [None; HAND_SIZE];
        for (slot, item) in self.slots.iter_mut().zip(items) {
            *slot = Some(item);
        }
    }
}

/// A player in the turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub lives: i32,
    pub hand: Hand,
    pub farm: Farm,
    pub choices: PlayChoices,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, lives: i32, choices: PlayChoices) -> Self {
        Self {
            name: name.into(),
            lives,
            hand: Hand::new(),
            farm: Farm::new(),
            choices,
        }
    }

    /// Out of lives.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.lives <= 0
    }
}
