//! The day deck: farm items drawn into hands and the public pair.

use im::Vector;
use log::{trace, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::FarmItem;
use crate::core::GameRng;

/// Day deck plus its discard pile.
///
/// Discards are kept as per-item counts; order is irrelevant because the
/// pile is always shuffled back in as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDeck {
    cards: Vector<FarmItem>,
    discarded: FxHashMap<FarmItem, u32>,
}

impl DayDeck {
    /// A complete shuffled deck with an empty discard pile.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut cards: Vec<FarmItem> = FarmItem::ALL
            .iter()
            .flat_map(|&item| std::iter::repeat(item).take(item.deck_count() as usize))
            .collect();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
            discarded: FxHashMap::default(),
        }
    }

    /// Deck with an exact card order, front first. Used to rig games.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = FarmItem>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            discarded: FxHashMap::default(),
        }
    }

    /// Draw the front card.
    ///
    /// The discard pile is shuffled back in when the deck is empty, or
    /// right after the last card is taken. Returns `None` only when every
    /// day card is in play.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<FarmItem> {
        if self.cards.is_empty() {
            self.refill(rng);
        }
        let card = self.cards.pop_front();
        if self.cards.is_empty() {
            self.refill(rng);
        }
        match card {
            Some(item) => trace!("drew day card {}", item.name()),
            None => warn!("day deck and discard pile are both empty"),
        }
        card
    }

    /// Add a card to the discard pile.
    pub fn discard(&mut self, item: FarmItem) {
        *self.discarded.entry(item).or_insert(0) += 1;
    }

    /// Pull one copy of `item` out of the deck, or the discard pile if the
    /// deck has none. Used to rig games without breaking conservation.
    pub fn take(&mut self, item: FarmItem) -> bool {
        if let Some(at) = self.cards.iter().position(|&c| c == item) {
            self.cards.remove(at);
            return true;
        }
        match self.discarded.get_mut(&item) {
            Some(n) if *n > 0 => {
                *n -= 1;
                if *n == 0 {
                    self.discarded.remove(&item);
                }
                true
            }
            _ => false,
        }
    }

    /// Shuffle the discard pile into the deck.
    pub fn refill(&mut self, rng: &mut GameRng) {
        if self.discarded.is_empty() {
            return;
        }
        // Canonical order keeps the shuffle independent of map layout.
        let mut cards: Vec<FarmItem> = self.cards.iter().copied().collect();
        for item in FarmItem::ALL {
            let n = self.discarded.get(&item).copied().unwrap_or(0);
            cards.extend(std::iter::repeat(item).take(n as usize));
        }
        rng.shuffle(&mut cards);
        trace!("reshuffled day deck to {} cards", cards.len());
        self.cards = cards.into_iter().collect();
        self.discarded.clear();
    }

    /// Cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discarded.values().map(|&n| n as usize).sum()
    }

    /// Discarded copies of `item`.
    #[must_use]
    pub fn discarded(&self, item: FarmItem) -> u32 {
        self.discarded.get(&item).copied().unwrap_or(0)
    }

    /// Copies of `item` in the deck and discard pile together.
    #[must_use]
    pub fn count(&self, item: FarmItem) -> usize {
        self.cards.iter().filter(|&&c| c == item).count() + self.discarded(item) as usize
    }

    /// Cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = FarmItem> + '_ {
        self.cards.iter().copied()
    }
}
