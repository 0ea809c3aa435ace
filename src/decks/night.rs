//! The night deck: zombies and events dealt onto farms each night.

use im::Vector;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::cards::{EventKind, NightCard};
use crate::core::GameRng;

/// Night deck plus its discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightDeck {
    cards: Vector<NightCard>,
    discarded: Vector<NightCard>,
}

impl NightDeck {
    /// A complete shuffled deck with an empty discard pile.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut cards = NightCard::full_deck();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// Deck with an exact card order, front first. Used to rig games.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = NightCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            discarded: Vector::new(),
        }
    }

    /// Draw the front card, shuffling the discard pile back in first when
    /// the deck is empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<NightCard> {
        if self.cards.is_empty() {
            self.refill(rng);
        }
        let card = self.cards.pop_front();
        match card {
            Some(c) => trace!("drew night card {c:?}"),
            None => warn!("night deck and discard pile are both empty"),
        }
        card
    }

    pub fn discard(&mut self, card: NightCard) {
        self.discarded.push_back(card);
    }

    /// Pull one copy of `card` out of the deck or discard pile.
    pub fn take(&mut self, card: NightCard) -> bool {
        if let Some(at) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(at);
            true
        } else if let Some(at) = self.discarded.iter().position(|&c| c == card) {
            self.discarded.remove(at);
            true
        } else {
            false
        }
    }

    /// Put a card on top of the deck.
    pub fn push_top(&mut self, card: NightCard) {
        self.cards.push_front(card);
    }

    /// Shuffle the discard pile into the deck.
    pub fn refill(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<NightCard> = self.cards.iter().copied().collect();
        cards.extend(self.discarded.iter().copied());
        rng.shuffle(&mut cards);
        trace!("reshuffled night deck to {} cards", cards.len());
        self.cards = cards.into_iter().collect();
        self.discarded.clear();
    }

    /// Reorder the deck: Blood Moon, Winter Solstice, other events, zombies.
    pub fn rig_events_on_top(&mut self) {
        let rank = |card: &NightCard| match card {
            NightCard::Event(EventKind::BloodMoon) => 0,
            NightCard::Event(EventKind::WinterSolstice) => 1,
            NightCard::Event(_) => 2,
            NightCard::Zombie(_) => 3,
        };
        let mut cards: Vec<NightCard> = self.cards.iter().copied().collect();
        cards.sort_by_key(rank);
        self.cards = cards.into_iter().collect();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discarded.len()
    }

    /// The discard pile, oldest first.
    pub fn discarded(&self) -> impl Iterator<Item = NightCard> + '_ {
        self.discarded.iter().copied()
    }

    /// Copies of `card` in the deck and discard pile together.
    #[must_use]
    pub fn count(&self, card: NightCard) -> usize {
        self.cards.iter().chain(self.discarded.iter()).filter(|&&c| c == card).count()
    }

    /// Cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = NightCard> + '_ {
        self.cards.iter().copied()
    }
}
