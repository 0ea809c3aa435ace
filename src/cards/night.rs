//! Night cards: a zombie attack or a global event, never both.

use serde::{Deserialize, Serialize};

use super::event::EventKind;
use super::zombie::ZombieKind;

/// A card from the night deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NightCard {
    Zombie(ZombieKind),
    Event(EventKind),
}

impl NightCard {
    #[must_use]
    pub const fn is_zombie(self) -> bool {
        matches!(self, NightCard::Zombie(_))
    }

    #[must_use]
    pub const fn is_event(self) -> bool {
        matches!(self, NightCard::Event(_))
    }

    /// Every card of a fresh night deck, unshuffled.
    #[must_use]
    pub fn full_deck() -> Vec<NightCard> {
        let zombies = ZombieKind::ALL
            .iter()
            .flat_map(|&z| std::iter::repeat(NightCard::Zombie(z)).take(z.deck_count() as usize));
        let events = EventKind::ALL.iter().map(|&e| NightCard::Event(e));
        zombies.chain(events).collect()
    }
}

impl std::fmt::Display for NightCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NightCard::Zombie(z) => std::fmt::Display::fmt(z, f),
            NightCard::Event(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck() {
        let deck = NightCard::full_deck();
        assert_eq!(deck.len(), 61);
        assert_eq!(deck.iter().filter(|c| c.is_event()).count(), 7);
        assert_eq!(
            deck.iter()
                .filter(|c| **c == NightCard::Zombie(ZombieKind::Biter))
                .count(),
            10
        );
    }
}
