//! Farm engine: a player's defensive stacks and pending night cards.
//!
//! ## Stacks
//!
//! `Farm` holds its stacks in play order. Stack numbers shown to players
//! are 1-based positions in that order. Stacks that become empty are
//! pruned immediately, so every index always refers to a real defense.
//!
//! ## Night queue
//!
//! Night cards dealt to the farm wait in a FIFO queue. Only the head card
//! is ever resolved.
//!
//! ## Mutation results
//!
//! Operations that remove items return them instead of discarding them;
//! the caller owns the day deck and decides where they go.

pub mod defense;
pub mod placement;
pub mod stack;

pub use placement::PlacementOutcome;
pub use stack::{Stack, StackShape, MAX_LOOSE_AMMO, WALL_HEIGHT};

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{FarmItem, NightCard};

/// A player's farm.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farm {
    stacks: Vec<Stack>,
    night_cards: Vector<NightCard>,
}

impl Farm {
    /// An empty farm.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A farm with the given stacks, in order.
    pub fn with_stacks(stacks: impl IntoIterator<Item = Stack>) -> Self {
        let mut farm = Self::new();
        farm.stacks.extend(stacks);
        farm.repair();
        farm
    }

    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    #[must_use]
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    /// Total items across every stack.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    /// Every item in flat order: stack order, then item order.
    pub fn items(&self) -> impl Iterator<Item = FarmItem> + '_ {
        self.stacks.iter().flat_map(|s| s.items().iter().copied())
    }

    #[must_use]
    pub fn has_item(&self, item: FarmItem) -> bool {
        self.stacks.iter().any(|s| s.has(item))
    }

    /// Remove the item at 0-based flat position `flat`.
    pub fn remove_flat(&mut self, flat: usize) -> Option<FarmItem> {
        let mut offset = flat;
        let mut removed = None;
        for stack in &mut self.stacks {
            if offset < stack.len() {
                removed = stack.remove_at(offset);
                break;
            }
            offset -= stack.len();
        }
        self.repair();
        removed
    }

    /// Remove every copy of the listed items from every stack.
    pub fn destroy_all(&mut self, targets: &[FarmItem]) -> Vec<FarmItem> {
        let mut removed = Vec::new();
        for stack in &mut self.stacks {
            for &target in targets {
                while stack.remove_one(target) {
                    removed.push(target);
                }
            }
        }
        self.repair();
        removed
    }

    /// Take every item off the farm.
    pub fn clear_stacks(&mut self) -> Vec<FarmItem> {
        self.stacks.drain(..).flat_map(|mut s| s.drain()).collect()
    }

    /// Pending night cards, head first.
    #[must_use]
    pub fn night_cards(&self) -> &Vector<NightCard> {
        &self.night_cards
    }

    #[must_use]
    pub fn next_night_card(&self) -> Option<NightCard> {
        self.night_cards.front().copied()
    }

    pub fn queue_night_card(&mut self, card: NightCard) {
        self.night_cards.push_back(card);
    }

    pub fn pop_night_card(&mut self) -> Option<NightCard> {
        self.night_cards.pop_front()
    }

    /// Remove every queued card except the head.
    pub fn take_night_cards_after_head(&mut self) -> Vector<NightCard> {
        if self.night_cards.is_empty() {
            return Vector::new();
        }
        self.night_cards.split_off(1)
    }

    /// Remove every queued card.
    pub fn take_night_cards(&mut self) -> Vector<NightCard> {
        std::mem::take(&mut self.night_cards)
    }

    /// Restore the shape invariant after items were removed: prune empty
    /// stacks and split loose ammo left behind by a removed shotgun into
    /// legal pairs.
    fn repair(&mut self) {
        self.stacks.retain(|s| !s.is_empty());
        let mut i = 0;
        while i < self.stacks.len() {
            let stack = &mut self.stacks[i];
            if stack.is_ammo_only() && stack.len() > MAX_LOOSE_AMMO {
                stack.remove_one(FarmItem::Ammo);
                stack.remove_one(FarmItem::Ammo);
                let mut pair = Stack::single(FarmItem::Ammo);
                pair.push(FarmItem::Ammo);
                self.stacks.insert(i + 1, pair);
                continue;
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{EventKind, ZombieKind};
    use FarmItem::*;

    #[test]
    fn test_remove_flat() {
        let mut farm = Farm::with_stacks([
            Stack::from_items([HayBale, HayBale]),
            Stack::single(Scarecrow),
        ]);
        assert_eq!(farm.remove_flat(2), Some(Scarecrow));
        assert_eq!(farm.stacks().len(), 1);
        assert_eq!(farm.remove_flat(5), None);
        assert_eq!(farm.item_count(), 2);
    }

    #[test]
    fn test_removing_shotgun_splits_loose_ammo() {
        let mut farm = Farm::with_stacks([Stack::from_items([Shotgun, Ammo, Ammo, Ammo])]);
        assert_eq!(farm.remove_flat(0), Some(Shotgun));
        let shapes: Vec<_> = farm.stacks().iter().map(Stack::shape).collect();
        assert_eq!(shapes, vec![Some(StackShape::Ammo(1)), Some(StackShape::Ammo(2))]);
    }

    #[test]
    fn test_destroy_all() {
        let mut farm = Farm::with_stacks([
            Stack::from_items([Flamethrower, Fuel]),
            Stack::single(BoobyTrap),
            Stack::single(Fuel),
        ]);
        let removed = farm.destroy_all(&[Flamethrower, Fuel]);
        assert_eq!(removed.len(), 3);
        assert_eq!(farm.stacks(), &[Stack::single(BoobyTrap)]);
    }

    #[test]
    fn test_night_queue_is_fifo() {
        let mut farm = Farm::new();
        let biter = NightCard::Zombie(ZombieKind::Biter);
        let storm = NightCard::Event(EventKind::LightningStorm);
        farm.queue_night_card(biter);
        farm.queue_night_card(storm);
        assert_eq!(farm.next_night_card(), Some(biter));
        let rest = farm.take_night_cards_after_head();
        assert_eq!(rest.len(), 1);
        assert_eq!(farm.pop_night_card(), Some(biter));
        assert_eq!(farm.pop_night_card(), None);
    }
}
