//! Defense matching and resolution against a zombie.

use smallvec::SmallVec;

use super::Farm;
use crate::cards::{FarmItem, ZombieKind, ZombieTrait};

/// Stack indices, in farm order.
pub type StackIndices = SmallVec<[usize; 4]>;

impl Farm {
    /// Every stack that can kill `zombie`.
    #[must_use]
    pub fn matching_defenses(&self, zombie: ZombieKind) -> StackIndices {
        self.stacks
            .iter()
            .enumerate()
            .filter(|(_, s)| s.defeats(zombie))
            .map(|(i, _)| i)
            .collect()
    }

    /// Matching stacks that cost nothing to use.
    ///
    /// Empty for exploding zombies. Never includes a stack holding ammo,
    /// a booby trap or the farm-wiper.
    #[must_use]
    pub fn free_defenses(&self, zombie: ZombieKind) -> StackIndices {
        if zombie.has(ZombieTrait::Exploding) {
            return StackIndices::new();
        }
        self.matching_defenses(zombie)
            .into_iter()
            .filter(|&i| {
                let s = &self.stacks[i];
                !s.has(FarmItem::Ammo) && !s.has(FarmItem::BoobyTrap) && !s.has(FarmItem::FarmWiper)
            })
            .collect()
    }

    /// Whether using stack `index` against `zombie` could spend a shield.
    #[must_use]
    pub fn shield_can_save(&self, index: usize, zombie: ZombieKind) -> bool {
        zombie.has(ZombieTrait::Exploding)
            && self.has_item(FarmItem::Shield)
            && self
                .stacks
                .get(index)
                .is_some_and(|s| !s.has(FarmItem::FarmWiper))
    }

    /// Kill `zombie` with stack `index`, returning every item spent.
    ///
    /// - The farm-wiper takes every item on the farm and nothing else
    ///   happens.
    /// - An exploding zombie destroys the whole defending stack unless a
    ///   shield is spent; the shield is taken from whichever stack holds it.
    /// - Ammo and booby traps in the defending stack are used up.
    pub fn apply_defense(
        &mut self,
        index: usize,
        zombie: ZombieKind,
        use_shield: bool,
    ) -> Vec<FarmItem> {
        let Some(stack) = self.stacks.get_mut(index) else {
            return Vec::new();
        };
        if stack.has(FarmItem::FarmWiper) {
            return self.clear_stacks();
        }

        let mut spent = Vec::new();
        let shielded = use_shield && zombie.has(ZombieTrait::Exploding);
        if zombie.has(ZombieTrait::Exploding) && !shielded {
            spent.extend(stack.drain());
        } else {
            for item in [FarmItem::Ammo, FarmItem::BoobyTrap] {
                if stack.remove_one(item) {
                    spent.push(item);
                }
            }
        }
        // Consumables come off the defending stack before the shield goes,
        // so `index` still points at the right stack above.
        if shielded {
            if let Some(holder) = self.stacks.iter_mut().find(|s| s.has(FarmItem::Shield)) {
                holder.remove_one(FarmItem::Shield);
                spent.push(FarmItem::Shield);
            }
        }
        self.repair();
        spent
    }
}
