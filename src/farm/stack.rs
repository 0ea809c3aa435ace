//! Stacks: one assembled defense built from farm items.
//!
//! Every non-empty stack matches exactly one `StackShape`. Items inside a
//! stack are kept in canonical item order, so a loaded shotgun always
//! reads `Shotgun, Ammo, Ammo`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{FarmItem, ZombieKind, ZombieTrait};

/// Hay bales in a finished wall.
pub const WALL_HEIGHT: usize = 3;

/// Most rounds an ammo-only stack may hold.
pub const MAX_LOOSE_AMMO: usize = 2;

/// Legal stack shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackShape {
    /// 1-3 hay bales; three make a wall.
    HayBales(u8),
    Scarecrow,
    BoobyTrap,
    Shield,
    FarmWiper,
    /// One shotgun with any number of rounds.
    Shotgun { rounds: u8 },
    /// 1-2 loose rounds waiting for a shotgun.
    Ammo(u8),
    /// One flamethrower, fueled or not.
    Flamethrower { fueled: bool },
    /// Fuel waiting for a flamethrower.
    Fuel,
}

/// One defense on a farm.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    items: SmallVec<[FarmItem; 4]>,
}

impl Stack {
    /// A stack holding a single item.
    #[must_use]
    pub fn single(item: FarmItem) -> Self {
        let mut items = SmallVec::new();
        items.push(item);
        Self { items }
    }

    /// A stack holding exactly these items, legal or not.
    pub fn from_items(items: impl IntoIterator<Item = FarmItem>) -> Self {
        let mut items: SmallVec<[FarmItem; 4]> = items.into_iter().collect();
        items.sort_unstable();
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[FarmItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn count(&self, item: FarmItem) -> usize {
        self.items.iter().filter(|&&i| i == item).count()
    }

    #[must_use]
    pub fn has(&self, item: FarmItem) -> bool {
        self.items.contains(&item)
    }

    /// Add an item at its canonical position.
    pub fn push(&mut self, item: FarmItem) {
        let at = self.items.partition_point(|&i| i <= item);
        self.items.insert(at, item);
    }

    /// Remove one copy of `item`. Returns false if absent.
    pub fn remove_one(&mut self, item: FarmItem) -> bool {
        match self.items.iter().position(|&i| i == item) {
            Some(at) => {
                self.items.remove(at);
                true
            }
            None => false,
        }
    }

    /// Remove the item at position `at` within the stack.
    pub fn remove_at(&mut self, at: usize) -> Option<FarmItem> {
        (at < self.items.len()).then(|| self.items.remove(at))
    }

    /// Take every item out, leaving the stack empty.
    pub fn drain(&mut self) -> SmallVec<[FarmItem; 4]> {
        std::mem::take(&mut self.items)
    }

    /// Ammo with no shotgun.
    #[must_use]
    pub fn is_ammo_only(&self) -> bool {
        self.has(FarmItem::Ammo) && !self.has(FarmItem::Shotgun)
    }

    /// Hay bales short of a finished wall.
    #[must_use]
    pub fn is_incomplete_wall(&self) -> bool {
        self.has(FarmItem::HayBale) && self.count(FarmItem::HayBale) < WALL_HEIGHT
    }

    /// The shape this stack matches, or `None` if it is illegal.
    ///
    /// ```
    /// use zombie_chickens::cards::FarmItem;
    /// use zombie_chickens::farm::{Stack, StackShape};
    ///
    /// let stack = Stack::from_items([FarmItem::Ammo, FarmItem::Shotgun]);
    /// assert_eq!(stack.shape(), Some(StackShape::Shotgun { rounds: 1 }));
    ///
    /// let mixed = Stack::from_items([FarmItem::HayBale, FarmItem::Fuel]);
    /// assert_eq!(mixed.shape(), None);
    /// ```
    #[must_use]
    pub fn shape(&self) -> Option<StackShape> {
        use FarmItem::*;
        let n = self.items.len();
        let first = *self.items.first()?;
        let uniform = self.items.iter().all(|&i| i == first);
        match first {
            HayBale if uniform && n <= WALL_HEIGHT => Some(StackShape::HayBales(n as u8)),
            Scarecrow if n == 1 => Some(StackShape::Scarecrow),
            BoobyTrap if n == 1 => Some(StackShape::BoobyTrap),
            Shield if n == 1 => Some(StackShape::Shield),
            FarmWiper if n == 1 => Some(StackShape::FarmWiper),
            Shotgun if self.items[1..].iter().all(|&i| i == Ammo) => {
                u8::try_from(n - 1).ok().map(|rounds| StackShape::Shotgun { rounds })
            }
            Ammo if uniform && n <= MAX_LOOSE_AMMO => Some(StackShape::Ammo(n as u8)),
            Flamethrower if n == 1 => Some(StackShape::Flamethrower { fueled: false }),
            Flamethrower if n == 2 && self.items[1] == Fuel => {
                Some(StackShape::Flamethrower { fueled: true })
            }
            Fuel if n == 1 => Some(StackShape::Fuel),
            _ => None,
        }
    }

    /// Whether this stack can kill `zombie`.
    #[must_use]
    pub fn defeats(&self, zombie: ZombieKind) -> bool {
        use ZombieTrait::*;
        let t = zombie.traits();
        (t.has(Timid) && self.has(FarmItem::Scarecrow))
            || (!t.has(Flying) && !t.has(Climbing) && self.count(FarmItem::HayBale) >= WALL_HEIGHT)
            || (!t.has(Bulletproof)
                && !t.has(Invisible)
                && self.has(FarmItem::Shotgun)
                && self.has(FarmItem::Ammo))
            || (!t.has(Fireproof)
                && !t.has(Invisible)
                && self.has(FarmItem::Flamethrower)
                && self.has(FarmItem::Fuel))
            || (!t.has(Flying) && self.has(FarmItem::BoobyTrap))
            || self.has(FarmItem::FarmWiper)
    }

    /// Short name of the defense this stack puts up against `zombie`.
    #[must_use]
    pub fn defense_name(&self, zombie: ZombieKind) -> &'static str {
        if self.has(FarmItem::FarmWiper) {
            "W.O.L.R."
        } else if self.has(FarmItem::Scarecrow) && zombie.has(ZombieTrait::Timid) {
            "Scarecrow"
        } else if self.count(FarmItem::HayBale) >= WALL_HEIGHT {
            "Hay Wall"
        } else if self.has(FarmItem::Shotgun) && self.has(FarmItem::Ammo) {
            "Shotgun"
        } else if self.has(FarmItem::Flamethrower) && self.has(FarmItem::Fuel) {
            "Flamethrower"
        } else if self.has(FarmItem::BoobyTrap) {
            "Booby Trap"
        } else {
            "defense"
        }
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
