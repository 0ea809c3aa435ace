//! Day-deck items: the resources players build farm defenses from.

use serde::{Deserialize, Serialize};

/// A day card that can be played to a farm.
///
/// Declaration order is the canonical display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FarmItem {
    /// Stack three to build a hay wall.
    HayBale,
    /// Scares off timid zombies.
    Scarecrow,
    /// Fires when loaded with ammo.
    Shotgun,
    /// Loads a shotgun; spent on use.
    Ammo,
    /// Catches one grounded zombie; spent on use.
    BoobyTrap,
    /// Saves a stack from an exploding zombie; spent on use.
    Shield,
    /// Roasts a zombie when fueled.
    Flamethrower,
    /// Fuels a flamethrower.
    Fuel,
    /// W.O.L.R.: kills anything, takes the whole farm with it.
    FarmWiper,
}

impl FarmItem {
    /// Every item, in canonical order.
    pub const ALL: [FarmItem; 9] = [
        FarmItem::HayBale,
        FarmItem::Scarecrow,
        FarmItem::Shotgun,
        FarmItem::Ammo,
        FarmItem::BoobyTrap,
        FarmItem::Shield,
        FarmItem::Flamethrower,
        FarmItem::Fuel,
        FarmItem::FarmWiper,
    ];

    /// Number of copies in a fresh day deck.
    #[must_use]
    pub const fn deck_count(self) -> u32 {
        match self {
            FarmItem::HayBale => 20,
            FarmItem::Scarecrow => 6,
            FarmItem::Shotgun => 14,
            FarmItem::Ammo => 24,
            FarmItem::BoobyTrap => 10,
            FarmItem::Shield => 6,
            FarmItem::Flamethrower => 6,
            FarmItem::Fuel => 6,
            FarmItem::FarmWiper => 4,
        }
    }

    /// Whether the item is consumed when its defense is used.
    #[must_use]
    pub const fn is_one_time_use(self) -> bool {
        matches!(
            self,
            FarmItem::Ammo | FarmItem::BoobyTrap | FarmItem::Shield | FarmItem::FarmWiper
        )
    }

    /// Display name without decoration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FarmItem::HayBale => "Hay Bale",
            FarmItem::Scarecrow => "Scarecrow",
            FarmItem::Shotgun => "Shotgun",
            FarmItem::Ammo => "Ammo",
            FarmItem::BoobyTrap => "Booby Trap",
            FarmItem::Shield => "Shield",
            FarmItem::Flamethrower => "Flamethrower",
            FarmItem::Fuel => "Fuel",
            FarmItem::FarmWiper => "W.O.L.R.",
        }
    }

    /// Total number of day cards in the game.
    #[must_use]
    pub fn total_deck_size() -> u32 {
        Self::ALL.iter().map(|item| item.deck_count()).sum()
    }
}

impl std::fmt::Display for FarmItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        if self.is_one_time_use() {
            f.write_str("*")?;
        }
        Ok(())
    }
}
