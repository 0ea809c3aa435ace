//! Night events: global cards that hit every farm at once.

use serde::{Deserialize, Serialize};

use super::item::FarmItem;

/// Event cards in the night deck. One copy of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    LightningStorm,
    Tornado,
    BloodMoon,
    WinterSolstice,
    SquirrelStampede,
    HeavyRainfall,
    SilentNight,
}

/// What an event does once confirmed.
///
/// The rules engine interprets these; effects that need player choices
/// (`DiscardFromFarms`) suspend the night until every player has chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventEffect {
    /// Every player discards this many farm items of their choice.
    DiscardFromFarms(u8),
    /// Every player draws this many extra night cards.
    ExtraNightCards(u8),
    /// Every copy of the listed items is discarded from every farm.
    DestroyItems(&'static [FarmItem]),
    /// Every queued night card is discarded.
    ClearNightCards,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::LightningStorm,
        EventKind::Tornado,
        EventKind::BloodMoon,
        EventKind::WinterSolstice,
        EventKind::SquirrelStampede,
        EventKind::HeavyRainfall,
        EventKind::SilentNight,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::LightningStorm => "Lightning Storm",
            EventKind::Tornado => "Tornado",
            EventKind::BloodMoon => "Blood Moon",
            EventKind::WinterSolstice => "Winter Solstice",
            EventKind::SquirrelStampede => "Squirrel Stampede",
            EventKind::HeavyRainfall => "Heavy Rainfall",
            EventKind::SilentNight => "Silent Night",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            EventKind::LightningStorm => "All players discard 2 cards from their farm.",
            EventKind::Tornado => "All players discard 3 cards from their farm.",
            EventKind::BloodMoon => {
                "Zombies are flocking tonight! All players draw 3 more Night cards."
            }
            EventKind::WinterSolstice => {
                "It's gonna be a long night! All players draw 2 more Night cards."
            }
            EventKind::SquirrelStampede => {
                concat!(
                    "A squirrel stampede triggers all Booby Traps! ",
                    "All players discard any Booby Traps on their farm."
                )
            }
            EventKind::HeavyRainfall => {
                concat!(
                    "Water rusts Flamethrowers! ",
                    "All players discard any Flamethrowers and Fuel on their farm."
                )
            }
            EventKind::SilentNight => {
                "No more zombies tonight! All players discard any remaining Night cards."
            }
        }
    }

    #[must_use]
    pub const fn effect(self) -> EventEffect {
        match self {
            EventKind::LightningStorm => EventEffect::DiscardFromFarms(2),
            EventKind::Tornado => EventEffect::DiscardFromFarms(3),
            EventKind::BloodMoon => EventEffect::ExtraNightCards(3),
            EventKind::WinterSolstice => EventEffect::ExtraNightCards(2),
            EventKind::SquirrelStampede => EventEffect::DestroyItems(&[FarmItem::BoobyTrap]),
            EventKind::HeavyRainfall => {
                EventEffect::DestroyItems(&[FarmItem::Flamethrower, FarmItem::Fuel])
            }
            EventKind::SilentNight => EventEffect::ClearNightCards,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n| {} |", self.name(), self.description())
    }
}
