//! Zombie chicken catalog and trait sets.
//!
//! Traits decide which defenses work: invisible zombies dodge firearms and
//! flamethrowers, flyers pass over walls and traps, climbers scale walls,
//! bulletproof and fireproof zombies shrug off the matching weapon, timid
//! zombies flee scarecrows, and exploding zombies take the defending stack
//! down with them.

use serde::{Deserialize, Serialize};

/// A single zombie trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZombieTrait {
    Invisible,
    Flying,
    Climbing,
    Bulletproof,
    Fireproof,
    Timid,
    Exploding,
}

impl ZombieTrait {
    /// Every trait, in canonical order.
    pub const ALL: [ZombieTrait; 7] = [
        ZombieTrait::Invisible,
        ZombieTrait::Flying,
        ZombieTrait::Climbing,
        ZombieTrait::Bulletproof,
        ZombieTrait::Fireproof,
        ZombieTrait::Timid,
        ZombieTrait::Exploding,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::fmt::Display for ZombieTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Immutable set of zombie traits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Traits(u8);

impl Traits {
    /// Build a trait set from a list.
    #[must_use]
    pub const fn of(traits: &[ZombieTrait]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < traits.len() {
            bits |= traits[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Check for a trait.
    #[must_use]
    pub const fn has(self, t: ZombieTrait) -> bool {
        self.0 & t.bit() != 0
    }

    /// Iterate the traits in canonical order.
    pub fn iter(self) -> impl Iterator<Item = ZombieTrait> {
        ZombieTrait::ALL.into_iter().filter(move |t| self.has(*t))
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Zombie card kinds in the night deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZombieKind {
    Raider,
    Walker,
    Chomper,
    Crawler,
    Climber,
    Clucker,
    Kablooey,
    Biter,
    Blaster,
    Boomer,
    Stalker,
    Thunder,
    Floater,
    Toaster,
    Sneaker,
    Creeper,
}

impl ZombieKind {
    pub const ALL: [ZombieKind; 16] = [
        ZombieKind::Raider,
        ZombieKind::Walker,
        ZombieKind::Chomper,
        ZombieKind::Crawler,
        ZombieKind::Climber,
        ZombieKind::Clucker,
        ZombieKind::Kablooey,
        ZombieKind::Biter,
        ZombieKind::Blaster,
        ZombieKind::Boomer,
        ZombieKind::Stalker,
        ZombieKind::Thunder,
        ZombieKind::Floater,
        ZombieKind::Toaster,
        ZombieKind::Sneaker,
        ZombieKind::Creeper,
    ];

    /// The zombie's trait set.
    #[must_use]
    pub const fn traits(self) -> Traits {
        use ZombieTrait::*;
        match self {
            ZombieKind::Raider => Traits::of(&[Flying, Bulletproof]),
            ZombieKind::Walker => Traits::of(&[Fireproof, Exploding]),
            ZombieKind::Chomper => Traits::of(&[Bulletproof, Fireproof, Timid]),
            ZombieKind::Crawler => Traits::of(&[Climbing, Bulletproof]),
            ZombieKind::Climber => Traits::of(&[Climbing, Fireproof, Exploding]),
            ZombieKind::Clucker => Traits::of(&[Exploding]),
            ZombieKind::Kablooey => Traits::of(&[Flying, Exploding]),
            ZombieKind::Biter => Traits::of(&[Flying, Fireproof]),
            ZombieKind::Blaster => Traits::of(&[Flying, Timid, Exploding]),
            ZombieKind::Boomer => Traits::of(&[Flying, Bulletproof, Exploding]),
            ZombieKind::Stalker => Traits::of(&[Invisible, Exploding]),
            ZombieKind::Thunder => Traits::of(&[Invisible, Flying, Timid, Exploding]),
            ZombieKind::Floater => Traits::of(&[Invisible, Flying, Timid]),
            ZombieKind::Toaster => Traits::of(&[Flying, Fireproof, Timid, Exploding]),
            ZombieKind::Sneaker => Traits::of(&[Invisible, Climbing]),
            ZombieKind::Creeper => Traits::of(&[Invisible]),
        }
    }

    /// Copies in a fresh night deck.
    #[must_use]
    pub const fn deck_count(self) -> u32 {
        match self {
            ZombieKind::Biter => 10,
            ZombieKind::Boomer | ZombieKind::Creeper => 6,
            ZombieKind::Walker | ZombieKind::Kablooey | ZombieKind::Stalker => 4,
            _ => 2,
        }
    }

    #[must_use]
    pub const fn has(self, t: ZombieTrait) -> bool {
        self.traits().has(t)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ZombieKind::Raider => "Raider",
            ZombieKind::Walker => "Walker",
            ZombieKind::Chomper => "Chomper",
            ZombieKind::Crawler => "Crawler",
            ZombieKind::Climber => "Climber",
            ZombieKind::Clucker => "Clucker",
            ZombieKind::Kablooey => "Kablooey",
            ZombieKind::Biter => "Biter",
            ZombieKind::Blaster => "Blaster",
            ZombieKind::Boomer => "Boomer",
            ZombieKind::Stalker => "Stalker",
            ZombieKind::Thunder => "Thunder",
            ZombieKind::Floater => "Floater",
            ZombieKind::Toaster => "Toaster",
            ZombieKind::Sneaker => "Sneaker",
            ZombieKind::Creeper => "Creeper",
        }
    }
}

impl std::fmt::Display for ZombieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        f.write_str(" |")?;
        for t in self.traits().iter() {
            write!(f, " {t} |")?;
        }
        Ok(())
    }
}
