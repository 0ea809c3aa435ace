//! Card and rule tables: static game data, no logic.
//!
//! - `FarmItem`: day cards and their deck counts
//! - `ZombieKind` / `Traits`: the zombie catalog
//! - `EventKind` / `EventEffect`: global night events
//! - `NightCard`: zombie-or-event cards in the night deck

pub mod event;
pub mod item;
pub mod night;
pub mod zombie;

pub use event::{EventEffect, EventKind};
pub use item::FarmItem;
pub use night::NightCard;
pub use zombie::{Traits, ZombieKind, ZombieTrait};
