//! Game session facade.
//!
//! `GameSession` owns one `Game` and is what CLIs, web handlers and bots
//! drive. `GameSnapshot` is the read-only view they render from, and
//! `SharedSession` puts a session behind a lock for multi-client use.

pub mod facade;
pub mod shared;
pub mod snapshot;

pub use facade::GameSession;
pub use shared::SharedSession;
pub use snapshot::{GameSnapshot, PlayerSnapshot};
