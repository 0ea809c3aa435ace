//! Turn state machine.
//!
//! A day is Morning (every player takes a turn), Afternoon (again), then
//! Night (night cards are dealt and resolved). Each part is a sequence of
//! named sub-stages, see [`Stage`]. Sub-stages either run themselves or
//! suspend with a [`Prompt`]; a suspended game resumes at exactly the same
//! sub-stage when the answer arrives.
//!
//! - `engine`: the advance / provide-input loop
//! - `day`: optional discard, two plays, draw
//! - `night`: dealing, round-robin resolution, zombie fights
//! - `events`: night event effects and their discards

mod day;
pub mod engine;
mod events;
mod night;
pub mod prompt;
pub mod stage;

pub use day::{DRAW_DECK, DRAW_PUBLIC};
pub use engine::Progress;
pub use night::{KEEP_SHIELD, USE_SHIELD};
pub use prompt::{InputContext, Prompt, RenderHint, CONFIRM, TAKE_HIT};
pub use stage::{DayStage, DiscardProgress, NightRound, NightStage, Phase, Stage};
