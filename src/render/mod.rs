//! Presentation collaborators: turning snapshots into text and feeding
//! answers back in. Nothing here touches `Game` directly.

pub mod input;
pub mod text;

pub use input::{drive, DriveOutcome, FirstChoice, InputSource, ScriptedInput, SeededChoice};
pub use text::{Renderer, TextRenderer, TextStyle};
