//! Prompts: a suspended game's request for one integer choice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::FarmItem;

/// Confirmation prompts accept only this choice.
pub const CONFIRM: i32 = 0;

/// Defense prompts use this to take the life loss instead.
pub const TAKE_HIT: i32 = -1;

/// What kind of decision a prompt asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputContext {
    /// Choose a stack for a card that didn't place itself.
    PlayCard,
    /// Optional discard at the start of a turn.
    Discard,
    /// Play a card from the hand.
    Play,
    /// Public pair or deck.
    Draw,
    /// Night: choose a defending stack.
    Defense,
    /// Night: spend a shield against an exploding zombie?
    Shield,
    /// Acknowledge and continue.
    Confirm,
    /// Discard a farm item for an event.
    EventDiscard,
}

/// Which view a presentation layer should show with the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderHint {
    Normal,
    /// Number every farm item so the player can pick one.
    ForDiscard,
    /// Show night queues.
    ForNight,
}

/// A request for input from one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub context: InputContext,
    pub render: RenderHint,
    /// Index of the player who must answer.
    pub player: usize,
    pub message: String,
    /// The closed set of acceptable answers.
    pub valid_choices: SmallVec<[i32; 8]>,
    /// The item being placed, for `PlayCard` prompts.
    pub item: Option<FarmItem>,
    /// Candidate stack indices, for `PlayCard` and `Defense` prompts.
    pub candidate_stacks: SmallVec<[usize; 4]>,
}

impl Prompt {
    /// A prompt with no auxiliary data.
    pub fn new(
        context: InputContext,
        player: usize,
        message: impl Into<String>,
        valid_choices: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            context,
            render: RenderHint::Normal,
            player,
            message: message.into(),
            valid_choices: valid_choices.into_iter().collect(),
            item: None,
            candidate_stacks: SmallVec::new(),
        }
    }

    /// A "press 0 to continue" prompt.
    pub fn confirm(player: usize, message: impl Into<String>) -> Self {
        Self::new(InputContext::Confirm, player, message, [CONFIRM])
    }

    #[must_use]
    pub fn with_render(mut self, render: RenderHint) -> Self {
        self.render = render;
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: FarmItem) -> Self {
        self.item = Some(item);
        self
    }

    #[must_use]
    pub fn with_candidates(mut self, stacks: &[usize]) -> Self {
        self.candidate_stacks = SmallVec::from_slice(stacks);
        self
    }

    /// Whether `choice` is one of the valid answers.
    #[must_use]
    pub fn accepts(&self, choice: i32) -> bool {
        self.valid_choices.contains(&choice)
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.message, self.valid_choices.as_slice())
    }
}

/// 1-based stack numbers for the given indices.
pub(crate) fn stack_numbers(stacks: &[usize]) -> impl Iterator<Item = i32> + '_ {
    stacks.iter().map(|&i| i as i32 + 1)
}

/// 0-based index for a validated 1-based choice.
pub(crate) fn choice_index(choice: i32) -> usize {
    usize::try_from(choice).unwrap_or(0).saturating_sub(1)
}
