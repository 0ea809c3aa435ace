//! Input sources and the loop that feeds them to a session.

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::core::{ChoiceError, GameRng};
use crate::rules::{Progress, Prompt, CONFIRM};
use crate::session::{GameSession, GameSnapshot};

/// Rejections in a row before `drive` answers for the source.
const MAX_REJECTIONS: u32 = 8;

/// Something that answers prompts: a terminal, a network client, a bot.
pub trait InputSource {
    fn choose(&mut self, snapshot: &GameSnapshot, prompt: &Prompt) -> i32;
}

fn first_valid(prompt: &Prompt) -> i32 {
    prompt.valid_choices.first().copied().unwrap_or(CONFIRM)
}

/// Replays a fixed list of answers, then falls back to the first valid
/// choice.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    choices: VecDeque<i32>,
}

impl ScriptedInput {
    pub fn new(choices: impl IntoIterator<Item = i32>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// Scripted answers not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl InputSource for ScriptedInput {
    fn choose(&mut self, _snapshot: &GameSnapshot, prompt: &Prompt) -> i32 {
        self.choices.pop_front().unwrap_or_else(|| first_valid(prompt))
    }
}

/// Always the first valid choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl InputSource for FirstChoice {
    fn choose(&mut self, _snapshot: &GameSnapshot, prompt: &Prompt) -> i32 {
        first_valid(prompt)
    }
}

/// Uniformly random valid choices from its own seeded RNG.
#[derive(Clone, Debug)]
pub struct SeededChoice {
    rng: GameRng,
}

impl SeededChoice {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl InputSource for SeededChoice {
    fn choose(&mut self, _snapshot: &GameSnapshot, prompt: &Prompt) -> i32 {
        self.rng
            .choose(prompt.valid_choices.as_slice())
            .copied()
            .unwrap_or(CONFIRM)
    }
}

/// How a `drive` call ended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriveOutcome {
    pub days_completed: u32,
    pub game_over: bool,
    /// Answers accepted.
    pub inputs: u64,
    /// Answers rejected and re-prompted.
    pub rejected: u64,
    /// Set if the game reported a broken invariant.
    pub error: Option<ChoiceError>,
}

/// Play until the game is over or `max_days` days have completed.
pub fn drive(
    session: &mut GameSession,
    input: &mut dyn InputSource,
    max_days: u32,
) -> DriveOutcome {
    let mut outcome = DriveOutcome::default();
    if max_days == 0 {
        return outcome;
    }
    let mut progress = session.advance();
    let mut rejections = 0;
    loop {
        match progress {
            Progress::GameOver => {
                outcome.game_over = true;
                break;
            }
            Progress::DayComplete => {
                outcome.days_completed += 1;
                if outcome.days_completed >= max_days {
                    break;
                }
                progress = session.advance();
            }
            Progress::NeedsInput(prompt) => {
                let choice = if rejections < MAX_REJECTIONS {
                    input.choose(&session.snapshot(), &prompt)
                } else {
                    warn!("too many rejected answers, using {}", first_valid(&prompt));
                    first_valid(&prompt)
                };
                match session.provide_input(choice) {
                    Ok(next) => {
                        outcome.inputs += 1;
                        rejections = 0;
                        progress = next;
                    }
                    Err(err) if err.is_recoverable() => {
                        debug!("re-prompting after {err}");
                        outcome.rejected += 1;
                        rejections += 1;
                        progress = Progress::NeedsInput(prompt);
                    }
                    Err(err) => {
                        outcome.error = Some(err);
                        break;
                    }
                }
            }
        }
    }
    info!(
        "drive stopped after {} days ({} inputs, game over: {})",
        outcome.days_completed, outcome.inputs, outcome.game_over
    );
    outcome
}
