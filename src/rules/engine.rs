//! The interruptible turn loop.
//!
//! `Game::advance` runs sub-stages until one needs input, the day ends or
//! nobody is left. Suspending is just returning `Progress::NeedsInput`;
//! the stage and its scratch data stay on the game, so calling `advance`
//! again re-issues the same prompt without touching anything.
//!
//! `Game::provide_input` checks the choice against the outstanding
//! prompt, runs that stage's input handler (the only place side effects
//! happen), then advances to the next suspend point.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::prompt::Prompt;
use super::stage::Stage;
use crate::core::{ChoiceError, Game, InvariantViolation};

/// Where the game stopped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// Suspended until this prompt is answered.
    NeedsInput(Prompt),
    /// The night just ended; the next call starts a new morning.
    DayComplete,
    /// Every player is eliminated.
    GameOver,
}

impl Progress {
    /// Whether play can go on.
    #[must_use]
    pub fn continues(&self) -> bool {
        !matches!(self, Progress::GameOver)
    }

    /// The outstanding prompt, if suspended.
    #[must_use]
    pub fn prompt(&self) -> Option<&Prompt> {
        match self {
            Progress::NeedsInput(prompt) => Some(prompt),
            _ => None,
        }
    }
}

/// Result of running one sub-stage.
pub(crate) enum Step {
    /// The stage changed; keep going.
    Continue,
    /// Wait for input.
    Suspend(Prompt),
    /// The night is over.
    DayComplete,
}

impl Game {
    /// Run until input is needed, the day completes or the game ends.
    pub fn advance(&mut self) -> Progress {
        if let Some(prompt) = &self.pending {
            return Progress::NeedsInput(prompt.clone());
        }
        loop {
            if self.players.is_empty() {
                info!("game over: {}", self.stats);
                return Progress::GameOver;
            }
            let step = match self.stage.clone() {
                Stage::Day(stage) => self.day_step(stage),
                Stage::Night(stage) => self.night_step(stage),
            };
            match step {
                Step::Continue => {}
                Step::Suspend(prompt) => {
                    debug!("waiting on player {} at {}: {}", prompt.player, self.stage, prompt);
                    self.pending = Some(prompt.clone());
                    return Progress::NeedsInput(prompt);
                }
                Step::DayComplete => return Progress::DayComplete,
            }
        }
    }

    /// Answer the outstanding prompt and advance.
    ///
    /// A rejected choice leaves the game untouched.
    pub fn provide_input(&mut self, choice: i32) -> Result<Progress, ChoiceError> {
        if self.players.is_empty() {
            return Err(ChoiceError::GameOver);
        }
        let prompt = self.pending.as_ref().ok_or(ChoiceError::NoPendingInput)?;
        if !prompt.accepts(choice) {
            return Err(ChoiceError::InvalidChoice {
                choice,
                valid: prompt.valid_choices.to_vec(),
            });
        }
        if !self.stage.takes_input() {
            return Err(InvariantViolation::StageTakesNoInput {
                stage: self.stage.label().to_string(),
            }
            .into());
        }
        debug!("player {} chose {} at {}", prompt.player, choice, self.stage);
        self.pending = None;
        match self.stage.clone() {
            Stage::Day(stage) => self.day_input(stage, choice),
            Stage::Night(stage) => self.night_input(stage, choice),
        }
        Ok(self.advance())
    }

    /// Answer on behalf of `player`, rejecting anyone but the player the
    /// prompt is waiting on.
    pub fn provide_input_for(
        &mut self,
        player: usize,
        choice: i32,
    ) -> Result<Progress, ChoiceError> {
        if let Some(prompt) = &self.pending {
            if prompt.player != player {
                return Err(ChoiceError::NotYourTurn {
                    expected: prompt.player,
                    got: player,
                });
            }
        }
        self.provide_input(choice)
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        debug!("stage {} -> {}", self.stage, stage);
        self.stage = stage;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::rules::{DayStage, InputContext};

    fn game() -> Game {
        Game::new(&["Ada", "Bo"], &GameConfig::new(7)).unwrap()
    }

    #[test]
    fn test_first_prompt_is_optional_discard() {
        let mut g = game();
        let progress = g.advance();
        let prompt = progress.prompt().unwrap();
        assert_eq!(prompt.context, InputContext::Discard);
        assert_eq!(prompt.valid_choices.as_slice(), &[1, 2, 3, 4, 5, 0]);
        assert!(progress.continues());
    }

    #[test]
    fn test_re_advance_is_idempotent() {
        let mut g = game();
        let first = g.advance();
        let snapshot = g.clone();
        let second = g.advance();
        assert_eq!(first, second);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_invalid_choice_leaves_state() {
        let mut g = game();
        g.advance();
        let before = g.clone();
        let err = g.provide_input(9).unwrap_err();
        assert!(matches!(err, ChoiceError::InvalidChoice { choice: 9, .. }));
        assert!(err.is_recoverable());
        assert_eq!(g, before);
    }

    #[test]
    fn test_no_pending_input() {
        let mut g = game();
        assert_eq!(g.provide_input(0), Err(ChoiceError::NoPendingInput));
    }

    #[test]
    fn test_wrong_player() {
        let mut g = game();
        g.advance();
        assert_eq!(
            g.provide_input_for(1, 0),
            Err(ChoiceError::NotYourTurn { expected: 0, got: 1 })
        );
        assert!(g.provide_input_for(0, 0).is_ok());
        assert_eq!(g.stage(), &Stage::Day(DayStage::Play1));
    }

    #[test]
    fn test_game_over() {
        let mut g = game();
        g.eliminate(0);
        g.eliminate(0);
        assert_eq!(g.advance(), Progress::GameOver);
        assert!(!g.advance().continues());
        assert_eq!(g.provide_input(0), Err(ChoiceError::GameOver));
    }
}
