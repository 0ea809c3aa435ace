//! The single entry point presentation layers talk to.

use log::{info, warn};

use super::snapshot::GameSnapshot;
use crate::core::{ChoiceError, CreateError, Game, GameConfig, GameStats, PlayChoices};
use crate::rules::{Progress, Prompt};

/// One game, driven by `advance` and `provide_input`.
///
/// ```
/// use zombie_chickens::rules::Progress;
/// use zombie_chickens::session::GameSession;
///
/// let mut session = GameSession::create_new_game(&["Ada", "Bo"]).unwrap();
/// let progress = session.advance();
/// let prompt = progress.prompt().unwrap();
/// assert_eq!(prompt.player, 0);
/// let first = prompt.valid_choices[0];
/// assert!(session.provide_input(first).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    game: Game,
}

impl GameSession {
    /// Start a game with a random seed and default rules.
    pub fn create_new_game<S: AsRef<str>>(names: &[S]) -> Result<Self, CreateError> {
        let config = GameConfig::new(rand::random());
        Self::create_with_config(names, &config)
    }

    pub fn create_with_config<S: AsRef<str>>(
        names: &[S],
        config: &GameConfig,
    ) -> Result<Self, CreateError> {
        Game::new(names, config).map(Self::from_game)
    }

    /// Wrap an existing (possibly rigged) game.
    #[must_use]
    pub fn from_game(game: Game) -> Self {
        Self { game }
    }

    /// Run until input is needed, the day ends or the game is over.
    ///
    /// Calling again without answering returns the same prompt.
    pub fn advance(&mut self) -> Progress {
        let progress = self.game.advance();
        if progress == Progress::DayComplete {
            info!("day complete, next is night {}: {}", self.game.night_num(), self.game.stats());
        }
        progress
    }

    /// Answer the outstanding prompt. Rejected choices change nothing.
    pub fn provide_input(&mut self, choice: i32) -> Result<Progress, ChoiceError> {
        self.game.provide_input(choice).inspect_err(|err| warn!("input {choice} rejected: {err}"))
    }

    /// Answer as `player`; anyone but the awaited player is rejected.
    pub fn provide_input_for(
        &mut self,
        player: usize,
        choice: i32,
    ) -> Result<Progress, ChoiceError> {
        self.game
            .provide_input_for(player, choice)
            .inspect_err(|err| warn!("input {choice} from player {player} rejected: {err}"))
    }

    #[must_use]
    pub fn pending_prompt(&self) -> Option<&Prompt> {
        self.game.pending_prompt()
    }

    /// The player whose answer is awaited.
    #[must_use]
    pub fn active_input_player(&self) -> usize {
        self.game.active_input_player()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.game)
    }

    pub fn set_play_choices(&mut self, player: usize, choices: PlayChoices) -> bool {
        self.game.set_play_choices(player, choices)
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.game.stats()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Direct access for rigging scenarios.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn checkpoint(&self) -> Result<Vec<u8>, bincode::Error> {
        self.game.checkpoint()
    }

    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        Game::restore(bytes).map(Self::from_game)
    }
}
