//! A session shared between threads, e.g. one per connected client.
//!
//! Reads take the read lock; every mutation goes through the single write
//! lock, so choices from different players are applied one at a time. A
//! poisoned lock is recovered: the state machine never leaves `Game`
//! half-updated when a handler returns.
//!
//! The session is kept parked on a prompt: it advances once when shared
//! and after every accepted choice runs on through completed days until
//! the next prompt or the end of the game. Clients only ever answer a
//! prompt they could have seen.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::facade::GameSession;
use super::snapshot::GameSnapshot;
use crate::core::ChoiceError;
use crate::rules::{Progress, Prompt};

/// Cheaply clonable handle to one session.
#[derive(Clone, Debug)]
pub struct SharedSession {
    inner: Arc<RwLock<GameSession>>,
}

impl SharedSession {
    /// Share `session`, advancing it to its first prompt.
    #[must_use]
    pub fn new(mut session: GameSession) -> Self {
        let progress = session.advance();
        Self::settle(&mut session, progress);
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.read().snapshot()
    }

    #[must_use]
    pub fn pending_prompt(&self) -> Option<Prompt> {
        self.read().pending_prompt().cloned()
    }

    pub fn advance(&self) -> Progress {
        self.write().advance()
    }

    /// Apply `player`'s choice to the outstanding prompt.
    ///
    /// With nothing outstanding the choice is rejected and the game is
    /// left as it was.
    pub fn submit(&self, player: usize, choice: i32) -> Result<Progress, ChoiceError> {
        let mut session = self.write();
        if session.is_over() {
            return Err(ChoiceError::GameOver);
        }
        if session.pending_prompt().is_none() {
            return Err(ChoiceError::NoPendingInput);
        }
        let progress = session.provide_input_for(player, choice)?;
        Ok(Self::settle(&mut session, progress))
    }

    /// Run past completed days until a prompt is out or the game is over.
    fn settle(session: &mut GameSession, mut progress: Progress) -> Progress {
        while progress == Progress::DayComplete {
            progress = session.advance();
        }
        progress
    }

    /// Run `f` with exclusive access.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut self.write())
    }

    fn read(&self) -> RwLockReadGuard<'_, GameSession> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameSession> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
