//! Session facade integration tests.
//!
//! Cover creation, rejected input, checkpoints, the shared session used
//! by multi-client front ends, the drive loop and text rendering.

use std::thread;

use zombie_chickens::cards::{NightCard, ZombieKind};
use zombie_chickens::core::{ChoiceError, CreateError, GameConfig};
use zombie_chickens::farm::Stack;
use zombie_chickens::render::{drive, Renderer, ScriptedInput, SeededChoice, TextRenderer};
use zombie_chickens::rules::{InputContext, Phase, Progress, RenderHint, CONFIRM, DRAW_DECK};
use zombie_chickens::session::{GameSession, GameSnapshot, SharedSession};

fn session(names: &[&str], seed: u64) -> GameSession {
    GameSession::create_with_config(names, &GameConfig::new(seed)).unwrap()
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn test_create_validates_players() {
    let none: [&str; 0] = [];
    assert_eq!(GameSession::create_new_game(&none).unwrap_err(), CreateError::NoPlayers);
    assert_eq!(
        GameSession::create_new_game(&["a", "b", "c", "d", "e"]).unwrap_err(),
        CreateError::TooManyPlayers(5)
    );
    assert_eq!(
        GameSession::create_new_game(&["a", "  "]).unwrap_err(),
        CreateError::EmptyName(1)
    );
}

#[test]
fn test_lives_depend_on_player_count() {
    let two = session(&["a", "b"], 1);
    assert!(two.game().players().iter().all(|p| p.lives == 5));
    let four = session(&["a", "b", "c", "d"], 1);
    let lives: Vec<i32> = four.game().players().iter().map(|p| p.lives).collect();
    assert_eq!(lives, vec![4, 4, 4, 4]);
}

#[test]
fn test_fresh_game_deals_hands_and_public_pair() {
    let s = session(&["a", "b", "c"], 2);
    assert!(s.game().players().iter().all(|p| p.hand.len() == 5));
    assert!(s.game().public_cards().iter().all(Option::is_some));
    assert_eq!(s.game().phase(), Phase::Morning);
    assert_eq!(s.game().night_num(), 1);
    assert!(s.pending_prompt().is_none());
    assert!(s.game().check_invariants().is_ok());
}

// =============================================================================
// Input Handling
// =============================================================================

#[test]
fn test_input_before_advance_is_rejected() {
    let mut s = session(&["a"], 3);
    assert_eq!(s.provide_input(0), Err(ChoiceError::NoPendingInput));
}

#[test]
fn test_rejected_choice_changes_nothing() {
    let mut s = session(&["a", "b"], 4);
    s.advance();
    let before = s.clone();
    let err = s.provide_input(42).unwrap_err();
    assert!(matches!(err, ChoiceError::InvalidChoice { choice: 42, .. }));
    assert!(err.is_recoverable());
    assert_eq!(s, before);

    let err = s.provide_input_for(1, 0).unwrap_err();
    assert_eq!(err, ChoiceError::NotYourTurn { expected: 0, got: 1 });
    assert_eq!(s, before);
}

#[test]
fn test_input_after_game_over_is_rejected() {
    let config = GameConfig::new(5).with_starting_lives([1; 4]);
    let mut s = GameSession::create_with_config(&["a"], &config).unwrap();
    let mut progress = s.advance();
    loop {
        let prompt = progress.prompt().cloned().unwrap();
        if s.game().phase() == Phase::Afternoon && prompt.context == InputContext::Draw {
            break;
        }
        progress = s.provide_input(prompt.valid_choices[0]).unwrap();
    }
    let game = s.game_mut();
    assert!(game.rig_farm(0, Vec::<Stack>::new()));
    assert!(game.rig_night_deck(&[NightCard::Zombie(ZombieKind::Biter)]));
    s.provide_input(DRAW_DECK).unwrap();
    s.provide_input(CONFIRM).unwrap();
    assert_eq!(s.provide_input(CONFIRM), Ok(Progress::GameOver));

    assert!(s.is_over());
    assert_eq!(s.advance(), Progress::GameOver);
    assert_eq!(s.provide_input(0), Err(ChoiceError::GameOver));
    assert!(s.snapshot().is_over());
    assert!(TextRenderer::plain().render(&s.snapshot(), RenderHint::Normal).ends_with("Game over"));
}

// =============================================================================
// Checkpoints
// =============================================================================

#[test]
fn test_checkpoint_resumes_identically() {
    let mut s = session(&["a", "b"], 6);
    drive(&mut s, &mut SeededChoice::new(1), 2);
    let prompt = s.advance().prompt().cloned().unwrap();

    let bytes = s.checkpoint().unwrap();
    let mut restored = GameSession::restore(&bytes).unwrap();
    assert_eq!(restored, s);
    assert_eq!(restored.pending_prompt(), Some(&prompt));

    let choice = prompt.valid_choices[0];
    assert_eq!(s.provide_input(choice), restored.provide_input(choice));
    let mut a = SeededChoice::new(2);
    let mut b = SeededChoice::new(2);
    drive(&mut s, &mut a, 2);
    drive(&mut restored, &mut b, 2);
    assert_eq!(s, restored);
}

#[test]
fn test_restore_rejects_garbage() {
    assert!(GameSession::restore(&[1, 2, 3]).is_err());
}

// =============================================================================
// Shared Session
// =============================================================================

#[test]
fn test_shared_session_orders_submissions() {
    let shared = SharedSession::new(session(&["a", "b", "c"], 7));
    // Sharing a game puts its first prompt out.
    assert_eq!(shared.pending_prompt().unwrap().context, InputContext::Discard);
    assert_eq!(shared.submit(1, 0), Err(ChoiceError::NotYourTurn { expected: 0, got: 1 }));
    shared.submit(0, 0).unwrap();
    assert_eq!(shared.pending_prompt().unwrap().context, InputContext::Play);

    let accepted: Vec<bool> = (0..3)
        .map(|player| {
            let shared = shared.clone();
            thread::spawn(move || shared.submit(player, 1).is_ok())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    // Player 0 keeps the turn until the draw, whatever order the threads run.
    assert_eq!(accepted, vec![true, false, false]);

    let snap = shared.snapshot();
    assert!(!snap.is_over());
    assert!(shared.with_session(|s| s.game().check_invariants().is_ok()));
}

#[test]
fn test_shared_session_only_current_player_lands() {
    let shared = SharedSession::new(session(&["a", "b"], 8));
    let results: Vec<bool> = (0..2)
        .map(|player| {
            let shared = shared.clone();
            thread::spawn(move || shared.submit(player, 0).is_ok())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    // Only player 0 is being asked, and skipping the discard keeps it
    // player 0's turn.
    assert_eq!(results, vec![true, false]);
    assert_eq!(shared.snapshot().active_input_player, 0);
}

// =============================================================================
// Driving And Rendering
// =============================================================================

#[test]
fn test_drive_keeps_invariants() {
    let mut s = session(&["a", "b", "c", "d"], 9);
    let outcome = drive(&mut s, &mut SeededChoice::new(3), 4);
    assert!(outcome.error.is_none());
    assert!(outcome.days_completed == 4 || outcome.game_over);
    assert!(s.game().check_invariants().is_ok());
    if !outcome.game_over {
        assert_eq!(s.game().night_num(), outcome.days_completed + 1);
    }
}

#[test]
fn test_scripted_drive_counts_rejections() {
    let mut s = session(&["a"], 10);
    let mut input = ScriptedInput::new([7, 0]);
    let outcome = drive(&mut s, &mut input, 1);
    assert_eq!(outcome.rejected, 1);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_render_follows_prompt_hint() {
    let mut s = session(&["Ada", "Bo"], 11);
    let prompt = s.advance().prompt().cloned().unwrap();
    let snap: GameSnapshot = s.snapshot();
    assert_eq!(snap.prompt.as_ref(), Some(&prompt));

    let text = TextRenderer::plain().render(&snap, prompt.render);
    assert!(text.contains("Morning 1"));
    assert!(text.contains("Ada : 5hp"));
    assert!(text.contains("Bo : 5hp"));
    assert!(text.ends_with("Ada's Morning"));
    assert_ne!(text, TextRenderer::plain().render(&snap, RenderHint::ForDiscard));
}
