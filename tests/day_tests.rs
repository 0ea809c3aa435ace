//! Day phase integration tests.
//!
//! Drive morning and afternoon turns through the public session API and
//! check turn order, card placement and drawing.

use zombie_chickens::cards::FarmItem;
use zombie_chickens::core::{GameConfig, PlayChoices};
use zombie_chickens::farm::Stack;
use zombie_chickens::rules::{InputContext, Phase, DRAW_DECK};
use zombie_chickens::session::GameSession;

fn session(players: usize, seed: u64) -> GameSession {
    let names: Vec<String> = (0..players).map(|i| format!("Player {}", i + 1)).collect();
    GameSession::create_with_config(&names, &GameConfig::new(seed)).unwrap()
}

// =============================================================================
// Turn Order
// =============================================================================

#[test]
fn test_morning_then_afternoon_turn_order() {
    let mut s = session(3, 42);
    let mut turns = Vec::new();
    let mut progress = s.advance();
    while s.game().phase() != Phase::Night {
        let prompt = progress.prompt().unwrap().clone();
        if prompt.context == InputContext::Discard {
            turns.push((s.game().phase(), prompt.player));
        }
        progress = s.provide_input(prompt.valid_choices[0]).unwrap();
    }
    assert_eq!(
        turns,
        vec![
            (Phase::Morning, 0),
            (Phase::Morning, 1),
            (Phase::Morning, 2),
            (Phase::Afternoon, 0),
            (Phase::Afternoon, 1),
            (Phase::Afternoon, 2),
        ]
    );
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_turn_stages_in_order() {
    let mut s = session(1, 7);
    assert!(s.game_mut().rig_hand(0, &[FarmItem::Scarecrow, FarmItem::Shield, FarmItem::HayBale]));
    let contexts: Vec<InputContext> = [0, 1, 1, DRAW_DECK]
        .into_iter()
        .map(|choice| {
            let context = s.advance().prompt().unwrap().context;
            s.provide_input(choice).unwrap();
            context
        })
        .collect();
    assert_eq!(
        contexts,
        vec![InputContext::Discard, InputContext::Play, InputContext::Play, InputContext::Draw]
    );
    assert_eq!(s.game().phase(), Phase::Afternoon);
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_hay_bale_goes_to_double_stack() {
    let mut s = session(1, 3);
    let game = s.game_mut();
    assert!(game.rig_farm(
        0,
        [
            Stack::single(FarmItem::HayBale),
            Stack::from_items([FarmItem::HayBale, FarmItem::HayBale]),
        ]
    ));
    assert!(game.rig_hand(0, &[FarmItem::HayBale, FarmItem::Scarecrow]));

    s.advance();
    s.provide_input(0).unwrap();
    let progress = s.provide_input(1).unwrap();
    // Placed without asking.
    assert_eq!(progress.prompt().unwrap().context, InputContext::Play);

    let stacks = s.game().players()[0].farm.stacks();
    assert_eq!(stacks[0].count(FarmItem::HayBale), 1);
    assert_eq!(stacks[1].count(FarmItem::HayBale), 3);
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_manual_ammo_asks_for_shotgun() {
    let mut s = session(1, 5);
    assert!(s.set_play_choices(0, PlayChoices::MANUAL));
    let game = s.game_mut();
    assert!(game.rig_farm(
        0,
        [
            Stack::from_items([FarmItem::Shotgun, FarmItem::Ammo]),
            Stack::single(FarmItem::Shotgun),
        ]
    ));
    assert!(game.rig_hand(0, &[FarmItem::Ammo, FarmItem::Fuel]));

    s.advance();
    s.provide_input(0).unwrap();
    let progress = s.provide_input(1).unwrap();
    let prompt = progress.prompt().unwrap();
    assert_eq!(prompt.context, InputContext::PlayCard);
    assert_eq!(prompt.item, Some(FarmItem::Ammo));
    assert_eq!(prompt.candidate_stacks.as_slice(), &[0, 1]);
    assert_eq!(prompt.valid_choices.as_slice(), &[1, 2, 0]);

    // Re-advancing while suspended changes nothing.
    let before = s.clone();
    assert_eq!(s.advance(), progress);
    assert_eq!(s, before);

    s.provide_input(0).unwrap();
    let stacks = s.game().players()[0].farm.stacks();
    assert_eq!(stacks.len(), 3);
    assert_eq!(stacks[2], Stack::single(FarmItem::Ammo));
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_invalid_stack_choice_rejected() {
    let mut s = session(1, 6);
    s.set_play_choices(0, PlayChoices::MANUAL);
    let game = s.game_mut();
    assert!(game.rig_farm(0, [Stack::single(FarmItem::HayBale), Stack::single(FarmItem::HayBale)]));
    assert!(game.rig_hand(0, &[FarmItem::HayBale]));
    s.advance();
    s.provide_input(0).unwrap();
    s.provide_input(1).unwrap();
    assert!(s.provide_input(3).is_err());
    assert!(s.provide_input(-1).is_err());
    assert!(s.game().check_invariants().is_ok());
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_empty_hand_goes_straight_to_draw() {
    let mut s = session(1, 9);
    assert!(s.game_mut().rig_hand(0, &[]));
    let progress = s.advance();
    assert_eq!(progress.prompt().unwrap().context, InputContext::Draw);
    s.provide_input(DRAW_DECK).unwrap();
    assert_eq!(s.game().players()[0].hand.len(), 2);
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_public_pair_offered_by_name() {
    let mut s = session(1, 10);
    assert!(s.game_mut().rig_hand(0, &[]));
    let progress = s.advance();
    let prompt = progress.prompt().unwrap();
    assert_eq!(prompt.valid_choices.as_slice(), &[1, 2]);
    for item in s.game().public_cards().into_iter().flatten() {
        assert!(prompt.message.contains(&item.to_string()));
    }
}
