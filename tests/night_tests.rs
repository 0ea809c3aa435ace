//! Night phase scenario tests.
//!
//! Each test plays a real day up to the last draw of the afternoon, rigs
//! farms and the night deck, then draws to start the night.

use zombie_chickens::cards::{EventKind, FarmItem, NightCard, ZombieKind};
use zombie_chickens::core::GameConfig;
use zombie_chickens::farm::Stack;
use zombie_chickens::rules::{
    InputContext, NightStage, Phase, Progress, RenderHint, Stage, CONFIRM, DRAW_DECK, TAKE_HIT,
};
use zombie_chickens::session::GameSession;

fn session_with(players: usize, config: GameConfig) -> GameSession {
    let names: Vec<String> = (0..players).map(|i| format!("Player {}", i + 1)).collect();
    GameSession::create_with_config(&names, &config).unwrap()
}

fn session(players: usize, seed: u64) -> GameSession {
    session_with(players, GameConfig::new(seed))
}

/// Play first choices until the last player's afternoon draw is pending.
fn play_to_dusk(s: &mut GameSession) {
    let mut progress = s.advance();
    loop {
        let prompt = match &progress {
            Progress::NeedsInput(prompt) => prompt.clone(),
            Progress::DayComplete => {
                progress = s.advance();
                continue;
            }
            Progress::GameOver => panic!("game ended before dusk"),
        };
        let game = s.game();
        if game.phase() == Phase::Afternoon
            && prompt.context == InputContext::Draw
            && game.current_index() == game.players().len() - 1
        {
            return;
        }
        progress = s.provide_input(prompt.valid_choices[0]).unwrap();
    }
}

fn zombie(kind: ZombieKind) -> NightCard {
    NightCard::Zombie(kind)
}

fn event(kind: EventKind) -> NightCard {
    NightCard::Event(kind)
}

fn nightfall(s: &mut GameSession) -> Progress {
    s.provide_input(DRAW_DECK).unwrap()
}

// =============================================================================
// Defense Resolution
// =============================================================================

#[test]
fn test_scarecrow_does_not_stop_crawler() {
    let mut s = session(1, 11);
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, [Stack::single(FarmItem::Scarecrow)]));
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Crawler)]));
    let lives = game.players()[0].lives;

    let progress = nightfall(&mut s);
    let prompt = progress.prompt().unwrap();
    assert_eq!(prompt.context, InputContext::Confirm);
    assert_eq!(prompt.render, RenderHint::ForNight);
    assert!(prompt.message.contains("no defense against Crawler"));
    assert_eq!(
        s.game().stage(),
        &Stage::Night(NightStage::NoDefense { zombie: ZombieKind::Crawler })
    );
    // Nothing is lost before the confirmation.
    assert_eq!(s.game().players()[0].lives, lives);

    assert_eq!(s.provide_input(CONFIRM), Ok(Progress::DayComplete));
    assert_eq!(s.game().players()[0].lives, lives - 1);
    assert_eq!(s.game().players()[0].farm.stacks(), &[Stack::single(FarmItem::Scarecrow)]);
    assert_eq!(s.stats().lives_lost, 1);
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_loaded_shotgun_is_never_automatic() {
    let mut s = session(1, 12);
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, [Stack::from_items([FarmItem::Shotgun, FarmItem::Ammo])]));
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Biter)]));

    let progress = nightfall(&mut s);
    let prompt = progress.prompt().unwrap();
    assert_eq!(prompt.context, InputContext::Defense);
    assert_eq!(prompt.valid_choices.as_slice(), &[1, TAKE_HIT]);

    assert_eq!(s.provide_input(1), Ok(Progress::DayComplete));
    assert_eq!(s.game().players()[0].farm.stacks(), &[Stack::single(FarmItem::Shotgun)]);
    assert_eq!(s.stats().zombies_killed, 1);
    assert_eq!(s.stats().lives_lost, 0);
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_declining_defense_asks_before_the_hit() {
    let mut s = session(1, 13);
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, [Stack::from_items([FarmItem::Shotgun, FarmItem::Ammo])]));
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Biter)]));
    let lives = game.players()[0].lives;

    nightfall(&mut s);
    let progress = s.provide_input(TAKE_HIT).unwrap();
    assert!(progress.prompt().unwrap().message.contains("will lose a life"));
    assert_eq!(s.game().players()[0].lives, lives);

    assert_eq!(s.provide_input(CONFIRM), Ok(Progress::DayComplete));
    assert_eq!(s.game().players()[0].lives, lives - 1);
    // The declined shotgun keeps its ammo.
    assert_eq!(s.game().players()[0].farm.item_count(), 2);
}

#[test]
fn test_scarecrow_scares_timid_zombie_for_free() {
    let mut s = session(1, 14);
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, [Stack::single(FarmItem::Scarecrow)]));
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Chomper)]));

    let progress = nightfall(&mut s);
    assert!(progress.prompt().unwrap().message.contains("auto-killed"));
    assert_eq!(s.provide_input(CONFIRM), Ok(Progress::DayComplete));
    assert_eq!(s.game().players()[0].farm.stacks(), &[Stack::single(FarmItem::Scarecrow)]);
    assert_eq!(s.stats().zombies_killed, 1);
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn test_blood_moon_adds_three_cards() {
    let mut s = session(1, 15);
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, Vec::<Stack>::new()));
    assert!(game.rig_night_deck(&[event(EventKind::BloodMoon)]));

    let progress = nightfall(&mut s);
    assert!(progress.prompt().unwrap().message.contains("Blood Moon"));
    assert_eq!(s.game().players()[0].farm.night_cards().len(), 1);

    s.provide_input(CONFIRM).unwrap();
    // The event is spent and three new cards wait behind it.
    assert_eq!(s.game().players()[0].farm.night_cards().len(), 3);
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_lightning_storm_starts_with_drawing_player() {
    let mut s = session(2, 16);
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(
        0,
        [
            Stack::single(FarmItem::HayBale),
            Stack::from_items([FarmItem::HayBale, FarmItem::HayBale]),
        ]
    ));
    assert!(game.rig_farm(
        1,
        [Stack::from_items([FarmItem::Ammo, FarmItem::Ammo]), Stack::single(FarmItem::HayBale)]
    ));
    // Player 1 deals first, so Player 2 draws the storm.
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Biter), event(EventKind::LightningStorm)]));

    let mut progress = nightfall(&mut s);
    assert_eq!(progress.prompt().unwrap().player, 0);
    progress = s.provide_input(CONFIRM).unwrap();
    assert_eq!(progress.prompt().unwrap().player, 1);
    assert!(progress.prompt().unwrap().message.contains("Lightning Storm"));

    let mut discarders = Vec::new();
    progress = s.provide_input(CONFIRM).unwrap();
    while let Some(prompt) = progress.prompt().cloned() {
        assert_eq!(prompt.context, InputContext::EventDiscard);
        assert_eq!(s.active_input_player(), prompt.player);
        discarders.push(prompt.player);
        progress = s.provide_input(1).unwrap();
    }
    assert_eq!(discarders, vec![1, 1, 0, 0]);
    assert_eq!(progress, Progress::DayComplete);
    assert_eq!(s.game().players()[0].farm.item_count(), 1);
    assert_eq!(s.game().players()[1].farm.item_count(), 1);
    assert_eq!(s.stats().events_resolved, 1);
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_silent_night_ends_the_night() {
    let mut s = session(2, 17);
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_night_deck(&[event(EventKind::SilentNight), zombie(ZombieKind::Biter)]));

    nightfall(&mut s);
    assert_eq!(s.provide_input(CONFIRM), Ok(Progress::DayComplete));
    assert_eq!(s.stats().lives_lost, 0);
    assert_eq!(s.game().phase(), Phase::Morning);
    assert_eq!(s.game().night_num(), 2);
    assert!(s.game().players().iter().all(|p| p.farm.night_cards().is_empty()));
}

// =============================================================================
// Elimination
// =============================================================================

#[test]
fn test_elimination_at_zero_lives() {
    let mut s = session_with(1, GameConfig::new(18).with_starting_lives([2; 4]));

    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, Vec::<Stack>::new()));
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Biter)]));
    nightfall(&mut s);
    assert_eq!(s.provide_input(CONFIRM), Ok(Progress::DayComplete));
    // One life left is still in the game.
    assert_eq!(s.game().players()[0].lives, 1);
    assert!(!s.is_over());

    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, Vec::<Stack>::new()));
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Biter), zombie(ZombieKind::Biter)]));
    nightfall(&mut s);
    let progress = s.provide_input(CONFIRM).unwrap();
    let prompt = progress.prompt().unwrap();
    assert!(prompt.message.contains("has been eliminated"));
    assert_eq!(s.game().players()[0].lives, 0);

    assert_eq!(s.provide_input(CONFIRM), Ok(Progress::GameOver));
    assert!(s.is_over());
    assert_eq!(s.stats().players_eliminated, 1);
    assert_eq!(s.stats().lives_lost, 2);
    assert!(s.game().check_invariants().is_ok());
}

#[test]
fn test_eliminated_player_leaves_turn_order() {
    let mut s = session_with(2, GameConfig::new(19).with_starting_lives([1; 4]));
    play_to_dusk(&mut s);
    let game = s.game_mut();
    assert!(game.rig_farm(0, Vec::<Stack>::new()));
    assert!(game.rig_farm(1, [Stack::single(FarmItem::Scarecrow)]));
    assert!(game.rig_night_deck(&[zombie(ZombieKind::Biter), zombie(ZombieKind::Chomper)]));

    nightfall(&mut s);
    s.provide_input(CONFIRM).unwrap();
    s.provide_input(CONFIRM).unwrap();
    assert_eq!(s.game().players().len(), 1);
    assert_eq!(s.game().players()[0].name, "Player 2");

    let progress = s.advance();
    assert_eq!(progress.prompt().unwrap().player, 0);
    assert!(s.game().check_invariants().is_ok());
}
