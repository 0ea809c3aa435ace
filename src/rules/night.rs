//! Night: deal night cards, then resolve queue heads round-robin.
//!
//! A round visits every active player once, starting at the cursor. Each
//! visit resolves at most the head of that player's queue. The night ends
//! after a round in which nobody had a card.

use log::{debug, info};

use super::engine::Step;
use super::prompt::{choice_index, stack_numbers, InputContext, Prompt, RenderHint, TAKE_HIT};
use super::stage::{NightRound, NightStage, Phase, Stage};
use crate::cards::{NightCard, ZombieKind};
use crate::core::Game;

/// Shield choice: spend it.
pub const USE_SHIELD: i32 = 1;
/// Shield choice: keep it.
pub const KEEP_SHIELD: i32 = 0;

impl Game {
    pub(crate) fn night_step(&mut self, stage: NightStage) -> Step {
        match stage {
            NightStage::Deal => {
                self.deal_night();
                Step::Continue
            }
            NightStage::ProcessCards => self.process_cards(),
            stage => Step::Suspend(self.night_prompt(&stage)),
        }
    }

    fn deal_night(&mut self) {
        let per_player = self.night_num;
        for offset in 0..self.players.len() {
            let p = self.player_after(offset);
            for _ in 0..per_player {
                if let Some(card) = self.draw_night() {
                    self.players[p].farm.queue_night_card(card);
                }
            }
        }
        self.round = NightRound::start(self.players.len());
        info!("night {} begins, {} cards each", self.night_num, per_player);
        self.set_stage(Stage::Night(NightStage::ProcessCards));
    }

    fn process_cards(&mut self) -> Step {
        if self.round.remaining == 0 {
            if !self.round.progressed {
                return self.end_night();
            }
            self.round = NightRound::start(self.players.len());
        }
        let next = self.players[self.current].farm.next_night_card();
        let stage = match next {
            None => {
                self.round.remaining -= 1;
                self.next_player();
                return Step::Continue;
            }
            Some(NightCard::Zombie(zombie)) => self.zombie_stage(zombie),
            Some(NightCard::Event(event)) => NightStage::EventConfirm { event },
        };
        self.set_stage(Stage::Night(stage));
        Step::Continue
    }

    /// Free kill first, then a real choice, else the hit.
    fn zombie_stage(&self, zombie: ZombieKind) -> NightStage {
        let farm = &self.players[self.current].farm;
        if let Some(&stack) = farm.free_defenses(zombie).first() {
            return NightStage::ZombieAutoKilled { zombie, stack };
        }
        let candidates = farm.matching_defenses(zombie);
        if candidates.is_empty() {
            NightStage::NoDefense { zombie }
        } else {
            NightStage::ChooseDefense { zombie, candidates }
        }
    }

    fn end_night(&mut self) -> Step {
        info!("night {} is over", self.night_num);
        self.night_num += 1;
        self.phase = Phase::Morning;
        self.day_turns = 0;
        self.round = NightRound::default();
        self.set_stage(Stage::START);
        Step::DayComplete
    }

    fn night_prompt(&self, stage: &NightStage) -> Prompt {
        let player = self.current;
        let name = &self.players[player].name;
        let farm = &self.players[player].farm;
        let prompt = match stage {
            NightStage::Deal | NightStage::ProcessCards => {
                Prompt::confirm(player, "press 0 to continue")
            }
            NightStage::ZombieAutoKilled { zombie, stack } => {
                let defense = farm.stack(*stack).map_or("a defense", |s| s.defense_name(*zombie));
                Prompt::confirm(
                    player,
                    format!(
                        "{name}: {} auto-killed by {defense}, press 0 to continue",
                        zombie.name()
                    ),
                )
            }
            NightStage::NoDefense { zombie } => Prompt::confirm(
                player,
                format!(
                    "{name}: no defense against {}, will lose a life, press 0 to continue",
                    zombie.name()
                ),
            ),
            NightStage::ChooseDefense { zombie, candidates } => {
                let numbers: Vec<String> =
                    stack_numbers(candidates).map(|n| n.to_string()).collect();
                Prompt::new(
                    InputContext::Defense,
                    player,
                    format!(
                        "{name}: choose stack to use against {} or -1 to take life (stacks: {})",
                        zombie.name(),
                        numbers.join(", ")
                    ),
                    stack_numbers(candidates).chain([TAKE_HIT]),
                )
                .with_candidates(candidates)
            }
            NightStage::ChooseShield { .. } => Prompt::new(
                InputContext::Shield,
                player,
                format!("{name}: use shield to save stack from exploding zombie? (1=yes, 0=no)"),
                [USE_SHIELD, KEEP_SHIELD],
            ),
            NightStage::ConfirmLifeLoss { .. } => {
                Prompt::confirm(player, format!("{name}: will lose a life, press 0 to continue"))
            }
            NightStage::Eliminated { player: out } => {
                let out_name = self.players.get(*out).map_or(name, |p| &p.name);
                Prompt::confirm(
                    *out,
                    format!("{out_name} has been eliminated! Press 0 to continue"),
                )
            }
            NightStage::EventConfirm { event } => Prompt::confirm(
                player,
                format!("{name}: {}! {} Press 0 to continue", event.name(), event.description()),
            ),
            NightStage::EventDiscard { event, progress } => {
                return self.event_discard_prompt(*event, *progress);
            }
        };
        prompt.with_render(RenderHint::ForNight)
    }

    pub(crate) fn night_input(&mut self, stage: NightStage, choice: i32) {
        match stage {
            NightStage::Deal | NightStage::ProcessCards => {}
            NightStage::ZombieAutoKilled { zombie, stack } => self.kill(zombie, stack, false),
            NightStage::NoDefense { zombie } | NightStage::ConfirmLifeLoss { zombie } => {
                self.lose_life(zombie);
            }
            NightStage::ChooseDefense { zombie, .. } => {
                if choice == TAKE_HIT {
                    self.set_stage(Stage::Night(NightStage::ConfirmLifeLoss { zombie }));
                    return;
                }
                let stack = choice_index(choice);
                if self.players[self.current].farm.shield_can_save(stack, zombie) {
                    self.set_stage(Stage::Night(NightStage::ChooseShield { zombie, stack }));
                } else {
                    self.kill(zombie, stack, false);
                }
            }
            NightStage::ChooseShield { zombie, stack } => {
                self.kill(zombie, stack, choice == USE_SHIELD);
            }
            NightStage::Eliminated { player } => {
                if let Some(out) = self.players.get_mut(player) {
                    let card = out.farm.pop_night_card();
                    self.discard_night(card);
                }
                self.eliminate(player);
                self.round.remaining = self.round.remaining.saturating_sub(1);
                self.round.progressed = true;
                self.set_stage(Stage::Night(NightStage::ProcessCards));
            }
            NightStage::EventConfirm { event } => self.run_event(event),
            NightStage::EventDiscard { event, progress } => {
                self.event_discard(event, progress, choice);
            }
        }
    }

    fn kill(&mut self, zombie: ZombieKind, stack: usize, use_shield: bool) {
        let player = self.current_mut();
        let defense = player.farm.stack(stack).map_or("a defense", |s| s.defense_name(zombie));
        debug!("{} kills {} with {}", player.name, zombie.name(), defense);
        let spent = player.farm.apply_defense(stack, zombie, use_shield);
        self.discard_day(spent);
        self.stats.zombies_killed += 1;
        self.finish_card();
    }

    fn lose_life(&mut self, zombie: ZombieKind) {
        let player = self.current_mut();
        player.lives -= 1;
        info!("{} loses a life to {}, {} left", player.name, zombie.name(), player.lives);
        let eliminated = player.is_eliminated();
        self.stats.lives_lost += 1;
        if eliminated {
            // The zombie stays queued until the elimination is confirmed.
            let out = self.current;
            self.set_stage(Stage::Night(NightStage::Eliminated { player: out }));
        } else {
            self.finish_card();
        }
    }

    /// Discard the resolved head card and move to the next player.
    pub(super) fn finish_card(&mut self) {
        let card = self.current_mut().farm.pop_night_card();
        self.discard_night(card);
        self.round.progressed = true;
        self.round.remaining = self.round.remaining.saturating_sub(1);
        self.next_player();
        self.set_stage(Stage::Night(NightStage::ProcessCards));
    }
}
