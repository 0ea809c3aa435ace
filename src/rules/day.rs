//! Day turns: discard, play two cards, draw two.
//!
//! Morning and afternoon each give every player one turn in order. When
//! the afternoon's last turn ends the night begins.

use log::{debug, info};

use super::engine::Step;
use super::prompt::{stack_numbers, InputContext, Prompt, CONFIRM};
use super::stage::{DayStage, NightStage, Phase, Stage};
use crate::cards::FarmItem;
use crate::core::Game;
use crate::farm::PlacementOutcome;

/// Draw choice: take the public pair.
pub const DRAW_PUBLIC: i32 = 1;
/// Draw choice: take two from the deck.
pub const DRAW_DECK: i32 = 2;

impl Game {
    pub(crate) fn day_step(&mut self, stage: DayStage) -> Step {
        let hand_empty = self.current_mut().hand.is_empty();
        match stage {
            DayStage::OptionalDiscard | DayStage::Play1 | DayStage::Play2 if hand_empty => {
                self.set_stage(Stage::Day(DayStage::Draw));
                Step::Continue
            }
            stage => Step::Suspend(self.day_prompt(&stage)),
        }
    }

    fn day_prompt(&self, stage: &DayStage) -> Prompt {
        let player = self.current;
        let hand = &self.players[player].hand;
        let n = hand.len();
        match stage {
            DayStage::OptionalDiscard => Prompt::new(
                InputContext::Discard,
                player,
                format!("1-{n} to discard, 0 to skip"),
                hand.slot_choices().into_iter().chain([CONFIRM]),
            ),
            DayStage::Play1 | DayStage::Play2 => Prompt::new(
                InputContext::Play,
                player,
                format!("1-{n} in your hand to play"),
                hand.slot_choices(),
            ),
            DayStage::Play1Stack { item, candidates }
            | DayStage::Play2Stack { item, candidates } => {
                let numbers: Vec<String> =
                    stack_numbers(candidates).map(|n| n.to_string()).collect();
                Prompt::new(
                    InputContext::PlayCard,
                    player,
                    format!(
                        "{} (stack {}), or 0 for a new stack",
                        placement_question(*item),
                        numbers.join(", ")
                    ),
                    stack_numbers(candidates).chain([0]),
                )
                .with_item(*item)
                .with_candidates(candidates)
            }
            DayStage::Draw => {
                let [a, b] = self.public_cards;
                let public: Vec<String> =
                    [a, b].iter().flatten().map(FarmItem::to_string).collect();
                let mut choices = Vec::with_capacity(2);
                if !public.is_empty() {
                    choices.push(DRAW_PUBLIC);
                }
                choices.push(DRAW_DECK);
                Prompt::new(
                    InputContext::Draw,
                    player,
                    format!("1 for public cards ({}), 2 for deck", public.join(", ")),
                    choices,
                )
            }
        }
    }

    pub(crate) fn day_input(&mut self, stage: DayStage, choice: i32) {
        let slot = usize::try_from(choice).unwrap_or(0);
        match stage {
            DayStage::OptionalDiscard => {
                if let Some(item) = self.current_mut().hand.take(slot) {
                    debug!("{} discards {}", self.players[self.current].name, item.name());
                    self.discard_day([item]);
                    if let Some(fresh) = self.draw_day() {
                        self.give_card(fresh);
                    }
                }
                self.set_stage(Stage::Day(DayStage::Play1));
            }
            DayStage::Play1 => self.play_from_hand(slot, true),
            DayStage::Play2 => self.play_from_hand(slot, false),
            DayStage::Play1Stack { item, .. } => {
                self.place_chosen(item, slot);
                self.set_stage(Stage::Day(DayStage::Play2));
            }
            DayStage::Play2Stack { item, .. } => {
                self.place_chosen(item, slot);
                self.set_stage(Stage::Day(DayStage::Draw));
            }
            DayStage::Draw => {
                if choice == DRAW_PUBLIC {
                    let pair = self.public_cards;
                    for item in pair.into_iter().flatten() {
                        self.give_card(item);
                    }
                    self.deal_public_cards();
                } else {
                    for _ in 0..2 {
                        if let Some(item) = self.draw_day() {
                            self.give_card(item);
                        }
                    }
                }
                self.end_turn();
            }
        }
    }

    fn play_from_hand(&mut self, slot: usize, first: bool) {
        let next = if first { DayStage::Play2 } else { DayStage::Draw };
        let player = self.current_mut();
        let Some(item) = player.hand.take(slot) else {
            self.set_stage(Stage::Day(next));
            return;
        };
        let choices = player.choices;
        match player.farm.place_card(item, choices) {
            PlacementOutcome::Placed { stack } => {
                debug!("{} plays {} to stack {}", player.name, item.name(), stack + 1);
                self.set_stage(Stage::Day(next));
            }
            PlacementOutcome::NeedsChoice { candidates, reason } => {
                debug!("{} must place {}: {}", player.name, item.name(), reason);
                let stage = if first {
                    DayStage::Play1Stack { item, candidates }
                } else {
                    DayStage::Play2Stack { item, candidates }
                };
                self.set_stage(Stage::Day(stage));
            }
        }
    }

    /// Settle a placement choice: 0 starts a new stack, n joins stack n.
    fn place_chosen(&mut self, item: FarmItem, choice: usize) {
        let target = choice.checked_sub(1);
        self.current_mut().farm.place_in(item, target);
    }

    /// Put a card in the current player's hand, discarding it if full.
    fn give_card(&mut self, item: FarmItem) {
        if !self.current_mut().hand.insert(item) {
            self.discard_day([item]);
        }
    }

    fn end_turn(&mut self) {
        self.next_player();
        self.day_turns += 1;
        if self.day_turns < self.players.len() {
            self.set_stage(Stage::START);
            return;
        }
        self.day_turns = 0;
        match self.phase {
            Phase::Morning => {
                self.phase = Phase::Afternoon;
                info!("afternoon begins");
                self.set_stage(Stage::START);
            }
            Phase::Afternoon | Phase::Night => {
                self.phase = Phase::Night;
                self.set_stage(Stage::Night(NightStage::Deal));
            }
        }
    }
}

fn placement_question(item: FarmItem) -> &'static str {
    match item {
        FarmItem::HayBale => "choose which hay wall to build",
        FarmItem::Ammo => "choose which shotgun to load",
        FarmItem::Shotgun => "choose which ammo to load into the shotgun",
        _ => "choose a stack",
    }
}
