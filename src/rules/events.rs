//! Night events: run after their confirmation, never before.
//!
//! Discard events walk players from the drawing player in turn order and
//! suspend once per item. Every other effect completes in one step.

use log::{debug, info};

use super::prompt::{choice_index, InputContext, Prompt, RenderHint};
use super::stage::{DiscardProgress, NightStage, Stage};
use crate::cards::{EventEffect, EventKind};
use crate::core::Game;

impl Game {
    pub(super) fn run_event(&mut self, event: EventKind) {
        info!("{} draws {}", self.players[self.current].name, event.name());
        match event.effect() {
            EventEffect::DiscardFromFarms(count) => {
                self.next_discarder(event, 0, count);
                return;
            }
            EventEffect::ExtraNightCards(count) => {
                for offset in 0..self.players.len() {
                    let p = self.player_after(offset);
                    for _ in 0..count {
                        if let Some(card) = self.draw_night() {
                            self.players[p].farm.queue_night_card(card);
                        }
                    }
                }
            }
            EventEffect::DestroyItems(targets) => {
                for p in 0..self.players.len() {
                    let destroyed = self.players[p].farm.destroy_all(targets);
                    self.discard_day(destroyed);
                }
            }
            EventEffect::ClearNightCards => {
                let current = self.current;
                for p in 0..self.players.len() {
                    let farm = &mut self.players[p].farm;
                    // The event itself stays queued until it is finished.
                    let cleared = if p == current {
                        farm.take_night_cards_after_head()
                    } else {
                        farm.take_night_cards()
                    };
                    self.discard_night(cleared);
                }
            }
        }
        self.finish_event(event);
    }

    /// Visit players from `offset` until one has to choose discards.
    fn next_discarder(&mut self, event: EventKind, offset: usize, count: u8) {
        for offset in offset..self.players.len() {
            let p = self.player_after(offset);
            let items = self.players[p].farm.item_count();
            if items == 0 {
                continue;
            }
            if items <= usize::from(count) {
                debug!("{} discards the whole farm", self.players[p].name);
                let all = self.players[p].farm.clear_stacks();
                self.discard_day(all);
                continue;
            }
            let progress = DiscardProgress {
                player_offset: offset,
                remaining: count,
            };
            self.set_stage(Stage::Night(NightStage::EventDiscard { event, progress }));
            return;
        }
        self.finish_event(event);
    }

    pub(super) fn event_discard(
        &mut self,
        event: EventKind,
        progress: DiscardProgress,
        choice: i32,
    ) {
        let p = self.player_after(progress.player_offset);
        let removed = self.players[p].farm.remove_flat(choice_index(choice));
        if let Some(item) = removed {
            debug!("{} discards {}", self.players[p].name, item.name());
        }
        self.discard_day(removed);

        let remaining = progress.remaining.saturating_sub(1);
        if remaining > 0 && self.players[p].farm.item_count() > 0 {
            let progress = DiscardProgress { remaining, ..progress };
            self.set_stage(Stage::Night(NightStage::EventDiscard { event, progress }));
        } else {
            self.next_discarder(event, progress.player_offset + 1, discard_count(event));
        }
    }

    pub(super) fn event_discard_prompt(
        &self,
        event: EventKind,
        progress: DiscardProgress,
    ) -> Prompt {
        let p = self.player_after(progress.player_offset);
        let player = &self.players[p];
        let total = discard_count(event);
        let nth = total.saturating_sub(progress.remaining) + 1;
        Prompt::new(
            InputContext::EventDiscard,
            p,
            format!("{}: choose card to discard ({nth}/{total})", player.name),
            1..=player.farm.item_count() as i32,
        )
        .with_render(RenderHint::ForDiscard)
    }

    fn finish_event(&mut self, event: EventKind) {
        self.stats.events_resolved += 1;
        debug!("{} resolved", event.name());
        self.finish_card();
    }
}

fn discard_count(event: EventKind) -> u8 {
    match event.effect() {
        EventEffect::DiscardFromFarms(count) => count,
        _ => 0,
    }
}
