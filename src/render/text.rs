//! Plain-text table layout.
//!
//! ```text
//! Zombies Killed: 0 | Lives Lost: 0 | Events Played: 0 | Day Cards Discarded: 0
//! Morning 1
//! { Hay Bale, Ammo* }
//! ---
//! Ada : 5hp
//!
//! Farm:
//! { Shotgun, Ammo* }
//! Hand: { 1:Hay Bale, 2:Scarecrow }
//! ---
//! Play 2 cards to your farm
//! Ada's Morning
//! ```

use crate::cards::{FarmItem, NightCard, ZombieKind};
use crate::rules::{DayStage, Phase, RenderHint, Stage};
use crate::session::{GameSnapshot, PlayerSnapshot};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RED: &str = "\x1b[31m";
const GREY: &str = "\x1b[38;5;105m";
const PLAYER_COLORS: [&str; 4] = ["\x1b[32m", "\x1b[33m", "\x1b[95m", "\x1b[94m"];

/// Turns a snapshot into something to show a player.
pub trait Renderer {
    fn render(&self, snapshot: &GameSnapshot, view: RenderHint) -> String;
}

/// Output options for [`TextRenderer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Colour with ANSI escapes.
    pub ansi: bool,
}

/// Terminal-style renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer {
    style: TextStyle,
}

impl TextRenderer {
    #[must_use]
    pub fn new(style: TextStyle) -> Self {
        Self { style }
    }

    /// No escape codes; what tests and logs want.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    fn paint(&self, codes: &[&str], text: &str) -> String {
        if self.style.ansi {
            format!("{}{text}{RESET}", codes.concat())
        } else {
            text.to_string()
        }
    }

    fn item(&self, item: FarmItem) -> String {
        let name = self.paint(&[GREY, ITALIC], item.name());
        if item.is_one_time_use() {
            format!("{name}{}", self.paint(&[RED], "*"))
        } else {
            name
        }
    }

    fn player_name(&self, name: &str, index: usize) -> String {
        self.paint(&[PLAYER_COLORS[index % PLAYER_COLORS.len()]], name)
    }

    fn stack(&self, items: &[FarmItem]) -> String {
        let items: Vec<String> = items.iter().map(|&i| self.item(i)).collect();
        format!("{{ {} }}", items.join(", "))
    }

    fn farm(&self, player: &PlayerSnapshot, view: RenderHint) -> String {
        let mut lines = vec!["Farm:".to_string()];
        let mut flat = 1;
        for (i, stack) in player.stacks.iter().enumerate() {
            let line = match view {
                RenderHint::Normal => self.stack(stack),
                RenderHint::ForNight => format!("{}:{}", i + 1, self.stack(stack)),
                RenderHint::ForDiscard => {
                    let numbered: Vec<String> = stack
                        .iter()
                        .map(|&item| {
                            let entry = format!("{flat}: {}", self.item(item));
                            flat += 1;
                            entry
                        })
                        .collect();
                    format!("{{ {} }}", numbered.join(", "))
                }
            };
            lines.push(line);
        }
        lines.join("\n")
    }

    fn hand(&self, player: &PlayerSnapshot, numbered: bool) -> String {
        let mut hand = player.hand.clone();
        hand.sort();
        let items: Vec<String> = hand
            .iter()
            .enumerate()
            .map(|(i, &item)| {
                if numbered {
                    format!("{}:{}", i + 1, self.item(item))
                } else {
                    self.item(item)
                }
            })
            .collect();
        format!("Hand: {{ {} }}", items.join(", "))
    }

    fn zombie(&self, zombie: ZombieKind) -> String {
        let traits: String = zombie.traits().iter().map(|t| format!(" {t} |")).collect();
        format!("{}\n|{traits}", self.paint(&[BOLD], zombie.name()))
    }

    /// Only at night. Other players see a count; the current player also
    /// sees the card they are about to resolve.
    fn night_cards(&self, snapshot: &GameSnapshot, index: usize) -> String {
        if snapshot.phase != Phase::Night {
            return String::new();
        }
        let cards = &snapshot.players[index].night_cards;
        if index != snapshot.current {
            return format!("NightCard x {}", cards.len());
        }
        let Some(head) = cards.first() else {
            return "NightCard x 0".to_string();
        };
        let shown = match *head {
            NightCard::Zombie(zombie) => self.zombie(zombie),
            NightCard::Event(event) => format!(
                "{}\n| {} |",
                self.paint(&[BOLD], event.name()),
                self.paint(&[ITALIC], event.description())
            ),
        };
        format!("NightCard x {}\n{shown}", cards.len() - 1)
    }

    fn player(&self, snapshot: &GameSnapshot, index: usize, view: RenderHint) -> String {
        let player = &snapshot.players[index];
        format!(
            "{} : {}hp\n{}\n{}\n{}",
            self.player_name(&player.name, index),
            player.lives,
            self.night_cards(snapshot, index),
            self.farm(player, view),
            self.hand(player, view == RenderHint::Normal)
        )
    }

    fn stats(snapshot: &GameSnapshot) -> String {
        let stats = snapshot.stats;
        format!(
            "Zombies Killed: {} | Lives Lost: {} | Events Played: {} | Day Cards Discarded: {}",
            stats.zombies_killed, stats.lives_lost, stats.events_resolved, stats.day_cards_discarded
        )
    }

    fn stage_hint(stage: &Stage) -> &'static str {
        match stage {
            Stage::Day(DayStage::OptionalDiscard) => {
                "Discard a card to draw a card from the deck (optional)"
            }
            Stage::Day(DayStage::Draw) => "Draw 2 cards from the deck or the 2 face-up cards",
            Stage::Day(_) => "Play 2 cards to your farm",
            Stage::Night(_) => "Progress through the night...",
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, snapshot: &GameSnapshot, view: RenderHint) -> String {
        let mut sections = vec![format!(
            "{}\n{} {}\n{}",
            Self::stats(snapshot),
            self.paint(&[ITALIC], &snapshot.phase.to_string()),
            snapshot.night_num,
            self.stack(&snapshot.public_cards.iter().flatten().copied().collect::<Vec<_>>())
        )];
        if snapshot.is_over() {
            sections.push("Game over".to_string());
            return sections.join("\n---\n");
        }
        for index in 0..snapshot.players.len() {
            sections.push(self.player(snapshot, index, view));
        }
        let whose = snapshot.current_player().map_or(String::new(), |p| {
            format!("{}'s {}", self.player_name(&p.name, snapshot.current), snapshot.phase)
        });
        let hint = self.paint(&[BOLD, ITALIC], Self::stage_hint(&snapshot.stage));
        sections.push(format!("{hint}\n{whose}"));
        sections.join("\n---\n")
    }
}
