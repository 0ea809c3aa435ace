//! Game state.
//!
//! ## Game
//!
//! Complete state of one game:
//! - Players in turn order and the cursor to the current one
//! - Phase, sub-stage and the scratch data to resume it
//! - Both decks, the public pair and the night counter
//! - The outstanding prompt, running stats and the RNG
//!
//! `Game` is mutated only by the turn state machine in `rules`. Every
//! field is serializable, so a suspended game can be checkpointed with
//! bincode and restored byte-for-byte.
//!
//! ## Conservation
//!
//! Cards are never created or destroyed after setup. `Game::census`
//! counts every copy wherever it is (decks, discard piles, hands, the
//! public pair, farms, night queues and a card held mid-placement), and
//! `Game::check_invariants` compares that with the supply fixed at
//! creation.

use log::info;
use serde::{Deserialize, Serialize};

use super::config::{GameConfig, PlayChoices, MAX_PLAYERS};
use super::error::{CreateError, InvariantViolation};
use super::player::{Player, HAND_SIZE};
use super::rng::GameRng;
use crate::cards::{EventKind, FarmItem, NightCard, ZombieKind};
use crate::decks::{DayDeck, NightDeck};
use crate::farm::{Farm, Stack};
use crate::rules::{NightRound, Phase, Prompt, Stage};

/// Running totals for the end-of-game summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStats {
    pub zombies_killed: u32,
    pub lives_lost: u32,
    pub events_resolved: u32,
    pub day_cards_discarded: u32,
    pub players_eliminated: u32,
}

impl std::fmt::Display for GameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            concat!(
                "Zombies killed: {}, lives lost: {}, events played: {}, ",
                "day cards discarded: {}, players eliminated: {}"
            ),
            self.zombies_killed,
            self.lives_lost,
            self.events_resolved,
            self.day_cards_discarded,
            self.players_eliminated
        )
    }
}

const NIGHT_KINDS: usize = ZombieKind::ALL.len() + EventKind::ALL.len();

/// Copies of every card type across the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCensus {
    day: [usize; FarmItem::ALL.len()],
    night: [usize; NIGHT_KINDS],
}

impl CardCensus {
    fn empty() -> Self {
        Self {
            day: [0; FarmItem::ALL.len()],
            night: [0; NIGHT_KINDS],
        }
    }

    fn night_index(card: NightCard) -> usize {
        match card {
            NightCard::Zombie(z) => z as usize,
            NightCard::Event(e) => ZombieKind::ALL.len() + e as usize,
        }
    }

    fn add_day(&mut self, item: FarmItem, n: usize) {
        self.day[item as usize] += n;
    }

    fn add_night(&mut self, card: NightCard) {
        self.night[Self::night_index(card)] += 1;
    }

    #[must_use]
    pub fn day(&self, item: FarmItem) -> usize {
        self.day[item as usize]
    }

    #[must_use]
    pub fn night(&self, card: NightCard) -> usize {
        self.night[Self::night_index(card)]
    }

    /// First card whose count differs from `expected`.
    fn mismatch(&self, expected: &CardCensus) -> Option<InvariantViolation> {
        for item in FarmItem::ALL {
            if self.day(item) != expected.day(item) {
                return Some(InvariantViolation::CensusMismatch {
                    card: item.name().to_string(),
                    expected: expected.day(item),
                    found: self.day(item),
                });
            }
        }
        let zombies = ZombieKind::ALL.iter().map(|&z| NightCard::Zombie(z));
        let events = EventKind::ALL.iter().map(|&e| NightCard::Event(e));
        zombies.chain(events).find_map(|card| {
            (self.night(card) != expected.night(card)).then(|| InvariantViolation::CensusMismatch {
                card: format!("{card:?}"),
                expected: expected.night(card),
                found: self.night(card),
            })
        })
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) phase: Phase,
    pub(crate) stage: Stage,
    /// Turns finished in the current morning or afternoon.
    pub(crate) day_turns: usize,
    pub(crate) round: NightRound,
    pub(crate) day_deck: DayDeck,
    pub(crate) night_deck: NightDeck,
    pub(crate) public_cards: [Option<FarmItem>; 2],
    pub(crate) night_num: u32,
    pub(crate) pending: Option<Prompt>,
    pub(crate) stats: GameStats,
    pub(crate) rng: GameRng,
    supply: CardCensus,
}

impl Game {
    /// Create a game: shuffle both decks, deal the public pair, then deal
    /// each player a full hand.
    pub fn new<S: AsRef<str>>(names: &[S], config: &GameConfig) -> Result<Self, CreateError> {
        let mut rng = GameRng::new(config.seed);
        let day_deck = DayDeck::new(&mut rng);
        let mut night_deck = NightDeck::new(&mut rng);
        if config.events_on_top {
            night_deck.rig_events_on_top();
        }
        Self::with_decks(names, config, day_deck, night_deck, rng)
    }

    /// Create a game from prepared decks.
    pub fn with_decks<S: AsRef<str>>(
        names: &[S],
        config: &GameConfig,
        day_deck: DayDeck,
        night_deck: NightDeck,
        rng: GameRng,
    ) -> Result<Self, CreateError> {
        let lives = match names.len() {
            0 => return Err(CreateError::NoPlayers),
            n if n > MAX_PLAYERS => return Err(CreateError::TooManyPlayers(n)),
            n => config.lives_for(n).ok_or(CreateError::TooManyPlayers(n))?,
        };
        if let Some(i) = names.iter().position(|n| n.as_ref().trim().is_empty()) {
            return Err(CreateError::EmptyName(i));
        }

        let mut game = Self {
            players: Vec::with_capacity(names.len()),
            current: 0,
            phase: Phase::Morning,
            stage: Stage::START,
            day_turns: 0,
            round: NightRound::default(),
            day_deck,
            night_deck,
            public_cards: [None; 2],
            night_num: 1,
            pending: None,
            stats: GameStats::default(),
            rng,
            supply: CardCensus::empty(),
        };
        game.deal_public_cards();
        for name in names {
            let mut player = Player::new(name.as_ref().trim(), lives, config.default_choices);
            for _ in 0..HAND_SIZE {
                if let Some(item) = game.day_deck.draw(&mut game.rng) {
                    player.hand.insert(item);
                }
            }
            game.players.push(player);
        }
        game.supply = game.census();
        info!(
            "new game: {} players, {} lives each, seed {}",
            game.players.len(),
            lives,
            game.rng.seed()
        );
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn night_num(&self) -> u32 {
        self.night_num
    }

    #[must_use]
    pub fn public_cards(&self) -> [Option<FarmItem>; 2] {
        self.public_cards
    }

    #[must_use]
    pub fn day_deck(&self) -> &DayDeck {
        &self.day_deck
    }

    #[must_use]
    pub fn night_deck(&self) -> &NightDeck {
        &self.night_deck
    }

    /// The outstanding prompt, if the game is suspended.
    #[must_use]
    pub fn pending_prompt(&self) -> Option<&Prompt> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// No players left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.is_empty()
    }

    /// The player whose input is awaited: the discarding player during
    /// an event discard, otherwise the current player.
    #[must_use]
    pub fn active_input_player(&self) -> usize {
        self.pending.as_ref().map_or(self.current, |p| p.player)
    }

    // === Mutation helpers for the state machine ===

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        let i = self.current;
        &mut self.players[i]
    }

    /// Move the cursor to the next player, wrapping.
    pub(crate) fn next_player(&mut self) {
        self.current += 1;
        if self.current >= self.players.len() {
            self.current = 0;
        }
    }

    /// Index of the player `offset` places after the current one.
    pub(crate) fn player_after(&self, offset: usize) -> usize {
        (self.current + offset) % self.players.len().max(1)
    }

    pub(crate) fn draw_day(&mut self) -> Option<FarmItem> {
        self.day_deck.draw(&mut self.rng)
    }

    pub(crate) fn draw_night(&mut self) -> Option<NightCard> {
        self.night_deck.draw(&mut self.rng)
    }

    pub(crate) fn discard_day(&mut self, items: impl IntoIterator<Item = FarmItem>) {
        for item in items {
            self.day_deck.discard(item);
            self.stats.day_cards_discarded += 1;
        }
    }

    pub(crate) fn discard_night(&mut self, cards: impl IntoIterator<Item = NightCard>) {
        for card in cards {
            self.night_deck.discard(card);
        }
    }

    pub(crate) fn deal_public_cards(&mut self) {
        self.public_cards = [self.draw_day(), self.draw_day()];
    }

    /// Discard everything a player holds and remove them from the turn
    /// order. The next player in order becomes current.
    pub(crate) fn eliminate(&mut self, index: usize) {
        if index >= self.players.len() {
            return;
        }
        let mut player = self.players.remove(index);
        self.discard_day(player.farm.clear_stacks());
        self.discard_day(player.hand.drain());
        self.discard_night(player.farm.take_night_cards());

        if self.current > index {
            self.current -= 1;
        } else if self.current >= self.players.len() {
            self.current = 0;
        }
        self.stats.players_eliminated += 1;
        info!("{} is eliminated, {} players left", player.name, self.players.len());
    }

    // === Rigging ===
    //
    // Each rigging call moves cards out of the decks instead of conjuring
    // them, so rigged games still pass the census.

    /// Replace a player's farm with `stacks`, returning the old items to
    /// the discard pile. Returns false if a card could not be found in the
    /// day deck or its discard pile; the farm is then left partly built.
    pub fn rig_farm(&mut self, player: usize, stacks: impl IntoIterator<Item = Stack>) -> bool {
        let Some(target) = self.players.get_mut(player) else {
            return false;
        };
        let old = target.farm.clear_stacks();
        for item in old {
            self.day_deck.discard(item);
        }
        let mut built = Vec::new();
        let mut complete = true;
        for stack in stacks {
            if stack.items().iter().all(|&item| self.day_deck.take(item)) {
                built.push(stack);
            } else {
                complete = false;
            }
        }
        let queue = self.players[player].farm.take_night_cards();
        let mut farm = Farm::with_stacks(built);
        for card in queue {
            farm.queue_night_card(card);
        }
        self.players[player].farm = farm;
        complete
    }

    /// Replace a player's hand, returning the old cards to the discard pile.
    pub fn rig_hand(&mut self, player: usize, items: &[FarmItem]) -> bool {
        let Some(target) = self.players.get_mut(player) else {
            return false;
        };
        for item in target.hand.drain() {
            self.day_deck.discard(item);
        }
        let mut complete = true;
        for &item in items.iter().take(HAND_SIZE) {
            if self.day_deck.take(item) {
                self.players[player].hand.insert(item);
            } else {
                complete = false;
            }
        }
        complete
    }

    /// Put `cards` on top of the night deck, first card drawn first.
    pub fn rig_night_deck(&mut self, cards: &[NightCard]) -> bool {
        let mut complete = true;
        for &card in cards.iter().rev() {
            if self.night_deck.take(card) {
                self.night_deck.push_top(card);
            } else {
                complete = false;
            }
        }
        complete
    }

    /// Set a player's automation preferences.
    pub fn set_play_choices(&mut self, player: usize, choices: PlayChoices) -> bool {
        match self.players.get_mut(player) {
            Some(p) => {
                p.choices = choices;
                true
            }
            None => false,
        }
    }

    // === Invariants ===

    /// Count every card in the game.
    #[must_use]
    pub fn census(&self) -> CardCensus {
        let mut census = CardCensus::empty();
        for item in FarmItem::ALL {
            census.add_day(item, self.day_deck.count(item));
        }
        for item in self.public_cards.iter().flatten() {
            census.add_day(*item, 1);
        }
        if let Some(item) = self.stage.held_item() {
            census.add_day(item, 1);
        }
        for card in self.night_deck.cards().chain(self.night_deck.discarded()) {
            census.add_night(card);
        }
        for player in &self.players {
            for item in player.hand.items().chain(player.farm.items()) {
                census.add_day(item, 1);
            }
            for card in player.farm.night_cards() {
                census.add_night(*card);
            }
        }
        census
    }

    /// Check stack shapes and card conservation.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (p, player) in self.players.iter().enumerate() {
            for (s, stack) in player.farm.stacks().iter().enumerate() {
                if stack.is_empty() {
                    return Err(InvariantViolation::EmptyStack { player: p, stack: s });
                }
                if stack.shape().is_none() {
                    return Err(InvariantViolation::IllegalStack {
                        player: p,
                        stack: s,
                        items: stack.items().to_vec(),
                    });
                }
            }
        }
        match self.census().mismatch(&self.supply) {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    // === Checkpoints ===

    /// Opaque snapshot of the whole game, RNG position included.
    pub fn checkpoint(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a game saved with `checkpoint`.
    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
