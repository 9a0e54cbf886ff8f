//! The turn/phase state machine.
//!
//! ## Phase cycle
//!
//! ```text
//! Draw -> Play -> End -> Draw (next player)
//!                    \-> GameOver
//! ```
//!
//! - **Draw**: the active player draws one card (a no-op when both piles
//!   are empty), then the machine moves to Play.
//! - **Play**: an automated seat plays one uniformly chosen card and moves
//!   straight to End. A human seat plays any number of cards through
//!   `play_card` and leaves Play only via `end_turn`.
//! - **End**: if either player is knocked out or the turn limit is reached
//!   the match is over; otherwise the turn counter increments and the
//!   other seat becomes active.
//!
//! `Game` itself is single-threaded. `MatchHandle` runs it on an engine
//! thread and provides the human turn handoff.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::snapshot::{GameSnapshot, PlayView};
use crate::cards::{Card, CardCatalog};
use crate::core::{GameRng, MatchConfig, Phase, PlayerId, PlayerMap};
use crate::error::{ConfigError, PlayError};
use crate::players::Player;
use crate::policy::{OpponentPolicy, UniformOpponent};
use crate::rules::{GameResult, MatchReport, MatchRules};
use crate::zones::DeckManager;

/// A resolved play.
#[derive(Clone, Debug)]
pub struct PlayOutcome {
    /// Seat that played.
    pub player: PlayerId,
    /// The card played (now on the discard pile).
    pub card: Card,
    /// Resolution message.
    pub message: String,
}

impl PlayOutcome {
    /// Serializable form of this outcome.
    #[must_use]
    pub fn view(&self) -> PlayView {
        PlayView {
            player: self.player,
            card: self.card.view(),
            message: self.message.clone(),
        }
    }
}

/// What a call to `Game::step` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The machine moved into this phase.
    Advanced(Phase),
    /// A human seat is in its Play phase; only `end_turn` moves on.
    AwaitingEndTurn,
    /// The match was already over.
    Finished(GameResult),
}

/// A single match: both players, the shared piles and the phase machine.
pub struct Game {
    config: MatchConfig,
    rules: MatchRules,
    catalog: CardCatalog,
    policy: Box<dyn OpponentPolicy>,
    rng: GameRng,
    players: PlayerMap<Player>,
    piles: DeckManager,
    active: PlayerId,
    phase: Phase,
    turn: u32,
    last_play: Option<PlayOutcome>,
    turn_plays: SmallVec<[PlayOutcome; 4]>,
    result: Option<GameResult>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("active", &self.active)
            .field("turn", &self.turn)
            .field("deck", &self.piles.deck_len())
            .field("discard", &self.piles.discard_len())
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Start a match with the standard catalog and deal opening hands.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, CardCatalog::standard().clone())
    }

    /// Start a match whose deck is one copy of every card in `catalog`,
    /// in catalog order, and deal opening hands.
    pub fn with_catalog(config: MatchConfig, catalog: CardCatalog) -> Result<Self, ConfigError> {
        config.validate()?;
        let needed = config
            .opening_hand_size
            .checked_mul(crate::core::PLAYER_COUNT)
            .unwrap_or(usize::MAX);
        if needed > catalog.len() {
            return Err(ConfigError::DeckTooSmall {
                needed,
                available: catalog.len(),
            });
        }

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut game = Self {
            rules: MatchRules::new(config.turn_limit),
            players: Self::fresh_players(&config),
            piles: DeckManager::new(catalog.deck()),
            catalog,
            config,
            policy: Box::new(UniformOpponent),
            rng,
            active: PlayerId::FIRST,
            phase: Phase::Draw,
            turn: 0,
            last_play: None,
            turn_plays: SmallVec::new(),
            result: None,
        };
        game.deal_opening_hands();
        info!(seed = game.rng.seed(), "match started");
        Ok(game)
    }

    /// Replace the policy automated seats use to pick cards.
    #[must_use]
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    fn fresh_players(config: &MatchConfig) -> PlayerMap<Player> {
        PlayerMap::new(|seat| {
            Player::new(config.names[seat].clone(), config.max_health, config.max_mana)
                .with_starting(config.starting_health, config.starting_mana)
        })
    }

    fn deal_opening_hands(&mut self) {
        for _ in 0..self.config.opening_hand_size {
            for seat in PlayerId::all() {
                self.piles.draw(&mut self.players[seat], &mut self.rng);
            }
        }
    }

    /// Start a new match in place with the same configuration.
    ///
    /// A seeded match replays from the same seed.
    pub fn reset(&mut self) {
        self.rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.players = Self::fresh_players(&self.config);
        self.piles = DeckManager::new(self.catalog.deck());
        self.active = PlayerId::FIRST;
        self.phase = Phase::Draw;
        self.turn = 0;
        self.last_play = None;
        self.turn_plays.clear();
        self.result = None;
        self.deal_opening_hands();
        info!(seed = self.rng.seed(), "match reset");
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Completed turns (one per End -> Draw transition).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Mutable access to a player's resources, for hosts applying
    /// equipment or other out-of-band changes.
    pub fn player_mut(&mut self, seat: PlayerId) -> &mut Player {
        &mut self.players[seat]
    }

    #[must_use]
    pub fn piles(&self) -> &DeckManager {
        &self.piles
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.piles.deck_len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.piles.discard_len()
    }

    /// The most recent play of the match.
    #[must_use]
    pub fn last_play(&self) -> Option<&PlayOutcome> {
        self.last_play.as_ref()
    }

    /// Plays made during the current turn, oldest first.
    #[must_use]
    pub fn turn_plays(&self) -> &[PlayOutcome] {
        &self.turn_plays
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seed of the current match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Final report, once the match is over.
    #[must_use]
    pub fn report(&self) -> Option<MatchReport> {
        self.result
            .map(|result| MatchReport::new(result, &self.players, self.turn))
    }

    /// Whether the machine is waiting on a human end-of-turn signal.
    #[must_use]
    pub fn awaits_end_turn(&self) -> bool {
        self.phase == Phase::Play && !self.config.is_automated(self.active)
    }

    /// Total cards across hands and piles. Constant for the whole match.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.total_cards() + self.players.iter().map(|(_, p)| p.hand().len()).sum::<usize>()
    }

    /// Read-only view for presentation layers.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            active_player: self.active,
            turn: self.turn,
            deck_count: self.piles.deck_len(),
            discard_count: self.piles.discard_len(),
            last_play: self.last_play.as_ref().map(PlayOutcome::view),
            players: self.players.map(|_, p| p.into()),
            result: self.result,
        }
    }

    // === Moves ===

    /// Play the card at `index` from `player`'s hand.
    ///
    /// Valid only for the active player during Play. The card's effect is
    /// applied to the acting player, its power is added to their score and
    /// the card goes to the discard pile. Rejected calls change nothing.
    pub fn play_card(&mut self, player: PlayerId, index: usize) -> Result<PlayOutcome, PlayError> {
        if let Err(err) = self.check_play(player, index) {
            warn!(%player, index, %err, "play rejected");
            return Err(err);
        }

        let actor = &mut self.players[player];
        let hand_len = actor.hand().len();
        let Some(card) = actor.take_card(index) else {
            return Err(PlayError::InvalidIndex { index, hand_len });
        };
        card.play(actor);
        actor.add_score(card.power());

        let message = format!("{} played {}", actor.name(), card.info());
        info!(%player, card = card.name(), score = actor.score(), "card played");

        let outcome = PlayOutcome {
            player,
            card: card.clone(),
            message,
        };
        self.piles.discard(card);
        self.last_play = Some(outcome.clone());
        self.turn_plays.push(outcome.clone());
        Ok(outcome)
    }

    fn check_play(&self, player: PlayerId, index: usize) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.phase != Phase::Play {
            return Err(PlayError::WrongPhase(self.phase));
        }
        if player != self.active {
            return Err(PlayError::NotYourTurn {
                player,
                active: self.active,
            });
        }
        let hand_len = self.players[player].hand().len();
        if index >= hand_len {
            return Err(PlayError::InvalidIndex { index, hand_len });
        }
        Ok(())
    }

    /// Let the policy play one card for the active player.
    ///
    /// Returns `None` when the hand is empty or the policy picked a card
    /// the rules reject.
    pub fn play_automated(&mut self) -> Option<PlayOutcome> {
        let index = self
            .policy
            .choose_card(&self.players[self.active], &mut self.rng)?;
        match self.play_card(self.active, index) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                warn!(player = %self.active, index, %err, "automated play rejected");
                None
            }
        }
    }

    /// Finish the active player's Play phase.
    pub fn end_turn(&mut self) -> Result<(), PlayError> {
        match self.phase {
            Phase::Play => {
                self.enter(Phase::End);
                Ok(())
            }
            Phase::GameOver => Err(PlayError::GameOver),
            other => Err(PlayError::WrongPhase(other)),
        }
    }

    // === Phase machine ===

    fn enter(&mut self, phase: Phase) {
        debug!(from = %self.phase, to = %phase, player = %self.active, turn = self.turn, "phase transition");
        self.phase = phase;
    }

    /// Perform the next transition that needs no outside input.
    pub fn step(&mut self) -> Step {
        match self.phase {
            Phase::Draw => {
                self.piles.draw(&mut self.players[self.active], &mut self.rng);
                self.enter(Phase::Play);
                Step::Advanced(Phase::Play)
            }
            Phase::Play if self.config.is_automated(self.active) => {
                self.play_automated();
                self.enter(Phase::End);
                Step::Advanced(Phase::End)
            }
            Phase::Play => Step::AwaitingEndTurn,
            Phase::End => Step::Advanced(self.resolve_end()),
            Phase::GameOver => match self.result {
                Some(result) => Step::Finished(result),
                None => Step::Finished(self.finish()),
            },
        }
    }

    fn resolve_end(&mut self) -> Phase {
        if self.rules.is_terminal(&self.players, self.turn) {
            self.finish();
            return Phase::GameOver;
        }

        self.turn += 1;
        self.active = self.active.opponent();
        self.turn_plays.clear();
        info!(turn = self.turn, player = %self.active, "turn passes");
        self.enter(Phase::Draw);
        Phase::Draw
    }

    fn finish(&mut self) -> GameResult {
        let result = self.rules.determine_winner(&self.players);
        self.result = Some(result);
        self.enter(Phase::GameOver);
        if let Some(report) = self.report() {
            info!(turn = self.turn, ?result, "{}", report.summary());
        }
        result
    }

    /// Step until the match ends or a human seat has to act.
    pub fn run_until_blocked(&mut self) -> Step {
        loop {
            match self.step() {
                Step::Advanced(_) => continue,
                blocked => return blocked,
            }
        }
    }
}
