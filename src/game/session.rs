//! Threaded match: the engine loop and the human turn handoff.
//!
//! ## Threads
//!
//! - The **engine loop** owns every phase transition. It draws, runs
//!   automated turns, evaluates termination and switches players.
//! - The **collaborator** (a UI, a test, a bot harness) calls
//!   `play_card`, `signal_end_turn` and `reset` on the `MatchHandle`.
//!
//! Both sides go through one mutex. The engine loop holds it for every
//! transition and only releases it while blocked on the end-of-turn
//! condition variable (or while invoking the notifier), so a `play_card`
//! can never interleave with a transition in progress.
//!
//! ## End-of-turn signal
//!
//! The signal is a single slot: it is accepted only while a human seat is
//! in its Play phase, and repeated signals before the loop consumes the
//! first one collapse into it. Signals at any other time are dropped.
//!
//! ```
//! use std::time::Duration;
//! use card_duel::core::{MatchConfig, Phase, PlayerId};
//! use card_duel::game::MatchHandle;
//!
//! let handle = MatchHandle::new_game(MatchConfig::default().with_seed(1)).unwrap();
//! assert!(handle.wait_until(|g| g.awaits_end_turn(), Duration::from_secs(5)));
//!
//! handle.play_card(PlayerId::FIRST, 0).unwrap();
//! assert_eq!(handle.snapshot().phase, Phase::Play);
//!
//! assert!(handle.signal_end_turn());
//! assert!(handle.wait_until(|g| g.turn() >= 1, Duration::from_secs(5)));
//! ```

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info};

use super::snapshot::GameSnapshot;
use super::state::{Game, PlayOutcome, Step};
use crate::core::{MatchConfig, Phase, PlayerId};
use crate::error::{PlayError, StartError};
use crate::rules::GameResult;

/// What changed, passed to the state-change notifier.
///
/// Carries just enough to route the update; re-read the match through
/// `MatchHandle::snapshot` for everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateChange {
    /// Phase after the transition.
    pub phase: Phase,
    /// Active seat after the transition.
    pub active_player: PlayerId,
    /// Turn counter after the transition.
    pub turn: u32,
    /// Set when the transition ended the match.
    pub result: Option<GameResult>,
}

impl StateChange {
    fn of(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            active_player: game.active_player(),
            turn: game.turn(),
            result: game.result(),
        }
    }
}

/// Callback invoked after every phase transition, game over and reset.
pub type StateChangeNotifier = Arc<dyn Fn(StateChange) + Send + Sync>;

struct Inner {
    game: Game,
    /// Single-slot end-of-turn signal.
    end_turn_requested: bool,
    shutdown: bool,
}

struct Shared {
    inner: Mutex<Inner>,
    /// Wakes the engine loop: end-of-turn, reset or shutdown.
    turn_signal: Condvar,
    /// Wakes collaborators waiting in `wait_until`.
    state_changed: Condvar,
    notifier: Mutex<Option<StateChangeNotifier>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation leaves the match consistent, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, change: StateChange) {
        let notifier = self
            .notifier
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(notifier) = notifier {
            notifier(change);
        }
    }
}

/// A match running on its own engine thread.
///
/// Dropping the handle stops the engine thread.
pub struct MatchHandle {
    shared: Arc<Shared>,
    engine: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for MatchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchHandle")
            .field("game", &self.shared.lock().game)
            .finish_non_exhaustive()
    }
}

impl MatchHandle {
    /// Build a match from `config` with the standard catalog and start it.
    pub fn new_game(config: MatchConfig) -> Result<Self, StartError> {
        Self::start(Game::new(config)?)
    }

    /// Start the engine loop for an existing match.
    pub fn start(game: Game) -> Result<Self, StartError> {
        Self::spawn(game, None)
    }

    /// Start the engine loop with the state-change callback already
    /// installed, so it sees the match's very first transition.
    pub fn start_with_notifier(
        game: Game,
        notifier: impl Fn(StateChange) + Send + Sync + 'static,
    ) -> Result<Self, StartError> {
        Self::spawn(game, Some(Arc::new(notifier)))
    }

    fn spawn(game: Game, notifier: Option<StateChangeNotifier>) -> Result<Self, StartError> {
        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner {
                game,
                end_turn_requested: false,
                shutdown: false,
            }),
            turn_signal: Condvar::new(),
            state_changed: Condvar::new(),
            notifier: Mutex::new(notifier),
        });

        let loop_shared = Arc::clone(&shared);
        let engine = std::thread::Builder::new()
            .name("card-duel-engine".to_string())
            .spawn(move || engine_loop(&loop_shared))?;

        Ok(Self {
            shared,
            engine: Some(engine),
        })
    }

    /// Install the state-change callback, replacing any previous one.
    ///
    /// The new callback is invoked once right away, on the caller's thread,
    /// with the current state; transitions that happened before it was
    /// installed are not replayed. Afterwards it runs on the engine thread
    /// without the match lock held, so it may call back into the handle.
    pub fn set_state_change_notifier(&self, notifier: impl Fn(StateChange) + Send + Sync + 'static) {
        let notifier: StateChangeNotifier = Arc::new(notifier);
        // Hold the match lock while swapping so no transition slips between
        // the current-state read and the installation.
        let current = {
            let inner = self.shared.lock();
            *self
                .shared
                .notifier
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&notifier));
            StateChange::of(&inner.game)
        };
        notifier(current);
    }

    /// Play a card for a human seat. See `Game::play_card`.
    ///
    /// A successful play wakes `wait_until` callers.
    pub fn play_card(&self, player: PlayerId, index: usize) -> Result<PlayOutcome, PlayError> {
        let outcome = self.shared.lock().game.play_card(player, index)?;
        self.shared.state_changed.notify_all();
        Ok(outcome)
    }

    /// Wake the engine loop from a human Play phase.
    ///
    /// Returns `false` (and does nothing) when no human turn is waiting,
    /// including after the match is over.
    pub fn signal_end_turn(&self) -> bool {
        let mut inner = self.shared.lock();
        if inner.shutdown || !inner.game.awaits_end_turn() {
            debug!("end-of-turn signal dropped: no human turn waiting");
            return false;
        }
        inner.end_turn_requested = true;
        self.shared.turn_signal.notify_one();
        true
    }

    /// Start a new match in place, whether or not the current one finished.
    pub fn reset(&self) {
        let change = {
            let mut inner = self.shared.lock();
            inner.game.reset();
            inner.end_turn_requested = false;
            self.shared.turn_signal.notify_one();
            self.shared.state_changed.notify_all();
            StateChange::of(&inner.game)
        };
        self.shared.notify(change);
    }

    /// Read the match under the lock.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.shared.lock().game)
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.with_game(Game::snapshot)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.with_game(Game::phase)
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.with_game(Game::active_player)
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.with_game(Game::turn)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.with_game(Game::result)
    }

    /// Block until `predicate` holds for the match or `timeout` elapses.
    ///
    /// Returns whether the predicate held.
    pub fn wait_until(&self, predicate: impl Fn(&Game) -> bool, timeout: Duration) -> bool {
        let inner = self.shared.lock();
        let (inner, _) = self
            .shared
            .state_changed
            .wait_timeout_while(inner, timeout, |inner| !predicate(&inner.game))
            .unwrap_or_else(PoisonError::into_inner);
        predicate(&inner.game)
    }
}

impl Drop for MatchHandle {
    fn drop(&mut self) {
        {
            let mut inner = self.shared.lock();
            inner.shutdown = true;
            self.shared.turn_signal.notify_one();
        }
        if let Some(engine) = self.engine.take() {
            let _ = engine.join();
        }
    }
}

fn engine_loop(shared: &Shared) {
    let mut inner = shared.lock();
    loop {
        if inner.shutdown {
            debug!("engine loop stopping");
            return;
        }

        if inner.game.awaits_end_turn() {
            if !inner.end_turn_requested {
                inner = shared
                    .turn_signal
                    .wait(inner)
                    .unwrap_or_else(PoisonError::into_inner);
                continue;
            }
            inner.end_turn_requested = false;
            if inner.game.end_turn().is_err() {
                continue;
            }
        } else {
            match inner.game.step() {
                Step::Advanced(_) => {}
                Step::AwaitingEndTurn => continue,
                Step::Finished(_) => {
                    // Idle until reset or shutdown.
                    inner = shared
                        .turn_signal
                        .wait(inner)
                        .unwrap_or_else(PoisonError::into_inner);
                    continue;
                }
            }
        }

        let change = StateChange::of(&inner.game);
        let automated_play = change.phase == Phase::End
            && inner.game.config().is_automated(change.active_player);
        let delay = inner.game.config().automated_delay_ms;
        if let Some(result) = change.result {
            info!(?result, "engine loop reached game over");
        }
        shared.state_changed.notify_all();

        drop(inner);
        shared.notify(change);
        if automated_play && delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }
        inner = shared.lock();
    }
}
