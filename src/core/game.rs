//! Game state machine: input handling, ticking, and high-score write-back.
//!
//! [`Game`] owns the session together with its collaborators (score store
//! and RNG) so the whole thing runs headless. The frontend only feeds
//! [`InputEvent`]s in, and reacts to the [`GameEvent`]s that come out.

use super::config::GameConfig;
use super::engine::{self, TickResult};
use super::session::{GamePhase, GameSession};
use super::snapshot::Snapshot;
use super::spawner;
use crate::utils::persistence::{load_high_score, ScoreStore};
use rand::Rng;

/// Where a primary action came from. Only matters for cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Mouse,
}

/// Events consumed by the game, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Flap key or primary mouse button.
    PrimaryAction(InputSource),
    /// Periodic spawn timer fired.
    SpawnTick,
}

/// Things that happened, for the presentation layer to turn into sound
/// cues and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First input of a run: `NotStarted` -> `Running`.
    Started,
    Flapped { source: InputSource },
    PipeSpawned,
    Scored { score: u32 },
    /// `Running` -> `GameOver`.
    Crashed { score: u32, new_high_score: bool },
    /// `GameOver` -> `NotStarted`.
    Reset,
    Quit,
}

/// Outcome of one frame: events handled in order, then one tick.
#[derive(Debug, Clone, Default)]
pub struct FrameResult {
    pub events: Vec<GameEvent>,
    pub tick: TickResult,
    pub quit: bool,
}

pub struct Game<S: ScoreStore, R: Rng> {
    session: GameSession,
    store: S,
    rng: R,
}

impl<S: ScoreStore, R: Rng> Game<S, R> {
    /// Build a fresh game, seeding the high score from `store`. A store that
    /// cannot be read counts as no prior score.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let high_score = load_high_score(&store);
        Self {
            session: GameSession::new(config, high_score),
            store,
            rng,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.session)
    }

    /// Apply one input event.
    ///
    /// A primary action starts a fresh run (with a flap), flaps during a
    /// run, and resets a finished run. The reset consumes the input: the
    /// new run waits for the next one.
    pub fn handle(&mut self, event: InputEvent) -> Vec<GameEvent> {
        match event {
            InputEvent::Quit => vec![GameEvent::Quit],
            InputEvent::PrimaryAction(source) => match self.session.phase {
                GamePhase::NotStarted => {
                    self.session.phase = GamePhase::Running;
                    self.session.bird.flap();
                    log::info!("Run started (best {})", self.session.high_score);
                    vec![GameEvent::Started, GameEvent::Flapped { source }]
                }
                GamePhase::Running => {
                    self.session.bird.flap();
                    vec![GameEvent::Flapped { source }]
                }
                GamePhase::GameOver => {
                    self.session.reset();
                    vec![GameEvent::Reset]
                }
            },
            InputEvent::SpawnTick => {
                if spawner::spawn_pipe(&mut self.session, &mut self.rng) {
                    vec![GameEvent::PipeSpawned]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Advance the simulation by one tick (no-op unless running).
    pub fn tick(&mut self) -> (TickResult, Vec<GameEvent>) {
        let was_running = self.session.phase.is_running();
        let result = engine::advance(&mut self.session);
        let mut events = Vec::new();

        // Report each increment with the running total at that point.
        let first = self.session.score - result.scored;
        for n in 1..=result.scored {
            events.push(GameEvent::Scored { score: first + n });
        }

        if was_running && self.session.phase == GamePhase::GameOver {
            let new_high_score = self.record_high_score();
            log::info!(
                "Crashed with score {} ({})",
                self.session.score,
                if result.hit_floor { "ground" } else { "pipe" }
            );
            events.push(GameEvent::Crashed {
                score: self.session.score,
                new_high_score,
            });
        }

        (result, events)
    }

    /// One frame: deliver queued events in order, then tick once. Stops
    /// delivering at the first `Quit`.
    pub fn run_frame<I>(&mut self, inputs: I) -> FrameResult
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut frame = FrameResult::default();
        for input in inputs {
            let events = self.handle(input);
            frame.events.extend(events);
            if input == InputEvent::Quit {
                frame.quit = true;
                return frame;
            }
        }
        let (tick, events) = self.tick();
        frame.tick = tick;
        frame.events.extend(events);
        frame
    }

    /// Called once per transition into `GameOver`. Updates the in-memory
    /// best and writes it through if the run beat it. A failed write is
    /// logged and otherwise ignored.
    fn record_high_score(&mut self) -> bool {
        if !self.session.update_high_score() {
            return false;
        }
        let score = self.session.high_score;
        match self.store.save(score) {
            Ok(()) => log::info!("New high score {} saved", score),
            Err(e) => log::warn!("Error saving high score {}: {}", score, e),
        }
        true
    }
}
