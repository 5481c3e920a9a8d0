//! Battle arena controller
//!
//! Owns a [`BattleSession`] and drives the parts the pure state machine
//! cannot: the auto-advance timer armed on every reveal, and the
//! fire-and-forget explanation fetch. Both run concurrently and race;
//! each captures the session epoch at spawn time and re-checks it before
//! applying its effect, so a timer fire or fetch resolution that lands
//! after the round has moved on is discarded.

use std::sync::Arc;
use std::time::Duration;

use nutrikit_core::battle::{BattleRound, BattleSession, Grade, Phase, PickOutcome};
use nutrikit_core::catalog::Side;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::explain::{ExplanationProvider, ExplanationRequest};

/// Delay before a revealed round auto-advances
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(4200);

/// Per-round explanation slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationState {
    /// No explanation for this round (not requested, failed, or cleared)
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch resolved for the current round
    Ready(String),
}

struct ArenaState {
    session: BattleSession,
    explanation: ExplanationState,
    timer: Option<JoinHandle<()>>,
}

/// Snapshot of the arena for consumers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleStatus {
    pub phase: Phase,
    /// Current round index (0-based)
    pub round: usize,
    pub total: usize,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub explanation: ExplanationState,
}

/// Final results surface, available once the session is done
#[derive(Debug, Clone, PartialEq)]
pub struct BattleRecap {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
    pub best_streak: u32,
    pub rounds: Vec<BattleRound>,
}

/// Async controller around one battle session
pub struct BattleArena {
    state: Arc<Mutex<ArenaState>>,
    explainer: Arc<dyn ExplanationProvider>,
}

impl BattleArena {
    /// Arena over the standard ten-pair catalog
    pub fn new(explainer: Arc<dyn ExplanationProvider>) -> Self {
        Self::with_session(BattleSession::with_standard_catalog(), explainer)
    }

    pub fn with_session(session: BattleSession, explainer: Arc<dyn ExplanationProvider>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ArenaState {
                session,
                explanation: ExplanationState::Idle,
                timer: None,
            })),
            explainer,
        }
    }

    /// Score a pick, arm the auto-advance timer, and start the
    /// explanation fetch
    ///
    /// Delegates the guard to the session: outside AwaitingPick this is a
    /// no-op returning `None` and nothing is spawned. Scoring is final
    /// before either background task starts; neither can affect it.
    pub async fn pick(&self, side: Side) -> Option<PickOutcome> {
        let mut state = self.state.lock().await;
        let outcome = state.session.pick(side)?;
        let epoch = state.session.epoch();
        let request =
            ExplanationRequest::from_round(state.session.current_pair(), side, outcome.winner);
        state.explanation = ExplanationState::Loading;

        // Fire-and-forget explanation fetch; stale resolutions must not
        // write into a round that is no longer current
        let explainer = Arc::clone(&self.explainer);
        let state_ref = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = explainer.explain(&request).await;
            let mut state = state_ref.lock().await;
            if state.session.epoch() != epoch {
                debug!("discarding stale explanation result");
                return;
            }
            state.explanation = match result {
                Ok(text) => ExplanationState::Ready(text),
                Err(err) => {
                    debug!(error = %err, "explanation fetch failed, leaving panel empty");
                    ExplanationState::Idle
                }
            };
        });

        // Auto-advance timer
        let state_ref = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(AUTO_ADVANCE_DELAY).await;
            let mut state = state_ref.lock().await;
            if state.session.epoch() != epoch {
                return;
            }
            // Drop our own handle without aborting the running task
            state.timer = None;
            advance_state(&mut state);
        });
        if let Some(stale) = state.timer.replace(handle) {
            stale.abort();
        }

        Some(outcome)
    }

    /// Explicit "next" action: cancel the pending timer and advance
    pub async fn advance(&self) -> bool {
        let mut state = self.state.lock().await;
        cancel_timer(&mut state);
        advance_state(&mut state)
    }

    /// Reset to round 0; cancels the pending timer so a stale transition
    /// cannot fire after the reset
    pub async fn restart(&self) {
        let mut state = self.state.lock().await;
        cancel_timer(&mut state);
        state.session.restart();
        state.explanation = ExplanationState::Idle;
    }

    pub async fn status(&self) -> BattleStatus {
        let state = self.state.lock().await;
        BattleStatus {
            phase: state.session.phase(),
            round: state.session.index(),
            total: state.session.total(),
            score: state.session.score(),
            streak: state.session.streak(),
            best_streak: state.session.best_streak(),
            explanation: state.explanation.clone(),
        }
    }

    /// Round-by-round recap with the final grade
    pub async fn recap(&self) -> BattleRecap {
        let state = self.state.lock().await;
        BattleRecap {
            score: state.session.score(),
            total: state.session.total(),
            percentage: state.session.percentage(),
            grade: state.session.grade(),
            best_streak: state.session.best_streak(),
            rounds: state.session.history().to_vec(),
        }
    }
}

fn cancel_timer(state: &mut ArenaState) {
    if let Some(timer) = state.timer.take() {
        timer.abort();
    }
}

fn advance_state(state: &mut ArenaState) -> bool {
    let advanced = state.session.advance();
    if advanced {
        state.explanation = ExplanationState::Idle;
    }
    advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::ExplainError;
    use async_trait::async_trait;

    /// Provider that resolves instantly with a canned line
    struct CannedProvider;

    #[async_trait]
    impl ExplanationProvider for CannedProvider {
        async fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
            Ok(format!("{} wins.", request.winner_name))
        }
    }

    /// Provider that always fails
    struct FailingProvider;

    #[async_trait]
    impl ExplanationProvider for FailingProvider {
        async fn explain(&self, _request: &ExplanationRequest) -> Result<String, ExplainError> {
            Err(ExplainError::Status(500))
        }
    }

    fn arena(provider: impl ExplanationProvider + 'static) -> BattleArena {
        BattleArena::new(Arc::new(provider))
    }

    #[tokio::test(start_paused = true)]
    async fn test_pick_reveals_and_fetches_explanation() {
        let arena = arena(CannedProvider);
        let outcome = arena.pick(Side::A).await.unwrap();
        assert!(outcome.correct); // Brown Rice beats White Rice

        // Let the spawned fetch run without reaching the timer deadline
        tokio::time::sleep(Duration::from_millis(50)).await;
        let status = arena.status().await;
        assert_eq!(status.phase, Phase::Revealed);
        assert_eq!(status.score, 1);
        assert_eq!(
            status.explanation,
            ExplanationState::Ready("Brown Rice wins.".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_leaves_panel_empty_and_score_intact() {
        let arena = arena(FailingProvider);
        arena.pick(Side::A).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        let status = arena.status().await;
        assert_eq!(status.explanation, ExplanationState::Idle);
        assert_eq!(status.score, 1);
        assert_eq!(status.phase, Phase::Revealed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_auto_advances_after_delay() {
        let arena = arena(CannedProvider);
        arena.pick(Side::A).await.unwrap();

        tokio::time::sleep(AUTO_ADVANCE_DELAY + Duration::from_millis(10)).await;
        let status = arena.status().await;
        assert_eq!(status.phase, Phase::AwaitingPick);
        assert_eq!(status.round, 1);
        assert_eq!(status.explanation, ExplanationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_advance_cancels_timer() {
        let arena = arena(CannedProvider);
        arena.pick(Side::A).await.unwrap();
        assert!(arena.advance().await);
        assert_eq!(arena.status().await.round, 1);

        // If the timer were still pending it would advance to round 2 here
        tokio::time::sleep(AUTO_ADVANCE_DELAY * 2).await;
        assert_eq!(arena.status().await.round, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_timer() {
        let arena = arena(CannedProvider);
        arena.pick(Side::A).await.unwrap();
        arena.restart().await;

        tokio::time::sleep(AUTO_ADVANCE_DELAY * 2).await;
        let status = arena.status().await;
        // A stale timer fire would have moved the fresh session forward
        assert_eq!(status.round, 0);
        assert_eq!(status.phase, Phase::AwaitingPick);
        assert_eq!(status.score, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_pick_spawns_nothing_extra() {
        let arena = arena(CannedProvider);
        assert!(arena.pick(Side::A).await.is_some());
        assert!(arena.pick(Side::B).await.is_none());

        tokio::time::sleep(Duration::from_millis(50)).await;
        let status = arena.status().await;
        assert_eq!(status.score, 1);
        // Explanation belongs to the first (and only) pick
        assert_eq!(
            status.explanation,
            ExplanationState::Ready("Brown Rice wins.".to_string())
        );
    }
}
