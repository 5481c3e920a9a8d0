//! Food-battle session state machine
//!
//! Drives a fixed-length sequence of binary comparisons: the player picks
//! the item they believe is healthier, the session scores the pick against
//! the pair's precomputed winner and tracks streaks and history.
//!
//! The machine is pure and synchronous. Timers and the explanation fetch
//! live in the application layer; the `epoch` counter here is what lets
//! that layer discard async results that resolve after the round they were
//! issued for has already advanced.

use serde::{Deserialize, Serialize};

use crate::catalog::{standard_pairs, FoodPair, Side};
use crate::errors::CoreError;

/// Session phase
///
/// AwaitingPick -> Revealed -> (AwaitingPick at next round | Done), with
/// restart allowed from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingPick,
    Revealed,
    Done,
}

/// Outcome of one completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRound {
    pub pair_index: usize,
    pub picked: Side,
    pub winner: Side,
    pub correct: bool,
    /// Streak value at the time of the pick
    pub streak: u32,
}

/// What `pick` reports back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickOutcome {
    pub correct: bool,
    pub winner: Side,
    pub streak: u32,
}

// ============================================================================
// Grades
// ============================================================================

/// Final letter grade with its display label and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub letter: char,
    pub label: &'static str,
    pub color: &'static str,
}

/// Grade a final percentage. Boundaries are inclusive: 80% is an A.
pub fn grade_for(pct: u32) -> Grade {
    if pct >= 80 {
        Grade { letter: 'A', label: "Nutrition Expert!", color: "#22d87a" }
    } else if pct >= 60 {
        Grade { letter: 'B', label: "Health Savvy!", color: "#60a5fa" }
    } else if pct >= 40 {
        Grade { letter: 'C', label: "Getting There!", color: "#f5c842" }
    } else {
        Grade { letter: 'D', label: "Keep Learning!", color: "#fb923c" }
    }
}

// ============================================================================
// Session
// ============================================================================

/// One play-through over a pair catalog
#[derive(Debug, Clone)]
pub struct BattleSession {
    pairs: Vec<FoodPair>,
    index: usize,
    score: u32,
    streak: u32,
    best_streak: u32,
    phase: Phase,
    picked: Option<Side>,
    history: Vec<BattleRound>,
    epoch: u64,
}

impl BattleSession {
    /// Create a session over the given pairs
    pub fn new(pairs: Vec<FoodPair>) -> Result<Self, CoreError> {
        if pairs.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        Ok(Self {
            pairs,
            index: 0,
            score: 0,
            streak: 0,
            best_streak: 0,
            phase: Phase::AwaitingPick,
            picked: None,
            history: Vec::new(),
            epoch: 0,
        })
    }

    /// Create a session over the bundled ten-pair catalog
    pub fn with_standard_catalog() -> Self {
        // The standard catalog is non-empty by construction
        Self::new(standard_pairs()).expect("standard catalog is non-empty")
    }

    /// Score a pick for the current round
    ///
    /// Only valid in AwaitingPick; any other phase is a guarded no-op
    /// returning `None`, which tolerates duplicate UI events such as a
    /// rapid double-click. On success the session moves to Revealed and
    /// returns the round outcome.
    pub fn pick(&mut self, side: Side) -> Option<PickOutcome> {
        if self.phase != Phase::AwaitingPick {
            return None;
        }

        let winner = self.pairs[self.index].winner();
        let correct = side == winner;

        self.streak = if correct { self.streak + 1 } else { 0 };
        self.best_streak = self.best_streak.max(self.streak);
        if correct {
            self.score += 1;
        }

        self.history.push(BattleRound {
            pair_index: self.index,
            picked: side,
            winner,
            correct,
            streak: self.streak,
        });
        self.picked = Some(side);
        self.phase = Phase::Revealed;

        Some(PickOutcome {
            correct,
            winner,
            streak: self.streak,
        })
    }

    /// Move past a revealed round
    ///
    /// Clears the transient pick, bumps the epoch so in-flight async
    /// results for the old round are discarded, and either enters the next
    /// round or Done if this was the last one. A guarded no-op (returning
    /// `false`) outside Revealed.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Revealed {
            return false;
        }
        self.epoch += 1;
        self.picked = None;
        if self.index + 1 >= self.pairs.len() {
            self.phase = Phase::Done;
        } else {
            self.index += 1;
            self.phase = Phase::AwaitingPick;
        }
        true
    }

    /// Reset the session to round 0 with all counters zeroed
    ///
    /// Valid in any phase. Bumps the epoch so pending timer fires and
    /// fetches from the old session cannot apply.
    pub fn restart(&mut self) {
        self.epoch += 1;
        self.index = 0;
        self.score = 0;
        self.streak = 0;
        self.best_streak = 0;
        self.phase = Phase::AwaitingPick;
        self.picked = None;
        self.history.clear();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Current round index (0-based)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn picked(&self) -> Option<Side> {
        self.picked
    }

    pub fn current_pair(&self) -> &FoodPair {
        &self.pairs[self.index]
    }

    pub fn history(&self) -> &[BattleRound] {
        &self.history
    }

    /// Generation counter, incremented on every advance/restart
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Final score as a rounded percentage
    pub fn percentage(&self) -> u32 {
        (self.score as f64 / self.pairs.len() as f64 * 100.0).round() as u32
    }

    pub fn grade(&self) -> Grade {
        grade_for(self.percentage())
    }
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::with_standard_catalog()
    }
}
