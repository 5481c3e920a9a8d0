//! Body-goals controller
//!
//! Collects a raw form, runs the body-metrics pipeline, and persists the
//! profile together with its results under a fixed key so a later session
//! can restore them. Calculation never touches storage; save and restore
//! are separate, explicit operations.

use nutrikit_core::body_metrics::{compute_metrics, BodyMetricsResult, BodyProfile};
use nutrikit_core::validation::BodyGoalsForm;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::storage::KeyValueStore;

/// Fixed namespace key for persisted body-goals state
pub const BODY_GOALS_KEY: &str = "bodyGoals";

/// The persisted payload: the profile as entered plus its computed results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBodyGoals {
    pub form: BodyProfile,
    pub results: BodyMetricsResult,
}

/// Body-goals service over an injected persistence port
pub struct BodyGoalsService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> BodyGoalsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Parse the raw form and run the metrics pipeline
    ///
    /// Invalid input returns a validation error and leaves any previously
    /// saved results untouched, so the consumer stays in its
    /// "no results yet" state instead of showing garbage numbers.
    pub fn calculate(&self, form: &BodyGoalsForm) -> AppResult<(BodyProfile, BodyMetricsResult)> {
        let profile = form.parse()?;
        let results = compute_metrics(&profile)?;
        debug!(
            bmi = results.bmi,
            tdee = results.tdee,
            goal_kcal = results.goal_kcal,
            "body metrics computed"
        );
        Ok((profile, results))
    }

    /// Persist a profile and its results on explicit save
    pub async fn save(&self, profile: &BodyProfile, results: &BodyMetricsResult) -> AppResult<()> {
        let payload = SavedBodyGoals {
            form: profile.clone(),
            results: results.clone(),
        };
        let json = serde_json::to_string(&payload).map_err(anyhow::Error::from)?;
        self.store.put(BODY_GOALS_KEY, &json).await?;
        Ok(())
    }

    /// Restore previously saved goals, if any
    ///
    /// Missing or corrupt stored data degrades to `None` — a bad payload
    /// should behave like a fresh start, not an error.
    pub async fn restore(&self) -> AppResult<Option<SavedBodyGoals>> {
        let Some(json) = self.store.get(BODY_GOALS_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(saved) => Ok(Some(saved)),
            Err(err) => {
                warn!(error = %err, "discarding corrupt saved body goals");
                Ok(None)
            }
        }
    }

    /// Clear saved goals
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(BODY_GOALS_KEY).await?;
        Ok(())
    }
}
