//! Combined positional evaluation heuristic.

use serde::{Deserialize, Serialize};

use crate::state::{GameState, GridView};

use super::Evaluator;

/// Combines the raw score with Manhattan-distance terms for food and
/// adversaries.
///
/// - Win states evaluate to `+inf`, lose states to `-inf`.
/// - Proximity to the nearest food is rewarded (the distance is a
///   penalty, scaled by `food_weight`).
/// - Proximity to the nearest scared adversary is rewarded (eating one
///   scores), scaled by `scared_weight`.
/// - Proximity to the nearest active adversary is penalized, scaled by
///   `avoid_weight`.
///
/// Each distance term contributes zero when its collection is empty: no
/// food left, no scared adversaries, or no adversaries at all are
/// ordinary states, not errors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CombinedEvaluator {
    /// Penalty per step of distance to the nearest food.
    pub food_weight: f64,

    /// Penalty per step of distance to the nearest scared adversary.
    pub scared_weight: f64,

    /// Reward per step of distance to the nearest active adversary.
    pub avoid_weight: f64,
}

impl Default for CombinedEvaluator {
    fn default() -> Self {
        Self {
            food_weight: 5.0,
            scared_weight: 2.0,
            avoid_weight: 0.5,
        }
    }
}

impl CombinedEvaluator {
    /// Set the food-distance weight.
    pub fn with_food_weight(mut self, weight: f64) -> Self {
        self.food_weight = weight;
        self
    }

    /// Set the scared-adversary distance weight.
    pub fn with_scared_weight(mut self, weight: f64) -> Self {
        self.scared_weight = weight;
        self
    }

    /// Set the active-adversary distance weight.
    pub fn with_avoid_weight(mut self, weight: f64) -> Self {
        self.avoid_weight = weight;
        self
    }
}

impl<S: GameState + GridView> Evaluator<S> for CombinedEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        if state.is_win() {
            return f64::INFINITY;
        }
        if state.is_lose() {
            return f64::NEG_INFINITY;
        }

        let player = state.player_position();

        let nearest_food = state
            .food()
            .iter()
            .map(|&f| player.manhattan(f))
            .min()
            .unwrap_or(0);

        let mut nearest_scared: Option<i32> = None;
        let mut nearest_active: Option<i32> = None;
        for adversary in state.adversaries() {
            let dist = player.manhattan(adversary.position);
            let slot = if adversary.is_scared() {
                &mut nearest_scared
            } else {
                &mut nearest_active
            };
            *slot = Some(slot.map_or(dist, |d: i32| d.min(dist)));
        }

        state.score()
            - self.food_weight * f64::from(nearest_food)
            - self.scared_weight * f64::from(nearest_scared.unwrap_or(0))
            + self.avoid_weight * f64::from(nearest_active.unwrap_or(0))
    }
}
