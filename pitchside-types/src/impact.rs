//! Outputs of the impact-scoring pipeline.
//!
//! All values are produced by pure functions over a fused payload and static
//! coefficient tables; see `pitchside-core::impact` for the model itself.

use serde::{Deserialize, Serialize};

/// Style-of-play impact breakdown. Each field is clamped to `[-1, 1]`;
/// negative means the conditions hinder that facet of play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleImpact {
    /// Short ground passing.
    pub passing: f64,
    /// Aerial play: crosses, long diagonals, headed duels.
    pub aerial: f64,
    /// Sprint-based play and counter-attacking pace.
    pub pace: f64,
}

/// Position-specific impact breakdown with independent clamp ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionImpact {
    /// Goalkeeper handling and distribution; clamped to `[-0.5, 0]`.
    pub goalkeeper: f64,
    /// Defensive organization and clearances; clamped to `[-0.6, 0.1]`.
    pub defender: f64,
    /// Midfield control and circulation; clamped to `[-0.7, 0.2]`.
    pub midfielder: f64,
    /// Finishing and movement in the final third; clamped to `[-0.8, 0.2]`.
    pub forward: f64,
}

/// Tactical tendency shifts implied by the conditions, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TacticalImpact {
    /// Positive values favor a direct, long-ball approach over ground play.
    pub long_ball_bias: f64,
    /// Viability of a sustained high press; hot and humid conditions pull
    /// this down.
    pub pressing_viability: f64,
    /// Expected volatility of set pieces; wind and rain push this up.
    pub set_piece_volatility: f64,
}

/// Full impact score for a fused conditions payload.
///
/// Deterministic: identical inputs yield bit-identical outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactScore {
    /// Overall impact on match quality, clamped to `[-1, 1]`.
    pub overall: f64,
    /// Impact on goal-scoring likelihood, clamped to `[-1, 1]`.
    pub goal_scoring: f64,
    /// Style-of-play breakdown.
    pub style: StyleImpact,
    /// Position-specific breakdown.
    pub positions: PositionImpact,
    /// Tactical tendency shifts.
    pub tactics: TacticalImpact,
}
