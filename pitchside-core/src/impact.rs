//! Deterministic conditions-to-impact scoring model.
//!
//! The model is a set of pure functions over a [`MatchConditions`] payload
//! and static coefficient tables. Identical inputs always produce
//! bit-identical outputs; there is no randomness and no clock access, so the
//! prediction dashboard can replay historical payloads and get the scores it
//! showed at the time.
//!
//! Each physical dimension maps to a score in `[-1, 0]` (perfect conditions
//! score zero, a dimension never improves on its own ideal) and the
//! composites blend those dimension scores with fixed weights before
//! clamping to their documented ranges.

use pitchside_types::{
    ImpactScore, MatchConditions, PositionImpact, StyleImpact, TacticalImpact,
};

/// Temperature players perform best at, in Celsius.
const TEMP_OPTIMUM_C: f64 = 16.0;
/// Deviation from the optimum tolerated without penalty.
const TEMP_COMFORT_BAND_C: f64 = 6.0;
/// Deviation beyond the comfort band at which the penalty saturates.
const TEMP_FALLOFF_C: f64 = 14.0;

/// Wind thresholds in metres per second.
const WIND_BREEZY_MS: f64 = 4.0;
const WIND_STRONG_MS: f64 = 8.0;
const WIND_SEVERE_MS: f64 = 12.0;

/// Standard meteorological precipitation intensities, in mm/h.
const PRECIP_LIGHT_MM: f64 = 0.5;
const PRECIP_MODERATE_MM: f64 = 2.5;
const PRECIP_HEAVY_MM: f64 = 7.6;

/// Relative humidity band considered neutral, in percent.
const HUMIDITY_BAND_LOW: f64 = 40.0;
const HUMIDITY_BAND_HIGH: f64 = 60.0;

/// Visibility thresholds in metres.
const VIS_FULL_M: f64 = 10_000.0;
const VIS_REDUCED_M: f64 = 4_000.0;
const VIS_POOR_M: f64 = 1_000.0;

/// Per-dimension weights for the overall score. Must sum to 1.
const OVERALL_W_TEMP: f64 = 0.20;
const OVERALL_W_WIND: f64 = 0.25;
const OVERALL_W_PRECIP: f64 = 0.30;
const OVERALL_W_HUMIDITY: f64 = 0.10;
const OVERALL_W_VISIBILITY: f64 = 0.15;

/// Per-dimension weights for the goal-scoring score. Must sum to 1.
const GOALS_W_TEMP: f64 = 0.10;
const GOALS_W_WIND: f64 = 0.30;
const GOALS_W_PRECIP: f64 = 0.35;
const GOALS_W_HUMIDITY: f64 = 0.05;
const GOALS_W_VISIBILITY: f64 = 0.20;

/// Linear ramp between two score anchors; saturates outside the range.
fn ramp(value: f64, from: f64, to: f64, score_from: f64, score_to: f64) -> f64 {
    let t = ((value - from) / (to - from)).clamp(0.0, 1.0);
    score_from + t * (score_to - score_from)
}

/// Temperature dimension score in `[-1, 0]`.
fn temperature_score(temperature_c: f64) -> f64 {
    let deviation = (temperature_c - TEMP_OPTIMUM_C).abs();
    if deviation <= TEMP_COMFORT_BAND_C {
        return 0.0;
    }
    -(((deviation - TEMP_COMFORT_BAND_C) / TEMP_FALLOFF_C).min(1.0))
}

/// Wind dimension score in `[-1, 0]`.
fn wind_score(wind_speed_ms: f64) -> f64 {
    if wind_speed_ms < WIND_BREEZY_MS {
        0.0
    } else if wind_speed_ms < WIND_STRONG_MS {
        ramp(wind_speed_ms, WIND_BREEZY_MS, WIND_STRONG_MS, 0.0, -0.3)
    } else if wind_speed_ms < WIND_SEVERE_MS {
        ramp(wind_speed_ms, WIND_STRONG_MS, WIND_SEVERE_MS, -0.3, -0.7)
    } else {
        ramp(
            wind_speed_ms,
            WIND_SEVERE_MS,
            WIND_SEVERE_MS * 2.0,
            -0.7,
            -1.0,
        )
    }
}

/// Precipitation dimension score in `[-1, 0]`.
fn precipitation_score(precipitation_mm: f64) -> f64 {
    if precipitation_mm < PRECIP_LIGHT_MM {
        0.0
    } else if precipitation_mm < PRECIP_MODERATE_MM {
        ramp(
            precipitation_mm,
            PRECIP_LIGHT_MM,
            PRECIP_MODERATE_MM,
            0.0,
            -0.25,
        )
    } else if precipitation_mm < PRECIP_HEAVY_MM {
        ramp(
            precipitation_mm,
            PRECIP_MODERATE_MM,
            PRECIP_HEAVY_MM,
            -0.25,
            -0.6,
        )
    } else {
        ramp(
            precipitation_mm,
            PRECIP_HEAVY_MM,
            PRECIP_HEAVY_MM * 2.0,
            -0.6,
            -1.0,
        )
    }
}

/// Humidity dimension score in `[-0.5, 0]`. Humid air loads conditioning
/// more than dry air, so the two sides of the band fall off asymmetrically.
fn humidity_score(humidity_pct: f64) -> f64 {
    if humidity_pct > HUMIDITY_BAND_HIGH {
        ramp(humidity_pct, HUMIDITY_BAND_HIGH, 100.0, 0.0, -0.5)
    } else if humidity_pct < HUMIDITY_BAND_LOW {
        ramp(humidity_pct, HUMIDITY_BAND_LOW, 0.0, 0.0, -0.3)
    } else {
        0.0
    }
}

/// Visibility dimension score in `[-1, 0]`.
fn visibility_score(visibility_m: f64) -> f64 {
    if visibility_m >= VIS_FULL_M {
        0.0
    } else if visibility_m >= VIS_REDUCED_M {
        ramp(visibility_m, VIS_FULL_M, VIS_REDUCED_M, 0.0, -0.2)
    } else if visibility_m >= VIS_POOR_M {
        ramp(visibility_m, VIS_REDUCED_M, VIS_POOR_M, -0.2, -0.6)
    } else {
        ramp(visibility_m, VIS_POOR_M, 0.0, -0.6, -1.0)
    }
}

/// Score a fused conditions payload.
///
/// Pure and deterministic; identical inputs yield bit-identical outputs.
#[must_use]
pub fn score(conditions: &MatchConditions) -> ImpactScore {
    let temp = temperature_score(conditions.temperature_c);
    let wind = wind_score(conditions.wind_speed_ms);
    let precip = precipitation_score(conditions.precipitation_mm);
    let humidity = humidity_score(conditions.humidity_pct);
    let visibility = visibility_score(conditions.visibility_m);

    let overall = (OVERALL_W_TEMP * temp
        + OVERALL_W_WIND * wind
        + OVERALL_W_PRECIP * precip
        + OVERALL_W_HUMIDITY * humidity
        + OVERALL_W_VISIBILITY * visibility)
        .clamp(-1.0, 1.0);

    let goal_scoring = (GOALS_W_TEMP * temp
        + GOALS_W_WIND * wind
        + GOALS_W_PRECIP * precip
        + GOALS_W_HUMIDITY * humidity
        + GOALS_W_VISIBILITY * visibility)
        .clamp(-1.0, 1.0);

    let style = StyleImpact {
        // A slick or windy surface punishes short ground circulation.
        passing: (0.5 * precip + 0.3 * wind + 0.2 * temp).clamp(-1.0, 1.0),
        // Wind dominates anything played through the air.
        aerial: (0.7 * wind + 0.3 * precip).clamp(-1.0, 1.0),
        // Sprint play needs footing and sight lines.
        pace: (0.5 * precip + 0.3 * visibility + 0.2 * temp).clamp(-1.0, 1.0),
    };

    let positions = PositionImpact {
        goalkeeper: (0.4 * precip + 0.3 * wind + 0.3 * visibility).clamp(-0.5, 0.0),
        defender: (0.35 * precip + 0.35 * wind + 0.3 * visibility).clamp(-0.6, 0.1),
        midfielder: (0.4 * precip + 0.3 * wind + 0.3 * temp).clamp(-0.7, 0.2),
        forward: (0.4 * precip + 0.2 * wind + 0.2 * visibility + 0.2 * temp).clamp(-0.8, 0.2),
    };

    let tactics = TacticalImpact {
        // Ground play degrading faster than aerial play favors going direct,
        // but severe wind takes the long ball away too.
        long_ball_bias: (-0.8 * precip + 0.5 * wind).clamp(-1.0, 1.0),
        // A sustained press is a conditioning bet; heat and humidity tax it.
        pressing_viability: (0.6 * temp + 0.4 * humidity).clamp(-1.0, 1.0),
        // Wind and rain turn dead balls into coin flips.
        set_piece_volatility: (-(0.7 * wind + 0.3 * precip)).clamp(-1.0, 1.0),
    };

    ImpactScore {
        overall,
        goal_scoring,
        style,
        positions,
        tactics,
    }
}
