//! Reliability-weighted fusion of per-source results.
//!
//! Numeric fields are combined as a weighted average using each source's
//! static reliability; categorical fields are never averaged and come from
//! the single most reliable contributor. Input order does not affect the
//! fused numbers beyond floating-point noise.

use pitchside_types::{FusedConditions, MatchConditions, PitchsideError, SourceResult};
use tracing::debug;

/// Fuse one or more per-source results into a single payload.
///
/// Weights are `reliability / sum(reliabilities)`. When every contributor
/// reports zero reliability the fields degrade to an arithmetic mean rather
/// than dividing by zero. `reliability_used` is the maximum reliability among
/// contributors, and `fetched_at` the most recent fetch time.
///
/// # Errors
/// Returns `PitchsideError::InvalidArg` when `results` is empty; the caller
/// decides whether that means surfacing a failure or serving synthetic data.
pub fn fuse(results: Vec<SourceResult>) -> Result<FusedConditions, PitchsideError> {
    if results.is_empty() {
        return Err(PitchsideError::InvalidArg(
            "cannot fuse an empty result set".to_string(),
        ));
    }

    let contributing_sources: Vec<String> = results.iter().map(|r| r.source.clone()).collect();
    let reliability_used = results
        .iter()
        .map(|r| r.reliability)
        .fold(0.0_f64, f64::max);
    let fetched_at = results
        .iter()
        .map(|r| r.fetched_at)
        .max()
        .unwrap_or_else(chrono::Utc::now);

    let mut results = results;
    if results.len() == 1 {
        let only = results.swap_remove(0);
        return Ok(FusedConditions {
            conditions: only.conditions,
            reliability_used,
            contributing_sources,
            fetched_at,
        });
    }

    let total: f64 = results.iter().map(|r| r.reliability).sum();
    let n = results.len() as f64;
    // All-zero reliabilities degrade to an arithmetic mean.
    let weight_of = |r: &SourceResult| {
        if total > 0.0 {
            r.reliability / total
        } else {
            1.0 / n
        }
    };

    let mut temperature_c = 0.0;
    let mut wind_speed_ms = 0.0;
    let mut precipitation_mm = 0.0;
    let mut humidity_pct = 0.0;
    let mut visibility_m = 0.0;
    for r in &results {
        let w = weight_of(r);
        temperature_c += w * r.conditions.temperature_c;
        wind_speed_ms += w * r.conditions.wind_speed_ms;
        precipitation_mm += w * r.conditions.precipitation_mm;
        humidity_pct += w * r.conditions.humidity_pct;
        visibility_m += w * r.conditions.visibility_m;
    }

    // Categorical state from the single most reliable contributor; ties go
    // to the earlier entry.
    let mut sky = results[0].conditions.sky;
    let mut best = results[0].reliability;
    for r in &results[1..] {
        if r.reliability > best {
            best = r.reliability;
            sky = r.conditions.sky;
        }
    }

    debug!(
        sources = results.len(),
        reliability_used, "fused multi-source conditions"
    );

    Ok(FusedConditions {
        conditions: MatchConditions {
            temperature_c,
            wind_speed_ms,
            precipitation_mm,
            humidity_pct,
            visibility_m,
            sky,
        },
        reliability_used,
        contributing_sources,
        fetched_at,
    })
}
