use crate::error::{PlotError, PlotResult};

/// Multipliers tried after the power-of-ten base, in tie-break order.
const NICE_MULTIPLIERS: [f64; 3] = [2.0, 5.0, 10.0];

/// Picks the step from `{1, 2, 5, 10} × 10^k` closest to `raw`.
///
/// `k` is `floor(log10(raw))`, so the base candidate never exceeds `raw`;
/// `10 × base` covers raws just below the next power of ten. Ties keep the
/// earlier (smaller) candidate.
pub fn nice_step(raw: f64) -> PlotResult<f64> {
    if !raw.is_finite() || raw <= 0.0 {
        return Err(PlotError::InvalidArgument(format!(
            "raw tick step must be finite and > 0, got {raw}"
        )));
    }

    let exponent = raw.log10().floor() as i32;
    let base = 10.0_f64.powi(exponent);

    let mut best = base;
    let mut best_diff = (raw - base).abs();
    for multiplier in NICE_MULTIPLIERS {
        let candidate = multiplier * base;
        let diff = (raw - candidate).abs();
        if diff < best_diff {
            best = candidate;
            best_diff = diff;
        }
    }
    Ok(best)
}

/// Raw step for `tick_count` ticks spread over `span`.
pub fn raw_step(span: f64, tick_count: u32) -> PlotResult<f64> {
    if tick_count < 2 {
        return Err(PlotError::InvalidArgument(format!(
            "tick count must be >= 2, got {tick_count}"
        )));
    }
    Ok(span / f64::from(tick_count - 1))
}
