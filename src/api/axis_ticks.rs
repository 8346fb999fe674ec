use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_TICK_COUNT: usize = 8;

/// Ticks at or beyond this magnitude switch the whole axis to integer labels.
const INTEGER_LABEL_THRESHOLD: f64 = 100.0;

/// Step size for "nice" gridlines over `[min_val, max_val]`.
///
/// The step is a multiple of 1 for spans up to 20, of 5 for spans up to 50,
/// and of 10 above that. Halfway quotients round to even, so a span of 20
/// with 8 targets yields a step of 2 and a span of 200 yields 20.
#[must_use]
pub fn nice_tick_step(min_val: f64, max_val: f64, target_count: usize) -> f64 {
    let target = target_count.max(1) as f64;
    let range_val = max_val - min_val;

    if range_val <= 20.0 {
        (range_val / target).round_ties_even().max(1.0)
    } else if range_val <= 50.0 {
        ((range_val / target / 5.0).round_ties_even() * 5.0).max(5.0)
    } else {
        ((range_val / target / 10.0).round_ties_even() * 10.0).max(10.0)
    }
}

/// Human-readable gridline values covering `[min_val, max_val]`.
///
/// Ticks start at the largest multiple of the step not above `min_val`, run
/// one step past `max_val`, and are kept only inside
/// `[min_val - step, max_val + step]`. Finite input always yields at least
/// one tick; non-finite input yields none.
#[must_use]
pub fn nice_ticks(min_val: f64, max_val: f64, target_count: usize) -> Vec<f64> {
    if !min_val.is_finite() || !max_val.is_finite() {
        return Vec::new();
    }
    let (min_val, max_val) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };

    let step = nice_tick_step(min_val, max_val, target_count);
    let start = (min_val / step).floor() * step;
    if !step.is_finite() || !start.is_finite() {
        return endpoint_ticks(min_val, max_val);
    }
    let count = ((max_val - start) / step).floor() as usize + 2;
    let lower = min_val - step;
    let upper = max_val + step;

    let mut ticks: Vec<f64> = (0..count)
        .map(|index| normalize_zero(start + index as f64 * step))
        .filter(|tick| tick.is_finite() && (lower..=upper).contains(tick))
        .collect();
    // Adjacent ticks collapse when the step is below the values' precision.
    ticks.dedup();
    if ticks.is_empty() {
        return endpoint_ticks(min_val, max_val);
    }
    ticks
}

/// Fallback near the edge of the `f64` range, where step arithmetic overflows.
fn endpoint_ticks(min_val: f64, max_val: f64) -> Vec<f64> {
    if min_val == max_val {
        vec![normalize_zero(min_val)]
    } else {
        vec![normalize_zero(min_val), normalize_zero(max_val)]
    }
}

/// Axis-wide tick label format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLabelFormat {
    /// Truncated integer, e.g. `120`.
    Integer,
    /// One decimal place, e.g. `12.0`.
    OneDecimal,
}

impl AxisLabelFormat {
    /// Picks `Integer` when any tick reaches magnitude 100, `OneDecimal`
    /// otherwise. The decision covers every tick on the axis.
    #[must_use]
    pub fn for_ticks(ticks: &[f64]) -> Self {
        if ticks
            .iter()
            .any(|tick| tick.abs() >= INTEGER_LABEL_THRESHOLD)
        {
            Self::Integer
        } else {
            Self::OneDecimal
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Integer => format!("{:.0}", normalize_zero(value.trunc())),
            Self::OneDecimal => format!("{:.1}", normalize_zero(value)),
        }
    }
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
