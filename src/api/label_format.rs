use crate::core::AxisLayout;

/// Steps below this switch tick labels to exponent form.
const SCIENTIFIC_STEP_BELOW: f64 = 1e-6;
/// Tick magnitudes from this on switch tick labels to exponent form.
const SCIENTIFIC_MAGNITUDE_FROM: f64 = 1e15;
/// Absorbs `log10` noise on exact powers of ten.
const LOG10_SNAP: f64 = 1e-9;
/// Digits an f64 can carry; more decimals only print noise.
const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// How every label on one axis is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickNotation {
    /// Plain decimal with a fixed number of fraction digits.
    Fixed { precision: usize },
    /// `{mantissa}e{exponent}`, resolved down to the step's decade.
    Scientific { step_exponent: i32 },
}

impl TickNotation {
    /// Picks the notation for ticks spaced `step` apart whose largest
    /// absolute value is `magnitude`.
    #[must_use]
    pub fn for_ticks(step: f64, magnitude: f64) -> Self {
        let tiny_step = step.is_finite() && step > 0.0 && step < SCIENTIFIC_STEP_BELOW;
        if tiny_step || magnitude >= SCIENTIFIC_MAGNITUDE_FROM {
            Self::Scientific {
                step_exponent: decimal_exponent(step),
            }
        } else {
            Self::Fixed {
                precision: precision_from_step(step),
            }
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        let text = match self {
            Self::Fixed { precision } => format!("{value:.precision$}"),
            Self::Scientific { step_exponent } => {
                // Values far below one step are rounding residue around zero.
                if value == 0.0 || decimal_exponent(value) < step_exponent.saturating_sub(6) {
                    return "0".to_owned();
                }
                let decimals = (decimal_exponent(value) - step_exponent)
                    .clamp(0, MAX_SIGNIFICANT_DIGITS as i32 - 1) as usize;
                format!("{value:.decimals$e}")
            }
        };
        if is_negative_zero_text(&text) {
            return text.trim_start_matches('-').to_owned();
        }
        text
    }
}

/// Formats a tick value with as much resolution as the step needs.
///
/// Output never depends on process locale: the decimal separator is always
/// `.` and there is no digit grouping. Very small steps and very large
/// values are written in exponent form (`2.5e-14`, `1e60`).
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    TickNotation::for_ticks(step, value.abs()).format(value)
}

/// Decimal places needed to tell adjacent multiples of `step` apart.
#[must_use]
pub fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let leading = (-decimal_exponent(step)).max(0) as usize;
    (leading..=leading + MAX_SIGNIFICANT_DIGITS)
        .find(|&precision| {
            let scaled = step * 10f64.powi(precision as i32);
            scaled.is_finite() && (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(leading)
}

/// Label texts for every tick of `axis`; empty for a degenerate axis.
///
/// One notation is shared by the whole axis so labels stay comparable.
#[must_use]
pub fn axis_tick_labels(axis: &AxisLayout) -> Vec<String> {
    let Some(step) = axis.step() else {
        return Vec::new();
    };
    let magnitude = axis
        .ticks()
        .iter()
        .fold(0.0, |widest: f64, tick| widest.max(tick.abs()));
    let notation = TickNotation::for_ticks(step, magnitude);
    axis.ticks()
        .iter()
        .map(|tick| notation.format(*tick))
        .collect()
}

/// Rough rendered width of `text` at `font_size_px`.
pub fn estimate_label_width(text: &str, font_size_px: f64) -> f64 {
    // Deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

fn decimal_exponent(value: f64) -> i32 {
    if !value.is_finite() || value == 0.0 {
        return 0;
    }
    (value.abs().log10() + LOG10_SNAP).floor() as i32
}

fn is_negative_zero_text(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|rest| rest.chars().all(|ch| ch == '0' || ch == '.'))
}
