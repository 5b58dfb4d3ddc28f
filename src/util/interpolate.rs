//! Clamped piecewise-linear interpolation over configured ranges.

/// Map `value` through the piecewise-linear curve `input -> output`,
/// clamping to the end outputs outside the input span.
///
/// Points are paired by position; surplus points on the longer slice are
/// ignored. Descending inputs (e.g. `[0, -120]` for a left overlay) are
/// walked in reverse. Returns `None` when no pair exists or `value` is NaN,
/// so callers can pick their own "no effect" fallback.
#[must_use]
pub fn interpolate_clamped(
    value: f32,
    input: &[f32],
    output: &[f32],
) -> Option<f32> {
    let len = input.len().min(output.len());
    if len == 0 || value.is_nan() {
        return None;
    }
    if len == 1 {
        return Some(output[0]);
    }

    let ascending = input[0] <= input[len - 1];
    let at = |i: usize| {
        let i = if ascending { i } else { len - 1 - i };
        (input[i], output[i])
    };

    let (first_in, first_out) = at(0);
    if value <= first_in {
        return Some(first_out);
    }
    let (last_in, last_out) = at(len - 1);
    if value >= last_in {
        return Some(last_out);
    }

    for i in 1..len {
        let (x0, y0) = at(i - 1);
        let (x1, y1) = at(i);
        if value <= x1 {
            let span = x1 - x0;
            if span.abs() <= f32::EPSILON {
                return Some(y1);
            }
            let t = (value - x0) / span;
            return Some(y0 + (y1 - y0) * t);
        }
    }
    Some(last_out)
}

/// Like [`interpolate_clamped`] but falls back to `fallback` for degenerate
/// ranges.
#[inline]
#[must_use]
pub fn interpolate_or(
    value: f32,
    input: &[f32],
    output: &[f32],
    fallback: f32,
) -> f32 {
    interpolate_clamped(value, input, output).unwrap_or(fallback)
}
