// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 x 10^k increments) and integer tick formatting.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Signed tick increment: positive values are the step itself, negative
/// values are the reciprocal of the step (keeps sub-unit steps exact).
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Roughly `count` evenly spaced round values inside `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start.is_nan() || stop.is_nan() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut out = Vec::new();
    if step > 0.0 {
        let mut r0 = (lo / step).round();
        let mut r1 = (hi / step).round();
        if r0 * step < lo { r0 += 1.0; }
        if r1 * step > hi { r1 -= 1.0; }
        let n = (r1 - r0 + 1.0).max(0.0) as usize;
        out.extend((0..n).map(|i| (r0 + i as f64) * step));
    } else {
        let inv = -step;
        let mut r0 = (lo * inv).round();
        let mut r1 = (hi * inv).round();
        if r0 / inv < lo { r0 += 1.0; }
        if r1 / inv > hi { r1 -= 1.0; }
        let n = (r1 - r0 + 1.0).max(0.0) as usize;
        out.extend((0..n).map(|i| (r0 + i as f64) / inv));
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Integer tick label: rounds half up, never prints `-0`.
pub fn format_integer(v: f64) -> String {
    if !v.is_finite() {
        return if v.is_nan() { "NaN".to_string() } else if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    let r = (v + 0.5).floor();
    if r == 0.0 { "0".to_string() } else { format!("{}", r) }
}
