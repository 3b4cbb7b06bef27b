//! Easing and phase helpers shared by the motion families.

/// Hermite smoothstep on `[0, 1]`.
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Smoothstep the magnitude of a value in `[-1, 1]`, keeping its sign.
pub fn smoothstep_signed(v: f64) -> f64 {
    let v = v.clamp(-1.0, 1.0);
    v.signum() * smoothstep(v.abs())
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `t` inside `[start, end)` rescaled to `[0, 1]`; zero for an empty phase.
pub fn phase_progress(t: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return 0.0;
    }
    ((t - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
