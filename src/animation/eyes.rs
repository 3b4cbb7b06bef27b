//! Eye sub-states and the blink schedules the motion families share.

use crate::animation::timeline::FrameClock;

/// Per-frame eye sub-state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum EyeState {
    /// Open eye; `look_x` in `[-1, 1]` shifts the pupil sideways.
    Open { look_x: f64 },
    Closed,
    Wide,
}

impl EyeState {
    pub const FORWARD: Self = Self::Open { look_x: 0.0 };
}

impl Default for EyeState {
    fn default() -> Self {
        Self::FORWARD
    }
}

/// Idle blink windows as integer percentages of the loop.
const IDLE_BLINK_WINDOWS: [(u64, u64); 2] = [(40, 45), (80, 85)];

/// Idle loops close the eyes inside the blink windows. The first frame at or after a
/// window start is always closed as well so short loops still blink.
pub fn idle_blink(clock: FrameClock) -> bool {
    let i = u64::from(clock.index);
    let n = u64::from(clock.count.max(1));
    IDLE_BLINK_WINDOWS.iter().any(|&(start, end)| {
        let in_window = 100 * i >= start * n && 100 * i < end * n;
        let first_at_start = (start * n).div_ceil(100);
        in_window || (first_at_start < n && i == first_at_start)
    })
}

/// Shortest gap between two blinks, in frames.
const MIN_BLINK_PERIOD: u32 = 3;

/// Blink on every `n / divisor`-th frame (frame 0 included). Loops too short for that
/// spacing blink once on frame 0, and loops under three frames never blink.
pub fn periodic_blink(clock: FrameClock, divisor: u32) -> bool {
    if clock.count < MIN_BLINK_PERIOD {
        return false;
    }
    let period = clock.count / divisor.max(1);
    if period < MIN_BLINK_PERIOD {
        return clock.index == 0;
    }
    clock.index % period == 0
}

/// Eyes shut strictly inside the middle third of the loop.
pub fn middle_third_closed(clock: FrameClock) -> bool {
    let i = u64::from(clock.index) * 3;
    let n = u64::from(clock.count);
    i > n && i < 2 * n
}

#[cfg(test)]
#[path = "../../tests/unit/animation/eyes.rs"]
mod tests;
