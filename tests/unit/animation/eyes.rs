use super::*;

fn closed_frames(n: u32, rule: impl Fn(FrameClock) -> bool) -> Vec<u32> {
    (0..n)
        .filter(|&i| rule(FrameClock::new(i, n)))
        .collect()
}

#[test]
fn idle_blink_twenty_frames() {
    assert_eq!(closed_frames(20, idle_blink), vec![8, 16]);
}

#[test]
fn idle_blink_short_loop_still_blinks() {
    let closed = closed_frames(4, idle_blink);
    assert!(!closed.is_empty());
    assert!(closed.len() < 4);
}

#[test]
fn idle_blink_long_loop_covers_window() {
    let closed = closed_frames(100, idle_blink);
    assert_eq!(closed, vec![40, 41, 42, 43, 44, 80, 81, 82, 83, 84]);
}

#[test]
fn periodic_blink_includes_first_frame() {
    assert_eq!(closed_frames(9, |c| periodic_blink(c, 3)), vec![0, 3, 6]);
    assert_eq!(closed_frames(20, |c| periodic_blink(c, 3)), vec![0, 6, 12, 18]);
}

#[test]
fn periodic_blink_short_loops_blink_once() {
    assert!(closed_frames(2, |c| periodic_blink(c, 3)).is_empty());
    assert_eq!(closed_frames(3, |c| periodic_blink(c, 3)), vec![0]);
    assert_eq!(closed_frames(5, |c| periodic_blink(c, 3)), vec![0]);
    assert_eq!(closed_frames(5, |c| periodic_blink(c, 2)), vec![0]);
    assert_eq!(closed_frames(6, |c| periodic_blink(c, 2)), vec![0, 3]);
}

#[test]
fn middle_third_is_strict() {
    assert_eq!(closed_frames(9, middle_third_closed), vec![4, 5]);
    assert!(closed_frames(1, middle_third_closed).is_empty());
}
