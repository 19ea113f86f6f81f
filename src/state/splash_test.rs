use super::*;

// =============================================================
// Schedule shape
// =============================================================

#[test]
fn schedule_offsets_are_nondecreasing() {
    for pair in SCHEDULE.windows(2) {
        assert!(pair[0].0 <= pair[1].0, "schedule out of order: {pair:?}");
    }
}

#[test]
fn schedule_flies_parts_in_assembly_order() {
    let parts: Vec<u8> = SCHEDULE
        .iter()
        .filter_map(|(_, step)| match step {
            SplashStep::FlyInPart(n) => Some(*n),
            _ => None,
        })
        .collect();
    assert_eq!(parts, vec![4, 1, 3, 2]);
}

#[test]
fn schedule_ends_with_login_reveal() {
    let (offset, step) = SCHEDULE.last().expect("schedule is non-empty");
    assert_eq!(*step, SplashStep::ShowLogin);
    assert_eq!(*offset, 2600);
}

// =============================================================
// Step application
// =============================================================

#[test]
fn full_run_completes_and_enables_backdrop() {
    let mut state = SplashState::default();
    assert!(!state.completed());
    for (_, step) in SCHEDULE {
        state.apply(*step);
    }
    assert!(state.completed());
    assert!(state.backdrop);
}

#[test]
fn steps_are_idempotent() {
    let mut once = SplashState::default();
    let mut twice = SplashState::default();
    for (_, step) in SCHEDULE {
        once.apply(*step);
        twice.apply(*step);
        twice.apply(*step);
    }
    assert_eq!(once, twice);
}

#[test]
fn out_of_range_part_is_ignored() {
    let mut state = SplashState::default();
    state.apply(SplashStep::FlyInPart(0));
    state.apply(SplashStep::FlyInPart(9));
    assert_eq!(state, SplashState::default());
}

#[test]
fn partial_run_is_not_completed() {
    let mut state = SplashState::default();
    for (_, step) in &SCHEDULE[..4] {
        state.apply(*step);
    }
    assert!(!state.completed());
    assert!(!state.login_visible);
}
