use super::*;

#[test]
fn intervals_are_successive_differences() {
    let schedule = [(100_u32, 'a'), (260, 'b'), (420, 'c'), (560, 'd')];
    let intervals = offsets_to_intervals(&schedule);
    assert_eq!(intervals, vec![(100, 'a'), (160, 'b'), (160, 'c'), (140, 'd')]);
}

#[test]
fn first_interval_equals_first_offset() {
    let intervals = offsets_to_intervals(&[(2600_u32, ())]);
    assert_eq!(intervals, vec![(2600, ())]);
}

#[test]
fn out_of_order_offsets_clamp_to_zero_wait() {
    let intervals = offsets_to_intervals(&[(500_u32, 'a'), (200, 'b'), (700, 'c')]);
    assert_eq!(intervals, vec![(500, 'a'), (0, 'b'), (200, 'c')]);
}

#[test]
fn empty_schedule_produces_no_intervals() {
    let intervals: Vec<(u32, char)> = offsets_to_intervals(&[]);
    assert!(intervals.is_empty());
}

#[test]
fn splash_schedule_total_matches_final_offset() {
    use crate::state::splash::SCHEDULE;
    let total: u32 = offsets_to_intervals(SCHEDULE).iter().map(|(wait, _)| wait).sum();
    assert_eq!(total, SCHEDULE.last().expect("non-empty").0);
}
