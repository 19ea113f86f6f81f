use super::*;

// =============================================================
// bar_layout
// =============================================================

#[test]
fn one_bar_per_value() {
    let bars = bar_layout(&MOCK_VALUES, 480.0, 200.0, 8.0);
    assert_eq!(bars.len(), MOCK_VALUES.len());
}

#[test]
fn tallest_value_spans_full_height() {
    let bars = bar_layout(&MOCK_VALUES, 480.0, 200.0, 8.0);
    let tallest = &bars[1]; // 19.0 is the max
    assert!((tallest.height - 200.0).abs() < 1e-9);
    assert!(tallest.y.abs() < 1e-9);
}

#[test]
fn bars_stay_inside_the_plot_area() {
    let bars = bar_layout(&MOCK_VALUES, 480.0, 200.0, 8.0);
    for bar in bars {
        assert!(bar.x >= 0.0);
        assert!(bar.x + bar.width <= 480.0 + 1e-9);
        assert!(bar.y >= -1e-9);
        assert!(bar.y + bar.height <= 200.0 + 1e-9);
    }
}

#[test]
fn heights_are_proportional_to_values() {
    let bars = bar_layout(&[10.0, 5.0], 100.0, 100.0, 0.0);
    assert!((bars[0].height - 100.0).abs() < f64::EPSILON);
    assert!((bars[1].height - 50.0).abs() < f64::EPSILON);
}

#[test]
fn degenerate_inputs_yield_no_bars() {
    assert!(bar_layout(&[], 480.0, 200.0, 8.0).is_empty());
    assert!(bar_layout(&[1.0], 0.0, 200.0, 8.0).is_empty());
    assert!(bar_layout(&[1.0], 480.0, 0.0, 8.0).is_empty());
}

#[test]
fn non_positive_values_sit_on_the_baseline() {
    let bars = bar_layout(&[0.0, -3.0], 100.0, 100.0, 0.0);
    for bar in bars {
        assert!(bar.height.abs() < f64::EPSILON);
        assert!((bar.y - 100.0).abs() < f64::EPSILON);
    }
}

// =============================================================
// ChartSlot
// =============================================================

#[test]
fn slot_starts_empty() {
    let slot = ChartSlot::default();
    assert_eq!(slot.live_count(), 0);
    assert_eq!(slot.generation(), 0);
}

#[test]
fn replace_never_stacks_instances() {
    let mut slot = ChartSlot::default();
    for expected in 1..=10_u64 {
        let generation = slot.replace();
        assert_eq!(generation, expected);
        assert_eq!(slot.live_count(), 1);
    }
    assert_eq!(slot.generation(), 10);
}
