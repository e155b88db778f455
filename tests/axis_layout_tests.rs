use approx::assert_relative_eq;
use rangeframe::PlotError;
use rangeframe::core::{AxisLayout, BoundingBox, ChartLayout, MAX_TICK_COUNT, nice_step};

#[test]
fn sample_x_axis_uses_step_two() {
    let axis = AxisLayout::compute((1.0, 8.0), 4).expect("layout");
    assert_eq!(axis.step(), Some(2.0));
    assert_eq!(axis.axis_range(), (0.0, 8.0));
    assert_eq!(axis.ticks(), &[2.0, 4.0, 6.0, 8.0]);
    assert_eq!(axis.data_range(), (1.0, 8.0));
}

#[test]
fn sample_y_axis_uses_step_two_tenths() {
    let axis = AxisLayout::compute((0.0, 0.8), 4).expect("layout");
    let step = axis.step().expect("step");
    assert_relative_eq!(step, 0.2, epsilon = 1e-12);
    assert_relative_eq!(axis.axis_range().0, 0.0);
    assert_relative_eq!(axis.axis_range().1, 0.8, epsilon = 1e-12);

    let expected = [0.0, 0.2, 0.4, 0.6, 0.8];
    assert_eq!(axis.ticks().len(), expected.len());
    for (tick, want) in axis.ticks().iter().zip(expected) {
        assert_relative_eq!(*tick, want, epsilon = 1e-12);
    }
}

#[test]
fn negative_ranges_round_outward() {
    let axis = AxisLayout::compute((-7.3, -1.2), 4).expect("layout");
    assert_eq!(axis.step(), Some(2.0));
    assert_eq!(axis.axis_range(), (-8.0, 0.0));
    assert_eq!(axis.ticks(), &[-6.0, -4.0, -2.0]);
}

#[test]
fn wide_nice_steps_are_chosen_for_large_spans() {
    assert_eq!(nice_step(4_200.0).expect("step"), 5_000.0);
    assert_eq!(nice_step(120.0).expect("step"), 100.0);
    assert_relative_eq!(nice_step(0.0042).expect("step"), 0.005, epsilon = 1e-15);
}

#[test]
fn degenerate_axis_has_no_ticks_and_finite_range() {
    let axis = AxisLayout::compute((5.0, 5.0), 4).expect("layout");
    assert!(axis.is_degenerate());
    assert!(axis.ticks().is_empty());
    let (lo, hi) = axis.axis_range();
    assert!(lo < 5.0 && hi > 5.0);
    assert_relative_eq!(axis.normalize(5.0), 0.5);
}

#[test]
fn tick_count_bounds_are_enforced() {
    for tick_count in [0, 1, MAX_TICK_COUNT + 1] {
        assert!(matches!(
            AxisLayout::compute((0.0, 1.0), tick_count),
            Err(PlotError::InvalidArgument(_))
        ));
    }
    assert!(AxisLayout::compute((0.0, 1.0), 2).is_ok());
}

#[test]
fn invalid_data_ranges_are_rejected() {
    assert!(AxisLayout::compute((2.0, 1.0), 4).is_err());
    assert!(AxisLayout::compute((f64::NAN, 1.0), 4).is_err());
    assert!(AxisLayout::compute((-f64::MAX, f64::MAX), 4).is_err());
}

#[test]
fn chart_layout_shares_one_projection() {
    let bbox = BoundingBox {
        x: (1.0, 8.0),
        y: (0.0, 0.8),
    };
    let layout = ChartLayout::compute(bbox, 4).expect("layout");
    let projection = layout.projection();

    assert_eq!(projection.x_axis(), layout.x.axis_range());
    assert_eq!(projection.y_axis(), layout.y.axis_range());
    assert_relative_eq!(projection.normalize_x(1.0), 0.125);
    assert_relative_eq!(projection.normalize_y(0.0), 1.0);
    assert_eq!(layout.bounding_box(), bbox);
}

#[test]
fn range_up_to_f64_max_stays_finite() {
    let axis = AxisLayout::compute((0.0, f64::MAX), 4).expect("layout");
    let (lo, hi) = axis.axis_range();
    assert!(lo.is_finite() && hi.is_finite());
    assert_eq!((lo, hi), (0.0, f64::MAX));
    assert!(!axis.ticks().is_empty());
    assert!(axis.ticks().iter().all(|tick| tick.is_finite() && *tick <= f64::MAX));
    assert!(axis.normalize(f64::MAX).is_finite());
}

#[test]
fn degenerate_axis_at_f64_extremes_stays_finite() {
    for value in [f64::MAX, -f64::MAX] {
        let axis = AxisLayout::compute((value, value), 4).expect("layout");
        let (lo, hi) = axis.axis_range();
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo <= value && value <= hi);
        assert!(axis.normalize(value).is_finite());
    }
}
