use rangeframe::PlotError;
use rangeframe::core::{DataPoint, Dataset, PointSeries};

#[test]
fn bounding_box_is_union_of_all_series() {
    let mut dataset = Dataset::new();
    dataset
        .add_series(&[1.0, 2.0, 3.0], &[0.5, -1.0, 2.0])
        .expect("first series");
    dataset
        .add_series(&[-4.0, 10.0], &[0.0, 1.0])
        .expect("second series");

    let bbox = dataset.bounding_box().expect("bbox");
    assert_eq!(bbox.x, (-4.0, 10.0));
    assert_eq!(bbox.y, (-1.0, 2.0));
    assert_eq!(dataset.len(), 2);
}

#[test]
fn empty_dataset_has_no_bounding_box() {
    let dataset = Dataset::new();
    assert!(matches!(
        dataset.bounding_box(),
        Err(PlotError::InvalidState(_))
    ));
}

#[test]
fn mismatched_lengths_are_rejected() {
    let mut dataset = Dataset::new();
    let err = dataset
        .add_series(&[1.0, 2.0, 3.0], &[1.0, 2.0])
        .expect_err("length mismatch");
    assert!(matches!(err, PlotError::InvalidArgument(_)));
    assert!(dataset.is_empty());
}

#[test]
fn empty_and_non_finite_series_are_rejected() {
    let mut dataset = Dataset::new();
    assert!(matches!(
        dataset.add_series(&[], &[]),
        Err(PlotError::InvalidArgument(_))
    ));
    assert!(matches!(
        dataset.add_series(&[1.0, f64::NAN], &[1.0, 2.0]),
        Err(PlotError::InvalidArgument(_))
    ));
    assert!(matches!(
        dataset.add_points(&[DataPoint::new(0.0, f64::INFINITY)]),
        Err(PlotError::InvalidArgument(_))
    ));
    assert!(dataset.is_empty());
}

#[test]
fn series_are_copied_at_registration() {
    let mut xs = vec![1.0, 2.0];
    let mut ys = vec![3.0, 4.0];
    let mut dataset = Dataset::new();
    dataset.add_series(&xs, &ys).expect("series");

    xs[0] = 100.0;
    ys[1] = -100.0;

    let stored = &dataset.series()[0];
    assert_eq!(stored.points()[0], DataPoint::new(1.0, 3.0));
    assert_eq!(stored.points()[1], DataPoint::new(2.0, 4.0));
    assert_eq!(dataset.bounding_box().expect("bbox").x, (1.0, 2.0));
}

#[test]
fn point_series_tracks_its_own_bounds() {
    let series = PointSeries::from_points(vec![
        DataPoint::new(3.0, 1.0),
        DataPoint::new(-1.0, 5.0),
    ])
    .expect("series");
    assert_eq!(series.len(), 2);
    assert_eq!(series.bounds().x, (-1.0, 3.0));
    assert_eq!(series.bounds().y, (1.0, 5.0));
}
