/// Drops projected points that sit closer than `min_distance` to the last kept one.
///
/// Distances are Euclidean in the caller's units (pixels after projection).
/// The first and last points are always kept so the polyline still spans the
/// data extent. A non-positive or non-finite `min_distance` disables thinning.
#[must_use]
pub fn subsample_by_distance(points: &[(f64, f64)], min_distance: f64) -> Vec<(f64, f64)> {
    if points.len() <= 2 || !min_distance.is_finite() || min_distance <= 0.0 {
        return points.to_vec();
    }

    let last_index = points.len() - 1;
    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);
    let mut anchor = points[0];
    for &point in &points[1..last_index] {
        if (point.0 - anchor.0).hypot(point.1 - anchor.1) > min_distance {
            kept.push(point);
            anchor = point;
        }
    }
    kept.push(points[last_index]);
    kept
}

#[cfg(test)]
mod tests {
    use super::subsample_by_distance;

    #[test]
    fn zero_distance_keeps_everything() {
        let points = vec![(0.0, 0.0), (0.1, 0.0), (0.2, 0.0)];
        assert_eq!(subsample_by_distance(&points, 0.0), points);
    }

    #[test]
    fn close_points_are_dropped_but_endpoints_survive() {
        let points = vec![(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (3.0, 0.0), (3.2, 0.0)];
        let kept = subsample_by_distance(&points, 1.5);
        assert_eq!(kept, vec![(0.0, 0.0), (3.0, 0.0), (3.2, 0.0)]);
    }

    #[test]
    fn distance_uses_both_axes() {
        let points = vec![(0.0, 0.0), (0.0, 2.0), (0.0, 2.5)];
        let kept = subsample_by_distance(&points, 1.0);
        assert_eq!(kept.len(), 3);
    }
}
