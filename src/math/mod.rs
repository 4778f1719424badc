pub mod anomaly;
pub mod intervals;
pub mod root_finding;

/// `num_points` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, num_points: usize) -> impl Iterator<Item = f64> {
    let num_segments = num_points.saturating_sub(1).max(1);
    (0..num_points)
        .map(move |i| i as f64 / num_segments as f64)
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| start + u * (end - start))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_linspace() {
        let values: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let values: Vec<f64> = linspace(2.0, -2.0, 3).collect();
        assert_relative_eq!(values[0], 2.0);
        assert_relative_eq!(values[1], 0.0);
        assert_relative_eq!(values[2], -2.0);

        assert_eq!(linspace(0.0, 1.0, 1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
    }
}
