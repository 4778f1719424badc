use std::f64::consts::PI;

use crate::math::anomaly::{
    check_eccentricity, eccentric_from_mean_all, true_from_eccentric_all, AnomalyError,
};
use crate::math::linspace;

/// One orbital period, sampled uniformly in time. Since the mean anomaly is
/// linear in time, its grid goes from 0 to 2pi alongside the time grid.
#[derive(Debug, Clone)]
pub struct AnomalySamples {
    eccentricity: f64,
    time: Vec<f64>,
    mean: Vec<f64>,
    eccentric: Vec<f64>,
    true_anomaly: Vec<f64>,
}

/// The anomalies at a single sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    /// Time since periapsis, as a fraction of the period
    pub time: f64,
    pub mean: f64,
    pub eccentric: f64,
    pub true_anomaly: f64,
}

impl AnomalySamples {
    pub fn compute(eccentricity: f64, num_samples: usize) -> Result<Self, AnomalyError> {
        check_eccentricity(eccentricity)?;

        let time: Vec<f64> = linspace(0.0, 1.0, num_samples).collect();
        let mean: Vec<f64> = linspace(0.0, 2.0 * PI, num_samples).collect();
        let eccentric = eccentric_from_mean_all(&mean, eccentricity)?;
        let true_anomaly = true_from_eccentric_all(&eccentric, eccentricity);

        Ok(AnomalySamples {
            eccentricity,
            time,
            mean,
            eccentric,
            true_anomaly,
        })
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn eccentric(&self) -> &[f64] {
        &self.eccentric
    }

    pub fn true_anomaly(&self) -> &[f64] {
        &self.true_anomaly
    }

    pub fn get(&self, index: usize) -> Option<SampleRow> {
        Some(SampleRow {
            time: *self.time.get(index)?,
            mean: self.mean[index],
            eccentric: self.eccentric[index],
            true_anomaly: self.true_anomaly[index],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = SampleRow> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_grid() {
        let samples = AnomalySamples::compute(0.7, 1000).unwrap();
        assert_eq!(samples.len(), 1000);
        assert_eq!(samples.mean().len(), 1000);
        assert_eq!(samples.eccentric().len(), 1000);
        assert_eq!(samples.true_anomaly().len(), 1000);

        let first = samples.get(0).unwrap();
        assert_eq!(first.time, 0.0);
        assert_eq!(first.mean, 0.0);
        assert_eq!(first.eccentric, 0.0);
        assert_eq!(first.true_anomaly, 0.0);

        let last = samples.get(999).unwrap();
        assert_abs_diff_eq!(last.time, 1.0);
        assert_abs_diff_eq!(last.mean, 2.0 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(last.eccentric, 2.0 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(last.true_anomaly, 2.0 * PI, epsilon = 1e-12);

        assert!(samples.get(1000).is_none());
    }

    #[test]
    fn test_halfway_is_apoapsis() {
        // With an odd number of samples, the middle one lands on t = 1/2
        let samples = AnomalySamples::compute(0.5, 101).unwrap();
        let middle = samples.get(50).unwrap();
        assert_abs_diff_eq!(middle.time, 0.5);
        assert_abs_diff_eq!(middle.eccentric, PI, epsilon = 1e-12);
        assert_abs_diff_eq!(middle.true_anomaly, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_true_anomaly_leads() {
        // Between periapsis and apoapsis the body is ahead of the mean
        // anomaly, and the eccentric anomaly sits in between.
        let samples = AnomalySamples::compute(0.7, 100).unwrap();
        for row in samples.rows() {
            if row.mean > 0.0 && row.mean < PI {
                assert!(row.mean <= row.eccentric);
                assert!(row.eccentric <= row.true_anomaly);
            }
        }
    }

    #[test]
    fn test_rejects_hyperbolic() {
        assert!(AnomalySamples::compute(1.2, 10).is_err());
        assert!(AnomalySamples::compute(0.0, 0).unwrap().is_empty());
    }
}
