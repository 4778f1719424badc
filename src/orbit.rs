use nalgebra::{Point2, Vector2};
use thiserror::Error;

use std::f64::consts::PI;

use crate::math::anomaly::{check_eccentricity, AnomalyError};
use crate::math::linspace;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error(transparent)]
    Eccentricity(#[from] AnomalyError),

    #[error("Semi-major axis must be positive and finite, got {0}")]
    InvalidSemimajorAxis(f64),
}

/// A planar elliptic orbit, centered on the origin with its major axis along
/// x. The primary sits at the focus on the positive x side, so periapsis is
/// at `(a, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    semimajor: f64,
    eccentricity: f64,
}

impl Ellipse {
    pub fn new(semimajor: f64, eccentricity: f64) -> Result<Self, OrbitError> {
        check_eccentricity(eccentricity)?;
        if !(semimajor.is_finite() && semimajor > 0.0) {
            return Err(OrbitError::InvalidSemimajorAxis(semimajor));
        }

        Ok(Ellipse {
            semimajor,
            eccentricity,
        })
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn semiminor_axis(&self) -> f64 {
        self.semimajor * (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// Distance from the center to either focus
    pub fn focal_distance(&self) -> f64 {
        self.semimajor * self.eccentricity
    }

    pub fn semilatus_rectum(&self) -> f64 {
        self.semimajor * (1.0 - self.eccentricity.powi(2))
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::origin()
    }

    pub fn focus(&self) -> Point2<f64> {
        Point2::new(self.focal_distance(), 0.0)
    }

    pub fn periapsis(&self) -> Point2<f64> {
        Point2::new(self.semimajor, 0.0)
    }

    /// Distance from the focus at the given true anomaly
    pub fn radius_at(&self, true_anomaly: f64) -> f64 {
        self.semilatus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos())
    }

    pub fn position_at(&self, true_anomaly: f64) -> Point2<f64> {
        let r = self.radius_at(true_anomaly);
        let (sin, cos) = true_anomaly.sin_cos();
        self.focus() + Vector2::new(r * cos, r * sin)
    }

    /// The point on the auxiliary circle (radius a, around the center) that
    /// the eccentric anomaly measures.
    pub fn auxiliary_point_at(&self, eccentric_anomaly: f64) -> Point2<f64> {
        let (sin, cos) = eccentric_anomaly.sin_cos();
        self.center() + Vector2::new(self.semimajor * cos, self.semimajor * sin)
    }

    /// Points tracing out the whole orbit, starting and ending at periapsis
    pub fn orbit_path(&self, num_points: usize) -> impl Iterator<Item = Point2<f64>> + '_ {
        linspace(0.0, 2.0 * PI, num_points).map(move |theta| self.position_at(theta))
    }

    pub fn auxiliary_circle_path(
        &self,
        num_points: usize,
    ) -> impl Iterator<Item = Point2<f64>> + '_ {
        linspace(0.0, 2.0 * PI, num_points).map(move |ecc| self.auxiliary_point_at(ecc))
    }
}
