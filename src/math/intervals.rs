use std::fmt::Display;

/// A closed interval `[lo, hi]` on the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Interval {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    fn new_unchecked(lo: f64, hi: f64) -> Interval {
        debug_assert!(lo <= hi);
        Self { lo, hi }
    }

    pub fn around(center: f64, radius: f64) -> Interval {
        Self::new(center - radius, center + radius)
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Keeps the part of the interval to the left of `mid`. If `mid` lies
    /// outside, it's clamped to the interval first.
    pub fn split_left(&self, mid: f64) -> Self {
        Self::new_unchecked(self.lo, self.clamp(mid))
    }

    /// Keeps the part of the interval to the right of `mid`.
    pub fn split_right(&self, mid: f64) -> Self {
        Self::new_unchecked(self.clamp(mid), self.hi)
    }

    pub fn width(&self) -> f64 {
        debug_assert!(self.lo <= self.hi);
        self.hi - self.lo
    }

    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// True if `value` lies strictly between the endpoints.
    pub fn contains_strictly(&self, value: f64) -> bool {
        self.lo < value && value < self.hi
    }

    /// True once the midpoint can't be distinguished from an endpoint,
    /// i.e., the interval can't be split any further.
    #[allow(clippy::float_cmp)]
    pub fn is_exhausted(&self) -> bool {
        let mid = self.midpoint();
        mid == self.lo || mid == self.hi
    }

    fn clamp(&self, value: f64) -> f64 {
        value.max(self.lo).min(self.hi)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
