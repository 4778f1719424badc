use thiserror::Error;

use super::intervals::Interval;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindingError {
    #[error("Unable to find two points of opposite sign, starting at {center} with radius {radius}")]
    NoBracket { center: f64, radius: f64 },

    #[error("Hit max iterations ({iterations}) when trying to find a root in {interval}")]
    MaxIterations { iterations: usize, interval: Interval },
}

/// Very primitive way to construct a bracket for future root-finding.
/// Simply doubles the radius until a bracket with opposite signs at the
/// endpoints is found.
pub fn find_root_bracket(
    f: impl Fn(f64) -> f64,
    center: f64,
    mut radius: f64,
    num_iterations: usize,
) -> Result<Interval, RootFindingError> {
    let initial_radius = radius;
    for _ in 0..num_iterations {
        let bracket = Interval::around(center, radius);

        if f(bracket.lo()) * f(bracket.hi()) < 0.0 {
            return Ok(bracket);
        }

        // Double the search radius
        radius *= 2.0;
    }

    Err(RootFindingError::NoBracket {
        center,
        radius: initial_radius,
    })
}

/// Safeguarded Newton's method. Every Newton step has to land strictly inside
/// the current bracket, otherwise we fall back to bisecting it.
///
/// Stops when f vanishes, when a Newton step is shorter than `tolerance`, or
/// when the bracket can't be split any further.
///
/// Adapted from `rtsafe` in http://www.grad.hr/nastava/gs/prg/NumericalRecipesinC.pdf
#[allow(clippy::float_cmp)]
pub fn newton_plus_bisection(
    f_and_f_prime: impl Fn(f64) -> (f64, f64),
    mut interval: Interval,
    tolerance: f64,
    num_iterations: usize,
) -> Result<f64, RootFindingError> {
    // Initial setup: we guess right in the middle of the interval. Also, we need to
    // determine which way f is oriented.
    let mut guess = interval.midpoint();
    let lo_is_neg = f_and_f_prime(interval.lo()).0 < 0.0;

    for _ in 0..num_iterations {
        let (f, f_prime) = f_and_f_prime(guess);
        if f == 0.0 {
            return Ok(guess);
        }

        interval = shrink_bracket(interval, guess, lo_is_neg, f);

        // If the interval is too small, return
        if interval.is_exhausted() {
            return Ok(guess);
        }

        // What's our next guess? Let's try one from Newton's method
        let newton_guess = guess - f / f_prime;
        if (newton_guess - guess).abs() <= tolerance && interval.contains(newton_guess) {
            return Ok(newton_guess);
        }

        // If it's outside the interval (or on the edge); discard it. It won't help
        // us shrink our search space.
        guess = if interval.contains_strictly(newton_guess) {
            newton_guess
        } else {
            interval.midpoint()
        };
    }

    Err(RootFindingError::MaxIterations {
        iterations: num_iterations,
        interval,
    })
}

fn shrink_bracket(interval: Interval, guess: f64, lo_is_neg: bool, value: f64) -> Interval {
    match (lo_is_neg, value < 0.0) {
        (true, true) => interval.split_right(guess),   // - - +
        (true, false) => interval.split_left(guess),   // - + +
        (false, true) => interval.split_left(guess),   // + - -
        (false, false) => interval.split_right(guess), // + + -
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_bracket() {
        // Root of x - 10 is outside the starting radius, so we need a few doublings
        let bracket = find_root_bracket(|x| x - 10.0, 0.0, 1.0, 10).unwrap();
        assert!(bracket.contains(10.0));
        assert_relative_eq!(bracket.midpoint(), 0.0);

        // x^2 + 1 never changes sign
        let err = find_root_bracket(|x| x * x + 1.0, 0.0, 1.0, 10).unwrap_err();
        assert_eq!(
            err,
            RootFindingError::NoBracket {
                center: 0.0,
                radius: 1.0
            }
        );
    }

    #[test]
    fn test_cubics() {
        for a in [2.0, 50.0, -1.0, 0.1].iter() {
            let root = newton_plus_bisection(
                |x| (x * x * x - a, 3.0 * x * x),
                Interval::new(-100.0, 100.0),
                1e-14,
                100,
            )
            .unwrap();
            assert_relative_eq!(root, a.cbrt(), max_relative = 1e-12);
        }

        // There are three roots to x^3 - 4x^2 - 7x + 10: -2, 1, 5
        let f = |x| 10.0 + x * (-7.0 + x * (-4.0 + x));
        let f_ = |x| -7.0 + x * (-8.0 + x * 3.0);
        let x1 = newton_plus_bisection(|x| (f(x), f_(x)), Interval::new(-3.0, 0.0), 1e-14, 100);
        assert_relative_eq!(x1.unwrap(), -2.0, max_relative = 1e-12);
        let x2 = newton_plus_bisection(|x| (f(x), f_(x)), Interval::new(0.0, 4.0), 1e-14, 100);
        assert_relative_eq!(x2.unwrap(), 1.0, max_relative = 1e-12);
        let x3 = newton_plus_bisection(|x| (f(x), f_(x)), Interval::new(4.0, 10.0), 1e-14, 100);
        assert_relative_eq!(x3.unwrap(), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_exact_root_at_midpoint() {
        // The first guess is the midpoint, which is already a root
        let root = newton_plus_bisection(|x| (x, 1.0), Interval::new(-1.0, 1.0), 0.0, 1).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_runs_out_of_iterations() {
        // The first guess, 0, is nowhere near the root at 0.3
        let result = newton_plus_bisection(
            |x| (x.exp() - 0.3f64.exp(), x.exp()),
            Interval::new(-1.0, 1.0),
            1e-14,
            1,
        );
        assert!(matches!(
            result,
            Err(RootFindingError::MaxIterations { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_trig() {
        // There's a unique fixed point cos(x) = x
        let root = newton_plus_bisection(
            |x| (x.cos() - x, -x.sin() - 1.0),
            Interval::new(-1.0, 1.0),
            1e-14,
            100,
        )
        .unwrap();
        assert_relative_eq!(root, 0.73908513321516064, max_relative = 1e-12);
    }
}
