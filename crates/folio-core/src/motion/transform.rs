//! Range mapping between motion values

/// Linear interpolation from an input range onto an output range.
///
/// Inputs outside the range are clamped, so the output never leaves
/// `[output.0, output.1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl LinearMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Map a value from the input range to the output range.
    pub fn apply(&self, value: f64) -> f64 {
        let (in_lo, in_hi) = self.input;
        let (out_lo, out_hi) = self.output;

        let span = in_hi - in_lo;
        if span == 0.0 || !value.is_finite() {
            return out_lo;
        }

        let t = ((value - in_lo) / span).clamp(0.0, 1.0);
        out_lo + t * (out_hi - out_lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATE: LinearMap = LinearMap::new((-100.0, 100.0), (-45.0, 45.0));

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn maps_endpoints_and_center() {
        assert_eq!(ROTATE.apply(-100.0), -45.0);
        assert_eq!(ROTATE.apply(0.0), 0.0);
        assert_eq!(ROTATE.apply(100.0), 45.0);
        assert_eq!(ROTATE.apply(50.0), 22.5);
    }

    #[test]
    fn interior_points_are_within_rounding() {
        assert_close(ROTATE.apply(40.0), 18.0);
        assert_close(ROTATE.apply(-16.0), -7.2);
        assert_close(ROTATE.apply(73.0), 32.85);
    }

    #[test]
    fn clamps_outside_input() {
        assert_eq!(ROTATE.apply(-1000.0), -45.0);
        assert_eq!(ROTATE.apply(400.0), 45.0);
    }

    #[test]
    fn degenerate_input_range_yields_lower_output() {
        let map = LinearMap::new((5.0, 5.0), (1.0, 2.0));
        assert_eq!(map.apply(5.0), 1.0);
    }

    #[test]
    fn nan_yields_lower_output() {
        assert_eq!(ROTATE.apply(f64::NAN), -45.0);
    }
}
