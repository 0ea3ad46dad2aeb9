//! Reactive-style numeric container

/// A single animated number.
///
/// Writes of non-finite values are dropped so a bad pointer sample can
/// never poison the derived springs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionValue {
    value: f64,
}

impl MotionValue {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Current raw value
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Store a new value. Returns `false` when the value was rejected.
    pub fn set(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            tracing::trace!(value, "Ignoring non-finite motion value");
            return false;
        }
        self.value = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut mv = MotionValue::default();
        assert!(mv.set(12.5));
        assert_eq!(mv.get(), 12.5);
    }

    #[test]
    fn rejects_non_finite() {
        let mut mv = MotionValue::new(1.0);
        assert!(!mv.set(f64::NAN));
        assert!(!mv.set(f64::INFINITY));
        assert_eq!(mv.get(), 1.0);
    }
}
