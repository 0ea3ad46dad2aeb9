//! Damped spring filter
//!
//! Semi-implicit Euler integration of `m·x'' = -k·(x - target) - c·x'`,
//! sub-stepped so large frame gaps stay stable.

/// Largest integration step; frames longer than this are split.
pub const MAX_SUBSTEP_SECS: f64 = 0.004;

/// Upper bound on sub-steps per frame. Longer gaps snap to the target.
pub const MAX_SUBSTEPS: usize = 1000;

/// Spring that smooths the tooltip's tilt and sideways drift.
pub const TILT_SPRING: SpringConfig = SpringConfig::new(100.0, 5.0);

/// Spring that drives the tooltip's entrance (fade, scale, slide).
pub const TOOLTIP_SPRING: SpringConfig = SpringConfig::new(260.0, 10.0);

/// Physical parameters of a spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Position tolerance for settling
    pub rest_delta: f64,
    /// Velocity tolerance for settling
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Unit mass spring with default rest tolerances.
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

/// A one-dimensional spring chasing a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Spring resting at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Current smoothed value
    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget the spring. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Teleport to `value` and stop.
    pub fn jump(&mut self, value: f64) {
        if value.is_finite() {
            self.position = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() < self.config.rest_speed
            && (self.position - self.target).abs() < self.config.rest_delta
    }

    /// Advance by `dt` seconds. Returns whether the spring is at rest.
    pub fn step(&mut self, dt: f64) -> bool {
        if !dt.is_finite() || dt <= 0.0 || self.is_at_rest() {
            return self.settle();
        }

        let mass = self.config.mass.max(1.0e-4);
        let stiffness = self.config.stiffness.max(0.0);
        let damping = self.config.damping.max(0.0);

        let substeps = (dt / MAX_SUBSTEP_SECS).ceil().max(1.0);
        if substeps > MAX_SUBSTEPS as f64 {
            self.jump(self.target);
            return true;
        }
        let substeps = substeps as usize;
        let h = dt / substeps as f64;

        for _ in 0..substeps {
            let displacement = self.position - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }

        self.settle()
    }

    fn settle(&mut self) -> bool {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_until_rest(spring: &mut Spring, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if spring.step(FRAME) {
                return frame;
            }
        }
        max_frames
    }

    #[test]
    fn new_spring_is_at_rest() {
        let spring = Spring::new(TILT_SPRING, 0.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(TILT_SPRING, 0.0);
        spring.set_target(45.0);
        let frames = run_until_rest(&mut spring, 60 * 30);
        assert!(frames < 60 * 30, "spring never settled");
        assert_eq!(spring.value(), 45.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn tilt_spring_overshoots() {
        // c = 5 is well below critical damping (2·√100 = 20).
        let mut spring = Spring::new(TILT_SPRING, 0.0);
        spring.set_target(10.0);
        let mut peak = 0.0_f64;
        for _ in 0..120 {
            spring.step(FRAME);
            peak = peak.max(spring.value());
        }
        assert!(peak > 10.0);
    }

    #[test]
    fn large_dt_is_stable() {
        let mut spring = Spring::new(TOOLTIP_SPRING, 0.0);
        spring.set_target(1.0);
        spring.step(2.0);
        assert!(spring.value().is_finite());
        assert!((spring.value() - 1.0).abs() < 0.5);
    }

    #[test]
    fn huge_dt_snaps_to_target() {
        let mut spring = Spring::new(TILT_SPRING, 0.0);
        spring.set_target(30.0);
        spring.step(FRAME);

        assert!(spring.step(1.0e12));
        assert_eq!(spring.value(), 30.0);
        assert_eq!(spring.velocity(), 0.0);

        spring.set_target(-5.0);
        assert!(spring.step(f64::MAX));
        assert_eq!(spring.value(), -5.0);
    }

    #[test]
    fn gap_at_substep_limit_still_integrates() {
        let mut spring = Spring::new(TOOLTIP_SPRING, 0.0);
        spring.set_target(1.0);
        spring.step(MAX_SUBSTEP_SECS * MAX_SUBSTEPS as f64);
        assert!(spring.value().is_finite());
        assert!((spring.value() - 1.0).abs() < 0.1);
    }

    #[test]
    fn ignores_bad_input() {
        let mut spring = Spring::new(TILT_SPRING, 3.0);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 3.0);
        assert!(spring.step(f64::INFINITY));
        assert!(spring.step(-1.0));
        assert_eq!(spring.value(), 3.0);
    }

    #[test]
    fn jump_stops_motion() {
        let mut spring = Spring::new(TILT_SPRING, 0.0);
        spring.set_target(40.0);
        spring.step(FRAME);
        spring.jump(7.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 7.0);
        assert_eq!(spring.target(), 7.0);
    }
}
