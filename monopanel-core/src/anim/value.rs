//! Scalar value easing toward a target

use libm::fabsf;

/// Distance at which a value snaps onto its target (pixel units)
pub const DEFAULT_EPSILON: f32 = 0.5;

/// How a value approaches its target
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationCurve {
    /// Constant speed
    Linear {
        /// Distance covered per second
        units_per_second: f32,
    },
    /// Fast start, slowing as the target approaches
    EaseOut {
        /// Fraction of the remaining distance covered per second;
        /// a single step never overshoots
        rate: f32,
    },
}

impl AnimationCurve {
    /// Check the curve can make progress
    pub fn is_valid(&self) -> bool {
        match *self {
            AnimationCurve::Linear { units_per_second } => {
                units_per_second.is_finite() && units_per_second > 0.0
            }
            AnimationCurve::EaseOut { rate } => rate.is_finite() && rate > 0.0,
        }
    }
}

impl Default for AnimationCurve {
    fn default() -> Self {
        AnimationCurve::EaseOut { rate: 12.0 }
    }
}

/// A scalar that moves toward a target each time it is advanced
///
/// `value()` is always defined; a freshly created value simply sits at its
/// initial position until a different target is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
    curve: AnimationCurve,
    epsilon: f32,
}

impl AnimatedValue {
    /// Create a settled value at `initial`
    pub fn new(initial: f32, curve: AnimationCurve) -> Self {
        Self {
            current: initial,
            target: initial,
            curve,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Override the snap distance
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = if epsilon.is_finite() && epsilon >= 0.0 {
            epsilon
        } else {
            DEFAULT_EPSILON
        };
        self
    }

    /// Start moving toward `target` from wherever the value is now
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Place the value at `value` with no animation
    pub fn jump_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Current position
    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn curve(&self) -> AnimationCurve {
        self.curve
    }

    /// True once the value has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Move toward the target by `dt` seconds
    ///
    /// Returns true if the value changed. Negative or non-finite `dt` counts
    /// as zero.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            return false;
        }

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let before = self.current;
        let remaining = self.target - self.current;

        if fabsf(remaining) > self.epsilon {
            self.current = match self.curve {
                AnimationCurve::Linear { units_per_second } => {
                    let step = units_per_second * dt;
                    if step >= fabsf(remaining) {
                        self.target
                    } else if remaining > 0.0 {
                        self.current + step
                    } else {
                        self.current - step
                    }
                }
                AnimationCurve::EaseOut { rate } => {
                    let fraction = (rate * dt).clamp(0.0, 1.0);
                    self.current + remaining * fraction
                }
            };
        }

        if fabsf(self.target - self.current) <= self.epsilon {
            self.current = self.target;
        }

        self.current != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINEAR: AnimationCurve = AnimationCurve::Linear {
        units_per_second: 100.0,
    };

    #[test]
    fn test_new_is_settled() {
        let value = AnimatedValue::new(64.0, LINEAR);
        assert_eq!(value.value(), 64.0);
        assert!(value.is_settled());
    }

    #[test]
    fn test_linear_steps() {
        let mut value = AnimatedValue::new(0.0, LINEAR);
        value.set_target(10.0);

        assert!(value.advance(0.05));
        assert_eq!(value.value(), 5.0);

        // Within epsilon after the next step, so it snaps
        assert!(value.advance(0.05));
        assert_eq!(value.value(), 10.0);
        assert!(value.is_settled());
        assert!(!value.advance(0.05));
    }

    #[test]
    fn test_linear_downward_no_overshoot() {
        let mut value = AnimatedValue::new(64.0, LINEAR);
        value.set_target(0.0);
        value.advance(1.0);
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn test_snaps_when_approaching_from_above() {
        let mut value = AnimatedValue::new(10.0, LINEAR);
        value.set_target(0.0);
        // 10 - 9.7 leaves 0.3 below epsilon
        assert!(value.advance(0.097));
        assert_eq!(value.value(), 0.0);
        assert!(value.is_settled());
    }

    #[test]
    fn test_ease_out_slows_down() {
        let mut value = AnimatedValue::new(0.0, AnimationCurve::EaseOut { rate: 5.0 });
        value.set_target(100.0);

        value.advance(0.1);
        let first = value.value();
        value.advance(0.1);
        let second = value.value() - first;

        assert_eq!(first, 50.0);
        assert!(second < first);
    }

    #[test]
    fn test_ease_out_large_dt_lands_on_target() {
        let mut value = AnimatedValue::new(0.0, AnimationCurve::EaseOut { rate: 5.0 });
        value.set_target(48.0);
        value.advance(10.0);
        assert_eq!(value.value(), 48.0);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut value = AnimatedValue::new(0.0, LINEAR);
        value.set_target(50.0);
        value.advance(0.2);
        assert_eq!(value.value(), 20.0);

        value.set_target(0.0);
        value.advance(0.1);
        assert_eq!(value.value(), 10.0);
    }

    #[test]
    fn test_bad_dt_is_zero() {
        let mut value = AnimatedValue::new(0.0, LINEAR);
        value.set_target(10.0);
        assert!(!value.advance(-1.0));
        assert!(!value.advance(f32::NAN));
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn test_jump_to() {
        let mut value = AnimatedValue::new(0.0, LINEAR);
        value.set_target(10.0);
        value.jump_to(3.0);
        assert_eq!(value.value(), 3.0);
        assert_eq!(value.target(), 3.0);
        assert!(value.is_settled());
    }

    #[test]
    fn test_epsilon_override() {
        let mut value = AnimatedValue::new(0.0, LINEAR).with_epsilon(5.0);
        value.set_target(4.0);
        assert!(value.advance(0.0));
        assert_eq!(value.value(), 4.0);

        let value = AnimatedValue::new(0.0, LINEAR).with_epsilon(-1.0);
        assert_eq!(value, AnimatedValue::new(0.0, LINEAR));
    }

    #[test]
    fn test_curve_validity() {
        assert!(LINEAR.is_valid());
        assert!(AnimationCurve::default().is_valid());
        assert!(!AnimationCurve::Linear {
            units_per_second: 0.0
        }
        .is_valid());
        assert!(!AnimationCurve::EaseOut { rate: f32::INFINITY }.is_valid());
    }
}
