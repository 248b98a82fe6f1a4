//! Exponential approach toward a target value.
//!
//! Doors and the camera never snap to a pose; every animated scalar moves
//! a fixed fraction of its remaining distance each frame. This is the
//! critically-damped feel used throughout the manor: fast start, soft
//! settle, no overshoot.

/// Move `current` one step toward `target` by `factor` of the remaining gap.
///
/// `factor` is expected in `(0, 1]`; the result never crosses `target`.
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// True once `current` is within `epsilon` of `target`.
pub fn settled(current: f32, target: f32, epsilon: f32) -> bool {
    (target - current).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_moves_fractionally() {
        let next = approach(0.0, 10.0, 0.1);
        assert!((next - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_approach_never_overshoots() {
        let mut v = 0.0;
        for _ in 0..500 {
            v = approach(v, 1.0, 0.08);
            assert!(v <= 1.0);
        }
    }

    #[test]
    fn test_converges_within_bounded_steps() {
        let mut v = 0.0;
        let mut steps = 0;
        while !settled(v, 1.0, 0.001) {
            v = approach(v, 1.0, 0.1);
            steps += 1;
            assert!(steps < 200, "did not settle in a bounded step count");
        }
        // ln(0.001) / ln(0.9) ~= 66 steps
        assert!(steps <= 70);
    }

    #[test]
    fn test_settled_is_symmetric() {
        assert!(settled(1.0005, 1.0, 0.001));
        assert!(settled(0.9995, 1.0, 0.001));
        assert!(!settled(0.99, 1.0, 0.001));
    }
}
