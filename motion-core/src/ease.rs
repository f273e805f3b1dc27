//! Easing curves used by the scroll-linked effects.
//!
//! Both map a clamped progress `t` in `[0, 1]` to `[0, 1]` with
//! `f(0) = 0` and `f(1) = 1`, decelerating toward the end.

/// Quadratic ease-out. Drives the stat counters.
pub fn power2_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-out. Drives the reveal fade of scrolled-in content.
pub fn power3_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(power2_out(0.0), 0.0);
        assert_eq!(power2_out(1.0), 1.0);
        assert_eq!(power3_out(0.0), 0.0);
        assert_eq!(power3_out(1.0), 1.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(power2_out(-0.5), 0.0);
        assert_eq!(power2_out(1.5), 1.0);
        assert_eq!(power3_out(2.0), 1.0);
    }

    #[test]
    fn curves_decelerate() {
        // Ease-out covers more than half the range in the first half.
        assert!(power2_out(0.5) > 0.5);
        assert!(power3_out(0.5) > power2_out(0.5));
    }

    #[test]
    fn curves_are_monotone() {
        for curve in [power2_out, power3_out] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = curve(i as f32 / 100.0);
                assert!(v >= prev);
                prev = v;
            }
        }
    }
}
