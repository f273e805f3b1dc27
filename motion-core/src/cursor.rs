use glam::Vec2;

/// Trailing cursor state: a dot pinned to the raw pointer and an
/// outline that chases it with per-frame exponential smoothing.
///
/// Each tick moves the outline a fixed fraction of the remaining gap,
/// so it converges geometrically and never overshoots.
#[derive(Clone, Copy, Debug)]
pub struct PointerFollower {
    target: Vec2,
    trail: Vec2,
    smoothing: f32,
}

impl PointerFollower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            trail: Vec2::ZERO,
            smoothing,
        }
    }

    /// Updates the raw pointer position. The dot jumps; the trail keeps
    /// chasing from wherever it was.
    pub fn set_target(&mut self, pos: Vec2) {
        self.target = pos;
    }

    /// Moves both dot and trail instantly, for the pointer's first
    /// appearance.
    pub fn warp(&mut self, pos: Vec2) {
        self.target = pos;
        self.trail = pos;
    }

    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing;
    }

    /// Advances the trail one frame toward the target.
    pub fn tick(&mut self) {
        self.trail += (self.target - self.trail) * self.smoothing;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn trail(&self) -> Vec2 {
        self.trail
    }
}

/// Visual parameters of the custom cursor for the current hover state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    /// Scale applied to the central dot.
    pub dot_scale: f32,
    /// Diameter of the trailing outline circle, in pixels.
    pub outline_diameter: f32,
    /// Alpha of the outline stroke.
    pub outline_alpha: f32,
}

impl CursorStyle {
    /// Style for the given hover state: hovering an interactive element
    /// doubles the dot and widens and brightens the outline.
    pub fn for_hover(interactive: bool) -> Self {
        if interactive {
            Self {
                dot_scale: 2.0,
                outline_diameter: 60.0,
                outline_alpha: 0.7,
            }
        } else {
            Self {
                dot_scale: 1.0,
                outline_diameter: 40.0,
                outline_alpha: 0.4,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_moves_fifteen_percent_of_the_gap_per_tick() {
        let mut follower = PointerFollower::new(0.15);
        follower.set_target(Vec2::new(100.0, 0.0));

        follower.tick();
        assert!((follower.trail().x - 15.0).abs() < 1e-4);
        assert_eq!(follower.trail().y, 0.0);

        follower.tick();
        assert!((follower.trail().x - (15.0 + 85.0 * 0.15)).abs() < 1e-4);
    }

    #[test]
    fn trail_converges_to_a_fixed_target() {
        let mut follower = PointerFollower::new(0.15);
        follower.set_target(Vec2::new(320.0, 240.0));

        for _ in 0..200 {
            follower.tick();
        }

        let gap = (follower.target() - follower.trail()).length();
        assert!(gap < 1e-3, "trail still {gap} px away");
    }

    #[test]
    fn trail_never_overshoots() {
        let mut follower = PointerFollower::new(0.15);
        follower.set_target(Vec2::new(50.0, 0.0));

        let mut prev_gap = f32::MAX;
        for _ in 0..50 {
            follower.tick();
            let gap = follower.target().x - follower.trail().x;
            assert!(gap >= 0.0);
            assert!(gap <= prev_gap);
            prev_gap = gap;
        }
    }

    #[test]
    fn warp_snaps_both_points() {
        let mut follower = PointerFollower::new(0.15);
        follower.warp(Vec2::new(10.0, 20.0));

        assert_eq!(follower.target(), Vec2::new(10.0, 20.0));
        assert_eq!(follower.trail(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn hover_style_enlarges_dot_and_outline() {
        let idle = CursorStyle::for_hover(false);
        let hover = CursorStyle::for_hover(true);

        assert_eq!(idle.dot_scale, 1.0);
        assert_eq!(hover.dot_scale, 2.0);
        assert!(hover.outline_diameter > idle.outline_diameter);
        assert!(hover.outline_alpha > idle.outline_alpha);
    }
}
