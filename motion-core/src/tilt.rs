use glam::Vec2;

/// Target card rotation for a pointer position inside a card rect.
///
/// Returns `(rot_x, rot_y)` in degrees. The pointer offset from the
/// card center is normalized to `[-0.5, 0.5]` per axis (clamped, so a
/// pointer outside the rect saturates at the edge) and scaled to at most
/// `max_deg / 2` each way. A pointer above center tips the card away
/// (negative `rot_x`); a pointer right of center turns it right
/// (positive `rot_y`). A degenerate rect yields no rotation.
pub fn tilt_target(pointer: Vec2, rect_min: Vec2, rect_size: Vec2, max_deg: f32) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }

    let x_pct = ((pointer.x - rect_min.x) / rect_size.x - 0.5).clamp(-0.5, 0.5);
    let y_pct = ((pointer.y - rect_min.y) / rect_size.y - 0.5).clamp(-0.5, 0.5);

    Vec2::new(y_pct * -max_deg, x_pct * max_deg)
}

/// Eased 3-D tilt state of one card.
///
/// The rotation chases its target with the same exponential-approach
/// idiom as the cursor trail; releasing the card settles it back to
/// flat.
#[derive(Clone, Copy, Debug)]
pub struct CardTilt {
    target: Vec2,
    current: Vec2,
    smoothing: f32,
}

impl CardTilt {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            smoothing,
        }
    }

    /// Points the card toward the pointer.
    pub fn point_at(&mut self, pointer: Vec2, rect_min: Vec2, rect_size: Vec2, max_deg: f32) {
        self.target = tilt_target(pointer, rect_min, rect_size, max_deg);
    }

    /// Pointer left the card; ease back to flat.
    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    pub fn tick(&mut self) {
        self.current += (self.target - self.current) * self.smoothing;
    }

    /// Current `(rot_x, rot_y)` rotation in degrees.
    pub fn rotation(&self) -> Vec2 {
        self.current
    }
}
