use glam::Vec2;
use rand::Rng;

/// Maximum drift speed per axis, in pixels per frame.
pub const MAX_DRIFT: f32 = 0.25;
/// Particle radius bounds, in pixels.
pub const MIN_RADIUS: f32 = 0.5;
pub const MAX_RADIUS: f32 = 2.5;
/// Particle opacity bounds.
pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 0.6;

/// One floating dot of the background animation.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Samples a particle uniformly inside a `width` × `height` viewport.
    ///
    /// Position is uniform over the viewport, velocity components over
    /// `[-MAX_DRIFT, MAX_DRIFT]`, radius and opacity over their bounds.
    /// Inclusive ranges keep a zero-sized viewport degenerate but valid.
    pub fn random_in_viewport(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..=width),
                rng.random_range(0.0..=height),
            ),
            vel: Vec2::new(
                rng.random_range(-MAX_DRIFT..=MAX_DRIFT),
                rng.random_range(-MAX_DRIFT..=MAX_DRIFT),
            ),
            radius: rng.random_range(MIN_RADIUS..=MAX_RADIUS),
            opacity: rng.random_range(MIN_OPACITY..=MAX_OPACITY),
        }
    }
}

/// A bounded field of drifting particles.
///
/// The field owns the viewport dimensions and a collection of exactly
/// `count` particles between calls to [`ParticleField::generate`].
/// Resizing regenerates the whole collection; survivors are never
/// repositioned individually.
#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// An empty field with the given viewport. Call
    /// [`ParticleField::generate`] to populate it.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            particles: Vec::new(),
            width,
            height,
        }
    }

    /// A field over explicit particles, mainly for tests and fixtures.
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Updates the viewport dimensions.
    ///
    /// Callers are expected to follow up with [`ParticleField::generate`];
    /// existing particles keep their positions until then.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Replaces the entire collection with `count` freshly sampled
    /// particles inside the current viewport.
    ///
    /// Always yields exactly `count` particles; no identity is preserved
    /// across calls.
    pub fn generate(&mut self, count: usize, rng: &mut impl Rng) {
        self.particles = (0..count)
            .map(|_| Particle::random_in_viewport(self.width, self.height, rng))
            .collect();
    }

    /// Advances every particle by one frame.
    ///
    /// Euler integration with a unit timestep, then elastic reflection:
    /// a coordinate outside `[0, extent]` flips that axis's velocity
    /// sign. Position is never clamped, so a particle may overshoot the
    /// boundary for one frame before drifting back in. Motion is fully
    /// deterministic after generation.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;

            if p.pos.x < 0.0 || p.pos.x > self.width {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.height {
                p.vel.y = -p.vel.y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn still_particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 1.0,
            opacity: 0.3,
        }
    }

    #[test]
    fn generate_yields_exact_counts() {
        let mut field = ParticleField::new(800.0, 600.0);
        let mut rng = rng();

        for count in [0, 1, 60, 1000] {
            field.generate(count, &mut rng);
            assert_eq!(field.particles.len(), count);
        }
    }

    #[test]
    fn generated_particles_respect_bounds() {
        let mut field = ParticleField::new(800.0, 600.0);
        let mut rng = rng();
        field.generate(1000, &mut rng);

        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
            assert!(p.vel.x >= -MAX_DRIFT && p.vel.x <= MAX_DRIFT);
            assert!(p.vel.y >= -MAX_DRIFT && p.vel.y <= MAX_DRIFT);
            assert!(p.radius >= MIN_RADIUS && p.radius <= MAX_RADIUS);
            assert!(p.opacity >= MIN_OPACITY && p.opacity <= MAX_OPACITY);
        }
    }

    #[test]
    fn zero_sized_viewport_degenerates_without_panicking() {
        let mut field = ParticleField::new(0.0, 0.0);
        let mut rng = rng();
        field.generate(60, &mut rng);

        assert_eq!(field.particles.len(), 60);
        for p in &field.particles {
            assert_eq!(p.pos, Vec2::ZERO);
        }
    }

    #[test]
    fn step_integrates_position_by_velocity() {
        let mut field = ParticleField::from_particles(
            vec![still_particle(100.0, 100.0, 0.2, -0.1)],
            800.0,
            600.0,
        );

        field.step();

        let p = &field.particles[0];
        assert_eq!(p.pos, Vec2::new(100.2, 99.9));
        assert_eq!(p.vel, Vec2::new(0.2, -0.1));
    }

    #[test]
    fn step_without_boundary_crossing_keeps_velocity() {
        // x = 799, vx = +0.5, W = 800 -> lands on 799.5, still inside.
        let mut field =
            ParticleField::from_particles(vec![still_particle(799.0, 300.0, 0.5, 0.0)], 800.0, 600.0);

        field.step();

        let p = &field.particles[0];
        assert_eq!(p.pos.x, 799.5);
        assert_eq!(p.vel.x, 0.5);
    }

    #[test]
    fn step_past_right_boundary_flips_x_velocity_only() {
        // Already overshot: 800.2 + 0.5 = 800.7 > W, so vx flips. The
        // position is deliberately left outside for this frame.
        let mut field =
            ParticleField::from_particles(vec![still_particle(800.2, 300.0, 0.5, 0.1)], 800.0, 600.0);

        field.step();

        let p = &field.particles[0];
        assert_eq!(p.pos.x, 800.7);
        assert_eq!(p.vel.x, -0.5);
        assert_eq!(p.vel.y, 0.1);
    }

    #[test]
    fn step_past_left_and_top_boundaries_flips_each_axis_independently() {
        let mut field = ParticleField::from_particles(
            vec![still_particle(0.1, 0.1, -0.2, -0.2)],
            800.0,
            600.0,
        );

        field.step();

        let p = &field.particles[0];
        assert_eq!(p.vel, Vec2::new(0.2, 0.2));
    }

    #[test]
    fn motion_is_deterministic_after_generation() {
        let mut rng = rng();
        let mut a = ParticleField::new(400.0, 300.0);
        a.generate(10, &mut rng);

        let mut b = ParticleField::from_particles(a.particles.clone(), 400.0, 300.0);

        for _ in 0..500 {
            a.step();
            b.step();
        }

        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }

    #[test]
    fn resize_then_generate_replaces_the_whole_collection() {
        let mut rng = rng();
        let mut field = ParticleField::new(800.0, 600.0);
        field.generate(60, &mut rng);

        field.resize(400.0, 300.0);
        field.generate(60, &mut rng);

        assert_eq!(field.particles.len(), 60);
        assert_eq!(field.width(), 400.0);
        assert_eq!(field.height(), 300.0);
        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 300.0);
        }
    }
}
