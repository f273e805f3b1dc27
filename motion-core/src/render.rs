//! Render pass for the particle field.
//!
//! Drawing goes through the [`Surface`] trait so the pass stays a pure
//! function of field state: the viewer adapts an `egui::Painter`, tests
//! substitute a [`RecordingSurface`]. One frame is:
//! 1. clear the surface;
//! 2. link every particle pair closer than the connection distance with
//!    a line whose alpha falls off linearly with distance;
//! 3. draw each particle as a filled dot at its own opacity.

use glam::Vec2;

use crate::{config::MotionConfig, field::ParticleField, types::Rgba};

/// Connection alpha at zero distance; falls off linearly to 0 at the
/// connection distance.
pub const PEAK_CONNECTION_ALPHA: f32 = 0.15;

/// Minimal 2-D drawing surface.
pub trait Surface {
    fn clear(&mut self);
    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba);
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Alpha of the link between two particles `dist` apart.
///
/// Exactly [`PEAK_CONNECTION_ALPHA`] at distance 0, exactly 0 at
/// `dist >= max_dist`, monotonically decreasing in between.
pub fn connection_alpha(dist: f32, max_dist: f32) -> f32 {
    if dist >= max_dist {
        return 0.0;
    }
    (1.0 - dist / max_dist) * PEAK_CONNECTION_ALPHA
}

/// Draws one frame of the field onto `surface`.
///
/// The pair pass is O(N²) by design; the particle count is small and
/// bounded, and must not scale with page content.
pub fn render(field: &ParticleField, cfg: &MotionConfig, surface: &mut impl Surface) {
    surface.clear();

    let particles = &field.particles;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let dist = particles[i].pos.distance(particles[j].pos);
            if dist < cfg.connection_distance {
                let alpha = connection_alpha(dist, cfg.connection_distance);
                surface.line(
                    particles[i].pos,
                    particles[j].pos,
                    cfg.line_width,
                    cfg.accent.with_alpha(alpha),
                );
            }
        }
    }

    for p in particles {
        surface.circle(p.pos, p.radius, cfg.accent.with_alpha(p.opacity));
    }
}

/// A surface that records draw calls instead of rasterizing them.
///
/// Lets the render pass run headless; tests assert on the recorded
/// command stream.
#[derive(Debug, Default, PartialEq)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        a: Vec2,
        b: Vec2,
        width: f32,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { a, b, width, color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Particle;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 1.5,
            opacity: 0.4,
        }
    }

    #[test]
    fn connection_alpha_endpoints_are_exact() {
        assert_eq!(connection_alpha(0.0, 120.0), 0.15);
        assert_eq!(connection_alpha(120.0, 120.0), 0.0);
        assert_eq!(connection_alpha(500.0, 120.0), 0.0);
    }

    #[test]
    fn connection_alpha_is_monotonically_decreasing() {
        let mut prev = connection_alpha(0.0, 120.0);
        for i in 1..=120 {
            let alpha = connection_alpha(i as f32, 120.0);
            assert!(alpha <= prev, "alpha increased at distance {i}");
            prev = alpha;
        }
    }

    #[test]
    fn connection_alpha_at_distance_50_matches_reference() {
        // (1 - 50/120) * 0.15 ≈ 0.0875
        let alpha = connection_alpha(50.0, 120.0);
        assert!((alpha - 0.0875).abs() < 1e-6);
    }

    #[test]
    fn render_links_close_pair_and_draws_both_dots() {
        let field = ParticleField::from_particles(
            vec![particle_at(100.0, 100.0), particle_at(150.0, 100.0)],
            800.0,
            600.0,
        );
        let cfg = MotionConfig::default();
        let mut surface = RecordingSurface::default();

        render(&field, &cfg, &mut surface);

        assert_eq!(surface.commands[0], DrawCommand::Clear);

        let lines: Vec<_> = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .collect();
        assert_eq!(lines.len(), 1);
        if let DrawCommand::Line { color, .. } = lines[0] {
            // Distance 50 -> (1 - 50/120) * 0.15.
            assert!((color.a - 0.0875).abs() < 1e-6);
        }

        let circles = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 2);
    }

    #[test]
    fn render_skips_pairs_beyond_connection_distance() {
        let field = ParticleField::from_particles(
            vec![particle_at(0.0, 0.0), particle_at(300.0, 0.0)],
            800.0,
            600.0,
        );
        let cfg = MotionConfig::default();
        let mut surface = RecordingSurface::default();

        render(&field, &cfg, &mut surface);

        assert!(
            !surface
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Line { .. }))
        );
    }

    #[test]
    fn render_is_a_pure_function_of_field_state() {
        let field = ParticleField::from_particles(
            vec![
                particle_at(10.0, 10.0),
                particle_at(60.0, 10.0),
                particle_at(400.0, 400.0),
            ],
            800.0,
            600.0,
        );
        let cfg = MotionConfig::default();

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        render(&field, &cfg, &mut first);
        render(&field, &cfg, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn dot_color_carries_particle_opacity() {
        let mut p = particle_at(5.0, 5.0);
        p.opacity = 0.55;
        let field = ParticleField::from_particles(vec![p], 800.0, 600.0);
        let cfg = MotionConfig::default();
        let mut surface = RecordingSurface::default();

        render(&field, &cfg, &mut surface);

        let Some(DrawCommand::Circle { color, radius, .. }) = surface
            .commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Circle { .. }))
        else {
            panic!("no circle recorded");
        };
        assert_eq!(color.a, 0.55);
        assert_eq!(*radius, 1.5);
        assert_eq!(color.r, cfg.accent.r);
    }
}
