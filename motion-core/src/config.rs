use crate::types::Rgba;

/// Global configuration for the motion system.
///
/// Defaults reproduce the reference look: 60 gold particles linked within
/// 120 px, a cursor outline that lags 15% per frame, and scroll-linked
/// styling thresholds. Every field is live-tunable from the viewer panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Number of particles regenerated into the field.
    pub particle_count: usize,
    /// Maximum distance at which two particles are visually linked.
    pub connection_distance: f32,
    /// Shared accent hue for particles, connections, and the cursor.
    pub accent: Rgba,
    /// Stroke width of connection lines.
    pub line_width: f32,
    /// Per-frame exponential smoothing factor for the cursor outline.
    pub cursor_smoothing: f32,
    /// Scroll offset past which the navbar switches to its scrolled state.
    pub navbar_threshold: f32,
    /// Duration of the stat counter ease, in seconds.
    pub counter_duration: f64,
    /// How far ahead of its own threshold a timeline dot lights up.
    pub timeline_lead: f32,
    /// Maximum card tilt per axis, in degrees.
    pub tilt_max_deg: f32,
    /// Per-frame smoothing factor easing card rotation toward its target.
    pub tilt_smoothing: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            particle_count: 60,
            connection_distance: 120.0,
            accent: Rgba::from_rgb8(232, 184, 75),
            line_width: 0.5,
            cursor_smoothing: 0.15,
            navbar_threshold: 50.0,
            counter_duration: 1.8,
            timeline_lead: 0.15,
            tilt_max_deg: 10.0,
            tilt_smoothing: 0.2,
        }
    }
}
