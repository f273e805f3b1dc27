//! Scroll-linked stylers: progress bar, navbar state, timeline scrub,
//! and stat counters. All pure functions of scroll geometry plus two
//! small pieces of animation state (counters, scrub), so everything here
//! tests without a live page.

use crate::ease;

/// Fraction of the scrollable range covered by `scroll_top`, in
/// `[0, 1]`. Content that fits the viewport has no scrollable range and
/// reports 0.
pub fn progress_fraction(scroll_top: f32, content_height: f32, viewport_height: f32) -> f32 {
    let track = content_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_top / track).clamp(0.0, 1.0)
}

/// Whether the navbar should be in its scrolled (compact) state.
pub fn navbar_scrolled(scroll_top: f32, threshold: f32) -> bool {
    scroll_top > threshold
}

/// Scrub progress of a section moving through the viewport.
///
/// 0 while the section's top is below the 70%-height line, 1 once its
/// bottom has risen past the 50%-height line, linear in between.
/// `rect_top` is the section's top edge in viewport coordinates
/// (0 = viewport top).
pub fn scrub_fraction(rect_top: f32, rect_height: f32, viewport_height: f32) -> f32 {
    let start = 0.7 * viewport_height;
    let end = 0.5 * viewport_height - rect_height;
    let span = start - end;
    if span <= 0.0 {
        return if rect_top <= end { 1.0 } else { 0.0 };
    }
    ((start - rect_top) / span).clamp(0.0, 1.0)
}

/// Timeline progress line and dot activation derived from a scrub
/// fraction.
#[derive(Clone, Copy, Debug)]
pub struct TimelineScrub {
    dots: usize,
    /// How far ahead of its threshold a dot lights up.
    lead: f32,
}

impl TimelineScrub {
    pub fn new(dots: usize, lead: f32) -> Self {
        Self { dots, lead }
    }

    pub fn dots(&self) -> usize {
        self.dots
    }

    /// Height fraction of the progress line for the given scrub.
    pub fn line_fraction(&self, progress: f32) -> f32 {
        progress.clamp(0.0, 1.0)
    }

    /// Whether dot `index` (0-based) is lit at the given scrub. Dot `i`
    /// of `n` activates at `(i + 1) / n` minus the lead.
    pub fn dot_active(&self, index: usize, progress: f32) -> bool {
        if self.dots == 0 {
            return false;
        }
        let threshold = (index + 1) as f32 / self.dots as f32;
        progress >= threshold - self.lead
    }

    /// Scale of a dot: active dots pop to 1.3.
    pub fn dot_scale(&self, index: usize, progress: f32) -> f32 {
        if self.dot_active(index, progress) { 1.3 } else { 1.0 }
    }
}

/// A stat counter that eases from 0 to its target once armed.
///
/// Arming happens the first time the counter scrolls into view; further
/// calls to [`Counter::start`] are ignored so re-entering the viewport
/// never replays the animation.
#[derive(Clone, Copy, Debug)]
pub struct Counter {
    target: u32,
    duration: f64,
    elapsed: f64,
    armed: bool,
}

impl Counter {
    pub fn new(target: u32, duration: f64) -> Self {
        Self {
            target,
            duration,
            elapsed: 0.0,
            armed: false,
        }
    }

    /// Arms the counter. Idempotent.
    pub fn start(&mut self) {
        self.armed = true;
    }

    /// Jumps straight to the target. Used for reduced-motion mode.
    pub fn settle(&mut self) {
        self.armed = true;
        self.elapsed = self.duration;
    }

    pub fn tick(&mut self, dt: f64) {
        if self.armed {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    pub fn done(&self) -> bool {
        self.armed && self.elapsed >= self.duration
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Current displayed value, snapped to a whole number.
    pub fn value(&self) -> u32 {
        if !self.armed {
            return 0;
        }
        if self.duration <= 0.0 {
            return self.target;
        }
        let t = (self.elapsed / self.duration) as f32;
        (self.target as f32 * ease::power2_out(t)).round() as u32
    }
}
