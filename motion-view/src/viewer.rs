//! Interactive motion-system viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns every effect from
//! `motion-core` (particle field, pointer follower, typewriter, scroll
//! stylers, card tilt) and implements [`eframe::App`] to drive and
//! render them. The central panel is the particle canvas; a left "page"
//! panel is a scrollable mock page exercising the scroll-linked
//! stylers, and a right panel tunes the configuration live.

use eframe::App;
use glam::Vec2;
use motion_core::{
    config::MotionConfig,
    cursor::{CursorStyle, PointerFollower},
    ease,
    field::ParticleField,
    render::{self, Surface},
    scroll::{self, Counter, TimelineScrub},
    tilt::CardTilt,
    typewriter::{Timings, Typewriter},
    types::Rgba,
};

/// Words the hero headline cycles through.
const HERO_WORDS: [&str; 5] = [
    "Public Policy",
    "Health Economics",
    "Environmental Justice",
    "Mathematical Demography",
    "Climate Adaptation",
];

/// Timeline entries on the mock page, oldest first.
const TIMELINE_ENTRIES: [&str; 4] = [
    "B.Sc. Mathematics",
    "M.Sc. Statistics",
    "Ph.D. Demography",
    "Postdoctoral Fellow",
];

/// Stat counters on the mock page: label and target value.
const STATS: [(&str, u32); 3] = [
    ("publications", 42),
    ("courses taught", 18),
    ("years of research", 15),
];

/// Canvas background, the page's near-black navy.
const CANVAS_BG: egui::Color32 = egui::Color32::from_rgb(6, 6, 20);

/// Radius of the cursor dot before hover scaling.
const CURSOR_DOT_RADIUS: f32 = 4.0;

/// Pixels of corner shift per degree of card tilt.
const TILT_SHIFT_PER_DEG: f32 = 1.2;

/// Adapts an [`egui::Painter`] to the core render [`Surface`].
///
/// Field coordinates are viewport-local; drawing offsets them by the
/// canvas origin.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    size: egui::Vec2,
}

impl PainterSurface<'_> {
    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        let rect = egui::Rect::from_min_size(self.origin, self.size);
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, CANVAS_BG);
    }

    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(a), self.to_screen(b)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }
}

fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.a.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

/// Screen corners of a tilted card.
///
/// Cheap fake perspective: the Y rotation shears the top edge sideways,
/// the X rotation shears the left edge vertically, each corner moving
/// opposite its diagonal twin. Zero rotation returns the rect corners
/// unchanged.
fn tilt_quad(rect: egui::Rect, rotation: Vec2, shift_per_deg: f32) -> [egui::Pos2; 4] {
    let dx = rotation.y * shift_per_deg;
    let dy = rotation.x * shift_per_deg;
    [
        egui::pos2(rect.left() + dx, rect.top() + dy),
        egui::pos2(rect.right() + dx, rect.top() - dy),
        egui::pos2(rect.right() - dx, rect.bottom() - dy),
        egui::pos2(rect.left() - dx, rect.bottom() + dy),
    ]
}

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Tick every effect with the frame's wall-clock delta.
/// 2. Rebuild the panels; the page panel feeds scroll geometry back into
///    the scroll stylers, the canvas steps and renders the field.
/// 3. Request a repaint, keeping the loop self-perpetuating.
pub struct Viewer {
    field: ParticleField,
    follower: PointerFollower,
    typewriter: Typewriter,
    counters: Vec<(&'static str, Counter)>,
    timeline: TimelineScrub,
    card_tilt: CardTilt,
    cfg: MotionConfig,

    rng: rand::rngs::ThreadRng,

    running: bool,
    reduced_motion: bool,

    /// Last known canvas size; a change regenerates the field wholesale.
    canvas_size: egui::Vec2,
    /// Whether the pointer has appeared over the canvas yet.
    pointer_seen: bool,
    /// Whether the pointer is over an interactive element this frame.
    hovering_interactive: bool,

    scroll_offset: f32,
    scroll_fraction: f32,
    timeline_progress: f32,

    last_dt: f64,
}

impl Viewer {
    /// Creates a viewer with an empty field.
    ///
    /// The field populates on the first frame, once the canvas reports a
    /// non-degenerate size. Until then the particle effect is simply
    /// absent; a missing surface is a no-op, not an error.
    pub fn new() -> Self {
        let cfg = MotionConfig::default();
        let typewriter = Typewriter::new(
            HERO_WORDS.iter().map(|w| w.to_string()).collect(),
            Timings::default(),
        );
        let counters = STATS
            .iter()
            .map(|&(label, target)| (label, Counter::new(target, cfg.counter_duration)))
            .collect();

        Self {
            field: ParticleField::new(0.0, 0.0),
            follower: PointerFollower::new(cfg.cursor_smoothing),
            typewriter,
            counters,
            timeline: TimelineScrub::new(TIMELINE_ENTRIES.len(), cfg.timeline_lead),
            card_tilt: CardTilt::new(cfg.tilt_smoothing),
            cfg,
            rng: rand::rng(),
            running: true,
            reduced_motion: false,
            canvas_size: egui::Vec2::ZERO,
            pointer_seen: false,
            hovering_interactive: false,
            scroll_offset: 0.0,
            scroll_fraction: 0.0,
            timeline_progress: 0.0,
            last_dt: 0.0,
        }
    }

    /// Regenerates the whole particle collection for the current canvas.
    fn regenerate(&mut self) {
        self.field
            .resize(self.canvas_size.x, self.canvas_size.y);
        self.field.generate(self.cfg.particle_count, &mut self.rng);
    }

    /// Advances every time-driven effect by `dt` seconds.
    fn tick_effects(&mut self, dt: f64) {
        self.last_dt = dt;
        self.follower.set_smoothing(self.cfg.cursor_smoothing);
        self.follower.tick();
        self.card_tilt.tick();
        self.typewriter.tick(dt);
        for (_, counter) in &mut self.counters {
            counter.tick(dt);
        }
    }

    /// Applies or lifts reduced-motion mode.
    fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        if reduced {
            self.typewriter.settle();
            for (_, counter) in &mut self.counters {
                counter.settle();
            }
        } else {
            self.typewriter.restart();
        }
    }

    /// Builds the top panel UI (run controls, stepping, regeneration).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.field.step();
                }

                if ui.button("Regenerate").clicked() {
                    self.regenerate();
                }

                ui.separator();

                let mut reduced = self.reduced_motion;
                if ui.checkbox(&mut reduced, "Reduce motion").changed() {
                    self.set_reduced_motion(reduced);
                }
            });
        });
    }

    /// Builds the bottom status bar (frame delta, particle count, scroll).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt = {:.1} ms", self.last_dt * 1000.0));
                ui.separator();
                ui.label(format!("particles = {}", self.field.particles.len()));
                ui.label(format!("scroll = {:.0}%", self.scroll_fraction * 100.0));
                ui.label(format!(
                    "timeline = {:.0}%",
                    self.timeline_progress * 100.0
                ));
            });
        });
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Particle field");
                Self::labeled_drag_usize(
                    ui,
                    "particle_count:",
                    &mut self.cfg.particle_count,
                    0..=1000,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "connection_distance:",
                    &mut self.cfg.connection_distance,
                    0.0..=400.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "line_width:",
                    &mut self.cfg.line_width,
                    0.1..=4.0,
                    0.05,
                );

                ui.separator();
                ui.label("Cursor");
                Self::labeled_drag_f32(
                    ui,
                    "smoothing:",
                    &mut self.cfg.cursor_smoothing,
                    0.01..=1.0,
                    0.01,
                );

                ui.separator();
                ui.label("Card tilt");
                Self::labeled_drag_f32(
                    ui,
                    "max_deg:",
                    &mut self.cfg.tilt_max_deg,
                    0.0..=45.0,
                    0.5,
                );

                ui.separator();
                ui.label("Scroll");
                Self::labeled_drag_f32(
                    ui,
                    "navbar_threshold:",
                    &mut self.cfg.navbar_threshold,
                    0.0..=400.0,
                    1.0,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = MotionConfig::default();
                }
            });
    }

    /// Builds the scrollable mock page that exercises the scroll-linked
    /// stylers: progress bar, navbar state, counters, timeline, tilt
    /// card.
    fn ui_page_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("page_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                // Navbar: compact once scrolled past the threshold.
                let scrolled =
                    scroll::navbar_scrolled(self.scroll_offset, self.cfg.navbar_threshold);
                ui.horizontal(|ui| {
                    if scrolled {
                        ui.label(egui::RichText::new("Dr. Maya Verma").strong());
                    } else {
                        ui.heading("Dr. Maya Verma");
                    }
                });

                // Scroll progress bar under the navbar.
                let (bar_rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 3.0),
                    egui::Sense::hover(),
                );
                let filled = egui::Rect::from_min_size(
                    bar_rect.min,
                    egui::vec2(bar_rect.width() * self.scroll_fraction, bar_rect.height()),
                );
                ui.painter().rect_filled(
                    filled,
                    egui::CornerRadius::ZERO,
                    to_color32(self.cfg.accent),
                );
                ui.separator();

                let output = egui::ScrollArea::vertical().show(ui, |ui| {
                    self.page_content(ui);
                });

                self.scroll_offset = output.state.offset.y;
                self.scroll_fraction = scroll::progress_fraction(
                    output.state.offset.y,
                    output.content_size.y,
                    output.inner_rect.height(),
                );
            });
    }

    /// Content of the mock page inside the scroll area.
    fn page_content(&mut self, ui: &mut egui::Ui) {
        let accent = to_color32(self.cfg.accent);

        // Hero with the typewriter headline.
        ui.add_space(12.0);
        ui.label("Researching");
        ui.label(
            egui::RichText::new(format!("{}▌", self.typewriter.visible()))
                .size(20.0)
                .color(accent),
        );
        ui.add_space(8.0);
        ui.label("Quantitative social science across policy, health, and climate.");
        ui.add_space(40.0);

        // Stat counters: armed the first time they scroll into view.
        ui.heading("At a glance");
        for (label, counter) in &mut self.counters {
            let response = ui.label(format!("{:>3}  {label}", counter.value()));
            if ui.is_rect_visible(response.rect) {
                counter.start();
            }
        }
        ui.add_space(40.0);

        // Revealed sections: fade in with how far they have scrolled up.
        ui.heading("Research");
        for (i, topic) in HERO_WORDS.iter().enumerate() {
            let response = ui.label(format!("• Working paper series {} — {topic}", i + 1));
            let rel_top = response.rect.top() - ui.clip_rect().top();
            let reveal = ease::power3_out(scroll::scrub_fraction(
                rel_top,
                response.rect.height(),
                ui.clip_rect().height(),
            ));
            // Repaint the label faded until it is fully revealed.
            if reveal < 1.0 {
                let fade = CANVAS_BG.gamma_multiply(1.0 - reveal);
                ui.painter()
                    .rect_filled(response.rect, egui::CornerRadius::ZERO, fade);
            }
            ui.add_space(24.0);
        }
        ui.add_space(24.0);

        // Education timeline with a scrubbed progress line and dots.
        ui.heading("Education");
        self.timeline_section(ui);
        ui.add_space(40.0);

        // Tilt card.
        ui.heading("Featured");
        self.tilt_card(ui);
        ui.add_space(120.0);
    }

    /// Draws the timeline: a vertical line filled to the scrub fraction,
    /// one dot per entry lighting up as the fill passes it.
    fn timeline_section(&mut self, ui: &mut egui::Ui) {
        let row_height = 36.0;
        let height = row_height * TIMELINE_ENTRIES.len() as f32;
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(ui.clip_rect());
        let accent = to_color32(self.cfg.accent);

        let rel_top = rect.top() - ui.clip_rect().top();
        let progress = scroll::scrub_fraction(rel_top, rect.height(), ui.clip_rect().height());
        self.timeline_progress = progress;

        let line_x = rect.left() + 8.0;
        painter.line_segment(
            [
                egui::pos2(line_x, rect.top()),
                egui::pos2(line_x, rect.bottom()),
            ],
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
        );
        let fill_bottom = rect.top() + rect.height() * self.timeline.line_fraction(progress);
        painter.line_segment(
            [egui::pos2(line_x, rect.top()), egui::pos2(line_x, fill_bottom)],
            egui::Stroke::new(2.0, accent),
        );

        for (i, entry) in TIMELINE_ENTRIES.iter().enumerate() {
            let y = rect.top() + row_height * (i as f32 + 0.5);
            let active = self.timeline.dot_active(i, progress);
            let radius = 4.0 * self.timeline.dot_scale(i, progress);
            let fill = if active { accent } else { CANVAS_BG };
            painter.circle_filled(egui::pos2(line_x, y), radius, fill);
            painter.circle_stroke(
                egui::pos2(line_x, y),
                radius,
                egui::Stroke::new(1.0, accent),
            );
            painter.text(
                egui::pos2(line_x + 16.0, y),
                egui::Align2::LEFT_CENTER,
                *entry,
                egui::FontId::proportional(13.0),
                if active {
                    accent
                } else {
                    egui::Color32::GRAY
                },
            );
        }
    }

    /// Draws the hoverable card that tilts toward the pointer.
    fn tilt_card(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 80.0),
            egui::Sense::hover(),
        );

        if let Some(pos) = response.hover_pos() {
            self.hovering_interactive = true;
            self.card_tilt.point_at(
                Vec2::new(pos.x, pos.y),
                Vec2::new(rect.left(), rect.top()),
                Vec2::new(rect.width(), rect.height()),
                self.cfg.tilt_max_deg,
            );
        } else {
            self.card_tilt.release();
        }

        let painter = ui.painter_at(ui.clip_rect());
        let corners = tilt_quad(rect.shrink(6.0), self.card_tilt.rotation(), TILT_SHIFT_PER_DEG);
        painter.add(egui::Shape::convex_polygon(
            corners.to_vec(),
            egui::Color32::from_rgb(14, 14, 34),
            egui::Stroke::new(1.0, to_color32(self.cfg.accent)),
        ));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Spatial models of heat exposure",
            egui::FontId::proportional(13.0),
            egui::Color32::LIGHT_GRAY,
        );
    }

    /// Builds the central canvas: steps and renders the particle field
    /// and draws the custom cursor over it.
    fn ui_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // A size change regenerates the whole collection; survivors
            // are never repositioned.
            let size = rect.size();
            if size != self.canvas_size && size.x > 0.0 && size.y > 0.0 {
                self.canvas_size = size;
                self.regenerate();
            }

            if self.running {
                self.field.step();
            }

            let mut surface = PainterSurface {
                painter: &painter,
                origin: rect.min,
                size,
            };
            render::render(&self.field, &self.cfg, &mut surface);

            // Custom cursor: dot on the raw pointer, outline on the trail.
            if let Some(pos) = response.hover_pos() {
                let local = Vec2::new(pos.x - rect.left(), pos.y - rect.top());
                if self.pointer_seen {
                    self.follower.set_target(local);
                } else {
                    self.follower.warp(local);
                    self.pointer_seen = true;
                }
            }

            if self.pointer_seen {
                let style = CursorStyle::for_hover(self.hovering_interactive);
                let dot = surface.to_screen(self.follower.target());
                let trail = surface.to_screen(self.follower.trail());
                painter.circle_filled(
                    dot,
                    CURSOR_DOT_RADIUS * style.dot_scale,
                    to_color32(self.cfg.accent),
                );
                painter.circle_stroke(
                    trail,
                    style.outline_diameter / 2.0,
                    egui::Stroke::new(
                        1.5,
                        to_color32(self.cfg.accent.with_alpha(style.outline_alpha)),
                    ),
                );
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that ticks every effect and rebuilds the UI.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt) as f64;
        self.hovering_interactive = false;
        self.tick_effects(dt);

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_page_panel(ctx);
        self.ui_canvas(ctx);

        // Self-perpetuating drive loop, one tick per display refresh.
        ctx.request_repaint();
    }
}
