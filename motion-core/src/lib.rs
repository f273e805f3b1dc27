//! Core state machines for a portfolio-style motion system.
//!
//! Every effect is a small, self-contained piece of state advanced once
//! per frame tick by a host-owned drive loop; none of them touch a real
//! rendering surface directly.
//!
//! Main components:
//! - [`field`] — bounded 2-D particle field with boundary reflection.
//! - [`render`] — connection/dot render pass over an abstract [`render::Surface`].
//! - [`cursor`] — trailing pointer follower and cursor styling.
//! - [`typewriter`] — character-at-a-time word cycler.
//! - [`scroll`] — scroll progress, navbar state, timeline scrub, counters.
//! - [`tilt`] — eased 3-D card tilt.
//! - [`ease`] — shared easing curves.
//! - [`config`] — global configuration for the whole system.
//! - [`types`] — shared color type.

pub mod config;
pub mod cursor;
pub mod ease;
pub mod field;
pub mod render;
pub mod scroll;
pub mod tilt;
pub mod typewriter;
pub mod types;
