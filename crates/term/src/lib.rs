//! Terminal renderer for blockfall.
//!
//! Renders into a plain framebuffer instead of a widget tree, then flushes
//! it through crossterm. Board cells are 2 columns wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
