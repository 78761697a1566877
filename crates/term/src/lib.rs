//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the pure [`game_view`] maps a grid
//! snapshot into a character [`fb::FrameBuffer`], and [`renderer`] flushes
//! framebuffers to a raw-mode terminal with frame diffing. Keeping the view
//! pure leaves all terminal I/O in one place.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
