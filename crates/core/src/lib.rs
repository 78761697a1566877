//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the whole rule set of the falling-block engine and has
//! zero dependencies on UI, timing, or I/O:
//!
//! - [`board`]: the 10x20 grid of settled cells, collision rule, and line
//!   clearing with downward compaction
//! - [`pieces`]: the rotation-frame catalog (5x5 occupancy masks per kind)
//! - [`game_state`]: the active piece and the gravity/input/lock cycle
//! - [`rng`]: seedable LCG for uniform kind and color selection
//!
//! # Rules
//!
//! The engine follows the reference ruleset rather than modern guideline
//! Tetris: cyclic mod-N rotation with no wall kicks, a fixed 270 ms gravity
//! interval, no hold piece, no lock delay, and no scoring. An invalid move or
//! rotation is reverted and play continues; nothing in the core fails.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, FALL_INTERVAL_MS};
//!
//! let mut game = GameState::new(12345);
//!
//! // One update cycle: gravity first, then this cycle's input events.
//! let result = game.step(FALL_INTERVAL_MS, &[GameAction::MoveLeft]);
//! assert!(result.gravity_applied);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

pub use board::Board;
pub use game_state::{GameState, Piece, StepResult};
pub use pieces::{frame_cells, frame_count, frames, Frame, FrameCells};
pub use rng::SimpleRng;
