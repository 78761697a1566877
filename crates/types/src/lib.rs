//! Core types shared across the application.
//! This crate contains pure data types and constants with no dependencies.

/// Board dimensions in cells. The reference playfield is a 300x600 pixel
/// surface with 30 pixel blocks, so 10 columns by 20 rows.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed update cadence of the game loop (in milliseconds).
pub const TICK_MS: u32 = 16;

/// Gravity interval: the active piece is forced down one row every time
/// this much elapsed time accumulates.
pub const FALL_INTERVAL_MS: u32 = 270;

/// Spawn anchor for new pieces (top-left of the 5x5 frame box).
pub const SPAWN_X: i8 = 5;
pub const SPAWN_Y: i8 = 0;

/// Number of piece colors. Valid [`ColorId`]s are `1..=COLOR_COUNT`;
/// 0 is the background.
pub const COLOR_COUNT: u8 = 7;

/// Color identity of a settled or falling cell. Independent of piece kind:
/// the color is drawn at spawn and travels with the piece into the board.
pub type ColorId = u8;

/// A renderable grid snapshot: one [`ColorId`] per visible cell, 0 = empty.
pub type Grid = [[ColorId; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The 7 piece kinds.
///
/// Kinds differ only in their rotation-frame catalog (see `blockfall-core`);
/// nothing downstream special-cases a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    I,
    O,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Logical input events consumed by the game state.
///
/// Emitted at most once per key-down; there is no key-repeat handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}
