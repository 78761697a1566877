//! Game state module - the active piece and the per-cycle state machine.
//!
//! One call to [`GameState::step`] is one discrete update cycle: gravity
//! first, then input events in arrival order, then lock resolution. Invalid
//! moves are reverted and play continues; rejection is an expected outcome,
//! never an error.

use crate::board::Board;
use crate::pieces::{frame_cells, frames, Frame, FrameCells};
use crate::rng::SimpleRng;
use crate::types::{ColorId, GameAction, Grid, PieceKind, FALL_INTERVAL_MS, SPAWN_X, SPAWN_Y};

/// The falling piece: kind, color identity, anchor and rotation index.
///
/// Purely transient state. It is replaced wholesale when it locks; only the
/// lock commit writes its cells into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: ColorId,
    /// Anchor (top-left of the 5x5 frame box). y may be negative while the
    /// piece is still above the visible grid.
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
}

impl Piece {
    /// Create a piece at the spawn anchor in its first rotation frame.
    pub fn new(kind: PieceKind, color: ColorId) -> Self {
        Self {
            kind,
            color,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0,
        }
    }

    /// Draw a fresh piece with uniformly random kind and color.
    pub fn random(rng: &mut SimpleRng) -> Self {
        let kind = rng.random_kind();
        let color = rng.random_color();
        Self::new(kind, color)
    }

    /// Number of rotation frames for this piece's kind.
    pub fn frame_count(&self) -> u8 {
        frames(self.kind).len() as u8
    }

    /// The occupancy mask for the current rotation.
    pub fn frame(&self) -> &'static Frame {
        let catalog = frames(self.kind);
        &catalog[self.rotation as usize % catalog.len()]
    }

    /// Advance to the next rotation frame, cyclically. No validation here;
    /// legality is the caller's responsibility.
    pub fn rotate_cw(&mut self) {
        self.rotation = (self.rotation + 1) % self.frame_count();
    }

    /// Translate the anchor. No bounds checking.
    pub fn shift(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Absolute cells covered by the piece, recomputed from anchor and frame
    /// on every call so the set can never go stale.
    pub fn cells(&self) -> FrameCells {
        let mut cells = frame_cells(self.frame());
        for (x, y) in cells.iter_mut() {
            *x += self.x;
            *y += self.y;
        }
        cells
    }

    /// Collision validation: every cell inside the side walls, above the
    /// floor, and (once visible) not overlapping a settled cell.
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.allows(x, y))
    }
}

/// Outcome of one update cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// The gravity interval elapsed and a downward move was attempted.
    pub gravity_applied: bool,
    /// The active piece settled into the board this cycle.
    pub locked: bool,
    /// Rows cleared by the lock (0 when `locked` is false).
    pub lines_cleared: u32,
}

/// Complete game state: the board, the active piece, the pre-drawn next
/// piece, and the gravity accumulator.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    rng: SimpleRng,
    fall_timer_ms: u32,
}

impl GameState {
    /// Create a game with an active and a next piece already drawn.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Piece::random(&mut rng);
        let next = Piece::random(&mut rng);
        Self {
            board: Board::new(),
            current,
            next,
            rng,
            fall_timer_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for test setup (pre-populating rows).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    /// Replace the active piece wholesale, for test setup with a known
    /// kind and position.
    pub fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    /// Run one update cycle: gravity, then the cycle's input events in
    /// arrival order, then lock resolution.
    pub fn step(&mut self, elapsed_ms: u32, actions: &[GameAction]) -> StepResult {
        let mut result = StepResult::default();
        let mut lock_pending = false;

        // Gravity first; ordering matters near the stack surface because an
        // input move can still reposition the piece before the lock commits.
        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms >= FALL_INTERVAL_MS {
            self.fall_timer_ms = 0;
            result.gravity_applied = true;

            self.current.shift(0, 1);
            if !self.current.fits(&self.board) && self.current.y > 0 {
                self.current.shift(0, -1);
                lock_pending = true;
            }
            // An invalid position with the anchor still at the top row is
            // kept: the piece is above the grid and locks only once it has
            // descended past it. Reference behavior.
        }

        for &action in actions {
            self.apply_action(action);
        }

        if lock_pending {
            result.locked = true;
            result.lines_cleared = self.lock_current();
        }

        result
    }

    /// Apply one input event: transform, validate, revert on failure.
    ///
    /// Returns whether the transform was kept.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_shift(-1, 0),
            GameAction::MoveRight => self.try_shift(1, 0),
            GameAction::SoftDrop => self.try_shift(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        self.current.shift(dx, dy);
        if self.current.fits(&self.board) {
            return true;
        }
        self.current.shift(-dx, -dy);
        false
    }

    /// Rotation reverts by restoring the saved index. Equivalent to the
    /// cyclic counter-rotation for any frame count.
    fn try_rotate(&mut self) -> bool {
        let previous = self.current.rotation;
        self.current.rotate_cw();
        if self.current.fits(&self.board) {
            return true;
        }
        self.current.rotation = previous;
        false
    }

    /// Commit the active piece, clear rows, and promote the next piece.
    ///
    /// Cells above the visible grid are committed as well; a stack that has
    /// grown past the top is observable through the board, not a terminal
    /// state.
    fn lock_current(&mut self) -> u32 {
        let color = self.current.color;
        let cells = self.current.cells();
        self.board.lock(&cells, color);

        self.current = self.next;
        self.next = Piece::random(&mut self.rng);

        self.board.clear_full_rows()
    }

    /// Derive the renderable grid: settled cells overlaid with the visible
    /// part of the active piece. The overlay exists only in the snapshot.
    pub fn snapshot_into(&self, out: &mut Grid) {
        self.board.write_grid(out);
        for &(x, y) in self.current.cells().iter() {
            if x >= 0 && (x as usize) < out[0].len() && y >= 0 && (y as usize) < out.len() {
                out[y as usize][x as usize] = self.current.color;
            }
        }
    }

    /// Convenience allocation of a fresh snapshot grid.
    pub fn snapshot(&self) -> Grid {
        let mut grid = Grid::default();
        self.snapshot_into(&mut grid);
        grid
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn new_game_has_active_and_next_piece() {
        let state = GameState::new(12345);
        assert_eq!(state.current().x, SPAWN_X);
        assert_eq!(state.current().y, SPAWN_Y);
        assert_eq!(state.current().rotation, 0);
        assert!(state.board().is_empty());
        assert!((1..=7).contains(&state.next().color));
    }

    #[test]
    fn gravity_fires_only_after_the_fall_interval() {
        let mut state = GameState::new(1);
        let y0 = state.current().y;

        let result = state.step(FALL_INTERVAL_MS - 1, &[]);
        assert!(!result.gravity_applied);
        assert_eq!(state.current().y, y0);

        let result = state.step(1, &[]);
        assert!(result.gravity_applied);
        assert_eq!(state.current().y, y0 + 1);
    }

    #[test]
    fn rejected_move_is_reverted_exactly() {
        let mut state = GameState::new(1);
        let mut piece = Piece::new(PieceKind::O, 1);
        piece.x = -1; // O mask occupies local columns 1..=2, so cells at x 0,1
        state.set_current(piece);

        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.current().x, -1);
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.current().x, 0);
    }

    #[test]
    fn rejected_rotation_restores_the_frame_index() {
        let mut state = GameState::new(1);
        let mut piece = Piece::new(PieceKind::I, 2);
        // Vertical I against the left wall: the horizontal frame would poke
        // through it.
        piece.x = -2;
        piece.y = 5;
        state.set_current(piece);
        assert!(state.current().fits(state.board()));

        assert!(!state.apply_action(GameAction::Rotate));
        assert_eq!(state.current().rotation, 0);
    }

    #[test]
    fn soft_drop_moves_down_one_row() {
        let mut state = GameState::new(1);
        let y0 = state.current().y;
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.current().y, y0 + 1);
    }

    #[test]
    fn lock_commits_cells_and_promotes_next_piece() {
        let mut state = GameState::new(9);
        let next_kind = state.next().kind;
        let piece = Piece::new(PieceKind::O, 5);
        state.set_current(piece);

        // Drive gravity until the piece settles on the floor.
        let mut locked = false;
        for _ in 0..(BOARD_HEIGHT as u32 + 2) {
            let result = state.step(FALL_INTERVAL_MS, &[]);
            if result.locked {
                locked = true;
                break;
            }
        }
        assert!(locked);

        // O occupies local columns 1..=2, rows 2..=3 of its frame.
        let bottom = BOARD_HEIGHT as i8 - 1;
        for &(x, y) in &[
            (SPAWN_X + 1, bottom - 1),
            (SPAWN_X + 2, bottom - 1),
            (SPAWN_X + 1, bottom),
            (SPAWN_X + 2, bottom),
        ] {
            assert_eq!(state.board().color_at(x, y), Some(5), "cell ({x}, {y})");
        }

        assert_eq!(state.current().kind, next_kind);
        assert_eq!(state.current().x, SPAWN_X);
        assert_eq!(state.current().rotation, 0);
    }

    #[test]
    fn inputs_apply_after_gravity_within_a_cycle() {
        let mut state = GameState::new(1);
        let piece = Piece::new(PieceKind::O, 3);
        state.set_current(piece);
        let x0 = state.current().x;
        let y0 = state.current().y;

        let result = state.step(FALL_INTERVAL_MS, &[GameAction::MoveLeft]);
        assert!(result.gravity_applied);
        assert_eq!(state.current().x, x0 - 1);
        assert_eq!(state.current().y, y0 + 1);
    }

    #[test]
    fn snapshot_overlays_only_visible_active_cells() {
        let mut state = GameState::new(1);
        let mut piece = Piece::new(PieceKind::I, 4);
        piece.y = -3; // vertical I: two cells above the grid, two at rows 0..=1
        state.set_current(piece);

        let grid = state.snapshot();
        let occupied: usize = grid
            .iter()
            .flatten()
            .filter(|&&c| c != 0)
            .count();
        assert_eq!(occupied, 2);
        assert_eq!(grid[0][(SPAWN_X + 2) as usize], 4);
        assert_eq!(grid[1][(SPAWN_X + 2) as usize], 4);
    }

    #[test]
    fn active_cells_never_intersect_locked_cells() {
        let mut state = GameState::new(31337);
        for _ in 0..2000 {
            let result = state.step(FALL_INTERVAL_MS, &[GameAction::Rotate, GameAction::MoveLeft]);
            if !result.locked {
                for (x, y) in state.current().cells() {
                    if y >= 0 {
                        assert!(
                            !state.board().is_locked(x, y),
                            "active cell ({x}, {y}) overlaps the stack"
                        );
                        assert!((0..BOARD_WIDTH as i8).contains(&x));
                    }
                }
            }
        }
    }
}
