//! Pieces module - rotation-frame catalog for the 7 piece kinds.
//!
//! Every rotation state is a precomputed 5x5 occupancy mask ("frame") over the
//! piece's anchor. Rotation is a cyclic index into the kind's frame list, so
//! there is no runtime matrix math and no wall kicks. All kinds share the same
//! bounding box, which keeps the geometry code free of per-shape special cases.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Side length of the frame bounding box.
pub const FRAME_SIZE: usize = 5;

/// Number of occupied cells in every frame of the catalog.
pub const CELLS_PER_FRAME: usize = 4;

/// One rotation state's occupancy pattern.
pub type Frame = [[bool; FRAME_SIZE]; FRAME_SIZE];

/// Cell offsets of a frame relative to the piece anchor.
pub type FrameCells = ArrayVec<(i8, i8), CELLS_PER_FRAME>;

/// Build a frame from mask art at compile time. `'0'` marks an occupied cell.
const fn mask(rows: [&str; FRAME_SIZE]) -> Frame {
    let mut frame = [[false; FRAME_SIZE]; FRAME_SIZE];
    let mut y = 0;
    while y < FRAME_SIZE {
        let row = rows[y].as_bytes();
        let mut x = 0;
        while x < FRAME_SIZE {
            frame[y][x] = row[x] == b'0';
            x += 1;
        }
        y += 1;
    }
    frame
}

const S_FRAMES: [Frame; 2] = [
    mask([
        ".....", //
        ".....", //
        "..00.", //
        ".00..", //
        ".....",
    ]),
    mask([
        ".....", //
        "..0..", //
        "..00.", //
        "...0.", //
        ".....",
    ]),
];

const Z_FRAMES: [Frame; 2] = [
    mask([
        ".....", //
        ".....", //
        ".00..", //
        "..00.", //
        ".....",
    ]),
    mask([
        ".....", //
        "..0..", //
        ".00..", //
        ".0...", //
        ".....",
    ]),
];

const I_FRAMES: [Frame; 2] = [
    mask([
        ".....", //
        "..0..", //
        "..0..", //
        "..0..", //
        "..0..",
    ]),
    mask([
        ".....", //
        "0000.", //
        ".....", //
        ".....", //
        ".....",
    ]),
];

const O_FRAMES: [Frame; 1] = [mask([
    ".....", //
    ".....", //
    ".00..", //
    ".00..", //
    ".....",
])];

const T_FRAMES: [Frame; 4] = [
    mask([
        ".....", //
        "..0..", //
        ".000.", //
        ".....", //
        ".....",
    ]),
    mask([
        ".....", //
        "..0..", //
        "..00.", //
        "..0..", //
        ".....",
    ]),
    mask([
        ".....", //
        ".....", //
        ".000.", //
        "..0..", //
        ".....",
    ]),
    mask([
        ".....", //
        "..0..", //
        ".00..", //
        "..0..", //
        ".....",
    ]),
];

const L_FRAMES: [Frame; 4] = [
    mask([
        ".....", //
        ".....", //
        ".000.", //
        ".0...", //
        ".....",
    ]),
    mask([
        ".....", //
        "..00.", //
        "...0.", //
        "...0.", //
        ".....",
    ]),
    mask([
        ".....", //
        ".....", //
        "...0.", //
        ".000.", //
        ".....",
    ]),
    mask([
        ".....", //
        "..0..", //
        "..0..", //
        ".00..", //
        ".....",
    ]),
];

const J_FRAMES: [Frame; 4] = [
    mask([
        ".....", //
        ".....", //
        ".000.", //
        "...0.", //
        ".....",
    ]),
    mask([
        ".....", //
        "...0.", //
        "...0.", //
        "..00.", //
        ".....",
    ]),
    mask([
        ".....", //
        ".....", //
        ".000.", //
        ".0...", //
        ".....",
    ]),
    mask([
        ".....", //
        ".00..", //
        "..0..", //
        "..0..", //
        ".....",
    ]),
];

/// Rotation frames for a piece kind, in clockwise order.
///
/// Fixed and read-only; every kind has at least one frame.
pub fn frames(kind: PieceKind) -> &'static [Frame] {
    match kind {
        PieceKind::S => &S_FRAMES,
        PieceKind::Z => &Z_FRAMES,
        PieceKind::I => &I_FRAMES,
        PieceKind::O => &O_FRAMES,
        PieceKind::T => &T_FRAMES,
        PieceKind::L => &L_FRAMES,
        PieceKind::J => &J_FRAMES,
    }
}

/// Number of rotation frames for a kind.
pub fn frame_count(kind: PieceKind) -> u8 {
    frames(kind).len() as u8
}

/// Local (x, y) offsets of the occupied cells in a frame.
pub fn frame_cells(frame: &Frame) -> FrameCells {
    let mut cells = FrameCells::new();
    for (y, row) in frame.iter().enumerate() {
        for (x, &occupied) in row.iter().enumerate() {
            if occupied {
                cells.push((x as i8, y as i8));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_frame_counts() {
        assert_eq!(frame_count(PieceKind::S), 2);
        assert_eq!(frame_count(PieceKind::Z), 2);
        assert_eq!(frame_count(PieceKind::I), 2);
        assert_eq!(frame_count(PieceKind::O), 1);
        assert_eq!(frame_count(PieceKind::T), 4);
        assert_eq!(frame_count(PieceKind::L), 4);
        assert_eq!(frame_count(PieceKind::J), 4);
    }

    #[test]
    fn every_frame_has_four_cells() {
        for kind in PieceKind::ALL {
            for frame in frames(kind) {
                assert_eq!(
                    frame_cells(frame).len(),
                    CELLS_PER_FRAME,
                    "kind {:?}",
                    kind
                );
            }
        }
    }

    #[test]
    fn mask_parses_art() {
        let frame = mask([
            "0....", //
            ".....", //
            ".....", //
            ".....", //
            "....0",
        ]);
        assert!(frame[0][0]);
        assert!(frame[4][4]);
        assert!(!frame[0][1]);
        assert_eq!(frame_cells(&frame).as_slice(), &[(0, 0), (4, 4)]);
    }
}
