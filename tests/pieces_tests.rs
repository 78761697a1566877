//! Pieces tests - frame catalog and rotation geometry.

use blockfall::core::{frame_cells, frame_count, frames, Board, Piece};
use blockfall::types::PieceKind;

#[test]
fn every_kind_has_at_least_one_frame() {
    for kind in PieceKind::ALL {
        assert!(frame_count(kind) >= 1, "kind {:?}", kind);
    }
}

#[test]
fn catalog_frame_counts_match_the_reference() {
    let expected = [
        (PieceKind::S, 2),
        (PieceKind::Z, 2),
        (PieceKind::I, 2),
        (PieceKind::O, 1),
        (PieceKind::T, 4),
        (PieceKind::L, 4),
        (PieceKind::J, 4),
    ];
    for (kind, count) in expected {
        assert_eq!(frame_count(kind), count, "kind {:?}", kind);
    }
}

#[test]
fn all_frames_fit_the_bounding_box() {
    for kind in PieceKind::ALL {
        for frame in frames(kind) {
            for (x, y) in frame_cells(frame) {
                assert!((0..5).contains(&x));
                assert!((0..5).contains(&y));
            }
        }
    }
}

#[test]
fn rotation_is_cyclic_over_the_frame_count() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind, 1);
        piece.x = 3;
        piece.y = 8;
        let original_cells = piece.cells();
        let original_rotation = piece.rotation;

        for _ in 0..frame_count(kind) {
            piece.rotate_cw();
        }

        assert_eq!(piece.rotation, original_rotation, "kind {:?}", kind);
        assert_eq!(piece.cells(), original_cells, "kind {:?}", kind);
    }
}

#[test]
fn rotation_changes_occupancy_for_multi_frame_kinds() {
    for kind in PieceKind::ALL {
        if frame_count(kind) == 1 {
            continue;
        }
        let mut piece = Piece::new(kind, 1);
        piece.y = 8;
        let before = piece.cells();
        piece.rotate_cw();
        assert_ne!(piece.cells(), before, "kind {:?}", kind);
    }
}

#[test]
fn occupied_cells_follow_the_anchor() {
    let mut piece = Piece::new(PieceKind::O, 2);
    let at_spawn = piece.cells();

    piece.shift(2, 3);
    let shifted = piece.cells();

    for (a, b) in at_spawn.iter().zip(shifted.iter()) {
        assert_eq!((a.0 + 2, a.1 + 3), *b);
    }
}

#[test]
fn occupancy_is_recomputed_not_cached() {
    let mut piece = Piece::new(PieceKind::T, 3);
    piece.y = 5;
    let before = piece.cells();
    piece.rotate_cw();
    piece.rotate_cw();
    piece.rotate_cw();
    piece.rotate_cw();
    assert_eq!(piece.cells(), before);
}

#[test]
fn spawned_pieces_fit_an_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind, 1);
        assert!(piece.fits(&board), "kind {:?} at spawn", kind);
    }
}
