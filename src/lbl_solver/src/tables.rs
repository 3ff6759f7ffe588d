//! Decision tables for every stage, written from the default viewpoint.
//!
//! Moves are signed relative face ids: `U D F B L R` are one through six and
//! a negative id is a counter-clockwise turn. No sequence here turns `D`.
//! `Frame::moves` decodes them for whichever viewpoint matched.

use cube_core::{Face, Facelet};

const U: i8 = 1;
const F: i8 = 3;
const B: i8 = 4;
const L: i8 = 5;
const R: i8 = 6;

const fn at(face: Face, row: usize, col: usize) -> Facelet {
    Facelet::new(face, row, col)
}

/// A key paired with the sequence to play when the key matches.
#[derive(Debug)]
pub(crate) struct Entry<K> {
    pub key: K,
    pub sequence: &'static [i8],
}

const fn entry<K>(key: K, sequence: &'static [i8]) -> Entry<K> {
    Entry { key, sequence }
}

/// Where the tracked sticker of an unsolved piece currently sits.
pub(crate) type PieceTable = [Entry<Facelet>];

/// Up-layer edge facelets in `UF UR UB UL` order.
pub(crate) const TOP_EDGES: [Facelet; 4] = [
    at(Face::Up, 2, 1),
    at(Face::Up, 1, 2),
    at(Face::Up, 0, 1),
    at(Face::Up, 1, 0),
];

/// Up-layer corner facelets in `UFR UFL ULB UBR` order.
pub(crate) const TOP_CORNERS: [Facelet; 4] = [
    at(Face::Up, 2, 2),
    at(Face::Up, 2, 0),
    at(Face::Up, 0, 0),
    at(Face::Up, 0, 2),
];

/// The white sticker of the edge that belongs at `DF`. The other sticker of
/// the piece must show the front center.
pub(crate) static BOTTOM_CROSS: &PieceTable = &[
    entry(at(Face::Up, 2, 1), &[F, F]),
    entry(at(Face::Front, 0, 1), &[-U, -R, F, R]),
    entry(at(Face::Up, 1, 2), &[U, F, F]),
    entry(at(Face::Right, 0, 1), &[-R, F, R]),
    entry(at(Face::Up, 0, 1), &[U, U, F, F]),
    entry(at(Face::Back, 0, 1), &[U, -R, F, R]),
    entry(at(Face::Up, 1, 0), &[-U, F, F]),
    entry(at(Face::Left, 0, 1), &[L, -F, -L]),
    entry(at(Face::Right, 1, 0), &[F]),
    entry(at(Face::Front, 1, 2), &[R, U, -R]),
    entry(at(Face::Left, 1, 2), &[-F]),
    entry(at(Face::Front, 1, 0), &[-L, -U, L]),
    entry(at(Face::Back, 1, 0), &[-R, U, R]),
    entry(at(Face::Right, 1, 2), &[-R, U, R]),
    entry(at(Face::Back, 1, 2), &[L, -U, -L]),
    entry(at(Face::Left, 1, 0), &[L, -U, -L]),
    entry(at(Face::Down, 1, 2), &[R, R]),
    entry(at(Face::Right, 2, 1), &[R, R]),
    entry(at(Face::Down, 2, 1), &[B, B]),
    entry(at(Face::Back, 2, 1), &[B, B]),
    entry(at(Face::Down, 1, 0), &[L, L]),
    entry(at(Face::Left, 2, 1), &[L, L]),
    entry(at(Face::Front, 2, 1), &[F, F]),
];

const SEXY: &[i8] = &[R, U, -R, -U];

/// The white sticker of the corner that belongs at `DFR`. The other two
/// stickers must show the front and right centers.
pub(crate) static BOTTOM_CORNERS: &PieceTable = &[
    entry(at(Face::Up, 2, 2), SEXY),
    entry(at(Face::Right, 0, 0), SEXY),
    entry(at(Face::Front, 0, 2), SEXY),
    entry(at(Face::Up, 2, 0), &[-U, R, U, -R, -U]),
    entry(at(Face::Front, 0, 0), &[-U, R, U, -R, -U]),
    entry(at(Face::Left, 0, 2), &[-U, R, U, -R, -U]),
    entry(at(Face::Up, 0, 0), &[U, U, R, U, -R, -U]),
    entry(at(Face::Left, 0, 0), &[U, U, R, U, -R, -U]),
    entry(at(Face::Back, 0, 2), &[U, U, R, U, -R, -U]),
    entry(at(Face::Up, 0, 2), &[U, R, U, -R, -U]),
    entry(at(Face::Back, 0, 0), &[U, R, U, -R, -U]),
    entry(at(Face::Right, 0, 2), &[U, R, U, -R, -U]),
    entry(at(Face::Front, 2, 2), SEXY),
    entry(at(Face::Right, 2, 0), SEXY),
    entry(at(Face::Down, 0, 0), &[F, U, -F, -U]),
    entry(at(Face::Left, 2, 2), &[F, U, -F, -U]),
    entry(at(Face::Front, 2, 0), &[F, U, -F, -U]),
    entry(at(Face::Down, 2, 0), &[L, U, -L, -U]),
    entry(at(Face::Back, 2, 2), &[L, U, -L, -U]),
    entry(at(Face::Left, 2, 0), &[L, U, -L, -U]),
    entry(at(Face::Down, 2, 2), &[B, U, -B, -U]),
    entry(at(Face::Right, 2, 2), &[B, U, -B, -U]),
    entry(at(Face::Back, 2, 0), &[B, U, -B, -U]),
];

const INSERT_RIGHT: &[i8] = &[U, R, -U, -R, -U, -F, U, F];

/// The front colored sticker of the edge that belongs at `FR`. The other
/// sticker of the piece must show the right center.
pub(crate) static MIDDLE_EDGES: &PieceTable = &[
    entry(at(Face::Front, 0, 1), INSERT_RIGHT),
    entry(at(Face::Right, 0, 1), &[U, U, R, -U, -R, -U, -F, U, F]),
    entry(at(Face::Back, 0, 1), &[-U, R, -U, -R, -U, -F, U, F]),
    entry(at(Face::Left, 0, 1), &[R, -U, -R, -U, -F, U, F]),
    entry(at(Face::Up, 2, 1), &[U, U, -F, U, F, U, R, -U, -R]),
    entry(at(Face::Up, 1, 2), &[-U, -F, U, F, U, R, -U, -R]),
    entry(at(Face::Up, 0, 1), &[-F, U, F, U, R, -U, -R]),
    entry(at(Face::Up, 1, 0), &[U, -F, U, F, U, R, -U, -R]),
    entry(at(Face::Right, 1, 0), INSERT_RIGHT),
    entry(at(Face::Right, 1, 2), &[U, B, -U, -B, -U, -R, U, R]),
    entry(at(Face::Back, 1, 0), &[U, B, -U, -B, -U, -R, U, R]),
    entry(at(Face::Back, 1, 2), &[U, L, -U, -L, -U, -B, U, B]),
    entry(at(Face::Left, 1, 0), &[U, L, -U, -L, -U, -B, U, B]),
    entry(at(Face::Left, 1, 2), &[U, F, -U, -F, -U, -L, U, L]),
    entry(at(Face::Front, 1, 0), &[U, F, -U, -F, -U, -L, U, L]),
];

const CROSS_FLIP: &[i8] = &[F, R, U, -R, -U, -F];

/// Which of `TOP_EDGES` show the up color.
pub(crate) static TOP_CROSS: &[Entry<[bool; 4]>] = &[
    // Line through left and right
    entry([false, true, false, true], CROSS_FLIP),
    // Bent line at back left
    entry([false, false, true, true], CROSS_FLIP),
    // Dot
    entry([false, false, false, false], CROSS_FLIP),
];

/// How many of `TOP_CORNERS` face up, and the twist of the front-left one.
/// Twist one puts the up color on the first sticker clockwise from the up
/// facelet, twist two on the second.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TwistKey {
    pub oriented: usize,
    pub front_left: u8,
}

const SUNE: &[i8] = &[R, U, -R, U, R, U, U, -R];

pub(crate) static TOP_CORNERS_TWIST: &[Entry<TwistKey>] = &[
    entry(
        TwistKey {
            oriented: 1,
            front_left: 0,
        },
        SUNE,
    ),
    entry(
        TwistKey {
            oriented: 2,
            front_left: 1,
        },
        SUNE,
    ),
    entry(
        TwistKey {
            oriented: 0,
            front_left: 2,
        },
        SUNE,
    ),
];

const A_PERM: &[i8] = &[-R, F, -R, B, B, R, -F, -R, B, B, R, R];

/// The side whose two top corner stickers match.
pub(crate) static TOP_CORNERS_PERMUTATION: &[Entry<Face>] = &[entry(Face::Back, A_PERM)];

/// Played from the default viewpoint when no side has matching top corners.
pub(crate) const TOP_CORNERS_PERMUTATION_FALLBACK: &[i8] = A_PERM;

/// The side whose center matches the front-left top sticker.
pub(crate) static TOP_LAYER_ALIGNMENT: &[Entry<Face>] = &[
    entry(Face::Left, &[U]),
    entry(Face::Back, &[U, U]),
    entry(Face::Right, &[-U]),
];

const U_PERM: &[i8] = &[R, -U, R, U, R, U, R, -U, -R, -U, R, R];

/// The side whose top edge already matches its center.
pub(crate) static TOP_EDGES_PERMUTATION: &[Entry<Face>] = &[entry(Face::Back, U_PERM)];

/// Played from the default viewpoint when no top edge matches its side.
pub(crate) const TOP_EDGES_PERMUTATION_FALLBACK: &[i8] = U_PERM;

#[cfg(test)]
mod tests {
    use cube_core::CubeState;
    use itertools::Itertools;

    use super::*;
    use crate::{frame::Frame, stage::Stage};

    fn play(sequence: &[i8]) -> CubeState {
        let mut state = CubeState::solved();
        state.apply_moves(&Frame::DEFAULT.moves(sequence).unwrap());
        state
    }

    fn all_sequences() -> Vec<&'static [i8]> {
        let mut sequences = vec![];
        for table in [BOTTOM_CROSS, BOTTOM_CORNERS, MIDDLE_EDGES] {
            sequences.extend(table.iter().map(|entry| entry.sequence));
        }
        sequences.extend(TOP_CROSS.iter().map(|entry| entry.sequence));
        sequences.extend(TOP_CORNERS_TWIST.iter().map(|entry| entry.sequence));
        for table in [
            TOP_CORNERS_PERMUTATION,
            TOP_LAYER_ALIGNMENT,
            TOP_EDGES_PERMUTATION,
        ] {
            sequences.extend(table.iter().map(|entry| entry.sequence));
        }
        sequences.extend([
            TOP_CORNERS_PERMUTATION_FALLBACK,
            TOP_EDGES_PERMUTATION_FALLBACK,
        ]);
        sequences
    }

    #[test_log::test]
    fn test_every_sequence_decodes() {
        for sequence in all_sequences() {
            assert!(!sequence.is_empty());
            let moves = Frame::DEFAULT.moves(sequence).unwrap();
            assert_eq!(moves.len(), sequence.len());
        }
    }

    #[test_log::test]
    fn test_piece_tables_have_distinct_keys() {
        for (table, expected) in [(BOTTOM_CROSS, 23), (BOTTOM_CORNERS, 23), (MIDDLE_EDGES, 15)] {
            let keys = table
                .iter()
                .map(|entry| (entry.key.face, entry.key.row, entry.key.col))
                .unique()
                .count();
            assert_eq!(keys, table.len());
            assert_eq!(table.len(), expected);
        }
    }

    #[test_log::test]
    fn test_last_layer_sequences_keep_first_two_layers() {
        for sequence in [CROSS_FLIP, SUNE, A_PERM, U_PERM, &[U][..]] {
            let state = play(sequence);
            assert!(!state.is_solved());
            for stage in [Stage::BottomCross, Stage::BottomCorners, Stage::MiddleEdges] {
                assert!(stage.is_satisfied(&state), "{stage}");
            }
        }
    }

    #[test_log::test]
    fn test_insertions_keep_the_bottom_layer() {
        for sequence in [SEXY, INSERT_RIGHT] {
            let state = play(sequence);
            assert!(Stage::BottomCross.is_satisfied(&state));
        }
        let state = play(INSERT_RIGHT);
        assert!(Stage::BottomCorners.is_satisfied(&state));
        assert!(!Stage::MiddleEdges.is_satisfied(&state));
    }

    #[test_log::test]
    fn test_sequence_orders() {
        // Orders of the permutations these sequences induce on a solved cube
        for (sequence, order) in [(SEXY, 6), (SUNE, 6), (A_PERM, 3), (U_PERM, 3)] {
            let moves = Frame::DEFAULT.moves(sequence).unwrap();
            let mut state = CubeState::solved();
            for i in 1..=order {
                state.apply_moves(&moves);
                assert_eq!(state.is_solved(), i == order, "{}", cube_core::format_moves(&moves));
            }
        }
    }
}
