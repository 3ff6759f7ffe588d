//! Which facelets are glued together on the same physical piece.
//!
//! Everything here is a constant table. `EDGE_SLOTS` and `CORNER_SLOTS` list
//! the pieces; `EDGE_NEIGHBOURS` and `CORNER_NEIGHBOURS` answer the same
//! question keyed by face and position, and the tests check that both forms
//! agree.

use crate::{Color, CornerPosition, CubeState, EdgePosition, Face, Facelet};

const fn at(face: Face, row: usize, col: usize) -> Facelet {
    Facelet::new(face, row, col)
}

use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// The twelve edge slots in the order `UR UF UL UB DR DF DL DB FR FL BL BR`.
/// The first facelet of each slot is the one used to judge edge flip.
pub const EDGE_SLOTS: [[Facelet; 2]; 12] = [
    [at(U, 1, 2), at(R, 0, 1)],
    [at(U, 2, 1), at(F, 0, 1)],
    [at(U, 1, 0), at(L, 0, 1)],
    [at(U, 0, 1), at(B, 0, 1)],
    [at(D, 1, 2), at(R, 2, 1)],
    [at(D, 0, 1), at(F, 2, 1)],
    [at(D, 1, 0), at(L, 2, 1)],
    [at(D, 2, 1), at(B, 2, 1)],
    [at(F, 1, 2), at(R, 1, 0)],
    [at(F, 1, 0), at(L, 1, 2)],
    [at(B, 1, 2), at(L, 1, 0)],
    [at(B, 1, 0), at(R, 1, 2)],
];

/// The eight corner slots in the order `URF UFL ULB UBR DFR DLF DBL DRB`.
/// Each slot starts at its `Up` or `Down` facelet and continues clockwise as
/// seen from outside the cube.
pub const CORNER_SLOTS: [[Facelet; 3]; 8] = [
    [at(U, 2, 2), at(R, 0, 0), at(F, 0, 2)],
    [at(U, 2, 0), at(F, 0, 0), at(L, 0, 2)],
    [at(U, 0, 0), at(L, 0, 0), at(B, 0, 2)],
    [at(U, 0, 2), at(B, 0, 0), at(R, 0, 2)],
    [at(D, 0, 2), at(F, 2, 2), at(R, 2, 0)],
    [at(D, 0, 0), at(L, 2, 2), at(F, 2, 0)],
    [at(D, 2, 0), at(B, 2, 2), at(L, 2, 0)],
    [at(D, 2, 2), at(R, 2, 2), at(B, 2, 0)],
];

/// `EDGE_NEIGHBOURS[face][position]` is the facelet on the same edge piece as
/// the `position` edge facelet of `face`. Positions are in `EdgePosition::ALL`
/// order.
pub const EDGE_NEIGHBOURS: [[Facelet; 4]; 6] = [
    // Up
    [at(B, 0, 1), at(R, 0, 1), at(F, 0, 1), at(L, 0, 1)],
    // Down
    [at(F, 2, 1), at(R, 2, 1), at(B, 2, 1), at(L, 2, 1)],
    // Front
    [at(U, 2, 1), at(R, 1, 0), at(D, 0, 1), at(L, 1, 2)],
    // Back
    [at(U, 0, 1), at(L, 1, 0), at(D, 2, 1), at(R, 1, 2)],
    // Left
    [at(U, 1, 0), at(F, 1, 0), at(D, 1, 0), at(B, 1, 2)],
    // Right
    [at(U, 1, 2), at(B, 1, 0), at(D, 1, 2), at(F, 1, 2)],
];

/// `CORNER_NEIGHBOURS[face][position]` is the other two facelets of the
/// corner piece, continuing clockwise from the `position` corner facelet of
/// `face`. Positions are in `CornerPosition::ALL` order.
pub const CORNER_NEIGHBOURS: [[[Facelet; 2]; 4]; 6] = [
    // Up
    [
        [at(L, 0, 0), at(B, 0, 2)],
        [at(B, 0, 0), at(R, 0, 2)],
        [at(R, 0, 0), at(F, 0, 2)],
        [at(F, 0, 0), at(L, 0, 2)],
    ],
    // Down
    [
        [at(L, 2, 2), at(F, 2, 0)],
        [at(F, 2, 2), at(R, 2, 0)],
        [at(R, 2, 2), at(B, 2, 0)],
        [at(B, 2, 2), at(L, 2, 0)],
    ],
    // Front
    [
        [at(L, 0, 2), at(U, 2, 0)],
        [at(U, 2, 2), at(R, 0, 0)],
        [at(R, 2, 0), at(D, 0, 2)],
        [at(D, 0, 0), at(L, 2, 2)],
    ],
    // Back
    [
        [at(R, 0, 2), at(U, 0, 2)],
        [at(U, 0, 0), at(L, 0, 0)],
        [at(L, 2, 0), at(D, 2, 0)],
        [at(D, 2, 2), at(R, 2, 2)],
    ],
    // Left
    [
        [at(B, 0, 2), at(U, 0, 0)],
        [at(U, 2, 0), at(F, 0, 0)],
        [at(F, 2, 0), at(D, 0, 0)],
        [at(D, 2, 0), at(B, 2, 2)],
    ],
    // Right
    [
        [at(F, 0, 2), at(U, 2, 2)],
        [at(U, 0, 2), at(B, 0, 0)],
        [at(B, 2, 0), at(D, 2, 2)],
        [at(D, 0, 2), at(F, 2, 2)],
    ],
];

#[must_use]
pub const fn edge_neighbour(face: Face, position: EdgePosition) -> Facelet {
    EDGE_NEIGHBOURS[face.index()][position as usize]
}

#[must_use]
pub const fn corner_neighbours(face: Face, position: CornerPosition) -> [Facelet; 2] {
    CORNER_NEIGHBOURS[face.index()][position as usize]
}

/// The color glued to the `position` edge facelet of `face`.
#[must_use]
pub fn adjacent_edge_color(state: &CubeState, face: Face, position: EdgePosition) -> Color {
    state[edge_neighbour(face, position)]
}

/// The two colors glued to the `position` corner facelet of `face`, in
/// clockwise order.
#[must_use]
pub fn adjacent_corner_colors(
    state: &CubeState,
    face: Face,
    position: CornerPosition,
) -> (Color, Color) {
    let [first, second] = corner_neighbours(face, position);
    (state[first], state[second])
}

/// Like `adjacent_edge_color` but keyed by facelet. `None` unless the facelet
/// is an edge facelet.
#[must_use]
pub fn glued_edge_color(state: &CubeState, facelet: Facelet) -> Option<Color> {
    EdgePosition::from_coords(facelet.row, facelet.col)
        .map(|position| adjacent_edge_color(state, facelet.face, position))
}

/// Like `adjacent_corner_colors` but keyed by facelet. `None` unless the
/// facelet is a corner facelet.
#[must_use]
pub fn glued_corner_colors(state: &CubeState, facelet: Facelet) -> Option<(Color, Color)> {
    CornerPosition::from_coords(facelet.row, facelet.col)
        .map(|position| adjacent_corner_colors(state, facelet.face, position))
}
