use std::{fmt, ops::Index, str::FromStr};

use crate::{Color, Face, Facelet, MalformedStateError, Move, validate::validate};

/// Colors indexed by `[face][row][col]`, faces in `Face::ALL` order.
pub type Snapshot = [[[Color; 3]; 3]; 6];

const fn at(face: Face, row: usize, col: usize) -> Facelet {
    Facelet::new(face, row, col)
}

use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// The twelve facelets bordering each face, as four strips of three. A
/// clockwise turn carries strip `i` onto strip `i + 1`, element by element.
const EDGE_RINGS: [[[Facelet; 3]; 4]; 6] = [
    // Up
    [
        [at(F, 0, 0), at(F, 0, 1), at(F, 0, 2)],
        [at(L, 0, 0), at(L, 0, 1), at(L, 0, 2)],
        [at(B, 0, 0), at(B, 0, 1), at(B, 0, 2)],
        [at(R, 0, 0), at(R, 0, 1), at(R, 0, 2)],
    ],
    // Down
    [
        [at(F, 2, 0), at(F, 2, 1), at(F, 2, 2)],
        [at(R, 2, 0), at(R, 2, 1), at(R, 2, 2)],
        [at(B, 2, 0), at(B, 2, 1), at(B, 2, 2)],
        [at(L, 2, 0), at(L, 2, 1), at(L, 2, 2)],
    ],
    // Front
    [
        [at(U, 2, 0), at(U, 2, 1), at(U, 2, 2)],
        [at(R, 0, 0), at(R, 1, 0), at(R, 2, 0)],
        [at(D, 0, 2), at(D, 0, 1), at(D, 0, 0)],
        [at(L, 2, 2), at(L, 1, 2), at(L, 0, 2)],
    ],
    // Back
    [
        [at(U, 0, 2), at(U, 0, 1), at(U, 0, 0)],
        [at(L, 0, 0), at(L, 1, 0), at(L, 2, 0)],
        [at(D, 2, 0), at(D, 2, 1), at(D, 2, 2)],
        [at(R, 2, 2), at(R, 1, 2), at(R, 0, 2)],
    ],
    // Left
    [
        [at(U, 0, 0), at(U, 1, 0), at(U, 2, 0)],
        [at(F, 0, 0), at(F, 1, 0), at(F, 2, 0)],
        [at(D, 0, 0), at(D, 1, 0), at(D, 2, 0)],
        [at(B, 2, 2), at(B, 1, 2), at(B, 0, 2)],
    ],
    // Right
    [
        [at(F, 0, 2), at(F, 1, 2), at(F, 2, 2)],
        [at(U, 0, 2), at(U, 1, 2), at(U, 2, 2)],
        [at(B, 2, 0), at(B, 1, 0), at(B, 0, 0)],
        [at(D, 0, 2), at(D, 1, 2), at(D, 2, 2)],
    ],
];

/// The 54 facelet colors of a cube in the fixed reference orientation.
///
/// Turns are the only way to mutate a state and snapshots are validated on the
/// way in, so every `CubeState` is reachable from solved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    facelets: Snapshot,
}

impl CubeState {
    /// The solved cube: every face uniformly its canonical color.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            facelets: Face::ALL.map(|face| [[face.canonical_color(); 3]; 3]),
        }
    }

    /// Builds a state from externally supplied colors after checking that it
    /// is reachable from solved.
    ///
    /// # Errors
    ///
    /// See `MalformedStateError` for every way a snapshot can be rejected.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, MalformedStateError> {
        validate(snapshot)?;
        Ok(Self {
            facelets: *snapshot,
        })
    }

    /// Exposes the colors read-only for rendering or hand-off.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.facelets
    }

    #[must_use]
    pub fn facelets(&self) -> &Snapshot {
        &self.facelets
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[[Color; 3]; 3] {
        &self.facelets[face.index()]
    }

    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.facelets[face.index()][1][1]
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let center = self.center(face);
            self.face(face).as_flattened().iter().all(|&color| color == center)
        })
    }

    /// Turns `face` a quarter turn.
    pub fn turn(&mut self, face: Face, clockwise: bool) {
        self.rotate_face(face, clockwise);
        self.cycle_adjacent_edges(face, clockwise);
    }

    pub fn apply(&mut self, move_: Move) {
        self.turn(move_.face(), move_.is_clockwise());
    }

    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &move_ in moves {
            self.apply(move_);
        }
    }

    /// Applies `move_count` uniformly random quarter turns drawn from `rng`
    /// and returns them.
    pub fn scramble(&mut self, move_count: usize, rng: &mut fastrand::Rng) -> Vec<Move> {
        (0..move_count)
            .map(|_| {
                let move_ = Move::ALL[rng.usize(..Move::ALL.len())];
                self.apply(move_);
                move_
            })
            .collect()
    }

    /// A solved cube scrambled by `move_count` turns from a seeded generator,
    /// together with the turns.
    #[must_use]
    pub fn scrambled(move_count: usize, seed: u64) -> (Self, Vec<Move>) {
        let mut state = Self::solved();
        let moves = state.scramble(move_count, &mut fastrand::Rng::with_seed(seed));
        (state, moves)
    }

    /// Serializes to 54 color letters, faces in `Face::ALL` order and each
    /// face row by row.
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        self.facelets
            .as_flattened()
            .as_flattened()
            .iter()
            .map(|color| color.letter())
            .collect()
    }

    fn rotate_face(&mut self, face: Face, clockwise: bool) {
        let old = self.facelets[face.index()];
        let grid = &mut self.facelets[face.index()];
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, color) in line.iter_mut().enumerate() {
                *color = if clockwise {
                    old[2 - col][row]
                } else {
                    old[col][2 - row]
                };
            }
        }
    }

    fn cycle_adjacent_edges(&mut self, face: Face, clockwise: bool) {
        let ring = EDGE_RINGS[face.index()];
        let strips = ring.map(|strip| strip.map(|facelet| self[facelet]));
        for (i, strip) in ring.iter().enumerate() {
            let source = if clockwise { (i + 3) % 4 } else { (i + 1) % 4 };
            for (k, facelet) in strip.iter().enumerate() {
                self.facelets[facelet.face.index()][facelet.row][facelet.col] = strips[source][k];
            }
        }
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Facelet> for CubeState {
    type Output = Color;

    fn index(&self, facelet: Facelet) -> &Self::Output {
        &self.facelets[facelet.face.index()][facelet.row][facelet.col]
    }
}

impl FromStr for CubeState {
    type Err = MalformedStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        if tokens.len() != 54 {
            return Err(MalformedStateError::FaceletCount(tokens.len()));
        }
        let mut snapshot = Self::solved().facelets;
        for (index, (&token, slot)) in tokens
            .iter()
            .zip(snapshot.as_flattened_mut().as_flattened_mut())
            .enumerate()
        {
            *slot = Color::from_letter(token)
                .map_err(|_| MalformedStateError::ColorToken { index, token })?;
        }
        Self::from_snapshot(&snapshot)
    }
}

/// Renders the unfolded cube with `Up` above and `Down` below the row of
/// side faces `Left Front Right Back`.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_of = |face: Face, row: usize| -> String {
            self.face(face)[row].iter().map(|color| color.letter()).collect()
        };
        for row in 0..3 {
            writeln!(f, "    {}", row_of(Face::Up, row))?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row_of(Face::Left, row),
                row_of(Face::Front, row),
                row_of(Face::Right, row),
                row_of(Face::Back, row)
            )?;
        }
        for row in 0..3 {
            writeln!(f, "    {}", row_of(Face::Down, row))?;
        }
        Ok(())
    }
}
