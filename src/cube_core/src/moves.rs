use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{DescriptorError, Face};

/// A quarter turn of one face. Clockwise is judged while looking directly at
/// the face from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    face: Face,
    clockwise: bool,
}

impl Move {
    /// Every quarter turn in index order.
    pub const ALL: [Self; 12] = {
        let mut all = [Self::new(Face::Up, true); 12];
        let mut i = 0;
        while i < all.len() {
            all[i] = Self::new(Face::ALL[i / 2], i % 2 == 0);
            i += 1;
        }
        all
    };

    #[must_use]
    pub const fn new(face: Face, clockwise: bool) -> Self {
        Self { face, clockwise }
    }

    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        self.clockwise
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.face, !self.clockwise)
    }

    /// Dense encoding in `0..12`: twice the face index, plus one when
    /// counter-clockwise.
    #[must_use]
    pub const fn index(self) -> u8 {
        // Face indices are below six so this never truncates
        #[allow(clippy::cast_possible_truncation)]
        let face = self.face.index() as u8;
        face * 2 + !self.clockwise as u8
    }

    /// # Errors
    ///
    /// Fails if `index` is 12 or more.
    pub fn from_index(index: u8) -> Result<Self, DescriptorError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(DescriptorError::MoveIndex(index))
    }

    /// Signed encoding: the face index plus one, negated when
    /// counter-clockwise.
    #[must_use]
    pub const fn signed(self) -> i8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let id = self.face.index() as i8 + 1;
        if self.clockwise { id } else { -id }
    }

    /// # Errors
    ///
    /// Fails on zero or on a magnitude above six.
    pub fn from_signed(signed: i8) -> Result<Self, DescriptorError> {
        let face = signed
            .unsigned_abs()
            .checked_sub(1)
            .and_then(|index| Face::try_from(index).ok())
            .ok_or(DescriptorError::SignedMove(signed))?;
        Ok(Self::new(face, signed > 0))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clockwise {
            write!(f, "{}", self.face.letter())
        } else {
            write!(f, "{}'", self.face.letter())
        }
    }
}

impl FromStr for Move {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face, clockwise) = match s.strip_suffix('\'') {
            Some(face) => (face, false),
            None => (s, true),
        };
        let face = face
            .parse::<Face>()
            .map_err(|_| DescriptorError::MoveToken(s.to_owned()))?;
        Ok(Self::new(face, clockwise))
    }
}

/// Parses whitespace separated move tokens such as `R U R' U2`. A trailing
/// `2` expands to two clockwise quarter turns.
///
/// # Errors
///
/// Fails on the first token that is not a move.
pub fn parse_moves(sequence: &str) -> Result<Vec<Move>, DescriptorError> {
    let mut moves = vec![];
    for token in sequence.split_whitespace() {
        match token.strip_suffix('2') {
            Some(quarter) => {
                let move_ = quarter
                    .parse::<Move>()
                    .map_err(|_| DescriptorError::MoveToken(token.to_owned()))?;
                moves.extend([move_, move_]);
            }
            None => moves.push(token.parse()?),
        }
    }
    Ok(moves)
}

#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

/// The sequence that undoes `moves`.
#[must_use]
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.opposite()).collect()
}
