use std::{fmt, str::FromStr};

use crate::DescriptorError;

/// One of the six sticker colors. The discriminants line up with `Face` so
/// that every color has exactly one home face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Yellow,
    White,
    Green,
    Blue,
    Red,
    Orange,
}

/// One of the six faces, named by where it sits in the fixed reference
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

/// The four edge facelets of a face, viewed from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgePosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// The four corner facelets of a face, viewed from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerPosition {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// A single sticker location: a face plus a row and column in its 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Self::Yellow,
        Self::White,
        Self::Green,
        Self::Blue,
        Self::Red,
        Self::Orange,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The face whose center carries this color.
    #[must_use]
    pub const fn home_face(self) -> Face {
        Face::ALL[self as usize]
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Yellow => 'Y',
            Self::White => 'W',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Red => 'R',
            Self::Orange => 'O',
        }
    }

    /// # Errors
    ///
    /// Fails if the letter is not one of `YWGBRO`.
    pub fn from_letter(letter: char) -> Result<Self, DescriptorError> {
        Self::ALL
            .into_iter()
            .find(|color| color.letter() == letter.to_ascii_uppercase())
            .ok_or(DescriptorError::ColorToken(letter))
    }
}

impl TryFrom<u8> for Color {
    type Error = DescriptorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(DescriptorError::ColorIndex(value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Orange => "orange",
        };
        f.write_str(name)
    }
}

impl Face {
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
    ];

    /// The side faces in clockwise order when looking down at `Up`.
    pub const SIDES: [Self; 4] = [Self::Front, Self::Right, Self::Back, Self::Left];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color of this face's center in the solved cube.
    #[must_use]
    pub const fn canonical_color(self) -> Color {
        Color::ALL[self as usize]
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = DescriptorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(DescriptorError::FaceIndex(value))
    }
}

impl FromStr for Face {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::Up),
            "D" => Ok(Face::Down),
            "F" => Ok(Face::Front),
            "B" => Ok(Face::Back),
            "L" => Ok(Face::Left),
            "R" => Ok(Face::Right),
            _ => Err(DescriptorError::FaceToken(s.to_owned())),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

impl EdgePosition {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    #[must_use]
    pub const fn coords(self) -> (usize, usize) {
        match self {
            Self::Top => (0, 1),
            Self::Right => (1, 2),
            Self::Bottom => (2, 1),
            Self::Left => (1, 0),
        }
    }

    #[must_use]
    pub const fn from_coords(row: usize, col: usize) -> Option<Self> {
        match (row, col) {
            (0, 1) => Some(Self::Top),
            (1, 2) => Some(Self::Right),
            (2, 1) => Some(Self::Bottom),
            (1, 0) => Some(Self::Left),
            _ => None,
        }
    }
}

impl CornerPosition {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    #[must_use]
    pub const fn coords(self) -> (usize, usize) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, 2),
            Self::BottomRight => (2, 2),
            Self::BottomLeft => (2, 0),
        }
    }

    #[must_use]
    pub const fn from_coords(row: usize, col: usize) -> Option<Self> {
        match (row, col) {
            (0, 0) => Some(Self::TopLeft),
            (0, 2) => Some(Self::TopRight),
            (2, 2) => Some(Self::BottomRight),
            (2, 0) => Some(Self::BottomLeft),
            _ => None,
        }
    }
}

impl Facelet {
    #[must_use]
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }

    #[must_use]
    pub const fn center(face: Face) -> Self {
        Self::new(face, 1, 1)
    }

    #[must_use]
    pub const fn edge(face: Face, position: EdgePosition) -> Self {
        let (row, col) = position.coords();
        Self::new(face, row, col)
    }

    #[must_use]
    pub const fn corner(face: Face, position: CornerPosition) -> Self {
        let (row, col) = position.coords();
        Self::new(face, row, col)
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.face.letter(), self.row, self.col)
    }
}
