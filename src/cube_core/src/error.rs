use thiserror::Error;

use crate::{Color, Face};

/// A color, face, or move identifier that lies outside its enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Face index {0} is out of range. Expected 0 to 5")]
    FaceIndex(u8),
    #[error("Color index {0} is out of range. Expected 0 to 5")]
    ColorIndex(u8),
    #[error("Move index {0} is out of range. Expected 0 to 11")]
    MoveIndex(u8),
    #[error("Signed move {0} is out of range. Expected 1 to 6 or -1 to -6")]
    SignedMove(i8),
    #[error("Unknown color token `{0}`")]
    ColorToken(char),
    #[error("Unknown face token `{0}`")]
    FaceToken(String),
    #[error("Unknown move token `{0}`")]
    MoveToken(String),
}

/// A facelet arrangement that no sequence of face turns can reach from the
/// solved cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedStateError {
    #[error("Expected 54 facelets but found {0}")]
    FaceletCount(usize),
    #[error("Unknown color token `{token}` at facelet {index}")]
    ColorToken { index: usize, token: char },
    #[error("Color {color} appears {count} times. Every color must appear exactly 9 times")]
    ColorCount { color: Color, count: usize },
    #[error("The center of {face} is {found} but must be {expected}")]
    Center {
        face: Face,
        expected: Color,
        found: Color,
    },
    #[error("The edge slot {slot} holds a color pair that no edge piece has")]
    InvalidEdge { slot: usize },
    #[error("The corner slot {slot} holds a color triple that no corner piece has")]
    InvalidCorner { slot: usize },
    #[error("The edge slot {slot} holds a piece that also appears elsewhere")]
    DuplicateEdge { slot: usize },
    #[error("The corner slot {slot} holds a piece that also appears elsewhere")]
    DuplicateCorner { slot: usize },
    #[error("The corner twists do not sum to a multiple of three")]
    TwistedCorner,
    #[error("An odd number of edges are flipped")]
    FlippedEdge,
    #[error("The corner and edge permutations differ in parity")]
    ParityMismatch,
}
