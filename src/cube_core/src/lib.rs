#![warn(clippy::pedantic)]

pub mod adjacency;
pub mod error;
pub mod moves;
pub mod state;
pub mod validate;
pub mod vocab;

pub use error::{DescriptorError, MalformedStateError};
pub use moves::{Move, format_moves, invert_moves, parse_moves};
pub use state::{CubeState, Snapshot};
pub use vocab::{Color, CornerPosition, EdgePosition, Face, Facelet};
