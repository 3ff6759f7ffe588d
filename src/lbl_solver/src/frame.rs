use cube_core::{DescriptorError, Face, Facelet, Move};

/// A viewpoint reached by turning the whole cube about the vertical axis.
/// Decision tables are written for the default viewpoint; a frame maps
/// their relative faces, facelets, and moves onto the fixed cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    /// Quarter turns from the default viewpoint, clockwise seen from above.
    turns: usize,
}

impl Frame {
    /// Candidate viewpoints in the order they are tried, by which side faces
    /// the solver: `Front`, `Right`, `Back`, then `Left`.
    pub(crate) const PRIORITY: [Self; 4] = [
        Self { turns: 0 },
        Self { turns: 1 },
        Self { turns: 2 },
        Self { turns: 3 },
    ];

    pub(crate) const DEFAULT: Self = Self::PRIORITY[0];

    pub(crate) fn front(self) -> Face {
        Face::SIDES[self.turns]
    }

    pub(crate) fn face(self, relative: Face) -> Face {
        match Face::SIDES.iter().position(|&side| side == relative) {
            Some(i) => Face::SIDES[(i + self.turns) % 4],
            None => relative,
        }
    }

    pub(crate) fn facelet(self, relative: Facelet) -> Facelet {
        let (mut row, mut col) = (relative.row, relative.col);
        for _ in 0..self.turns {
            (row, col) = match relative.face {
                Face::Up => (2 - col, row),
                Face::Down => (col, 2 - row),
                _ => (row, col),
            };
        }
        Facelet::new(self.face(relative.face), row, col)
    }

    /// Decodes a signed relative move sequence into absolute moves.
    pub(crate) fn moves(self, sequence: &[i8]) -> Result<Vec<Move>, DescriptorError> {
        sequence
            .iter()
            .map(|&signed| {
                let relative = Move::from_signed(signed)?;
                Ok(Move::new(self.face(relative.face()), relative.is_clockwise()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{CubeState, adjacency::glued_edge_color, parse_moves};

    use super::*;

    #[test_log::test]
    fn test_default_frame_is_identity() {
        for face in Face::ALL {
            assert_eq!(Frame::DEFAULT.face(face), face);
            for row in 0..3 {
                for col in 0..3 {
                    let facelet = Facelet::new(face, row, col);
                    assert_eq!(Frame::DEFAULT.facelet(facelet), facelet);
                }
            }
        }
    }

    #[test_log::test]
    fn test_frame_faces() {
        let right = Frame::PRIORITY[1];
        assert_eq!(right.front(), Face::Right);
        assert_eq!(right.face(Face::Front), Face::Right);
        assert_eq!(right.face(Face::Right), Face::Back);
        assert_eq!(right.face(Face::Left), Face::Front);
        assert_eq!(right.face(Face::Up), Face::Up);
        assert_eq!(Frame::PRIORITY[3].front(), Face::Left);
    }

    #[test_log::test]
    fn test_frame_facelets() {
        let right = Frame::PRIORITY[1];
        // The front-up edge of the turned view is the right-up edge
        assert_eq!(
            right.facelet(Facelet::new(Face::Up, 2, 1)),
            Facelet::new(Face::Up, 1, 2)
        );
        assert_eq!(
            right.facelet(Facelet::new(Face::Down, 0, 1)),
            Facelet::new(Face::Down, 1, 2)
        );
        assert_eq!(
            right.facelet(Facelet::new(Face::Down, 0, 0)),
            Facelet::new(Face::Down, 0, 2)
        );
        let back = Frame::PRIORITY[2];
        assert_eq!(
            back.facelet(Facelet::new(Face::Up, 2, 1)),
            Facelet::new(Face::Up, 0, 1)
        );
        assert_eq!(
            back.facelet(Facelet::new(Face::Front, 1, 2)),
            Facelet::new(Face::Back, 1, 2)
        );
    }

    #[test_log::test]
    fn test_frames_preserve_adjacency() {
        let (state, _) = CubeState::scrambled(30, 3);
        let up_front = Facelet::new(Face::Up, 2, 1);
        let front_up = Facelet::new(Face::Front, 0, 1);
        for frame in Frame::PRIORITY {
            assert_eq!(
                glued_edge_color(&state, frame.facelet(up_front)),
                Some(state[frame.facelet(front_up)])
            );
        }
    }

    #[test_log::test]
    fn test_frame_moves() {
        let right = Frame::PRIORITY[1];
        assert_eq!(
            right.moves(&[-6, 3, 1]).unwrap(),
            parse_moves("B' R U").unwrap()
        );
        assert!(right.moves(&[0]).is_err());
    }
}
