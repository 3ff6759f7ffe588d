use cube_core::{
    Color, CubeState, Face, Facelet, Move,
    adjacency::{glued_corner_colors, glued_edge_color},
};

use crate::{
    frame::Frame,
    solver::SolverInternalError,
    stage::Stage,
    tables::{self, Entry, PieceTable},
};

/// What a stage resolver asks the driver to do next.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum StageStep {
    /// The stage goal holds; advance to the next stage.
    Complete,
    /// Play these moves and scan again.
    Moves(Vec<Move>),
}

const fn at(face: Face, row: usize, col: usize) -> Facelet {
    Facelet::new(face, row, col)
}

fn center(state: &CubeState, frame: Frame, relative: Face) -> Color {
    state.center(frame.face(relative))
}

fn cross_edge_solved(state: &CubeState, frame: Frame) -> bool {
    state[frame.facelet(at(Face::Down, 0, 1))] == state.center(Face::Down)
        && state[frame.facelet(at(Face::Front, 2, 1))] == center(state, frame, Face::Front)
}

fn bottom_corner_solved(state: &CubeState, frame: Frame) -> bool {
    state[frame.facelet(at(Face::Down, 0, 2))] == state.center(Face::Down)
        && state[frame.facelet(at(Face::Front, 2, 2))] == center(state, frame, Face::Front)
        && state[frame.facelet(at(Face::Right, 2, 0))] == center(state, frame, Face::Right)
}

fn middle_edge_solved(state: &CubeState, frame: Frame) -> bool {
    state[frame.facelet(at(Face::Front, 1, 2))] == center(state, frame, Face::Front)
        && state[frame.facelet(at(Face::Right, 1, 0))] == center(state, frame, Face::Right)
}

fn side_top_matches(state: &CubeState, side: Face, col: usize) -> bool {
    state[at(side, 0, col)] == state.center(side)
}

pub(crate) fn is_satisfied(stage: Stage, state: &CubeState) -> bool {
    let up = state.center(Face::Up);
    let frames = Frame::PRIORITY;
    match stage {
        Stage::BottomCross => frames.into_iter().all(|frame| cross_edge_solved(state, frame)),
        Stage::BottomCorners => frames
            .into_iter()
            .all(|frame| bottom_corner_solved(state, frame)),
        Stage::MiddleEdges => frames
            .into_iter()
            .all(|frame| middle_edge_solved(state, frame)),
        Stage::TopCross => tables::TOP_EDGES.iter().all(|&facelet| state[facelet] == up),
        Stage::TopCorners => state
            .face(Face::Up)
            .as_flattened()
            .iter()
            .all(|&color| color == up),
        Stage::TopCornersPermutation => Face::SIDES
            .into_iter()
            .all(|side| state[at(side, 0, 0)] == state[at(side, 0, 2)]),
        Stage::EdgeOrientationFix => Face::SIDES
            .into_iter()
            .all(|side| side_top_matches(state, side, 0) && side_top_matches(state, side, 2)),
        Stage::TopEdgesPermutation => state.is_solved(),
    }
}

/// Finds where the tracked sticker of a piece sits, relative to `frame`.
/// `tracked` is the sticker's color and `glued` checks the rest of the piece.
fn find_piece(
    state: &CubeState,
    frame: Frame,
    table: &'static PieceTable,
    tracked: Color,
    glued: impl Fn(Facelet) -> bool,
) -> Option<&'static [i8]> {
    table
        .iter()
        .find(|entry| {
            let facelet = frame.facelet(entry.key);
            state[facelet] == tracked && glued(facelet)
        })
        .map(|entry| entry.sequence)
}

fn same_pair(found: (Color, Color), a: Color, b: Color) -> bool {
    found == (a, b) || found == (b, a)
}

fn bottom_cross(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    let frame = Frame::PRIORITY
        .into_iter()
        .find(|&frame| !cross_edge_solved(state, frame))?;
    let front = center(state, frame, Face::Front);
    find_piece(
        state,
        frame,
        tables::BOTTOM_CROSS,
        state.center(Face::Down),
        |facelet| glued_edge_color(state, facelet) == Some(front),
    )
    .map(|sequence| (frame, sequence))
}

fn bottom_corners(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    let frame = Frame::PRIORITY
        .into_iter()
        .find(|&frame| !bottom_corner_solved(state, frame))?;
    let front = center(state, frame, Face::Front);
    let right = center(state, frame, Face::Right);
    find_piece(
        state,
        frame,
        tables::BOTTOM_CORNERS,
        state.center(Face::Down),
        |facelet| {
            glued_corner_colors(state, facelet).is_some_and(|found| same_pair(found, front, right))
        },
    )
    .map(|sequence| (frame, sequence))
}

fn middle_edges(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    let frame = Frame::PRIORITY
        .into_iter()
        .find(|&frame| !middle_edge_solved(state, frame))?;
    let right = center(state, frame, Face::Right);
    find_piece(
        state,
        frame,
        tables::MIDDLE_EDGES,
        center(state, frame, Face::Front),
        |facelet| glued_edge_color(state, facelet) == Some(right),
    )
    .map(|sequence| (frame, sequence))
}

/// Tries every frame in priority order and returns the first entry whose key
/// matches what `observe` reports for that frame.
fn first_match<K: PartialEq>(
    table: &'static [Entry<K>],
    observe: impl Fn(Frame) -> Option<K>,
) -> Option<(Frame, &'static [i8])> {
    Frame::PRIORITY.into_iter().find_map(|frame| {
        let observed = observe(frame)?;
        table
            .iter()
            .find(|entry| entry.key == observed)
            .map(|entry| (frame, entry.sequence))
    })
}

/// Like `first_match`, but for tables keyed by a relative side that satisfies
/// `holds` in the frame.
fn first_side_match(
    table: &'static [Entry<Face>],
    holds: impl Fn(Frame, Face) -> bool,
) -> Option<(Frame, &'static [i8])> {
    Frame::PRIORITY.into_iter().find_map(|frame| {
        table
            .iter()
            .find(|entry| holds(frame, entry.key))
            .map(|entry| (frame, entry.sequence))
    })
}

fn top_cross(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    let up = state.center(Face::Up);
    first_match(tables::TOP_CROSS, |frame| {
        Some(tables::TOP_EDGES.map(|facelet| state[frame.facelet(facelet)] == up))
    })
}

/// Zero when the up color faces up, otherwise which clockwise neighbour
/// carries it. `None` for a corner without the up color.
fn twist(state: &CubeState, facelet: Facelet) -> Option<u8> {
    let up = state.center(Face::Up);
    if state[facelet] == up {
        return Some(0);
    }
    match glued_corner_colors(state, facelet)? {
        (first, _) if first == up => Some(1),
        (_, second) if second == up => Some(2),
        _ => None,
    }
}

fn top_corners(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    first_match(tables::TOP_CORNERS_TWIST, |frame| {
        let mut twists = [0; 4];
        for (twist_of, facelet) in twists.iter_mut().zip(tables::TOP_CORNERS) {
            *twist_of = twist(state, frame.facelet(facelet))?;
        }
        Some(tables::TwistKey {
            oriented: twists.iter().filter(|&&twist| twist == 0).count(),
            front_left: twists[1],
        })
    })
}

fn top_corners_permutation(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    first_side_match(tables::TOP_CORNERS_PERMUTATION, |frame, side| {
        let side = frame.face(side);
        state[at(side, 0, 0)] == state[at(side, 0, 2)]
    })
    .or(Some((Frame::DEFAULT, tables::TOP_CORNERS_PERMUTATION_FALLBACK)))
}

fn edge_orientation_fix(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    first_side_match(tables::TOP_LAYER_ALIGNMENT, |frame, side| {
        state[frame.facelet(at(Face::Front, 0, 0))] == center(state, frame, side)
    })
}

fn top_edges_permutation(state: &CubeState) -> Option<(Frame, &'static [i8])> {
    first_side_match(tables::TOP_EDGES_PERMUTATION, |frame, side| {
        side_top_matches(state, frame.face(side), 1)
    })
    .or(Some((Frame::DEFAULT, tables::TOP_EDGES_PERMUTATION_FALLBACK)))
}

/// Scans `state` for the current stage's pattern and returns either the
/// completion sentinel or the next sequence to play.
///
/// # Errors
///
/// Fails when the stage is unfinished but nothing in its decision table
/// matches, which only happens if an earlier stage was left broken.
pub(crate) fn resolve(stage: Stage, state: &CubeState) -> Result<StageStep, SolverInternalError> {
    if is_satisfied(stage, state) {
        return Ok(StageStep::Complete);
    }
    let found = match stage {
        Stage::BottomCross => bottom_cross(state),
        Stage::BottomCorners => bottom_corners(state),
        Stage::MiddleEdges => middle_edges(state),
        Stage::TopCross => top_cross(state),
        Stage::TopCorners => top_corners(state),
        Stage::TopCornersPermutation => top_corners_permutation(state),
        Stage::EdgeOrientationFix => edge_orientation_fix(state),
        Stage::TopEdgesPermutation => top_edges_permutation(state),
    };
    let (frame, sequence) = found.ok_or(SolverInternalError::NoPatternMatched { stage })?;
    Ok(StageStep::Moves(frame.moves(sequence)?))
}
