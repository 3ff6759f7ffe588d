//! Reachability check for externally supplied colorings. A coloring passes
//! exactly when some sequence of face turns produces it from solved.

use crate::{
    Color, Face, Facelet, MalformedStateError, Snapshot,
    adjacency::{CORNER_SLOTS, EDGE_SLOTS},
};

fn color_at(snapshot: &Snapshot, facelet: Facelet) -> Color {
    snapshot[facelet.face.index()][facelet.row][facelet.col]
}

/// Even permutations yield `false`.
fn is_odd(permutation: &[usize]) -> bool {
    let mut visited = vec![false; permutation.len()];
    let mut transpositions = 0;
    for start in 0..permutation.len() {
        let mut i = start;
        let mut cycle_len = 0;
        while !visited[i] {
            visited[i] = true;
            i = permutation[i];
            cycle_len += 1;
        }
        if cycle_len > 0 {
            transpositions += cycle_len - 1;
        }
    }
    transpositions % 2 == 1
}

/// Checks centers, color counts, piece identity, twist, flip, and parity.
///
/// # Errors
///
/// Returns the first violated condition.
pub fn validate(snapshot: &Snapshot) -> Result<(), MalformedStateError> {
    for face in Face::ALL {
        let found = snapshot[face.index()][1][1];
        if found != face.canonical_color() {
            return Err(MalformedStateError::Center {
                face,
                expected: face.canonical_color(),
                found,
            });
        }
    }

    let mut counts = [0; 6];
    for &color in snapshot.as_flattened().as_flattened() {
        counts[color.index()] += 1;
    }
    if let Some((color, &count)) = Color::ALL.into_iter().zip(&counts).find(|(_, c)| **c != 9) {
        return Err(MalformedStateError::ColorCount { color, count });
    }

    let mut edge_permutation = [0; 12];
    let mut edge_seen = [false; 12];
    let mut flips = 0;
    for (slot, facelets) in EDGE_SLOTS.iter().enumerate() {
        let faces = facelets.map(|facelet| color_at(snapshot, facelet).home_face());
        let (piece, flipped) = EDGE_SLOTS
            .iter()
            .map(|home| home.map(|facelet| facelet.face))
            .enumerate()
            .find_map(|(piece, home)| {
                if faces == home {
                    Some((piece, false))
                } else if faces == [home[1], home[0]] {
                    Some((piece, true))
                } else {
                    None
                }
            })
            .ok_or(MalformedStateError::InvalidEdge { slot })?;
        if edge_seen[piece] {
            return Err(MalformedStateError::DuplicateEdge { slot });
        }
        edge_seen[piece] = true;
        edge_permutation[slot] = piece;
        flips += usize::from(flipped);
    }

    let mut corner_permutation = [0; 8];
    let mut corner_seen = [false; 8];
    let mut twists = 0;
    for (slot, facelets) in CORNER_SLOTS.iter().enumerate() {
        let faces = facelets.map(|facelet| color_at(snapshot, facelet).home_face());
        // A piece matches when its faces appear in the same cyclic order,
        // starting from the slot facelet that holds its Up or Down color
        let (piece, twist) = CORNER_SLOTS
            .iter()
            .map(|home| home.map(|facelet| facelet.face))
            .enumerate()
            .find_map(|(piece, home)| {
                (0..3)
                    .find(|&twist| (0..3).all(|j| faces[(twist + j) % 3] == home[j]))
                    .map(|twist| (piece, twist))
            })
            .ok_or(MalformedStateError::InvalidCorner { slot })?;
        if corner_seen[piece] {
            return Err(MalformedStateError::DuplicateCorner { slot });
        }
        corner_seen[piece] = true;
        corner_permutation[slot] = piece;
        twists += twist;
    }

    if twists % 3 != 0 {
        return Err(MalformedStateError::TwistedCorner);
    }
    if flips % 2 != 0 {
        return Err(MalformedStateError::FlippedEdge);
    }
    if is_odd(&corner_permutation) != is_odd(&edge_permutation) {
        return Err(MalformedStateError::ParityMismatch);
    }
    Ok(())
}
