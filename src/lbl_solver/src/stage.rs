use std::fmt;

use cube_core::CubeState;

use crate::resolver;

/// The eight solving stages in the only order they may be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    BottomCross,
    BottomCorners,
    MiddleEdges,
    TopCross,
    TopCorners,
    TopCornersPermutation,
    /// Turns the top layer until every side's top stickers match its center.
    EdgeOrientationFix,
    TopEdgesPermutation,
}

impl Stage {
    pub const ALL: [Self; 8] = [
        Self::BottomCross,
        Self::BottomCorners,
        Self::MiddleEdges,
        Self::TopCross,
        Self::TopCorners,
        Self::TopCornersPermutation,
        Self::EdgeOrientationFix,
        Self::TopEdgesPermutation,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The stage that follows this one, or `None` after the last.
    #[must_use]
    pub const fn advance(self) -> Option<Self> {
        match self {
            Self::BottomCross => Some(Self::BottomCorners),
            Self::BottomCorners => Some(Self::MiddleEdges),
            Self::MiddleEdges => Some(Self::TopCross),
            Self::TopCross => Some(Self::TopCorners),
            Self::TopCorners => Some(Self::TopCornersPermutation),
            Self::TopCornersPermutation => Some(Self::EdgeOrientationFix),
            Self::EdgeOrientationFix => Some(Self::TopEdgesPermutation),
            Self::TopEdgesPermutation => None,
        }
    }

    /// Whether this stage's own goal holds. Goals of earlier stages are not
    /// checked here.
    #[must_use]
    pub fn is_satisfied(self, state: &CubeState) -> bool {
        resolver::is_satisfied(self, state)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BottomCross => "bottom cross",
            Self::BottomCorners => "bottom corners",
            Self::MiddleEdges => "middle edges",
            Self::TopCross => "top cross",
            Self::TopCorners => "top corners",
            Self::TopCornersPermutation => "top corners permutation",
            Self::EdgeOrientationFix => "top layer alignment",
            Self::TopEdgesPermutation => "top edges permutation",
        };
        f.write_str(name)
    }
}
