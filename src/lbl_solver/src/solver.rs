use std::collections::VecDeque;

use cube_core::{CubeState, DescriptorError, MalformedStateError, Move, Snapshot, format_moves};
use log::{debug, info, trace};
use thiserror::Error;

use crate::{
    config::SolverConfig,
    resolver::{self, StageStep},
    stage::Stage,
    start, success, working,
};

/// A broken contract inside the solver. None of these are reachable from a
/// valid cube; they exist so that a bad table entry fails loudly instead of
/// looping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverInternalError {
    #[error("The {stage} stage reported completion but its goal does not hold")]
    CompletionNotSatisfied { stage: Stage },
    #[error("The {stage} stage produced an empty move sequence")]
    EmptySequence { stage: Stage },
    #[error("No decision table entry matched during the {stage} stage")]
    NoPatternMatched { stage: Stage },
    #[error("A sequence played during the {stage} stage undid the {broken} stage")]
    StageRegressed { stage: Stage, broken: Stage },
    #[error("The solution exceeded the move ceiling of {ceiling}")]
    MoveCeilingExceeded { ceiling: usize },
    #[error("Decision table entry could not be decoded: {0}")]
    Table(#[from] DescriptorError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Rejected the input cube: {0}")]
    Malformed(#[from] MalformedStateError),
    #[error(transparent)]
    Internal(#[from] SolverInternalError),
}

/// One solve in progress: the working copy of the cube, the current stage,
/// and every move played so far.
#[derive(Debug, Clone)]
pub struct SolveSession {
    state: CubeState,
    current: Option<Stage>,
    moves: Vec<Move>,
    config: SolverConfig,
}

impl SolveSession {
    #[must_use]
    pub fn new(state: CubeState, config: SolverConfig) -> Self {
        Self {
            state,
            current: Some(Stage::BottomCross),
            moves: vec![],
            config,
        }
    }

    /// The working copy, with every returned sequence already applied.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// `None` once every stage is complete.
    #[must_use]
    pub fn current_stage(&self) -> Option<Stage> {
        self.current
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Which stages are complete, indexed like `Stage::ALL`. A flag never
    /// goes back to `false` within a session.
    #[must_use]
    pub fn stage_flags(&self) -> [bool; 8] {
        Stage::ALL.map(|stage| self.current.is_none_or(|current| stage < current))
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Advances through complete stages until one asks for moves, applies
    /// that sequence to the working copy, and returns it. Returns `None` once
    /// the cube is solved.
    ///
    /// # Errors
    ///
    /// Fails when a resolver breaks its contract or when the move ceiling
    /// would be exceeded. See `SolverInternalError`.
    pub fn next_sequence(&mut self) -> Result<Option<Vec<Move>>, SolverInternalError> {
        while let Some(stage) = self.current {
            match resolver::resolve(stage, &self.state)? {
                StageStep::Complete => {
                    if !stage.is_satisfied(&self.state) {
                        return Err(SolverInternalError::CompletionNotSatisfied { stage });
                    }
                    debug!(
                        working!("Completed the {} stage at {} moves"),
                        stage,
                        self.moves.len()
                    );
                    self.current = stage.advance();
                }
                StageStep::Moves(sequence) => {
                    if sequence.is_empty() {
                        return Err(SolverInternalError::EmptySequence { stage });
                    }
                    let ceiling = self.config.move_ceiling;
                    if self.moves.len() + sequence.len() > ceiling {
                        return Err(SolverInternalError::MoveCeilingExceeded { ceiling });
                    }
                    trace!("{stage}: {}", format_moves(&sequence));
                    self.state.apply_moves(&sequence);
                    self.moves.extend_from_slice(&sequence);
                    if self.config.check_invariants {
                        self.check_completed(stage)?;
                    }
                    return Ok(Some(sequence));
                }
            }
        }
        Ok(None)
    }

    /// Plays sequences until the cube is solved.
    ///
    /// # Errors
    ///
    /// See `next_sequence`.
    pub fn run(&mut self) -> Result<(), SolverInternalError> {
        while self.next_sequence()?.is_some() {}
        Ok(())
    }

    fn check_completed(&self, stage: Stage) -> Result<(), SolverInternalError> {
        match Stage::ALL[..stage.index()]
            .iter()
            .find(|completed| !completed.is_satisfied(&self.state))
        {
            Some(&broken) => Err(SolverInternalError::StageRegressed { stage, broken }),
            None => Ok(()),
        }
    }
}

/// Solves cubes with the eight stage layer by layer method.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_move_ceiling(mut self, move_ceiling: usize) -> Self {
        self.config.move_ceiling = move_ceiling;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Starts a session on `state` without playing any moves.
    #[must_use]
    pub fn session(&self, state: CubeState) -> SolveSession {
        SolveSession::new(state, self.config.clone())
    }

    /// Returns the full move list that solves `snapshot`. The snapshot is
    /// never modified; an already solved cube yields no moves.
    ///
    /// # Errors
    ///
    /// Fails with `SolveError::Malformed` if the snapshot is not reachable
    /// from solved, and with `SolveError::Internal` if the solver breaks one
    /// of its own contracts.
    pub fn solve(&self, snapshot: &Snapshot) -> Result<Vec<Move>, SolveError> {
        let state = CubeState::from_snapshot(snapshot)?;
        Ok(self.solve_state(state)?.into_moves())
    }

    /// Runs a session on `state` to completion and returns it.
    ///
    /// # Errors
    ///
    /// See `SolveSession::next_sequence`.
    pub fn solve_state(&self, state: CubeState) -> Result<SolveSession, SolverInternalError> {
        info!(start!("Solving layer by layer"));
        let mut session = self.session(state);
        session.run()?;
        info!(success!("Solved in {} moves"), session.moves().len());
        Ok(session)
    }

    /// A move-at-a-time driver sharing this solver's configuration.
    #[must_use]
    pub fn incremental(&self) -> IncrementalSolver {
        IncrementalSolver::new(self.config.clone())
    }
}

/// Hands out one move per call. The rest of the current sequence stays
/// queued as long as the caller keeps applying the moves it is given; any
/// other state starts a fresh session.
#[derive(Debug, Clone)]
pub struct IncrementalSolver {
    config: SolverConfig,
    session: Option<SolveSession>,
    pending: VecDeque<Move>,
    expected: Option<CubeState>,
}

impl IncrementalSolver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            session: None,
            pending: VecDeque::new(),
            expected: None,
        }
    }

    /// The next move for the caller's cube, or `None` once it is solved.
    ///
    /// # Errors
    ///
    /// Same as `Solver::solve`.
    pub fn next_move(&mut self, snapshot: &Snapshot) -> Result<Option<Move>, SolveError> {
        let state = CubeState::from_snapshot(snapshot)?;
        if self.expected.as_ref() != Some(&state) {
            if self.expected.is_some() {
                debug!(working!("Cube differs from the expected state, rescanning"));
            } else {
                info!(start!("Solving layer by layer, one move at a time"));
            }
            self.session = None;
            self.pending.clear();
            self.expected = Some(state.clone());
        }

        let config = &self.config;
        let session = self
            .session
            .get_or_insert_with(|| SolveSession::new(state, config.clone()));
        if self.pending.is_empty() {
            match session.next_sequence()? {
                Some(sequence) => self.pending.extend(sequence),
                None => {
                    info!(success!("Solved in {} moves"), session.moves().len());
                    return Ok(None);
                }
            }
        }

        let next = self.pending.pop_front();
        if let (Some(move_), Some(expected)) = (next, self.expected.as_mut()) {
            expected.apply(move_);
        }
        Ok(next)
    }

    /// Completed-stage flags of the current session, all `false` before the
    /// first call.
    #[must_use]
    pub fn stage_flags(&self) -> [bool; 8] {
        self.session
            .as_ref()
            .map_or([false; 8], SolveSession::stage_flags)
    }

    #[must_use]
    pub fn current_stage(&self) -> Option<Stage> {
        self.session
            .as_ref()
            .map_or(Some(Stage::BottomCross), SolveSession::current_stage)
    }
}

#[cfg(test)]
mod tests {
    use cube_core::parse_moves;

    use super::*;

    #[test_log::test]
    fn test_flags_follow_the_current_stage() {
        let mut session = Solver::new().session(CubeState::solved());
        assert_eq!(session.stage_flags(), [false; 8]);
        session.current = Some(Stage::TopCross);
        assert_eq!(
            session.stage_flags(),
            [true, true, true, false, false, false, false, false]
        );
        session.current = None;
        assert_eq!(session.stage_flags(), [true; 8]);
    }

    #[test_log::test]
    fn test_solved_session_finishes_without_moves() {
        let mut session = Solver::new().session(CubeState::solved());
        assert_eq!(session.next_sequence(), Ok(None));
        assert!(session.is_finished());
        assert!(session.moves().is_empty());
    }

    #[test_log::test]
    fn test_regression_is_detected() {
        let mut state = CubeState::solved();
        state.apply_moves(&parse_moves("R").unwrap());
        let session = Solver::new().session(state);
        assert_eq!(
            session.check_completed(Stage::TopCross),
            Err(SolverInternalError::StageRegressed {
                stage: Stage::TopCross,
                broken: Stage::BottomCross
            })
        );
        assert_eq!(session.check_completed(Stage::BottomCross), Ok(()));
    }

    #[test_log::test]
    fn test_move_ceiling() {
        let (state, _) = CubeState::scrambled(20, 8);
        let error = Solver::new()
            .with_move_ceiling(3)
            .solve_state(state)
            .unwrap_err();
        assert_eq!(error, SolverInternalError::MoveCeilingExceeded { ceiling: 3 });
    }

    #[test_log::test]
    fn test_each_sequence_is_applied_to_the_session() {
        let (state, _) = CubeState::scrambled(15, 21);
        let mut session = Solver::new().session(state.clone());
        let mut replay = state;
        while let Some(sequence) = session.next_sequence().unwrap() {
            assert!(!sequence.is_empty());
            replay.apply_moves(&sequence);
            assert_eq!(&replay, session.state());
        }
        assert!(replay.is_solved());
    }
}
