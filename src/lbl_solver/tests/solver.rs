use cube_core::{Color, CubeState, Face, MalformedStateError, Move, format_moves, parse_moves};
use lbl_solver::{SolveError, Solver, SolverConfig, Stage};
use log::info;

fn scrambled(move_count: usize, seed: u64) -> CubeState {
    CubeState::scrambled(move_count, seed).0
}

fn assert_solves(solver: &Solver, state: &CubeState) -> Vec<Move> {
    let moves = solver.solve(&state.snapshot()).unwrap();
    let mut replay = state.clone();
    replay.apply_moves(&moves);
    assert!(replay.is_solved(), "{state}\n{}", format_moves(&moves));
    moves
}

#[test_log::test]
fn test_solved_input() {
    let solver = Solver::new();
    assert!(solver.solve(&CubeState::solved().snapshot()).unwrap().is_empty());

    let session = solver.solve_state(CubeState::solved()).unwrap();
    assert!(session.is_finished());
    assert_eq!(session.stage_flags(), [true; 8]);
}

#[test_log::test]
fn test_single_quarter_turns() {
    let solver = Solver::new();
    for move_ in Move::ALL {
        let mut state = CubeState::solved();
        state.apply(move_);
        assert_solves(&solver, &state);
    }
}

#[test_log::test]
fn test_last_layer_cases() {
    let solver = Solver::new();
    for case in [
        "U",
        "U U",
        "F R U R' U' F'",
        "R U R' U R U U R'",
        "R' F R' B B R F' R' B B R R",
        "R U' R U R U R U' R' U' R R",
        "R U R' U R U U R' U R U R' U R U U R'",
    ] {
        let mut state = CubeState::solved();
        state.apply_moves(&parse_moves(case).unwrap());
        assert_solves(&solver, &state);
    }
}

#[test_log::test]
fn test_random_scrambles() {
    let solver = Solver::new();
    let mut longest = 0;
    for seed in 0..300 {
        let move_count = 1 + usize::try_from(seed % 25).unwrap();
        let moves = assert_solves(&solver, &scrambled(move_count, seed));
        longest = longest.max(moves.len());
    }
    info!("Longest solution: {longest} moves");
    assert!(longest <= SolverConfig::default().move_ceiling);
}

#[test_log::test]
fn test_deep_scrambles() {
    let solver = Solver::new();
    for seed in 1000..1100 {
        assert_solves(&solver, &scrambled(100, seed));
    }
}

#[test_log::test]
fn test_input_is_not_modified() {
    let state = scrambled(30, 77);
    let snapshot = state.snapshot();
    let solver = Solver::new();
    let first = solver.solve(&snapshot).unwrap();
    assert_eq!(snapshot, state.snapshot());
    assert_eq!(solver.solve(&snapshot).unwrap(), first);
}

#[test_log::test]
fn test_stages_complete_in_order() {
    let solver = Solver::new();
    for seed in 0..20 {
        let mut session = solver.session(scrambled(25, seed));
        let mut previous = session.stage_flags();
        while session.next_sequence().unwrap().is_some() {
            let flags = session.stage_flags();
            for (before, after) in previous.iter().zip(flags) {
                assert!(!before || after);
            }
            // Flags are a prefix of completed stages
            assert!(flags.windows(2).all(|pair| pair[0] || !pair[1]));
            for (stage, done) in Stage::ALL.into_iter().zip(flags) {
                if done {
                    assert!(stage.is_satisfied(session.state()), "{stage}");
                }
            }
            previous = flags;
        }
        assert_eq!(session.stage_flags(), [true; 8]);
        assert!(session.state().is_solved());
    }
}

#[test_log::test]
fn test_incremental_matches_batch() {
    let solver = Solver::new();
    for seed in 0..30 {
        let mut state = scrambled(20, seed);
        let batch = solver.solve(&state.snapshot()).unwrap();

        let mut incremental = solver.incremental();
        let mut played = vec![];
        while let Some(move_) = incremental.next_move(&state.snapshot()).unwrap() {
            state.apply(move_);
            played.push(move_);
        }
        assert!(state.is_solved());
        assert_eq!(played, batch);
        assert_eq!(incremental.stage_flags(), [true; 8]);
        assert_eq!(incremental.current_stage(), None);
    }
}

#[test_log::test]
fn test_incremental_recovers_from_a_detour() {
    let solver = Solver::new();
    let mut state = scrambled(20, 5);
    let mut incremental = solver.incremental();
    assert_eq!(incremental.stage_flags(), [false; 8]);

    for _ in 0..10 {
        let move_ = incremental.next_move(&state.snapshot()).unwrap().unwrap();
        state.apply(move_);
    }
    // The caller turns something the solver did not ask for
    state.turn(Face::Back, true);

    let mut steps = 0;
    while let Some(move_) = incremental.next_move(&state.snapshot()).unwrap() {
        state.apply(move_);
        steps += 1;
        assert!(steps <= SolverConfig::default().move_ceiling);
    }
    assert!(state.is_solved());
}

#[test_log::test]
fn test_incremental_solved_input() {
    let mut incremental = Solver::new().incremental();
    assert_eq!(
        incremental
            .next_move(&CubeState::solved().snapshot())
            .unwrap(),
        None
    );
    assert_eq!(incremental.stage_flags(), [true; 8]);
}

#[test_log::test]
fn test_malformed_input() {
    let solver = Solver::new();

    let mut snapshot = CubeState::solved().snapshot();
    snapshot[Face::Front.index()][0][1] = Color::Yellow;
    snapshot[Face::Up.index()][2][1] = Color::Green;
    assert_eq!(
        solver.solve(&snapshot),
        Err(SolveError::Malformed(MalformedStateError::FlippedEdge))
    );

    let mut snapshot = CubeState::solved().snapshot();
    snapshot[Face::Down.index()][0][0] = Color::Blue;
    assert!(matches!(
        solver.solve(&snapshot),
        Err(SolveError::Malformed(MalformedStateError::ColorCount { .. }))
    ));
    assert!(matches!(
        solver.incremental().next_move(&snapshot),
        Err(SolveError::Malformed(_))
    ));
}

#[test_log::test]
fn test_configured_solver() {
    let config = SolverConfig::from_toml_str("move_ceiling = 5\ncheck_invariants = false").unwrap();
    let solver = Solver::with_config(config);
    assert!(matches!(
        solver.solve(&scrambled(30, 3).snapshot()),
        Err(SolveError::Internal(_))
    ));

    let relaxed = Solver::new().with_move_ceiling(2000);
    assert_eq!(relaxed.config().move_ceiling, 2000);
    assert_solves(&relaxed, &scrambled(30, 3));
}
