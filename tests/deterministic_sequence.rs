use greedy_snake::autopilot;
use greedy_snake::collision::DeathReason;
use greedy_snake::config::GridSize;
use greedy_snake::error::ConfigError;
use greedy_snake::game::{GameState, GameStatus, TickOutcome};
use greedy_snake::input::{ControlMode, Direction, GameInput};
use greedy_snake::session::Session;
use greedy_snake::snake::{Position, Snake};

fn grid() -> GridSize {
    GridSize::try_new(20, 20).expect("20x20 grid should be valid")
}

#[test]
fn undersized_grid_is_refused_before_any_state_exists() {
    let error = GridSize::try_new(3, 3).expect_err("3x3 grid cannot hold the start cell");

    assert!(matches!(error, ConfigError::StartOutOfBounds { .. }));
}

#[test]
fn autopilot_prefers_vertical_on_ties() {
    let state = GameState::from_parts(
        grid(),
        Snake::new(Position { x: 5, y: 5 }),
        Position { x: 7, y: 3 },
        Direction::Down,
        1,
    );

    assert_eq!(autopilot::decide(&state), Some(Direction::Up));
    assert_eq!(
        autopilot::greedy_step(Position { x: 5, y: 5 }, Position { x: 7, y: 3 }),
        (0, -1)
    );
}

#[test]
fn moving_into_own_tail_ends_the_run() {
    let body = vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }];
    let mut state = GameState::from_parts(
        grid(),
        Snake::from_segments(body.clone()),
        Position { x: 9, y: 9 },
        Direction::Right,
        2,
    );

    let outcome = state.tick(Direction::Left);

    assert_eq!(outcome, TickOutcome::Collided(DeathReason::SelfCollision));
    assert!(state.is_terminal());
    assert_eq!(state.snake().to_vec(), body);
    assert_eq!(state.score(), 0);
}

#[test]
fn eating_grows_and_relocates_food() {
    let mut state = GameState::from_parts(
        grid(),
        Snake::new(Position { x: 5, y: 5 }),
        Position { x: 6, y: 5 },
        Direction::Down,
        3,
    );

    state.tick(Direction::Right);

    assert_eq!(
        state.snake().to_vec(),
        vec![Position { x: 5, y: 5 }, Position { x: 6, y: 5 }]
    );
    assert_eq!(state.score(), 1);
    assert!(state.food().is_within_bounds(grid()));
}

#[test]
fn leaving_the_grid_ends_the_run() {
    let mut state = GameState::from_parts(
        grid(),
        Snake::new(Position { x: 0, y: 5 }),
        Position { x: 9, y: 9 },
        Direction::Left,
        4,
    );

    let outcome = state.tick(Direction::Left);

    assert_eq!(outcome, TickOutcome::Collided(DeathReason::WallCollision));
    assert_eq!(state.status(), GameStatus::GameOver);
}

#[test]
fn reset_always_yields_a_fresh_run() {
    for seed in 0..50 {
        let mut state = GameState::new_with_seed(grid(), seed);
        for _ in 0..30 {
            let heading = autopilot::decide(&state).unwrap_or(state.heading());
            state.tick(heading);
        }

        state.reset();

        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.score(), 0);
        assert!(!state.is_terminal());
        assert!(state.food().is_within_bounds(grid()));
    }
}

#[test]
fn autopilot_runs_keep_tick_invariants() {
    for seed in 0..40 {
        let mut session = Session::start(grid(), Some(seed), ControlMode::AutoPilot);

        for _ in 0..2_000 {
            let before = session.state().clone();
            let outcome = session.step();
            let after = session.state();

            match outcome {
                TickOutcome::Moved => {
                    assert_eq!(after.snake().len(), before.snake().len());
                    assert_eq!(after.score(), before.score());
                    assert_eq!(after.food(), before.food());
                }
                TickOutcome::Ate => {
                    assert_eq!(after.snake().len(), before.snake().len() + 1);
                    assert_eq!(after.score(), before.score() + 1);
                    assert_eq!(after.snake().head(), before.food());
                }
                TickOutcome::Collided(_) => {
                    assert!(after.is_terminal());
                    assert_eq!(after.snake(), before.snake());
                    assert_eq!(after.food(), before.food());
                    assert_eq!(after.score(), before.score());
                    break;
                }
                TickOutcome::Halted => panic!("running state must not halt"),
            }

            assert!(after.food().is_within_bounds(grid()));
            let cells = after.snake().to_vec();
            for (index, cell) in cells.iter().enumerate() {
                assert!(cell.is_within_bounds(grid()));
                assert!(!cells[index + 1..].contains(cell), "duplicate body cell");
            }
        }
    }
}

#[test]
fn game_over_session_ignores_steps_until_restart() {
    let state = GameState::from_parts(
        grid(),
        Snake::new(Position { x: 19, y: 3 }),
        Position { x: 0, y: 0 },
        Direction::Right,
        5,
    );
    let mut session = Session::new(state, ControlMode::Manual);

    session.apply_input(GameInput::Direction(Direction::Right));
    assert!(matches!(session.step(), TickOutcome::Collided(_)));
    let frozen = session.state().clone();

    for direction in [Direction::Up, Direction::Left, Direction::Down] {
        session.apply_input(GameInput::Direction(direction));
        assert_eq!(session.step(), TickOutcome::Halted);
    }
    assert_eq!(session.state().snake(), frozen.snake());
    assert_eq!(session.state().food(), frozen.food());
    assert_eq!(session.state().score(), frozen.score());

    session.apply_input(GameInput::Restart);
    session.step();
    assert!(!session.state().is_terminal());
}
