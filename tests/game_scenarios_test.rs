//! Game scenarios - spawn, gravity, locking and line clears end to end

use blockfall::core::{GameConfig, GameState, Grid, Occupancy, Phase, PieceSource, TickOutcome};
use blockfall::engine::api;
use blockfall::types::{GameCommand, Rotation, RotationDirection, ShapeKind};

fn cycle_config(kinds: &[ShapeKind]) -> GameConfig {
    GameConfig::default().with_source(PieceSource::Cycle(kinds.to_vec()))
}

fn i_only() -> GameState {
    GameState::new(cycle_config(&[ShapeKind::I])).unwrap()
}

#[test]
fn test_spawn_collision_ends_game() {
    let mut grid = Grid::new(10, 20);
    grid.set(5, 0, Some(ShapeKind::Z)).unwrap();

    let mut state = GameState::with_grid(cycle_config(&[ShapeKind::I]), grid).unwrap();

    assert!(state.is_game_over());
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.active().is_none());

    // Nothing moves once the game is over
    assert_eq!(state.tick(), TickOutcome::Idle);
    assert!(!state.move_left());
    assert!(!state.rotate(RotationDirection::Clockwise));
    assert!(state.hard_drop().is_none());
    assert_eq!(state.grid().occupied_count(), 1);
}

#[test]
fn test_horizontal_i_locks_on_twentieth_tick() {
    let mut state = i_only();
    let spawned = state.active().unwrap();
    assert_eq!((spawned.x, spawned.y), (4, 0));
    assert_eq!(spawned.rotation, Rotation::North);

    for n in 1..20 {
        assert_eq!(state.tick(), TickOutcome::Fell, "tick {}", n);
    }
    assert_eq!(state.active().unwrap().y, 19);
    assert_eq!(state.grid().occupied_count(), 0);

    let TickOutcome::Locked(event) = state.tick() else {
        panic!("expected lock on tick 20");
    };
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(event.score_delta, 0);
    assert!(!event.game_over);

    for x in 4..8 {
        assert_eq!(state.grid().cell(x, 19), Occupancy::Occupied(ShapeKind::I));
    }
    assert_eq!(state.grid().occupied_count(), 4);
    assert_eq!(state.pieces_locked(), 1);

    // The next piece is already falling from the top
    let next = state.active().unwrap();
    assert_eq!((next.x, next.y), (4, 0));
    assert_eq!(state.phase(), Phase::Falling);
}

#[test]
fn test_completing_a_row_clears_and_scores() {
    let mut grid = Grid::new(10, 20);
    for x in (0..4).chain(8..10) {
        grid.set(x, 19, Some(ShapeKind::J)).unwrap();
    }
    grid.set(0, 18, Some(ShapeKind::T)).unwrap();

    let mut state = GameState::with_grid(cycle_config(&[ShapeKind::I]), grid).unwrap();

    let outcome = (0..40)
        .map(|_| state.tick())
        .find(|outcome| matches!(outcome, TickOutcome::Locked(_)));
    let Some(TickOutcome::Locked(event)) = outcome else {
        panic!("piece never locked");
    };

    assert_eq!(event.lines_cleared, 1);
    assert!(event.score_delta > 0);
    assert_eq!(state.score(), event.score_delta);
    assert_eq!(state.lines(), 1);

    // Only the cell above the cleared row remains, shifted down by one
    assert_eq!(state.grid().occupied_count(), 1);
    assert_eq!(state.grid().cell(0, 19), Occupancy::Occupied(ShapeKind::T));
}

#[test]
fn test_hard_drop_matches_ghost() {
    let mut state = GameState::new(cycle_config(&[ShapeKind::T, ShapeKind::O])).unwrap();
    state.move_left();
    let ghost = state.ghost().unwrap();

    let event = state.hard_drop().unwrap();
    assert_eq!(event.piece, ghost);
    for (x, y) in ghost.occupied_cells() {
        assert_eq!(state.grid().cell(x, y), Occupancy::Occupied(ShapeKind::T));
    }
    assert_eq!(state.active().unwrap().kind, ShapeKind::O);
}

#[test]
fn test_stacking_until_game_over() {
    let mut state = GameState::new(cycle_config(&[ShapeKind::O])).unwrap();

    let mut locks = 0;
    while !state.is_game_over() {
        state.hard_drop().unwrap();
        locks += 1;
        assert!(locks <= 10, "an O column on a 20-row field holds 10 pieces");
    }

    assert_eq!(locks, 10);
    assert!(state.active().is_none());
    assert_eq!(state.take_last_event().map(|e| e.game_over), Some(true));
}

#[test]
fn test_restart_after_game_over() {
    let mut state = GameState::new(cycle_config(&[ShapeKind::O])).unwrap();
    while !state.is_game_over() {
        state.hard_drop();
    }

    assert!(state.apply(GameCommand::Restart));
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.grid().occupied_count(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.pieces_locked(), 0);
}

#[test]
fn test_active_never_overlaps_locked_cells() {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    let commands = [
        GameCommand::MoveLeft,
        GameCommand::Rotate(RotationDirection::Clockwise),
        GameCommand::MoveRight,
        GameCommand::MoveRight,
        GameCommand::MoveDown,
        GameCommand::Rotate(RotationDirection::CounterClockwise),
        GameCommand::MoveLeft,
    ];

    for step in 0..600 {
        state.apply(commands[step % commands.len()]);
        state.tick();
        if let Some(active) = state.active() {
            for (x, y) in active.occupied_cells() {
                assert_eq!(state.grid().cell(x, y), Occupancy::Empty, "step {}", step);
            }
        }
        if state.is_game_over() {
            break;
        }
    }
}

#[test]
fn test_api_surface_drives_a_game() {
    let mut state = api::new_game(10, 20).unwrap();
    assert!(!api::is_game_over(&state));
    assert!(api::query_active(&state).is_some());

    let start = api::query_active(&state).unwrap();
    assert!(api::move_left(&mut state));
    assert!(api::move_right(&mut state));
    assert!(api::move_down(&mut state));
    assert_eq!(api::query_active(&state).unwrap().y, start.y + 1);

    let mut locked = false;
    for _ in 0..25 {
        if matches!(api::tick(&mut state), TickOutcome::Locked(_)) {
            locked = true;
            break;
        }
    }
    assert!(locked);
    assert_eq!(api::query_grid(&state).count(), 4);
    assert_eq!(api::query_score(&state), 0);

    assert!(api::new_game(2, 20).is_err());
}
