use rand::rngs::StdRng;
use rand::SeedableRng;

use towergrid::{CellState, Game, Grid, InputEvent};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_straight_run_and_removal() {
    // 5x5 grid, no obstacles: an enemy spawned at column 2 walks straight
    // down and is removed on the tick that brings it to the bottom row
    let mut grid = Grid::new(5, 5);
    grid.spawn_enemy_at(2);

    for tick in 1..=3 {
        grid.advance_enemies();
        assert_eq!(grid.enemies().len(), 1, "still alive after tick {}", tick);
        let enemy = &grid.enemies()[0];
        assert_eq!((enemy.x, enemy.y), (2, tick), "straight descent in column 2");
        assert_eq!(grid.cell(2, tick), CellState::Occupied);
        assert_eq!(grid.cell(2, tick - 1), CellState::Empty);
    }

    // Fourth tick reaches row 4 = height-1
    grid.advance_enemies();
    assert!(grid.enemies().is_empty(), "enemy removed on arrival");
    assert_eq!(grid.cell(2, 4), CellState::Empty, "cell cleared on the same tick");
}

#[test]
fn test_single_step_per_tick() {
    let mut grid = Grid::new(5, 5);
    grid.spawn_enemy_at(1);

    let before = {
        let e = &grid.enemies()[0];
        (e.x, e.y)
    };
    grid.advance_enemies();
    let after = {
        let e = &grid.enemies()[0];
        (e.x, e.y)
    };

    let moved = (after.0 - before.0).abs() + (after.1 - before.1).abs();
    assert_eq!(moved, 1, "exactly one coordinate changes by exactly 1");
    assert_eq!(grid.cell(before.0, before.1), CellState::Empty);
    assert_eq!(grid.cell(after.0, after.1), CellState::Occupied);
}

#[test]
fn test_detour_through_wall_gap() {
    // Obstacle wall across row 2 except column 4: the enemy spawned at
    // column 0 must detour to column 4 before it can cross, and still
    // arrives at the bottom row eventually
    let wall: Vec<(i32, i32)> = (0..4).map(|x| (x, 2)).collect();
    let mut grid = Grid::with_obstacles(5, 5, &wall);
    grid.spawn_enemy_at(0);

    // The returned path itself must already show the detour: longer than
    // the straight-line Manhattan distance to the bottom of the column
    let start = towergrid::Position::new(0, 0);
    let goal = towergrid::Position::new(0, 4);
    let path = towergrid::find_path(&grid, start, goal);
    assert!(
        path.len() - 1 > start.manhattan(&goal) as usize,
        "wall forces a path longer than the straight drop"
    );

    let mut crossed_at = None;
    for _ in 0..30 {
        grid.advance_enemies();
        if let Some(enemy) = grid.enemies().first() {
            if enemy.y == 2 {
                crossed_at = Some(enemy.x);
            }
        } else {
            break;
        }
    }

    assert_eq!(crossed_at, Some(4), "row 2 can only be crossed at the gap");
    assert!(grid.enemies().is_empty(), "enemy still arrives and is removed");
}

#[test]
fn test_walled_in_enemy_stays_put() {
    let mut grid = Grid::with_obstacles(5, 5, &[(1, 0), (3, 0), (2, 1)]);
    grid.spawn_enemy_at(2);

    grid.advance_enemies();

    let enemy = &grid.enemies()[0];
    assert_eq!((enemy.x, enemy.y), (2, 0), "no path, no obstacle on own cell: no move");
    assert_eq!(grid.cell(2, 0), CellState::Occupied);
}

#[test]
fn test_self_destruct_clears_tower_on_own_cell() {
    // Odd but deliberate coupling: toggling the cursor cell while an enemy
    // stands on it first clears the occupancy flag, and toggling again
    // raises a tower under the enemy; a blocked enemy then clears its own
    // cell instead of moving
    let mut grid = Grid::with_obstacles(5, 5, &[(1, 0), (3, 0), (2, 1)]);
    grid.spawn_enemy_at(2);
    grid.toggle_obstacle(2, 0);
    assert_eq!(grid.cell(2, 0), CellState::Empty, "first toggle wipes the occupancy flag");
    grid.toggle_obstacle(2, 0);
    assert_eq!(grid.cell(2, 0), CellState::Obstacle, "second toggle raises the tower");

    grid.advance_enemies();

    let enemy = &grid.enemies()[0];
    assert_eq!((enemy.x, enemy.y), (2, 0), "enemy does not move");
    assert_eq!(grid.cell(2, 0), CellState::Empty, "the tower on its cell is destroyed");
}

#[test]
fn test_later_enemy_sees_earlier_move() {
    // Moves are not batched: the first enemy vacates (2, 0) during the
    // tick, before the second enemy is advanced
    let mut grid = Grid::new(5, 5);
    grid.spawn_enemy_at(2);
    grid.spawn_enemy_at(1);

    grid.advance_enemies();

    assert_eq!(grid.enemies().len(), 2);
    assert_eq!(grid.cell(2, 1), CellState::Occupied);
    assert_eq!(grid.cell(1, 1), CellState::Occupied);
    assert_eq!(grid.cell(2, 0), CellState::Empty);
    assert_eq!(grid.cell(1, 0), CellState::Empty);
}

#[test]
fn test_spawn_exclusivity_via_game_input() {
    let mut game = Game::new(5, 5);
    let mut rng = rng();

    // Fill the whole top row by spawning repeatedly; the count can never
    // exceed the width and no two enemies may share a cell
    for _ in 0..100 {
        game.apply_input(InputEvent::SpawnEnemy, &mut rng);
    }

    let count = game.grid.enemies().len();
    assert!(count <= 5);
    let mut seen = std::collections::HashSet::new();
    for enemy in game.grid.enemies() {
        assert!(seen.insert((enemy.x, enemy.y)), "two enemies share a cell");
        assert_eq!(game.grid.cell(enemy.x, enemy.y), CellState::Occupied);
    }
}

#[test]
fn test_cursor_clamped_to_bounds() {
    let mut game = Game::new(3, 3);
    let mut rng = rng();

    for _ in 0..10 {
        game.apply_input(InputEvent::MoveCursor { dx: -1, dy: 0 }, &mut rng);
    }
    assert_eq!((game.cursor_x, game.cursor_y), (0, 0));

    for _ in 0..10 {
        game.apply_input(InputEvent::MoveCursor { dx: 1, dy: 0 }, &mut rng);
        game.apply_input(InputEvent::MoveCursor { dx: 0, dy: 1 }, &mut rng);
    }
    assert_eq!((game.cursor_x, game.cursor_y), (2, 2));
}

#[test]
fn test_toggle_at_cursor() {
    let mut game = Game::new(5, 5);
    let mut rng = rng();

    game.apply_input(InputEvent::MoveCursor { dx: 1, dy: 0 }, &mut rng);
    game.apply_input(InputEvent::MoveCursor { dx: 0, dy: 1 }, &mut rng);
    game.apply_input(InputEvent::ToggleObstacle, &mut rng);

    assert_eq!(game.grid.cell(1, 1), CellState::Obstacle);

    game.apply_input(InputEvent::ToggleObstacle, &mut rng);
    assert_eq!(game.grid.cell(1, 1), CellState::Empty);
}

#[test]
fn test_quit_clears_running_flag() {
    let mut game = Game::new(5, 5);
    let mut rng = rng();

    assert!(game.running);
    game.tick(InputEvent::Quit, &mut rng);
    assert!(!game.running);
}

#[test]
fn test_render_snapshot_cursor_overrides_cell() {
    use towergrid::TileView;

    let mut game = Game::new(3, 3);
    let mut rng = rng();
    game.grid.spawn_enemy_at(1);
    game.apply_input(InputEvent::ToggleObstacle, &mut rng);

    let tiles = game.render_snapshot();
    assert_eq!(tiles.len(), 9);
    // Cursor sits at (0, 0) on top of the obstacle it just placed
    assert_eq!(tiles[0], TileView::Cursor);
    assert_eq!(tiles[1], TileView::Enemy);
    assert_eq!(tiles[2], TileView::Empty);
    assert_eq!(tiles[3], TileView::Empty);
}

#[test]
fn test_tick_advances_then_applies_input() {
    let mut game = Game::new(5, 5);
    let mut rng = rng();
    game.grid.spawn_enemy_at(0);

    game.tick(InputEvent::NoOp, &mut rng);

    let enemy = &game.grid.enemies()[0];
    assert_eq!((enemy.x, enemy.y), (0, 1), "advance runs even on a NoOp tick");
}
