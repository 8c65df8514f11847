use log::debug;
use rand::Rng;

use crate::grid::{CellState, EnemyStats, Grid};

/// One discrete input event fed into the simulation per tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Move the cursor one cell along a single axis
    MoveCursor { dx: i32, dy: i32 },
    /// Toggle the cell under the cursor between Empty and Obstacle
    ToggleObstacle,
    /// Spawn one enemy at a random top-row column
    SpawnEnemy,
    /// Stop the simulation loop
    Quit,
    /// No key pressed within the tick's wait window
    NoOp,
}

/// What the display should draw at one grid location.
/// The cursor overrides whatever the underlying cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileView {
    Cursor,
    Empty,
    Obstacle,
    Enemy,
}

/// Simulation state: the grid plus the player cursor and the running flag
pub struct Game {
    pub grid: Grid,
    pub cursor_x: i32,
    pub cursor_y: i32,
    pub running: bool,
}

impl Game {
    /// Create a game with default enemy stats
    pub fn new(height: i32, width: i32) -> Self {
        Self::with_stats(height, width, EnemyStats::default())
    }

    pub fn with_stats(height: i32, width: i32, stats: EnemyStats) -> Self {
        Game {
            grid: Grid::with_stats(height, width, stats),
            cursor_x: 0,
            cursor_y: 0,
            running: true,
        }
    }

    /// Advance all enemies one simulation step
    pub fn advance(&mut self) {
        self.grid.advance_enemies();
    }

    /// Apply one input event. Cursor moves are clamped to the grid bounds.
    pub fn apply_input(&mut self, event: InputEvent, rng: &mut impl Rng) {
        match event {
            InputEvent::MoveCursor { dx, dy } => {
                self.cursor_x = (self.cursor_x + dx).max(0).min(self.grid.width - 1);
                self.cursor_y = (self.cursor_y + dy).max(0).min(self.grid.height - 1);
            }
            InputEvent::ToggleObstacle => {
                self.grid.toggle_obstacle(self.cursor_x, self.cursor_y);
            }
            InputEvent::SpawnEnemy => {
                self.grid.spawn_enemy_random(rng);
            }
            InputEvent::Quit => {
                debug!("quit requested");
                self.running = false;
            }
            InputEvent::NoOp => {}
        }
    }

    /// One full simulation tick: advance all enemies, then apply one event.
    /// Rendering happens between ticks by reading [`Game::render_snapshot`].
    pub fn tick(&mut self, event: InputEvent, rng: &mut impl Rng) {
        self.advance();
        self.apply_input(event, rng);
    }

    /// Row-major snapshot of the grid for the display collaborator
    pub fn render_snapshot(&self) -> Vec<TileView> {
        let mut tiles = Vec::with_capacity((self.grid.height * self.grid.width) as usize);
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let tile = if x == self.cursor_x && y == self.cursor_y {
                    TileView::Cursor
                } else {
                    match self.grid.cell(x, y) {
                        CellState::Empty => TileView::Empty,
                        CellState::Obstacle => TileView::Obstacle,
                        CellState::Occupied => TileView::Enemy,
                    }
                };
                tiles.push(tile);
            }
        }
        tiles
    }
}
