use log::debug;
use rand::Rng;

use crate::enemy::{Enemy, EnemyId};

/// State of a single grid cell
/// Empty=walkable, Obstacle=player-placed tower (impassable), Occupied=enemy standing here
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    Occupied,
}

/// Stats given to every spawned enemy (speed and damage are reserved for
/// future combat mechanics and do not influence movement)
#[derive(Clone, Copy, Debug)]
pub struct EnemyStats {
    pub health: i32,
    pub speed: i32,
    pub damage: i32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        EnemyStats {
            health: 100,
            speed: 1,
            damage: 10,
        }
    }
}

/// Grid structure storing the cell matrix and the live enemy roster
#[derive(Clone)]
pub struct Grid {
    pub height: i32,
    pub width: i32,
    cells: Vec<CellState>,
    enemies: Vec<Enemy>,
    stats: EnemyStats,
    next_id: u64,
}

impl Grid {
    /// Create a new grid with all cells empty and no enemies
    pub fn new(height: i32, width: i32) -> Self {
        Self::with_stats(height, width, EnemyStats::default())
    }

    /// Create a new grid with custom enemy stats
    pub fn with_stats(height: i32, width: i32, stats: EnemyStats) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be positive");
        Grid {
            height,
            width,
            cells: vec![CellState::Empty; (height * width) as usize],
            enemies: Vec::new(),
            stats,
            next_id: 0,
        }
    }

    /// Create a grid with obstacles pre-placed at the given (x, y) coordinates
    pub fn with_obstacles(height: i32, width: i32, obstacles: &[(i32, i32)]) -> Self {
        let mut grid = Self::new(height, width);
        for &(x, y) in obstacles {
            if grid.in_bounds(x, y) {
                grid.set_cell(x, y, CellState::Obstacle);
            }
        }
        grid
    }

    /// Check if (x, y) lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Convert (x, y) coordinates to a row-major cell index
    fn index(&self, x: i32, y: i32) -> usize {
        (x + y * self.width) as usize
    }

    /// Get cell state at (x, y); out of bounds reads as Obstacle
    pub fn cell(&self, x: i32, y: i32) -> CellState {
        if !self.in_bounds(x, y) {
            return CellState::Obstacle;
        }
        self.cells[self.index(x, y)]
    }

    /// Check if a cell at (x, y) is impassable (out of bounds counts as blocked)
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == CellState::Obstacle
    }

    /// Set cell state at (x, y). Out-of-bounds coordinates are a caller bug.
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) {
        debug_assert!(self.in_bounds(x, y), "set_cell out of bounds: ({}, {})", x, y);
        if self.in_bounds(x, y) {
            let id = self.index(x, y);
            self.cells[id] = state;
        }
    }

    /// Flip a cell between Empty and Obstacle.
    ///
    /// An Occupied cell is toggled to Empty, silently dropping the enemy's
    /// occupancy flag; toggling the same cell again then raises a tower
    /// under the enemy, which tears it down on its next move if it has no
    /// path out (see [`Enemy::step`]).
    pub fn toggle_obstacle(&mut self, x: i32, y: i32) {
        debug_assert!(self.in_bounds(x, y), "toggle out of bounds: ({}, {})", x, y);
        let next = match self.cell(x, y) {
            CellState::Empty => CellState::Obstacle,
            CellState::Obstacle | CellState::Occupied => CellState::Empty,
        };
        self.set_cell(x, y, next);
        debug!("toggled cell ({}, {}) -> {:?}", x, y, next);
    }

    /// Spawn an enemy at a uniformly random column of the top row.
    /// If the chosen cell is not empty the call is a silent no-op (no retry).
    pub fn spawn_enemy_random(&mut self, rng: &mut impl Rng) -> Option<EnemyId> {
        let x = rng.random_range(0..self.width);
        self.spawn_enemy_at(x)
    }

    /// Spawn an enemy at column `x` of the top row if that cell is empty
    pub fn spawn_enemy_at(&mut self, x: i32) -> Option<EnemyId> {
        debug_assert!(x >= 0 && x < self.width, "spawn column out of bounds: {}", x);
        if self.cell(x, 0) != CellState::Empty {
            return None;
        }
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        let stats = self.stats;
        self.enemies
            .push(Enemy::new(id, x, 0, stats.health, stats.speed, stats.damage));
        self.set_cell(x, 0, CellState::Occupied);
        debug!("spawned enemy {:?} at column {}", id, x);
        Some(id)
    }

    /// The live enemy roster, in spawn order
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Advance every enemy one step, in spawn order.
    ///
    /// The roster is taken out of the grid for the duration of the tick;
    /// each enemy moves against the live cell matrix, so an earlier enemy's
    /// move is visible to a later enemy's pathfinding within the same tick.
    /// Enemies that reach the bottom row have their cell cleared immediately
    /// and are removed from the roster once the iteration completes.
    pub fn advance_enemies(&mut self) {
        let mut roster = std::mem::take(&mut self.enemies);
        let mut arrived: Vec<EnemyId> = Vec::new();
        for enemy in roster.iter_mut() {
            enemy.step(self);
            if enemy.y == self.height - 1 {
                self.set_cell(enemy.x, enemy.y, CellState::Empty);
                arrived.push(enemy.id);
                debug!("enemy {:?} reached the bottom row at column {}", enemy.id, enemy.x);
            }
        }
        roster.retain(|e| !arrived.contains(&e.id));
        self.enemies = roster;
    }
}
