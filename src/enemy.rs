use log::trace;

use crate::grid::{CellState, Grid};
use crate::pathfinding::{find_path, Position};

/// Stable identifier for one enemy, independent of its (mutable) coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnemyId(pub u64);

/// Enemy walking from the top row toward the bottom row
#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub speed: i32,
    pub damage: i32,
}

impl Enemy {
    pub fn new(id: EnemyId, x: i32, y: i32, health: i32, speed: i32, damage: i32) -> Self {
        Enemy {
            id,
            x,
            y,
            health,
            speed,
            damage,
        }
    }

    /// Advance one step along the current shortest path to the bottom row.
    ///
    /// The goal is `(self.x, height - 1)` with the column taken at call time,
    /// so the enemy re-targets "straight down from here" every tick. When a
    /// path exists the enemy takes exactly one step along it regardless of
    /// `speed`. When no step is possible and the enemy's own cell reads
    /// Obstacle (a tower raised under it by toggling its cell twice), the
    /// enemy destroys that tower by clearing its own cell; the trigger is
    /// exactly that state, an enemy merely walled in by neighboring towers
    /// does nothing.
    pub fn step(&mut self, grid: &mut Grid) {
        let start = Position::new(self.x, self.y);
        let goal = Position::new(self.x, grid.height - 1);
        let path = find_path(grid, start, goal);

        if path.len() > 1 {
            let next = path[1];
            trace!(
                "enemy {:?} steps ({}, {}) -> ({}, {})",
                self.id,
                self.x,
                self.y,
                next.x,
                next.y
            );
            grid.set_cell(self.x, self.y, CellState::Empty);
            self.x = next.x;
            self.y = next.y;
            grid.set_cell(self.x, self.y, CellState::Occupied);
        } else if grid.cell(self.x, self.y) == CellState::Obstacle {
            trace!(
                "enemy {:?} destroys the tower on its own cell ({}, {})",
                self.id,
                self.x,
                self.y
            );
            grid.set_cell(self.x, self.y, CellState::Empty);
        } else {
            trace!("enemy {:?} has no path from ({}, {})", self.id, self.x, self.y);
        }
    }
}
