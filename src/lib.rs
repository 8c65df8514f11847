pub mod config;
pub mod enemy;
pub mod game;
pub mod grid;
pub mod pathfinding;
pub mod terminal;

pub use config::Config;
pub use enemy::{Enemy, EnemyId};
pub use game::{Game, InputEvent, TileView};
pub use grid::{CellState, EnemyStats, Grid};
pub use pathfinding::{find_path, format_path, Position};
