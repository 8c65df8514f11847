use crate::Grid;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance (the A* heuristic; all edges have unit cost)
    pub fn manhattan(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// A node on the A* frontier
#[derive(Debug, Clone)]
struct PathNode {
    position: Position,
    f_score: i32,
    /// Discovery counter, used as a deterministic tiebreak among equal f
    order: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.order == other.order
    }
}

impl Eq for PathNode {}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default);
        // among equal f-scores the earliest-discovered node wins
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Find the shortest 4-adjacent path from start to goal using A* with a
/// Manhattan heuristic. Obstacle cells are impassable; Empty and Occupied
/// cells are passable with unit cost. Returns the full cell sequence from
/// start to goal inclusive, or an empty vec if the goal is unreachable.
///
/// The search is stateless: the frontier is rebuilt from scratch on every
/// call and nothing is cached between ticks.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    let mut open: BinaryHeap<PathNode> = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_score: HashMap<Position, i32> = HashMap::new();
    let mut discovered: u64 = 0;

    g_score.insert(start, 0);
    open.push(PathNode {
        position: start,
        f_score: start.manhattan(&goal),
        order: discovered,
    });

    while let Some(node) = open.pop() {
        let current = node.position;
        if current == goal {
            return reconstruct_path(&came_from, current);
        }

        for (dx, dy) in NEIGHBORS {
            let neighbor = Position::new(current.x + dx, current.y + dy);
            if !grid.in_bounds(neighbor.x, neighbor.y) || grid.is_blocked(neighbor.x, neighbor.y) {
                continue;
            }

            let tentative = g_score[&current] + 1;
            let better = match g_score.get(&neighbor) {
                Some(&best) => tentative < best,
                None => true,
            };
            if better {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                discovered += 1;
                open.push(PathNode {
                    position: neighbor,
                    f_score: tentative + neighbor.manhattan(&goal),
                    order: discovered,
                });
            }
        }
    }

    Vec::new()
}

/// Walk the predecessor map back from the goal and reverse
fn reconstruct_path(came_from: &HashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Format path for display
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, pos) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&format!("({},{})", pos.x, pos.y));
    }
    result
}
