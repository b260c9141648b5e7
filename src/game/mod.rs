//! # Game Module
//!
//! World representation and the player movement rule.
//!
//! This module contains the data the generator produces and the input layer consumes:
//! - Positions and cardinal directions
//! - The wall/floor tile grid
//! - The player position and its walkability-checked movement

pub mod grid;
pub mod player;

pub use grid::*;
pub use player::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate on the tile grid.
///
/// # Examples
///
/// ```
/// use delve::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.cardinal_adjacent_positions();
/// assert_eq!(adjacent.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns only the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        Direction::all()
            .into_iter()
            .map(|direction| self + direction.to_delta())
            .collect()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Directions the player can step in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// North is towards row 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Direction, Position};
    ///
    /// let delta = Direction::North.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, -1),
            Direction::South => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
        }
    }

    /// Parses a single movement key.
    ///
    /// Accepts compass letters (`n`, `s`, `e`, `w`) and Vi keys
    /// (`k`, `j`, `l`, `h`), case-insensitively.
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_lowercase() {
            'n' | 'k' => Some(Direction::North),
            's' | 'j' => Some(Direction::South),
            'e' | 'l' => Some(Direction::East),
            'w' | 'h' => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns all 4 directions.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::North,
            Direction::West,
            Direction::East,
            Direction::South,
        ]
    }
}
