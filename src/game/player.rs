//! # Player
//!
//! The player's position and the movement rule the input layer calls into.

use crate::game::{Direction, Grid, Position};
use crate::generation::Dungeon;
use serde::{Deserialize, Serialize};

/// The player's discrete position on the grid.
///
/// Owned by the caller; movement produces a new value instead of mutating
/// shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
}

impl Player {
    /// Creates a player at the given position.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places a player at the center of the dungeon's start room.
    ///
    /// Returns `None` when no room was placed.
    pub fn spawn(dungeon: &Dungeon) -> Option<Self> {
        dungeon.player_spawn().map(Self::new)
    }
}

/// Attempts one step in `direction`.
///
/// The step is taken only if the target is inside the grid and Floor;
/// otherwise the player is returned unchanged. A blocked move is not an error.
///
/// # Examples
///
/// ```
/// use delve::{try_move, Direction, Grid, Player, Position, Tile};
///
/// let mut grid = Grid::new(10, 10);
/// grid.set(Position::new(5, 5), Tile::Floor).unwrap();
/// grid.set(Position::new(6, 5), Tile::Floor).unwrap();
///
/// let player = Player::new(Position::new(5, 5));
/// assert_eq!(try_move(&grid, player, Direction::North), player);
/// assert_eq!(try_move(&grid, player, Direction::East).position, Position::new(6, 5));
/// ```
pub fn try_move(grid: &Grid, player: Player, direction: Direction) -> Player {
    let target = player.position + direction.to_delta();
    if grid.is_walkable(target) {
        Player::new(target)
    } else {
        player
    }
}
