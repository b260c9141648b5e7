//! # Corridor Carving
//!
//! L-shaped corridors chaining rooms in acceptance order.

use crate::game::{Grid, Position, Tile};
use crate::generation::Room;
use crate::DelveResult;
use log::trace;

/// Returns the tiles of the L-shaped path from `start` to `end`.
///
/// The horizontal leg runs along `start.y` over the inclusive x span, then
/// the vertical leg runs along `end.x` over the inclusive y span. The elbow
/// therefore always sits at `(end.x, start.y)`; the elbow tile appears in
/// both legs.
///
/// # Examples
///
/// ```
/// use delve::{l_path, Position};
///
/// let path = l_path(Position::new(2, 2), Position::new(4, 3));
/// assert_eq!(
///     path,
///     vec![
///         Position::new(2, 2),
///         Position::new(3, 2),
///         Position::new(4, 2),
///         Position::new(4, 2),
///         Position::new(4, 3),
///     ]
/// );
/// ```
pub fn l_path(start: Position, end: Position) -> Vec<Position> {
    let horizontal = (start.x.min(end.x)..=start.x.max(end.x)).map(|x| Position::new(x, start.y));
    let vertical = (start.y.min(end.y)..=start.y.max(end.y)).map(|y| Position::new(end.x, y));
    horizontal.chain(vertical).collect()
}

/// Connects rooms through their centers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorridorCarver;

impl CorridorCarver {
    /// Creates a new corridor carver.
    pub fn new() -> Self {
        Self
    }

    /// Carves an L-shaped corridor from the center of `from` to the center of `to`.
    ///
    /// Carving only ever writes Floor.
    pub fn connect(&self, grid: &mut Grid, from: &Room, to: &Room) -> DelveResult<()> {
        trace!("Connecting room {} to room {}", from.id, to.id);
        for pos in l_path(from.center(), to.center()) {
            grid.set(pos, Tile::Floor)?;
        }
        Ok(())
    }

    /// Connects every consecutive pair: `(rooms[0], rooms[1])`, `(rooms[1], rooms[2])`, ...
    ///
    /// Fewer than two rooms carves nothing.
    pub fn connect_chain(&self, grid: &mut Grid, rooms: &[Room]) -> DelveResult<()> {
        for pair in rooms.windows(2) {
            self.connect(grid, &pair[0], &pair[1])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l_path_elbow_at_end_x() {
        let start = Position::new(7, 2);
        let end = Position::new(2, 7);
        let path = l_path(start, end);

        // Horizontal leg at y = 2, vertical leg at x = 2
        assert!(path.iter().all(|p| p.y == 2 || p.x == 2));
        assert!(path.contains(&Position::new(2, 2)));
        assert!(!path.contains(&Position::new(7, 7)));
        assert!(path.contains(&start));
        assert!(path.contains(&end));
        assert_eq!(path.len(), 6 + 6);
    }

    #[test]
    fn test_l_path_is_directional() {
        let a = Position::new(1, 1);
        let b = Position::new(5, 5);

        assert!(l_path(a, b).contains(&Position::new(5, 1)));
        assert!(l_path(b, a).contains(&Position::new(1, 5)));
        assert!(!l_path(b, a).contains(&Position::new(5, 1)));
    }

    #[test]
    fn test_l_path_same_point() {
        let p = Position::new(3, 3);
        assert_eq!(l_path(p, p), vec![p, p]);
    }

    #[test]
    fn test_connect_carves_between_centers() {
        let mut grid = Grid::new(12, 12);
        let a = Room::new(0, Position::new(1, 1), 3, 3);
        let b = Room::new(1, Position::new(7, 7), 3, 3);

        CorridorCarver::new().connect(&mut grid, &a, &b).unwrap();

        for pos in l_path(a.center(), b.center()) {
            assert_eq!(grid.tile_at(pos), Some(Tile::Floor));
        }
        // Horizontal leg 2..=8, vertical leg 2..=8, shared elbow
        assert_eq!(grid.count(Tile::Floor), 13);
    }

    #[test]
    fn test_connect_chain_needs_two_rooms() {
        let mut grid = Grid::new(10, 10);
        let rooms = vec![Room::new(0, Position::new(1, 1), 3, 3)];

        CorridorCarver::new().connect_chain(&mut grid, &rooms).unwrap();
        CorridorCarver::new().connect_chain(&mut grid, &[]).unwrap();
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn test_connect_never_downgrades_floor() {
        let mut grid = Grid::new(10, 10);
        for x in 0..10 {
            grid.set(Position::new(x, 0), Tile::Floor).unwrap();
        }
        let a = Room::new(0, Position::new(1, 2), 3, 3);
        let b = Room::new(1, Position::new(6, 2), 3, 3);

        CorridorCarver::new().connect(&mut grid, &a, &b).unwrap();
        for x in 0..10 {
            assert_eq!(grid.tile_at(Position::new(x, 0)), Some(Tile::Floor));
        }
    }
}
