//! # Tile Grid
//!
//! Fixed-size wall/floor map that generation carves into.

use crate::game::Position;
use crate::{DelveError, DelveResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
}

impl Tile {
    /// Whether the player may stand on this tile.
    pub fn is_passable(self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Character used for ASCII rendering.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }
}

/// A `width x height` grid of tiles stored as rows.
///
/// The dimensions are fixed at creation. Out-of-range access through
/// [`Grid::get`] and [`Grid::set`] fails with [`DelveError::IndexOutOfRange`];
/// [`Grid::tile_at`] is the non-failing variant and returns `None` instead.
/// Deserialization rejects rows that disagree with the stated dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Vec<Tile>>,
}

/// Unchecked serialized form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    width: u32,
    height: u32,
    tiles: Vec<Vec<Tile>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = DelveError;

    fn try_from(raw: RawGrid) -> DelveResult<Self> {
        if raw.tiles.len() != raw.height as usize {
            return Err(DelveError::InvalidConfiguration(format!(
                "grid declares height {} but has {} rows",
                raw.height,
                raw.tiles.len()
            )));
        }

        if let Some((y, row)) = raw
            .tiles
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != raw.width as usize)
        {
            return Err(DelveError::InvalidConfiguration(format!(
                "grid declares width {} but row {} has {} tiles",
                raw.width,
                y,
                row.len()
            )));
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        })
    }
}

impl Grid {
    /// Creates a grid with every cell set to [`Tile::Wall`].
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Grid, Position, Tile};
    ///
    /// let grid = Grid::new(10, 8);
    /// assert_eq!(grid.tile_at(Position::new(9, 7)), Some(Tile::Wall));
    /// assert_eq!(grid.tile_at(Position::new(10, 0)), None);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![Tile::Wall; width as usize]; height as usize],
        }
    }

    /// Width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Checks whether a position lies inside the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Returns the tile at `pos`, or `None` outside the grid.
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Returns the tile at `pos`, failing outside the grid.
    pub fn get(&self, pos: Position) -> DelveResult<Tile> {
        self.tile_at(pos).ok_or_else(|| self.out_of_range(pos))
    }

    /// Overwrites the tile at `pos`, failing outside the grid.
    pub fn set(&mut self, pos: Position, tile: Tile) -> DelveResult<()> {
        if !self.is_valid_position(pos) {
            return Err(self.out_of_range(pos));
        }
        self.tiles[pos.y as usize][pos.x as usize] = tile;
        Ok(())
    }

    /// A move onto `pos` is legal iff it is inside the grid and Floor.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile_at(pos).is_some_and(Tile::is_passable)
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.iter().map(Vec::as_slice)
    }

    /// Counts the tiles of the given kind.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&t| t == tile)
            .count()
    }

    fn out_of_range(&self, pos: Position) -> DelveError {
        DelveError::IndexOutOfRange {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
        }
        Ok(())
    }
}
