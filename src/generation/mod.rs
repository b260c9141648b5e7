//! # Generation Module
//!
//! Procedural dungeon generation: random room placement and corridor carving.
//!
//! The pipeline is:
//! 1. [`RoomSampler`] draws candidate rooms inside the map bounds
//! 2. [`RoomPlacer`] rejects candidates that [`overlaps`] flags, carving the rest
//! 3. [`CorridorCarver`] links each accepted room to the next with an L-shaped path
//!
//! [`DungeonGenerator`] runs the whole pipeline and validates the result.

pub mod connectivity;
pub mod corridor;
pub mod dungeon;
pub mod overlap;
pub mod placer;
pub mod random;
pub mod sampler;

pub use connectivity::*;
pub use corridor::*;
pub use dungeon::*;
pub use overlap::*;
pub use placer::*;
pub use random::*;
pub use sampler::*;

use crate::config;
use crate::game::Position;
use crate::{DelveError, DelveResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for procedural generation.
///
/// Controls the map bounds, the number and size of rooms, and how many
/// placement tries are allowed before giving up on the requested count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Number of rooms to try to place
    pub room_count: u32,
    /// Minimum room side length
    pub min_room_size: u32,
    /// Maximum room side length
    pub max_room_size: u32,
    /// Upper bound on placement tries, accepted or not
    pub attempt_cap: u32,
}

impl GenerationConfig {
    /// Creates the default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.attempt_cap, 1000);
    /// assert!(config.max_room_size >= config.min_room_size);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: config::DEFAULT_DUNGEON_WIDTH,
            height: config::DEFAULT_DUNGEON_HEIGHT,
            room_count: config::DEFAULT_ROOM_COUNT,
            min_room_size: config::DEFAULT_MIN_ROOM_SIZE,
            max_room_size: config::DEFAULT_MAX_ROOM_SIZE,
            attempt_cap: config::DEFAULT_ATTEMPT_CAP,
        }
    }

    /// Creates a configuration for testing with a small 10x10 map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 10,
            height: 10,
            room_count: 3,
            min_room_size: 3,
            max_room_size: 4,
            attempt_cap: config::DEFAULT_ATTEMPT_CAP,
        }
    }

    /// Sets the map bounds.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the requested room count.
    pub fn with_room_count(mut self, room_count: u32) -> Self {
        self.room_count = room_count;
        self
    }

    /// Sets the inclusive room side range.
    pub fn with_room_size(mut self, min_room_size: u32, max_room_size: u32) -> Self {
        self.min_room_size = min_room_size;
        self.max_room_size = max_room_size;
        self
    }

    /// Sets the attempt cap.
    pub fn with_attempt_cap(mut self, attempt_cap: u32) -> Self {
        self.attempt_cap = attempt_cap;
        self
    }

    /// Checks that rooms of every allowed size can be placed with a
    /// one-tile border.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{DelveError, GenerationConfig};
    ///
    /// let config = GenerationConfig::new(1)
    ///     .with_size(10, 10)
    ///     .with_room_size(20, 25);
    /// assert!(matches!(config.validate(), Err(DelveError::InvalidConfiguration(_))));
    /// ```
    pub fn validate(&self) -> DelveResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DelveError::InvalidConfiguration(format!(
                "map size {}x{} must be non-zero",
                self.width, self.height
            )));
        }

        if self.width > config::MAX_MAP_SIDE || self.height > config::MAX_MAP_SIDE {
            return Err(DelveError::InvalidConfiguration(format!(
                "map size {}x{} exceeds the coordinate limit {}",
                self.width,
                self.height,
                config::MAX_MAP_SIDE
            )));
        }

        if self.min_room_size == 0 {
            return Err(DelveError::InvalidConfiguration(
                "minimum room size must be at least 1".to_string(),
            ));
        }

        if self.min_room_size > self.max_room_size {
            return Err(DelveError::InvalidConfiguration(format!(
                "minimum room size {} exceeds maximum {}",
                self.min_room_size, self.max_room_size
            )));
        }

        // x is drawn from [1, width - room_width - 1]
        let limit = self.width.min(self.height).saturating_sub(2);
        if self.max_room_size > limit {
            return Err(DelveError::InvalidConfiguration(format!(
                "maximum room size {} does not fit a {}x{} map with a 1-tile border (limit {})",
                self.max_room_size, self.width, self.height, limit
            )));
        }

        Ok(())
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> DelveResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> DelveResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_SEED)
    }
}

/// An axis-aligned rectangular room.
///
/// `top_left` plus `width x height` tiles; every covered tile is Floor once
/// the room has been carved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Acceptance index of this room
    pub id: u32,
    /// Top-left corner of the room
    pub top_left: Position,
    /// Width of the room in tiles
    pub width: u32,
    /// Height of the room in tiles
    pub height: u32,
}

impl Room {
    /// Creates a new room with the given parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Room, Position};
    ///
    /// let room = Room::new(1, Position::new(5, 5), 10, 8);
    /// assert_eq!(room.id, 1);
    /// assert_eq!(room.width, 10);
    /// assert_eq!(room.height, 8);
    /// ```
    pub fn new(id: u32, top_left: Position, width: u32, height: u32) -> Self {
        Self {
            id,
            top_left,
            width,
            height,
        }
    }

    /// Gets the center of the room, rounded down.
    pub fn center(&self) -> Position {
        Position::new(
            self.top_left.x + self.width as i32 / 2,
            self.top_left.y + self.height as i32 / 2,
        )
    }

    /// Gets the area of the room in tiles.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Gets all positions covered by this room, row by row.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity(self.area() as usize);

        for y in self.top_left.y..(self.top_left.y + self.height as i32) {
            for x in self.top_left.x..(self.top_left.x + self.width as i32) {
                positions.push(Position::new(x, y));
            }
        }

        positions
    }

    /// Checks the one-tile border to the edge of a `width x height` map.
    pub fn fits_with_border(&self, width: u32, height: u32) -> bool {
        self.top_left.x >= 1
            && self.top_left.y >= 1
            && self.top_left.x + self.width as i32 + 1 <= width as i32
            && self.top_left.y + self.height as i32 + 1 <= height as i32
    }
}

/// Trait for procedural generators.
///
/// Generators draw all randomness from the injected source, so a seeded
/// source gives reproducible content.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random source.
    fn generate<R: RandomSource + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> DelveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Generates a dungeon with the default [`DungeonGenerator`].
pub fn generate<R: RandomSource + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> DelveResult<Dungeon> {
    DungeonGenerator::new().generate(config, rng)
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Creates a seeded random number generator from the config.
    ///
    /// ChaCha8's output stream is fixed across `rand` releases, so a seed
    /// names the same dungeon on every build.
    pub fn create_rng(config: &GenerationConfig) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 50);
        assert_eq!(config.room_count, 50);
        assert_eq!(config.min_room_size, 5);
        assert_eq!(config.max_room_size, 15);
        assert_eq!(config.attempt_cap, 1000);
        assert_eq!(GenerationConfig::default().seed, 42);
    }

    #[test]
    fn test_config_validation() {
        assert!(GenerationConfig::for_testing(1).validate().is_ok());

        let cases = [
            GenerationConfig::for_testing(1).with_size(0, 10),
            GenerationConfig::for_testing(1).with_room_size(0, 3),
            GenerationConfig::for_testing(1).with_room_size(4, 3),
            GenerationConfig::for_testing(1).with_room_size(3, 9),
            GenerationConfig::for_testing(1).with_size(20, 5),
            GenerationConfig::for_testing(1).with_size(1, 1),
            GenerationConfig::for_testing(1).with_size(u32::MAX, 10),
            GenerationConfig::for_testing(1).with_size(10, i32::MAX as u32 + 1),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(DelveError::InvalidConfiguration(_))),
                "{config:?} should be rejected"
            );
        }

        // Largest room that still leaves a border on a 10x10 map
        assert!(GenerationConfig::for_testing(1)
            .with_room_size(8, 8)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config =
            GenerationConfig::from_json(r#"{"seed": 9, "width": 30, "room_count": 4}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.width, 30);
        assert_eq!(config.height, 50);
        assert_eq!(config.room_count, 4);
        assert_eq!(config.attempt_cap, 1000);

        assert!(matches!(
            GenerationConfig::from_json("{not json"),
            Err(DelveError::Serde(_))
        ));
    }

    #[test]
    fn test_room_creation() {
        let room = Room::new(1, Position::new(5, 5), 10, 8);
        assert_eq!(room.id, 1);
        assert_eq!(room.top_left, Position::new(5, 5));
        assert_eq!(room.width, 10);
        assert_eq!(room.height, 8);
        assert_eq!(room.area(), 80);
        assert_eq!(room.positions().len(), 80);
    }

    #[test]
    fn test_room_geometry() {
        let room = Room::new(1, Position::new(5, 5), 10, 8);
        let positions = room.positions();

        assert_eq!(room.center(), Position::new(10, 9));
        assert_eq!(positions.first(), Some(&Position::new(5, 5))); // Top-left corner
        assert_eq!(positions.last(), Some(&Position::new(14, 12))); // Bottom-right corner
        assert!(!positions.contains(&Position::new(4, 5))); // Outside left
        assert!(!positions.contains(&Position::new(15, 12))); // Outside right
    }

    #[test]
    fn test_room_center_rounds_down() {
        let room = Room::new(0, Position::new(1, 1), 3, 4);
        assert_eq!(room.center(), Position::new(2, 3));

        let room = Room::new(0, Position::new(2, 2), 1, 1);
        assert_eq!(room.center(), Position::new(2, 2));
    }

    #[test]
    fn test_room_border_fit() {
        assert!(Room::new(0, Position::new(1, 1), 8, 8).fits_with_border(10, 10));
        assert!(!Room::new(0, Position::new(0, 1), 3, 3).fits_with_border(10, 10));
        assert!(!Room::new(0, Position::new(2, 1), 8, 3).fits_with_border(10, 10));
        assert!(!Room::new(0, Position::new(1, 7), 3, 3).fits_with_border(10, 10));
    }

    #[test]
    fn test_utils_rng_creation() {
        let config = GenerationConfig::new(12345);
        let mut a = utils::create_rng(&config);
        let mut b = utils::create_rng(&config);
        assert_eq!(a.next_in_range(0, 1000), b.next_in_range(0, 1000));
    }
}
