//! # Delve
//!
//! Procedural room-and-corridor dungeon generation for tile-based roguelikes.
//!
//! ## Architecture Overview
//!
//! Delve is split into two layers:
//!
//! - **Game**: the tile grid, positions, directions and the player movement rule
//! - **Generation**: random room placement with overlap rejection, L-shaped
//!   corridors between successive rooms, and validation of the result
//!
//! Generation is a pure function of a [`GenerationConfig`] and an injected
//! [`RandomSource`]; seeding the source makes every layout reproducible.
//!
//! ```
//! use delve::{generate, GenerationConfig, Player};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = GenerationConfig::for_testing(7);
//! let mut rng = StdRng::seed_from_u64(config.seed);
//! let dungeon = generate(&config, &mut rng).unwrap();
//!
//! if let Some(player) = Player::spawn(&dungeon) {
//!     assert!(dungeon.grid.is_walkable(player.position));
//! }
//! ```

pub mod game;
pub mod generation;

// Core module re-exports
pub use game::*;
pub use generation::*;

/// Core error type for the Delve dungeon generator.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Room size limits do not fit the map bounds
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Tile access outside the grid
    #[error("Position ({x}, {y}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation defaults.
pub mod config {
    /// Default dungeon width in tiles
    pub const DEFAULT_DUNGEON_WIDTH: u32 = 50;

    /// Default dungeon height in tiles
    pub const DEFAULT_DUNGEON_HEIGHT: u32 = 50;

    /// Default number of rooms requested
    pub const DEFAULT_ROOM_COUNT: u32 = 50;

    /// Default smallest room side
    pub const DEFAULT_MIN_ROOM_SIZE: u32 = 5;

    /// Default largest room side
    pub const DEFAULT_MAX_ROOM_SIZE: u32 = 15;

    /// Default upper bound on room placement tries
    pub const DEFAULT_ATTEMPT_CAP: u32 = 1000;

    /// Largest map side whose tiles are all addressable by `i32` coordinates
    pub const MAX_MAP_SIDE: u32 = i32::MAX as u32;

    /// Default random seed
    pub const DEFAULT_SEED: u64 = 42;
}
