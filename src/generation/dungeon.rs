//! # Dungeon Generation
//!
//! Room-and-corridor dungeon layouts.
//!
//! The generator places rooms with [`RoomPlacer`] and then chains them with
//! [`CorridorCarver`], mutating one grid. The output is a pure function of the
//! config and the random source's state.

use crate::game::{Grid, Position, Tile};
use crate::generation::{
    overlaps, validate_connectivity, CorridorCarver, GenerationConfig, Generator, RandomSource,
    Room, RoomPlacer,
};
use crate::{DelveError, DelveResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// A generated map and the rooms carved into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// The carved tile grid
    pub grid: Grid,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Room>,
}

impl Dungeon {
    /// The first accepted room, where the player starts.
    pub fn start_room(&self) -> Option<&Room> {
        self.rooms.first()
    }

    /// Center of the start room.
    pub fn player_spawn(&self) -> Option<Position> {
        self.start_room().map(Room::center)
    }

    /// Serializes the dungeon to pretty-printed JSON.
    pub fn to_json(&self) -> DelveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Primary dungeon generator using the room-and-corridor algorithm.
///
/// This generator creates dungeons by:
/// 1. Placing rooms randomly, rejecting candidates that touch accepted rooms
/// 2. Connecting each room to the next one with an L-shaped corridor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DungeonGenerator {
    /// Carver used for the room chain
    pub carver: CorridorCarver,
}

impl DungeonGenerator {
    /// Creates a new dungeon generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{DungeonGenerator, GenerationConfig, Generator};
    /// use delve::generation::utils;
    ///
    /// let generator = DungeonGenerator::new();
    /// let config = GenerationConfig::for_testing(3);
    /// let mut rng = utils::create_rng(&config);
    ///
    /// let dungeon = generator.generate(&config, &mut rng).unwrap();
    /// assert!(dungeon.rooms.len() <= 3);
    /// ```
    pub fn new() -> Self {
        Self {
            carver: CorridorCarver::new(),
        }
    }
}

impl Generator<Dungeon> for DungeonGenerator {
    fn generate<R: RandomSource + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> DelveResult<Dungeon> {
        config.validate()?;
        debug!(
            "Generating {}x{} dungeon with up to {} rooms (seed {})",
            config.width, config.height, config.room_count, config.seed
        );

        let placement = RoomPlacer::from_config(config)?.place(rng)?;
        let mut grid = placement.grid;
        let rooms = placement.rooms;

        self.carver.connect_chain(&mut grid, &rooms)?;

        debug!(
            "{} finished: {} rooms, {} floor tiles",
            self.generator_type(),
            rooms.len(),
            grid.count(Tile::Floor)
        );

        Ok(Dungeon { grid, rooms })
    }

    fn validate(&self, dungeon: &Dungeon, config: &GenerationConfig) -> DelveResult<()> {
        let grid = &dungeon.grid;
        if grid.width() != config.width || grid.height() != config.height {
            return Err(DelveError::GenerationFailed(format!(
                "Grid is {}x{}, expected {}x{}",
                grid.width(),
                grid.height(),
                config.width,
                config.height
            )));
        }

        if dungeon.rooms.len() > config.room_count as usize {
            return Err(DelveError::GenerationFailed(format!(
                "{} rooms placed but only {} requested",
                dungeon.rooms.len(),
                config.room_count
            )));
        }

        for (index, room) in dungeon.rooms.iter().enumerate() {
            if !room.fits_with_border(grid.width(), grid.height()) {
                return Err(DelveError::GenerationFailed(format!(
                    "Room {} touches the map edge",
                    room.id
                )));
            }

            if overlaps(room, &dungeon.rooms[..index]) {
                return Err(DelveError::GenerationFailed(format!(
                    "Room {} overlaps an earlier room",
                    room.id
                )));
            }

            if room.positions().into_iter().any(|pos| !grid.is_walkable(pos)) {
                return Err(DelveError::GenerationFailed(format!(
                    "Room {} is not fully carved",
                    room.id
                )));
            }
        }

        validate_connectivity(grid, &dungeon.rooms)
    }

    fn generator_type(&self) -> &'static str {
        "DungeonGenerator"
    }
}
