//! # Room Placement
//!
//! Bounded retry loop that samples candidates, rejects overlapping ones and
//! carves the accepted rooms into a fresh grid.

use crate::game::{Grid, Tile};
use crate::generation::{overlaps, GenerationConfig, RandomSource, Room, RoomSampler};
use crate::DelveResult;
use log::{debug, trace, warn};

/// Places non-overlapping rooms until the target count or the attempt cap
/// is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPlacer {
    /// Candidate generator
    pub sampler: RoomSampler,
    /// Number of rooms wanted
    pub target_count: u32,
    /// Maximum number of candidates drawn, accepted or not
    pub attempt_cap: u32,
}

/// Outcome of a placement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Grid with every accepted room carved to Floor
    pub grid: Grid,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Room>,
    /// Candidates drawn
    pub attempts: u32,
}

impl RoomPlacer {
    /// Creates a placer from a generation config.
    pub fn from_config(config: &GenerationConfig) -> DelveResult<Self> {
        Ok(Self {
            sampler: RoomSampler::new(
                config.width,
                config.height,
                config.min_room_size,
                config.max_room_size,
            )?,
            target_count: config.room_count,
            attempt_cap: config.attempt_cap,
        })
    }

    /// Runs the placement loop.
    ///
    /// Falling short of `target_count` is a normal outcome once
    /// `attempt_cap` candidates have been drawn.
    pub fn place<R: RandomSource + ?Sized>(&self, rng: &mut R) -> DelveResult<Placement> {
        let mut grid = Grid::new(self.sampler.bounds_width, self.sampler.bounds_height);
        let mut rooms: Vec<Room> = Vec::new();
        let mut attempts = 0;

        while (rooms.len() as u32) < self.target_count && attempts < self.attempt_cap {
            let candidate = self.sampler.sample(rng, rooms.len() as u32)?;

            if overlaps(&candidate, &rooms) {
                trace!("Rejected candidate {:?} on attempt {}", candidate, attempts);
            } else {
                trace!("Accepted room {:?} on attempt {}", candidate, attempts);
                carve_room(&mut grid, &candidate)?;
                rooms.push(candidate);
            }

            attempts += 1;
        }

        if (rooms.len() as u32) < self.target_count {
            warn!(
                "Attempt cap {} reached with {} of {} rooms placed",
                self.attempt_cap,
                rooms.len(),
                self.target_count
            );
        }
        debug!("Placed {} rooms in {} attempts", rooms.len(), attempts);

        Ok(Placement {
            grid,
            rooms,
            attempts,
        })
    }
}

/// Sets every tile covered by the room to Floor.
pub fn carve_room(grid: &mut Grid, room: &Room) -> DelveResult<()> {
    for pos in room.positions() {
        grid.set(pos, Tile::Floor)?;
    }
    Ok(())
}
