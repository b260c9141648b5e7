//! # Room Sampling
//!
//! Draws random candidate rooms that respect the one-tile map border.

use crate::game::Position;
use crate::generation::{RandomSource, Room};
use crate::{config, DelveError, DelveResult};

/// Draws candidate rooms within fixed map bounds.
///
/// Each call is independent; rejecting candidates is the placer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSampler {
    /// Map width in tiles
    pub bounds_width: u32,
    /// Map height in tiles
    pub bounds_height: u32,
    /// Smallest room side
    pub min_size: u32,
    /// Largest room side
    pub max_size: u32,
}

impl RoomSampler {
    /// Creates a sampler, rejecting size limits that cannot leave a border.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::RoomSampler;
    ///
    /// assert!(RoomSampler::new(10, 10, 3, 4).is_ok());
    /// assert!(RoomSampler::new(10, 10, 20, 25).is_err());
    /// ```
    pub fn new(
        bounds_width: u32,
        bounds_height: u32,
        min_size: u32,
        max_size: u32,
    ) -> DelveResult<Self> {
        if min_size == 0 || min_size > max_size {
            return Err(DelveError::InvalidConfiguration(format!(
                "room size range {}..={} is empty",
                min_size, max_size
            )));
        }

        if bounds_width > config::MAX_MAP_SIDE || bounds_height > config::MAX_MAP_SIDE {
            return Err(DelveError::InvalidConfiguration(format!(
                "map size {}x{} exceeds the coordinate limit {}",
                bounds_width,
                bounds_height,
                config::MAX_MAP_SIDE
            )));
        }

        let sampler = Self {
            bounds_width,
            bounds_height,
            min_size,
            max_size,
        };
        sampler.check_range(bounds_width, max_size)?;
        sampler.check_range(bounds_height, max_size)?;
        Ok(sampler)
    }

    /// Draws one candidate room.
    ///
    /// Width and height are drawn from `min_size..=max_size`, then
    /// `x` from `1..=bounds_width - width - 1` and `y` likewise, so the room
    /// always keeps a one-tile border to the map edge.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R, id: u32) -> DelveResult<Room> {
        let sizes = (i32::try_from(self.min_size), i32::try_from(self.max_size));
        let (min_size, max_size) = match sizes {
            (Ok(min_size), Ok(max_size)) if min_size <= max_size => (min_size, max_size),
            _ => {
                return Err(DelveError::InvalidConfiguration(format!(
                    "room size range {}..={} is not drawable",
                    self.min_size, self.max_size
                )))
            }
        };
        let width = rng.next_in_range(min_size, max_size);
        let height = rng.next_in_range(min_size, max_size);

        let max_x = self.check_range(self.bounds_width, width as u32)?;
        let max_y = self.check_range(self.bounds_height, height as u32)?;

        let x = rng.next_in_range(1, max_x);
        let y = rng.next_in_range(1, max_y);

        Ok(Room::new(id, Position::new(x, y), width as u32, height as u32))
    }

    /// Returns the largest legal top-left coordinate along one axis.
    fn check_range(&self, bound: u32, side: u32) -> DelveResult<i32> {
        let max_start = i64::from(bound) - i64::from(side) - 1;
        if max_start < 1 {
            return Err(DelveError::InvalidConfiguration(format!(
                "room side {} leaves no placement range on a {}x{} map",
                side, self.bounds_width, self.bounds_height
            )));
        }
        i32::try_from(max_start).map_err(|_| {
            DelveError::InvalidConfiguration(format!(
                "map size {}x{} exceeds the coordinate limit {}",
                self.bounds_width,
                self.bounds_height,
                config::MAX_MAP_SIDE
            ))
        })
    }
}
