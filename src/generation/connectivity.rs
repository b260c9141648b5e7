//! # Connectivity
//!
//! Flood fill over Floor tiles, used to check that the room chain is reachable.

use crate::game::{Grid, Position};
use crate::generation::Room;
use crate::{DelveError, DelveResult};
use pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// Returns every Floor tile reachable from `start` through cardinal steps.
///
/// Empty if `start` itself is not walkable.
pub fn reachable_from(grid: &Grid, start: Position) -> HashSet<Position> {
    if !grid.is_walkable(start) {
        return HashSet::new();
    }

    bfs_reach(start, |&pos| {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(|&next| grid.is_walkable(next))
            .collect::<Vec<_>>()
    })
    .collect()
}

/// Checks that every room's center can be reached from room 0's center.
pub fn validate_connectivity(grid: &Grid, rooms: &[Room]) -> DelveResult<()> {
    let Some(first) = rooms.first() else {
        return Ok(());
    };

    let visited = reachable_from(grid, first.center());
    for room in rooms {
        if !visited.contains(&room.center()) {
            return Err(DelveError::GenerationFailed(format!(
                "Room {} is not connected to the start room",
                room.id
            )));
        }
    }

    Ok(())
}
