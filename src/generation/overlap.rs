//! # Overlap Checking
//!
//! Rejects candidate rooms that would touch an accepted room.

use crate::generation::Room;

/// Margin added to the trailing edges of both rooms before intersecting.
pub const MARGIN_DISTANCE: i32 = 1;

/// Checks whether two rooms collide.
///
/// Each room's extent is grown by [`MARGIN_DISTANCE`] on its right and bottom
/// edges only, then the two boxes are intersected on both axes. The margin is
/// not symmetric: a room may sit closer on one side than the other.
pub fn rooms_collide(candidate: &Room, room: &Room) -> bool {
    let (cx, cy) = (candidate.top_left.x, candidate.top_left.y);
    let (rx, ry) = (room.top_left.x, room.top_left.y);

    cx < rx + room.width as i32 + MARGIN_DISTANCE
        && cx + candidate.width as i32 + MARGIN_DISTANCE > rx
        && cy < ry + room.height as i32 + MARGIN_DISTANCE
        && cy + candidate.height as i32 + MARGIN_DISTANCE > ry
}

/// Checks a candidate against every accepted room.
///
/// Stops at the first collision.
///
/// # Examples
///
/// ```
/// use delve::{overlaps, Position, Room};
///
/// let accepted = vec![Room::new(0, Position::new(1, 1), 3, 3)];
/// assert!(overlaps(&Room::new(1, Position::new(4, 1), 3, 3), &accepted));
/// assert!(!overlaps(&Room::new(1, Position::new(5, 1), 3, 3), &accepted));
/// ```
pub fn overlaps(candidate: &Room, accepted: &[Room]) -> bool {
    accepted.iter().any(|room| rooms_collide(candidate, room))
}
