use crate::consts::MAX_MAP_SIZE;
use crate::errors::FinderError;
use crate::geometry::direction::Direction;
use derive_more::Display;

/// Coordinates of a cell on a Battlecode map. Both coordinates are in `[0, MAX_MAP_SIZE)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct MapLocation {
    x: u8,
    y: u8,
}

#[inline]
fn in_map(coordinate: i32) -> bool {
    0 <= coordinate && coordinate < MAX_MAP_SIZE as i32
}

impl MapLocation {
    pub fn new(x: i32, y: i32) -> Result<Self, FinderError> {
        if in_map(x) && in_map(y) {
            Ok(MapLocation {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(FinderError::OutOfBounds {
                x,
                y,
                max_side: MAX_MAP_SIZE,
            })
        }
    }

    /// The caller must ensure that both coordinates are below `MAX_MAP_SIZE`.
    #[inline]
    pub unsafe fn unchecked_new(x: u8, y: u8) -> Self {
        MapLocation { x, y }
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// The neighbouring location in given direction or `None` if it is off the map.
    pub fn add(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        MapLocation::new(self.x as i32 + dx as i32, self.y as i32 + dy as i32).ok()
    }

    pub fn around(self) -> Vec<Self> {
        Direction::all().filter_map(|d| self.add(d)).collect()
    }
}

impl TryFrom<(i32, i32)> for MapLocation {
    type Error = FinderError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        MapLocation::new(x, y)
    }
}
