use crate::geometry::direction::Direction::*;
use enum_iterator::{all, Sequence};

/// Battlecode directions. North is towards increasing `y`, east towards increasing `x`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Sequence)]
#[repr(u8)]
pub enum Direction {
    Center = 0,
    North = 1,
    NorthEast = 2,
    East = 3,
    SouthEast = 4,
    South = 5,
    SouthWest = 6,
    West = 7,
    NorthWest = 8,
}

impl Direction {
    /// The eight directions a robot can move in, clockwise from `North`.
    pub fn all() -> impl Iterator<Item = Direction> {
        all::<Direction>().filter(|&direction| direction != Center)
    }

    #[inline]
    pub fn offset(self) -> (i8, i8) {
        match self {
            Center => (0, 0),
            North => (0, 1),
            NorthEast => (1, 1),
            East => (1, 0),
            SouthEast => (1, -1),
            South => (0, -1),
            SouthWest => (-1, -1),
            West => (-1, 0),
            NorthWest => (-1, 1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Center => Center,
            North => South,
            NorthEast => SouthWest,
            East => West,
            SouthEast => NorthWest,
            South => North,
            SouthWest => NorthEast,
            West => East,
            NorthWest => SouthEast,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::direction::Direction;
    use crate::geometry::direction::Direction::*;

    #[test]
    fn test_all() {
        assert_eq!(
            Direction::all().collect::<Vec<_>>(),
            vec![North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest]
        );
    }

    #[test]
    fn test_offsets_cancel_out() {
        let (dx, dy) = Direction::all().fold((0, 0), |(x, y), d| {
            let (ox, oy) = d.offset();
            (x + ox, y + oy)
        });
        assert_eq!((dx, dy), (0, 0));
        assert_eq!(Center.offset(), (0, 0));
    }

    #[test]
    fn test_opposite() {
        for d in Direction::all() {
            let (dx, dy) = d.offset();
            assert_eq!(d.opposite().offset(), (-dx, -dy));
            assert_eq!(d.opposite().opposite(), d);
        }
        assert_eq!(Center.opposite(), Center);
    }
}
