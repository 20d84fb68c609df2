use crate::consts::MAX_MAP_SIZE;
use log::warn;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FinderError {
    #[error("cell ({x}, {y}) is outside of the {max_side}x{max_side} map")]
    OutOfBounds { x: i32, y: i32, max_side: u8 },
    #[error("map side {0} is outside of the supported range 1..={max}", max = MAX_MAP_SIZE)]
    InvalidSide(usize),
}

impl FinderError {
    pub fn warn(&self, description: &str) {
        warn!("{}: {}.", description, self);
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::FinderError;
    use crate::logging::init_logging;
    use log::LevelFilter;

    #[test]
    fn test_messages() {
        let e = FinderError::OutOfBounds {
            x: -1,
            y: 3,
            max_side: 60,
        };
        assert_eq!(e.to_string(), "cell (-1, 3) is outside of the 60x60 map");
        assert_eq!(
            FinderError::InvalidSide(0).to_string(),
            "map side 0 is outside of the supported range 1..=60"
        );
    }

    #[test]
    fn test_warn() {
        init_logging(LevelFilter::Trace).unwrap();
        FinderError::InvalidSide(61).warn("Failed to create the terrain map");
    }
}
