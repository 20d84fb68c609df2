/// Battlecode map sizes range between 20x20 and 60x60 inclusive.
pub const MIN_MAP_SIZE: u8 = 20;
pub const MAX_MAP_SIZE: u8 = 60;

pub const MAX_MAP_AREA: usize = (MAX_MAP_SIZE as usize) * (MAX_MAP_SIZE as usize);
