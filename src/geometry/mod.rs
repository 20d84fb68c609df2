// Map coordinates and movement directions.
pub mod direction;
pub mod map_location;
