pub mod algorithms;
pub mod config;
pub mod consts;
pub mod errors;
pub mod geometry;
pub mod logging;

pub use algorithms::visitation_set::VisitationSet;
pub use errors::FinderError;
pub use geometry::direction::Direction;
pub use geometry::map_location::MapLocation;

/// Sets up logging for the robot. Should be called once when the robot is created.
pub fn setup() -> Result<(), log::SetLoggerError> {
    logging::init_logging(config::LOG_LEVEL)
}
