// Algorithms and data structures.
pub mod visitation_set;
