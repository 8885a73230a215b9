// Persisted record shapes for the three store collections.
// These mirror what the JSON files actually hold, looseness included;
// normalization (numeric parsing, skill splitting) lives with the readers.

pub mod application;
pub mod drive;
pub mod student;
