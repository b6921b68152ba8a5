pub mod debrief;
pub mod pending;
pub mod quiz;
pub mod simulation;
pub mod summary;
pub mod tips;
pub mod welcome;
