// Team domain module
// Contains team aggregate root and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::Team;
