// Invitation domain module
// Contains the invitation aggregate, its status, events and errors

#![allow(clippy::module_inception)]

pub mod errors;
pub mod events;
pub mod invitation;
pub mod value_objects;

pub use errors::{InvitationError, InvitationResult};
pub use events::InvitationEvent;
pub use invitation::Invitation;
pub use value_objects::InvitationStatus;
