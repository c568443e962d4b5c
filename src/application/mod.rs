// Application layer module
// Use cases orchestrating domain aggregates and repository ports

pub mod invitation_service;

pub use invitation_service::InvitationService;
