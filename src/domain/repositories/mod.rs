// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod invitation_repository;
pub mod team_repository;
pub mod user_repository;

pub use invitation_repository::InvitationRepository;
pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;
