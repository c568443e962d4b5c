use thiserror::Error;

/// Errors that can occur when saving an invitation
#[derive(Debug, Error, PartialEq)]
pub enum InvitationError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl InvitationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, InvitationError::Validation(_))
    }
}

pub type InvitationResult<T> = Result<T, InvitationError>;
