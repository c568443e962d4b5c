use serde::{Deserialize, Serialize};

/// Status of an invitation as derived from its current state
///
/// ```text
/// Invalid <-> Pending -> Sent
/// ```
///
/// `Invalid` wins over every other status: a saved invitation whose team or
/// invitee has since been cleared reports `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationStatus {
    /// Team and invitee present, not yet persisted
    Pending,
    /// Persisted; the invitee has been flagged as invited
    Sent,
    /// Team or invitee missing
    Invalid,
}

impl InvitationStatus {
    /// Derives the status from validity and persistence
    ///
    /// # Example
    /// ```
    /// use team_invitations::domain::invitation::InvitationStatus;
    ///
    /// assert_eq!(InvitationStatus::derive(true, false), InvitationStatus::Pending);
    /// assert_eq!(InvitationStatus::derive(false, true), InvitationStatus::Invalid);
    /// ```
    pub fn derive(valid: bool, persisted: bool) -> Self {
        match (valid, persisted) {
            (false, _) => InvitationStatus::Invalid,
            (true, false) => InvitationStatus::Pending,
            (true, true) => InvitationStatus::Sent,
        }
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationStatus::Pending => write!(f, "PENDING"),
            InvitationStatus::Sent => write!(f, "SENT"),
            InvitationStatus::Invalid => write!(f, "INVALID"),
        }
    }
}
