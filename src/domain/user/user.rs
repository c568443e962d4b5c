use super::value_objects::Email;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity
///
/// A user may belong to one team and may be the target of an invitation.
/// The `invited` flag is only ever raised by a successfully saved
/// [`Invitation`](crate::domain::invitation::Invitation).
///
/// # Example
/// ```
/// use team_invitations::domain::user::{Email, User};
///
/// let user = User::new(Some(Email::new("rookie@example.com").unwrap()));
/// assert!(!user.is_invited());
/// assert!(user.team_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Uuid,
    email: Option<Email>,
    team_id: Option<Uuid>,
    invited: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user. Team owners are commonly created without an email.
    pub fn new(email: Option<Email>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            team_id: None,
            invited: false,
            created_at: Utc::now(),
        }
    }

    /// Moves the user into a team
    pub fn assign_team(&mut self, team_id: Uuid) {
        self.team_id = Some(team_id);
    }

    /// Flags the user as the target of a saved invitation
    pub(crate) fn mark_invited(&mut self) {
        self.invited = true;
    }

    pub fn is_invited(&self) -> bool {
        self.invited
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a User from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        email: Option<Email>,
        team_id: Option<Uuid>,
        invited: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            team_id,
            invited,
            created_at,
        }
    }
}
