use super::errors::{InvitationError, InvitationResult};
use super::events::InvitationEvent;
use super::value_objects::InvitationStatus;
use crate::domain::team::Team;
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Invitation aggregate root
///
/// Links an inviting [`Team`] to an invited [`User`]. Both associations can
/// be cleared after construction; the invitation then reports itself
/// invalid and refuses to save.
///
/// # Invariants
/// - Valid only while both team and invitee are present
/// - Saving succeeds only when valid
/// - A successful save raises the invitee's invited flag
///
/// # Example
/// ```
/// use team_invitations::domain::invitation::Invitation;
/// use team_invitations::domain::team::Team;
/// use team_invitations::domain::user::{Email, User};
///
/// let owner = User::new(None);
/// let (team, _) = Team::new("A fine team", &owner).unwrap();
/// let rookie = User::new(Some(Email::new("rookie@example.com").unwrap()));
///
/// let mut invitation = Invitation::new(team, rookie);
/// assert!(invitation.event_log_statement().contains("PENDING"));
///
/// invitation.save().expect("valid invitation");
/// assert!(invitation.user().unwrap().is_invited());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    id: Uuid,
    team: Option<Team>,
    user: Option<User>,
    created_at: DateTime<Utc>,
    persisted: bool,
}

impl Invitation {
    /// Builds a new, unsaved invitation of `user` to `team`
    pub fn new(team: Team, user: User) -> Self {
        Self {
            id: Uuid::new_v4(),
            team: Some(team),
            user: Some(user),
            created_at: Utc::now(),
            persisted: false,
        }
    }

    pub fn set_team(&mut self, team: Option<Team>) {
        self.team = team;
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Lists every validation failure; empty when valid
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.team.is_none() {
            errors.push("Team must exist".to_string());
        }
        if self.user.is_none() {
            errors.push("User must exist".to_string());
        }
        errors
    }

    pub fn validate(&self) -> InvitationResult<()> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InvitationError::Validation(errors))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.team.is_some() && self.user.is_some()
    }

    /// Saves the invitation
    ///
    /// On success the invitation is marked persisted and the invitee is
    /// flagged as invited. On failure nothing changes.
    ///
    /// # Returns
    /// * `Ok(Vec<InvitationEvent>)` - Events raised by this save (empty on
    ///   a repeated save of an already invited user)
    /// * `Err(InvitationError::Validation)` - If the team or invitee is missing
    pub fn save(&mut self) -> InvitationResult<Vec<InvitationEvent>> {
        if let (Some(team), Some(user)) = (&self.team, &mut self.user) {
            let mut events = Vec::new();

            if !self.persisted {
                self.persisted = true;
                events.push(InvitationEvent::Created {
                    invitation_id: self.id,
                    team_id: team.id(),
                    user_id: user.id(),
                });
            }

            if !user.is_invited() {
                user.mark_invited();
                events.push(InvitationEvent::UserInvited {
                    invitation_id: self.id,
                    user_id: user.id(),
                });
            }

            return Ok(events);
        }

        Err(InvitationError::Validation(self.errors()))
    }

    pub fn is_new_record(&self) -> bool {
        !self.persisted
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn status(&self) -> InvitationStatus {
        InvitationStatus::derive(self.is_valid(), self.persisted)
    }

    /// Renders a one-line description of the invitation for the event log
    ///
    /// Reflects the current in-memory state and never fails:
    /// `"A fine team invited rookie@example.com [PENDING]"`.
    pub fn event_log_statement(&self) -> String {
        let team = self.team.as_ref().map_or("unknown team", Team::name);
        let invitee = match &self.user {
            Some(user) => user
                .email()
                .map_or("user without email", |email| email.as_str()),
            None => "unknown user",
        };

        format!("{} invited {} [{}]", team, invitee, self.status())
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a saved Invitation from persistence layer data
    pub fn from_persistence(id: Uuid, team: Team, user: User, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            team: Some(team),
            user: Some(user),
            created_at,
            persisted: true,
        }
    }
}
