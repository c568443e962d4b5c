use std::sync::Arc;

use uuid::Uuid;

use crate::domain::invitation::{Invitation, InvitationError, InvitationEvent, InvitationResult};
use crate::domain::repositories::{InvitationRepository, TeamRepository, UserRepository};
use crate::domain::team::{Team, TeamEvent};
use crate::domain::user::{Email, User};

/// Use cases around teams, users and invitations
///
/// Owns the persistence side of saving an invitation: the domain decides
/// whether the save happens, the service hands the saved invitation to the
/// invitation repository.
#[derive(Clone)]
pub struct InvitationService {
    users: Arc<dyn UserRepository>,
    teams: Arc<dyn TeamRepository>,
    invitations: Arc<dyn InvitationRepository>,
}

impl InvitationService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        teams: Arc<dyn TeamRepository>,
        invitations: Arc<dyn InvitationRepository>,
    ) -> Self {
        Self {
            users,
            teams,
            invitations,
        }
    }

    /// Registers a new user, optionally with an email address
    pub async fn register_user(&self, email: Option<Email>) -> Result<User, String> {
        let user = User::new(email);
        self.users.save(&user).await?;
        tracing::info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    /// Creates a team and moves its owner into it
    ///
    /// # Returns
    /// * `Ok(None)` - If the owner does not exist
    pub async fn create_team(
        &self,
        name: String,
        owner_id: Uuid,
    ) -> Result<Option<(Team, Vec<TeamEvent>)>, String> {
        let Some(mut owner) = self.users.find_by_id(owner_id).await? else {
            return Ok(None);
        };

        let (team, events) = Team::new(name, &owner)?;
        self.teams.save(&team).await?;

        owner.assign_team(team.id());
        self.users.save(&owner).await?;

        tracing::info!(team_id = %team.id(), owner_id = %owner.id(), name = team.name(), "team created");
        Ok(Some((team, events)))
    }

    /// Saves an invitation and flags its invitee as invited
    ///
    /// Validation failures leave both the invitation and the invitee
    /// untouched and write nothing. The repository stores the invitation
    /// and raises the stored invitee's flag in a single write, so a failed
    /// write leaves every stored record as it was.
    pub async fn save(&self, invitation: &mut Invitation) -> InvitationResult<Vec<InvitationEvent>> {
        let before = invitation.clone();

        let events = match invitation.save() {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(
                    invitation_id = %invitation.id(),
                    statement = %invitation.event_log_statement(),
                    error = %err,
                    "invitation rejected"
                );
                return Err(err);
            }
        };

        if let Err(err) = self.invitations.save(invitation).await {
            tracing::error!(invitation_id = %invitation.id(), error = %err, "failed to persist invitation");
            *invitation = before;
            return Err(InvitationError::Repository(err));
        }

        tracing::info!(
            invitation_id = %invitation.id(),
            statement = %invitation.event_log_statement(),
            "invitation saved"
        );
        Ok(events)
    }

    /// Looks up a team and a user and invites the user to the team
    ///
    /// A missing or unknown team or user is reported the same way as an
    /// invitation that lost its association: as a validation error.
    pub async fn invite(
        &self,
        team_id: Option<Uuid>,
        user_id: Option<Uuid>,
    ) -> InvitationResult<Invitation> {
        let team = match team_id {
            Some(id) => self
                .teams
                .find_by_id(id)
                .await
                .map_err(InvitationError::Repository)?,
            None => None,
        };
        let user = match user_id {
            Some(id) => self
                .users
                .find_by_id(id)
                .await
                .map_err(InvitationError::Repository)?,
            None => None,
        };

        let mut invitation = match (team, user) {
            (Some(team), Some(user)) => Invitation::new(team, user),
            (team, user) => {
                let mut errors = Vec::new();
                if team.is_none() {
                    errors.push("Team must exist".to_string());
                }
                if user.is_none() {
                    errors.push("User must exist".to_string());
                }
                tracing::warn!(?team_id, ?user_id, "invitation references unknown records");
                return Err(InvitationError::Validation(errors));
            }
        };

        self.save(&mut invitation).await?;
        Ok(invitation)
    }

    pub async fn find_user(&self, id: Uuid) -> Result<Option<User>, String> {
        self.users.find_by_id(id).await
    }

    pub async fn find_team(&self, id: Uuid) -> Result<Option<Team>, String> {
        self.teams.find_by_id(id).await
    }

    pub async fn find_invitation(&self, id: Uuid) -> Result<Option<Invitation>, String> {
        self.invitations.find_by_id(id).await
    }

    pub async fn invitations_for_team(&self, team_id: Uuid) -> Result<Vec<Invitation>, String> {
        self.invitations.find_by_team(team_id).await
    }
}
