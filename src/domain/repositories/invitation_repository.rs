use crate::domain::invitation::Invitation;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for Invitation aggregate
///
/// Only saved invitations are stored, so everything returned by the finders
/// carries both its team and its invitee.
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Save an invitation (insert or update) and raise the stored invitee's
    /// invited flag
    ///
    /// Both writes happen together or not at all. Only the flag is written
    /// to the invitee; the rest of the stored user is left as it is. Fails
    /// for invitations missing their team or invitee.
    async fn save(&self, invitation: &Invitation) -> Result<(), String>;

    /// Find an invitation by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invitation>, String>;

    /// Find all invitations issued by a team, oldest first
    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Invitation>, String>;
}
