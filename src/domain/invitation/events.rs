use uuid::Uuid;

/// Domain events raised when an invitation is saved
///
/// # Example
/// ```
/// use team_invitations::domain::invitation::InvitationEvent;
/// use uuid::Uuid;
///
/// let invitation_id = Uuid::new_v4();
/// let event = InvitationEvent::UserInvited {
///     invitation_id,
///     user_id: Uuid::new_v4(),
/// };
/// assert_eq!(event.invitation_id(), invitation_id);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InvitationEvent {
    /// Fired the first time an invitation is persisted
    Created {
        invitation_id: Uuid,
        team_id: Uuid,
        user_id: Uuid,
    },
    /// Fired when the invitee's invited flag is raised
    UserInvited { invitation_id: Uuid, user_id: Uuid },
}

impl InvitationEvent {
    pub fn invitation_id(&self) -> Uuid {
        match self {
            InvitationEvent::Created { invitation_id, .. } => *invitation_id,
            InvitationEvent::UserInvited { invitation_id, .. } => *invitation_id,
        }
    }
}
