use super::events::TeamEvent;
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// A named group owned by a single user. Teams issue invitations to
/// other users.
///
/// # Invariants
/// - Name cannot be blank
/// - Owner is fixed at creation
///
/// # Example
/// ```
/// use team_invitations::domain::team::Team;
/// use team_invitations::domain::user::User;
///
/// let owner = User::new(None);
/// let (team, events) = Team::new("A fine team", &owner).expect("valid team");
///
/// assert_eq!(team.name(), "A fine team");
/// assert_eq!(team.owner_id(), owner.id());
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: Uuid,
    name: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `name` - Display name of the team (cannot be blank)
    /// * `owner` - The user owning the team
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and events generated
    /// * `Err(String)` - If the name is blank
    ///
    /// The owner is not moved into the team here; callers do that with
    /// [`User::assign_team`] once the team exists.
    pub fn new(name: impl Into<String>, owner: &User) -> Result<(Self, Vec<TeamEvent>), String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        let team = Self {
            id: Uuid::new_v4(),
            name,
            owner_id: owner.id(),
            created_at: Utc::now(),
        };

        let events = vec![TeamEvent::Created {
            team_id: team.id,
            name: team.name.clone(),
            owner_id: team.owner_id,
        }];

        Ok((team, events))
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored in the database.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        owner_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_name() {
        let owner = User::new(None);

        let result = Team::new("A fine team", &owner);

        assert!(result.is_ok());
        let (team, events) = result.unwrap();
        assert_eq!(team.name(), "A fine team");
        assert_eq!(team.owner_id(), owner.id());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn create_team_with_blank_name_fails() {
        let owner = User::new(None);

        let result = Team::new("   ", &owner);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Team name cannot be empty"));
    }

    #[test]
    fn team_generates_created_event() {
        let owner = User::new(None);
        let (team, events) = Team::new("A fine team", &owner).unwrap();

        match &events[0] {
            TeamEvent::Created {
                team_id,
                name,
                owner_id,
            } => {
                assert_eq!(*team_id, team.id());
                assert_eq!(name, "A fine team");
                assert_eq!(*owner_id, owner.id());
            }
        }
    }

    #[test]
    fn creating_a_team_leaves_owner_untouched() {
        let owner = User::new(None);
        let _ = Team::new("A fine team", &owner).unwrap();
        assert!(owner.team_id().is_none());
    }
}
