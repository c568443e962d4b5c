use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::invitation::Invitation;
use crate::domain::repositories::{InvitationRepository, TeamRepository, UserRepository};
use crate::domain::team::Team;
use crate::domain::user::{Email, User};

/// Invitation as stored: references only, resolved on read
#[derive(Debug, Clone)]
struct InvitationRow {
    id: Uuid,
    team_id: Uuid,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<Uuid, User>,
    teams: HashMap<Uuid, Team>,
    invitations: HashMap<Uuid, InvitationRow>,
}

impl StoreState {
    fn resolve(&self, row: &InvitationRow) -> Result<Invitation, String> {
        let team = self
            .teams
            .get(&row.team_id)
            .cloned()
            .ok_or_else(|| format!("Team not found: {}", row.team_id))?;
        let user = self
            .users
            .get(&row.user_id)
            .cloned()
            .ok_or_else(|| format!("User not found: {}", row.user_id))?;

        Ok(Invitation::from_persistence(row.id, team, user, row.created_at))
    }
}

/// In-process store implementing every repository trait
///
/// Enforces the same constraints as the PostgreSQL schema: unique user
/// emails, teams owned by stored users, and invitations referencing existing
/// teams and users.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Consolidated state under a single lock so reads see consistent joins.
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn save(&self, user: &User) -> Result<(), String> {
        let mut state = self.state.write().await;

        if let Some(email) = user.email() {
            let taken = state
                .users
                .values()
                .any(|other| other.id() != user.id() && other.email() == Some(email));
            if taken {
                return Err(format!("Failed to save user: email {} already taken", email));
            }
        }

        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|user| user.email() == Some(email))
            .cloned())
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &Team) -> Result<(), String> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&team.owner_id()) {
            return Err(format!("Failed to save team: owner {} not found", team.owner_id()));
        }

        state.teams.insert(team.id(), team.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self.state.read().await.teams.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String> {
        let state = self.state.read().await;
        let mut teams: Vec<Team> = state
            .teams
            .values()
            .filter(|team| team.owner_id() == owner_id)
            .cloned()
            .collect();
        teams.sort_by_key(|team| std::cmp::Reverse(team.created_at()));
        Ok(teams)
    }
}

#[async_trait]
impl InvitationRepository for InMemoryStore {
    async fn save(&self, invitation: &Invitation) -> Result<(), String> {
        let (team, user) = match (invitation.team(), invitation.user()) {
            (Some(team), Some(user)) => (team, user),
            _ => return Err(format!("Invitation {} is invalid", invitation.id())),
        };

        let mut state = self.state.write().await;
        if !state.teams.contains_key(&team.id()) {
            return Err(format!("Failed to save invitation: team {} not found", team.id()));
        }
        let Some(stored_user) = state.users.get_mut(&user.id()) else {
            return Err(format!("Failed to save invitation: user {} not found", user.id()));
        };
        stored_user.mark_invited();

        state.invitations.insert(
            invitation.id(),
            InvitationRow {
                id: invitation.id(),
                team_id: team.id(),
                user_id: user.id(),
                created_at: invitation.created_at(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invitation>, String> {
        let state = self.state.read().await;
        state
            .invitations
            .get(&id)
            .map(|row| state.resolve(row))
            .transpose()
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Invitation>, String> {
        let state = self.state.read().await;
        let mut rows: Vec<&InvitationRow> = state
            .invitations
            .values()
            .filter(|row| row.team_id == team_id)
            .collect();
        rows.sort_by_key(|row| row.created_at);

        rows.into_iter().map(|row| state.resolve(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rookie() -> User {
        User::new(Some(Email::new("rookie@example.com").unwrap()))
    }

    #[tokio::test]
    async fn user_round_trip() {
        let store = InMemoryStore::new();
        let user = rookie();

        UserRepository::save(&store, &user).await.unwrap();

        let found = UserRepository::find_by_id(&store, user.id()).await.unwrap();
        assert_eq!(found, Some(user.clone()));

        let by_email = store
            .find_by_email(&Email::new("rookie@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(by_email.map(|u| u.id()), Some(user.id()));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryStore::new();
        UserRepository::save(&store, &rookie()).await.unwrap();

        let result = UserRepository::save(&store, &rookie()).await;

        assert!(result.unwrap_err().contains("already taken"));
    }

    #[tokio::test]
    async fn users_without_email_do_not_collide() {
        let store = InMemoryStore::new();
        UserRepository::save(&store, &User::new(None)).await.unwrap();
        UserRepository::save(&store, &User::new(None)).await.unwrap();
    }

    #[tokio::test]
    async fn team_requires_stored_owner() {
        let store = InMemoryStore::new();
        let owner = User::new(None);
        let (team, _) = Team::new("A fine team", &owner).unwrap();

        assert!(TeamRepository::save(&store, &team).await.is_err());

        UserRepository::save(&store, &owner).await.unwrap();
        TeamRepository::save(&store, &team).await.unwrap();

        let owned = store.find_by_owner(owner.id()).await.unwrap();
        assert_eq!(owned, vec![team]);
    }

    #[tokio::test]
    async fn invitation_reads_current_invitee() {
        let store = InMemoryStore::new();
        let owner = User::new(None);
        let (team, _) = Team::new("A fine team", &owner).unwrap();
        let user = rookie();
        UserRepository::save(&store, &owner).await.unwrap();
        TeamRepository::save(&store, &team).await.unwrap();
        UserRepository::save(&store, &user).await.unwrap();

        let mut invitation = Invitation::new(team.clone(), user);
        invitation.save().unwrap();
        InvitationRepository::save(&store, &invitation).await.unwrap();

        let found = InvitationRepository::find_by_id(&store, invitation.id())
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_persisted());
        assert!(found.user().unwrap().is_invited());

        let for_team = store.find_by_team(team.id()).await.unwrap();
        assert_eq!(for_team.len(), 1);
    }

    #[tokio::test]
    async fn invalid_invitation_is_rejected() {
        let store = InMemoryStore::new();
        let owner = User::new(None);
        let (team, _) = Team::new("A fine team", &owner).unwrap();
        let mut invitation = Invitation::new(team, rookie());
        invitation.set_user(None);

        let result = InvitationRepository::save(&store, &invitation).await;

        assert!(result.unwrap_err().contains("invalid"));
    }

    #[tokio::test]
    async fn invitation_requires_stored_references() {
        let store = InMemoryStore::new();
        let owner = User::new(None);
        let (team, _) = Team::new("A fine team", &owner).unwrap();
        let invitation = Invitation::new(team, rookie());

        let result = InvitationRepository::save(&store, &invitation).await;

        assert!(result.unwrap_err().contains("not found"));
    }

    #[tokio::test]
    async fn invitation_save_only_raises_the_flag() {
        let store = InMemoryStore::new();
        let owner = User::new(None);
        let (team, _) = Team::new("A fine team", &owner).unwrap();
        let mut user = rookie();
        UserRepository::save(&store, &owner).await.unwrap();
        TeamRepository::save(&store, &team).await.unwrap();
        UserRepository::save(&store, &user).await.unwrap();
        let invitation = Invitation::new(team.clone(), user.clone());

        user.assign_team(team.id());
        UserRepository::save(&store, &user).await.unwrap();
        InvitationRepository::save(&store, &invitation).await.unwrap();

        let stored = UserRepository::find_by_id(&store, user.id())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_invited());
        assert_eq!(stored.team_id(), Some(team.id()));
    }

    #[tokio::test]
    async fn rejected_invitation_leaves_invitee_alone() {
        let store = InMemoryStore::new();
        let owner = User::new(None);
        let (team, _) = Team::new("A fine team", &owner).unwrap();
        let user = rookie();
        UserRepository::save(&store, &user).await.unwrap();
        let invitation = Invitation::new(team, user.clone());

        assert!(InvitationRepository::save(&store, &invitation).await.is_err());

        let stored = UserRepository::find_by_id(&store, user.id())
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_invited());
    }
}
