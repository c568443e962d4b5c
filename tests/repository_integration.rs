//! Integration tests for the PostgreSQL repository layer
//!
//! These tests need a database: run with
//! `DATABASE_URL=... cargo test -- --ignored`. Migrations are applied on
//! connect and every test uses fresh ids, so runs do not interfere.

use std::sync::Arc;

use sqlx::PgPool;
use team_invitations::application::InvitationService;
use team_invitations::domain::invitation::Invitation;
use team_invitations::domain::repositories::{
    InvitationRepository, TeamRepository, UserRepository,
};
use team_invitations::domain::team::Team;
use team_invitations::domain::user::{Email, User};
use team_invitations::infrastructure::repositories::{
    PostgresInvitationRepository, PostgresTeamRepository, PostgresUserRepository,
};
use uuid::Uuid;

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn unique_email(label: &str) -> Email {
    Email::new(format!("{}-{}@example.com", label, Uuid::new_v4())).expect("valid email")
}

/// Clean up a team and its owner; invitations cascade
async fn cleanup(pool: &PgPool, team_id: Uuid, user_ids: &[Uuid]) {
    sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(pool)
        .await
        .expect("Failed to cleanup team");

    for user_id in user_ids {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(pool)
            .await
            .expect("Failed to cleanup user");
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_user_repository_save_and_find() {
    let pool = setup_test_db().await;
    let user_repo = PostgresUserRepository::new(pool.clone());

    let email = unique_email("rookie");
    let mut user = User::new(Some(email.clone()));
    user_repo.save(&user).await.expect("Failed to save user");

    let found = user_repo
        .find_by_email(&email)
        .await
        .expect("Failed to find user by email")
        .expect("User should be found");
    assert_eq!(found.id(), user.id());
    assert!(!found.is_invited());

    // Update path
    let owner = User::new(None);
    user_repo.save(&owner).await.unwrap();
    let (team, _) = Team::new("Repo team", &owner).unwrap();
    PostgresTeamRepository::new(pool.clone())
        .save(&team)
        .await
        .unwrap();
    user.assign_team(team.id());
    user_repo.save(&user).await.unwrap();

    let found = user_repo.find_by_id(user.id()).await.unwrap().unwrap();
    assert_eq!(found.team_id(), Some(team.id()));

    cleanup(&pool, team.id(), &[user.id(), owner.id()]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_user_repository_duplicate_email_fails() {
    let pool = setup_test_db().await;
    let user_repo = PostgresUserRepository::new(pool.clone());

    let email = unique_email("duplicate");
    let first = User::new(Some(email.clone()));
    let second = User::new(Some(email));

    user_repo.save(&first).await.unwrap();
    let result = user_repo.save(&second).await;

    assert!(result.is_err(), "Duplicate email should be rejected");

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(first.id())
        .execute(&pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_team_repository_find_by_owner() {
    let pool = setup_test_db().await;
    let user_repo = PostgresUserRepository::new(pool.clone());
    let team_repo = PostgresTeamRepository::new(pool.clone());

    let owner = User::new(None);
    user_repo.save(&owner).await.unwrap();
    let (team, _) = Team::new("A fine team", &owner).unwrap();
    team_repo.save(&team).await.expect("Failed to save team");

    let found = team_repo.find_by_id(team.id()).await.unwrap().unwrap();
    assert_eq!(found.name(), "A fine team");
    assert_eq!(found.owner_id(), owner.id());

    let owned = team_repo.find_by_owner(owner.id()).await.unwrap();
    assert_eq!(owned.len(), 1);

    cleanup(&pool, team.id(), &[owner.id()]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_invitation_save_persists_invited_user() {
    let pool = setup_test_db().await;
    let service = InvitationService::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresTeamRepository::new(pool.clone())),
        Arc::new(PostgresInvitationRepository::new(pool.clone())),
    );

    let owner = service.register_user(None).await.unwrap();
    let (team, _) = service
        .create_team("A fine team".to_string(), owner.id())
        .await
        .unwrap()
        .unwrap();
    let rookie = service
        .register_user(Some(unique_email("rookie")))
        .await
        .unwrap();

    let mut invitation = Invitation::new(team.clone(), rookie.clone());
    service.save(&mut invitation).await.expect("save invitation");

    let invitation_repo = PostgresInvitationRepository::new(pool.clone());
    let found = invitation_repo
        .find_by_id(invitation.id())
        .await
        .unwrap()
        .expect("invitation stored");
    assert!(found.user().unwrap().is_invited());
    assert!(found.event_log_statement().contains("A fine team"));
    assert!(found.event_log_statement().contains("SENT"));

    let listed = invitation_repo.find_by_team(team.id()).await.unwrap();
    assert_eq!(listed.len(), 1);

    cleanup(&pool, team.id(), &[rookie.id(), owner.id()]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_invitation_save_only_raises_invited_flag() {
    let pool = setup_test_db().await;
    let user_repo = PostgresUserRepository::new(pool.clone());
    let team_repo = PostgresTeamRepository::new(pool.clone());
    let invitation_repo = PostgresInvitationRepository::new(pool.clone());

    let owner = User::new(None);
    user_repo.save(&owner).await.unwrap();
    let (team, _) = Team::new("A fine team", &owner).unwrap();
    team_repo.save(&team).await.unwrap();
    let mut rookie = User::new(Some(unique_email("rookie")));
    user_repo.save(&rookie).await.unwrap();

    let mut invitation = Invitation::new(team.clone(), rookie.clone());
    rookie.assign_team(team.id());
    user_repo.save(&rookie).await.unwrap();

    invitation.save().unwrap();
    invitation_repo.save(&invitation).await.unwrap();

    let stored = user_repo.find_by_id(rookie.id()).await.unwrap().unwrap();
    assert!(stored.is_invited());
    assert_eq!(stored.team_id(), Some(team.id()));

    cleanup(&pool, team.id(), &[rookie.id(), owner.id()]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_invitation_for_unknown_user_rolls_back() {
    let pool = setup_test_db().await;
    let user_repo = PostgresUserRepository::new(pool.clone());
    let team_repo = PostgresTeamRepository::new(pool.clone());
    let invitation_repo = PostgresInvitationRepository::new(pool.clone());

    let owner = User::new(None);
    user_repo.save(&owner).await.unwrap();
    let (team, _) = Team::new("A fine team", &owner).unwrap();
    team_repo.save(&team).await.unwrap();

    let stranger = User::new(Some(unique_email("stranger")));
    let invitation = Invitation::new(team.clone(), stranger.clone());

    assert!(invitation_repo.save(&invitation).await.is_err());
    assert!(invitation_repo
        .find_by_id(invitation.id())
        .await
        .unwrap()
        .is_none());
    assert!(user_repo.find_by_id(stranger.id()).await.unwrap().is_none());

    cleanup(&pool, team.id(), &[owner.id()]).await;
}
