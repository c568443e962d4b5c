use crate::domain::user::{Email, User};
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a user (insert or update)
    async fn save(&self, user: &User) -> Result<(), String>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String>;
}
