//! User repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::User;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn create(&self, user: &User) -> Result<User, DomainError>;
    /// Hard delete, committed before returning.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
