//! Repository trait definitions.

use async_trait::async_trait;
use storage_core::{Interface, StorageResult, User, UserId};

/// User repository trait.
///
/// `update` and `delete` must touch exactly one row; anything else is
/// reported as [`StorageError::UnexpectedRowCount`].
///
/// [`StorageError::UnexpectedRowCount`]: storage_core::StorageError::UnexpectedRowCount
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Inserts a new user. Fails if the id is already taken.
    async fn store(&self, user: &User) -> StorageResult<()>;

    /// Finds a user by ID.
    async fn get_one(&self, id: UserId) -> StorageResult<Option<User>>;

    /// Rewrites every field except the id.
    async fn update(&self, user: &User) -> StorageResult<()>;

    /// Returns all users in database order.
    async fn get_all(&self) -> StorageResult<Vec<User>>;

    /// Deletes a user by ID.
    async fn delete(&self, id: UserId) -> StorageResult<()>;
}
