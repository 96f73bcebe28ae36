//! MySQL user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use storage_core::{StorageError, StorageResult, User, UserId};
use tracing::debug;

const INSERT_USER: &str = r#"
    INSERT INTO users (uuid, firstname, lastname, username, password, email,
                       ip, macAddress, website, image)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SELECT_USER: &str = r#"
    SELECT uuid, firstname, lastname, username, password, email,
           ip, macAddress, website, image
    FROM users
    WHERE uuid = ?
"#;

const UPDATE_USER: &str = r#"
    UPDATE users
    SET firstname = ?, lastname = ?, username = ?, password = ?, email = ?,
        ip = ?, macAddress = ?, website = ?, image = ?
    WHERE uuid = ?
"#;

const SELECT_USERS: &str = r#"
    SELECT uuid, firstname, lastname, username, password, email,
           ip, macAddress, website, image
    FROM users
"#;

const DELETE_USER: &str = "DELETE FROM users WHERE uuid = ?";

/// MySQL user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct MySqlUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    uuid: String, // CHAR(36)
    firstname: String,
    lastname: String,
    username: String,
    password: String,
    email: String,
    ip: String,
    #[sqlx(rename = "macAddress")]
    mac_address: String,
    website: String,
    image: String,
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::parse(&row.uuid).map_err(|e| {
            StorageError::internal(format!("Invalid UUID in database: {}", e))
        })?;

        Ok(User {
            id,
            firstname: row.firstname,
            lastname: row.lastname,
            username: row.username,
            password: row.password,
            email: row.email,
            ip: row.ip,
            mac_address: row.mac_address,
            website: row.website,
            image: row.image,
        })
    }
}

/// Accepts a write only if it touched exactly one row.
fn ensure_single_row(affected: u64, action: &'static str) -> StorageResult<()> {
    if affected == 1 {
        Ok(())
    } else {
        Err(StorageError::unexpected_row_count(action, affected))
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn store(&self, user: &User) -> StorageResult<()> {
        debug!("Storing user: {}", user.id);

        sqlx::query(INSERT_USER)
            .bind(user.id.to_string())
            .bind(&user.firstname)
            .bind(&user.lastname)
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.email)
            .bind(&user.ip)
            .bind(&user.mac_address)
            .bind(&user.website)
            .bind(&user.image)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn get_one(&self, id: UserId) -> StorageResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(SELECT_USER)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, user: &User) -> StorageResult<()> {
        debug!("Updating user: {}", user.id);

        let result = sqlx::query(UPDATE_USER)
            .bind(&user.firstname)
            .bind(&user.lastname)
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.email)
            .bind(&user.ip)
            .bind(&user.mac_address)
            .bind(&user.website)
            .bind(&user.image)
            .bind(user.id.to_string())
            .execute(self.pool.inner())
            .await?;

        ensure_single_row(result.rows_affected(), "updated")
    }

    async fn get_all(&self) -> StorageResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(SELECT_USERS)
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn delete(&self, id: UserId) -> StorageResult<()> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query(DELETE_USER)
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        ensure_single_row(result.rows_affected(), "deleted")
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}
