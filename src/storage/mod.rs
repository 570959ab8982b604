//! Storage layer for the gateway
//!
//! Entities live behind the [`EntityStore`] trait so that handlers do not
//! depend on a particular backend. The only backend is [`MemoryStore`], which
//! keeps everything in process memory and loses it on restart.

pub mod memory;

pub use memory::MemoryStore;

use crate::core::models::{Log, LogRecord, NewUser, User, UserId, UserPatch};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Message returned when a new user reuses a stored push token
pub const TOKEN_CONFLICT: &str =
    "Device token already stored. Use 'PUT' request to replace or 'PATCH' to update user.";

/// Message returned when a new user reuses a stored device ID
pub const DEVICE_ID_CONFLICT: &str =
    "Device ID already stored. Use 'PUT' request to replace or 'PATCH' to update user.";

/// Users and their logs
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// All users in insertion order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Look a user up by device ID
    async fn find_user(&self, device_id: &str) -> Result<Option<User>>;

    /// Store a new user.
    ///
    /// Fails with [`GatewayError::Conflict`](crate::utils::error::GatewayError::Conflict)
    /// carrying [`TOKEN_CONFLICT`] or [`DEVICE_ID_CONFLICT`], checked in that
    /// order, when the user collides with a stored one.
    async fn insert_user(&self, user: NewUser) -> Result<User>;

    /// Apply a partial update; `None` if the device ID is unknown
    async fn update_user(&self, device_id: &str, patch: UserPatch) -> Result<Option<User>>;

    /// Replace every field of a user; `None` if the device ID is unknown
    async fn replace_user(&self, device_id: &str, user: NewUser) -> Result<Option<User>>;

    /// Remove a user and its logs; `false` if the device ID is unknown
    async fn delete_user(&self, device_id: &str) -> Result<bool>;

    /// Remove every user and every log
    async fn delete_all_users(&self) -> Result<()>;

    /// All logs in insertion order
    async fn list_logs(&self) -> Result<Vec<LogRecord>>;

    /// Logs owned by one user
    async fn logs_for_user(&self, user_id: UserId) -> Result<Vec<LogRecord>>;

    /// Store a log for an existing user
    async fn insert_log(&self, log: Log) -> Result<LogRecord>;

    /// The push token of the first user that has one
    async fn first_token(&self) -> Result<Option<String>>;
}
