//! In-memory entity store

use super::{DEVICE_ID_CONFLICT, EntityStore, TOKEN_CONFLICT};
use crate::core::models::{Log, LogRecord, NewUser, User, UserId, UserPatch};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    /// Keyed by user ID, which grows monotonically, so iteration order is
    /// insertion order
    users: BTreeMap<UserId, User>,
    logs: Vec<Log>,
    next_user_id: UserId,
}

impl Tables {
    fn user_by_device(&self, device_id: &str) -> Option<&User> {
        self.users.values().find(|user| user.device_id == device_id)
    }

    fn user_by_device_mut(&mut self, device_id: &str) -> Option<&mut User> {
        self.users
            .values_mut()
            .find(|user| user.device_id == device_id)
    }

    fn record(&self, log: &Log) -> Option<LogRecord> {
        self.users
            .get(&log.user_id)
            .map(|user| log.to_record(user.device_id.clone()))
    }

    /// First conflict between `candidate` and users other than `except`
    fn conflict(&self, candidate: &NewUser, except: Option<UserId>) -> Option<&'static str> {
        let others = || {
            self.users
                .values()
                .filter(move |user| Some(user.user_id) != except)
        };

        if let Some(token) = &candidate.token {
            if others().any(|user| user.token.as_ref() == Some(token)) {
                return Some(TOKEN_CONFLICT);
            }
        }
        if others().any(|user| user.device_id == candidate.device_id) {
            return Some(DEVICE_ID_CONFLICT);
        }
        None
    }
}

/// Process-local [`EntityStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.tables.read().users.values().cloned().collect())
    }

    async fn find_user(&self, device_id: &str) -> Result<Option<User>> {
        Ok(self.tables.read().user_by_device(device_id).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let mut tables = self.tables.write();

        if let Some(message) = tables.conflict(&user, None) {
            return Err(GatewayError::conflict(message));
        }

        tables.next_user_id += 1;
        let user = user.into_user(tables.next_user_id);
        tables.users.insert(user.user_id, user.clone());

        debug!(user_id = user.user_id, device_id = %user.device_id, "Stored user");
        Ok(user)
    }

    async fn update_user(&self, device_id: &str, patch: UserPatch) -> Result<Option<User>> {
        let mut tables = self.tables.write();

        if let Some(token) = &patch.token {
            let taken = tables
                .users
                .values()
                .any(|user| user.device_id != device_id && user.token.as_ref() == Some(token));
            if taken {
                return Err(GatewayError::conflict(TOKEN_CONFLICT));
            }
        }

        Ok(tables.user_by_device_mut(device_id).map(|user| {
            patch.apply(user);
            user.clone()
        }))
    }

    async fn replace_user(&self, device_id: &str, user: NewUser) -> Result<Option<User>> {
        let mut tables = self.tables.write();

        let Some(user_id) = tables.user_by_device(device_id).map(|user| user.user_id) else {
            return Ok(None);
        };
        if let Some(message) = tables.conflict(&user, Some(user_id)) {
            return Err(GatewayError::conflict(message));
        }

        let user = user.into_user(user_id);
        tables.users.insert(user_id, user.clone());
        Ok(Some(user))
    }

    async fn delete_user(&self, device_id: &str) -> Result<bool> {
        let mut tables = self.tables.write();

        let Some(user_id) = tables.user_by_device(device_id).map(|user| user.user_id) else {
            return Ok(false);
        };
        tables.users.remove(&user_id);
        tables.logs.retain(|log| log.user_id != user_id);

        debug!(user_id, device_id, "Deleted user");
        Ok(true)
    }

    async fn delete_all_users(&self) -> Result<()> {
        let mut tables = self.tables.write();
        tables.users.clear();
        tables.logs.clear();
        Ok(())
    }

    async fn list_logs(&self) -> Result<Vec<LogRecord>> {
        let tables = self.tables.read();
        Ok(tables.logs.iter().filter_map(|log| tables.record(log)).collect())
    }

    async fn logs_for_user(&self, user_id: UserId) -> Result<Vec<LogRecord>> {
        let tables = self.tables.read();
        Ok(tables
            .logs
            .iter()
            .filter(|log| log.user_id == user_id)
            .filter_map(|log| tables.record(log))
            .collect())
    }

    async fn insert_log(&self, log: Log) -> Result<LogRecord> {
        let mut tables = self.tables.write();

        let record = tables
            .record(&log)
            .ok_or_else(|| GatewayError::not_found(format!("No user with ID {}", log.user_id)))?;
        tables.logs.push(log);
        Ok(record)
    }

    async fn first_token(&self) -> Result<Option<String>> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .find_map(|user| user.token.clone()))
    }
}
