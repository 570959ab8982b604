//! User models for the gateway

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Internal numeric user identifier
pub type UserId = i64;

/// A registered device.
///
/// `user_id` is assigned by the store and never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip)]
    pub user_id: UserId,
    /// Device identifier (unique)
    pub device_id: String,
    /// Contact email address
    pub email: Option<String>,
    /// Push notification token (unique when present)
    pub token: Option<String>,
}

/// Body of a create or replace request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub device_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl NewUser {
    /// Attach a store-assigned identifier
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            device_id: self.device_id,
            email: self.email,
            token: self.token,
        }
    }
}

/// Partial update; only fields given as strings are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub token: Option<String>,
}

impl UserPatch {
    /// Pick the updatable fields out of a JSON body, ignoring anything that
    /// is not a string
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            email: field("email"),
            token: field("token"),
        }
    }

    pub fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = Some(email);
        }
        if let Some(token) = self.token {
            user.token = Some(token);
        }
    }
}
