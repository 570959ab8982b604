//! Device event logs

use super::user::UserId;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire format of log timestamps, e.g. `2024-01-31T09:15:00+0000`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A stored log entry, owned by a user
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    pub log_id: Uuid,
    pub user_id: UserId,
    pub session: Option<String>,
    pub vc: Option<String>,
    pub event: Option<String>,
    pub action: Option<String>,
    pub desc: Option<String>,
    pub timestamp: DateTime<FixedOffset>,
}

impl Log {
    /// The entry as returned to clients
    pub fn to_record(&self, device_id: impl Into<String>) -> LogRecord {
        LogRecord {
            log_id: self.log_id,
            device_id: device_id.into(),
            session: self.session.clone(),
            vc: self.vc.clone(),
            event: self.event.clone(),
            action: self.action.clone(),
            desc: self.desc.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// Client view of a log entry; the owner is named by device ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub log_id: Uuid,
    pub device_id: String,
    pub session: Option<String>,
    pub vc: Option<String>,
    pub event: Option<String>,
    pub action: Option<String>,
    pub desc: Option<String>,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<FixedOffset>,
}

/// Body of a log upload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewLog {
    pub device_id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub vc: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl NewLog {
    /// Build the stored entry for `user_id` with a fresh log ID
    pub fn into_log(self, user_id: UserId) -> Log {
        Log {
            log_id: Uuid::new_v4(),
            user_id,
            timestamp: parse_timestamp(self.timestamp.as_deref()),
            session: self.session,
            vc: self.vc,
            event: self.event,
            action: self.action,
            desc: self.desc,
        }
    }
}

/// Parse a client timestamp, falling back to the current time when it is
/// missing or malformed
pub fn parse_timestamp(raw: Option<&str>) -> DateTime<FixedOffset> {
    raw.and_then(|raw| DateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok())
        .unwrap_or_else(|| Utc::now().fixed_offset())
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
