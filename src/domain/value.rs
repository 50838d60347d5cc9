use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// CloudSMS bearer token.
///
/// The value is kept behind [`secrecy`] and is redacted from `Debug` output.
pub struct ApiToken(SecretString);

impl ApiToken {
    /// Wrap a token as provided by the CloudSMS dashboard.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value.into()))
    }

    /// Value of the `Authorization` header carrying this token.
    pub(crate) fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken([REDACTED])")
    }
}

impl From<&str> for ApiToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Originator shown on the handset (`sender_id`).
///
/// The value must be registered on the CloudSMS account; the gateway enforces that.
pub struct SenderId(String);

impl SenderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SenderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SenderId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// Target of an SMS (`recipient`): a single number or a batch.
///
/// A single number is sent as a JSON string, a batch as a JSON array.
pub enum Recipient {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Recipient {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for Recipient {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_owned).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
/// Contact list identifier; CloudSMS accepts both numeric and string ids.
pub enum ContactListId {
    Number(i64),
    Text(String),
}

impl From<i32> for ContactListId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<i64> for ContactListId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for ContactListId {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for ContactListId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ContactListId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id returned by `sms/send`, used with `GET /api/v3/sms/{id}`.
pub struct SmsId(String);

impl SmsId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SmsId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SmsId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Campaign id returned by `campaign/send`, used with `GET /api/v3/campaign/{id}`.
pub struct CampaignId(String);

impl CampaignId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CampaignId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CampaignId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<u64> for CampaignId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Deferred delivery time (`schedule_time`).
///
/// Stored as wall-clock time: a zoned [`DateTime`] keeps its local reading and is
/// not converted to another zone.
pub struct ScheduleTime(NaiveDateTime);

impl ScheduleTime {
    /// Wire format expected by the gateway (`YYYY-MM-DD HH:MM:SS`).
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Render the timestamp in the gateway's wire format.
    pub fn to_wire(self) -> String {
        self.0.format(Self::FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for ScheduleTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ScheduleTime {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.naive_local())
    }
}

impl Serialize for ScheduleTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0.format(Self::FORMAT))
    }
}
