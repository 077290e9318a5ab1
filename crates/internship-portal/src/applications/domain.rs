use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::{PostingId, PostingKey};

/// Timestamp layout used both in storage and in API responses.
pub const APPLIED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifier wrapper for stored applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

/// Student provided request to claim a slot of a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub student_name: String,
    pub email: String,
    #[serde(rename = "company")]
    pub organization: String,
    #[serde(rename = "domain")]
    pub category: String,
}

impl ApplicationSubmission {
    pub fn posting_key(&self) -> PostingKey {
        PostingKey::new(self.organization.clone(), self.category.clone())
    }
}

/// A submission stamped with the time it was accepted, ready for the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub submission: ApplicationSubmission,
    pub applied_at: NaiveDateTime,
}

/// Immutable record of a reserved slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    #[serde(skip)]
    pub posting_id: Option<PostingId>,
    pub student_name: String,
    pub email: String,
    #[serde(rename = "company_name")]
    pub organization: String,
    #[serde(rename = "domain")]
    pub category: String,
    #[serde(with = "applied_at_format")]
    pub applied_at: NaiveDateTime,
}

impl ApplicationRecord {
    pub fn posting_key(&self) -> PostingKey {
        PostingKey::new(self.organization.clone(), self.category.clone())
    }
}

mod applied_at_format {
    use super::APPLIED_AT_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(APPLIED_AT_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, APPLIED_AT_FORMAT).map_err(serde::de::Error::custom)
    }
}
