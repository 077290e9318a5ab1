use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingId(pub i64);

/// The (organization, category) pair that identifies a posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostingKey {
    pub organization: String,
    pub category: String,
}

impl PostingKey {
    pub fn new(organization: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            category: category.into(),
        }
    }
}

/// An internship opening and its remaining capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub id: PostingId,
    #[serde(rename = "company_name")]
    pub organization: String,
    #[serde(rename = "domain")]
    pub category: String,
    pub slots: u32,
}

impl Posting {
    pub fn key(&self) -> PostingKey {
        PostingKey::new(self.organization.clone(), self.category.clone())
    }

    pub fn has_capacity(&self) -> bool {
        self.slots > 0
    }
}

/// Request to create a posting or overwrite the slot count of an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingUpsert {
    #[serde(rename = "company")]
    pub organization: String,
    #[serde(rename = "domain")]
    pub category: String,
    pub slots: u32,
}

impl PostingUpsert {
    pub fn new(organization: impl Into<String>, category: impl Into<String>, slots: u32) -> Self {
        Self {
            organization: organization.into(),
            category: category.into(),
            slots,
        }
    }
}
