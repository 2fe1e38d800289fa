use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organization on the bounty board.
///
/// The owner holds unconditional access to every role-gated action inside
/// the organization; everyone else needs explicit role assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub uuid: String,
    pub name: String,
    pub owner_pubkey: String,
    pub created: DateTime<Utc>,
}

impl Organization {
    pub fn new(name: impl Into<String>, owner_pubkey: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            name: name.into(),
            owner_pubkey: owner_pubkey.into(),
            created: Utc::now(),
        }
    }
}
