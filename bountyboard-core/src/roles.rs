use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Role names understood by the bounty board. Roles stay opaque strings
// compared by exact equality; the catalog only lets configuration be
// sanity-checked and grants no semantics of its own.
pub const ADD_BOUNTY: &str = "ADD BOUNTY";
pub const UPDATE_BOUNTY: &str = "UPDATE BOUNTY";
pub const DELETE_BOUNTY: &str = "DELETE BOUNTY";
pub const PAY_BOUNTY: &str = "PAY BOUNTY";
pub const ADD_USER: &str = "ADD USER";
pub const UPDATE_USER: &str = "UPDATE USER";
pub const DELETE_USER: &str = "DELETE USER";
pub const ADD_ROLES: &str = "ADD ROLES";
pub const ADD_BUDGET: &str = "ADD BUDGET";
pub const WITHDRAW_BUDGET: &str = "WITHDRAW BUDGET";
pub const VIEW_REPORT: &str = "VIEW REPORT";

/// Get all role names known to the board
pub fn known_roles() -> Vec<&'static str> {
    vec![
        ADD_BOUNTY,
        UPDATE_BOUNTY,
        DELETE_BOUNTY,
        PAY_BOUNTY,
        ADD_USER,
        UPDATE_USER,
        DELETE_USER,
        ADD_ROLES,
        ADD_BUDGET,
        WITHDRAW_BUDGET,
        VIEW_REPORT,
    ]
}

pub fn is_known_role(role: &str) -> bool {
    known_roles().iter().any(|known| *known == role)
}

/// A single role held by an actor within one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: String,
    pub owner_pubkey: String,
    pub org_uuid: String,
    pub created: DateTime<Utc>,
}

impl RoleAssignment {
    pub fn new(
        org_uuid: impl Into<String>,
        owner_pubkey: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            owner_pubkey: owner_pubkey.into(),
            org_uuid: org_uuid.into(),
            created: Utc::now(),
        }
    }
}

/// Check whether the collection contains an assignment for the given role
pub fn roles_check(assignments: &[RoleAssignment], role: &str) -> bool {
    assignments.iter().any(|a| a.role == role)
}

/// Check whether the collection contains an assignment owned by the given
/// actor. Callers use this to verify that rows returned by a store actually
/// belong to the actor they asked about.
pub fn check_user(assignments: &[RoleAssignment], pubkey: &str) -> bool {
    assignments.iter().any(|a| a.owner_pubkey == pubkey)
}
