use async_trait::async_trait;

use crate::organization::Organization;
use crate::roles::RoleAssignment;

/// Failure modes a role store may surface.
///
/// The decision service propagates these unchanged; it never folds a store
/// failure into an access decision.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("role store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record in role store: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Read access to organizations and role assignments.
///
/// This is the whole surface the decision service needs: one organization
/// lookup and one per-actor assignment lookup, both snapshot reads.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Look up an organization by its uuid. `None` means no such
    /// organization exists.
    async fn get_organization_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<Organization>, StoreError>;

    /// Fetch the role assignments an actor holds within an organization.
    async fn get_user_roles(
        &self,
        uuid: &str,
        pubkey: &str,
    ) -> Result<Vec<RoleAssignment>, StoreError>;
}
