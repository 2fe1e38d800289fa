use std::sync::Arc;
use tracing::{info, warn};

use bountyboard_core::roles::{self, RoleAssignment};
use bountyboard_core::store::{RoleStore, StoreError};

use super::config::RoleGroups;

/// Access decision service for organization-scoped actions.
///
/// Owner bypass always wins: the organization owner implicitly holds every
/// role. Everyone else is evaluated against the assignments the store
/// returns for them. Store failures propagate to the caller untouched.
pub struct AccessService {
    store: Arc<dyn RoleStore>,
    role_groups: RoleGroups,
}

impl AccessService {
    pub fn new(store: Arc<dyn RoleStore>, role_groups: RoleGroups) -> Self {
        Self { store, role_groups }
    }

    pub fn manage_bounties_group(&self) -> &[String] {
        &self.role_groups.manage_bounties
    }

    /// Check if an actor may perform a role-gated action inside an organization
    pub async fn user_has_access(
        &self,
        pubkey: &str,
        org_uuid: &str,
        required_role: &str,
    ) -> Result<bool, StoreError> {
        if self.is_owner(pubkey, org_uuid).await? {
            info!("Access granted: '{}' owns org '{}'", pubkey, org_uuid);
            return Ok(true);
        }

        let assignments = self.user_roles(org_uuid, pubkey).await?;
        let granted = roles::roles_check(&assignments, required_role);

        if granted {
            info!(
                "Access granted: '{}' holds '{}' in org '{}'",
                pubkey, required_role, org_uuid
            );
        } else {
            info!(
                "Access denied: '{}' does not hold '{}' in org '{}'",
                pubkey, required_role, org_uuid
            );
        }

        Ok(granted)
    }

    /// Check if an actor holds every role required to manage bounties.
    /// Missing even one role of the group denies access.
    pub async fn user_has_manage_bounty_roles(
        &self,
        pubkey: &str,
        org_uuid: &str,
    ) -> Result<bool, StoreError> {
        if self.is_owner(pubkey, org_uuid).await? {
            info!("Access granted: '{}' owns org '{}'", pubkey, org_uuid);
            return Ok(true);
        }

        let assignments = self.user_roles(org_uuid, pubkey).await?;
        let granted = self
            .role_groups
            .manage_bounties
            .iter()
            .all(|role| roles::roles_check(&assignments, role));

        if granted {
            info!(
                "Access granted: '{}' holds the manage-bounties roles in org '{}'",
                pubkey, org_uuid
            );
        } else {
            info!(
                "Access denied: '{}' is missing manage-bounties roles in org '{}'",
                pubkey, org_uuid
            );
        }

        Ok(granted)
    }

    /// A missing organization means no owner can match; the decision then
    /// rests on explicit role assignments alone.
    async fn is_owner(&self, pubkey: &str, org_uuid: &str) -> Result<bool, StoreError> {
        let organization = self.store.get_organization_by_uuid(org_uuid).await?;
        Ok(organization
            .map(|org| org.owner_pubkey == pubkey)
            .unwrap_or(false))
    }

    async fn user_roles(
        &self,
        org_uuid: &str,
        pubkey: &str,
    ) -> Result<Vec<RoleAssignment>, StoreError> {
        let assignments = self.store.get_user_roles(org_uuid, pubkey).await?;

        // Consistency check on the store snapshot: rows that do not belong
        // to the queried actor are logged, not rejected.
        if !assignments.is_empty() && !roles::check_user(&assignments, pubkey) {
            warn!(
                "Role store returned assignments for org '{}' that do not belong to '{}'",
                org_uuid, pubkey
            );
        }

        Ok(assignments)
    }
}

impl std::fmt::Debug for AccessService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessService")
            .field("role_groups", &self.role_groups)
            .finish_non_exhaustive()
    }
}
