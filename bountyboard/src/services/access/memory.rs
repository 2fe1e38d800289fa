use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use bountyboard_core::organization::Organization;
use bountyboard_core::roles::RoleAssignment;
use bountyboard_core::store::{RoleStore, StoreError};

/// In-memory role store backing tests and local development.
///
/// Assignments are kept per organization; reads hand out snapshots.
#[derive(Default)]
pub struct InMemoryRoleStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    organizations: HashMap<String, Organization>,
    assignments: HashMap<String, Vec<RoleAssignment>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_organization(&self, organization: Organization) {
        let mut state = self.state.write().await;
        state
            .organizations
            .insert(organization.uuid.clone(), organization);
    }

    /// Grant a role to an actor within an organization
    pub async fn assign_role(&self, org_uuid: &str, pubkey: &str, role: &str) {
        let mut state = self.state.write().await;
        state
            .assignments
            .entry(org_uuid.to_string())
            .or_default()
            .push(RoleAssignment::new(org_uuid, pubkey, role));
    }

    /// Remove a previously granted role
    pub async fn revoke_role(&self, org_uuid: &str, pubkey: &str, role: &str) {
        let mut state = self.state.write().await;
        if let Some(assignments) = state.assignments.get_mut(org_uuid) {
            assignments.retain(|a| !(a.owner_pubkey == pubkey && a.role == role));
        }
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn get_organization_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<Organization>, StoreError> {
        let state = self.state.read().await;
        Ok(state.organizations.get(uuid).cloned())
    }

    async fn get_user_roles(
        &self,
        uuid: &str,
        pubkey: &str,
    ) -> Result<Vec<RoleAssignment>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .assignments
            .get(uuid)
            .map(|all| {
                all.iter()
                    .filter(|a| a.owner_pubkey == pubkey)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
