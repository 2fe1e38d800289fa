use async_trait::async_trait;
use std::sync::Arc;

use bountyboard_core::organization::Organization;
use bountyboard_core::roles::{self, RoleAssignment};
use bountyboard_core::store::{RoleStore, StoreError};

use super::config::RoleGroups;
use super::memory::InMemoryRoleStore;
use super::service::AccessService;

async fn create_test_service() -> (AccessService, Arc<InMemoryRoleStore>, String) {
    let store = Arc::new(InMemoryRoleStore::new());

    let org = Organization::new("test-org", "adminKey");
    let org_uuid = org.uuid.clone();
    store.add_organization(org).await;

    let service = AccessService::new(store.clone(), RoleGroups::default());
    (service, store, org_uuid)
}

#[tokio::test]
async fn test_owner_bypass() {
    let (service, _store, org_uuid) = create_test_service().await;

    // The owner passes for any role string, even one nobody ever assigned
    assert!(service
        .user_has_access("adminKey", &org_uuid, "ANY ROLE")
        .await
        .unwrap());
    assert!(service
        .user_has_access("adminKey", &org_uuid, roles::PAY_BOUNTY)
        .await
        .unwrap());
    assert!(service
        .user_has_manage_bounty_roles("adminKey", &org_uuid)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_role_membership() {
    let (service, store, org_uuid) = create_test_service().await;

    store
        .assign_role(&org_uuid, "userKey", roles::VIEW_REPORT)
        .await;

    assert!(service
        .user_has_access("userKey", &org_uuid, roles::VIEW_REPORT)
        .await
        .unwrap());
    assert!(!service
        .user_has_access("userKey", &org_uuid, roles::ADD_BOUNTY)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_actor_without_assignments() {
    let (service, _store, org_uuid) = create_test_service().await;

    assert!(!service
        .user_has_access("strangerKey", &org_uuid, roles::VIEW_REPORT)
        .await
        .unwrap());
    assert!(!service
        .user_has_manage_bounty_roles("strangerKey", &org_uuid)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_unknown_organization() {
    let (service, store, _org_uuid) = create_test_service().await;

    // No organization record, no owner bypass; the role check still runs
    assert!(!service
        .user_has_access("adminKey", "missing-org", roles::VIEW_REPORT)
        .await
        .unwrap());

    store
        .assign_role("missing-org", "userKey", roles::VIEW_REPORT)
        .await;
    assert!(service
        .user_has_access("userKey", "missing-org", roles::VIEW_REPORT)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_manage_bounty_roles_all_or_nothing() {
    let (service, store, org_uuid) = create_test_service().await;

    for role in service.manage_bounties_group().to_vec() {
        store.assign_role(&org_uuid, "userKey", &role).await;
    }
    assert!(service
        .user_has_manage_bounty_roles("userKey", &org_uuid)
        .await
        .unwrap());

    // Dropping any single role of the group flips the decision
    store
        .revoke_role(&org_uuid, "userKey", roles::PAY_BOUNTY)
        .await;
    assert!(!service
        .user_has_manage_bounty_roles("userKey", &org_uuid)
        .await
        .unwrap());

    // Adding it back flips it again
    store
        .assign_role(&org_uuid, "userKey", roles::PAY_BOUNTY)
        .await;
    assert!(service
        .user_has_manage_bounty_roles("userKey", &org_uuid)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_custom_role_group() {
    let store = Arc::new(InMemoryRoleStore::new());
    let org = Organization::new("test-org", "adminKey");
    let org_uuid = org.uuid.clone();
    store.add_organization(org).await;

    let groups = RoleGroups {
        manage_bounties: vec![
            roles::ADD_BOUNTY.to_string(),
            roles::PAY_BOUNTY.to_string(),
        ],
    };
    let service = AccessService::new(store.clone(), groups);

    store
        .assign_role(&org_uuid, "userKey", roles::ADD_BOUNTY)
        .await;
    assert!(!service
        .user_has_manage_bounty_roles("userKey", &org_uuid)
        .await
        .unwrap());

    store
        .assign_role(&org_uuid, "userKey", roles::PAY_BOUNTY)
        .await;
    assert!(service
        .user_has_manage_bounty_roles("userKey", &org_uuid)
        .await
        .unwrap());
}

/// Store that hands back rows belonging to a different actor, simulating a
/// stale or mismatched snapshot.
struct MismatchedStore {
    org: Organization,
}

#[async_trait]
impl RoleStore for MismatchedStore {
    async fn get_organization_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<Organization>, StoreError> {
        Ok((self.org.uuid == uuid).then(|| self.org.clone()))
    }

    async fn get_user_roles(
        &self,
        uuid: &str,
        _pubkey: &str,
    ) -> Result<Vec<RoleAssignment>, StoreError> {
        Ok(vec![RoleAssignment::new(
            uuid,
            "someoneElse",
            roles::VIEW_REPORT,
        )])
    }
}

#[tokio::test]
async fn test_mismatched_store_rows_are_still_evaluated() {
    let org = Organization::new("test-org", "adminKey");
    let org_uuid = org.uuid.clone();
    let service = AccessService::new(Arc::new(MismatchedStore { org }), RoleGroups::default());

    // The ownership mismatch is logged as an anomaly, the rows are still
    // evaluated as returned
    assert!(service
        .user_has_access("userKey", &org_uuid, roles::VIEW_REPORT)
        .await
        .unwrap());
    assert!(!service
        .user_has_access("userKey", &org_uuid, roles::ADD_BOUNTY)
        .await
        .unwrap());
}

/// Store whose reads always fail.
struct FailingStore;

#[async_trait]
impl RoleStore for FailingStore {
    async fn get_organization_by_uuid(
        &self,
        _uuid: &str,
    ) -> Result<Option<Organization>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn get_user_roles(
        &self,
        _uuid: &str,
        _pubkey: &str,
    ) -> Result<Vec<RoleAssignment>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

#[tokio::test]
async fn test_store_errors_propagate() {
    let service = AccessService::new(Arc::new(FailingStore), RoleGroups::default());

    let result = service.user_has_access("userKey", "orgUUID", "ANY ROLE").await;
    assert!(matches!(result, Err(StoreError::Unavailable(_))));

    let result = service.user_has_manage_bounty_roles("userKey", "orgUUID").await;
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
