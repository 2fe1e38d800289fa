use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use bountyboard_core::roles;

/// Named role groups evaluated by the access service.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleGroups {
    /// Every role an actor needs to manage bounties. The check is
    /// all-or-nothing; holding a subset grants nothing.
    #[serde(default = "default_manage_bounties")]
    pub manage_bounties: Vec<String>,
}

impl Default for RoleGroups {
    fn default() -> Self {
        Self {
            manage_bounties: default_manage_bounties(),
        }
    }
}

fn default_manage_bounties() -> Vec<String> {
    vec![
        roles::ADD_BOUNTY.to_string(),
        roles::UPDATE_BOUNTY.to_string(),
        roles::DELETE_BOUNTY.to_string(),
        roles::PAY_BOUNTY.to_string(),
    ]
}

impl RoleGroups {
    /// Load role groups from a YAML file
    pub async fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            warn!("Role group config not found at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .context("Failed to read role group config")?;

        let groups: RoleGroups =
            serde_norway::from_str(&content).context("Failed to parse role group config")?;
        groups.warn_on_unknown_roles();
        Ok(groups)
    }

    /// Load role groups from the file the process settings point at
    pub async fn from_settings(settings: &crate::settings::Settings) -> Result<Self> {
        Self::load(&settings.access.role_groups_file).await
    }

    /// Role names outside the catalog are allowed (roles are opaque
    /// strings), but they are usually typos, so call them out.
    fn warn_on_unknown_roles(&self) {
        for role in &self.manage_bounties {
            if !roles::is_known_role(role) {
                warn!(
                    "Role group 'manage_bounties' references unknown role '{}'",
                    role
                );
            }
        }
    }
}
