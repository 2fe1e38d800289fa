//! Access control for bountyboard
//!
//! This module decides whether an actor may perform a role-gated action
//! inside an organization. Organization owners pass every check; everyone
//! else is evaluated against the role assignments a store returns for them.

pub mod config;
pub mod memory;
pub mod service;

#[cfg(test)]
mod tests;

// Re-export the main types and service for easy access
pub use config::RoleGroups;
pub use memory::InMemoryRoleStore;
pub use service::AccessService;
