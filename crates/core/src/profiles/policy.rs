//! Capability policy for role-gated operations.
//!
//! One policy function consulted uniformly by every mutating handler,
//! replacing per-view role branching. Handlers re-resolve the caller's role
//! from the profile row before consulting the policy.

use serde::{Deserialize, Serialize};

use super::profiles_model::Role;

/// Things a caller can be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Invite, edit, reset and delete team members.
    ManageTeam,
    /// Create and edit developments in the catalog.
    EditCatalog,
    /// Create, edit, restage and assign leads; update conversations.
    EditLeads,
    /// Read reports and dashboards.
    ViewReports,
    /// Edit one's own name, phone and avatar.
    EditOwnProfile,
}

/// True when `role` is allowed to exercise `capability`.
pub fn role_allows(role: Role, capability: Capability) -> bool {
    match role {
        Role::Admin => true,
        Role::Agent => matches!(
            capability,
            Capability::EditLeads | Capability::ViewReports | Capability::EditOwnProfile
        ),
        Role::Viewer => matches!(
            capability,
            Capability::ViewReports | Capability::EditOwnProfile
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_do_everything() {
        for cap in [
            Capability::ManageTeam,
            Capability::EditCatalog,
            Capability::EditLeads,
            Capability::ViewReports,
            Capability::EditOwnProfile,
        ] {
            assert!(role_allows(Role::Admin, cap));
        }
    }

    #[test]
    fn agent_works_leads_but_not_team_or_catalog() {
        assert!(role_allows(Role::Agent, Capability::EditLeads));
        assert!(role_allows(Role::Agent, Capability::ViewReports));
        assert!(!role_allows(Role::Agent, Capability::ManageTeam));
        assert!(!role_allows(Role::Agent, Capability::EditCatalog));
    }

    #[test]
    fn viewer_is_read_only_plus_own_profile() {
        assert!(role_allows(Role::Viewer, Capability::ViewReports));
        assert!(role_allows(Role::Viewer, Capability::EditOwnProfile));
        assert!(!role_allows(Role::Viewer, Capability::EditLeads));
        assert!(!role_allows(Role::Viewer, Capability::ManageTeam));
    }
}
