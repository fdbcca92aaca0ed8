use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role vocabulary used by the policy layer. Product reads accept any of the
/// four; product writes need admin/manager; product and order deletes are
/// admin only; order reads/updates need admin/manager/employee.
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_MANAGER: &str = "MANAGER";
pub const ROLE_EMPLOYEE: &str = "EMPLOYEE";
pub const ROLE_CUSTOMER: &str = "CUSTOMER";

const ROLE_PREFIX: &str = "ROLE_";

/// Deduplicated set of canonical authorities derived from a claims bundle.
/// Never persisted; recomputed per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(HashSet<String>);

impl RoleSet {
    pub fn new() -> Self {
        RoleSet(HashSet::new())
    }

    /// Grants a role extracted from a claim list, normalizing it to the
    /// canonical `ROLE_<UPPER>` form. A pre-existing prefix is not doubled.
    pub fn grant(&mut self, role: &str) {
        let role = role.trim();
        if role.is_empty() {
            return;
        }

        let upper = role.to_uppercase();
        let name = upper.strip_prefix(ROLE_PREFIX).unwrap_or(&upper);
        self.0.insert(format!("{ROLE_PREFIX}{name}"));
    }

    /// Passes through an already-granted default authority. Only the case is
    /// normalized; non-role authorities (scopes etc.) keep their own prefix.
    pub fn grant_authority(&mut self, authority: &str) {
        let authority = authority.trim();
        if authority.is_empty() {
            return;
        }

        self.0.insert(authority.to_uppercase());
    }

    /// Case-insensitive membership test by bare role name.
    pub fn contains(&self, role: &str) -> bool {
        let upper = role.to_uppercase();
        let name = upper.strip_prefix(ROLE_PREFIX).unwrap_or(&upper);
        self.0.contains(&format!("{ROLE_PREFIX}{name}"))
    }

    /// Bare role names (prefix stripped), sorted for stable output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .0
            .iter()
            .filter_map(|authority| authority.strip_prefix(ROLE_PREFIX))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_normalizes_case_and_prefix() {
        let mut roles = RoleSet::new();
        roles.grant("admin");
        roles.grant("ROLE_admin");
        roles.grant("Admin");

        assert_eq!(roles.len(), 1);
        assert!(roles.contains("ADMIN"));
        assert!(roles.contains("admin"));
        assert!(roles.contains("ROLE_ADMIN"));
    }

    #[test]
    fn names_strip_the_prefix_and_sort() {
        let mut roles = RoleSet::new();
        roles.grant("manager");
        roles.grant("admin");
        roles.grant_authority("SCOPE_openid");

        assert_eq!(roles.names(), vec!["ADMIN".to_string(), "MANAGER".to_string()]);
    }

    #[test]
    fn authorities_pass_through_with_case_normalization_only() {
        let mut roles = RoleSet::new();
        roles.grant_authority("scope_profile");
        roles.grant_authority("ROLE_customer");

        assert!(roles.contains(ROLE_CUSTOMER));
        assert!(roles.iter().any(|a| a == "SCOPE_PROFILE"));
    }

    #[test]
    fn blank_grants_are_ignored() {
        let mut roles = RoleSet::new();
        roles.grant("  ");
        roles.grant_authority("");

        assert!(roles.is_empty());
    }
}
