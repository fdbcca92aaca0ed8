use shared::{
    abstract_trait::IdentityServiceTrait,
    config::DEFAULT_CLIENT_ID,
    domain::responses::UserInfoResponse,
    model::{RoleSet, VerifiedToken},
};
use tracing::debug;

/// Resolves role authorities and identity fields from a verified claims
/// bundle. Roles are merged from three independent sources: realm-level
/// roles, client-scoped roles under the configured client id, and the default
/// authorities already attached to the token. A source that is missing or
/// oddly shaped contributes nothing.
#[derive(Debug, Clone)]
pub struct JwtIdentityService {
    client_id: String,
}

impl JwtIdentityService {
    pub fn new(client_id: &str) -> Self {
        JwtIdentityService {
            client_id: client_id.to_string(),
        }
    }
}

impl Default for JwtIdentityService {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_ID)
    }
}

impl IdentityServiceTrait for JwtIdentityService {
    fn resolve_roles(&self, token: &VerifiedToken) -> RoleSet {
        let mut roles = RoleSet::new();

        if let Some(realm_access) = token.claims.nested("realm_access") {
            if let Some(realm_roles) = realm_access.string_list("roles") {
                for role in &realm_roles {
                    roles.grant(role);
                }
            }
        }

        if let Some(resource_access) = token.claims.nested("resource_access") {
            if let Some(client_access) = resource_access.nested(&self.client_id) {
                if let Some(client_roles) = client_access.string_list("roles") {
                    for role in &client_roles {
                        roles.grant(role);
                    }
                }
            }
        }

        for authority in &token.authorities {
            roles.grant_authority(authority);
        }

        debug!("Resolved {} authorities from token claims", roles.len());

        roles
    }

    fn has_role(&self, token: &VerifiedToken, role: &str) -> bool {
        self.resolve_roles(token).contains(role)
    }

    fn has_any_role(&self, token: &VerifiedToken, roles: &[&str]) -> bool {
        let resolved = self.resolve_roles(token);
        roles.iter().any(|role| resolved.contains(role))
    }

    fn username(&self, token: &VerifiedToken) -> Option<String> {
        token.claims.string("preferred_username").map(str::to_string)
    }

    fn email(&self, token: &VerifiedToken) -> Option<String> {
        token.claims.string("email").map(str::to_string)
    }

    fn first_name(&self, token: &VerifiedToken) -> Option<String> {
        token.claims.string("given_name").map(str::to_string)
    }

    fn last_name(&self, token: &VerifiedToken) -> Option<String> {
        token.claims.string("family_name").map(str::to_string)
    }

    fn groups(&self, token: &VerifiedToken) -> Vec<String> {
        token.claims.string_list("groups").unwrap_or_default()
    }

    fn user_info(&self, token: &VerifiedToken) -> UserInfoResponse {
        UserInfoResponse {
            username: self.username(token),
            email: self.email(token),
            first_name: self.first_name(token),
            last_name: self.last_name(token),
            roles: self.resolve_roles(token).names(),
            groups: self.groups(token),
            sub: token.subject().map(str::to_string),
            iss: token.issuer().map(str::to_string),
            exp: token.claims.int("exp"),
            iat: token.claims.int("iat"),
        }
    }
}
