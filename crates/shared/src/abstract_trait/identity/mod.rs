use crate::{
    domain::responses::UserInfoResponse,
    model::{RoleSet, VerifiedToken},
};
use std::sync::Arc;

pub type DynIdentityService = Arc<dyn IdentityServiceTrait + Send + Sync>;

/// Claims authorizer seam. All methods are pure reads over an
/// already-verified token; none of them can fail on malformed claims.
pub trait IdentityServiceTrait {
    /// Merges roles from `realm_access.roles`, the configured client entry of
    /// `resource_access`, and the token's default authorities into one
    /// canonical set.
    fn resolve_roles(&self, token: &VerifiedToken) -> RoleSet;

    fn has_role(&self, token: &VerifiedToken, role: &str) -> bool;
    fn has_any_role(&self, token: &VerifiedToken, roles: &[&str]) -> bool;

    fn username(&self, token: &VerifiedToken) -> Option<String>;
    fn email(&self, token: &VerifiedToken) -> Option<String>;
    fn first_name(&self, token: &VerifiedToken) -> Option<String>;
    fn last_name(&self, token: &VerifiedToken) -> Option<String>;
    fn groups(&self, token: &VerifiedToken) -> Vec<String>;

    fn user_info(&self, token: &VerifiedToken) -> UserInfoResponse;
}
