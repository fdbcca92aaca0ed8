use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity summary assembled from the token claims. Every field degrades to
/// `None` (or an empty list) when the backing claim is absent; the caller
/// decides whether a missing field matters.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserInfoResponse {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
    pub sub: Option<String>,
    pub iss: Option<String>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
}
