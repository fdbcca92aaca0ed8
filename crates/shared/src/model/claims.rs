use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nested claim tree of a verified identity token.
///
/// Tokens arrive with arbitrarily shaped claim payloads, so every accessor
/// signals absence or a shape mismatch with `None` instead of failing. A
/// `realm_access` that holds a string where a role list was expected simply
/// contributes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimMap(Map<String, Value>);

impl ClaimMap {
    pub fn new(claims: Map<String, Value>) -> Self {
        ClaimMap(claims)
    }

    /// Wraps a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(ClaimMap(map)),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }

    /// List-valued claim; non-string entries are skipped.
    pub fn string_list(&self, name: &str) -> Option<Vec<String>> {
        let entries = self.0.get(name)?.as_array()?;
        Some(
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Nested claim object, e.g. `realm_access` or `resource_access`.
    pub fn nested(&self, name: &str) -> Option<ClaimMap> {
        self.0
            .get(name)
            .and_then(Value::as_object)
            .map(|map| ClaimMap(map.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A claims bundle whose signature has already been verified upstream,
/// together with the default authorities granted before claim-specific role
/// extraction. Both are carried explicitly so role resolution stays pure.
#[derive(Debug, Clone, Default)]
pub struct VerifiedToken {
    pub claims: ClaimMap,
    pub authorities: Vec<String>,
}

impl VerifiedToken {
    pub fn new(claims: ClaimMap) -> Self {
        VerifiedToken {
            claims,
            authorities: Vec::new(),
        }
    }

    pub fn with_authorities(claims: ClaimMap, authorities: Vec<String>) -> Self {
        VerifiedToken { claims, authorities }
    }

    pub fn subject(&self) -> Option<&str> {
        self.claims.string("sub")
    }

    pub fn issuer(&self) -> Option<&str> {
        self.claims.string("iss")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> ClaimMap {
        ClaimMap::from_value(value).expect("object")
    }

    #[test]
    fn accessors_read_expected_shapes() {
        let claims = claims(json!({
            "preferred_username": "jdoe",
            "exp": 1_700_000_000,
            "groups": ["staff", "sales"],
            "realm_access": { "roles": ["admin"] },
        }));

        assert_eq!(claims.string("preferred_username"), Some("jdoe"));
        assert_eq!(claims.int("exp"), Some(1_700_000_000));
        assert_eq!(
            claims.string_list("groups"),
            Some(vec!["staff".to_string(), "sales".to_string()])
        );
        assert_eq!(
            claims.nested("realm_access").unwrap().string_list("roles"),
            Some(vec!["admin".to_string()])
        );
    }

    #[test]
    fn mismatched_shapes_yield_none() {
        let claims = claims(json!({
            "preferred_username": 42,
            "groups": "staff",
            "realm_access": "not-a-map",
        }));

        assert_eq!(claims.string("preferred_username"), None);
        assert_eq!(claims.string_list("groups"), None);
        assert!(claims.nested("realm_access").is_none());
        assert_eq!(claims.string("missing"), None);
    }

    #[test]
    fn string_list_skips_non_string_entries() {
        let claims = claims(json!({ "roles": ["admin", 7, null, "manager"] }));

        assert_eq!(
            claims.string_list("roles"),
            Some(vec!["admin".to_string(), "manager".to_string()])
        );
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(ClaimMap::from_value(json!([1, 2, 3])).is_none());
        assert!(ClaimMap::from_value(json!("sub")).is_none());
    }

    #[test]
    fn subject_and_issuer_come_from_registered_claims() {
        let token = VerifiedToken::new(claims(json!({
            "sub": "user-1",
            "iss": "https://keycloak.local/realms/shop",
        })));

        assert_eq!(token.subject(), Some("user-1"));
        assert_eq!(token.issuer(), Some("https://keycloak.local/realms/shop"));
    }
}
