use anyhow::Result;

/// Client identifier under which this backend's roles live in the token's
/// `resource_access` claim.
pub const DEFAULT_CLIENT_ID: &str = "ecommerce-backend";

#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub dev_mode: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let client_id =
            std::env::var("OIDC_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string());

        let dev_mode = std::env::var("DEV_MODE")
            .map(|val| val == "true" || val == "1")
            .unwrap_or(false);

        Ok(Self { client_id, dev_mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_id_matches_resource_access_key() {
        assert_eq!(DEFAULT_CLIENT_ID, "ecommerce-backend");
    }
}
