use crate::{BungieError, BungieResult};

pub const DEFAULT_API_BASE_URL: &str = "https://www.bungie.net/Platform";
pub const DEFAULT_TOKEN_URL: &str = "https://www.bungie.net/platform/app/oauth/token/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BungieConfig {
    pub api_key: String,
    pub client_id: String,
    pub client_secret: String,
    pub api_base_url: String,
    pub token_url: String,
    pub user_agent: String,
}

impl BungieConfig {
    pub fn new(
        api_key: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_url: DEFAULT_TOKEN_URL.to_owned(),
            user_agent: user_agent.into(),
        }
    }

    pub fn with_endpoints(
        mut self,
        api_base_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        self.api_base_url = api_base_url.into();
        self.token_url = token_url.into();
        self
    }

    pub fn validate(&self) -> BungieResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(BungieError::MissingApiKey);
        }
        if self.api_base_url.trim().is_empty() {
            return Err(BungieError::InvalidConfig("api base url must be set"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(BungieError::InvalidConfig("user_agent must be set"));
        }
        Ok(())
    }

    /// Client credentials are only needed once a refresh is attempted.
    pub fn validate_client_credentials(&self) -> BungieResult<()> {
        if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
            return Err(BungieError::InvalidConfig(
                "BUNGIE_CLIENT_ID/BUNGIE_CLIENT_SECRET must be set for token refresh",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BungieConfig, DEFAULT_API_BASE_URL};
    use crate::BungieError;

    #[test]
    fn blank_api_key_is_rejected() {
        let config = BungieConfig::new("  ", "id", "secret", "ua");
        assert!(matches!(config.validate(), Err(BungieError::MissingApiKey)));
    }

    #[test]
    fn client_credentials_are_optional_until_refresh() {
        let config = BungieConfig::new("key", "", "", "ua");
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.validate_client_credentials(),
            Err(BungieError::InvalidConfig(_))
        ));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
