use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};

use crate::{BungieError, BungieResult, auth::TokenResponse, config::BungieConfig};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Builds the HTTP client shared by the OAuth and Platform calls.
pub fn build_http_client(config: &BungieConfig) -> BungieResult<Client> {
    Ok(ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .build()?)
}

#[async_trait]
pub trait OAuthClient {
    async fn refresh(&self, refresh_token: &str) -> BungieResult<TokenResponse>;
}

pub struct HttpOAuthClient {
    http: Client,
    config: BungieConfig,
}

impl HttpOAuthClient {
    pub fn new(http: Client, config: &BungieConfig) -> Self {
        Self {
            http,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl OAuthClient for HttpOAuthClient {
    async fn refresh(&self, refresh_token: &str) -> BungieResult<TokenResponse> {
        self.config.validate_client_credentials()?;

        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        log::debug!("POST {}", self.config.token_url);
        let response = self
            .http
            .post(&self.config.token_url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(BungieError::AuthenticationFailed {
                reason: format!("refresh failed: {} {body}", status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}
