use std::path::PathBuf;

use async_trait::async_trait;
use loadout_core::{
    definitions::{DefinitionSource, INVENTORY_ITEM_DEFINITION, ItemDefinition},
    ids::{ItemHash, MembershipId, MembershipType},
    profile::ProfileSnapshot,
};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tokio::sync::Mutex as AsyncMutex;

use crate::{
    BungieError, BungieResult,
    api::{ComponentType, PlatformEnvelope, UserMemberships},
    auth::{AuthService, Clock, SystemClock},
    client::{API_KEY_HEADER, HttpOAuthClient, OAuthClient, build_http_client},
    config::BungieConfig,
    token_store::{FileTokenStore, TokenStore},
};

/// Read-only Platform operations the exporter depends on.
#[async_trait]
pub trait BungieApi: DefinitionSource<Error = BungieError> + Send + Sync {
    async fn get_memberships_for_current_user(&self) -> BungieResult<UserMemberships>;

    async fn get_profile(
        &self,
        membership_type: MembershipType,
        membership_id: &MembershipId,
        components: &[ComponentType],
    ) -> BungieResult<ProfileSnapshot>;
}

pub struct BungieClient<C, S, T = SystemClock>
where
    C: OAuthClient + Send + Sync,
    S: TokenStore + Send + Sync,
    T: Clock + Send + Sync,
{
    http: Client,
    api_base_url: String,
    api_key: String,
    auth: AsyncMutex<AuthService<C, S, T>>,
}

impl BungieClient<HttpOAuthClient, FileTokenStore> {
    /// Loads credentials from `tokens_path`, then validates the config.
    pub fn from_config(
        config: &BungieConfig,
        tokens_path: impl Into<PathBuf>,
    ) -> BungieResult<Self> {
        let http = build_http_client(config)?;
        let oauth = HttpOAuthClient::new(http.clone(), config);
        let auth = AuthService::new(oauth, FileTokenStore::new(tokens_path))?;
        Self::with_http(config, http, auth)
    }
}

impl<C, S, T> BungieClient<C, S, T>
where
    C: OAuthClient + Send + Sync,
    S: TokenStore + Send + Sync,
    T: Clock + Send + Sync,
{
    fn with_http(
        config: &BungieConfig,
        http: Client,
        auth: AuthService<C, S, T>,
    ) -> BungieResult<Self> {
        config.validate()?;
        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            auth: AsyncMutex::new(auth),
        })
    }

    /// Sends an authenticated Platform request and returns its `Response` payload.
    ///
    /// A 401 triggers exactly one refresh followed by exactly one retry. A
    /// second 401 is an authentication failure; nothing else is retried.
    pub async fn authorized_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> BungieResult<Value> {
        let mut auth = self.auth.lock().await;

        let first = self
            .send_once(&method, path, query, auth.access_token())
            .await;
        if !matches!(first, Err(BungieError::Unauthorized)) {
            return first;
        }

        log::debug!("{method} {path} was unauthorized; refreshing and retrying once");
        auth.refresh_after_unauthorized().await?;

        match self
            .send_once(&method, path, query, auth.access_token())
            .await
        {
            Err(BungieError::Unauthorized) => Err(BungieError::AuthenticationFailed {
                reason: format!("{path} still unauthorized after token refresh"),
            }),
            other => other,
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        path: &str,
        query: &[(&str, String)],
        access_token: &str,
    ) -> BungieResult<Value> {
        let url = format!("{}{path}", self.api_base_url);
        log::debug!("{method} {path}");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, &self.api_key)
            .bearer_auth(access_token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(BungieError::Unauthorized);
        }
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(BungieError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: PlatformEnvelope = response.json().await?;
        envelope.into_response()
    }

    pub async fn get_entity_definition(
        &self,
        entity_type: &str,
        definition_hash: ItemHash,
    ) -> BungieResult<Value> {
        let path = format!("/Destiny2/Manifest/{entity_type}/{definition_hash}/");
        self.authorized_request(Method::GET, &path, &[]).await
    }
}

#[async_trait]
impl<C, S, T> DefinitionSource for BungieClient<C, S, T>
where
    C: OAuthClient + Send + Sync,
    S: TokenStore + Send + Sync,
    T: Clock + Send + Sync,
{
    type Error = BungieError;

    async fn item_definition(&self, hash: ItemHash) -> BungieResult<ItemDefinition> {
        let raw = self
            .get_entity_definition(INVENTORY_ITEM_DEFINITION, hash)
            .await?;
        Ok(serde_json::from_value(raw)?)
    }
}

#[async_trait]
impl<C, S, T> BungieApi for BungieClient<C, S, T>
where
    C: OAuthClient + Send + Sync,
    S: TokenStore + Send + Sync,
    T: Clock + Send + Sync,
{
    async fn get_memberships_for_current_user(&self) -> BungieResult<UserMemberships> {
        let raw = self
            .authorized_request(Method::GET, "/User/GetMembershipsForCurrentUser/", &[])
            .await?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn get_profile(
        &self,
        membership_type: MembershipType,
        membership_id: &MembershipId,
        components: &[ComponentType],
    ) -> BungieResult<ProfileSnapshot> {
        let path = format!("/Destiny2/{membership_type}/Profile/{membership_id}/");
        let query = [("components", ComponentType::join(components))];
        let raw = self.authorized_request(Method::GET, &path, &query).await?;
        Ok(serde_json::from_value(raw)?)
    }
}
