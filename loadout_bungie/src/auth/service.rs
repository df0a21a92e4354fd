use loadout_core::time::Timestamp;

use crate::{BungieError, BungieResult, client::OAuthClient, token_store::TokenStore};

pub trait Clock {
    fn now(&self) -> Timestamp;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Holds the in-memory access token and refreshes it through the token store.
pub struct AuthService<C, S, T = SystemClock>
where
    C: OAuthClient,
    S: TokenStore,
    T: Clock,
{
    client: C,
    store: S,
    clock: T,
    access_token: String,
}

impl<C, S> AuthService<C, S, SystemClock>
where
    C: OAuthClient,
    S: TokenStore,
{
    pub fn new(client: C, store: S) -> BungieResult<Self> {
        Self::with_clock(client, store, SystemClock)
    }
}

impl<C, S, T> AuthService<C, S, T>
where
    C: OAuthClient,
    S: TokenStore,
    T: Clock,
{
    /// Loads the stored credentials. Fails before any network call when the
    /// record is missing or incomplete.
    pub fn with_clock(client: C, store: S, clock: T) -> BungieResult<Self> {
        let credentials = store.load_credentials()?;
        Ok(Self {
            client,
            store,
            clock,
            access_token: credentials.access_token,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Runs one refresh cycle after the server rejected the access token.
    ///
    /// Credentials are re-read from the store first since another process may
    /// have refreshed them already. The merged record is persisted before the
    /// in-memory token changes. Any refresh failure is an authentication
    /// failure.
    pub async fn refresh_after_unauthorized(&mut self) -> BungieResult<()> {
        let mut credentials = self
            .store
            .load_credentials()
            .map_err(authentication_failure)?;

        log::debug!("refreshing access token");
        let response = self
            .client
            .refresh(&credentials.refresh_token)
            .await
            .map_err(authentication_failure)?;

        credentials.apply_refresh(response, self.clock.now());
        self.store
            .save_credentials(&credentials)
            .map_err(authentication_failure)?;
        self.access_token = credentials.access_token;
        log::info!("access token refreshed");
        Ok(())
    }
}

fn authentication_failure(err: BungieError) -> BungieError {
    match err {
        BungieError::AuthenticationFailed { .. } => err,
        other => BungieError::AuthenticationFailed {
            reason: other.display_chain().to_string(),
        },
    }
}
