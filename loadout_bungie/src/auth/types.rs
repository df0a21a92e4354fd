use loadout_core::time::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Credential record as kept in the token file.
///
/// Fields other than the ones named here are carried through untouched so a
/// rewrite never drops what the OAuth exchange stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    /// Kept as stored; other writers of the file use integers, floats or
    /// strings here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<Value>,
    /// When the current access token was issued. Written as epoch seconds on
    /// refresh, read back in whatever form the file holds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a successful refresh-token exchange.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_in: None,
            issued_at: None,
            extra: Map::new(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.access_token.trim().is_empty() {
            return Err("access_token is missing");
        }
        if self.refresh_token.trim().is_empty() {
            return Err("refresh_token is missing");
        }
        Ok(())
    }

    /// Overwrites every field the refresh response carries. A response
    /// without a refresh token keeps the stored one.
    pub fn apply_refresh(&mut self, response: TokenResponse, issued_at: Timestamp) {
        self.access_token = response.access_token;
        if let Some(refresh_token) = response.refresh_token.filter(|token| !token.is_empty()) {
            self.refresh_token = refresh_token;
        }
        if let Some(expires_in) = response.expires_in {
            self.expires_in = Some(Value::from(expires_in));
        }
        self.extra.extend(response.extra);
        self.issued_at = Some(Value::from(issued_at.as_epoch_secs()));
    }
}
