use std::{fmt, path::PathBuf};

use thiserror::Error;

pub type BungieResult<T> = Result<T, BungieError>;

#[derive(Debug, Error)]
pub enum BungieError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("BUNGIE_API_KEY must be set")]
    MissingApiKey,
    #[error(
        "token file not found at {}; create it with your access_token and refresh_token",
        .path.display()
    )]
    MissingCredentialFile { path: PathBuf },
    #[error("token file {} is invalid: {reason}", .path.display())]
    InvalidCredentialFile { path: PathBuf, reason: String },
    #[error("token file {} could not be accessed", .path.display())]
    CredentialIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization failed")]
    Serialization(#[from] serde_json::Error),
    #[error("request failed")]
    Network(#[from] reqwest::Error),
    #[error("access token was rejected")]
    Unauthorized,
    #[error("authentication failed: {reason}")]
    AuthenticationFailed { reason: String },
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("bungie error {error_status} ({error_code}): {message}")]
    Api {
        error_code: i64,
        error_status: String,
        message: String,
    },
    #[error("no Destiny memberships found on this account")]
    NoDestinyMembership,
    #[error("{0}")]
    Message(String),
}

impl BungieError {
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }

    pub fn display_chain(&self) -> DisplayChainedError<'_> {
        DisplayChainedError { inner: self }
    }
}

pub struct DisplayChainedError<'a> {
    inner: &'a (dyn std::error::Error + 'static),
}

impl fmt::Debug for DisplayChainedError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(self.inner);

        while let Some(err) = current {
            if first {
                first = false;
            } else {
                write!(f, " -> ")?;
            }

            write!(f, "{err}")?;
            current = err.source();
        }

        Ok(())
    }
}

impl fmt::Display for DisplayChainedError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
