pub mod api;
pub mod auth;
pub mod bungie_client;
pub mod client;
pub mod config;
pub mod errors;
pub mod token_store;

pub use api::{ComponentType, DestinyMembership, EXPORT_COMPONENTS, UserMemberships};
pub use auth::{AuthService, Clock, Credentials, SystemClock, TokenResponse};
pub use bungie_client::{BungieApi, BungieClient};
pub use client::{HttpOAuthClient, OAuthClient};
pub use config::BungieConfig;
pub use errors::{BungieError, BungieResult};
pub use token_store::{FileTokenStore, TokenStore};
