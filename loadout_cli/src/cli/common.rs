use std::{
    env,
    path::{Path, PathBuf},
};

use loadout_bungie::BungieConfig;

const DEFAULT_TOKENS_PATH: &str = "tokens.json";

/// Reads the Platform config from the environment. Blank values are left for
/// the client to reject once the token file has been read.
pub(crate) fn load_bungie_config() -> BungieConfig {
    BungieConfig::new(
        optional_env("BUNGIE_API_KEY"),
        optional_env("BUNGIE_CLIENT_ID"),
        optional_env("BUNGIE_CLIENT_SECRET"),
        env::var("LOADOUT_USER_AGENT")
            .unwrap_or_else(|_| format!("loadout-export/{}", clap::crate_version!())),
    )
}

pub(crate) fn tokens_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(|| {
        env::var_os("BUNGIE_TOKENS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKENS_PATH))
    })
}

fn optional_env(name: &str) -> String {
    env::var(name).unwrap_or_default()
}
