use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bungie error: {0}")]
    Bungie(#[from] loadout_bungie::BungieError),

    #[error("resolve error: {0}")]
    Resolve(#[from] loadout_core::ResolveError),

    #[error("export serialization error: {0}")]
    ExportSerialization(#[from] serde_json::Error),

    #[error("failed to write export to {}", .path.display())]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
