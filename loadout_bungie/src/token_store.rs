use std::{
    ffi::OsString,
    fs, io,
    path::PathBuf,
};

use crate::{BungieError, BungieResult, auth::Credentials};

pub trait TokenStore {
    fn load_credentials(&self) -> BungieResult<Credentials>;
    fn save_credentials(&self, credentials: &Credentials) -> BungieResult<()>;
}

/// Credentials kept as a JSON file on local disk.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> BungieError {
        BungieError::CredentialIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load_credentials(&self) -> BungieResult<Credentials> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(BungieError::MissingCredentialFile {
                    path: self.path.clone(),
                });
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let credentials: Credentials =
            serde_json::from_str(&raw).map_err(|err| BungieError::InvalidCredentialFile {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;

        credentials
            .validate()
            .map_err(|reason| BungieError::InvalidCredentialFile {
                path: self.path.clone(),
                reason: reason.to_owned(),
            })?;

        Ok(credentials)
    }

    fn save_credentials(&self, credentials: &Credentials) -> BungieResult<()> {
        let raw = serde_json::to_string_pretty(credentials)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, raw).map_err(|err| self.io_error(err))?;
        fs::rename(&temp_path, &self.path).map_err(|err| self.io_error(err))?;
        log::debug!("saved credentials to {}", self.path.display());
        Ok(())
    }
}
