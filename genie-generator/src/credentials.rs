//! Groq API key resolution and local persistence.
//!
//! A generation run can get its key from three places, tried in order:
//!
//! 1. a key passed explicitly for this run
//! 2. the `GROQ_API_KEY` environment variable
//! 3. the locally stored key
//!
//! The stored key lives in a small TOML file under the user config directory
//! and changes only on explicit action: `save` writes it, `clear` removes it,
//! nothing expires it.

use genie_core::{GenieError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted when no explicit key is given.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

const STORE_DIR: &str = "repo-genie";
const STORE_FILE: &str = "credentials.toml";

/// Pick the first usable key from the three sources, in priority order.
/// Whitespace-only values count as absent.
pub fn resolve_api_key(
    explicit: Option<&str>,
    env_default: Option<&str>,
    stored: Option<&str>,
) -> Result<String> {
    [explicit, env_default, stored]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or(GenieError::MissingCredential)
}

/// Resolve against the standard sources: the explicit key, then
/// [`API_KEY_ENV`], then the default store.
pub fn resolve_default(explicit: Option<&str>) -> Result<String> {
    let env_default = std::env::var(API_KEY_ENV).ok();
    let stored = match ApiKeyStore::default_location() {
        Some(store) => store.load()?,
        None => None,
    };
    resolve_api_key(explicit, env_default.as_deref(), stored.as_deref())
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    groq_api_key: Option<String>,
}

/// On-disk key store.
#[derive(Debug, Clone)]
pub struct ApiKeyStore {
    path: PathBuf,
}

impl ApiKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The standard store location, `<config dir>/repo-genie/credentials.toml`.
    /// None when the platform has no user config directory.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(STORE_DIR).join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored key. A missing file means no key is stored.
    pub fn load(&self) -> Result<Option<String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let credentials: StoredCredentials = toml::from_str(&raw).map_err(|e| {
            GenieError::Unexpected(format!(
                "Invalid credential store at {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(credentials.groq_api_key.map(|key| key.trim().to_string()).filter(|key| !key.is_empty()))
    }

    /// Persist a key, replacing any previous one. The file holds key
    /// material, so on Unix it is readable by the owner only.
    pub fn save(&self, api_key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let credentials =
            StoredCredentials { groq_api_key: Some(api_key.trim().to_string()) };
        let raw = toml::to_string_pretty(&credentials)
            .map_err(|e| GenieError::Unexpected(format!("Failed to encode credential store: {e}")))?;
        std::fs::write(&self.path, raw)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    /// Remove the stored key. Removing an absent key is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let key = resolve_api_key(Some("explicit"), Some("env"), Some("stored")).unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn test_env_key_beats_stored() {
        let key = resolve_api_key(None, Some("env"), Some("stored")).unwrap();
        assert_eq!(key, "env");
    }

    #[test]
    fn test_stored_key_is_last_resort() {
        let key = resolve_api_key(None, None, Some("stored")).unwrap();
        assert_eq!(key, "stored");
    }

    #[test]
    fn test_blank_sources_count_as_absent() {
        let key = resolve_api_key(Some("   "), Some(""), Some("stored")).unwrap();
        assert_eq!(key, "stored");
        assert!(matches!(
            resolve_api_key(Some(" "), None, None),
            Err(GenieError::MissingCredential)
        ));
    }

    #[test]
    fn test_no_sources_is_missing_credential() {
        assert!(matches!(resolve_api_key(None, None, None), Err(GenieError::MissingCredential)));
    }

    #[test]
    fn test_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ApiKeyStore::new(dir.path().join("nested").join("credentials.toml"));

        assert_eq!(store.load().unwrap(), None);

        store.save("gsk_secret").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("gsk_secret"));

        store.save("gsk_other").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("gsk_other"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_store_trims_saved_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = ApiKeyStore::new(dir.path().join("credentials.toml"));
        store.save("  gsk_padded \n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("gsk_padded"));
    }

    #[cfg(unix)]
    #[test]
    fn test_store_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let store = ApiKeyStore::new(dir.path().join("credentials.toml"));
        store.save("gsk_secret").unwrap();
        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_store_rejects_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        let store = ApiKeyStore::new(path);
        assert!(matches!(store.load(), Err(GenieError::Unexpected(_))));
    }
}
