use anyhow::{Context, Result};
use genie_generator::ApiKeyStore;

fn default_store() -> Result<ApiKeyStore> {
    ApiKeyStore::default_location().context("no user config directory on this platform")
}

/// Store a key for later `generate` runs.
pub fn set_key(api_key: &str) -> Result<()> {
    let store = default_store()?;
    store.save(api_key)?;
    println!("Stored API key at {}", store.path().display());
    Ok(())
}

/// Forget the stored key. Clearing an empty store is fine.
pub fn clear() -> Result<()> {
    let store = default_store()?;
    store.clear()?;
    println!("Removed stored API key from {}", store.path().display());
    Ok(())
}
