use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_API: &str = "iftar-countdown-api";
const USERNAME: &str = "default";

fn entry() -> Result<Entry> {
    Entry::new(SERVICE_API, USERNAME).context("Failed to create keyring entry")
}

/// Store the collectapi key in the system keyring
pub fn store_api_key(key: &str) -> Result<()> {
    entry()?
        .set_password(key)
        .context("Failed to store API key in keyring")
}

/// Retrieve the collectapi key from the system keyring
pub fn get_api_key() -> Result<String> {
    entry()?
        .get_password()
        .context("Failed to retrieve API key from keyring")
}

/// Delete the collectapi key from the system keyring
pub fn delete_api_key() -> Result<()> {
    entry()?
        .delete_credential()
        .context("Failed to delete API key from keyring")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires actual keyring backend
    fn test_store_and_retrieve() {
        store_api_key("test_key_123").unwrap();
        assert_eq!(get_api_key().unwrap(), "test_key_123");
        delete_api_key().unwrap();
    }
}
