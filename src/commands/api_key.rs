use crate::config::Config;
use anyhow::Result;

pub fn set(key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    crate::keyring::store_api_key(key)?;
    println!("✓ API key stored in the system keyring");
    Ok(())
}

pub fn status(config: &Config) -> Result<()> {
    match config.get_api_key() {
        Ok(key) => println!("✓ API key configured ({})", mask(&key)),
        Err(_) => println!("✗ No API key configured"),
    }
    Ok(())
}

fn mask(key: &str) -> String {
    let visible: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("…{}", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_last_four() {
        assert_eq!(mask("abcdef123456"), "…3456");
        assert_eq!(mask("ab"), "…ab");
    }
}
