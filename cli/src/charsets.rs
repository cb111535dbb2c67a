//! The configuration-file reader: a text key/value store with a
//! `charsets` section mapping a charset name to its literal alphabet. The
//! core never sees the file — only the expanded alphabet string.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rainbow_core::CoreError;
use serde::Deserialize;

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    charsets: HashMap<String, String>,
}

/// A loaded `charsets` table, keyed by name.
pub struct CharsetConfig {
    charsets: HashMap<String, String>,
}

impl CharsetConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file at {}", path.display()))?;
        let raw: RawConfig = toml::from_str(&text)
            .with_context(|| format!("config file at {} is not valid TOML", path.display()))?;

        Ok(Self {
            charsets: raw.charsets,
        })
    }

    /// Expands a charset name into its literal alphabet. Raised as
    /// `CoreError::UnknownCharset` rather than a generic string, the same
    /// typed taxonomy used for every other construction-time failure.
    pub fn expand(&self, name: &str) -> Result<&str, CoreError> {
        self.charsets
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CoreError::UnknownCharset(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_known_charset() {
        let dir = std::env::temp_dir().join(format!("rainbow-cli-charset-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[charsets]\nlower = \"abc\"\n").unwrap();

        let config = CharsetConfig::load(&path).unwrap();
        assert_eq!(config.expand("lower").unwrap(), "abc");
        assert!(matches!(
            config.expand("missing"),
            Err(CoreError::UnknownCharset(_))
        ));

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }
}
