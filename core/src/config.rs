//! Immutable table configuration: algorithm, charset, password length
//! range, chain length and chain count. Validated once at construction;
//! every other component trusts it afterwards.

use crate::digest::Algorithm;
use crate::error::CoreError;

/// Configuration for a table, fixed for its entire lifetime.
#[derive(Clone, Debug)]
pub struct TableConfig {
    pub algorithm: Algorithm,
    charset: Vec<u8>,
    pub min_length: u32,
    pub max_length: u32,
    pub chain_length: u32,
    pub number_of_chains: u64,
}

impl TableConfig {
    /// Builds a configuration, enforcing: `|charset| >= 1`,
    /// `1 <= min_length <= max_length`, `chain_length >= 1`,
    /// `number_of_chains >= 1`.
    pub fn new(
        algorithm: Algorithm,
        charset: impl Into<Vec<u8>>,
        min_length: u32,
        max_length: u32,
        chain_length: u32,
        number_of_chains: u64,
    ) -> Result<Self, CoreError> {
        let charset = charset.into();

        if charset.is_empty() {
            return Err(CoreError::InvalidParameters(
                "charset must contain at least one byte".into(),
            ));
        }
        if min_length == 0 {
            return Err(CoreError::InvalidParameters(
                "min_length must be at least 1".into(),
            ));
        }
        if min_length > max_length {
            return Err(CoreError::InvalidParameters(format!(
                "min_length ({min_length}) must be <= max_length ({max_length})"
            )));
        }
        if chain_length == 0 {
            return Err(CoreError::InvalidParameters(
                "chain_length must be at least 1".into(),
            ));
        }
        if number_of_chains == 0 {
            return Err(CoreError::InvalidParameters(
                "number_of_chains must be at least 1".into(),
            ));
        }

        Ok(Self {
            algorithm,
            charset,
            min_length,
            max_length,
            chain_length,
            number_of_chains,
        })
    }

    pub fn charset(&self) -> &[u8] {
        &self.charset
    }
}

impl std::fmt::Display for TableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "algorithm={} length={}..={} chain_length={} number_of_chains={}",
            self.algorithm, self.min_length, self.max_length, self.chain_length, self.number_of_chains
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_charset() {
        assert!(matches!(
            TableConfig::new(Algorithm::Md5, Vec::new(), 1, 2, 1, 1),
            Err(CoreError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_min_length_zero() {
        assert!(matches!(
            TableConfig::new(Algorithm::Md5, b"abc".to_vec(), 0, 2, 1, 1),
            Err(CoreError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_min_greater_than_max() {
        assert!(matches!(
            TableConfig::new(Algorithm::Md5, b"abc".to_vec(), 3, 2, 1, 1),
            Err(CoreError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_zero_chain_length() {
        assert!(matches!(
            TableConfig::new(Algorithm::Md5, b"abc".to_vec(), 1, 2, 0, 1),
            Err(CoreError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_zero_chain_count() {
        assert!(matches!(
            TableConfig::new(Algorithm::Md5, b"abc".to_vec(), 1, 2, 1, 0),
            Err(CoreError::InvalidParameters(_))
        ));
    }

    #[test]
    fn accepts_valid_config() {
        assert!(TableConfig::new(Algorithm::Sha1, b"abc".to_vec(), 1, 3, 4, 9).is_ok());
    }
}
