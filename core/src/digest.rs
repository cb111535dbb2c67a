//! The digest primitive: a pure `plaintext bytes -> fixed-size digest bytes`
//! mixer. No salt, no HMAC, no truncation — just the standard SHA1 or MD5
//! output for the configured algorithm.

use digest::Digest as _;
use md5::Md5;
use sha1::Sha1;

use crate::error::CoreError;

/// The two digests a table can be built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Md5,
}

impl Algorithm {
    /// Digest width in bytes: 20 for SHA1, 16 for MD5.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Md5 => 16,
        }
    }

    /// Hashes a plaintext, encoded as UTF-8 bytes.
    pub fn hash(self, plaintext: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Sha1 => Sha1::digest(plaintext).to_vec(),
            Algorithm::Md5 => Md5::digest(plaintext).to_vec(),
        }
    }

    /// Parses an algorithm name as accepted on the generator/cracker CLIs
    /// (`"sha1"` / `"md5"`, case-insensitive).
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "md5" => Ok(Algorithm::Md5),
            other => Err(CoreError::UnsupportedAlgorithm(other.to_owned())),
        }
    }

    /// The on-disk tag used by the table file format: 1 = SHA1, 2 = MD5.
    pub fn tag(self) -> u8 {
        match self {
            Algorithm::Sha1 => 1,
            Algorithm::Md5 => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Algorithm::Sha1),
            2 => Some(Algorithm::Md5),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Md5 => "md5",
        })
    }
}
