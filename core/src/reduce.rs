//! The reduction family `R_i`: an indexed, non-injective surjection from
//! digests onto plaintexts. Different chain positions use different
//! reductions so that chains merge less often.

use crate::config::TableConfig;

/// `R_i(digest) -> plaintext`.
///
/// The target length is derived from the digest's second byte so that the
/// reduction stays a pure function of `(digest, i, charset, min_length,
/// max_length)` — repeated calls are bit-for-bit identical.
pub fn reduce(digest: &[u8], i: u64, config: &TableConfig) -> Vec<u8> {
    let span = config.max_length - config.min_length + 1;
    let len = (digest[1] as u32 % span) + config.min_length;

    let charset = config.charset();
    let mut plaintext = Vec::with_capacity(len as usize);
    for k in 0..len as usize {
        let b = digest[(i as usize + k) % digest.len()];
        plaintext.push(charset[b as usize % charset.len()]);
    }
    plaintext
}
