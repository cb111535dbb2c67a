//! The chain engine: composes the digest primitive and the reduction
//! family to turn a head plaintext into a tail digest, and supports the
//! replay step inversion needs.

use crate::config::TableConfig;
use crate::reduce::reduce;

/// `chain(head) -> tail`.
///
/// Iterates `chain_length` hash/reduce rounds starting from `head`. The
/// returned tail is the digest computed on the *last* reduced value inside
/// the loop — not the digest of the value one would get by reducing once
/// more. This boundary is load-bearing: it must match exactly for
/// cross-compatibility with any table already generated by this engine.
pub fn chain(head: &[u8], config: &TableConfig) -> Vec<u8> {
    let mut reduced = head.to_vec();
    let mut digest;

    for i in 0..config.chain_length as u64 {
        digest = config.algorithm.hash(&reduced);
        reduced = reduce(&digest, i, config);
    }

    digest
}

/// `replay(head, target) -> plaintext | None`.
///
/// Re-executes the chain from `head`, comparing the freshly computed hash
/// at each step against `target`. Returns the pre-hash plaintext on the
/// first match, or `None` if the loop completes without one (a false
/// alarm from a reduction collision — the caller must keep searching).
pub fn replay(head: &[u8], target: &[u8], config: &TableConfig) -> Option<Vec<u8>> {
    let mut reduced = head.to_vec();

    for i in 0..config.chain_length as u64 {
        let h = config.algorithm.hash(&reduced);
        if h == target {
            return Some(reduced);
        }
        reduced = reduce(&h, i, config);
    }

    None
}
