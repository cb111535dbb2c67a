//! The table manager: owns configuration and the index, drives
//! generation, and implements inversion.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::chain::{chain, replay};
use crate::config::TableConfig;
use crate::error::{CoreError, CoreResult};
use crate::index::TableIndex;
use crate::reduce::reduce;

/// Receives `(password, tail)` pairs as they are generated. An audit file
/// is an external collaborator that implements this; the engine itself
/// never opens a file.
pub trait AuditSink {
    fn record(&mut self, password: &[u8], tail: &[u8]);
}

impl AuditSink for () {
    fn record(&mut self, _password: &[u8], _tail: &[u8]) {}
}

impl<T: AuditSink + ?Sized> AuditSink for &mut T {
    fn record(&mut self, password: &[u8], tail: &[u8]) {
        (**self).record(password, tail)
    }
}

/// Outcome of a `generate_table` call. Collision counting is reported but
/// is not part of the persisted table state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    pub chains_requested: u64,
    pub collisions: u64,
}

/// Owns a table's configuration and its populated index. Read-only once
/// deserialized or once `generate_table` has returned.
pub struct TableManager {
    config: TableConfig,
    index: TableIndex,
}

impl TableManager {
    pub fn new(config: TableConfig) -> Self {
        Self {
            index: TableIndex::with_capacity(config.number_of_chains as usize),
            config,
        }
    }

    pub fn from_parts(config: TableConfig, index: TableIndex) -> Self {
        Self { config, index }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn index(&self) -> &TableIndex {
        &self.index
    }

    /// Populates the index with `number_of_chains` random-head chains.
    /// The RNG is caller-supplied so tests can seed it for reproducibility;
    /// sampling is uniform over charset *indices*, so a charset with
    /// duplicate bytes proportionally favors those bytes.
    pub fn generate_table(
        &mut self,
        rng: &mut impl Rng,
        mut audit: impl AuditSink,
        cancel: Option<&CancelToken>,
    ) -> CoreResult<GenerationReport> {
        self.index.clear();

        let mut collisions = 0u64;
        let charset = self.config.charset().to_vec();

        for _ in 0..self.config.number_of_chains {
            if let Some(cancel) = cancel {
                if cancel.is_cancelled() {
                    return Err(CoreError::Cancelled);
                }
            }

            let len = rng.gen_range(self.config.min_length..=self.config.max_length);
            let head: Vec<u8> = (0..len)
                .map(|_| charset[rng.gen_range(0..charset.len())])
                .collect();

            let tail = chain(&head, &self.config);

            if self.index.insert(tail.clone(), head.clone()) {
                collisions += 1;
            }

            audit.record(&head, &tail);
        }

        tracing::info!(collisions, "rainbow table generation finished");

        Ok(GenerationReport {
            chains_requested: self.config.number_of_chains,
            collisions,
        })
    }

    /// Same contract as `generate_table`, but chains are built across
    /// worker threads via rayon: each chain gets its own RNG sub-stream
    /// derived from `seed` and its chain index, so the set of heads
    /// produced for a given seed is independent of the thread pool's
    /// size. Insertion into the index is serialized afterwards, so the
    /// reported collision count is exact and matches what a sequential
    /// run with the same per-chain seeds would produce. The only
    /// observable difference from `generate_table` is the order in
    /// which pairs reach the audit sink.
    pub fn generate_table_parallel(
        &mut self,
        seed: u64,
        mut audit: impl AuditSink,
        cancel: Option<&CancelToken>,
    ) -> CoreResult<GenerationReport> {
        if let Some(cancel) = cancel {
            if cancel.is_cancelled() {
                return Err(CoreError::Cancelled);
            }
        }

        self.index.clear();

        let config = self.config.clone();
        let charset = config.charset().to_vec();

        let chains: Vec<(Vec<u8>, Vec<u8>)> = (0..config.number_of_chains)
            .into_par_iter()
            .map(|i| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i));
                let len = rng.gen_range(config.min_length..=config.max_length);
                let head: Vec<u8> = (0..len)
                    .map(|_| charset[rng.gen_range(0..charset.len())])
                    .collect();
                let tail = chain(&head, &config);
                (head, tail)
            })
            .collect();

        if let Some(cancel) = cancel {
            if cancel.is_cancelled() {
                return Err(CoreError::Cancelled);
            }
        }

        let mut collisions = 0u64;
        for (head, tail) in chains {
            if self.index.insert(tail.clone(), head.clone()) {
                collisions += 1;
            }
            audit.record(&head, &tail);
        }

        tracing::info!(collisions, "parallel rainbow table generation finished");

        Ok(GenerationReport {
            chains_requested: config.number_of_chains,
            collisions,
        })
    }

    /// Inverts a target digest, given as hex.
    pub fn lookup(&self, hex_hash: &str, cancel: Option<&CancelToken>) -> CoreResult<Option<Vec<u8>>> {
        let target = hex::decode(hex_hash)
            .map_err(|e| CoreError::InvalidHash(format!("not valid hex: {e}")))?;

        if target.len() != self.config.algorithm.digest_len() {
            return Err(CoreError::InvalidHash(format!(
                "expected a {}-byte digest for {}, got {} bytes",
                self.config.algorithm.digest_len(),
                self.config.algorithm,
                target.len()
            )));
        }

        // Fast path: the target is itself a stored tail.
        if let Some(head) = self.index.get(&target) {
            if let Some(plaintext) = replay(head, &target, &self.config) {
                return Ok(Some(plaintext));
            }
        }

        let chain_length = self.config.chain_length as u64;

        for i in (0..chain_length).rev() {
            if let Some(cancel) = cancel {
                if cancel.is_cancelled() {
                    return Err(CoreError::Cancelled);
                }
            }

            // Walk forward from the target, assuming it sits at column `i`.
            // Every intermediate column must be probed against the index,
            // not just the one reached at `chain_length` — the target may
            // be a stored tail several reduce/hash rounds before the end.
            let mut h = target.clone();
            for j in i..chain_length {
                let reduced = reduce(&h, j, &self.config);
                h = self.config.algorithm.hash(&reduced);

                if let Some(head) = self.index.get(&h) {
                    if let Some(plaintext) = replay(head, &target, &self.config) {
                        return Ok(Some(plaintext));
                    }
                    // false alarm: the tail matched at this column but replay
                    // did not reach the target. Keep walking forward.
                }
            }
        }

        Ok(None)
    }
}
