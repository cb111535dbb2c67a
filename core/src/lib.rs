//! The rainbow-table engine: hash/reduce chains, a tail-indexed lookup
//! structure, generation, inversion, and the persistent on-disk format
//! that carries a table across processes.
//!
//! Every operation is CPU-bound and synchronous: no suspension points.
//! `TableManager::generate_table` is single-threaded and takes a caller
//! RNG for reproducibility; `generate_table_parallel` distributes chain
//! construction across a rayon thread pool while keeping the same exact
//! collision accounting.

mod cancel;
mod chain;
mod config;
mod digest;
mod error;
mod index;
mod persist;
mod reduce;
mod table;

pub use cancel::CancelToken;
pub use chain::{chain, replay};
pub use config::TableConfig;
pub use digest::Algorithm;
pub use error::{CoreError, CoreResult};
pub use index::TableIndex;
pub use persist::{load, save};
pub use reduce::reduce;
pub use table::{AuditSink, GenerationReport, TableManager};
