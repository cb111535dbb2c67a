//! Thin glue shared by the two CLI entry points: the configuration-file
//! reader, logging setup, and the audit sink. None of this is part of the
//! core engine — it exists only to wire the engine up to a terminal.

mod audit;
mod charsets;
mod logging;

pub use audit::AuditFile;
pub use charsets::CharsetConfig;
pub use logging::init_logging;
