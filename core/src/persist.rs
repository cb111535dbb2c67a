//! Persistence: a self-describing big-endian binary blob that survives a
//! process boundary. Earlier tools in this space pickled the whole object
//! graph, tree and all; that envelope is an implementation detail we don't
//! carry forward — the format here is explicit and owned by this module
//! alone.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::TableConfig;
use crate::digest::Algorithm;
use crate::error::{CoreError, CoreResult};
use crate::index::TableIndex;
use crate::table::TableManager;

const MAGIC: &[u8; 4] = b"RBTB";
const VERSION: u16 = 1;

/// Serializes the complete table manager (config, charset, and every
/// `(tail, head)` pair) to `path`.
pub fn save(manager: &TableManager, path: &Path) -> CoreResult<()> {
    let file = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    let mut writer = io::BufWriter::new(file);

    let config = manager.config();

    writer.write_all(MAGIC)?;
    writer.write_all(&VERSION.to_be_bytes())?;
    writer.write_all(&[config.algorithm.tag()])?;
    writer.write_all(&config.min_length.to_be_bytes())?;
    writer.write_all(&config.max_length.to_be_bytes())?;
    writer.write_all(&config.chain_length.to_be_bytes())?;
    writer.write_all(&config.number_of_chains.to_be_bytes())?;

    let charset = config.charset();
    writer.write_all(&(charset.len() as u32).to_be_bytes())?;
    writer.write_all(charset)?;

    writer.write_all(&(manager.index().len() as u64).to_be_bytes())?;
    for (tail, head) in manager.index().iter_ordered() {
        writer.write_all(tail)?;
        writer.write_all(&(head.len() as u16).to_be_bytes())?;
        writer.write_all(head)?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads back a table manager previously written by `save`. Any header
/// mismatch, truncation, or unsupported parameter fails with
/// `InvalidTableFile` rather than returning a partial table.
pub fn load(path: &Path) -> CoreResult<TableManager> {
    let file = File::open(path)?;
    let mut reader = io::BufReader::new(file);

    let mut magic = [0u8; 4];
    read_exact(&mut reader, &mut magic, "magic")?;
    if &magic != MAGIC {
        return Err(CoreError::InvalidTableFile(format!(
            "bad magic {magic:?}, expected {MAGIC:?}"
        )));
    }

    let version = read_u16(&mut reader, "version")?;
    if version != VERSION {
        return Err(CoreError::InvalidTableFile(format!(
            "unsupported table file version {version}"
        )));
    }

    let mut tag = [0u8; 1];
    read_exact(&mut reader, &mut tag, "algorithm tag")?;
    let algorithm = Algorithm::from_tag(tag[0])
        .ok_or_else(|| CoreError::InvalidTableFile(format!("unknown algorithm tag {}", tag[0])))?;

    let min_length = read_u32(&mut reader, "min_length")?;
    let max_length = read_u32(&mut reader, "max_length")?;
    let chain_length = read_u32(&mut reader, "chain_length")?;
    let number_of_chains = read_u64(&mut reader, "number_of_chains")?;

    let charset_len = read_u32(&mut reader, "charset length")? as usize;
    let mut charset = vec![0u8; charset_len];
    read_exact(&mut reader, &mut charset, "charset bytes")?;

    let config = TableConfig::new(
        algorithm,
        charset,
        min_length,
        max_length,
        chain_length,
        number_of_chains,
    )
    .map_err(|e| CoreError::InvalidTableFile(format!("invalid configuration in file: {e}")))?;

    let entry_count = read_u64(&mut reader, "entry count")?;
    let tail_len = config.algorithm.digest_len();
    let mut index = TableIndex::with_capacity(entry_count as usize);

    for _ in 0..entry_count {
        let mut tail = vec![0u8; tail_len];
        read_exact(&mut reader, &mut tail, "tail digest")?;

        let head_len = read_u16(&mut reader, "head length")? as usize;
        let mut head = vec![0u8; head_len];
        read_exact(&mut reader, &mut head, "head bytes")?;

        index.insert(tail, head);
    }

    Ok(TableManager::from_parts(config, index))
}

fn read_exact(reader: &mut impl Read, buf: &mut [u8], field: &str) -> CoreResult<()> {
    reader
        .read_exact(buf)
        .map_err(|_| CoreError::InvalidTableFile(format!("truncated while reading {field}")))
}

fn read_u16(reader: &mut impl Read, field: &str) -> CoreResult<u16> {
    let mut buf = [0u8; 2];
    read_exact(reader, &mut buf, field)?;
    Ok(u16::from_be_bytes(buf))
}

fn read_u32(reader: &mut impl Read, field: &str) -> CoreResult<u32> {
    let mut buf = [0u8; 4];
    read_exact(reader, &mut buf, field)?;
    Ok(u32::from_be_bytes(buf))
}

fn read_u64(reader: &mut impl Read, field: &str) -> CoreResult<u64> {
    let mut buf = [0u8; 8];
    read_exact(reader, &mut buf, field)?;
    Ok(u64::from_be_bytes(buf))
}
