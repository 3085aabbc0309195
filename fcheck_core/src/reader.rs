//! File loading for the two comparison paths: slurp a whole file into one
//! buffer for text comparison, or map it read-only for binary comparison.

use fcheck_common::{CompareError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read an entire file into a single contiguous buffer.
///
/// A zero-length file yields an empty buffer. Files larger than the
/// platform's addressable size are rejected as a memory error before any
/// allocation happens.
pub fn slurp(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();

    let capacity = usize::try_from(len).map_err(|_| {
        CompareError::Memory(format!(
            "file {} is too large to load ({} bytes)",
            path.display(),
            len
        ))
    })?;

    debug!("Reading {} ({} bytes)", path.display(), len);

    let mut buffer = Vec::with_capacity(capacity);
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// A read-only view of a file's contents.
///
/// Zero-length files are represented without an actual mapping, because
/// mapping an empty file fails on some platforms. Dropping the handle
/// releases the mapping and the underlying file.
#[derive(Debug)]
pub struct MappedFile {
    map: Option<Mmap>,
    len: u64,
}

impl MappedFile {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok(Self { map: None, len: 0 });
        }

        debug!("Mapping {} ({} bytes)", path.display(), len);

        // Safety: the mapping is read-only and private to this handle. As
        // with any file mapping, concurrent truncation by another process is
        // outside the library's control.
        let map = unsafe { Mmap::map(&file)? };
        Ok(Self { map: Some(map), len })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.map {
            Some(map) => &map[..],
            None => &[],
        }
    }
}
