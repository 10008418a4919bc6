//! Output sinks for plan artifacts.
//!
//! A handle returned by [`ArtifactSink::open_for_write`] is released when it
//! is dropped, so a handle never outlives the write it was opened for, even
//! when that write fails.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DiskBalancerError, Result};

/// Opens writable handles for artifact paths.
pub trait ArtifactSink {
    type Handle: Write;

    /// Opens `path` for writing, replacing any existing content.
    fn open_for_write(&self, path: &Path) -> Result<Self::Handle>;
}

impl<S: ArtifactSink> ArtifactSink for &S {
    type Handle = S::Handle;

    fn open_for_write(&self, path: &Path) -> Result<Self::Handle> {
        (**self).open_for_write(path)
    }
}

/// Sink writing to the local file system.
///
/// Writes are blocking. The command writes one pair of small files after the
/// planner has returned, with nothing else running on the runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSink;

impl ArtifactSink for LocalFileSink {
    type Handle = BufWriter<File>;

    fn open_for_write(&self, path: &Path) -> Result<Self::Handle> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DiskBalancerError::file_system(parent, e))?;
        }
        let file = File::create(path).map_err(|e| DiskBalancerError::file_system(path, e))?;
        Ok(BufWriter::new(file))
    }
}
