// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Bounded sampling of file contents.

use crate::inventory::FileInfo;
use std::io;
use std::path::Path;

use super::cancel::CancellationToken;

/// Files larger than this are never read.
pub const MAX_FILE_BYTES: u64 = 500_000;

/// Reads file contents on behalf of the engine.
pub trait FileReader: Send + Sync {
    /// Read the whole file, refusing files larger than `max` bytes.
    fn read_bytes(&self, path: &Path, max: u64) -> io::Result<Vec<u8>>;
}

/// `FileReader` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_bytes(&self, path: &Path, max: u64) -> io::Result<Vec<u8>> {
        let len = std::fs::metadata(path)?.len();
        if len > max {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file is {} bytes, limit is {}", len, max),
            ));
        }
        std::fs::read(path)
    }
}

/// One sampled file.
#[derive(Debug, Clone)]
pub struct Sample<'a> {
    /// Repository-relative path.
    pub path: &'a Path,
    /// Extension including the leading dot.
    pub extension: &'a str,
    /// File contents (lossily decoded).
    pub content: String,
}

/// Iterator over up to `max_samples` readable files accepted by `filter`.
///
/// Files that cannot be read or exceed [`MAX_FILE_BYTES`] are skipped and do
/// not count toward the cap. Iteration stops early when the cancellation
/// token is raised.
pub struct Sampler<'a, F> {
    root: &'a Path,
    files: std::slice::Iter<'a, FileInfo>,
    reader: &'a dyn FileReader,
    cancel: &'a CancellationToken,
    filter: F,
    max_samples: usize,
    yielded: usize,
}

impl<'a, F> Sampler<'a, F>
where
    F: Fn(&str) -> bool,
{
    /// Start a new pass over `files`.
    pub fn new(
        root: &'a Path,
        files: &'a [FileInfo],
        reader: &'a dyn FileReader,
        cancel: &'a CancellationToken,
        max_samples: usize,
        filter: F,
    ) -> Self {
        Self {
            root,
            files: files.iter(),
            reader,
            cancel,
            filter,
            max_samples,
            yielded: 0,
        }
    }
}

impl<'a, F> Iterator for Sampler<'a, F>
where
    F: Fn(&str) -> bool,
{
    type Item = Sample<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.yielded >= self.max_samples {
            return None;
        }

        for file in self.files.by_ref() {
            if self.cancel.is_cancelled() {
                tracing::debug!("Sampling stopped by cancellation");
                return None;
            }

            if file.is_dir || !(self.filter)(&file.extension) {
                continue;
            }

            match self
                .reader
                .read_bytes(&self.root.join(&file.path), MAX_FILE_BYTES)
            {
                Ok(bytes) => {
                    self.yielded += 1;
                    return Some(Sample {
                        path: &file.path,
                        extension: &file.extension,
                        content: String::from_utf8_lossy(&bytes).into_owned(),
                    });
                }
                Err(e) => {
                    tracing::trace!("Skipping {}: {}", file.path.display(), e);
                }
            }
        }

        None
    }
}
