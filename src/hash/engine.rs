// Streaming digest engine
// Hashes ordered byte streams as one concatenated input, in fixed-size chunks

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use super::algorithm::HashAlgorithm;
use crate::error::FinderError;

/// Default read chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Outcome of a digest pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutcome {
    /// Uppercase hex digest over the full concatenated input.
    Complete(String),
    /// The cancel flag was raised before the input was fully consumed.
    Cancelled,
}

/// Streaming hash engine bound to a single algorithm.
///
/// The engine keeps no hasher state between calls; every digest pass starts
/// from a fresh hasher, so repeated passes over the same bytes always agree.
pub struct HashEngine {
    algorithm: HashAlgorithm,
    chunk_size: usize,
}

impl HashEngine {
    /// Create an engine with the default chunk size.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the read chunk size. Progress and cancellation are observed
    /// once per chunk.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Digest the streams in order as one concatenated input.
    ///
    /// `total_size` is the combined byte length of the streams; after every
    /// chunk the progress callback receives the running percentage of it,
    /// clamped to 100. The cancel flag is checked at each chunk boundary.
    /// An empty stream set yields the algorithm's canonical empty digest.
    pub fn digest_streams<R: Read>(
        &self,
        streams: &mut [R],
        total_size: u64,
        cancel: &AtomicBool,
        mut on_progress: impl FnMut(f32),
    ) -> Result<DigestOutcome, FinderError> {
        let mut hasher = self.algorithm.hasher();
        let mut buffer = vec![0u8; self.chunk_size];
        let mut consumed = 0u64;

        for stream in streams.iter_mut() {
            loop {
                if cancel.load(Ordering::Relaxed) {
                    return Ok(DigestOutcome::Cancelled);
                }

                let bytes_read = stream
                    .read(&mut buffer)
                    .map_err(|e| FinderError::from_io(e, "reading stream", None))?;
                if bytes_read == 0 {
                    break;
                }
                hasher.update(&buffer[..bytes_read]);

                consumed += bytes_read as u64;
                if total_size > 0 {
                    let percent = (consumed as f32 / total_size as f32) * 100.0;
                    on_progress(percent.min(100.0));
                }
            }
        }

        Ok(DigestOutcome::Complete(hex::encode_upper(hasher.finalize())))
    }

    /// Digest a list of files in order as one concatenated input.
    ///
    /// Returns the outcome together with the combined byte length of the
    /// files. An empty list yields the canonical empty digest and zero bytes.
    pub fn digest_files(
        &self,
        paths: &[PathBuf],
        cancel: &AtomicBool,
        on_progress: impl FnMut(f32),
    ) -> Result<(DigestOutcome, u64), FinderError> {
        let mut files = Vec::with_capacity(paths.len());
        let mut total_size = 0u64;

        for path in paths {
            let file = File::open(path)
                .map_err(|e| FinderError::from_io(e, "opening", Some(path.clone())))?;
            let metadata = file
                .metadata()
                .map_err(|e| FinderError::from_io(e, "reading metadata", Some(path.clone())))?;
            total_size += metadata.len();
            files.push(file);
        }

        let outcome = self.digest_streams(&mut files, total_size, cancel, on_progress)?;
        Ok((outcome, total_size))
    }
}

// Tests in tests/engine_tests.rs
