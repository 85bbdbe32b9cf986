// Combination search
// Walks candidate subsets in contract order and hashes each until a match

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use super::combinations::Combinations;
use crate::error::FinderError;
use crate::hash::{DigestOutcome, HashAlgorithm, HashEngine};

/// A file eligible for the search, with its size recorded up front.
///
/// Candidates are assumed stable while a search runs; sizes are not
/// re-checked per attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub size: u64,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Build a candidate from a path by reading its metadata.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, FinderError> {
        let path = path.into();
        let metadata = fs::metadata(&path)
            .map_err(|e| FinderError::from_io(e, "reading metadata", Some(path.clone())))?;
        let size = metadata.len();
        Ok(Self { path, size })
    }
}

/// A matching combination.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Match {
    /// The matching files, in concatenation order.
    pub files: Vec<CandidateFile>,
    /// The digest they produce (uppercase hex).
    pub digest: String,
}

/// Terminal state of a search.
#[derive(Debug, Clone, serde::Serialize)]
pub enum SearchOutcome {
    /// The first combination whose digest equals the target.
    Found(Match),
    /// Every combination was tried without a match.
    Exhausted,
    /// The cancel flag was raised before a verdict.
    Cancelled,
}

/// Statistics collected during a search
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchStats {
    pub combinations_tried: u64,
    pub bytes_hashed: u64,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
}

// Helper function to serialize Duration as seconds
fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Outcome plus statistics for one search run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Searches candidate subsets for one whose combined digest matches a target.
pub struct Finder {
    engine: HashEngine,
}

impl Finder {
    /// Create a finder for the given algorithm with default engine settings.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            engine: HashEngine::new(algorithm),
        }
    }

    /// Create a finder around a pre-configured engine.
    pub fn with_engine(engine: HashEngine) -> Self {
        Self { engine }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.engine.algorithm()
    }

    /// Search every non-empty candidate subset for the target checksum.
    ///
    /// Subsets are tried in ascending size, lexicographic by candidate index
    /// within a size, so the smallest matching subset wins and the first
    /// match ends the search. Comparison ignores ASCII case. An empty
    /// candidate list exhausts immediately. Any stream open or read failure
    /// aborts the whole search. The progress callback receives the running
    /// percentage of the combination currently being hashed.
    pub fn find(
        &self,
        candidates: &[CandidateFile],
        target_checksum: &str,
        cancel: &AtomicBool,
        mut on_progress: impl FnMut(f32),
    ) -> Result<SearchResult, FinderError> {
        let target = normalize_target(target_checksum, self.engine.algorithm())?;
        let start_time = Instant::now();

        let mut combinations_tried = 0u64;
        let mut bytes_hashed = 0u64;

        let outcome = self.run_search(
            candidates,
            &target,
            cancel,
            &mut on_progress,
            &mut combinations_tried,
            &mut bytes_hashed,
        )?;

        Ok(SearchResult {
            outcome,
            stats: SearchStats {
                combinations_tried,
                bytes_hashed,
                duration: start_time.elapsed(),
            },
        })
    }

    fn run_search(
        &self,
        candidates: &[CandidateFile],
        target: &str,
        cancel: &AtomicBool,
        mut on_progress: impl FnMut(f32),
        combinations_tried: &mut u64,
        bytes_hashed: &mut u64,
    ) -> Result<SearchOutcome, FinderError> {
        for indices in Combinations::new(candidates.len()) {
            if cancel.load(Ordering::Relaxed) {
                return Ok(SearchOutcome::Cancelled);
            }

            // Streams are scoped to this attempt; every path out of the
            // iteration closes them before the next combination starts.
            let (mut streams, total_size) = open_combination(candidates, &indices)?;
            let outcome =
                self.engine
                    .digest_streams(&mut streams, total_size, cancel, &mut on_progress)?;
            drop(streams);

            match outcome {
                DigestOutcome::Cancelled => return Ok(SearchOutcome::Cancelled),
                DigestOutcome::Complete(digest) => {
                    *combinations_tried += 1;
                    *bytes_hashed += total_size;
                    if digest.eq_ignore_ascii_case(target) {
                        let files = indices.iter().map(|&i| candidates[i].clone()).collect();
                        return Ok(SearchOutcome::Found(Match { files, digest }));
                    }
                }
            }
        }

        Ok(SearchOutcome::Exhausted)
    }
}

/// Open the member files of one combination, in combination order.
fn open_combination(
    candidates: &[CandidateFile],
    indices: &[usize],
) -> Result<(Vec<File>, u64), FinderError> {
    let mut streams = Vec::with_capacity(indices.len());
    let mut total_size = 0u64;

    for &i in indices {
        let candidate = &candidates[i];
        let file = File::open(&candidate.path)
            .map_err(|e| FinderError::from_io(e, "opening", Some(candidate.path.clone())))?;
        total_size += candidate.size;
        streams.push(file);
    }

    Ok((streams, total_size))
}

/// Validate the target before any hashing: after trimming it must be hex of
/// exactly the algorithm's digest width.
fn normalize_target(target: &str, algorithm: HashAlgorithm) -> Result<String, FinderError> {
    let trimmed = target.trim();
    if trimmed.len() != algorithm.digest_len() || !trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FinderError::InvalidChecksum {
            checksum: target.to_string(),
            algorithm: algorithm.name().to_string(),
            expected: algorithm.digest_len(),
        });
    }
    Ok(trimmed.to_string())
}

// Tests in tests/search_tests.rs
