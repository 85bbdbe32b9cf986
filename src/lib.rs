// Library module for hashseek
// Re-exports modules for use in integration tests and the binary

pub mod error;
pub mod finder;
pub mod hash;

// Re-export commonly used types for convenience
pub use error::FinderError;
pub use finder::{CandidateFile, Finder, SearchOutcome, SearchResult};
pub use hash::{DigestOutcome, HashAlgorithm, HashEngine};
