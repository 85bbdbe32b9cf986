// Combination finder library
// Candidate listing, subset enumeration, and the search loop

pub mod combinations;
pub mod listing;
pub mod search;

// Re-export commonly used types for convenience
pub use combinations::Combinations;
pub use listing::list_files;
pub use search::{CandidateFile, Finder, Match, SearchOutcome, SearchResult, SearchStats};
