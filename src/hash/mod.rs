// Hash engine library
// Algorithm registry and the streaming combined-digest engine

pub mod algorithm;
pub mod engine;

// Re-export commonly used types for convenience
pub use algorithm::{HashAlgorithm, Hasher};
pub use engine::{DigestOutcome, HashEngine, DEFAULT_CHUNK_SIZE};
