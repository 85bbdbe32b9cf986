// Hash algorithm registry
// Closed set of supported algorithms and the hasher wrappers behind them

use std::fmt;
use std::str::FromStr;

use crate::error::FinderError;

use crc::{Algorithm, Crc, Digest as CrcDigest};
use crc32fast::Hasher as Crc32Hasher;
use md5::{Digest as Md5Digest, Md5};
use sha1::{Digest as Sha1Digest, Sha1};
use sha2::{Digest as Sha2Digest, Sha256};

/// The supported hash algorithms. Nothing outside this set is representable;
/// parsing any other name fails with [`FinderError::UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Md5,
    Sha1,
    Crc32,
    Crc64,
}

impl HashAlgorithm {
    /// All supported algorithms, in display order.
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Crc32,
        HashAlgorithm::Crc64,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Crc32 => "CRC32",
            HashAlgorithm::Crc64 => "CRC64",
        }
    }

    /// Width of the hex digest this algorithm produces.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Crc32 => 8,
            HashAlgorithm::Crc64 => 16,
        }
    }

    /// Get a fresh hasher instance for this algorithm.
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            HashAlgorithm::Sha256 => Box::new(Sha256Wrapper(Sha2Digest::new())),
            HashAlgorithm::Md5 => Box::new(Md5Wrapper(Md5Digest::new())),
            HashAlgorithm::Sha1 => Box::new(Sha1Wrapper(Sha1Digest::new())),
            HashAlgorithm::Crc32 => Box::new(Crc32Wrapper(Crc32Hasher::new())),
            HashAlgorithm::Crc64 => Box::new(Crc64Wrapper(CRC64.digest())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "crc32" => Ok(HashAlgorithm::Crc32),
            "crc64" => Ok(HashAlgorithm::Crc64),
            _ => Err(FinderError::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl serde::Serialize for HashAlgorithm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Trait for hash algorithm implementations
pub trait Hasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash and return the result
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

// CRC-64 with the reflected ISO 3309 polynomial, zero seed, and no output
// complement. Not the catalogue CRC-64/GO-ISO, which seeds and xors with
// all-ones and agrees with this variant only on empty input.
const CRC64_ISO: Algorithm<u64> = Algorithm {
    width: 64,
    poly: 0x000000000000001b,
    init: 0x0000000000000000,
    refin: true,
    refout: true,
    xorout: 0x0000000000000000,
    check: 0x46a5a9388a5beffe,
    residue: 0x0000000000000000,
};

// Shared by every Crc64 hasher instance
static CRC64: Crc<u64> = Crc::<u64>::new(&CRC64_ISO);

// SHA-256 wrapper
struct Sha256Wrapper(Sha256);

impl Hasher for Sha256Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }
}

// MD5 wrapper
struct Md5Wrapper(Md5);

impl Hasher for Md5Wrapper {
    fn update(&mut self, data: &[u8]) {
        Md5Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Md5Digest::finalize(self.0).to_vec()
    }
}

// SHA-1 wrapper
struct Sha1Wrapper(Sha1);

impl Hasher for Sha1Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha1Digest::finalize(self.0).to_vec()
    }
}

// CRC32 wrapper
struct Crc32Wrapper(Crc32Hasher);

impl Hasher for Crc32Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_be_bytes().to_vec()
    }
}

// CRC64 wrapper
struct Crc64Wrapper(CrcDigest<'static, u64>);

impl Hasher for Crc64Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_be_bytes().to_vec()
    }
}

// Tests in tests/algorithm_tests.rs
