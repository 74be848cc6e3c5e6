//! Content hashing for file fingerprints
//!
//! Files are streamed through the digest in fixed-size chunks so peak memory
//! stays bounded regardless of file size. The chunk size never affects the
//! resulting digest.

use crate::error::HashError;
use crate::types::{Algorithm, Digest};
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read chunk size used when hashing files (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Running hash accumulator for either supported algorithm.
enum ContentHasher {
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl ContentHasher {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha256 => ContentHasher::Sha256(Sha256::new()),
            Algorithm::Blake3 => ContentHasher::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            ContentHasher::Sha256(h) => h.update(data),
            ContentHasher::Blake3(h) => {
                h.update(data);
            }
        }
    }

    fn finalize(self) -> Digest {
        match self {
            ContentHasher::Sha256(h) => Digest::from_hex(hex::encode(h.finalize())),
            ContentHasher::Blake3(h) => Digest::from_hex(hex::encode(h.finalize().as_bytes())),
        }
    }
}

/// Hash a file's full content.
///
/// Directories and special files are rejected with `HashError::NotAFile`. The
/// file handle is dropped before returning, on success or error.
pub fn hash_file(path: &Path, algorithm: Algorithm) -> Result<Digest, HashError> {
    let metadata = std::fs::metadata(path).map_err(|e| HashError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_file() {
        return Err(HashError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| HashError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    hash_reader(file, algorithm).map_err(|e| HashError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Hash everything readable from `reader` using the default chunk size.
pub fn hash_reader<R: Read>(reader: R, algorithm: Algorithm) -> std::io::Result<Digest> {
    hash_reader_with_chunk_size(reader, algorithm, CHUNK_SIZE)
}

/// Hash everything readable from `reader`, reading at most `chunk_size` bytes at a time.
pub fn hash_reader_with_chunk_size<R: Read>(
    mut reader: R,
    algorithm: Algorithm,
    chunk_size: usize,
) -> std::io::Result<Digest> {
    let mut hasher = ContentHasher::new(algorithm);
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(hasher.finalize())
}

/// Hash an in-memory buffer in one pass.
pub fn compute_content_hash(content: &[u8], algorithm: Algorithm) -> Digest {
    let mut hasher = ContentHasher::new(algorithm);
    hasher.update(content);
    hasher.finalize()
}
