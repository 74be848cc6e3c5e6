//! Hasher verification against the reference digest crates.

use fixity::scan::hasher::{self, CHUNK_SIZE};
use fixity::types::Algorithm;
use sha2::{Digest as _, Sha256};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_digest_matches_sha2_directly() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("large.bin");
    let content: Vec<u8> = (0..(CHUNK_SIZE * 2 + 123)).map(|i| (i * 31 % 256) as u8).collect();
    fs::write(&file, &content).unwrap();

    let ours = hasher::hash_file(&file, Algorithm::Sha256).unwrap();
    let reference = hex::encode(Sha256::digest(&content));

    assert_eq!(ours.as_str(), reference);
}

#[test]
fn test_file_digest_matches_blake3_directly() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("data.txt");
    fs::write(&file, b"blake3 reference").unwrap();

    let ours = hasher::hash_file(&file, Algorithm::Blake3).unwrap();
    let reference = blake3::hash(b"blake3 reference").to_hex().to_string();

    assert_eq!(ours.as_str(), reference);
}

#[test]
fn test_hashing_same_file_twice_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("data.txt");
    fs::write(&file, "stable").unwrap();

    let first = hasher::hash_file(&file, Algorithm::Sha256).unwrap();
    let second = hasher::hash_file(&file, Algorithm::Sha256).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_flipping_last_byte_of_large_file_changes_digest() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("large.bin");
    let mut content = vec![0u8; CHUNK_SIZE * 4];
    fs::write(&file, &content).unwrap();
    let before = hasher::hash_file(&file, Algorithm::Sha256).unwrap();

    let last = content.len() - 1;
    content[last] = 1;
    fs::write(&file, &content).unwrap();
    let after = hasher::hash_file(&file, Algorithm::Sha256).unwrap();

    assert_ne!(before, after);
}
