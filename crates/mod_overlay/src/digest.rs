//! Content comparison by SHA-1 digest.
//!
//! Two files are considered the same when the SHA-1 digests of their full
//! contents match. Timestamps and permissions never take part in the check.

use crate::error::{Error, Result};
use camino::Utf8Path;
use sha1::{Digest, Sha1};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};

/// Size of each read while hashing, so large game files are never held in memory.
const CHUNK_SIZE: usize = 64 * 1024;

/// 160-bit SHA-1 fingerprint of a file's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileDigest([u8; 20]);

impl FileDigest {
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for FileDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Hash a file in fixed-size chunks.
///
/// The file handle is dropped as soon as hashing finishes or fails.
pub fn file_digest(path: &Utf8Path) -> Result<FileDigest> {
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path.as_std_path()).map_err(read_err)?;
    digest_reader(BufReader::with_capacity(CHUNK_SIZE, file)).map_err(read_err)
}

fn digest_reader(mut reader: impl Read) -> io::Result<FileDigest> {
    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher)?;

    let mut digest = [0u8; 20];
    digest.copy_from_slice(&hasher.finalize());
    Ok(FileDigest(digest))
}

/// Check whether two files have byte-identical contents.
pub fn files_identical(a: &Utf8Path, b: &Utf8Path) -> Result<bool> {
    let digest_a = file_digest(a)?;
    let digest_b = file_digest(b)?;
    tracing::debug!("sha1 {} = {}, {} = {}", a, digest_a, b, digest_b);
    Ok(digest_a == digest_b)
}
