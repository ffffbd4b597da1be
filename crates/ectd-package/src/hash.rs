//! SHA-256 digests of content files and of the package tree.
//!
//! The digest manifest (`sha256.txt`) lists one `<hex> *<path>` line per file,
//! sorted by path, so its bytes do not depend on directory traversal order.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use ectd_manifest::MANIFEST_FILE_NAME;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{PackageError, Result};

/// Buffer size for reading files during digest computation.
const BUFFER_SIZE: usize = 65536; // 64 KB

pub const DIGEST_MANIFEST_FILE_NAME: &str = "sha256.txt";

/// Files at the root of a hashed tree that are never listed.
pub const EXCLUDED_FROM_DIGEST: [&str; 2] = [MANIFEST_FILE_NAME, DIGEST_MANIFEST_FILE_NAME];

/// Digest of one file in a hashed tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FileDigest {
    /// Forward-slash path relative to the hashed root.
    pub relative_path: String,
    /// Lowercase hex SHA-256.
    pub digest: String,
}

/// Compute the SHA-256 of a file, streaming it in fixed-size chunks.
pub fn sha256_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(PackageError::io("open", path))?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(PackageError::io("read", path))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA-256 of an in-memory buffer.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Hash every file under `root`, sorted by relative path.
///
/// The manifest and digest manifest are skipped at the top level only; files
/// with the same names deeper in the tree are hashed like any other.
pub fn hash_directory(root: &Path) -> Result<Vec<FileDigest>> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;

    let mut digests = files
        .into_iter()
        .map(|(path, relative_path)| {
            Ok(FileDigest {
                digest: sha256_file(&path)?,
                relative_path,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    digests.sort();

    debug!(root = %root.display(), file_count = digests.len(), "hashed directory");
    Ok(digests)
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, String)>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(PackageError::io("read directory", dir))?;
    for entry in entries {
        let entry = entry.map_err(PackageError::io("read directory", dir))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(PackageError::io("inspect", &path))?;

        if file_type.is_dir() {
            collect_files(root, &path, out)?;
            continue;
        }
        if dir == root
            && EXCLUDED_FROM_DIGEST
                .iter()
                .any(|excluded| entry.file_name() == *excluded)
        {
            continue;
        }
        let relative = relative_path(root, &path);
        out.push((path, relative));
    }
    Ok(())
}

/// Forward-slash path of `path` relative to `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render digest manifest text: sorted lines with a trailing newline.
pub fn digest_manifest_content(digests: &[FileDigest]) -> String {
    let mut sorted: Vec<&FileDigest> = digests.iter().collect();
    sorted.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    let mut content = String::new();
    for entry in sorted {
        content.push_str(&entry.digest);
        content.push_str(" *");
        content.push_str(&entry.relative_path);
        content.push('\n');
    }
    content
}

/// Hash the tree under `dir` and write `sha256.txt` at its root.
pub fn write_digest_manifest(dir: &Path) -> Result<(PathBuf, Vec<FileDigest>)> {
    let digests = hash_directory(dir)?;
    let path = dir.join(DIGEST_MANIFEST_FILE_NAME);
    fs::write(&path, digest_manifest_content(&digests))
        .map_err(PackageError::io("write", &path))?;
    info!(path = %path.display(), file_count = digests.len(), "wrote digest manifest");
    Ok((path, digests))
}

/// Parse digest manifest text into entries, in file order.
pub fn parse_digest_manifest(content: &str, source: &Path) -> Result<Vec<FileDigest>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let malformed = || PackageError::MalformedDigestManifest {
                path: source.to_path_buf(),
                line: index + 1,
            };
            let (digest, path) = line.split_once(" *").ok_or_else(malformed)?;
            let is_hex = digest.len() == 64 && digest.bytes().all(|b| b.is_ascii_hexdigit());
            if !is_hex || path.is_empty() {
                return Err(malformed());
            }
            Ok(FileDigest {
                relative_path: path.to_string(),
                digest: digest.to_ascii_lowercase(),
            })
        })
        .collect()
}

/// Outcome of re-hashing a tree against its digest manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigestVerification {
    pub verified: usize,
    /// Listed files whose contents no longer match.
    pub mismatched: Vec<String>,
    /// Listed files that no longer exist.
    pub missing: Vec<String>,
}

impl DigestVerification {
    pub fn is_valid(&self) -> bool {
        self.mismatched.is_empty() && self.missing.is_empty()
    }
}

/// Re-hash every file listed in `dir/sha256.txt`.
pub fn verify_digest_manifest(dir: &Path) -> Result<DigestVerification> {
    let manifest_path = dir.join(DIGEST_MANIFEST_FILE_NAME);
    let content =
        fs::read_to_string(&manifest_path).map_err(PackageError::io("read", &manifest_path))?;

    let mut verification = DigestVerification::default();
    for entry in parse_digest_manifest(&content, &manifest_path)? {
        let path = dir.join(&entry.relative_path);
        if !path.is_file() {
            verification.missing.push(entry.relative_path);
            continue;
        }
        if sha256_file(&path)? == entry.digest {
            verification.verified += 1;
        } else {
            verification.mismatched.push(entry.relative_path);
        }
    }

    info!(
        verified = verification.verified,
        mismatched = verification.mismatched.len(),
        missing = verification.missing.len(),
        "verified digest manifest"
    );
    Ok(verification)
}
