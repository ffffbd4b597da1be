use std::path::PathBuf;

/// A content file produced for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFileRecord {
    pub document_index: usize,
    pub absolute_path: PathBuf,
    /// Forward-slash path relative to the sequence directory.
    pub relative_path: String,
    /// Lowercase hex SHA-256 of the file contents.
    pub digest: String,
}
