#![deny(unsafe_code)]

//! eCTD 4.0 submission package assembly.
//!
//! [`generate_submission`] runs the whole pipeline: validation, reference
//! resolution, identifier assignment, directory layout, content files,
//! `submissionunit.xml` and the `sha256.txt` digest manifest.

pub mod assemble;
pub mod content;
pub mod error;
pub mod hash;
pub mod layout;
pub mod staging;

pub use crate::assemble::{
    DocumentSummary, PackageOptions, PackageOutput, check_submission, generate_submission,
};
pub use crate::content::{
    ContentGenerator, ContentRequest, ContentSource, FileNamer, GeneratedFile, PlaceholderPdf,
    default_file_name,
};
pub use crate::error::{PackageError, Result};
pub use crate::hash::{
    DIGEST_MANIFEST_FILE_NAME, DigestVerification, FileDigest, digest_manifest_content,
    hash_directory, sha256_bytes, sha256_file, verify_digest_manifest, write_digest_manifest,
};
pub use crate::layout::SubmissionPaths;
pub use crate::staging::{StagingArea, with_staging};
