//! Supporting-document validation
//!
//! Every claim submission carries exactly one supporting document. The
//! validator checks the file name and size only; persisting the bytes is
//! the caller's job via the [`DocumentStore`](crate::ports::DocumentStore)
//! port once validation passes.

use thiserror::Error;

/// Maximum accepted document size (5 MiB)
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// File extensions accepted for supporting documents
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "xlsx"];

/// Reasons a supporting document is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("No document was uploaded")]
    Empty,

    #[error("Document is {size} bytes, which exceeds the {max} byte limit")]
    TooLarge { size: u64, max: u64 },

    #[error("Document has no file extension")]
    MissingExtension,

    #[error("Invalid file type '.{extension}'. Only PDF, DOCX, and XLSX files are allowed")]
    DisallowedExtension { extension: String },
}

/// An uploaded document awaiting validation and persistence
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Validates supporting documents against the extension allow-list and
/// size limit
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    max_size_bytes: u64,
    allowed_extensions: Vec<String>,
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self {
            max_size_bytes: MAX_DOCUMENT_BYTES,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DocumentValidator {
    /// Creates a validator with a custom size limit and allow-list
    pub fn new(max_size_bytes: u64, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_size_bytes,
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Checks a file name and byte length against the policy
    ///
    /// Returns `Ok(())` when the document is acceptable; the caller then
    /// persists it and records the resulting path on the claim. On any
    /// error nothing has been stored.
    pub fn validate(&self, file_name: &str, len: u64) -> Result<(), DocumentError> {
        if len == 0 {
            return Err(DocumentError::Empty);
        }
        if len > self.max_size_bytes {
            return Err(DocumentError::TooLarge {
                size: len,
                max: self.max_size_bytes,
            });
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(stem, ext)| (stem, ext.to_ascii_lowercase()))
            .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .map(|(_, ext)| ext)
            .ok_or(DocumentError::MissingExtension)?;

        if !self.allowed_extensions.iter().any(|e| *e == extension) {
            return Err(DocumentError::DisallowedExtension { extension });
        }

        Ok(())
    }

    /// Convenience wrapper over [`validate`](Self::validate) for an upload
    pub fn validate_upload(&self, upload: &DocumentUpload) -> Result<(), DocumentError> {
        self.validate(&upload.file_name, upload.bytes.len() as u64)
    }
}
