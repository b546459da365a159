// ScanScope - app/loader.rs
//
// Scan file loading: the app-layer I/O half of opening a scan.
// Reads the document whole (it is bounded and parsed atomically), maps
// I/O failures to UnreadableFileError, then hands the text to the core
// parser.

use crate::core::model::ScanDocument;
use crate::core::nmap;
use crate::util::constants::MAX_DOCUMENT_BYTES;
use crate::util::error::{Result, UnreadableFileError};
use std::io;
use std::path::Path;

/// Read and parse the scan file at `path`.
///
/// Fails with `UnreadableFileError` when the file is missing, oversized,
/// or unreadable, and with `MalformedInputError` when the content is not a
/// valid scan document. The caller decides whether the failure is fatal
/// (startup path) or a status-bar message (File -> Open Scan at runtime).
pub fn load_scan(path: &Path) -> Result<ScanDocument> {
    let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e))?;
    if metadata.len() > MAX_DOCUMENT_BYTES {
        return Err(UnreadableFileError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_DOCUMENT_BYTES,
        }
        .into());
    }

    let xml = std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))?;

    tracing::debug!(
        file = %path.display(),
        bytes = xml.len(),
        "Scan file read"
    );

    let document = nmap::parse_document(&xml)?;

    tracing::info!(
        file = %path.display(),
        hosts = document.host_count,
        records = document.records.len(),
        "Scan loaded"
    );

    Ok(document)
}

fn map_io_error(path: &Path, source: io::Error) -> crate::util::error::ScanScopeError {
    let err = if source.kind() == io::ErrorKind::NotFound {
        UnreadableFileError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        UnreadableFileError::Io {
            path: path.to_path_buf(),
            source,
        }
    };
    err.into()
}
