//! Static File Server — the bundled front-end page and the saved-contract download.
//!
//! The download target is never written by this service; it is placed there out of band.

pub mod handlers;

/// Single-page front end served at `/`.
pub const INDEX_HTML: &str = include_str!("index.html");

/// MIME type of the downloadable contract.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Attachment name used when the configured path has no usable file name.
pub const DEFAULT_DOWNLOAD_NAME: &str = "completed_contract.docx";
