//! Common MIME type constants for building accept lists.

pub const PNG: &str = "image/png";
pub const GIF: &str = "image/gif";
pub const JPEG: &str = "image/jpeg";
pub const SVG: &str = "image/svg+xml";
pub const WEBP: &str = "image/webp";
pub const AVIF: &str = "image/avif";
pub const MP4: &str = "video/mp4";
pub const ZIP: &str = "application/zip";
pub const CSV: &str = "text/csv";
pub const PDF: &str = "application/pdf";
pub const DOC: &str = "application/msword";
pub const DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const XLS: &str = "application/vnd.ms-excel";
pub const XLSX: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Image formats browsers commonly preview
pub const IMAGES: &[&str] = &[PNG, GIF, JPEG, SVG, WEBP, AVIF];
