//! Per-category signature matchers.
//!
//! Every matcher takes the leading bytes of a candidate file and returns the
//! first format whose signature matches, or `Format::Unknown`. They perform no
//! I/O, keep no state and never index past the end of the buffer.

pub mod archive;
pub mod document;
pub mod ebook;
pub mod executable;
pub mod image;
pub mod media;

pub use archive::detect_archive;
pub use document::detect_document;
pub use ebook::detect_ebook;
pub use executable::detect_executable;
pub use image::detect_image;
pub use media::detect_media;

use memchr::memmem;

/// Magic shared by every RIFF container (WebP, WAV, AVI).
pub(crate) const RIFF_MAGIC: [u8; 4] = *b"RIFF";

/// True when `data` holds `signature` at `offset`. Short buffers never match.
#[inline]
pub fn matches_at(data: &[u8], offset: usize, signature: &[u8]) -> bool {
    offset
        .checked_add(signature.len())
        .and_then(|end| data.get(offset..end))
        .is_some_and(|window| window == signature)
}

/// True when `data` starts with any of `signatures`.
#[inline]
pub fn matches_any(data: &[u8], signatures: &[&[u8]]) -> bool {
    signatures.iter().any(|sig| matches_at(data, 0, sig))
}

/// Substring search over raw bytes.
#[inline]
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    memmem::find(haystack, needle).is_some()
}

/// Substring search for an ASCII string stored as UTF-16LE, the encoding
/// OLE2 directory entries use for stream names.
pub fn contains_utf16le(haystack: &[u8], needle: &str) -> bool {
    let encoded: Vec<u8> = needle.encode_utf16().flat_map(u16::to_le_bytes).collect();
    !encoded.is_empty() && contains(haystack, &encoded)
}

/// RIFF form type at offset 8, if the buffer is a RIFF container.
#[inline]
pub(crate) fn riff_form_type(data: &[u8]) -> Option<&[u8]> {
    if data.len() < 12 || !matches_at(data, 0, &RIFF_MAGIC) {
        return None;
    }
    data.get(8..12)
}
