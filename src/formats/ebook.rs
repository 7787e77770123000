use crate::formats::{contains, matches_at};
use crate::types::Format;

/// PalmDB type and creator fields of a Mobipocket book.
pub const MOBI_MAGIC: [u8; 8] = *b"BOOKMOBI";
pub const MOBI_MAGIC_OFFSET: usize = 60;
/// Kindle Format 8 marker that distinguishes AZW3 from classic MOBI.
pub const KF8_MARKER: &[u8] = b"KF8";
pub const DJVU_MAGIC: [u8; 8] = *b"AT&TFORM";
pub const XML_DECLARATION: [u8; 5] = *b"<?xml";
pub const FB2_ROOT: &[u8] = b"FictionBook";
/// How far into an XML file the FictionBook root element is looked for.
pub const FB2_SCAN_LIMIT: usize = 1024;

/// Matches MOBI/AZW3, DjVu and FictionBook.
///
/// EPUB is a ZIP container and is resolved by the ZIP probe instead.
pub fn detect_ebook(data: &[u8]) -> Format {
    if data.is_empty() {
        return Format::Unknown;
    }

    if matches_at(data, MOBI_MAGIC_OFFSET, &MOBI_MAGIC) {
        // Approximate: a real check walks the EXTH records.
        if contains(data, KF8_MARKER) {
            return Format::Azw3;
        }
        return Format::Mobi;
    }

    if matches_at(data, 0, &DJVU_MAGIC) {
        return Format::Djvu;
    }

    if matches_at(data, 0, &XML_DECLARATION) {
        let prologue = &data[..data.len().min(FB2_SCAN_LIMIT)];
        if contains(prologue, FB2_ROOT) {
            return Format::Fb2;
        }
    }

    Format::Unknown
}
