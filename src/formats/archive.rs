use crate::formats::{matches_any, matches_at};
use crate::types::Format;

/// Local file header, the usual first record of a ZIP file.
pub const ZIP_LOCAL_HEADER: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
/// End of central directory record, which is all an empty archive holds.
pub const ZIP_EMPTY: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];
/// Data descriptor marker that opens a spanned archive.
pub const ZIP_SPANNED: [u8; 4] = [0x50, 0x4B, 0x07, 0x08];
pub const RAR_MAGIC: [u8; 6] = [0x52, 0x61, 0x72, 0x21, 0x1A, 0x07];
pub const SEVEN_ZIP_MAGIC: [u8; 6] = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
pub const TAR_USTAR: [u8; 5] = *b"ustar";
/// The POSIX `magic` field of a tar header block.
pub const TAR_USTAR_OFFSET: usize = 257;

/// Matches ZIP, RAR, 7z, gzip and ustar tar.
///
/// A ZIP result is generic; callers that want the format carried inside the
/// archive hand the buffer to the ZIP container probe afterwards.
pub fn detect_archive(data: &[u8]) -> Format {
    if data.is_empty() {
        return Format::Unknown;
    }

    if matches_any(data, &[&ZIP_LOCAL_HEADER, &ZIP_EMPTY, &ZIP_SPANNED]) {
        return Format::Zip;
    }

    if matches_at(data, 0, &RAR_MAGIC) {
        return Format::Rar;
    }

    if matches_at(data, 0, &SEVEN_ZIP_MAGIC) {
        return Format::SevenZip;
    }

    if matches_at(data, 0, &GZIP_MAGIC) {
        return Format::GZip;
    }

    if matches_at(data, TAR_USTAR_OFFSET, &TAR_USTAR) {
        return Format::Tar;
    }

    Format::Unknown
}
