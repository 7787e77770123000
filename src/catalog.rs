//! Static format catalog.
//!
//! One `FormatInfo` per `Format`, laid out in discriminant order so a lookup
//! is a bounds-checked index. Nothing here is mutable after compilation.

use crate::types::{Category, Format, FormatInfo};

const fn info(
    format: Format,
    name: &'static str,
    mime_type: &'static str,
    extension: &'static str,
    category: Category,
) -> FormatInfo {
    FormatInfo {
        format,
        name,
        mime_type,
        extension,
        category,
    }
}

static FORMAT_TABLE: [FormatInfo; Format::COUNT] = [
    info(Format::Unknown, "Unknown", "application/octet-stream", "", Category::Unknown),
    // Images
    info(Format::Png, "PNG", "image/png", ".png", Category::Image),
    info(Format::Jpeg, "JPEG", "image/jpeg", ".jpg", Category::Image),
    info(Format::Bmp, "BMP", "image/bmp", ".bmp", Category::Image),
    info(Format::Gif, "GIF", "image/gif", ".gif", Category::Image),
    info(Format::WebP, "WebP", "image/webp", ".webp", Category::Image),
    info(Format::Tiff, "TIFF", "image/tiff", ".tiff", Category::Image),
    // Documents
    info(Format::Pdf, "PDF", "application/pdf", ".pdf", Category::Document),
    info(Format::Doc, "DOC", "application/msword", ".doc", Category::Document),
    info(
        Format::Docx,
        "DOCX",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docx",
        Category::Document,
    ),
    info(Format::Xls, "XLS", "application/vnd.ms-excel", ".xls", Category::Document),
    info(
        Format::Xlsx,
        "XLSX",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xlsx",
        Category::Document,
    ),
    info(Format::Ppt, "PPT", "application/vnd.ms-powerpoint", ".ppt", Category::Document),
    info(
        Format::Pptx,
        "PPTX",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ".pptx",
        Category::Document,
    ),
    // Ebooks
    info(Format::Epub, "EPUB", "application/epub+zip", ".epub", Category::Ebook),
    info(Format::Mobi, "MOBI", "application/x-mobipocket-ebook", ".mobi", Category::Ebook),
    info(Format::Azw3, "AZW3", "application/vnd.amazon.ebook", ".azw3", Category::Ebook),
    info(Format::Fb2, "FB2", "application/x-fictionbook+xml", ".fb2", Category::Ebook),
    info(Format::Djvu, "DJVU", "image/vnd.djvu", ".djvu", Category::Ebook),
    // Archives
    info(Format::Zip, "ZIP", "application/zip", ".zip", Category::Archive),
    info(Format::Rar, "RAR", "application/vnd.rar", ".rar", Category::Archive),
    info(Format::SevenZip, "7Z", "application/x-7z-compressed", ".7z", Category::Archive),
    info(Format::GZip, "GZIP", "application/gzip", ".gz", Category::Archive),
    info(Format::Tar, "TAR", "application/x-tar", ".tar", Category::Archive),
    // Media
    info(Format::Mp3, "MP3", "audio/mpeg", ".mp3", Category::Media),
    info(Format::Mp4, "MP4", "video/mp4", ".mp4", Category::Media),
    info(Format::Wav, "WAV", "audio/wav", ".wav", Category::Media),
    info(Format::Avi, "AVI", "video/x-msvideo", ".avi", Category::Media),
    info(Format::Mkv, "MKV", "video/x-matroska", ".mkv", Category::Media),
    // Executables
    info(
        Format::Exe,
        "EXE",
        "application/vnd.microsoft.portable-executable",
        ".exe",
        Category::Executable,
    ),
    info(Format::Elf, "ELF", "application/x-executable", "", Category::Executable),
    info(Format::MachO, "Mach-O", "application/x-mach-binary", "", Category::Executable),
];

static CATEGORY_NAMES: [&str; Category::COUNT] = [
    "unknown",
    "image",
    "document",
    "ebook",
    "archive",
    "media",
    "executable",
];

/// Returns the catalog record for `format`.
///
/// Always succeeds; anything that does not index the table resolves to the
/// `Unknown` record.
pub fn get_info(format: Format) -> &'static FormatInfo {
    FORMAT_TABLE
        .get(format as usize)
        .unwrap_or(&FORMAT_TABLE[0])
}

/// Lowercase name of a category, `"unknown"` as the fallback.
pub fn get_category_name(category: Category) -> &'static str {
    CATEGORY_NAMES
        .get(category as usize)
        .copied()
        .unwrap_or(CATEGORY_NAMES[0])
}

/// Iterates over every catalog record, `Unknown` first.
pub fn all() -> impl Iterator<Item = &'static FormatInfo> {
    FORMAT_TABLE.iter()
}

/// Records belonging to one category.
pub fn in_category(category: Category) -> impl Iterator<Item = &'static FormatInfo> {
    FORMAT_TABLE
        .iter()
        .filter(move |info| info.category == category)
}

/// Looks a format up by display name or extension, ignoring case and a
/// leading dot. `"jpg"`, `"JPEG"`, `".tiff"` and `"mach-o"` all resolve.
pub fn find_by_name(name: &str) -> Option<Format> {
    let needle = name.trim().trim_start_matches('.');
    if needle.is_empty() {
        return None;
    }

    let alias = match needle.to_ascii_lowercase().as_str() {
        "jpe" | "jfif" => Some(Format::Jpeg),
        "tif" => Some(Format::Tiff),
        "gz" | "gzip" => Some(Format::GZip),
        "sevenzip" => Some(Format::SevenZip),
        "macho" | "dylib" => Some(Format::MachO),
        "mpeg4" | "m4v" => Some(Format::Mp4),
        "webm" => Some(Format::Mkv),
        _ => None,
    };
    if alias.is_some() {
        return alias;
    }

    FORMAT_TABLE
        .iter()
        .skip(1)
        .find(|info| {
            info.name.eq_ignore_ascii_case(needle)
                || info
                    .extension
                    .strip_prefix('.')
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(needle))
        })
        .map(|info| info.format)
}

/// Parses a category name as printed by [`get_category_name`].
pub fn find_category(name: &str) -> Option<Category> {
    let needle = name.trim();
    Category::ALL
        .iter()
        .copied()
        .find(|category| get_category_name(*category).eq_ignore_ascii_case(needle))
}
