//! Core value types shared by the matchers, the catalog and the I/O layer.

use std::fmt;

use serde::Serialize;

use crate::error::DetectError;

/// Upper bound on the number of leading bytes any detection path looks at.
pub const MAX_HEADER_SIZE: usize = 4096;
/// Buffers shorter than this are never classified.
pub const MIN_HEADER_SIZE: usize = 2;
/// Enough for every fixed-offset signature except TAR and container probing.
pub const DEFAULT_HEADER_SIZE: usize = 64;

/// Formats the detector can recognize.
///
/// The discriminants are stable and index the catalog table, so `Unknown`
/// must stay at zero and new variants must be appended to the table in the
/// same order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Format {
    /// Unknown or unsupported format
    #[default]
    Unknown = 0,

    /// PNG image format
    Png,
    /// JPEG image format
    Jpeg,
    /// BMP image format
    Bmp,
    /// GIF image format, 87a or 89a
    Gif,
    /// WebP image in a RIFF container
    WebP,
    /// TIFF image format, either byte order
    Tiff,

    /// PDF document
    Pdf,
    /// Word 97-2003 document (OLE2)
    Doc,
    /// Word document (Office Open XML)
    Docx,
    /// Excel 97-2003 workbook (OLE2)
    Xls,
    /// Excel workbook (Office Open XML)
    Xlsx,
    /// PowerPoint 97-2003 presentation (OLE2)
    Ppt,
    /// PowerPoint presentation (Office Open XML)
    Pptx,

    /// EPUB e-book (ZIP based)
    Epub,
    /// Mobipocket e-book
    Mobi,
    /// Kindle KF8 e-book
    Azw3,
    /// FictionBook XML e-book
    Fb2,
    /// DjVu document
    Djvu,

    /// ZIP archive
    Zip,
    /// RAR archive, v4 or v5
    Rar,
    /// 7-Zip archive
    SevenZip,
    /// gzip stream
    GZip,
    /// POSIX ustar archive
    Tar,

    /// MPEG audio layer III
    Mp3,
    /// ISO base media file (MP4 and relatives)
    Mp4,
    /// WAVE audio in a RIFF container
    Wav,
    /// AVI video in a RIFF container
    Avi,
    /// Matroska/EBML container
    Mkv,

    /// Windows PE executable
    Exe,
    /// ELF binary
    Elf,
    /// Mach-O binary, thin or universal
    MachO,
}

impl Format {
    /// Number of variants, `Unknown` included.
    pub const COUNT: usize = 32;

    /// Every variant in discriminant order.
    pub const ALL: [Format; Format::COUNT] = [
        Format::Unknown,
        Format::Png,
        Format::Jpeg,
        Format::Bmp,
        Format::Gif,
        Format::WebP,
        Format::Tiff,
        Format::Pdf,
        Format::Doc,
        Format::Docx,
        Format::Xls,
        Format::Xlsx,
        Format::Ppt,
        Format::Pptx,
        Format::Epub,
        Format::Mobi,
        Format::Azw3,
        Format::Fb2,
        Format::Djvu,
        Format::Zip,
        Format::Rar,
        Format::SevenZip,
        Format::GZip,
        Format::Tar,
        Format::Mp3,
        Format::Mp4,
        Format::Wav,
        Format::Avi,
        Format::Mkv,
        Format::Exe,
        Format::Elf,
        Format::MachO,
    ];

    /// Converts a raw discriminant back into a format.
    ///
    /// Out-of-range values map to `Unknown` instead of failing.
    pub fn from_repr(value: u8) -> Format {
        Format::ALL
            .get(value as usize)
            .copied()
            .unwrap_or(Format::Unknown)
    }

    /// Catalog record for this format.
    pub fn info(self) -> &'static FormatInfo {
        crate::catalog::get_info(self)
    }

    /// Short display name, e.g. `"PNG"` or `"Mach-O"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the MIME type, `application/octet-stream` for `Unknown`
    pub fn mime_type(self) -> &'static str {
        self.info().mime_type
    }

    /// Returns the typical file extension including the dot, or `""`
    pub fn extension(self) -> &'static str {
        self.info().extension
    }

    /// Returns the category this format is reported under
    pub fn category(self) -> Category {
        self.info().category
    }

    /// True for every format except `Unknown`
    pub fn is_known(self) -> bool {
        self != Format::Unknown
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Coarse grouping used for reporting. Matching never depends on it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Unknown = 0,
    Image,
    Document,
    Ebook,
    Archive,
    Media,
    Executable,
}

impl Category {
    pub const COUNT: usize = 7;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Unknown,
        Category::Image,
        Category::Document,
        Category::Ebook,
        Category::Archive,
        Category::Media,
        Category::Executable,
    ];

    /// Out-of-range values map to `Unknown`.
    pub fn from_repr(value: u8) -> Category {
        Category::ALL
            .get(value as usize)
            .copied()
            .unwrap_or(Category::Unknown)
    }

    pub fn name(self) -> &'static str {
        crate::catalog::get_category_name(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Descriptive metadata for one format. One record per `Format`, held in a
/// static table for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    pub format: Format,
    /// Display name such as `"PNG"`.
    pub name: &'static str,
    /// MIME type such as `"image/png"`.
    pub mime_type: &'static str,
    /// Conventional extension including the dot, empty when there is none.
    pub extension: &'static str,
    pub category: Category,
}

/// Outcome of a detection that also reports read failures.
///
/// `error` is only set when reading the input failed. A buffer that matches
/// nothing is not an error; it yields `Format::Unknown` with no error.
#[derive(Debug, Default)]
pub struct DetectResult {
    format: Format,
    error: Option<DetectError>,
}

impl DetectResult {
    pub fn detected(format: Format) -> Self {
        Self {
            format,
            error: None,
        }
    }

    pub fn failed(error: DetectError) -> Self {
        Self {
            format: Format::Unknown,
            error: Some(error),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn error(&self) -> Option<&DetectError> {
        self.error.as_ref()
    }

    /// True when the input could be read, whatever the match outcome.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// True when a format other than `Unknown` was recognized.
    pub fn is_known(&self) -> bool {
        self.format.is_known()
    }

    /// Converts into the erroring style: the read failure becomes `Err`.
    pub fn into_result(self) -> Result<Format, DetectError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.format),
        }
    }
}

impl From<Result<Format, DetectError>> for DetectResult {
    fn from(result: Result<Format, DetectError>) -> Self {
        match result {
            Ok(format) => DetectResult::detected(format),
            Err(err) => DetectResult::failed(err),
        }
    }
}
