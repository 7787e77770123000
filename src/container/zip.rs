use crate::container::ContainerProbe;
use crate::formats::archive::ZIP_LOCAL_HEADER;
use crate::formats::{contains, matches_at};
use crate::types::{Format, MAX_HEADER_SIZE};

/// Fixed part of a ZIP local file header; the entry name follows it.
const LOCAL_HEADER_LEN: usize = 30;
const NAME_LEN_OFFSET: usize = 26;

const EPUB_MIMETYPE: &[u8] = b"application/epub+zip";
const MIMETYPE_ENTRY: &[u8] = b"mimetype";
const META_INF_DIR: &[u8] = b"META-INF/";
const CONTENT_TYPES_ENTRY: &[u8] = b"[Content_Types].xml";
const OFFICE_PREFIXES: [&[u8]; 2] = [b"_rels/", b"docProps/"];

/// Package directories in lookup order.
const OFFICE_DIRECTORIES: [(&[u8], Format); 3] = [
    (b"ppt/", Format::Pptx),
    (b"xl/", Format::Xlsx),
    (b"word/", Format::Docx),
];

/// Tells EPUB and Office Open XML packages apart from plain ZIP archives.
///
/// Lookup order, first hit wins:
///
/// 1. `application/epub+zip` anywhere in the header, or both `mimetype` and
///    `META-INF/`: EPUB.
/// 2. First entry named `mimetype`: EPUB.
/// 3. `ppt/`, `xl/`, `word/` anywhere in the header: PPTX, XLSX, DOCX.
/// 4. First entry named `[Content_Types].xml` or under `_rels/` or
///    `docProps/`: DOCX.
///
/// The whole-header scans run before the first-entry checks because they do
/// not depend on the archive starting with a well-formed local file header.
/// Anything else is left as a generic ZIP.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipProbe;

impl ContainerProbe for ZipProbe {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn refine(&self, header: &[u8]) -> Format {
        if header.len() < LOCAL_HEADER_LEN {
            return Format::Unknown;
        }
        let window = &header[..header.len().min(MAX_HEADER_SIZE)];

        if contains(window, EPUB_MIMETYPE)
            || (contains(window, MIMETYPE_ENTRY) && contains(window, META_INF_DIR))
        {
            return Format::Epub;
        }

        let first_entry = first_entry_name(window);
        if first_entry == Some(MIMETYPE_ENTRY) {
            return Format::Epub;
        }

        for (directory, format) in OFFICE_DIRECTORIES {
            if contains(window, directory) {
                return format;
            }
        }

        if let Some(name) = first_entry {
            if name == CONTENT_TYPES_ENTRY || OFFICE_PREFIXES.iter().any(|p| name.starts_with(p)) {
                return Format::Docx;
            }
        }

        Format::Unknown
    }
}

/// Name of the first entry, decoded from the local file header at offset 0.
///
/// Returns `None` unless the buffer starts with a local file header whose
/// name lies entirely inside the buffer.
pub fn first_entry_name(data: &[u8]) -> Option<&[u8]> {
    if !matches_at(data, 0, &ZIP_LOCAL_HEADER) {
        return None;
    }
    let len_bytes = data.get(NAME_LEN_OFFSET..NAME_LEN_OFFSET + 2)?;
    let name_len = u16::from_le_bytes([len_bytes[0], len_bytes[1]]) as usize;
    data.get(LOCAL_HEADER_LEN..LOCAL_HEADER_LEN + name_len)
}
