use crate::container::ContainerProbe;
use crate::formats::document::OLE2_SIGNATURE;
use crate::formats::{contains_utf16le, matches_at};
use crate::types::Format;

/// Stream names in lookup order; the first one present decides.
const STREAM_MARKERS: [(&str, Format); 5] = [
    ("PowerPoint Document", Format::Ppt),
    ("PP40", Format::Ppt),
    ("Workbook", Format::Xls),
    ("Book", Format::Xls),
    ("WordDocument", Format::Doc),
];

/// Tells DOC, XLS and PPT apart inside an OLE2 compound file.
///
/// This is an approximation. It searches the header bytes for UTF-16LE
/// stream names instead of walking the FAT and directory sectors, so a
/// directory that lies beyond the header is missed and unrelated bytes that
/// happen to spell a stream name are taken at face value. Compound files
/// without a recognizable stream name default to DOC.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ole2Probe;

impl ContainerProbe for Ole2Probe {
    fn name(&self) -> &'static str {
        "ole2"
    }

    fn refine(&self, header: &[u8]) -> Format {
        if !matches_at(header, 0, &OLE2_SIGNATURE) {
            return Format::Unknown;
        }

        STREAM_MARKERS
            .iter()
            .find(|(name, _)| contains_utf16le(header, name))
            .map(|(_, format)| *format)
            .unwrap_or(Format::Doc)
    }
}
