use crate::container::{ContainerProbe, Ole2Probe};
use crate::formats::matches_at;
use crate::types::Format;

pub const PDF_MAGIC: [u8; 4] = *b"%PDF";
/// Compound File Binary header shared by DOC, XLS and PPT.
pub const OLE2_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Matches PDF and OLE2 compound documents.
///
/// OLE2 buffers are classified by [`Ole2Probe`]; use
/// [`detect_document_with`] to supply a different probe.
pub fn detect_document(data: &[u8]) -> Format {
    detect_document_with(data, &Ole2Probe)
}

/// Same as [`detect_document`] with a caller-supplied OLE2 probe. A probe
/// answering `Unknown` leaves the buffer classified as DOC.
pub fn detect_document_with(data: &[u8], ole2: &dyn ContainerProbe) -> Format {
    if data.is_empty() {
        return Format::Unknown;
    }

    if matches_at(data, 0, &PDF_MAGIC) {
        return Format::Pdf;
    }

    if matches_at(data, 0, &OLE2_SIGNATURE) {
        return match ole2.refine(data) {
            Format::Unknown => Format::Doc,
            refined => refined,
        };
    }

    Format::Unknown
}
