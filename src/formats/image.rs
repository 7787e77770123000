use crate::formats::{matches_any, matches_at, riff_form_type};
use crate::types::Format;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];
pub const BMP_MAGIC: [u8; 2] = *b"BM";
pub const GIF87A: [u8; 6] = *b"GIF87a";
pub const GIF89A: [u8; 6] = *b"GIF89a";
pub const WEBP_FORM: [u8; 4] = *b"WEBP";
pub const TIFF_LE: [u8; 4] = [0x49, 0x49, 0x2A, 0x00];
pub const TIFF_BE: [u8; 4] = [0x4D, 0x4D, 0x00, 0x2A];

/// Matches PNG, JPEG, BMP, GIF, WebP and TIFF.
///
/// WebP is claimed here, before the media matcher sees the RIFF header.
pub fn detect_image(data: &[u8]) -> Format {
    if data.is_empty() {
        return Format::Unknown;
    }

    if matches_at(data, 0, &PNG_SIGNATURE) {
        return Format::Png;
    }

    if matches_at(data, 0, &JPEG_SOI) {
        return Format::Jpeg;
    }

    if matches_at(data, 0, &BMP_MAGIC) {
        return Format::Bmp;
    }

    if matches_any(data, &[&GIF87A, &GIF89A]) {
        return Format::Gif;
    }

    if riff_form_type(data) == Some(WEBP_FORM.as_slice()) {
        return Format::WebP;
    }

    if matches_any(data, &[&TIFF_LE, &TIFF_BE]) {
        return Format::Tiff;
    }

    Format::Unknown
}
