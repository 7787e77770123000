use crate::formats::{matches_at, riff_form_type};
use crate::types::Format;

pub const ID3_MAGIC: [u8; 3] = *b"ID3";
/// Second byte of an MPEG audio frame sync for the layer III variants seen
/// at the start of untagged MP3 files.
pub const MP3_SYNC_SECOND: [u8; 4] = [0xFB, 0xFA, 0xF3, 0xF2];
pub const WAVE_FORM: [u8; 4] = *b"WAVE";
pub const AVI_FORM: [u8; 4] = *b"AVI ";
pub const FTYP_BOX: [u8; 4] = *b"ftyp";
pub const FTYP_OFFSET: usize = 4;
pub const EBML_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];

/// Matches MP3, WAV, AVI, MP4 and Matroska.
pub fn detect_media(data: &[u8]) -> Format {
    if data.is_empty() {
        return Format::Unknown;
    }

    if matches_at(data, 0, &ID3_MAGIC) || is_mp3_frame_sync(data) {
        return Format::Mp3;
    }

    match riff_form_type(data) {
        Some(form) if form == WAVE_FORM.as_slice() => return Format::Wav,
        Some(form) if form == AVI_FORM.as_slice() => return Format::Avi,
        _ => {}
    }

    if matches_at(data, FTYP_OFFSET, &FTYP_BOX) {
        return Format::Mp4;
    }

    if matches_at(data, 0, &EBML_MAGIC) {
        return Format::Mkv;
    }

    Format::Unknown
}

fn is_mp3_frame_sync(data: &[u8]) -> bool {
    match data {
        [0xFF, second, ..] => MP3_SYNC_SECOND.contains(second),
        _ => false,
    }
}
