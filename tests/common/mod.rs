#![allow(dead_code)]

pub const OLE2_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// A ZIP buffer whose first local file header names `name` and stores
/// `content`, followed by `trailer` bytes.
pub fn zip_with_entry(name: &str, content: &[u8], trailer: &[u8]) -> Vec<u8> {
    let mut data = vec![0x50, 0x4B, 0x03, 0x04];
    data.extend_from_slice(&[0x14, 0x00]); // version needed
    data.extend_from_slice(&[0x00, 0x00]); // flags
    data.extend_from_slice(&[0x00, 0x00]); // stored
    data.extend_from_slice(&[0x00; 4]); // mod time, mod date
    data.extend_from_slice(&[0x00; 4]); // crc-32
    data.extend_from_slice(&(content.len() as u32).to_le_bytes());
    data.extend_from_slice(&(content.len() as u32).to_le_bytes());
    data.extend_from_slice(&(name.len() as u16).to_le_bytes());
    data.extend_from_slice(&[0x00, 0x00]); // extra field length
    assert_eq!(data.len(), 30);
    data.extend_from_slice(name.as_bytes());
    data.extend_from_slice(content);
    data.extend_from_slice(trailer);
    data
}

pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// An OLE2 header padded to one sector, followed by directory entry names.
pub fn ole2_with_streams(names: &[&str]) -> Vec<u8> {
    let mut data = OLE2_SIGNATURE.to_vec();
    data.resize(512, 0);
    for name in names {
        let mut entry = utf16le(name);
        entry.resize(128, 0);
        data.extend_from_slice(&entry);
    }
    data
}

pub fn riff(form: &[u8; 4]) -> Vec<u8> {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&1024u32.to_le_bytes());
    data.extend_from_slice(form);
    data.extend_from_slice(&[0x00; 16]);
    data
}

pub fn tar_block(name: &str) -> Vec<u8> {
    let mut data = vec![0u8; 512];
    data[..name.len()].copy_from_slice(name.as_bytes());
    data[257..263].copy_from_slice(b"ustar\0");
    data
}

pub fn mobi(extra: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; 60];
    data.extend_from_slice(b"BOOKMOBI");
    data.resize(128, 0);
    data.extend_from_slice(extra);
    data
}
