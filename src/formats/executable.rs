use crate::formats::matches_at;
use crate::types::Format;

/// DOS stub header that opens every PE image.
pub const MZ_MAGIC: [u8; 2] = *b"MZ";
pub const ELF_MAGIC: [u8; 4] = [0x7F, 0x45, 0x4C, 0x46];
pub const MACHO_MAGICS: [[u8; 4]; 5] = [
    [0xFE, 0xED, 0xFA, 0xCE], // 32-bit, big-endian
    [0xFE, 0xED, 0xFA, 0xCF], // 64-bit, big-endian
    [0xCE, 0xFA, 0xED, 0xFE], // 32-bit, little-endian
    [0xCF, 0xFA, 0xED, 0xFE], // 64-bit, little-endian
    [0xCA, 0xFE, 0xBA, 0xBE], // universal
];

/// Matches PE (EXE), ELF and Mach-O binaries.
pub fn detect_executable(data: &[u8]) -> Format {
    if data.is_empty() {
        return Format::Unknown;
    }

    if matches_at(data, 0, &MZ_MAGIC) {
        return Format::Exe;
    }

    if matches_at(data, 0, &ELF_MAGIC) {
        return Format::Elf;
    }

    if MACHO_MAGICS.iter().any(|magic| matches_at(data, 0, magic)) {
        return Format::MachO;
    }

    Format::Unknown
}
