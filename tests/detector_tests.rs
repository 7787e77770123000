use fileformat::{Category, Detector, Format, MAX_HEADER_SIZE, detect, detect_info};
use proptest::prelude::*;
use rstest::*;

mod common;
use common::*;

#[rstest]
#[case(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00], Format::Png)]
#[case(&[0xFF, 0xD8, 0xFF, 0xE0], Format::Jpeg)]
#[case(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1], Format::Doc)]
#[case(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3", Format::Pdf)]
#[case(&[0x1F, 0x8B, 0x08], Format::GZip)]
#[case(b"Rar!\x1A\x07\x00", Format::Rar)]
#[case(b"ID3\x04\x00\x00", Format::Mp3)]
#[case(b"\x00\x00\x00\x18ftypmp42", Format::Mp4)]
#[case(&[0x1A, 0x45, 0xDF, 0xA3], Format::Mkv)]
#[case(b"AT&TFORM", Format::Djvu)]
#[case(b"MZ\x90\x00\x03\x00", Format::Exe)]
#[case(b"\x7FELF\x02\x01\x01\x00", Format::Elf)]
#[case(&[0xCF, 0xFA, 0xED, 0xFE, 0x07, 0x00], Format::MachO)]
#[case(b"hello, world", Format::Unknown)]
fn test_detect_signatures(#[case] data: &[u8], #[case] expected: Format) {
    assert_eq!(detect(data), expected);
}

#[rstest]
#[case(&[])]
#[case(&[0x89])]
#[case(&[0xFF])]
#[case(b"M")]
fn test_too_short_is_unknown(#[case] data: &[u8]) {
    assert_eq!(detect(data), Format::Unknown);
}

#[test]
fn test_detect_containers() {
    assert_eq!(detect(&zip_with_entry("mimetype", b"application/epub+zip", b"")), Format::Epub);
    assert_eq!(detect(&zip_with_entry("xl/workbook.xml", b"", b"")), Format::Xlsx);
    assert_eq!(detect(&ole2_with_streams(&["WordDocument"])), Format::Doc);
    assert_eq!(detect(&tar_block("backup/")), Format::Tar);
    assert_eq!(detect(&mobi(b"")), Format::Mobi);
    assert_eq!(detect(&riff(b"WAVE")), Format::Wav);
    assert_eq!(detect(&riff(b"AVI ")), Format::Avi);
}

#[test]
fn test_image_outranks_media() {
    // Also carries an ftyp box at offset 4.
    assert_eq!(detect(b"RIFFftypWEBP"), Format::WebP);
    assert_eq!(detect(&riff(b"WEBP")), Format::WebP);
}

#[test]
fn test_archive_outranks_ebook() {
    // A TAR whose first header happens to carry BOOKMOBI at offset 60.
    let mut data = tar_block("x");
    data[60..68].copy_from_slice(b"BOOKMOBI");
    assert_eq!(detect(&data), Format::Tar);
    assert_eq!(detect(&data[..128]), Format::Mobi);

    // ZIP wins over anything later in the order.
    let mut data = zip_with_entry("readme.txt", b"", b"");
    data.resize(128, 0);
    data[60..68].copy_from_slice(b"BOOKMOBI");
    assert_eq!(detect(&data), Format::Zip);
}

#[test]
fn test_every_stage_sees_the_same_window() {
    // Markers past MAX_HEADER_SIZE are ignored by every probe alike.
    let mut ole2 = ole2_with_streams(&[]);
    ole2.resize(5000, 0);
    ole2.extend_from_slice(&utf16le("Workbook"));
    assert_eq!(detect(&ole2), Format::Doc);

    let mut book = mobi(b"");
    book.resize(5000, 0);
    book.extend_from_slice(b"KF8");
    assert_eq!(detect(&book), Format::Mobi);

    let mut zip = zip_with_entry("readme.txt", b"", b"");
    zip.resize(5000, 0);
    zip.extend_from_slice(b"word/");
    assert_eq!(detect(&zip), Format::Zip);

    // The same markers inside the window still count.
    let mut ole2 = ole2_with_streams(&[]);
    ole2.extend_from_slice(&utf16le("Workbook"));
    assert_eq!(detect(&ole2), Format::Xls);
}

#[test]
fn test_truncated_signatures_do_not_match() {
    let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    for len in 0..png.len() {
        assert_ne!(detect(&png[..len]), Format::Png, "prefix of {} bytes", len);
    }

    let elf = b"\x7FELF";
    for len in 0..elf.len() {
        assert_ne!(detect(&elf[..len]), Format::Elf);
    }
}

#[test]
fn test_png_record() {
    let info = detect_info(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    assert_eq!(info.format, Format::Png);
    assert_eq!(info.category, Category::Image);
    assert_eq!(info.mime_type, "image/png");
    assert_eq!(info.extension, ".png");
}

#[test]
fn test_detect_info() {
    let info = detect_info(&[0x1F, 0x8B, 0x08]);
    assert_eq!(info.format, Format::GZip);
    assert_eq!(info.mime_type, "application/gzip");
    assert_eq!(info.category, Category::Archive);

    let info = detect_info(b"plain text");
    assert_eq!(info.format, Format::Unknown);
    assert_eq!(info.mime_type, "application/octet-stream");
}

#[test]
fn test_detector_instance_matches_default() {
    let detector = Detector::new();
    let samples: [&[u8]; 3] = [b"GIF89a", b"PK\x03\x04", b"\x7FELF"];
    for sample in samples {
        assert_eq!(detector.detect(sample), detect(sample));
    }
}

#[test]
fn test_shared_across_threads() {
    let data = zip_with_entry("ppt/slides/slide1.xml", b"", b"");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let data = data.clone();
            std::thread::spawn(move || detect(&data))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Format::Pptx);
    }
}

proptest! {
    #[test]
    fn prop_detect_is_deterministic(
        data in proptest::collection::vec(any::<u8>(), 0..MAX_HEADER_SIZE),
    ) {
        prop_assert_eq!(detect(&data), detect(&data));
    }

    #[test]
    fn prop_detect_is_total(
        data in proptest::collection::vec(any::<u8>(), 0..2 * MAX_HEADER_SIZE),
    ) {
        let format = detect(&data);
        prop_assert!(Format::ALL.contains(&format));
        prop_assert_eq!(detect_info(&data).format, format);
    }

    #[test]
    fn prop_png_prefix_wins(tail in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&tail);
        prop_assert_eq!(detect(&data), Format::Png);
    }
}
