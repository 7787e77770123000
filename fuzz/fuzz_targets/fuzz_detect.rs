#![no_main]

use libfuzzer_sys::fuzz_target;

use fileformat::formats::{
    detect_archive, detect_document, detect_ebook, detect_executable, detect_image, detect_media,
};
use fileformat::{Format, detect, detect_info};

fuzz_target!(|data: &[u8]| {
    let format = detect(data);
    assert_eq!(detect_info(data).format, format);
    assert_eq!(Format::from_repr(format as u8), format);

    for matcher in [
        detect_image,
        detect_archive,
        detect_document,
        detect_ebook,
        detect_media,
        detect_executable,
    ] {
        let _ = matcher(data);
    }
});
