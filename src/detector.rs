//! Dispatch engine.
//!
//! Runs the per-category matchers in a fixed priority order over one header
//! buffer and stops at the first one that recognizes it:
//!
//! 1. image
//! 2. archive, with ZIP handed to the ZIP container probe
//! 3. document, with OLE2 handed to the OLE2 container probe
//! 4. ebook
//! 5. media
//! 6. executable
//!
//! The order is observable. A RIFF/WEBP header is an image before the media
//! matcher could call it anything else, and ZIP-based documents and EPUBs
//! are only reachable through the archive stage.

use std::sync::LazyLock;

use crate::container::{ContainerProbe, Ole2Probe, ZipProbe};
use crate::formats::document::detect_document_with;
use crate::formats::{detect_archive, detect_ebook, detect_executable, detect_image, detect_media};
use crate::types::{Format, FormatInfo, MAX_HEADER_SIZE, MIN_HEADER_SIZE};

type Matcher = fn(&[u8]) -> Format;

/// Stages that need no container probe, after the archive and document ones.
const TRAILING_STAGES: [(&str, Matcher); 3] = [
    ("ebook", detect_ebook),
    ("media", detect_media),
    ("executable", detect_executable),
];

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::default);

/// Detection engine with replaceable container probes.
///
/// The default instance uses [`ZipProbe`] and [`Ole2Probe`]. A `Detector`
/// holds no mutable state and can be shared between threads.
pub struct Detector {
    zip: Box<dyn ContainerProbe>,
    ole2: Box<dyn ContainerProbe>,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            zip: Box::new(ZipProbe),
            ole2: Box::new(Ole2Probe),
        }
    }
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("zip", &self.zip.name())
            .field("ole2", &self.ole2.name())
            .finish()
    }
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the probe that refines generic ZIP matches
    pub fn with_zip_probe(mut self, probe: impl ContainerProbe + 'static) -> Self {
        self.zip = Box::new(probe);
        self
    }

    /// Replaces the probe that classifies OLE2 compound files
    pub fn with_ole2_probe(mut self, probe: impl ContainerProbe + 'static) -> Self {
        self.ole2 = Box::new(probe);
        self
    }

    /// Identifies the format of a header buffer.
    ///
    /// Never fails: buffers shorter than `MIN_HEADER_SIZE` and buffers no
    /// matcher recognizes both yield `Format::Unknown`. Only the first
    /// `MAX_HEADER_SIZE` bytes are looked at.
    pub fn detect(&self, data: &[u8]) -> Format {
        if data.len() < MIN_HEADER_SIZE {
            return Format::Unknown;
        }
        let data = &data[..data.len().min(MAX_HEADER_SIZE)];

        let format = detect_image(data);
        if format.is_known() {
            tracing::trace!(stage = "image", %format, "matched");
            return format;
        }

        match detect_archive(data) {
            Format::Unknown => {}
            Format::Zip => return self.refine_zip(data),
            format => {
                tracing::trace!(stage = "archive", %format, "matched");
                return format;
            }
        }

        let format = detect_document_with(data, self.ole2.as_ref());
        if format.is_known() {
            tracing::trace!(
                stage = "document",
                probe = self.ole2.name(),
                %format,
                "matched"
            );
            return format;
        }

        for (stage, matcher) in TRAILING_STAGES {
            let format = matcher(data);
            if format.is_known() {
                tracing::trace!(stage, %format, "matched");
                return format;
            }
        }

        Format::Unknown
    }

    /// Catalog record of the detected format.
    pub fn detect_info(&self, data: &[u8]) -> &'static FormatInfo {
        self.detect(data).info()
    }

    fn refine_zip(&self, data: &[u8]) -> Format {
        match self.zip.refine(data) {
            Format::Unknown => {
                tracing::trace!(stage = "archive", format = %Format::Zip, "matched");
                Format::Zip
            }
            refined => {
                tracing::trace!(
                    stage = "archive",
                    probe = self.zip.name(),
                    format = %refined,
                    "refined"
                );
                refined
            }
        }
    }
}

/// Identifies the format of a header buffer with the default probes.
///
/// ```
/// use fileformat::{detect, Format};
///
/// assert_eq!(detect(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]), Format::Png);
/// assert_eq!(detect(&[0x1F, 0x8B, 0x08]), Format::GZip);
/// assert_eq!(detect(&[]), Format::Unknown);
/// ```
pub fn detect(data: &[u8]) -> Format {
    DEFAULT_DETECTOR.detect(data)
}

/// Catalog record of the format [`detect`] returns.
pub fn detect_info(data: &[u8]) -> &'static FormatInfo {
    DEFAULT_DETECTOR.detect_info(data)
}
