//! Byte sources for the detector: paths, seekable streams and batches.
//!
//! The same read-then-match pipeline is offered in three error styles:
//!
//! * `detect_*` never fails; an unreadable input is `Format::Unknown`.
//! * `detect_*_checked` returns a [`DetectResult`] carrying the read error.
//! * `try_detect_*` returns `Err` on a read error.
//!
//! All three go through [`FileDetector::try_detect_path`] or
//! [`FileDetector::try_detect_reader`], so they agree on every input that
//! can be read.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use rayon::prelude::*;

use crate::config::DetectOptions;
use crate::detector::Detector;
use crate::error::{DetectError, Result};
use crate::types::{DetectResult, Format, MAX_HEADER_SIZE};

static DEFAULT_FILE_DETECTOR: LazyLock<FileDetector> = LazyLock::new(FileDetector::default);

/// Reads at most `max_size` leading bytes of the file at `path`, and never
/// more than `MAX_HEADER_SIZE`.
///
/// An empty file yields an empty buffer, not an error.
pub fn read_header(path: impl AsRef<Path>, max_size: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let max_size = max_size.min(MAX_HEADER_SIZE);
    if path.as_os_str().is_empty() {
        return Err(DetectError::EmptyPath);
    }

    let file = File::open(path).map_err(|e| DetectError::from_io(path, e))?;
    let mut header = Vec::with_capacity(max_size);
    file.take(max_size as u64)
        .read_to_end(&mut header)
        .map_err(|e| DetectError::from_io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = header.len(), "read header");
    Ok(header)
}

/// Reads at most `max_size` bytes (capped at `MAX_HEADER_SIZE`) from the
/// current position of `reader` and seeks back to where it started, also when
/// the read fails.
pub fn read_stream_header<R: Read + Seek>(reader: &mut R, max_size: usize) -> Result<Vec<u8>> {
    let max_size = max_size.min(MAX_HEADER_SIZE);
    let start = reader.stream_position()?;

    let mut header = Vec::with_capacity(max_size);
    let read = reader.by_ref().take(max_size as u64).read_to_end(&mut header);
    let restored = reader.seek(SeekFrom::Start(start));

    read?;
    restored?;

    tracing::debug!(position = start, bytes = header.len(), "read stream header");
    Ok(header)
}

/// Detection over files and streams with a fixed set of options.
#[derive(Debug, Default)]
pub struct FileDetector {
    detector: Detector,
    options: DetectOptions,
}

impl FileDetector {
    pub fn new(options: DetectOptions) -> Self {
        Self {
            detector: Detector::default(),
            options,
        }
    }

    /// Uses `detector` instead of the default engine
    pub fn with_detector(mut self, detector: Detector) -> Self {
        self.detector = detector;
        self
    }

    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn try_detect_path(&self, path: impl AsRef<Path>) -> Result<Format> {
        let header = read_header(path, self.options.max_header_size)?;
        Ok(self.detector.detect(&header))
    }

    pub fn detect_path_checked(&self, path: impl AsRef<Path>) -> DetectResult {
        self.try_detect_path(path).into()
    }

    pub fn detect_path(&self, path: impl AsRef<Path>) -> Format {
        self.try_detect_path(path).unwrap_or_default()
    }

    /// Detects from the current position of `reader`, leaving the position
    /// unchanged.
    pub fn try_detect_reader<R: Read + Seek>(&self, reader: &mut R) -> Result<Format> {
        let header = read_stream_header(reader, self.options.max_header_size)?;
        Ok(self.detector.detect(&header))
    }

    pub fn detect_reader_checked<R: Read + Seek>(&self, reader: &mut R) -> DetectResult {
        self.try_detect_reader(reader).into()
    }

    pub fn detect_reader<R: Read + Seek>(&self, reader: &mut R) -> Format {
        self.try_detect_reader(reader).unwrap_or_default()
    }

    /// Detects every path independently, keeping input order.
    ///
    /// Unreadable paths come back as `Format::Unknown`.
    pub fn detect_batch<P>(&self, paths: &[P]) -> Vec<(PathBuf, Format)>
    where
        P: AsRef<Path> + Sync,
    {
        self.detect_batch_checked(paths)
            .into_iter()
            .map(|(path, result)| (path, result.format()))
            .collect()
    }

    /// Like [`detect_batch`](Self::detect_batch) but keeps each read error.
    pub fn detect_batch_checked<P>(&self, paths: &[P]) -> Vec<(PathBuf, DetectResult)>
    where
        P: AsRef<Path> + Sync,
    {
        let run = |path: &P| {
            let path = path.as_ref();
            let result = self.detect_path_checked(path);
            if let Some(err) = result.error() {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
            }
            (path.to_path_buf(), result)
        };

        if self.options.parallel {
            paths.par_iter().map(run).collect()
        } else {
            paths.iter().map(run).collect()
        }
    }
}

/// Detects the format of the file at `path`; read failures yield `Unknown`.
pub fn detect_path(path: impl AsRef<Path>) -> Format {
    DEFAULT_FILE_DETECTOR.detect_path(path)
}

/// Detects the format of the file at `path`, reporting read failures in the
/// returned [`DetectResult`].
pub fn detect_path_checked(path: impl AsRef<Path>) -> DetectResult {
    DEFAULT_FILE_DETECTOR.detect_path_checked(path)
}

/// Detects the format of the file at `path`, failing on read errors.
pub fn try_detect_path(path: impl AsRef<Path>) -> Result<Format> {
    DEFAULT_FILE_DETECTOR.try_detect_path(path)
}

/// Detects from a seekable stream without moving its position.
pub fn detect_reader<R: Read + Seek>(reader: &mut R) -> Format {
    DEFAULT_FILE_DETECTOR.detect_reader(reader)
}

pub fn try_detect_reader<R: Read + Seek>(reader: &mut R) -> Result<Format> {
    DEFAULT_FILE_DETECTOR.try_detect_reader(reader)
}

/// Detects many files, in parallel, preserving input order.
pub fn detect_batch<P>(paths: &[P]) -> Vec<(PathBuf, Format)>
where
    P: AsRef<Path> + Sync,
{
    DEFAULT_FILE_DETECTOR.detect_batch(paths)
}
