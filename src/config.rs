//! Detection options

use crate::types::{DEFAULT_HEADER_SIZE, MAX_HEADER_SIZE, MIN_HEADER_SIZE};

/// Options for reading headers and running batches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    /// How many leading bytes to read from each input
    pub max_header_size: usize,
    /// Whether batch detection fans out across the rayon pool
    pub parallel: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            max_header_size: MAX_HEADER_SIZE,
            parallel: true,
        }
    }
}

impl DetectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads only `DEFAULT_HEADER_SIZE` bytes. Enough for plain signatures,
    /// too little for TAR and for telling ZIP-based formats apart.
    pub fn quick() -> Self {
        Self {
            max_header_size: DEFAULT_HEADER_SIZE,
            ..Default::default()
        }
    }

    /// Sets the header size, clamped to `MIN_HEADER_SIZE..=MAX_HEADER_SIZE`
    pub fn with_max_header_size(mut self, size: usize) -> Self {
        self.max_header_size = size.clamp(MIN_HEADER_SIZE, MAX_HEADER_SIZE);
        self
    }

    /// Disables parallel batch detection
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
