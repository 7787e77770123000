pub mod catalog;
pub mod config;
pub mod container;
pub mod detector;
pub mod error;
pub mod formats;
pub mod io;
pub mod stats;
pub mod types;

pub use catalog::{get_category_name, get_info};
pub use config::DetectOptions;
pub use detector::{Detector, detect, detect_info};
pub use error::{DetectError, Result};
pub use io::{
    FileDetector, detect_batch, detect_path, detect_path_checked, detect_reader, try_detect_path,
    try_detect_reader,
};
pub use stats::BatchSummary;
pub use types::{
    Category, DEFAULT_HEADER_SIZE, DetectResult, Format, FormatInfo, MAX_HEADER_SIZE,
    MIN_HEADER_SIZE,
};
