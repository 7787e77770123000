//! Container disambiguation.
//!
//! Some signatures only say "this is a ZIP" or "this is an OLE2 compound
//! file". A [`ContainerProbe`] looks a little further into the header to name
//! the format carried inside. The probes shipped here are substring
//! heuristics over the header bytes, not container parsers; a
//! directory-aware reader can replace either one through [`Detector`].
//!
//! [`Detector`]: crate::detector::Detector

mod ole2;
mod zip;

pub use ole2::Ole2Probe;
pub use zip::{ZipProbe, first_entry_name};

use crate::types::Format;

/// Refines a generic container match into a more specific format.
///
/// # Contract
///
/// `refine` receives the same header buffer the outer matcher saw. It must
/// not read past the end of it, must not fail, and answers
/// `Format::Unknown` to mean "keep the generic classification".
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one `Detector` can be shared
/// across batch worker threads.
///
/// # Example
///
/// ```
/// use fileformat::container::ContainerProbe;
/// use fileformat::Format;
///
/// struct AlwaysDocx;
///
/// impl ContainerProbe for AlwaysDocx {
///     fn name(&self) -> &'static str {
///         "always-docx"
///     }
///
///     fn refine(&self, _header: &[u8]) -> Format {
///         Format::Docx
///     }
/// }
///
/// assert_eq!(AlwaysDocx.refine(b"PK\x03\x04"), Format::Docx);
/// ```
pub trait ContainerProbe: Send + Sync {
    /// Short identifier used in trace output.
    fn name(&self) -> &'static str;

    /// Returns the specific format inside the container, or `Unknown`.
    fn refine(&self, header: &[u8]) -> Format;
}
