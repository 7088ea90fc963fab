//! Error types for PDF generation

use thiserror::Error;

/// Result type alias for PDF generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a PDF.
///
/// Callers only ever see one failure kind: every variant displays as
/// `PDF generation failed: <cause>`. The variant records which step failed
/// for callers that want to branch on it without parsing text.
#[derive(Error, Debug)]
pub enum Error {
    /// A required optional capability (renderer or decoder) is not present
    #[error("PDF generation failed: {0}")]
    CapabilityUnavailable(String),

    /// `build_pdf_from_screenshots` was called with an empty sequence
    #[error("PDF generation failed: No screenshots provided for PDF generation")]
    NoScreenshots,

    /// The HTML renderer failed
    #[error("PDF generation failed: {0}")]
    RenderError(String),

    /// A screenshot could not be decoded
    #[error("PDF generation failed: {0}")]
    DecodeError(String),

    /// Decoded screenshots could not be assembled into a document
    #[error("PDF generation failed: {0}")]
    AssemblyError(String),

    /// Any failure while turning a table into a PDF
    #[error("PDF generation failed: {0}")]
    TableError(String),
}

impl Error {
    /// The underlying cause, without the `PDF generation failed` prefix.
    pub fn cause(&self) -> String {
        match self {
            Error::CapabilityUnavailable(msg)
            | Error::RenderError(msg)
            | Error::DecodeError(msg)
            | Error::AssemblyError(msg)
            | Error::TableError(msg) => msg.clone(),
            Error::NoScreenshots => "No screenshots provided for PDF generation".to_string(),
        }
    }
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::RenderError(err.to_string())
    }
}

#[cfg(feature = "screenshots")]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::AssemblyError(format!("Failed converting screenshots to pdf {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_shares_the_prefix() {
        let errors = [
            Error::CapabilityUnavailable("missing".into()),
            Error::NoScreenshots,
            Error::RenderError("boom".into()),
            Error::DecodeError("bad image".into()),
            Error::AssemblyError("bad pdf".into()),
            Error::TableError("wrapped".into()),
        ];
        for e in errors {
            assert!(e.to_string().starts_with("PDF generation failed: "), "{}", e);
        }
    }

    #[test]
    fn cause_strips_prefix() {
        let e = Error::RenderError("Failed converting HTML to PDF: crash".into());
        assert_eq!(e.cause(), "Failed converting HTML to PDF: crash");
        assert_eq!(
            Error::NoScreenshots.to_string(),
            format!("PDF generation failed: {}", Error::NoScreenshots.cause())
        );
    }
}
