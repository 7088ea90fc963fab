//! Report PDF rendering
//!
//! Turns tabular report data and screenshot captures into PDF documents for
//! scheduled reports.
//!
//! # Features
//!
//! - **Tables** (`cdp`, default): estimate a page size from the table's
//!   content, emit a print-styled HTML document, and print it with headless
//!   Chrome over the Chrome DevTools Protocol.
//! - **Screenshots** (`screenshots`, default): decode PNG/JPEG/... captures
//!   and stitch them into one multi-page PDF.
//!
//! Both capabilities are optional. Their absence is detected once per process
//! and surfaces as [`Error::CapabilityUnavailable`] only when an operation
//! that needs them is called. Every failure displays as
//! `PDF generation failed: <cause>`.
//!
//! # Example
//!
//! ```no_run
//! use reportpdf::{RenderOptions, Table, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table = Table::new(["region", "revenue"]);
//! table.push_row([Value::from("north"), Value::Float(1250.5)]);
//! table.push_row([Value::from("south"), Value::Null]);
//!
//! let options = RenderOptions {
//!     title: "Weekly revenue".to_string(),
//!     ..Default::default()
//! };
//! let pdf = reportpdf::build_pdf_from_dataframe(&table, &options)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod error;
pub mod estimate;
pub mod html;
pub mod page;
pub mod render;
pub mod table;

pub use capability::Capabilities;
pub use error::{Error, Result};
pub use estimate::estimate_table_width;
pub use html::{generate_table_html, RenderOptions};
pub use page::{select_page_geometry, Orientation, PageGeometry, Paper};
pub use render::{PdfRenderer, RendererConfig, Viewport};
pub use table::{Table, Value};

#[cfg(feature = "cdp")]
pub mod cdp;

#[cfg(feature = "screenshots")]
pub mod screenshots;

/// Convert a complete HTML document into PDF bytes with the default renderer.
pub fn build_pdf_from_html(html: &str) -> Result<Vec<u8>> {
    PdfRenderer::default().build_pdf_from_html(html)
}

/// Render `table` to a PDF with the default renderer.
///
/// Failures from either the HTML step or the printing step are reported as
/// [`Error::TableError`].
pub fn build_pdf_from_dataframe(table: &Table, options: &RenderOptions) -> Result<Vec<u8>> {
    PdfRenderer::default().build_pdf_from_dataframe(table, options)
}

/// Stitch screenshots into one multi-page PDF, one page per image, in order.
pub fn build_pdf_from_screenshots<B: AsRef<[u8]>>(snapshots: &[B]) -> Result<Vec<u8>> {
    if snapshots.is_empty() {
        return Err(Error::NoScreenshots);
    }
    if !Capabilities::get().image_decoder {
        return Err(Error::CapabilityUnavailable(
            "An image decoder is required for screenshot-based PDF generation".to_string(),
        ));
    }
    assemble_screenshots(snapshots)
}

#[cfg(feature = "screenshots")]
fn assemble_screenshots<B: AsRef<[u8]>>(snapshots: &[B]) -> Result<Vec<u8>> {
    screenshots::build_pdf_from_screenshots(snapshots)
}

#[cfg(not(feature = "screenshots"))]
fn assemble_screenshots<B: AsRef<[u8]>>(_snapshots: &[B]) -> Result<Vec<u8>> {
    Err(Error::CapabilityUnavailable(
        "built without the `screenshots` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_screenshot_list_is_rejected() {
        let none: Vec<Vec<u8>> = Vec::new();
        let err = build_pdf_from_screenshots(&none[..]).unwrap_err();
        assert!(matches!(err, Error::NoScreenshots));
        assert_eq!(
            err.to_string(),
            "PDF generation failed: No screenshots provided for PDF generation"
        );
    }

    #[test]
    fn default_options() {
        let opts = RenderOptions::default();
        assert_eq!(opts.title, "Report");
        assert!(opts.description.is_empty());
        assert!(opts.auto_resize_page);
    }
}
