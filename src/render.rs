//! HTML -> PDF rendering and the table -> PDF composition

use crate::capability::Capabilities;
use crate::html::{generate_table_html, RenderOptions};
use crate::table::Table;
use crate::{Error, Result};
use log::info;
use std::path::PathBuf;

/// Configuration for the HTML renderer
///
/// The defaults launch whichever Chrome/Chromium was discovered at startup, with
/// the sandbox on and a 30 second timeout for navigation and printing.
///
/// # Examples
///
/// ```
/// let cfg = reportpdf::RendererConfig::default();
/// assert_eq!(cfg.timeout_ms, 30000);
/// assert!(cfg.chrome_path.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Explicit Chrome executable; `None` uses the discovered one
    pub chrome_path: Option<PathBuf>,
    /// Browser window size used while laying out the document
    pub viewport: Viewport,
    /// Timeout for loading and printing in milliseconds
    pub timeout_ms: u64,
    /// Whether to keep Chrome's sandbox enabled
    pub sandbox: bool,
    /// Whether background colours (header shading, zebra rows) are printed
    pub print_background: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            viewport: Viewport::default(),
            timeout_ms: 30000,
            sandbox: true,
            print_background: true,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Renders HTML documents and tables to PDF bytes.
///
/// Availability of the renderer is decided once, when the `PdfRenderer` is
/// built, and reported by [`PdfRenderer::is_available`].
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    config: RendererConfig,
    available: bool,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl PdfRenderer {
    pub fn new(config: RendererConfig) -> Self {
        let available = match &config.chrome_path {
            Some(path) => cfg!(feature = "cdp") && path.is_file(),
            None => Capabilities::get().html_renderer,
        };
        Self { config, available }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Whether an HTML-to-PDF renderer can be used
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Convert a complete HTML document into PDF bytes.
    pub fn build_pdf_from_html(&self, html: &str) -> Result<Vec<u8>> {
        if !self.available {
            return Err(Error::CapabilityUnavailable(
                "Chrome is not available - cannot generate PDF from HTML".to_string(),
            ));
        }

        info!("Converting HTML to PDF using headless Chrome");
        let pdf = self.print(html).map_err(|e| {
            Error::RenderError(format!("Failed converting HTML to PDF: {}", e.cause()))
        })?;

        info!("Successfully generated PDF from HTML ({} bytes)", pdf.len());
        Ok(pdf)
    }

    /// Render `table` to HTML and print it.
    ///
    /// Every failure, whichever step raised it, comes back as
    /// [`Error::TableError`].
    pub fn build_pdf_from_dataframe(
        &self,
        table: &Table,
        options: &RenderOptions,
    ) -> Result<Vec<u8>> {
        let html = generate_table_html(table, options);
        self.build_pdf_from_html(&html).map_err(|e| {
            Error::TableError(format!("Failed generating PDF from table: {}", e.cause()))
        })
    }

    #[cfg(feature = "cdp")]
    fn print(&self, html: &str) -> Result<Vec<u8>> {
        crate::cdp::print_html(html, &self.config)
    }

    #[cfg(not(feature = "cdp"))]
    fn print(&self, _html: &str) -> Result<Vec<u8>> {
        Err(Error::CapabilityUnavailable(
            "built without the `cdp` feature".to_string(),
        ))
    }
}
