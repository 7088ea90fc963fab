//! Chrome DevTools Protocol printer (uses the `headless_chrome` crate)
//!
//! Launches a headless Chrome instance per call, loads the document from a
//! temporary `file://` page, and prints it with `Page.printToPDF`. Loading
//! from disk keeps large reports clear of Chrome's 2 MiB URL limit. The
//! browser process and the temporary file are torn down when the call returns.

use crate::render::RendererConfig;
use crate::{Error, Result};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use url::Url;

/// An HTML document written to a temporary `.html` file, deleted on drop.
pub(crate) struct StagedDocument {
    // Owns the file; dropping it deletes the document
    _file: NamedTempFile,
    url: Url,
}

impl StagedDocument {
    pub(crate) fn url(&self) -> &Url {
        &self.url
    }
}

/// Write `html` to a temporary file Chrome can navigate to
pub(crate) fn stage_document(html: &str) -> Result<StagedDocument> {
    let mut file = tempfile::Builder::new()
        .prefix("reportpdf-")
        .suffix(".html")
        .tempfile()
        .map_err(|e| {
            Error::RenderError(format!("Failed to create temporary document: {}", e))
        })?;

    file.write_all(html.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| {
            Error::RenderError(format!("Failed to write temporary document: {}", e))
        })?;

    let url = Url::from_file_path(file.path()).map_err(|_| {
        Error::RenderError(format!(
            "Temporary document path is not absolute: {}",
            file.path().display()
        ))
    })?;

    Ok(StagedDocument { _file: file, url })
}

/// Printing options: honour the document's `@page` size and keep backgrounds
/// (zebra rows and header shading are background colours).
fn print_options(config: &RendererConfig) -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(config.print_background),
        prefer_css_page_size: Some(true),
        display_header_footer: Some(false),
        ..Default::default()
    }
}

/// Render `html` to PDF bytes with headless Chrome.
pub(crate) fn print_html(html: &str, config: &RendererConfig) -> Result<Vec<u8>> {
    let timeout = Duration::from_millis(config.timeout_ms);

    let launch_options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(config.sandbox)
        .path(config.chrome_path.clone())
        .window_size(Some((config.viewport.width, config.viewport.height)))
        .idle_browser_timeout(timeout)
        .build()
        .map_err(|e| Error::RenderError(format!("Failed to build launch options: {}", e)))?;

    let browser = Browser::new(launch_options)
        .map_err(|e| Error::RenderError(format!("Failed to launch browser: {}", e)))?;

    let tab = browser
        .new_tab()
        .map_err(|e| Error::RenderError(format!("Failed to create tab: {}", e)))?;
    tab.set_default_timeout(timeout);

    let document = stage_document(html)?;
    debug!("Loading {} byte HTML document from {}", html.len(), document.url());
    tab.navigate_to(document.url().as_str())?.wait_until_navigated()?;

    let pdf = tab.print_to_pdf(Some(print_options(config)))?;

    drop(tab);
    drop(browser);
    drop(document);
    Ok(pdf)
}
