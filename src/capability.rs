//! Optional runtime capabilities
//!
//! HTML printing needs the `cdp` feature and a Chrome/Chromium binary;
//! screenshot assembly needs the `screenshots` feature. Availability is
//! probed once per process and consulted by each operation.

use log::info;
use std::sync::OnceLock;

/// What this process can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// An HTML-to-PDF renderer (headless Chrome) is available
    pub html_renderer: bool,
    /// Raster screenshots can be decoded and assembled
    pub image_decoder: bool,
}

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

impl Capabilities {
    /// The process-wide record, probed on first call.
    pub fn get() -> &'static Capabilities {
        CAPABILITIES.get_or_init(Self::probe)
    }

    /// Probe the environment now, bypassing the cached record.
    pub fn probe() -> Capabilities {
        Capabilities {
            html_renderer: probe_html_renderer(),
            image_decoder: probe_image_decoder(),
        }
    }
}

#[cfg(feature = "cdp")]
fn probe_html_renderer() -> bool {
    match headless_chrome::browser::default_executable() {
        Ok(path) => {
            info!("Using Chrome at {} for HTML to PDF conversion", path.display());
            true
        }
        Err(e) => {
            info!(
                "No Chrome installation found - HTML to PDF conversion not available: {}",
                e
            );
            false
        }
    }
}

#[cfg(not(feature = "cdp"))]
fn probe_html_renderer() -> bool {
    info!("Built without the `cdp` feature - HTML to PDF conversion not available");
    false
}

fn probe_image_decoder() -> bool {
    if cfg!(feature = "screenshots") {
        true
    } else {
        info!("Built without the `screenshots` feature - screenshot PDFs not available");
        false
    }
}
