//! Page geometry selection
//!
//! Maps an estimated table width onto a paper size. The breakpoints are kept
//! as plain data so they can be checked independently of document assembly.

use log::info;
use std::fmt;

/// Paper families the breakpoint table can choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paper {
    A4,
    A3,
    A2,
    /// Width computed from the table itself
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Paper size, orientation and margins used for one rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub paper: Paper,
    pub orientation: Orientation,
    pub width_mm: u32,
    pub height_mm: u32,
    /// CSS margin shorthand
    pub margin: &'static str,
}

impl PageGeometry {
    pub const A4_PORTRAIT: PageGeometry = PageGeometry {
        paper: Paper::A4,
        orientation: Orientation::Portrait,
        width_mm: 210,
        height_mm: 297,
        margin: "2cm 1.5cm",
    };

    /// Value for the CSS `@page { size: ... }` descriptor
    pub fn css_size(&self) -> String {
        let name = match self.paper {
            Paper::A4 => "A4",
            Paper::A3 => "A3",
            Paper::A2 => "A2",
            Paper::Custom => return format!("{}mm {}mm", self.width_mm, self.height_mm),
        };
        match self.orientation {
            Orientation::Portrait => name.to_string(),
            Orientation::Landscape => format!("{} landscape", name),
        }
    }
}

/// `(largest estimated width, geometry)` in ascending order of capacity
pub const BREAKPOINTS: &[(u32, PageGeometry)] = &[
    (550, PageGeometry::A4_PORTRAIT),
    (
        750,
        PageGeometry {
            paper: Paper::A4,
            orientation: Orientation::Landscape,
            width_mm: 297,
            height_mm: 210,
            margin: "1.5cm 2cm",
        },
    ),
    (
        1050,
        PageGeometry {
            paper: Paper::A3,
            orientation: Orientation::Portrait,
            width_mm: 297,
            height_mm: 420,
            margin: "2cm 1.5cm",
        },
    ),
    (
        1400,
        PageGeometry {
            paper: Paper::A3,
            orientation: Orientation::Landscape,
            width_mm: 420,
            height_mm: 297,
            margin: "1.5cm 2cm",
        },
    ),
    (
        2000,
        PageGeometry {
            paper: Paper::A2,
            orientation: Orientation::Landscape,
            width_mm: 594,
            height_mm: 420,
            margin: "2cm 2.5cm",
        },
    ),
];

pub const PX_PER_MM: f64 = 3.78;
pub const CUSTOM_MARGIN_MM: u32 = 40;
pub const CUSTOM_MIN_WIDTH_MM: u32 = 420;
/// A0 long edge
pub const CUSTOM_MAX_WIDTH_MM: u32 = 1682;
pub const CUSTOM_HEIGHT_MM: u32 = 420;

/// Geometry for a table too wide for any standard breakpoint
pub fn custom_geometry(estimated_width: u32) -> PageGeometry {
    let table_width_mm = (estimated_width as f64 / PX_PER_MM) as u32;
    let width_mm =
        (table_width_mm + CUSTOM_MARGIN_MM).clamp(CUSTOM_MIN_WIDTH_MM, CUSTOM_MAX_WIDTH_MM);
    PageGeometry {
        paper: Paper::Custom,
        orientation: Orientation::Landscape,
        width_mm,
        height_mm: CUSTOM_HEIGHT_MM,
        margin: "2cm 2cm",
    }
}

/// Pick the page geometry for a table of the given estimated width.
///
/// With `auto_resize` off the answer is always A4 portrait.
pub fn select_page_geometry(estimated_width: u32, auto_resize: bool) -> PageGeometry {
    if !auto_resize {
        return PageGeometry::A4_PORTRAIT;
    }

    let geometry = BREAKPOINTS
        .iter()
        .find(|(limit, _)| estimated_width <= *limit)
        .map(|(_, g)| *g)
        .unwrap_or_else(|| custom_geometry(estimated_width));

    info!(
        "Selected page size: {} ({}) for table width {} px",
        geometry.css_size(),
        geometry.orientation,
        estimated_width
    );
    geometry
}
