//! HTML document assembly for table reports
//!
//! The stylesheet and page skeleton are templates with `{{TOKEN}}`
//! placeholders, filled in one pass by [`fill_template`] so the CSS braces
//! never need escaping for `format!` and inserted text is never rescanned.

use crate::estimate::estimate_table_width;
use crate::page::{select_page_geometry, PageGeometry};
use crate::table::Table;
use log::info;
use std::fmt::Write;

/// Estimated width above which the print stylesheet tightens fonts and padding
pub const DENSE_TABLE_WIDTH: u32 = 1200;

/// Per-call options for table rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title shown at the top of the page and in `<title>`
    pub title: String,
    /// Optional description under the title; omitted entirely when empty
    pub description: String,
    /// Size the page from the table's estimated width instead of fixed A4 portrait
    pub auto_resize_page: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Report".to_string(),
            description: String::new(),
            auto_resize_page: true,
        }
    }
}

impl RenderOptions {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

const STYLESHEET_TEMPLATE: &str = r#"<style type="text/css">
        @page {
            size: {{PAGE_SIZE}};
            margin: {{MARGIN}};
            @bottom-center {
                content: "Page " counter(page) " of " counter(pages);
                font-size: 10pt;
                color: #666;
            }
        }

        body {
            font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
            font-size: 9pt;
            line-height: 1.4;
            color: #333;
            margin: 0;
            padding: 0;
            width: 100%;
            overflow-x: auto;
        }

        .header {
            margin-bottom: 20px;
            padding-bottom: 10px;
            border-bottom: 2px solid #e0e0e0;
        }

        .title {
            font-size: 18pt;
            font-weight: bold;
            color: #2c3e50;
            margin-bottom: 8px;
        }

        .description {
            font-size: 11pt;
            color: #666;
            margin-bottom: 10px;
        }

        .data-table {
            width: 100%;
            border-collapse: collapse;
            font-size: 8pt;
            margin-top: 10px;
            table-layout: auto;
            word-wrap: break-word;
            page-break-before: auto;
            page-break-after: auto;
            page-break-inside: auto;
        }

        .data-table th {
            background-color: #f8f9fa;
            border: 1px solid #dee2e6;
            padding: 6px 8px;
            text-align: left;
            font-weight: bold;
            color: #495057;
            page-break-inside: avoid;
            white-space: nowrap;
            overflow: hidden;
            text-overflow: ellipsis;
            max-width: 150px;
        }

        .data-table td {
            border: 1px solid #dee2e6;
            padding: 4px 8px;
            text-align: left;
            page-break-inside: avoid;
            word-wrap: break-word;
            max-width: 150px;
            overflow: hidden;
        }

        .data-table tbody tr:nth-child(even) {
            background-color: #f8f9fa;
        }

        /* Repeat the header row on every page */
        .data-table thead {
            display: table-header-group;
        }

        .data-table tbody {
            display: table-row-group;
        }

        .data-table tbody tr {
            page-break-inside: avoid;
            page-break-after: auto;
        }

        /* Index column */
        .data-table th:first-child,
        .data-table td:first-child {
            background-color: #e9ecef;
            font-weight: bold;
            text-align: center;
            width: 60px;
            min-width: 60px;
            max-width: 80px;
        }

        @media print {
            .data-table {
                font-size: {{PRINT_FONT_SIZE}};
            }
            .data-table th,
            .data-table td {
                padding: {{PRINT_PADDING}};
            }
        }
    </style>"#;

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{{TITLE}}</title>
    {{STYLESHEET}}
</head>
<body>
    <div class="header">
        <div class="title">{{TITLE}}</div>
        {{DESCRIPTION}}
    </div>
{{TABLE}}
</body>
</html>
"#;

/// Replace each `{{NAME}}` in `template` with its value from `values`.
///
/// Works left to right over the template only, so a value containing
/// `{{...}}` is copied verbatim. Unknown tokens are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let token = &after[..end];
        match values.iter().find(|(name, _)| *name == token) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Render the print stylesheet for a page geometry and table width
pub fn stylesheet(geometry: &PageGeometry, estimated_width: u32) -> String {
    let dense = estimated_width > DENSE_TABLE_WIDTH;
    let size = geometry.css_size();
    fill_template(
        STYLESHEET_TEMPLATE,
        &[
            ("PAGE_SIZE", size.as_str()),
            ("MARGIN", geometry.margin),
            ("PRINT_FONT_SIZE", if dense { "7pt" } else { "8pt" }),
            ("PRINT_PADDING", if dense { "3px 6px" } else { "4px 8px" }),
        ],
    )
}

/// Render `table` as an HTML `<table>`.
///
/// The index is the first header cell of every body row, missing values are
/// empty cells, and cell text is inserted verbatim (no escaping).
pub fn table_html(table: &Table) -> String {
    let mut out = String::new();
    out.push_str("<table border=\"1\" class=\"dataframe data-table\" id=\"report-table\">\n");
    out.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
    for column in table.columns() {
        let _ = writeln!(out, "      <th>{}</th>", column);
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for (label, cells) in table.rows() {
        out.push_str("    <tr>\n");
        let _ = writeln!(out, "      <th>{}</th>", label);
        for cell in cells {
            if cell.is_missing() {
                out.push_str("      <td></td>\n");
            } else {
                let _ = writeln!(out, "      <td>{}</td>", cell);
            }
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>");
    out
}

/// Produce a complete, self-contained HTML document for `table`.
pub fn generate_table_html(table: &Table, options: &RenderOptions) -> String {
    let estimated_width = estimate_table_width(table);

    info!(
        "Generating PDF for table with {} columns, {} rows, estimated width: {} px",
        table.num_columns(),
        table.num_rows(),
        estimated_width
    );

    let geometry = select_page_geometry(estimated_width, options.auto_resize_page);

    let description = if options.description.is_empty() {
        String::new()
    } else {
        format!("<div class=\"description\">{}</div>", options.description)
    };

    let css = stylesheet(&geometry, estimated_width);
    let body = table_html(table);
    fill_template(
        DOCUMENT_TEMPLATE,
        &[
            ("STYLESHEET", css.as_str()),
            ("TABLE", body.as_str()),
            ("DESCRIPTION", description.as_str()),
            ("TITLE", options.title.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn small_table() -> Table {
        let mut t = Table::new(["region", "sales"]);
        t.push_row([Value::from("north"), Value::Int(10)]);
        t.push_row([Value::from("south"), Value::Null]);
        t
    }

    #[test]
    fn title_and_description_are_embedded() {
        let opts = RenderOptions {
            title: "Weekly Sales".into(),
            description: "All regions".into(),
            auto_resize_page: true,
        };
        let html = generate_table_html(&small_table(), &opts);
        assert!(html.contains("<title>Weekly Sales</title>"));
        assert!(html.contains("<div class=\"title\">Weekly Sales</div>"));
        assert!(html.contains("<div class=\"description\">All regions</div>"));
    }

    #[test]
    fn empty_description_omits_block() {
        let html = generate_table_html(&small_table(), &RenderOptions::default());
        assert!(html.contains("<title>Report</title>"));
        assert!(!html.contains("class=\"description\""));
    }

    #[test]
    fn narrow_table_uses_a4_portrait() {
        let html = generate_table_html(&small_table(), &RenderOptions::default());
        assert!(html.contains("size: A4;"));
        assert!(html.contains("margin: 2cm 1.5cm;"));
        assert!(html.contains("font-size: 8pt;"));
    }

    #[test]
    fn very_wide_table_uses_custom_clamped_page() {
        let columns: Vec<String> = (0..100).map(|i| format!("column_{:03}", i)).collect();
        let mut t = Table::new(columns);
        t.push_row((0..100).map(|_| Value::from("x".repeat(60))));
        let html = generate_table_html(&t, &RenderOptions::default());
        assert!(html.contains("size: 1682mm 420mm;"));
        assert!(html.contains("font-size: 7pt;"));
        assert!(html.contains("padding: 3px 6px;"));
    }

    #[test]
    fn auto_resize_off_keeps_a4() {
        let columns: Vec<String> = (0..30).map(|i| format!("c{}", i)).collect();
        let mut t = Table::new(columns);
        t.push_row((0..30).map(|i| Value::Int(i)));
        let opts = RenderOptions {
            auto_resize_page: false,
            ..Default::default()
        };
        assert!(generate_table_html(&t, &opts).contains("size: A4;"));
    }

    #[test]
    fn table_renders_index_and_missing_cells() {
        let html = table_html(&small_table());
        assert!(html.contains("id=\"report-table\""));
        assert!(html.contains("<th>region</th>"));
        assert!(html.contains("<th>1</th>\n      <td>south</td>\n      <td></td>"));
    }

    #[test]
    fn placeholder_text_in_user_content_is_kept_literally() {
        let mut t = Table::new(["note"]);
        t.push_row(["literal {{TITLE}} text"]);
        let opts = RenderOptions {
            title: "Sales".into(),
            description: "use {{TITLE}} and {{DESCRIPTION}} tokens".into(),
            auto_resize_page: true,
        };
        let html = generate_table_html(&t, &opts);
        assert!(html.contains("<td>literal {{TITLE}} text</td>"));
        assert!(html.contains(
            "<div class=\"description\">use {{TITLE}} and {{DESCRIPTION}} tokens</div>"
        ));
        assert!(html.contains("<title>Sales</title>"));
    }

    #[test]
    fn fill_template_handles_unknown_and_unclosed_tokens() {
        let out = fill_template("a {{X}} b {{Y}} c {{Z", &[("X", "{{Y}}")]);
        assert_eq!(out, "a {{Y}} b {{Y}} c {{Z");
    }

    #[test]
    fn cells_are_not_escaped() {
        let mut t = Table::new(["link"]);
        t.push_row(["<b>bold</b>"]);
        assert!(table_html(&t).contains("<td><b>bold</b></td>"));
    }

    #[test]
    fn stylesheet_repeats_header_and_numbers_pages() {
        let css = stylesheet(&PageGeometry::A4_PORTRAIT, 100);
        assert!(css.contains("display: table-header-group;"));
        assert!(css.contains("counter(page) \" of \" counter(pages)"));
        assert!(css.contains("nth-child(even)"));
        assert!(!css.contains("{{"));
    }
}
