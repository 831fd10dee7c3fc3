// src/seo/report.rs
// =============================================================================
// Renders crawled PageRecords into a static HTML report.
//
// The markup lives in templates/report.html and is compiled in by askama,
// which HTML-escapes every interpolated value. The report links a sibling
// styles.css; write_report drops a default one next to the report unless the
// user already has their own.
// =============================================================================

use anyhow::{Context, Result};
use askama::Template;
use std::fs;
use std::path::Path;

use super::PageRecord;

const STYLESHEET_NAME: &str = "styles.css";
const DEFAULT_STYLESHEET: &str = include_str!("../../templates/styles.css");

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    records: &'a [PageRecord],
}

/// Renders the full report document for `records`, in the order given.
pub fn render_report(records: &[PageRecord]) -> Result<String> {
    let html = ReportTemplate { records }
        .render()
        .context("Failed to render report template")?;
    Ok(html)
}

// Writes the report to `path`, overwriting any previous run
//
// Also writes styles.css into the same directory if it is missing.
pub fn write_report(path: &Path, records: &[PageRecord]) -> Result<()> {
    let html = render_report(records)?;
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    let stylesheet = path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(STYLESHEET_NAME);
    if !stylesheet.exists() {
        fs::write(&stylesheet, DEFAULT_STYLESHEET)
            .with_context(|| format!("Failed to write {}", stylesheet.display()))?;
        log::debug!("Wrote default stylesheet to {}", stylesheet.display());
    }

    Ok(())
}
