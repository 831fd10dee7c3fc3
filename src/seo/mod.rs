// src/seo/mod.rs
// =============================================================================
// This module holds everything SEO-specific about a crawled page.
//
// Submodules:
// - html: Extracts title, meta description, H1s, keywords and links
// - report: Renders the collected records into a static HTML file
// =============================================================================

mod html;
mod report;

pub use html::{extract_page, PageRecord};
pub use report::write_report;
