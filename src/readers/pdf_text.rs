use std::path::Path;

use lopdf::Document;
use tracing::warn;

use crate::error::Result;

/// Extract the linearized text of every page, in page order.
///
/// Table structure in these PDFs is unreliable, so callers parse the plain
/// text stream instead. A page whose text cannot be decoded is logged and
/// yields an empty string so the remaining pages still get processed.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    let doc = Document::load(path)?;

    let mut pages = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(text) => pages.push(text),
            Err(err) => {
                warn!(page = page_num, error = %err, "could not extract page text");
                pages.push(String::new());
            }
        }
    }

    Ok(pages)
}
