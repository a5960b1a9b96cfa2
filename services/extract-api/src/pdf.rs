//! Per-page text extraction for uploaded PDFs.

use lopdf::Document;
use shared::dto::Page;
use shared::error::{AppError, Result};
use tracing::{info, warn};

/// Extract the text of every page in physical order, numbered from 1.
/// A page whose text cannot be decoded contributes an empty string
/// instead of failing the whole document; only a document that cannot
/// be loaded at all is an error.
pub fn load_pdf_pages(data: &[u8]) -> Result<Vec<Page>> {
    let doc = Document::load_mem(data).map_err(|e| AppError::Pdf(e.to_string()))?;

    let mut pages = Vec::new();
    for (idx, page_number) in doc.get_pages().keys().enumerate() {
        let number = idx as u32 + 1;
        let text = match doc.extract_text(&[*page_number]) {
            Ok(text) => text,
            Err(e) => {
                warn!(page = number, %e, "page text extraction failed");
                String::new()
            }
        };
        pages.push(Page { page: number, text });
    }

    info!(pages = pages.len(), "pdf text extracted");
    Ok(pages)
}

/// Runs [`load_pdf_pages`] on the blocking pool so parsing large
/// documents does not stall the actix workers.
pub async fn load_pdf_pages_async(data: Vec<u8>) -> anyhow::Result<Vec<Page>> {
    let pages = tokio::task::spawn_blocking(move || load_pdf_pages(&data)).await??;
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = load_pdf_pages(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Pdf(_)));
    }
}
