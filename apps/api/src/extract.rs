//! PDF Text Extractor — turns an uploaded PDF buffer into one plain-text string.
//!
//! Walks the parsed page structure with `lopdf`: text runs within a page are
//! joined with single spaces, pages are joined with newlines. No handling of
//! encrypted PDFs, scanned/image-only PDFs (those yield empty text and are
//! rejected by the handler), or multi-column layout reconstruction.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to parse PDF buffer: {0}")]
    Unparsable(lopdf::Error),

    #[error("Failed to extract text from PDF data: {0}")]
    Extraction(lopdf::Error),

    #[error("PDF extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Extracts plain text from a PDF buffer on the blocking pool.
///
/// Resolves exactly once: either the full extracted text or the first error
/// encountered. A panic inside the parser surfaces as `ExtractError::Task`.
pub async fn extract_text(bytes: Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text_sync(&bytes)).await?
}

fn extract_text_sync(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(ExtractError::Unparsable)?;

    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let raw = doc
            .extract_text(&[*page_number])
            .map_err(ExtractError::Extraction)?;
        // Collapse the per-run line breaks lopdf emits into single spaces;
        // page boundaries stay as newlines.
        pages.push(raw.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    let text = pages.join("\n");
    debug!(
        "Extracted {} chars of text from {} page(s)",
        text.len(),
        pages.len()
    );
    Ok(text)
}

/// In-memory PDF fixtures shared by the extractor and handler tests.
#[cfg(test)]
pub(crate) mod test_pdf {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a minimal PDF with one entry in `pages_text` per page, each a
    /// list of text runs.
    pub(crate) fn pdf_with_text(pages_text: &[&[&str]]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for runs in pages_text {
            // One text block per run so extraction yields a separator between runs.
            let mut operations = Vec::new();
            for (i, run) in runs.iter().enumerate() {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
                operations.push(Operation::new(
                    "Td",
                    vec![50.into(), (700 - 14 * i as i64).into()],
                ));
                operations.push(Operation::new("Tj", vec![Object::string_literal(*run)]));
                operations.push(Operation::new("ET", vec![]));
            }
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
