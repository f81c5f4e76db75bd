use crate::{
    errors::{AppError, AppResult},
    models::domain::PageText,
};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Turns an uploaded document into ordered page texts, dropping pages without text.
#[cfg_attr(test, mockall::automock)]
pub trait PageTextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> AppResult<Vec<PageText>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfPageExtractor;

impl PageTextExtractor for PdfPageExtractor {
    fn extract(&self, document: &[u8]) -> AppResult<Vec<PageText>> {
        if !document.starts_with(PDF_MAGIC) {
            return Err(AppError::ExtractionFailure(
                "document is not a PDF file".to_string(),
            ));
        }

        let texts = pdf_extract::extract_text_from_mem_by_pages(document)
            .map_err(|e| AppError::ExtractionFailure(format!("Failed to read PDF: {}", e)))?;

        let pages = number_pages(texts);
        log::debug!("Extracted {} pages with text from PDF", pages.len());
        Ok(pages)
    }
}

/// Physical page numbers start at 1; blank pages still consume their number.
pub fn number_pages<I, S>(texts: I) -> Vec<PageText>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .enumerate()
        .filter_map(|(i, text)| {
            let content = text.as_ref().trim();
            (!content.is_empty()).then(|| PageText::new(i as u32 + 1, content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{
        content::{Content, Operation},
        dictionary, Document, Object, Stream,
    };

    /// Builds a PDF with one Helvetica text line per page; `None` yields a blank page.
    fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
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
            kids.push(Object::from(page_id));
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

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pdf_pages_keep_their_physical_numbers() {
        let document = pdf_with_pages(&[
            Some("Cells are units"),
            None,
            Some("Mitochondria make ATP"),
        ]);

        let pages = PdfPageExtractor.extract(&document).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert!(pages[0].content.contains("Cells are units"));
        assert!(!pages[0].content.contains("Mitochondria"));
        assert_eq!(pages[1].page_number, 3);
        assert!(pages[1].content.contains("Mitochondria make ATP"));
    }

    #[test]
    fn test_number_pages_skips_blank_pages() {
        let pages = number_pages(["Cells\n", "   \n", "Mitosis", "Meiosis "]);

        assert_eq!(
            pages,
            vec![
                PageText::new(1, "Cells"),
                PageText::new(3, "Mitosis"),
                PageText::new(4, "Meiosis"),
            ]
        );
    }

    #[test]
    fn test_number_pages_of_blank_document_is_empty() {
        assert!(number_pages(["  \n", "\t"]).is_empty());
    }

    #[test]
    fn test_non_pdf_is_rejected() {
        let result = PdfPageExtractor.extract(b"This is not a PDF");
        assert!(matches!(result, Err(AppError::ExtractionFailure(_))));
    }
}
