use crate::error::{Error, Result};

pub fn extract_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| Error::PdfExtraction(e.to_string()))
}
