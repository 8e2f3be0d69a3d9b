use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

/// Pulls paragraph text out of the OOXML container. A `.docx` file is a
/// zip archive whose body lives in `word/document.xml`; each closed
/// `w:p` element is one paragraph.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::DocxExtraction(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::DocxExtraction(e.to_string()))?
        .read_to_string(&mut xml)?;

    paragraph_text(&xml)
}

fn paragraph_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::DocxExtraction(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => out.push(' '),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::DocxExtraction(e.to_string())),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOCUMENT_XML: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        r#"<w:body>"#,
        r#"<w:p><w:r><w:t>Senior Rust Engineer</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t>Skills: Python &amp; React</w:t></w:r></w:p>"#,
        r#"</w:body>"#,
        r#"</w:document>"#,
    );

    #[test]
    fn test_paragraph_text_joins_with_spaces() {
        let text = paragraph_text(DOCUMENT_XML).unwrap();
        assert_eq!(text, "Senior Rust Engineer Skills: Python & React ");
    }

    #[test]
    fn test_extract_from_docx_archive() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(DOCUMENT_XML.as_bytes()).unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let text = extract_text(&bytes).unwrap();
        assert!(text.contains("Senior Rust Engineer"));
        assert!(text.contains("Python & React"));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(extract_text(b"not a zip archive").is_err());
    }
}
