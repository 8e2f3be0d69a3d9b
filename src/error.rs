use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Word document extraction error: {0}")]
    DocxExtraction(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
