use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    CsvUtf8(#[from] FromUtf8Error),

    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("OCR engine failure: {0}")]
    Ocr(#[from] rusty_tesseract::TessError),

    #[error("image file not found: {}", .0.display())]
    MissingInput(PathBuf),
}
