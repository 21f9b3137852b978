use std::path::Path;

use rusty_tesseract::{Args, Image};

use crate::error::ExtractError;
use crate::options::ExtractOptions;

/// Black-box recognition capability: one image in, one text blob out.
pub trait OcrEngine {
    fn recognize(&self, image_path: &Path) -> Result<String, ExtractError>;
}

pub struct TesseractEngine {
    args: Args,
}

impl TesseractEngine {
    #[must_use]
    pub fn new(options: &ExtractOptions) -> Self {
        let args = Args {
            lang: options.lang.clone(),
            dpi: options.dpi,
            psm: options.psm,
            oem: options.oem,
            ..Args::default()
        };
        Self { args }
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image_path: &Path) -> Result<String, ExtractError> {
        let dynamic = image::open(image_path)?;
        let image = Image::from_dynamic_image(&dynamic)?;
        let text = rusty_tesseract::image_to_string(&image, &self.args)?;
        tracing::debug!(
            chars = text.chars().count(),
            "tesseract recognized text from {}",
            image_path.display()
        );
        Ok(text)
    }
}
