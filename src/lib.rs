mod csv_out;
mod engine;
mod error;
mod model;
mod options;
mod row_split;
mod warning;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use engine::{OcrEngine, TesseractEngine};
pub use error::ExtractError;
pub use model::Table;
pub use options::ExtractOptions;
pub use row_split::derive_rows;
pub use warning::{ExtractWarning, WarningCode as ExtractWarningCode};

use crate::warning::WarningCode;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport {
    pub row_count: usize,
    pub recognized_chars: usize,
    pub warnings: Vec<ExtractWarning>,
}

pub fn extract_text(
    engine: &dyn OcrEngine,
    input_image: &Path,
    output_txt: &Path,
) -> Result<String, ExtractError> {
    if !input_image.exists() {
        return Err(ExtractError::MissingInput(input_image.to_path_buf()));
    }

    let text = engine.recognize(input_image)?;
    fs::write(output_txt, &text)?;
    debug!(
        bytes = text.len(),
        "recognized text written to {}",
        output_txt.display()
    );
    Ok(text)
}

fn derive_table(text: &str, warnings: &mut Vec<ExtractWarning>) -> Table {
    let table = derive_rows(text);

    if table.is_empty() {
        warnings.push(ExtractWarning::new(
            WarningCode::EmptyRecognizedText,
            "no non-blank lines were recognized; the table output is empty",
        ));
        return table;
    }

    let first_width = table.rows[0].len();
    if table.rows.iter().any(|row| row.len() != first_width) {
        warnings.push(ExtractWarning::new(
            WarningCode::RaggedRowWidths,
            "derived rows have differing field counts; the split heuristic may have misparsed",
        ));
    }

    table
}

pub fn text_to_csv_string(
    text: &str,
    options: &ExtractOptions,
) -> Result<(String, ExtractionReport), ExtractError> {
    let mut warnings = Vec::new();
    let table = derive_table(text, &mut warnings);
    let csv = csv_out::write_csv_to_string(&table, options.delimiter)?;

    Ok((csv, ExtractionReport {
        row_count: table.row_count(),
        recognized_chars: text.chars().count(),
        warnings,
    }))
}

pub fn extract_image_to_csv(
    engine: &dyn OcrEngine,
    input_image: &Path,
    output_txt: &Path,
    output_csv: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionReport, ExtractError> {
    let text = extract_text(engine, input_image, output_txt)?;

    let mut warnings = Vec::new();
    let table = derive_table(&text, &mut warnings);
    csv_out::write_csv(output_csv, &table, options.delimiter)?;
    debug!(
        rows = table.row_count(),
        "table written to {}",
        output_csv.display()
    );

    Ok(ExtractionReport {
        row_count: table.row_count(),
        recognized_chars: text.chars().count(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::{derive_table, text_to_csv_string};
    use crate::options::ExtractOptions;
    use crate::warning::WarningCode;

    #[test]
    fn empty_text_yields_empty_table_warning() {
        let mut warnings = Vec::new();
        let table = derive_table("\n  \n", &mut warnings);
        assert!(table.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::EmptyRecognizedText);
    }

    #[test]
    fn ragged_rows_are_reported_but_kept() {
        let mut warnings = Vec::new();
        let table = derive_table("a\tb\tc\nx\n", &mut warnings);
        assert_eq!(table.row_count(), 2);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::RaggedRowWidths);
    }

    #[test]
    fn csv_string_matches_derived_rows() {
        let (csv, report) = text_to_csv_string("A\tB\tC\nX  Y\n", &ExtractOptions::default())
            .expect("splitting should succeed");
        assert_eq!(csv, "A,B,C\nX,Y\n");
        assert_eq!(report.row_count, 2);
        assert!(!report.warnings.is_empty());
    }
}
