use std::path::Path;

use csv::WriterBuilder;

use crate::error::ExtractError;
use crate::model::Table;

pub(crate) fn write_csv(path: &Path, table: &Table, delimiter: u8) -> Result<(), ExtractError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_csv_to_string(table: &Table, delimiter: u8) -> Result<String, ExtractError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(Vec::<u8>::new());
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|error| ExtractError::Csv(error.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::write_csv_to_string;
    use crate::model::Table;

    fn table(rows: Vec<Vec<&str>>) -> Table {
        Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn accepts_rows_with_differing_field_counts() {
        let csv = write_csv_to_string(&table(vec![vec!["a", "b", "c"], vec!["x"]]), b',')
            .expect("ragged rows should serialize");
        assert_eq!(csv, "a,b,c\nx\n");
    }

    #[test]
    fn quotes_fields_containing_the_delimiter() {
        let csv = write_csv_to_string(&table(vec![vec!["a,b", "c"]]), b',')
            .expect("embedded delimiter should serialize");
        assert_eq!(csv, "\"a,b\",c\n");
    }

    #[test]
    fn round_trips_through_a_standard_reader() {
        let source = table(vec![vec!["he said \"hi\"", "x,y"], vec!["plain"]]);
        let csv = write_csv_to_string(&source, b',').expect("table should serialize");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv.as_bytes());
        let parsed = reader
            .records()
            .map(|record| {
                record
                    .expect("record should parse")
                    .iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        assert_eq!(parsed, source.rows);
    }
}
