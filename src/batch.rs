use crate::analyze;
use crate::error::{GaugeError, Result};
use crate::lexicon::Lexicon;
use crate::types::scoring::ScoreConfig;
use std::path::Path;

pub const SCORE_COLUMN: &str = "gpt_probability";

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOutcome {
    pub rows: usize,
    pub scored: usize,
    pub skipped: usize,
}

/// Score the named text column of a CSV file and write the same table with
/// a `gpt_probability` column appended. Row order and all other columns are
/// preserved. Rows too short to carry the text column are written through
/// with an empty score cell and counted as skipped.
pub fn score_csv(
    input: &Path,
    output: &Path,
    column: &str,
    lexicon: &Lexicon,
    config: &ScoreConfig,
) -> Result<BatchOutcome> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(input)?;

    let headers = reader.headers()?.clone();
    let column_index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| GaugeError::MissingColumn(column.to_string()))?;

    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(output)?;
    let mut out_headers = headers.clone();
    out_headers.push_field(SCORE_COLUMN);
    writer.write_record(&out_headers)?;

    let mut outcome = BatchOutcome::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let mut out = record.clone();
        match record.get(column_index) {
            Some(text) => {
                let probability = analyze::score(text, lexicon, config);
                out.push_field(&format!("{probability:.2}"));
                outcome.scored += 1;
            }
            None => {
                tracing::warn!(row, column, "row is missing the text column, left unscored");
                out.push_field("");
                outcome.skipped += 1;
            }
        }
        writer.write_record(&out)?;
        outcome.rows += 1;
    }
    writer.flush().map_err(GaugeError::Io)?;

    Ok(outcome)
}
