use crate::error::ConversionWarning;
use crate::labels::LabelRow;
use crate::labels::error::{LabelError, LabelResult};
use crate::util::decode_text;
use log::debug;
use std::path::Path;

/// Marks an Audacity spectral selection line, which belongs to the label above it.
const FREQUENCY_LINE_MARKER: &str = "\\";

pub fn read_labels(
    path: &Path,
    warnings: &mut Vec<ConversionWarning>,
) -> LabelResult<Vec<LabelRow>> {
    let data = std::fs::read(path)?;
    parse_labels(&decode_text(&data), warnings)
}

/// Parses tab-separated label text. Lines with fewer than three fields are dropped and
/// reported through `warnings`; an unparsable start value is fatal, an unparsable end
/// value falls back to the start.
pub fn parse_labels(
    text: &str,
    warnings: &mut Vec<ConversionWarning>,
) -> LabelResult<Vec<LabelRow>> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts[0] == FREQUENCY_LINE_MARKER {
            debug!("Ignoring frequency range on label line {line_number}");
            continue;
        }

        if parts.len() < 3 {
            warnings.push(ConversionWarning::MalformedLabel {
                line: line_number,
                content: line.to_string(),
            });
            continue;
        }

        let start = parse_seconds(parts[0], line_number)?;
        let end = parts[1].trim().parse().unwrap_or_else(|_| {
            debug!("Unreadable end value on label line {line_number}, using the start");
            start
        });

        rows.push(LabelRow {
            start,
            end,
            title: parts[2].to_string(),
        });
    }

    Ok(rows)
}

fn parse_seconds(value: &str, line: usize) -> LabelResult<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| LabelError::InvalidSeconds {
            line,
            value: value.to_string(),
        })
}
