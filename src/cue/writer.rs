use crate::cue::models::CueSheet;
use crate::cue::msf;
use crate::error::ConversionWarning;
use crate::labels::LabelRow;
use std::io::{self, Write};

const TRACK_INDENT: &str = "  ";
const TAG_INDENT: &str = "    ";

/// Writes a CUE sheet for `rows`. Header and per-track tags are recovered from `reference`
/// where it has them; TITLE and INDEX are always regenerated from the labels.
/// `audio_file_name` is only used when no reference header is available.
pub fn write_cue(
    writer: &mut impl Write,
    rows: &[LabelRow],
    reference: Option<&CueSheet>,
    shift: f64,
    audio_file_name: &str,
    warnings: &mut Vec<ConversionWarning>,
) -> io::Result<()> {
    match reference.filter(|sheet| !sheet.header.is_empty()) {
        Some(sheet) => {
            for line in &sheet.header {
                writeln!(writer, "{line}")?;
            }
        }
        None => {
            writeln!(writer, "PERFORMER \"Unknown\"")?;
            writeln!(writer, "TITLE \"Converted from Labels\"")?;
            writeln!(writer, "FILE \"{audio_file_name}\" WAVE")?;
        }
    }

    for (i, row) in rows.iter().enumerate() {
        let number = i + 1;
        let title = sanitize_title(&row.title);
        if row.title.contains('"') {
            warnings.push(ConversionWarning::QuotesSanitized { track: number });
        }

        writeln!(writer, "{TRACK_INDENT}TRACK {number:02} AUDIO")?;

        match reference.and_then(|sheet| sheet.track(number as u32)) {
            Some(track) => {
                for line in &track.metadata {
                    if line.starts_with("TITLE") {
                        writeln!(writer, "{TAG_INDENT}TITLE \"{title}\"")?;
                    } else if !line.starts_with("INDEX") {
                        writeln!(writer, "{TAG_INDENT}{line}")?;
                    }
                }
            }
            None => writeln!(writer, "{TAG_INDENT}TITLE \"{title}\"")?,
        }

        writeln!(writer, "{TAG_INDENT}INDEX 01 {}", msf::to_cue(row.start + shift))?;
    }

    writer.flush()
}

/// Compares each label title with the reference track of the same position.
pub fn compare_titles(reference: &CueSheet, rows: &[LabelRow]) -> Vec<ConversionWarning> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let number = i + 1;
            let track = reference.track(number as u32)?;
            let label = row.title.trim();

            (!track.title.is_empty() && track.title != label).then(|| {
                ConversionWarning::TitleMismatch {
                    track: number,
                    cue: track.title.clone(),
                    label: label.to_string(),
                }
            })
        })
        .collect()
}

/// CUE titles are double-quoted, so embedded double quotes become single quotes.
fn sanitize_title(title: &str) -> String {
    title.trim().replace('"', "'")
}
