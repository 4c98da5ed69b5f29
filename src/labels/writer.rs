use crate::cue::error::CueResult;
use crate::cue::models::CueSheet;
use crate::labels::LabelRow;
use std::io::Write;

/// Builds one label per track, shifted by `shift` seconds. Point labels end where they start;
/// region labels end at the next track's start, and the last one collapses to a point.
pub fn label_rows(sheet: &CueSheet, shift: f64, region: bool) -> CueResult<Vec<LabelRow>> {
    let starts = sheet
        .tracks
        .iter()
        .map(|track| track.seconds().map(|seconds| seconds + shift))
        .collect::<CueResult<Vec<f64>>>()?;

    Ok(sheet
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let start = starts[i];
            let end = match starts.get(i + 1) {
                Some(&next) if region => next,
                _ => start,
            };

            LabelRow {
                start,
                end,
                title: track.title.clone(),
            }
        })
        .collect())
}

pub fn write_labels<'a>(
    writer: &mut impl Write,
    rows: impl IntoIterator<Item = &'a LabelRow>,
) -> std::io::Result<()> {
    for row in rows {
        writeln!(writer, "{:.6}\t{:.6}\t{}", row.start, row.end, row.title)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::CueParser;

    const SHEET: &str = "FILE \"a.wav\" WAVE\nTRACK 01 AUDIO\nTITLE \"Intro\"\nINDEX 01 00:00:00\nTRACK 02 AUDIO\nTITLE \"Verse\"\nINDEX 01 03:30:00\nTRACK 03 AUDIO\nTITLE \"Outro\"\nINDEX 01 05:00:37\n";

    fn render(rows: &[LabelRow]) -> String {
        let mut out = Vec::new();
        write_labels(&mut out, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn emits_point_labels() {
        let text = "FILE \"a.wav\" WAVE\nTRACK 01 AUDIO\nTITLE \"Intro\"\nINDEX 01 00:00:00\nTRACK 02 AUDIO\nTITLE \"Verse\"\nINDEX 01 03:30:00\n";
        let sheet = CueParser::parse_str(text, "a.cue").unwrap();
        let rows = label_rows(&sheet, 0.0, false).unwrap();

        assert_eq!(
            render(&rows),
            "0.000000\t0.000000\tIntro\n210.000000\t210.000000\tVerse\n"
        );
    }

    #[test]
    fn point_labels_have_equal_start_and_end() {
        let sheet = CueParser::parse_str(SHEET, "a.cue").unwrap();
        let rows = label_rows(&sheet, 0.25, false).unwrap();
        assert!(rows.iter().all(|row| row.start == row.end));
    }

    #[test]
    fn region_labels_end_at_next_start() {
        let sheet = CueParser::parse_str(SHEET, "a.cue").unwrap();
        let rows = label_rows(&sheet, 0.0, true).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].end, rows[1].start);
        assert_eq!(rows[1].end, rows[2].start);
        assert_eq!(rows[2].end, rows[2].start);
    }

    #[test]
    fn shift_moves_every_timestamp() {
        let sheet = CueParser::parse_str(SHEET, "a.cue").unwrap();
        let rows = label_rows(&sheet, 1.0, true).unwrap();

        assert_eq!(rows[0].start, 1.0);
        assert_eq!(rows[1].start, 211.0);
        assert_eq!(rows[0].end, 211.0);
        assert!(render(&rows[..1]).starts_with("1.000000\t211.000000\tIntro"));
    }

    #[test]
    fn malformed_start_time_fails() {
        let text = "FILE \"a.wav\" WAVE\nTRACK 01 AUDIO\nINDEX 01 0:00\n";
        let sheet = CueParser::parse_str(text, "a.cue").unwrap();
        assert!(label_rows(&sheet, 0.0, false).is_err());
    }
}
