use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CueSheet, Track, UNKNOWN_TITLE};
use crate::util::decode_text;
use log::debug;
use std::path::{Path, PathBuf};

pub mod error;
pub mod models;
pub mod msf;
pub mod writer;

pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(&self) -> CueResult<CueSheet> {
        let data = std::fs::read(&self.cue_path)?;
        let text = decode_text(&data);

        Self::parse_str(&text, &self.cue_path)
    }

    pub fn parse_str(text: &str, cue_path: impl AsRef<Path>) -> CueResult<CueSheet> {
        let cue_path = cue_path.as_ref();
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(CueError::Empty(cue_path.to_path_buf()));
        }

        let file_count = lines.iter().filter(|line| line.starts_with("FILE ")).count();
        if file_count != 1 {
            return Err(CueError::FileCount(file_count));
        }

        let mut cue_sheet = CueSheet {
            header: Vec::new(),
            tracks: Vec::new(),
            path: cue_path.to_path_buf(),
        };

        for line in lines {
            if line.starts_with("TRACK") {
                let number = Self::parse_track_number(line)?;
                cue_sheet.tracks.push(Track::new(number));
                continue;
            }

            let Some(track) = cue_sheet.tracks.last_mut() else {
                cue_sheet.header.push(line.to_string());
                continue;
            };

            if line.starts_with("INDEX 01") {
                if let Some(position) = line.split_whitespace().last() {
                    track.start_time = position.to_string();
                }
            } else if line.starts_with("TITLE") {
                track.title = Self::parse_title(line);
            }

            track.metadata.push(line.to_string());
        }

        debug!(
            "Parsed {:?}: {} header lines, {} tracks",
            cue_path,
            cue_sheet.header.len(),
            cue_sheet.tracks.len()
        );

        Ok(cue_sheet)
    }

    fn parse_track_number(line: &str) -> CueResult<u32> {
        match line.split_whitespace().nth(1) {
            Some(token) => token
                .parse()
                .map_err(|_| CueError::InvalidTrackNumber(token.to_string())),
            None => Ok(0),
        }
    }

    fn parse_title(line: &str) -> String {
        let Some((_, value)) = line.split_once(' ') else {
            return UNKNOWN_TITLE.to_string();
        };

        value
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(value)
            .to_string()
    }
}
