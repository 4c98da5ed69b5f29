use crate::cue::error::CueResult;
use crate::cue::msf;
use std::path::PathBuf;

pub const UNKNOWN_TITLE: &str = "Unknown";
pub const DEFAULT_START_TIME: &str = "00:00:00";

#[derive(Debug, Clone)]
pub struct CueSheet {
    /// Lines preceding the first TRACK, trimmed and in file order
    pub header: Vec<String>,
    pub tracks: Vec<Track>,
    pub path: PathBuf,
}

impl CueSheet {
    /// First track carrying the given CUE track number.
    pub fn track(&self, number: u32) -> Option<&Track> {
        self.tracks.iter().find(|track| track.number == number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub number: u32,
    pub title: String,
    /// Raw `mm:ss:ff` value of the track's `INDEX 01`
    pub start_time: String,
    /// Every line of the track block after its TRACK line, including TITLE and INDEX
    pub metadata: Vec<String>,
}

impl Track {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            title: UNKNOWN_TITLE.to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            metadata: Vec::new(),
        }
    }

    pub fn seconds(&self) -> CueResult<f64> {
        msf::to_seconds(&self.start_time)
    }
}
