use crate::cue::error::{CueError, CueResult};
use std::fmt;
use std::str::FromStr;

pub const FRAMES_PER_SECOND: u64 = 75;
pub const FRAMES_PER_MINUTE: u64 = 60 * FRAMES_PER_SECOND;

/// A CUE `mm:ss:ff` position. Fields are kept as written, so `seconds` may exceed 59
/// on hand-edited sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u64,
    pub seconds: u64,
    pub frames: u64,
}

impl Msf {
    /// Decomposes an absolute frame count. Always yields `seconds < 60` and `frames < 75`.
    pub fn from_frames(total: u64) -> Self {
        let minutes = total / FRAMES_PER_MINUTE;
        let rest = total % FRAMES_PER_MINUTE;

        Self {
            minutes,
            seconds: rest / FRAMES_PER_SECOND,
            frames: rest % FRAMES_PER_SECOND,
        }
    }

    /// Rounds to the nearest frame, ties to even. Negative and NaN input map to zero.
    pub fn from_seconds(seconds: f64) -> Self {
        let frames = (seconds.max(0.0) * FRAMES_PER_SECOND as f64).round_ties_even();
        Self::from_frames(frames as u64)
    }

    pub fn as_seconds(&self) -> f64 {
        self.minutes as f64 * 60.0
            + self.seconds as f64
            + self.frames as f64 / FRAMES_PER_SECOND as f64
    }
}

impl FromStr for Msf {
    type Err = CueError;

    fn from_str(msf_str: &str) -> CueResult<Self> {
        let parts: Vec<&str> = msf_str.split(':').collect();
        if parts.len() != 3 {
            return Err(CueError::InvalidMSFFormat(msf_str.to_string()));
        }

        let field = |part: &str| {
            part.parse::<u64>()
                .map_err(|_| CueError::InvalidMSFFormat(msf_str.to_string()))
        };

        Ok(Msf {
            minutes: field(parts[0])?,
            seconds: field(parts[1])?,
            frames: field(parts[2])?,
        })
    }
}

impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

/// Parses `mm:ss:ff` into fractional seconds.
pub fn to_seconds(start_time: &str) -> CueResult<f64> {
    Ok(start_time.parse::<Msf>()?.as_seconds())
}

/// Formats fractional seconds as `mm:ss:ff` through an integer frame count.
pub fn to_cue(seconds: f64) -> String {
    Msf::from_seconds(seconds).to_string()
}
