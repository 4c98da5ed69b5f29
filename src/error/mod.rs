use crate::cue::error::CueError;
use crate::labels::error::LabelError;
use std::fmt;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    LabelError(#[from] LabelError),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Unsupported input file, expected a .cue or .txt file: {0}")]
    UnsupportedExtension(PathBuf),
}

pub type ConverterResult<T> = result::Result<T, ConverterError>;

/// Problems that are reported to the user but never abort a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionWarning {
    MalformedLabel { line: usize, content: String },
    QuotesSanitized { track: usize },
    TitleMismatch {
        track: usize,
        cue: String,
        label: String,
    },
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::MalformedLabel { line, content } => {
                write!(f, "Skipping malformed label line {line}: {content:?}")
            }
            ConversionWarning::QuotesSanitized { track } => write!(
                f,
                "Track {track:02}: Double quotes in title sanitized to single quotes"
            ),
            ConversionWarning::TitleMismatch { track, cue, label } => write!(
                f,
                "Title mismatch Track {track:02}: CUE='{cue}', TXT='{label}'"
            ),
        }
    }
}
