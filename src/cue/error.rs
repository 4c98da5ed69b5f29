use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("File {0} is empty or unreadable")]
    Empty(PathBuf),

    #[error("Unsupported cue format: expected 1 FILE line, found {0}")]
    FileCount(usize),

    #[error("Invalid track number: {0}")]
    InvalidTrackNumber(String),

    #[error("Malformed CUE timestamp: {0}")]
    InvalidMSFFormat(String),
}

pub type CueResult<T> = Result<T, CueError>;
