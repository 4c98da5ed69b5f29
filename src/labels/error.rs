use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Invalid seconds value on label line {line}: {value}")]
    InvalidSeconds { line: usize, value: String },
}

pub type LabelResult<T> = Result<T, LabelError>;
