// See <https://manual.audacityteam.org/man/importing_and_exporting_labels.html> for details on the
// label track format.

pub mod error;
pub mod reader;
pub mod writer;

/// One row of a label track: start and end in seconds, then the label text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    pub start: f64,
    pub end: f64,
    pub title: String,
}

#[cfg(test)]
impl LabelRow {
    pub fn point(start: f64, title: impl Into<String>) -> Self {
        Self {
            start,
            end: start,
            title: title.into(),
        }
    }
}
