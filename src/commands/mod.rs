use clap::Parser;
use std::path::PathBuf;

/// Converts a single-file .cue sheet to an Audacity label track (.txt) and back.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    author,
    version,
    about,
    long_about = "Converts a single-file .cue sheet to an Audacity label track (.txt) and back\n\nWhen converting labels to a .cue sheet, a .cue file next to the label file with the same name is used to restore the original metadata"
)]
pub struct Cli {
    /// Path to the .cue or .txt file
    #[arg(value_name = "FILEPATH")]
    pub filepath: PathBuf,

    /// Shift every timestamp by this many milliseconds
    #[arg(
        long,
        short = 's',
        value_name = "MS",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub shift: f64,

    /// Overwrite the output file if it already exists instead of picking a new name
    #[arg(long, short = 'f', default_value_t = false)]
    pub force: bool,

    /// Export region labels that span up to the next track (.cue input only)
    #[arg(long, short = 'r', default_value_t = false)]
    pub region: bool,
}

impl Cli {
    pub fn shift_seconds(&self) -> f64 {
        self.shift / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["cue-label-converter", "album.cue"]).unwrap();
        assert_eq!(cli.filepath, PathBuf::from("album.cue"));
        assert_eq!(cli.shift, 0.0);
        assert!(!cli.force);
        assert!(!cli.region);
    }

    #[test]
    fn parses_flags_and_negative_shift() {
        let cli = Cli::try_parse_from([
            "cue-label-converter",
            "labels.txt",
            "--shift",
            "-250",
            "--force",
            "-r",
        ])
        .unwrap();
        assert_eq!(cli.shift_seconds(), -0.25);
        assert!(cli.force);
        assert!(cli.region);
    }

    #[test]
    fn requires_filepath() {
        assert!(Cli::try_parse_from(["cue-label-converter"]).is_err());
    }
}
