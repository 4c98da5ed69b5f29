use crate::commands::Cli;
use crate::cue::CueParser;
use crate::cue::writer::{compare_titles, write_cue};
use crate::error::{ConversionWarning, ConverterError, ConverterResult};
use crate::labels::reader::read_labels;
use crate::labels::writer::{label_rows, write_labels};
use crate::util::fs::{destination_path, has_extension};
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const CUE_EXTENSION: &str = "cue";
pub const LABEL_EXTENSION: &str = "txt";
pub const AUDIO_EXTENSION: &str = "wav";

/// Runs the conversion selected by the input's extension and returns the written path.
pub fn convert(cli: &Cli) -> ConverterResult<PathBuf> {
    let input = cli.filepath.as_path();
    if !input.exists() {
        return Err(ConverterError::InputNotFound(input.to_path_buf()));
    }

    let output = if has_extension(input, CUE_EXTENSION) {
        cue_to_labels(input, cli.shift_seconds(), cli.region, cli.force)?
    } else if has_extension(input, LABEL_EXTENSION) {
        if cli.region {
            debug!("--region only applies to .cue input, ignoring it");
        }
        labels_to_cue(input, cli.shift_seconds(), cli.force)?
    } else {
        return Err(ConverterError::UnsupportedExtension(input.to_path_buf()));
    };

    info!("Saved: {}", output.display());

    Ok(output)
}

pub fn cue_to_labels(
    cue_path: &Path,
    shift: f64,
    region: bool,
    force: bool,
) -> ConverterResult<PathBuf> {
    debug!("Parsing CUE file: {cue_path:?}");
    let sheet = CueParser::new(cue_path).parse()?;
    debug!("Found {} tracks in {:?}", sheet.tracks.len(), sheet.path);
    let rows = label_rows(&sheet, shift, region)?;

    let output_path = destination_path(cue_path, LABEL_EXTENSION, force);
    debug!("Writing {} labels to {output_path:?}", rows.len());

    let mut writer = BufWriter::new(File::create(&output_path)?);
    write_labels(&mut writer, &rows)?;

    Ok(output_path)
}

pub fn labels_to_cue(label_path: &Path, shift: f64, force: bool) -> ConverterResult<PathBuf> {
    let mut warnings = Vec::new();

    let rows = read_labels(label_path, &mut warnings)?;
    report(&mut warnings);

    let reference_path = label_path.with_extension(CUE_EXTENSION);
    let reference = if reference_path.exists() {
        debug!("Loading reference CUE file: {reference_path:?}");
        Some(CueParser::new(&reference_path).parse()?)
    } else {
        debug!("No reference CUE file at {reference_path:?}, writing minimal metadata");
        None
    };

    if let Some(sheet) = &reference {
        warnings.extend(compare_titles(sheet, &rows));
        report(&mut warnings);
    }

    let audio_file_name = label_path
        .with_extension(AUDIO_EXTENSION)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let output_path = destination_path(label_path, CUE_EXTENSION, force);
    debug!("Writing {} tracks to {output_path:?}", rows.len());

    let mut writer = BufWriter::new(File::create(&output_path)?);
    let written = write_cue(
        &mut writer,
        &rows,
        reference.as_ref(),
        shift,
        &audio_file_name,
        &mut warnings,
    );
    report(&mut warnings);
    written?;

    Ok(output_path)
}

fn report(warnings: &mut Vec<ConversionWarning>) {
    for warning in warnings.drain(..) {
        warn!("{warning}");
    }
}
