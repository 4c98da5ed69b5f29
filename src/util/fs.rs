use std::path::{Path, PathBuf};

/// Swaps the extension of `base_path` for `extension`. Unless `force` is set, an existing
/// file is never reused: `-1`, `-2`, ... is appended to the stem until a free path is found.
pub fn destination_path(base_path: &Path, extension: &str, force: bool) -> PathBuf {
    let target = base_path.with_extension(extension);
    if force || !target.exists() {
        return target;
    }

    let stem = base_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    (1u64..)
        .map(|count| base_path.with_file_name(format!("{stem}-{count}.{extension}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(target)
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
