//! Repository path helpers.
//!
//! Repository paths are `/`-separated strings independent of the host
//! filesystem, so `std::path` is deliberately not used here.

pub const SEPARATOR: char = '/';

/// Join a folder path and a filename pattern with exactly one separator.
///
/// Trailing separators on `directory` and leading separators on `filename`
/// are collapsed; separators inside either operand are left untouched.
pub fn concat(directory: &str, filename: &str) -> String {
    let directory = directory.trim_end_matches(SEPARATOR);
    let filename = filename.trim_start_matches(SEPARATOR);

    let mut joined = String::with_capacity(directory.len() + filename.len() + 1);
    joined.push_str(directory);
    joined.push(SEPARATOR);
    joined.push_str(filename);
    joined
}

/// Path portion of `path` with neither the leading prefix nor a trailing separator.
///
/// `"/public/reports/job.*"` yields `"public/reports"`; a bare name yields `""`.
pub fn path_no_end_separator(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(index) => path[..index].trim_start_matches(SEPARATOR).trim_end_matches(SEPARATOR),
        None => "",
    }
}

/// True when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Normalize an absolute folder path by dropping trailing separators.
///
/// Returns `None` when the path is not absolute. The root stays `/`.
pub fn normalize_folder_path(path: &str) -> Option<String> {
    let path = path.trim();
    if !path.starts_with(SEPARATOR) {
        return None;
    }
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() { Some(SEPARATOR.to_string()) } else { Some(trimmed.to_string()) }
}
