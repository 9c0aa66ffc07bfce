//! Utilities for input path collection.

use std::path::{Path, PathBuf};

/// Resolve the input arguments into the list of files to process.
///
/// Each argument is taken literally when it exists on disk. Otherwise it
/// is expanded as a glob pattern. An argument that yields nothing, either
/// because it matches no file or because it is not a valid pattern, is
/// kept as given so the batch can report that file as unreadable.
pub fn collect_input_paths<T>(inputs: T) -> Vec<PathBuf>
where
    T: IntoIterator,
    T::Item: AsRef<Path>,
{
    let mut resolved_paths = Vec::new();

    for input in inputs.into_iter() {
        let input = input.as_ref();

        if input.exists() {
            resolved_paths.push(input.to_path_buf());
            continue;
        }

        let matches = match input.to_str() {
            Some(pattern) => collect_paths_for_pattern(pattern),
            None => Vec::new(),
        };

        if matches.is_empty() {
            resolved_paths.push(input.to_path_buf());
        } else {
            resolved_paths.extend(matches);
        }
    }

    resolved_paths
}

/// Expand a single glob pattern into filesystem paths.
///
/// Invalid patterns and unreadable entries are logged and skipped.
///
/// Pattern examples:
/// - `"*.pdf"`
/// - `"./downloads/**/*.pdf"`
fn collect_paths_for_pattern(pattern: &str) -> Vec<PathBuf> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(err) => {
            log::warn!("'{pattern}' is not a valid file pattern: {err}");
            return Vec::new();
        }
    };

    paths
        .filter_map(|entry| {
            entry
                .map_err(|err| log::warn!("skipping unreadable match of '{pattern}': {err}"))
                .ok()
        })
        .collect()
}
