use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<walkdir::Error>,
}

/// Recursively collects files at or under `paths` whose extension is one of
/// `exts` (with or without the leading `.`).
///
/// A single file argument is always included, whatever its extension.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    exts: &[String],
) -> DiscoveredFiles {
    let exts: HashSet<&str> =
        exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = DiscoveredFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:#?}.");
                        continue;
                    }
                    if has_graphql_ext(entry_path, &exts) {
                        log::trace!("Found file at {entry_path:#?}.");
                        found.file_paths.push(entry_path.to_path_buf());
                    } else {
                        found.num_skipped += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(e);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && let [single_path] = paths
        && single_path.is_file() {
        log::warn!(
            "Proceeding to parse {single_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(single_path.clone());
    }

    found.file_paths.sort();
    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}

fn has_graphql_ext(path: &Path, exts: &HashSet<&str>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| exts.contains(ext))
}
