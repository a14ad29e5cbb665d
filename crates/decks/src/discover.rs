use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// One deck file found in the deck directory.
///
/// `name` is the file stem and doubles as the deck identifier the UI shows
/// and navigates with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    name: String,
    path: PathBuf,
}

impl DeckEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Scan `directory` for `.json` deck files, sorted by name.
///
/// Non-recursive: decks live directly in the directory. A missing directory
/// yields an empty list rather than an error so the app can start before any
/// decks exist.
///
/// # Errors
///
/// Returns the underlying `io::Error` when the directory exists but cannot
/// be read.
pub fn find_decks(directory: &Path) -> io::Result<Vec<DeckEntry>> {
    if !directory.is_dir() {
        log::debug!("deck directory {} does not exist", directory.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        entries.push(DeckEntry {
            name: stem.to_string_lossy().into_owned(),
            path: path.to_path_buf(),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!(
        "found {} deck(s) in {}",
        entries.len(),
        directory.display()
    );
    Ok(entries)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
