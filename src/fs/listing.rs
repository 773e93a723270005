use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Name of the synthetic parent entry prepended to every listing.
pub const PARENT_ENTRY: &str = "..";

/// One row of a directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    pub is_file: bool,
}

impl Entry {
    /// Build an entry for `name` inside `dir`, classifying it on disk.
    ///
    /// Classification follows symlinks; a broken symlink is neither a
    /// directory nor a file and can only be navigated past.
    fn classify(dir: &Path, name: String) -> Self {
        let path = dir.join(&name);
        Self {
            is_dir: path.is_dir(),
            is_file: path.is_file(),
            name,
        }
    }
}

/// Snapshot the entries of `dir`: names in byte order with `..` prepended.
///
/// An unreadable directory degrades to a listing holding only the parent
/// entry; browsing continues.
pub fn read_listing(dir: &Path) -> Vec<Entry> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();

    let mut out = Vec::with_capacity(names.len() + 1);
    out.push(Entry {
        name: PARENT_ENTRY.to_string(),
        is_dir: true,
        is_file: false,
    });
    for name in names {
        out.push(Entry::classify(dir, name));
    }
    out
}

/// Filenames currently present in the playlist directory.
///
/// A missing or unreadable target yields an empty set; membership is only
/// ever used to decorate the listing.
pub fn playlist_names(target_dir: &Path) -> HashSet<String> {
    match fs::read_dir(target_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => HashSet::new(),
    }
}
