use std::collections::HashSet;
use std::path::PathBuf;

use crate::fs::listing::{self, Entry, PARENT_ENTRY};
use crate::fs::operations;

/// Rows kept between the selection and the window edge before the window
/// shifts.
pub const SCROLL_MARGIN: usize = 5;

/// Browser state: where we are, what is displayed, and how it is filtered.
///
/// `entries` and `playlist` are snapshots re-read from disk every loop
/// iteration; nothing here is cached across frames. `items` is the displayed
/// view derived from `entries` plus the filter.
pub struct BrowserState {
    /// Directory the browser was launched from; upward boundary.
    pub start_dir: PathBuf,
    /// Invariant: `start_dir` itself or a descendant of it.
    pub current_dir: PathBuf,
    /// Playlist destination directory.
    pub target_dir: PathBuf,
    /// Raw listing of `current_dir`: `..` first, then byte-sorted names.
    pub entries: Vec<Entry>,
    /// Displayed view: `entries` after the keyword filter.
    pub items: Vec<Entry>,
    /// Filenames currently present in `target_dir`.
    pub playlist: HashSet<String>,
    /// Index into `items`; 0 when `items` is empty.
    pub selected_index: usize,
    /// First visible row index into `items`.
    pub scroll_offset: usize,
    pub filter_text: String,
    /// Whether a two-character-or-longer filter is applied to the view.
    pub filter_active: bool,
}

/// Keep entries whose lowercased name contains every whitespace-separated
/// keyword of `filter_text`. Below two characters the filter is a no-op, so
/// a single keystroke never collapses the view. Input order is preserved.
pub fn filter_entries(entries: &[Entry], filter_text: &str) -> Vec<Entry> {
    if filter_text.chars().count() < 2 {
        return entries.to_vec();
    }
    let lowered = filter_text.to_lowercase();
    let keywords: Vec<&str> = lowered.split_whitespace().collect();
    entries
        .iter()
        .filter(|e| {
            let name = e.name.to_lowercase();
            keywords.iter().all(|k| name.contains(k))
        })
        .cloned()
        .collect()
}

impl BrowserState {
    /// Create a browser rooted at `start_dir` with an initial snapshot.
    ///
    /// `start_dir` must already be canonical; `current_dir` only ever moves
    /// through real child names or `parent()`, so containment checks stay
    /// component-exact.
    pub fn new(start_dir: PathBuf, target_dir: PathBuf) -> Self {
        let mut state = Self {
            current_dir: start_dir.clone(),
            start_dir,
            target_dir,
            entries: Vec::new(),
            items: Vec::new(),
            playlist: HashSet::new(),
            selected_index: 0,
            scroll_offset: 0,
            filter_text: String::new(),
            filter_active: false,
        };
        state.refresh();
        state
    }

    /// Re-read the listing and playlist membership from disk and rebuild the
    /// displayed view.
    pub fn refresh(&mut self) {
        self.entries = listing::read_listing(&self.current_dir);
        self.playlist = listing::playlist_names(&self.target_dir);
        self.apply_filter();
    }

    /// Rebuild `items` from `entries` and the filter state.
    ///
    /// Clamps the selection so it stays inside the (possibly smaller) view.
    pub fn apply_filter(&mut self) {
        self.items = if self.filter_active {
            filter_entries(&self.entries, &self.filter_text)
        } else {
            self.entries.clone()
        };
        if self.items.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// The entry under the cursor, if the view is non-empty.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.items.get(self.selected_index)
    }

    /// Whether `entry` should carry the playlist membership mark.
    ///
    /// Only files are marked; a directory sharing a playlist filename is not.
    pub fn is_marked(&self, entry: &Entry) -> bool {
        entry.is_file && self.playlist.contains(&entry.name)
    }

    /// Move the selection down one row; clamps at the bottom, never wraps.
    pub fn select_next(&mut self) {
        let len = self.items.len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    /// Move the selection up one row; clamps at the top, never wraps.
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Enter the named subdirectory of `current_dir`.
    ///
    /// The filter and view position are reset: the indices were positions
    /// into a view that no longer exists.
    pub fn descend(&mut self, name: &str) {
        self.current_dir = self.current_dir.join(name);
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.filter_text.clear();
        self.filter_active = false;
        self.refresh();
    }

    /// Move up one level if the parent is still inside the start directory.
    ///
    /// On ascent the filter is cleared and the selection is restored to the
    /// directory just departed (index 0 if it vanished), so coming back up
    /// lands on the folder you entered from. Returns whether the ascent
    /// happened.
    pub fn ascend(&mut self) -> bool {
        let parent = match self.current_dir.parent() {
            Some(p) => p.to_path_buf(),
            None => return false,
        };
        if !operations::is_within(&parent, &self.start_dir) {
            return false;
        }
        let departed = self
            .current_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        self.current_dir = parent;
        self.filter_text.clear();
        self.filter_active = false;
        self.refresh();
        self.selected_index = departed
            .and_then(|name| self.items.iter().position(|e| e.name == name))
            .unwrap_or(0);
        self.scroll_offset = 0;
        true
    }

    /// Whether the selected entry is the synthetic `..` row.
    pub fn parent_selected(&self) -> bool {
        self.selected_entry()
            .is_some_and(|e| e.name == PARENT_ENTRY)
    }

    /// Begin editing a fresh filter.
    pub fn begin_filter(&mut self) {
        self.filter_text.clear();
        self.filter_active = false;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.apply_filter();
    }

    /// Append one typed character to the filter.
    pub fn filter_push(&mut self, c: char) {
        self.filter_text.push(c);
        self.filter_edited();
    }

    /// Remove the last character of the filter.
    pub fn filter_pop(&mut self) {
        self.filter_text.pop();
        self.filter_edited();
    }

    fn filter_edited(&mut self) {
        self.filter_active = self.filter_text.chars().count() >= 2;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.apply_filter();
    }

    /// Commit the filter being edited.
    ///
    /// A filter below the two-character threshold is dropped entirely; the
    /// selection is clamped into the committed view and the window rewinds
    /// to the top.
    pub fn commit_filter(&mut self) {
        self.filter_active = self.filter_text.chars().count() >= 2;
        if !self.filter_active {
            self.filter_text.clear();
        }
        self.scroll_offset = 0;
        self.apply_filter();
    }

    /// Drop any filter and rewind the view to the top.
    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
        self.filter_active = false;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.apply_filter();
    }

    /// Keep the selection inside a margin-bounded window of the viewport.
    ///
    /// Runs once before every draw. The margin shrinks on viewports smaller
    /// than `2 * SCROLL_MARGIN + 1` rows so the two window tests cannot
    /// disagree and the adjustment stays idempotent.
    pub fn update_scroll(&mut self, max_visible: usize) {
        if max_visible == 0 {
            return;
        }
        let total = self.items.len();
        let max_offset = total.saturating_sub(max_visible);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }

        let margin = SCROLL_MARGIN.min(max_visible.saturating_sub(1) / 2);
        if self.selected_index < self.scroll_offset + margin {
            self.scroll_offset = self.selected_index.saturating_sub(margin);
        } else if self.selected_index + margin >= self.scroll_offset + max_visible {
            self.scroll_offset = (self.selected_index + margin + 1 - max_visible).min(max_offset);
        }
    }
}
