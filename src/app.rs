use std::path::PathBuf;

use crate::browser::BrowserState;
use crate::fs::operations;
use crate::theme::ThemeColors;

/// The kind of dialog being displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    Error { message: String },
}

/// Application mode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Navigating the listing.
    #[default]
    Normal,
    /// Typing a filter; printable keys edit it instead of navigating.
    FilterInput,
    /// A modal dialog is up; any key dismisses it.
    Dialog(DialogKind),
}

/// Main application state.
pub struct App {
    pub browser: BrowserState,
    pub mode: AppMode,
    pub theme: ThemeColors,
    pub should_quit: bool,
    /// Transient feedback line; cleared by the next key press.
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App browsing `start_dir` with playlist `target_dir`.
    pub fn new(start_dir: PathBuf, target_dir: PathBuf, theme: ThemeColors) -> Self {
        Self {
            browser: BrowserState::new(start_dir, target_dir),
            mode: AppMode::default(),
            theme,
            should_quit: false,
            status_message: None,
        }
    }

    /// Re-read the directory listing and playlist membership from disk.
    ///
    /// Called at the top of every loop iteration so external filesystem
    /// changes show up on the next frame.
    pub fn refresh(&mut self) {
        self.browser.refresh();
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open a dialog of the given kind.
    pub fn open_dialog(&mut self, kind: DialogKind) {
        self.mode = AppMode::Dialog(kind);
    }

    /// Close the current dialog and return to normal mode.
    pub fn close_dialog(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Set the transient status line.
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Drop the transient status line.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Move selection down by one row.
    pub fn select_next(&mut self) {
        self.browser.select_next();
    }

    /// Move selection up by one row.
    pub fn select_previous(&mut self) {
        self.browser.select_previous();
    }

    /// Open the selected entry: descend into directories, hand files to the
    /// default application.
    ///
    /// The `..` row ascends with the same boundary check as `b`, so the
    /// browser can never climb above the start directory.
    pub fn activate_selected(&mut self) {
        let entry = match self.browser.selected_entry() {
            Some(e) => e.clone(),
            None => return,
        };
        if self.browser.parent_selected() {
            self.browser.ascend();
        } else if entry.is_dir {
            self.browser.descend(&entry.name);
        } else if entry.is_file {
            operations::open_detached(&self.browser.current_dir.join(&entry.name));
        }
    }

    /// Move up one level, bounded at the start directory.
    pub fn ascend(&mut self) {
        self.browser.ascend();
    }

    /// Copy the selected file into the playlist directory.
    ///
    /// Directories (including `..`) are silently ignored. Success leaves the
    /// browser state untouched apart from the status line; failure raises a
    /// modal dialog and also leaves the browser state untouched.
    pub fn copy_selected(&mut self) {
        let entry = match self.browser.selected_entry() {
            Some(e) => e.clone(),
            None => return,
        };
        if !entry.is_file {
            return;
        }
        let src = self.browser.current_dir.join(&entry.name);
        match operations::copy_into(&src, &self.browser.target_dir) {
            Ok(_) => self.set_status_message(format!("Copied {} to playlist", entry.name)),
            Err(e) => self.open_dialog(DialogKind::Error {
                message: format!("Error copying {}: {}", entry.name, e),
            }),
        }
    }

    /// Enter filter-input mode with a fresh filter.
    pub fn begin_filter(&mut self) {
        self.mode = AppMode::FilterInput;
        self.browser.begin_filter();
    }

    /// Append a typed character to the filter being edited.
    pub fn filter_input_char(&mut self, c: char) {
        self.browser.filter_push(c);
    }

    /// Delete the last character of the filter being edited.
    pub fn filter_backspace(&mut self) {
        self.browser.filter_pop();
    }

    /// Commit the filter being edited and return to normal mode.
    pub fn commit_filter(&mut self) {
        self.mode = AppMode::Normal;
        self.browser.commit_filter();
    }

    /// Escape in normal mode: drop a committed filter, if any.
    pub fn dismiss_filter(&mut self) {
        if self.browser.filter_active || !self.browser.filter_text.is_empty() {
            self.browser.clear_filter();
        }
    }
}
