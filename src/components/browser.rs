use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::browser::BrowserState;
use crate::fs::listing::PARENT_ENTRY;
use crate::theme::ThemeColors;

/// Widget that renders the visible slice of the entry list.
///
/// Each row is `<selection prefix><membership mark><name>`: `> ` for the
/// selected row, `* ` for files already present in the playlist.
pub struct BrowserWidget<'a> {
    browser: &'a BrowserState,
    theme: &'a ThemeColors,
}

impl<'a> BrowserWidget<'a> {
    pub fn new(browser: &'a BrowserState, theme: &'a ThemeColors) -> Self {
        Self { browser, theme }
    }

    fn row_style(&self, idx: usize, is_dir: bool, is_marked: bool, is_parent: bool) -> Style {
        if idx == self.browser.selected_index {
            Style::default()
                .bg(self.theme.list_selected_bg)
                .fg(self.theme.list_selected_fg)
                .add_modifier(Modifier::BOLD)
        } else if is_parent {
            Style::default().fg(self.theme.list_parent_fg)
        } else if is_dir {
            Style::default()
                .fg(self.theme.list_dir_fg)
                .add_modifier(Modifier::BOLD)
        } else if is_marked {
            Style::default().fg(self.theme.list_marked_fg)
        } else {
            Style::default().fg(self.theme.list_file_fg)
        }
    }
}

impl Widget for BrowserWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let items = &self.browser.items;
        let visible_height = area.height as usize;
        let max_width = area.width as usize;
        let scroll = self.browser.scroll_offset;

        let visible_items = items.iter().enumerate().skip(scroll).take(visible_height);

        for (row, (idx, entry)) in visible_items.enumerate() {
            let y = area.y + row as u16;

            let is_marked = self.browser.is_marked(entry);
            let is_parent = entry.name == PARENT_ENTRY;
            let prefix = if idx == self.browser.selected_index {
                "> "
            } else {
                "  "
            };
            let mark = if is_marked { "* " } else { "  " };

            // Truncate by characters, never by bytes: narrow viewports must
            // not split a multibyte name.
            let text: String = format!("{}{}{}", prefix, mark, entry.name)
                .chars()
                .take(max_width)
                .collect();

            let style = self.row_style(idx, entry.is_dir, is_marked, is_parent);
            let line = Line::from(Span::styled(text, style));
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
