use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::app::{AppMode, DialogKind};
use crate::theme::ThemeColors;

/// Dialog widget that renders a centered modal overlay.
pub struct DialogWidget<'a> {
    mode: &'a AppMode,
    theme: &'a ThemeColors,
}

impl<'a> DialogWidget<'a> {
    pub fn new(mode: &'a AppMode, theme: &'a ThemeColors) -> Self {
        Self { mode, theme }
    }

    /// Calculate a centered rectangle within the given area.
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let w = width.min(area.width);
        let h = height.min(area.height);
        Rect::new(x, y, w, h)
    }
}

impl Widget for DialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = match &self.mode {
            AppMode::Dialog(kind) => kind,
            _ => return,
        };

        match kind {
            DialogKind::Error { message } => {
                render_error_dialog(message, self.theme, area, buf);
            }
        }
    }
}

fn render_error_dialog(message: &str, theme: &ThemeColors, area: Rect, buf: &mut Buffer) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    let dialog_width = (message.chars().count() as u16 + 6)
        .max(30)
        .min(area.width.saturating_sub(4));
    let dialog_height = 6;
    let rect = DialogWidget::centered_rect(dialog_width, dialog_height, area);

    Clear.render(rect, buf);

    let block = Block::default()
        .title(" Copy failed ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dialog_border_fg))
        .style(Style::default().bg(theme.dialog_bg))
        .padding(Padding::horizontal(1));

    let inner = block.inner(rect);
    block.render(rect, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // Message body, wrapped, leaving the last row for the hint.
    let body = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(1),
    );
    Paragraph::new(message)
        .style(Style::default().fg(theme.error_fg))
        .wrap(Wrap { trim: true })
        .render(body, buf);

    let hint = "[Any key] Dismiss";
    let hint_style = Style::default().fg(theme.dim_fg).add_modifier(Modifier::DIM);
    let hint_line = Line::from(Span::styled(hint, hint_style));
    buf.set_line(inner.x, inner.y + inner.height - 1, &hint_line, inner.width);
}
