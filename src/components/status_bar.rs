use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// Bottom bar: key hints, replaced by a transient status message when set.
pub struct StatusBarWidget<'a> {
    theme: &'a ThemeColors,
    status_message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(theme: &'a ThemeColors) -> Self {
        Self {
            theme,
            status_message: None,
        }
    }

    pub fn status_message(mut self, msg: &'a str) -> Self {
        self.status_message = Some(msg);
        self
    }
}

/// Truncate to `width` characters, then pad with spaces to fill the bar.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;

        if let Some(msg) = self.status_message {
            let style = Style::default()
                .bg(self.theme.status_bg)
                .fg(self.theme.success_fg);
            let line = Line::from(Span::styled(fit(msg, width), style));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let key_hints = " j/k:move  o:open  b:up  c:copy  s:filter  q:quit ";
        let style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg)
            .add_modifier(Modifier::DIM);
        let line = Line::from(Span::styled(fit(key_hints, width), style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_theme;

    fn buffer_to_string(buf: &Buffer, area: Rect) -> String {
        let mut s = String::new();
        for x in area.x..area.x + area.width {
            s.push_str(buf.cell((x, area.y)).unwrap().symbol());
        }
        s
    }

    #[test]
    fn shows_key_hints_by_default() {
        let theme = dark_theme();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&theme).render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("c:copy"));
        assert!(content.contains("q:quit"));
    }

    #[test]
    fn status_message_replaces_hints() {
        let theme = dark_theme();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&theme)
            .status_message("Copied track.mp3 to playlist")
            .render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Copied track.mp3"));
        assert!(!content.contains("q:quit"));
    }

    #[test]
    fn long_message_is_truncated() {
        let theme = dark_theme();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&theme)
            .status_message("a message far longer than the bar")
            .render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert_eq!(content, "a message ");
    }

    #[test]
    fn zero_area_does_not_panic() {
        let theme = dark_theme();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&theme).render(area, &mut buf);
    }
}
