use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, AppMode};
use crate::components::browser::BrowserWidget;
use crate::components::dialog::DialogWidget;
use crate::components::status_bar::StatusBarWidget;

/// Render one frame: header, filter line, entry list, status bar, and any
/// modal dialog on top.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(1), // current directory
        Constraint::Length(1), // filter line
        Constraint::Min(0),    // entry list
        Constraint::Length(1), // status bar
    ])
    .split(area);

    // Keep the selection visible before anything is drawn.
    app.browser.update_scroll(chunks[2].height as usize);

    let header = format!("Current directory: {}", app.browser.current_dir.display());
    frame.render_widget(
        Paragraph::new(header).style(Style::default().fg(app.theme.header_fg)),
        chunks[0],
    );

    let filter_line = match app.mode {
        AppMode::FilterInput => format!("Filter: {}", app.browser.filter_text),
        _ if app.browser.filter_active => {
            format!("Filter active (ESC to clear): {}", app.browser.filter_text)
        }
        _ => String::new(),
    };
    frame.render_widget(
        Paragraph::new(filter_line).style(Style::default().fg(app.theme.filter_fg)),
        chunks[1],
    );

    frame.render_widget(BrowserWidget::new(&app.browser, &app.theme), chunks[2]);

    let mut status_bar = StatusBarWidget::new(&app.theme);
    if let Some(msg) = app.status_message.as_deref() {
        status_bar = status_bar.status_message(msg);
    }
    frame.render_widget(status_bar, chunks[3]);

    if matches!(app.mode, AppMode::Dialog(_)) {
        frame.render_widget(DialogWidget::new(&app.mode, &app.theme), area);
    }
}
