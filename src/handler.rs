use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppMode};

/// Handle a key event: map it to a transition for the current mode.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    app.clear_status();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.mode.clone() {
        AppMode::Normal => handle_normal(app, key),
        AppMode::FilterInput => handle_filter_input(app, key),
        AppMode::Dialog(_) => app.close_dialog(),
    }
}

fn handle_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('o') | KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('b') => app.ascend(),
        KeyCode::Char('c') => app.copy_selected(),
        KeyCode::Char('s') => app.begin_filter(),
        KeyCode::Esc => app.dismiss_filter(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_filter_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.commit_filter(),
        KeyCode::Backspace => app.filter_backspace(),
        KeyCode::Char(c) if is_plain(key.modifiers) && !c.is_control() => {
            app.filter_input_char(c)
        }
        _ => {}
    }
}

fn is_plain(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DialogKind;
    use crate::theme::dark_theme;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn setup_app() -> (TempDir, TempDir, App) {
        let start = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::create_dir(start.path().join("music")).unwrap();
        File::create(start.path().join("track.mp3")).unwrap();
        let app = App::new(
            start.path().canonicalize().unwrap(),
            target.path().to_path_buf(),
            dark_theme(),
        );
        (start, target, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn j_and_k_move_selection() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.browser.selected_index, 1);
        handle_key_event(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.browser.selected_index, 0);
    }

    #[test]
    fn q_quits() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let (_s, _t, mut app) = setup_app();
        app.begin_filter();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn s_enters_filter_mode_and_keys_edit_the_filter() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.mode, AppMode::FilterInput);
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        handle_key_event(&mut app, key(KeyCode::Char('u')));
        assert_eq!(app.browser.filter_text, "mu");
        assert!(app.browser.filter_active);
    }

    #[test]
    fn q_types_into_filter_instead_of_quitting() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.browser.filter_text, "q");
    }

    #[test]
    fn backspace_edits_filter() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert!(app.browser.filter_text.is_empty());
    }

    #[test]
    fn esc_commits_filter() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        handle_key_event(&mut app, key(KeyCode::Char('u')));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.browser.filter_active);
    }

    #[test]
    fn esc_in_normal_mode_clears_committed_filter() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        handle_key_event(&mut app, key(KeyCode::Char('u')));
        handle_key_event(&mut app, key(KeyCode::Esc));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.browser.filter_active);
        assert!(app.browser.filter_text.is_empty());
    }

    #[test]
    fn navigation_keys_are_ignored_while_filtering() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.browser.selected_index, 0);
        assert_eq!(app.mode, AppMode::FilterInput);
    }

    #[test]
    fn any_key_dismisses_dialog() {
        let (_s, _t, mut app) = setup_app();
        app.open_dialog(DialogKind::Error {
            message: "boom".to_string(),
        });
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn dialog_keys_do_not_leak_into_navigation() {
        let (_s, _t, mut app) = setup_app();
        app.open_dialog(DialogKind::Error {
            message: "boom".to_string(),
        });
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.browser.selected_index, 0);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let (_s, _t, mut app) = setup_app();
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.browser.selected_index, 0);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn key_press_clears_status_message() {
        let (_s, _t, mut app) = setup_app();
        app.set_status_message("copied");
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert!(app.status_message.is_none());
    }
}
