use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use sefstats_core::models::TimeMode;

use crate::ui::{App, InputMode};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// Keys while the moderator user-id field is focused. Every edit
/// reschedules the debounce; any character is accepted and left for the
/// commit to validate.
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.cancel_uid_commit();
        }
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.commit_uid_now(Instant::now());
        }
        KeyCode::Backspace => {
            app.uid_input.pop();
            app.schedule_uid_commit(Instant::now());
        }
        KeyCode::Char(c) => {
            app.uid_input.push(c);
            app.schedule_uid_commit(Instant::now());
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab | KeyCode::Right => app.next_mode(),
        KeyCode::BackTab | KeyCode::Left => app.prev_mode(),
        KeyCode::Char('1') => app.set_mode(TimeMode::YearToDate),
        KeyCode::Char('2') => app.set_mode(TimeMode::AllTime),
        KeyCode::Char('u') if app.moderator => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('r') => app.request_refetch(),
        _ => {}
    }
}
