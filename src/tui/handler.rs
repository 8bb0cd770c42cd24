//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog first, then to the active
//! wizard step.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use crate::wizard::{InputBuffer, Stage};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::Notice(_) => handle_notice_key(app, key),
        ActiveDialog::SaveResults => handle_save_key(app, key),
        ActiveDialog::None => match app.stage {
            Stage::Income(_) => handle_income_key(app, key),
            Stage::Expenses(_) => handle_expense_key(app, key),
            Stage::Summary(_) => handle_summary_key(app, key),
        },
    }

    Ok(())
}

fn handle_notice_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.close_dialog();
    }
}

fn handle_save_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.confirm_save(),
        KeyCode::Esc => app.cancel_save(),
        _ => edit_text(&mut app.save_input, key),
    }
}

fn handle_income_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_income(),
        KeyCode::Esc => app.quit(),
        _ => {
            if let Stage::Income(stage) = &mut app.stage {
                edit_text(&mut stage.income_input, key);
            }
        }
    }
}

fn handle_expense_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.add_expense(),
        KeyCode::F(2) => app.finish_expenses(),
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.finish_expenses()
        }
        KeyCode::Tab | KeyCode::Down => app.select_next_category(),
        KeyCode::BackTab | KeyCode::Up => app.select_prev_category(),
        KeyCode::Esc => app.quit(),
        _ => {
            if let Stage::Expenses(stage) = &mut app.stage {
                edit_text(&mut stage.amount_input, key);
            }
        }
    }
}

fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => app.open_save_dialog(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Apply an editing key to a text field; other keys are ignored
fn edit_text(input: &mut InputBuffer, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
