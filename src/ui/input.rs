use crate::ui::app::{App, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Copy the referral link to the system clipboard.
    CopyReferralLink,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return InputAction::None;
        }
        KeyCode::Tab | KeyCode::Right => {
            app.next_tab();
            return InputAction::None;
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.previous_tab();
            return InputAction::None;
        }
        KeyCode::Char('r') => {
            app.refresh();
            return InputAction::None;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_up();
            return InputAction::None;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_down();
            return InputAction::None;
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let number = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(tab) = Tab::from_number(number) {
                app.select_tab(tab);
            }
            return InputAction::None;
        }
        _ => {}
    }

    match app.active_tab() {
        Tab::Game => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                app.game_click();
            }
        }
        Tab::Referrals => {
            if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('y')) {
                return InputAction::CopyReferralLink;
            }
        }
        Tab::Shop => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('a')) {
                app.add_selected_to_cart();
            }
        }
        Tab::Cart => match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => app.increment_selected_line(),
            KeyCode::Char('-') => app.decrement_selected_line(),
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                app.remove_selected_line()
            }
            KeyCode::Char('p') => app.toggle_pay_with_bonus(),
            KeyCode::Enter => app.submit_order(),
            _ => {}
        },
        Tab::News | Tab::Profile => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
