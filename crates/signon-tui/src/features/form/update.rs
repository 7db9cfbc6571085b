//! Key handling for the form slice.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::FormState;

/// What a key press asked the controller to do beyond slice-local edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKeyAction {
    None,
    /// Enter was pressed: run the submission flow.
    Submit,
}

/// Handles a key event against the form.
///
/// Editing stays available while a request is pending (only the submit
/// control is disabled); the reducer gates `Submit` on the busy flag.
pub fn handle_key(form: &mut FormState, key: KeyEvent) -> FormKeyAction {
    if key.kind == KeyEventKind::Release {
        return FormKeyAction::None;
    }

    match key.code {
        KeyCode::Enter => return FormKeyAction::Submit,
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),
        KeyCode::Home => form.move_home(),
        KeyCode::End => form.move_end(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete_next(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.insert_char(ch);
        }
        _ => {}
    }

    FormKeyAction::None
}

#[cfg(test)]
mod tests {
    use signon_core::form::{FormAction, credential_fields};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> FormState {
        FormState::new(FormAction::login("/login"), credential_fields())
    }

    #[test]
    fn typing_flows_into_the_focused_field() {
        let mut form = form();
        for ch in "daret".chars() {
            handle_key(&mut form, key(KeyCode::Char(ch)));
        }
        handle_key(&mut form, key(KeyCode::Tab));
        handle_key(&mut form, key(KeyCode::Char('x')));

        assert_eq!(form.fields[0].value, "daret");
        assert_eq!(form.fields[1].value, "x");
    }

    #[test]
    fn enter_requests_submission() {
        let mut form = form();
        assert_eq!(handle_key(&mut form, key(KeyCode::Enter)), FormKeyAction::Submit);
    }

    #[test]
    fn control_chords_do_not_insert() {
        let mut form = form();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key(&mut form, chord);
        assert!(form.fields[0].value.is_empty());
    }
}
