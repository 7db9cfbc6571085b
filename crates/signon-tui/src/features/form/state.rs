//! Form slice state: tracked fields, focus, and the submit control.

use signon_core::form::{FieldSpec, FormAction, FormField};

/// Form state for one session.
///
/// Focus is an index into `fields`; moving focus applies the blur/focus
/// marker semantics (the has-value marker is synced on blur, the invalid
/// marker is cleared on focus). The single `busy` flag drives both the
/// submit control's disabled behavior and its label.
#[derive(Debug)]
pub struct FormState {
    /// The form's submit target and labels.
    pub action: FormAction,
    /// Tracked inputs in display order.
    pub fields: Vec<FormField>,
    /// Index of the focused field.
    pub focused: usize,
    /// Cursor position within the focused field's value, in chars.
    pub cursor: usize,
    /// A request is in flight; submission is disabled.
    pub busy: bool,
}

impl FormState {
    pub fn new(action: FormAction, specs: Vec<FieldSpec>) -> Self {
        let fields = specs.into_iter().map(FormField::new).collect();
        Self {
            action,
            fields,
            focused: 0,
            cursor: 0,
            busy: false,
        }
    }

    pub fn focused_field(&self) -> &FormField {
        &self.fields[self.focused]
    }

    /// Moves focus to the next field, wrapping at the end.
    pub fn focus_next(&mut self) {
        let next = (self.focused + 1) % self.fields.len();
        self.focus_index(next);
    }

    /// Moves focus to the previous field, wrapping at the start.
    pub fn focus_prev(&mut self) {
        let prev = (self.focused + self.fields.len() - 1) % self.fields.len();
        self.focus_index(prev);
    }

    fn focus_index(&mut self, index: usize) {
        if index == self.focused {
            return;
        }
        self.fields[self.focused].on_blur();
        self.focused = index;
        self.fields[self.focused].on_focus();
        self.cursor = self.fields[self.focused].value.chars().count();
    }

    /// Runs the validator over every tracked field, marking each failure.
    ///
    /// Returns the overall pass/fail so the caller can abort submission.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            if !field.validate() {
                field.mark_invalid();
                ok = false;
            }
        }
        ok
    }

    /// The raw (untrimmed) value of the named field, empty if absent.
    pub fn value_of(&self, name: &str) -> String {
        self.fields
            .iter()
            .find(|field| field.spec.name == name)
            .map(|field| field.value.clone())
            .unwrap_or_default()
    }

    /// The submit control label for the current busy state.
    pub fn submit_label(&self) -> &str {
        if self.busy {
            &self.action.pending_label
        } else {
            &self.action.submit_label
        }
    }

    // ------------------------------------------------------------------
    // Editing operations on the focused field
    // ------------------------------------------------------------------

    pub fn insert_char(&mut self, ch: char) {
        let cursor = self.cursor;
        let field = &mut self.fields[self.focused];
        let byte_idx = char_to_byte_index(&field.value, cursor);
        field.value.insert(byte_idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let field = &mut self.fields[self.focused];
        let byte_idx = char_to_byte_index(&field.value, cursor - 1);
        field.value.remove(byte_idx);
        self.cursor -= 1;
    }

    pub fn delete_next(&mut self) {
        let cursor = self.cursor;
        let field = &mut self.fields[self.focused];
        if cursor < field.value.chars().count() {
            let byte_idx = char_to_byte_index(&field.value, cursor);
            field.value.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.focused_field().value.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.focused_field().value.chars().count();
    }
}

/// Maps a char index to a byte index within `value` (end of string when the
/// char index is past the last char).
fn char_to_byte_index(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map_or(value.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use signon_core::form::credential_fields;

    use super::*;

    fn form() -> FormState {
        FormState::new(FormAction::login("/login"), credential_fields())
    }

    #[test]
    fn editing_respects_char_boundaries() {
        let mut form = form();
        form.insert_char('д');
        form.insert_char('а');
        form.insert_char('!');
        assert_eq!(form.fields[0].value, "да!");

        form.move_left();
        form.backspace();
        assert_eq!(form.fields[0].value, "д!");

        form.move_home();
        form.delete_next();
        assert_eq!(form.fields[0].value, "!");
    }

    #[test]
    fn focus_traversal_applies_blur_and_focus_markers() {
        let mut form = form();
        form.insert_char('a');
        form.fields[1].mark_invalid();

        form.focus_next();
        assert!(form.fields[0].has_value, "blur syncs the has-value marker");
        assert!(!form.fields[1].invalid, "focus clears the invalid marker");
        assert_eq!(form.focused, 1);

        form.focus_next();
        assert_eq!(form.focused, 0, "focus wraps");
        assert_eq!(form.cursor, 1, "cursor lands at the end of the value");
    }

    #[test]
    fn validate_all_marks_every_failing_field() {
        let mut form = form();
        assert!(!form.validate_all());
        assert!(form.fields.iter().all(|field| field.invalid));

        form.fields[0].value = "daret".to_string();
        form.fields[1].value = "hunter2".to_string();
        form.fields.iter_mut().for_each(FormField::on_focus);
        assert!(form.validate_all());
        assert!(form.fields.iter().all(|field| !field.invalid));
    }

    #[test]
    fn submit_label_follows_busy_state() {
        let mut form = form();
        assert_eq!(form.submit_label(), "Sign in");
        form.busy = true;
        assert_eq!(form.submit_label(), "Signing in...");
    }

    #[test]
    fn value_of_returns_raw_untrimmed_value() {
        let mut form = form();
        form.fields[0].value = "  daret ".to_string();
        assert_eq!(form.value_of("username"), "  daret ");
        assert_eq!(form.value_of("missing"), "");
    }
}
