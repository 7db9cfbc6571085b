//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth for
//! how events modify state, including the whole submission flow.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use signon_core::client::{LoginRequest, LoginResponse};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{form, messages};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginResult { result } => handle_login_result(app, result),
        UiEvent::BannerTimeout => {
            // Unconditional: delays are never reset, so a delay scheduled for
            // an earlier message hides a newer one too.
            app.banner.hide();
            vec![]
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }
    if key.code == KeyCode::Esc {
        return vec![UiEffect::Quit];
    }

    match form::handle_key(&mut app.form, key) {
        form::FormKeyAction::Submit => submit_form(app),
        form::FormKeyAction::None => vec![],
    }
}

// ============================================================================
// Submission Flow
// ============================================================================

/// Runs the submission flow on Enter.
///
/// Order matters and mirrors the form contract: field validation first, then
/// the (redundant) raw-credential guard, then the busy gate flips and the
/// request effect is emitted. At most one request is in flight: while busy,
/// submission is a no-op.
fn submit_form(app: &mut AppState) -> Vec<UiEffect> {
    if app.form.busy {
        return vec![];
    }

    if !app.form.validate_all() {
        return vec![];
    }

    let username = app.form.value_of("username");
    let password = app.form.value_of("password");
    if username.is_empty() || password.is_empty() {
        app.banner.show(messages::FILL_IN_ALL_FIELDS);
        return vec![UiEffect::ScheduleBannerHide];
    }

    app.form.busy = true;
    let task = app.task_seq.next_id();
    vec![UiEffect::SubmitForm {
        task: Some(task),
        request: LoginRequest { username, password },
    }]
}

fn handle_login_result(app: &mut AppState, result: Result<LoginResponse, String>) -> Vec<UiEffect> {
    match result {
        Ok(response) if response.success => {
            let redirect = response.redirect.unwrap_or_else(|| "/".to_string());
            let url = app.client.resolve_redirect(&redirect);
            app.outcome = Some(url.clone());

            let mut effects = Vec::new();
            if app.open_redirect {
                effects.push(UiEffect::OpenRedirect { url });
            }
            effects.push(UiEffect::Quit);
            effects
        }
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| messages::LOGIN_FAILED.to_string());
            app.form.busy = false;
            app.banner.show(&message);
            vec![UiEffect::ScheduleBannerHide]
        }
        Err(_) => {
            app.form.busy = false;
            app.banner.show(messages::SERVER_ERROR);
            vec![UiEffect::ScheduleBannerHide]
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use signon_core::client::AuthClient;
    use signon_core::form::{FieldSpec, FormAction};
    use url::Url;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskKind};
    use crate::form::FormState;

    fn test_app() -> AppState {
        let client = Arc::new(AuthClient::new(
            Url::parse("http://127.0.0.1:5000").unwrap(),
        ));
        AppState::new(FormAction::login("/login"), client, false)
    }

    fn key_event(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn fill_credentials(app: &mut AppState, username: &str, password: &str) {
        app.form.fields[0].value = username.to_string();
        app.form.fields[1].value = password.to_string();
    }

    fn ok_result(response: serde_json::Value) -> UiEvent {
        UiEvent::LoginResult {
            result: Ok(serde_json::from_value(response).unwrap()),
        }
    }

    #[test]
    fn submit_with_empty_fields_marks_them_and_sends_nothing() {
        let mut app = test_app();
        let effects = update(&mut app, key_event(KeyCode::Enter));

        assert!(effects.is_empty());
        assert!(app.form.fields.iter().all(|field| field.invalid));
        assert!(!app.form.busy);
    }

    #[test]
    fn submit_with_valid_fields_starts_the_request() {
        let mut app = test_app();
        fill_credentials(&mut app, "daret", "hunter2");

        let effects = update(&mut app, key_event(KeyCode::Enter));

        assert!(app.form.busy);
        assert_eq!(app.form.submit_label(), "Signing in...");
        assert_eq!(
            effects,
            vec![UiEffect::SubmitForm {
                task: Some(TaskId(0)),
                request: LoginRequest {
                    username: "daret".to_string(),
                    password: "hunter2".to_string(),
                },
            }]
        );
    }

    #[test]
    fn submit_is_ignored_while_a_request_is_in_flight() {
        let mut app = test_app();
        fill_credentials(&mut app, "daret", "hunter2");

        let first = update(&mut app, key_event(KeyCode::Enter));
        let second = update(&mut app, key_event(KeyCode::Enter));

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn missing_credential_guard_shows_banner_and_sends_nothing() {
        // A form whose fields validate but carry no username/password:
        // the bypassed-field-validation scenario the guard exists for.
        let mut app = test_app();
        app.form = FormState::new(
            FormAction::login("/login"),
            vec![FieldSpec::text("token", "Token")],
        );
        app.form.fields[0].value = "abc".to_string();

        let effects = update(&mut app, key_event(KeyCode::Enter));

        assert_eq!(app.banner.message(), Some(messages::FILL_IN_ALL_FIELDS));
        assert_eq!(effects, vec![UiEffect::ScheduleBannerHide]);
        assert!(!app.form.busy);
    }

    #[test]
    fn success_records_resolved_location_and_quits() {
        let mut app = test_app();
        app.form.busy = true;

        let effects = update(
            &mut app,
            ok_result(serde_json::json!({"success": true, "redirect": "/home"})),
        );

        assert_eq!(app.outcome.as_deref(), Some("http://127.0.0.1:5000/home"));
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn success_opens_redirect_when_configured() {
        let mut app = test_app();
        app.open_redirect = true;
        app.form.busy = true;

        let effects = update(
            &mut app,
            ok_result(serde_json::json!({"success": true, "redirect": "/home"})),
        );

        assert_eq!(
            effects,
            vec![
                UiEffect::OpenRedirect {
                    url: "http://127.0.0.1:5000/home".to_string(),
                },
                UiEffect::Quit,
            ]
        );
    }

    #[test]
    fn server_rejection_shows_its_message_and_reenables_submit() {
        let mut app = test_app();
        app.form.busy = true;

        let effects = update(
            &mut app,
            ok_result(serde_json::json!({"success": false, "message": "bad creds"})),
        );

        assert_eq!(app.banner.message(), Some("bad creds"));
        assert!(!app.form.busy);
        assert_eq!(app.form.submit_label(), "Sign in");
        assert_eq!(effects, vec![UiEffect::ScheduleBannerHide]);
    }

    #[test]
    fn server_rejection_without_message_uses_default_text() {
        let mut app = test_app();
        app.form.busy = true;

        update(&mut app, ok_result(serde_json::json!({"success": false})));

        assert_eq!(app.banner.message(), Some(messages::LOGIN_FAILED));
    }

    #[test]
    fn transport_error_shows_generic_banner_and_reenables_submit() {
        let mut app = test_app();
        app.form.busy = true;

        let effects = update(
            &mut app,
            UiEvent::LoginResult {
                result: Err("connection refused".to_string()),
            },
        );

        assert_eq!(app.banner.message(), Some(messages::SERVER_ERROR));
        assert!(!app.form.busy);
        assert_eq!(effects, vec![UiEffect::ScheduleBannerHide]);
    }

    #[test]
    fn banner_timeout_hides_even_a_newer_message() {
        let mut app = test_app();
        app.banner.show("first error");
        app.banner.show("second error");

        update(&mut app, UiEvent::BannerTimeout);

        assert!(!app.banner.is_shown());
    }

    #[test]
    fn stale_task_completion_is_discarded() {
        let mut app = test_app();
        app.form.busy = true;

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Submit,
                completed: TaskCompleted {
                    id: TaskId(99),
                    result: Box::new(ok_result(
                        serde_json::json!({"success": true, "redirect": "/home"}),
                    )),
                },
            },
        );

        assert!(effects.is_empty());
        assert!(app.outcome.is_none());
    }

    #[test]
    fn active_task_completion_applies_its_result() {
        let mut app = test_app();
        fill_credentials(&mut app, "daret", "hunter2");
        update(&mut app, key_event(KeyCode::Enter));
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Submit,
                started: crate::common::TaskStarted { id: TaskId(0) },
            },
        );

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Submit,
                completed: TaskCompleted {
                    id: TaskId(0),
                    result: Box::new(ok_result(
                        serde_json::json!({"success": true, "redirect": "/home"}),
                    )),
                },
            },
        );

        assert_eq!(effects, vec![UiEffect::Quit]);
        assert!(!app.tasks.submit.is_running());
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let mut app = test_app();
        let ctrl_c = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(update(&mut app, ctrl_c), vec![UiEffect::Quit]);
        assert_eq!(update(&mut app, key_event(KeyCode::Esc)), vec![UiEffect::Quit]);
    }

    #[test]
    fn tab_applies_blur_and_focus_marker_semantics() {
        let mut app = test_app();
        update(&mut app, key_event(KeyCode::Char('d')));
        app.form.fields[1].mark_invalid();

        update(&mut app, key_event(KeyCode::Tab));

        assert!(app.form.fields[0].has_value);
        assert!(!app.form.fields[1].invalid);
    }
}
