//! Form model and field validation.
//!
//! A form is a list of tracked fields plus an action (where it submits and
//! what the submit control says while doing so). Validation is deliberately
//! permissive: generic fields only need a non-blank value, email fields must
//! match a loose email shape. Display concerns (the "invalid" marker and the
//! "has value" marker) live on the field so the UI layer stays a thin view.

use std::sync::LazyLock;

use regex::Regex;

/// Permissive email shape: `local@domain` where the domain is either dotted
/// labels or a bracketed IPv4 prefix, ending in a 1-5 letter or 1-3 digit
/// top-level label with an optional closing bracket.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9_\-\.]+)@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)|(([a-zA-Z0-9\-]+\.)+))([a-zA-Z]{1,5}|[0-9]{1,3})(\]?)$",
    )
    .expect("email pattern is valid")
});

/// Classification of a tracked input.
///
/// A field is an email field when its declared input type is `email` or its
/// name is `email`; everything else validates as a generic text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Generic,
    Email,
}

impl FieldKind {
    /// Infers the kind from a field's declared input type and name.
    pub fn infer(input_type: &str, name: &str) -> Self {
        if input_type == "email" || name == "email" {
            FieldKind::Email
        } else {
            FieldKind::Generic
        }
    }
}

/// Static description of a form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Submission name of the field (e.g. `username`).
    pub name: String,
    /// Label shown next to the input.
    pub label: String,
    /// Declared input type (`text`, `password`, `email`, ...).
    pub input_type: String,
    /// Mask the value when rendering.
    pub secret: bool,
}

impl FieldSpec {
    /// A plain text field.
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input_type: "text".to_string(),
            secret: false,
        }
    }

    /// A masked password field.
    pub fn password(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input_type: "password".to_string(),
            secret: true,
        }
    }

    /// The kind this field validates as.
    pub fn kind(&self) -> FieldKind {
        FieldKind::infer(&self.input_type, &self.name)
    }
}

/// The username/password pair both credential forms track.
pub fn credential_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("username", "Username"),
        FieldSpec::password("password", "Password"),
    ]
}

/// A tracked input: its spec, current value, and display markers.
///
/// The `invalid` marker is set by the caller when validation fails at submit
/// time and cleared when the field regains focus. The `has_value` marker is
/// synced when the field loses focus and is purely presentational.
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    pub invalid: bool,
    pub has_value: bool,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            invalid: false,
            has_value: false,
        }
    }

    /// The current value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Validates the current value against the field's kind.
    ///
    /// Returns an explicit boolean on every path: email fields must match
    /// [`EMAIL_PATTERN`], generic fields must be non-blank.
    pub fn validate(&self) -> bool {
        match self.spec.kind() {
            FieldKind::Email => EMAIL_PATTERN.is_match(self.trimmed()),
            FieldKind::Generic => !self.trimmed().is_empty(),
        }
    }

    /// Marks the field as failing validation.
    pub fn mark_invalid(&mut self) {
        self.invalid = true;
    }

    /// Called when the field regains focus: the invalid marker is removed.
    pub fn on_focus(&mut self) {
        self.invalid = false;
    }

    /// Called when the field loses focus: syncs the has-value marker from
    /// the trimmed content.
    pub fn on_blur(&mut self) {
        self.has_value = !self.trimmed().is_empty();
    }
}

/// The form's submit target and control labels.
#[derive(Debug, Clone)]
pub struct FormAction {
    /// Title rendered above the form.
    pub title: String,
    /// Path the form posts to, joined onto the configured base URL.
    pub path: String,
    /// Submit control label when idle.
    pub submit_label: String,
    /// Submit control label while a request is in flight.
    pub pending_label: String,
}

impl FormAction {
    /// The login form action.
    pub fn login(path: &str) -> Self {
        Self {
            title: "Sign in".to_string(),
            path: path.to_string(),
            submit_label: "Sign in".to_string(),
            pending_label: "Signing in...".to_string(),
        }
    }

    /// The register form action.
    pub fn register(path: &str) -> Self {
        Self {
            title: "Create account".to_string(),
            path: path.to_string(),
            submit_label: "Create account".to_string(),
            pending_label: "Creating account...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_field(value: &str) -> FormField {
        let mut field = FormField::new(FieldSpec {
            name: "email".to_string(),
            label: "Email".to_string(),
            input_type: "email".to_string(),
            secret: false,
        });
        field.value = value.to_string();
        field
    }

    fn text_field(value: &str) -> FormField {
        let mut field = FormField::new(FieldSpec::text("username", "Username"));
        field.value = value.to_string();
        field
    }

    #[test]
    fn generic_field_requires_non_blank_value() {
        assert!(!text_field("").validate());
        assert!(!text_field("   ").validate());
        assert!(!text_field("\t\n").validate());
        assert!(text_field("daret").validate());
        assert!(text_field("  daret  ").validate());
    }

    #[test]
    fn email_field_matches_permissive_pattern() {
        assert!(email_field("a@b.c").validate());
        assert!(email_field("user.name@example.com").validate());
        assert!(email_field("user_name-1@sub.example.org").validate());
        assert!(!email_field("not-an-email").validate());
        assert!(!email_field("").validate());
        assert!(!email_field("missing@tld").validate());
        assert!(!email_field("@example.com").validate());
    }

    #[test]
    fn email_field_accepts_bracketed_ipv4() {
        assert!(email_field("user@[192.168.1.1]").validate());
        assert!(email_field("user@[10.0.0.255]").validate());
        assert!(!email_field("user@[192.168.1]").validate());
    }

    #[test]
    fn email_field_trims_before_matching() {
        assert!(email_field("  a@b.c  ").validate());
    }

    #[test]
    fn kind_inferred_from_type_or_name() {
        assert_eq!(FieldKind::infer("email", "contact"), FieldKind::Email);
        assert_eq!(FieldKind::infer("text", "email"), FieldKind::Email);
        assert_eq!(FieldKind::infer("text", "username"), FieldKind::Generic);
        assert_eq!(FieldKind::infer("password", "password"), FieldKind::Generic);
    }

    #[test]
    fn focus_clears_invalid_marker() {
        let mut field = text_field("");
        field.mark_invalid();
        assert!(field.invalid);
        field.on_focus();
        assert!(!field.invalid);
    }

    #[test]
    fn blur_syncs_has_value_from_trimmed_content() {
        let mut field = text_field("daret");
        field.on_blur();
        assert!(field.has_value);

        field.value = "   ".to_string();
        field.on_blur();
        assert!(!field.has_value);
    }

    #[test]
    fn credential_fields_are_generic() {
        let fields = credential_fields();
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(|f| f.kind() == FieldKind::Generic));
        assert!(fields[1].secret);
    }
}
