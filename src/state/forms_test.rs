use super::*;

// =============================================================
// LoginForm guards
// =============================================================

#[test]
fn login_rejects_malformed_email_without_payload() {
    let mut form = LoginForm {
        email: "not-an-email".to_owned(),
        password: "pw".to_owned(),
        ..LoginForm::default()
    };
    assert!(form.begin_submit().is_none());
    assert_eq!(form.response_message.as_deref(), Some(INVALID_EMAIL));
    assert_eq!(form.phase, FormPhase::Idle);
}

#[test]
fn login_submit_yields_credentials_and_enters_submitting() {
    let mut form = LoginForm {
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        ..LoginForm::default()
    };
    let creds = form.begin_submit().expect("credentials");
    assert_eq!(creds.email, "ada@example.com");
    assert_eq!(creds.password, "pw");
    assert_eq!(form.phase, FormPhase::Submitting);
    assert!(form.response_message.is_none());
}

#[test]
fn login_resubmit_while_pending_is_ignored() {
    let mut form = LoginForm {
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        ..LoginForm::default()
    };
    assert!(form.begin_submit().is_some());
    // Second click while the first call is still in flight.
    assert!(form.begin_submit().is_none());
    assert_eq!(form.phase, FormPhase::Submitting);
}

#[test]
fn login_failure_restores_idle_and_keeps_fields() {
    let mut form = LoginForm {
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        ..LoginForm::default()
    };
    form.begin_submit().expect("credentials");
    form.fail("bad credentials".to_owned());
    assert_eq!(form.phase, FormPhase::Idle);
    assert_eq!(form.response_message.as_deref(), Some("bad credentials"));
    assert_eq!(form.email, "ada@example.com");
    // Retry is allowed immediately.
    assert!(form.begin_submit().is_some());
}

// =============================================================
// RegisterForm guards
// =============================================================

fn filled_register_form() -> RegisterForm {
    RegisterForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
        ..RegisterForm::default()
    }
}

#[test]
fn register_mismatch_blocks_submit_locally() {
    let mut form = RegisterForm {
        password: "a".to_owned(),
        confirm_password: "b".to_owned(),
        ..filled_register_form()
    };
    assert!(form.begin_submit().is_none());
    assert_eq!(form.response_message.as_deref(), Some(PASSWORD_MISMATCH));
    assert_eq!(form.phase, FormPhase::Idle);
}

#[test]
fn register_mismatch_reported_before_email_shape() {
    let mut form = RegisterForm {
        email: "broken".to_owned(),
        password: "a".to_owned(),
        confirm_password: "b".to_owned(),
        ..filled_register_form()
    };
    assert!(form.begin_submit().is_none());
    assert_eq!(form.response_message.as_deref(), Some(PASSWORD_MISMATCH));
}

#[test]
fn register_submit_drops_confirmation_field() {
    let mut form = filled_register_form();
    let request = form.begin_submit().expect("request");
    assert_eq!(request.name, "Ada");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "pw");
    assert_eq!(form.phase, FormPhase::Submitting);
}

#[test]
fn register_resubmit_while_pending_is_ignored() {
    let mut form = filled_register_form();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
}

#[test]
fn register_failure_restores_idle_with_message() {
    let mut form = filled_register_form();
    form.begin_submit().expect("request");
    form.fail("Email already exists".to_owned());
    assert_eq!(form.phase, FormPhase::Idle);
    assert_eq!(
        form.response_message.as_deref(),
        Some("Email already exists")
    );
}
