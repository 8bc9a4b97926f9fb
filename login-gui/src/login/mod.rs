//! Form controller: field values, password visibility and the submission
//! lifecycle. Nothing here renders; the view reads this state and the app
//! feeds it user events.

pub mod schema;
pub mod submit;

pub use schema::{
    Field, LoginInput, LoginSchema, Schema, ValidationError, ValidationErrors,
    DEFAULT_PASSWORD_MIN_LEN,
};
pub use submit::{authenticate, DEFAULT_SUBMIT_LATENCY};

use login_ui::component::form;
use tracing::{debug, info, warn};

use crate::notification::{Notification, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("invalid input: {0}")]
    Invalid(ValidationErrors),
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: form::Value<String>,
    pub password: form::Value<String>,
    pub password_visible: bool,
    pub submission: Submission,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Fields are checked on submit first. Once flagged, a field is checked
    /// again on every edit so the message goes away as soon as it is fixed.
    pub fn on_update_email(&mut self, email: String, schema: &dyn Schema) {
        self.email.value = email;
        if !self.email.valid {
            let errors = schema.validate(&self.input()).err().unwrap_or_default();
            self.email.set_warning(errors.message(Field::Email));
        }
    }

    pub fn on_update_password(&mut self, password: String, schema: &dyn Schema) {
        self.password.value = password;
        if !self.password.valid {
            let errors = schema.validate(&self.input()).err().unwrap_or_default();
            self.password.set_warning(errors.message(Field::Password));
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn input(&self) -> LoginInput {
        LoginInput {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }

    /// Validates the fields and, if they pass, enters the submitting state and
    /// returns the credentials to hand over to the submission handler.
    ///
    /// On failure the lifecycle is left untouched.
    pub fn submit(&mut self, schema: &dyn Schema) -> Result<LoginInput, SubmitError> {
        if self.is_submitting() {
            debug!("submit ignored: already submitting");
            return Err(SubmitError::Busy);
        }

        let input = self.input();
        let result = schema.validate(&input);
        let errors = result.as_ref().err().cloned().unwrap_or_default();
        self.email.set_warning(errors.message(Field::Email));
        self.password.set_warning(errors.message(Field::Password));

        match result {
            Ok(()) => {
                info!("submitting login for {}", input.email);
                self.submission = Submission::Submitting;
                Ok(input)
            }
            Err(errors) => {
                debug!("submit rejected: {}", errors);
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Called when the submission handler resolves: notifies, then goes back
    /// to idle.
    pub fn complete(&mut self, input: LoginInput, notifier: &mut dyn Notifier) {
        if !self.is_submitting() {
            warn!("submission completed while idle");
        }
        notifier.notify(Notification::login_success(&input));
        self.submission = Submission::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Recorder(Vec<Notification>);

    impl Notifier for Recorder {
        fn notify(&mut self, notification: Notification) {
            self.0.push(notification);
        }
    }

    /// Counts calls and accepts everything.
    #[derive(Default)]
    struct Permissive {
        calls: Cell<usize>,
    }

    impl Schema for Permissive {
        fn validate(&self, _input: &LoginInput) -> Result<(), ValidationErrors> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    fn filled(email: &str, password: &str) -> LoginForm {
        let schema = LoginSchema::default();
        let mut form = LoginForm::new();
        form.on_update_email(email.to_string(), &schema);
        form.on_update_password(password.to_string(), &schema);
        form
    }

    #[test]
    fn valid_submit_then_complete() {
        let schema = LoginSchema::default();
        let mut notifier = Recorder::default();
        let mut form = filled("a@b.com", "12345678");
        assert_eq!(form.submission, Submission::Idle);

        let input = form.submit(&schema).unwrap();
        assert_eq!(form.submission, Submission::Submitting);
        assert_eq!(
            input,
            LoginInput {
                email: "a@b.com".to_string(),
                password: "12345678".to_string()
            }
        );
        assert!(notifier.0.is_empty());

        form.complete(input, &mut notifier);
        assert_eq!(form.submission, Submission::Idle);
        assert_eq!(notifier.0.len(), 1);
        assert!(notifier.0[0].description.contains("a@b.com"));
        assert!(notifier.0[0].description.contains("12345678"));
    }

    #[test]
    fn invalid_email_never_submits() {
        let schema = LoginSchema::default();
        let mut form = filled("not-an-email", "12345678");
        match form.submit(&schema) {
            Err(SubmitError::Invalid(errors)) => {
                assert!(errors.get(Field::Email).is_some());
                assert!(errors.get(Field::Password).is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(form.submission, Submission::Idle);
        assert!(!form.email.valid);
        assert_eq!(form.email.warning.as_deref(), Some("Invalid email"));
        assert!(form.password.valid);
    }

    #[test]
    fn short_password_reports_fixed_message() {
        let schema = LoginSchema::default();
        let mut form = filled("a@b.com", "short");
        assert!(matches!(form.submit(&schema), Err(SubmitError::Invalid(_))));
        assert_eq!(form.submission, Submission::Idle);
        assert_eq!(
            form.password.warning.as_deref(),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn warnings_appear_only_after_submit_then_follow_edits() {
        let schema = LoginSchema::default();
        let mut form = filled("a", "1");
        assert!(form.email.valid);
        assert!(form.password.valid);

        assert!(form.submit(&schema).is_err());
        assert!(!form.email.valid);
        assert!(!form.password.valid);

        form.on_update_email("a@b.com".to_string(), &schema);
        assert!(form.email.valid);
        assert_eq!(form.email.warning, None);
        assert!(!form.password.valid);

        form.on_update_password("1234567".to_string(), &schema);
        assert!(!form.password.valid);
        form.on_update_password("12345678".to_string(), &schema);
        assert!(form.password.valid);
    }

    #[test]
    fn resubmission_refused_while_submitting() {
        let schema = Permissive::default();
        let mut form = LoginForm::new();

        assert!(form.submit(&schema).is_ok());
        assert_eq!(form.submit(&schema), Err(SubmitError::Busy));
        assert_eq!(schema.calls.get(), 1);
        assert!(!form.can_submit());

        form.complete(form.input(), &mut Recorder::default());
        assert!(form.can_submit());
        assert!(form.submit(&schema).is_ok());
        assert_eq!(schema.calls.get(), 2);
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut form = LoginForm::new();
        assert!(!form.password_visible);
        form.toggle_password_visibility();
        assert!(form.password_visible);
        form.toggle_password_visibility();
        assert!(!form.password_visible);
    }

    #[test]
    fn toggle_is_independent_of_submission() {
        let schema = LoginSchema::default();
        let mut form = filled("a@b.com", "12345678");
        form.submit(&schema).unwrap();
        form.toggle_password_visibility();
        assert!(form.password_visible);
        assert!(form.is_submitting());
    }
}
