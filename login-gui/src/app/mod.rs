pub mod message;

pub use message::Message;

use std::future::Future;
use std::time::{Duration, Instant};

use iced::{Subscription, Task};
use login_ui::{theme, widget::*};
use tracing::{debug, trace};

use crate::{
    config::Config,
    login::{authenticate, Field, LoginForm, LoginInput, LoginSchema, Schema, SubmitError},
    notification::Toasts,
    view,
};

/// Period of the spinner animation and toast expiry checks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);

pub struct App {
    form: LoginForm,
    toasts: Toasts,
    schema: Box<dyn Schema>,
    submit_latency: Duration,
    spinner_tick: usize,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        Self::with_schema(config, Box::new(LoginSchema::default()))
    }

    pub fn with_schema(config: Config, schema: Box<dyn Schema>) -> (Self, Task<Message>) {
        let app = Self {
            form: LoginForm::new(),
            toasts: Toasts::new(config.toast_duration()),
            schema,
            submit_latency: config.submit_latency(),
            spinner_tick: 0,
        };
        (app, text_input::focus(text_input::Id::new(view::EMAIL_INPUT_ID)))
    }

    pub fn title(&self) -> String {
        "Entre com sua conta".to_string()
    }

    pub fn theme(&self) -> theme::Theme {
        <theme::Theme as Default>::default()
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if matches!(message, Message::Tick(_)) {
            trace!("received message");
        } else {
            debug!("received message");
        }
        match message {
            Message::EmailEdited(email) => self.form.on_update_email(email, self.schema.as_ref()),
            Message::PasswordEdited(password) => {
                self.form.on_update_password(password, self.schema.as_ref())
            }
            Message::TogglePasswordVisibility => self.form.toggle_password_visibility(),
            Message::Submit => return self.on_submit(),
            Message::Authenticated(input) => {
                self.form.complete(input, &mut self.toasts);
                self.spinner_tick = 0;
            }
            Message::GithubLogin => {
                debug!("github login is not available");
            }
            Message::ToastAction(id) | Message::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
            Message::Tick(now) => {
                if self.form.is_submitting() {
                    self.spinner_tick = self.spinner_tick.wrapping_add(1);
                }
                self.toasts.expire(now);
            }
        }
        Task::none()
    }

    fn on_submit(&mut self) -> Task<Message> {
        match self.form.submit(self.schema.as_ref()) {
            Ok(input) => {
                self.spinner_tick = 0;
                Task::perform(self.submission(input), Message::Authenticated)
            }
            Err(SubmitError::Busy) => Task::none(),
            Err(SubmitError::Invalid(errors)) => {
                let field = errors
                    .iter()
                    .next()
                    .map(|e| e.field())
                    .unwrap_or(Field::Email);
                text_input::focus(text_input::Id::new(view::input_id(field)))
            }
        }
    }

    /// The simulated login request started by a valid submit. Its output is
    /// fed back as `Message::Authenticated`.
    pub fn submission(&self, input: LoginInput) -> impl Future<Output = LoginInput> + 'static {
        authenticate(input, self.submit_latency)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.form.is_submitting() || !self.toasts.is_empty() {
            iced::time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(&self.form, &self.toasts, self.spinner_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::{Submission, ValidationErrors};
    use std::cell::Cell;
    use std::rc::Rc;

    fn app() -> App {
        App::new(Config::default()).0
    }

    fn fill(app: &mut App, email: &str, password: &str) {
        let _ = app.update(Message::EmailEdited(email.to_string()));
        let _ = app.update(Message::PasswordEdited(password.to_string()));
    }

    fn credentials(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn scenario_valid_credentials_show_one_toast() {
        let mut app = app();
        fill(&mut app, "a@b.com", "12345678");

        let _ = app.update(Message::Submit);
        assert_eq!(app.form().submission, Submission::Submitting);
        assert!(app.toasts().is_empty());

        let _ = app.update(Message::Authenticated(credentials("a@b.com", "12345678")));
        assert_eq!(app.form().submission, Submission::Idle);
        assert_eq!(app.toasts().len(), 1);
        let toast = app.toasts().iter().next().unwrap();
        assert!(toast.notification.description.contains("email: a@b.com"));
        assert!(toast.notification.description.contains("senha: 12345678"));
    }

    #[test]
    fn scenario_invalid_email_never_submits() {
        let mut app = app();
        fill(&mut app, "not-an-email", "12345678");
        let _ = app.update(Message::Submit);
        assert_eq!(app.form().submission, Submission::Idle);
        assert!(app.toasts().is_empty());
        assert!(!app.form().email.valid);
    }

    #[test]
    fn scenario_short_password_reports_message() {
        let mut app = app();
        fill(&mut app, "a@b.com", "short");
        let _ = app.update(Message::Submit);
        assert_eq!(app.form().submission, Submission::Idle);
        assert!(app.toasts().is_empty());
        assert_eq!(
            app.form().password.warning.as_deref(),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn scenario_toggle_reveals_password() {
        let mut app = app();
        assert!(!app.form().password_visible);
        let _ = app.update(Message::TogglePasswordVisibility);
        assert!(app.form().password_visible);
    }

    struct Counting(Rc<Cell<usize>>);

    impl Schema for Counting {
        fn validate(&self, input: &LoginInput) -> Result<(), ValidationErrors> {
            self.0.set(self.0.get() + 1);
            LoginSchema::default().validate(input)
        }
    }

    #[test]
    fn double_submit_runs_handler_once() {
        let calls = Rc::new(Cell::new(0));
        let mut app = App::with_schema(Config::default(), Box::new(Counting(calls.clone()))).0;
        fill(&mut app, "a@b.com", "12345678");

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Submit);
        assert_eq!(calls.get(), 1);

        let _ = app.update(Message::Authenticated(credentials("a@b.com", "12345678")));
        assert_eq!(app.toasts().len(), 1);

        let _ = app.update(Message::Submit);
        assert_eq!(calls.get(), 2);
        assert!(app.form().is_submitting());
    }

    #[test]
    fn toast_action_and_expiry() {
        let mut app = app();
        fill(&mut app, "a@b.com", "12345678");
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Authenticated(credentials("a@b.com", "12345678")));
        let id = app.toasts().iter().next().unwrap().id;
        let _ = app.update(Message::ToastAction(id));
        assert!(app.toasts().is_empty());

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Authenticated(credentials("a@b.com", "12345678")));
        let created = app.toasts().iter().next().unwrap().created_at;
        let _ = app.update(Message::Tick(created + Duration::from_millis(3999)));
        assert_eq!(app.toasts().len(), 1);
        let _ = app.update(Message::Tick(created + Duration::from_millis(4000)));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn spinner_advances_only_while_submitting() {
        let mut app = app();
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.spinner_tick(), 0);

        fill(&mut app, "a@b.com", "12345678");
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Tick(Instant::now()));
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.spinner_tick(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn submitting_lasts_the_configured_latency() {
        let mut app = app();
        fill(&mut app, "a@b.com", "12345678");
        let _ = app.update(Message::Submit);
        assert!(app.form().is_submitting());

        let start = tokio::time::Instant::now();
        let request = app.submission(app.form().input());
        tokio::pin!(request);
        assert!(
            tokio::time::timeout(Duration::from_millis(1499), &mut request)
                .await
                .is_err()
        );
        assert!(app.form().is_submitting());
        assert!(app.toasts().is_empty());

        let output = request.await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(app.form().is_submitting());

        let _ = app.update(Message::Authenticated(output));
        assert!(!app.form().is_submitting());
        assert_eq!(app.toasts().len(), 1);
    }

    #[test]
    fn github_button_is_inert() {
        let mut app = app();
        fill(&mut app, "a@b.com", "12345678");
        let _ = app.update(Message::GithubLogin);
        assert_eq!(app.form().submission, Submission::Idle);
        assert!(app.toasts().is_empty());
    }
}
