//! Transient notifications (toasts).

use std::time::{Duration, Instant};

use tracing::debug;

use crate::login::LoginInput;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);
/// Toasts shown at once, older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Check,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub action: Option<Action>,
}

impl Notification {
    /// Echoes the submitted credentials back to the user.
    pub fn login_success(input: &LoginInput) -> Self {
        Self {
            title: "Login realizado com sucesso".to_string(),
            description: format!(
                "Seus dados:\nemail: {}\nsenha: {}",
                input.email, input.password
            ),
            icon: Icon::Check,
            action: Some(Action { label: "Fechar" }),
        }
    }
}

/// Capability receiving notifications emitted by the form.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    pub created_at: Instant,
}

/// Visible toasts, newest first.
#[derive(Debug)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            duration,
        }
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            0,
            Toast {
                id,
                notification,
                created_at: now,
            },
        );
        self.entries.truncate(MAX_VISIBLE_TOASTS);
        id
    }

    /// Removes the toast, returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let len = self.entries.len();
        self.entries.retain(|t| t.id != id);
        len != self.entries.len()
    }

    /// Drops every toast older than the configured duration.
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.entries
            .retain(|t| now.saturating_duration_since(t.created_at) < duration);
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.entries.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notification: Notification) {
        let id = self.push_at(notification, Instant::now());
        debug!("toast {:?} shown", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(title: &str) -> Notification {
        Notification {
            title: title.to_string(),
            description: String::new(),
            icon: Icon::Info,
            action: None,
        }
    }

    #[test]
    fn login_success_echoes_credentials() {
        let n = Notification::login_success(&LoginInput {
            email: "a@b.com".to_string(),
            password: "12345678".to_string(),
        });
        assert_eq!(n.title, "Login realizado com sucesso");
        assert!(n.description.contains("a@b.com"));
        assert!(n.description.contains("12345678"));
        assert_eq!(n.icon, Icon::Check);
        assert_eq!(n.action, Some(Action { label: "Fechar" }));
    }

    #[test]
    fn newest_first_and_capped() {
        let now = Instant::now();
        let mut toasts = Toasts::default();
        for i in 0..5 {
            toasts.push_at(info(&i.to_string()), now);
        }
        let titles: Vec<&str> = toasts
            .iter()
            .map(|t| t.notification.title.as_str())
            .collect();
        assert_eq!(titles, vec!["4", "3", "2"]);
    }

    #[test]
    fn reversed_iteration_lists_oldest_first() {
        let now = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push_at(info("older"), now);
        toasts.push_at(info("newer"), now);
        let titles: Vec<&str> = toasts
            .iter()
            .rev()
            .map(|t| t.notification.title.as_str())
            .collect();
        assert_eq!(titles, vec!["older", "newer"]);
    }

    #[test]
    fn dismiss_removes_once() {
        let mut toasts = Toasts::default();
        let first = toasts.push_at(info("first"), Instant::now());
        let second = toasts.push_at(info("second"), Instant::now());
        assert!(toasts.dismiss(first));
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.len(), 1);
        assert!(toasts.get(second).is_some());
    }

    #[test]
    fn expire_after_duration() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_millis(4000));
        let old = toasts.push_at(info("old"), start);
        let young = toasts.push_at(info("young"), start + Duration::from_millis(3000));

        toasts.expire(start + Duration::from_millis(3999));
        assert_eq!(toasts.len(), 2);

        toasts.expire(start + Duration::from_millis(4000));
        assert!(toasts.get(old).is_none());
        assert!(toasts.get(young).is_some());

        toasts.expire(start + Duration::from_millis(7000));
        assert!(toasts.is_empty());
    }
}
