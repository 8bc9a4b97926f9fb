use std::time::Instant;

use crate::{login::LoginInput, notification::ToastId};

/// All application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    EmailEdited(String),
    PasswordEdited(String),
    TogglePasswordVisibility,
    Submit,
    /// The simulated login request resolved.
    Authenticated(LoginInput),
    /// "Entre com Github", not wired to any identity provider.
    GithubLogin,

    // Toasts
    ToastAction(ToastId),
    DismissToast(ToastId),

    // Animation and toast expiry
    Tick(Instant),
}
