use crate::widget::text_input;
use iced::Length;

use crate::{component::text, theme, widget::*};

/// Current content of an input along with its validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<String>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

impl Value<String> {
    /// Marks the value invalid with the given message, or valid when `None`.
    pub fn set_warning(&mut self, warning: Option<String>) {
        self.valid = warning.is_none();
        self.warning = warning;
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &'a Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning.as_deref(),
            valid: value.valid,
        }
    }

    /// Creates a new [`Form`] that trims input values before applying the `on_change` function.
    pub fn new_trimmed<F>(placeholder: &str, value: &'a Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, &value.value)
                .on_input(move |s| on_change(s.trim().to_string())),
            warning: value.warning.as_deref(),
            valid: value.valid,
        }
    }

    /// Sets the widget id of the underlying input, used to focus it.
    pub fn id(mut self, id: &'static str) -> Self {
        self.input = self.input.id(text_input::Id::new(id));
        self
    }

    /// Obscures the content of the [`Form`] when `secure` is true.
    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    pub fn on_submit_maybe(mut self, message: Option<Message>) -> Self {
        if let Some(message) = message {
            self.input = self.input.on_submit(message);
        }
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_warning_tracks_validity() {
        let mut value = Value::default();
        assert!(value.valid);

        value.set_warning(Some("Invalid email".to_string()));
        assert!(!value.valid);
        assert_eq!(value.warning.as_deref(), Some("Invalid email"));

        value.set_warning(None);
        assert!(value.valid);
        assert_eq!(value.warning, None);
    }
}
