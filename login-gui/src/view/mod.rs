mod login;
mod toast;

pub use login::{input_id, login_view, EMAIL_INPUT_ID, PASSWORD_INPUT_ID};
pub use toast::toasts_view;

use iced::Length;
use login_ui::{theme, widget::*};

use crate::{app::Message, login::LoginForm, notification::Toasts};

/// Whole window: the form centered on the background, toasts layered on top.
pub fn view<'a>(form: &'a LoginForm, toasts: &'a Toasts, spinner_tick: usize) -> Element<'a, Message> {
    let content = Container::new(login_view(form, spinner_tick))
        .padding([0, 16])
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::container::background);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(toasts_view(toasts))
        .into()
}
