use iced::{Alignment, Length};
use login_ui::{
    component::{button, form, separation, spinner, text},
    icon, theme,
    widget::*,
};

use crate::{app::Message, login::Field, login::LoginForm};

pub const EMAIL_INPUT_ID: &str = "login_email";
pub const PASSWORD_INPUT_ID: &str = "login_password";

const CARD_WIDTH: f32 = 380.0;

pub fn input_id(field: Field) -> &'static str {
    match field {
        Field::Email => EMAIL_INPUT_ID,
        Field::Password => PASSWORD_INPUT_ID,
    }
}

pub fn login_view(state: &LoginForm, spinner_tick: usize) -> Element<'_, Message> {
    let header = Column::new()
        .spacing(4)
        .push(text::h3("Entre com sua conta").style(theme::text::primary))
        .push(
            text::p2_regular("Utilize seu email e senha ou entre com o GitHub")
                .style(theme::text::secondary),
        );

    let email = Column::new()
        .spacing(6)
        .push(text::p2_semibold("E-mail").style(theme::text::primary))
        .push(
            form::Form::new_trimmed("example@gmail.com", &state.email, Message::EmailEdited)
                .on_submit_maybe(state.can_submit().then_some(Message::Submit))
                .id(EMAIL_INPUT_ID)
                .size(text::P2_SIZE)
                .padding(10),
        );

    let toggle = button::icon(if state.password_visible {
        icon::eye_icon()
    } else {
        icon::eye_slash_icon()
    })
    .on_press(Message::TogglePasswordVisibility);

    let password = Column::new()
        .spacing(6)
        .push(text::p2_semibold("Senha").style(theme::text::primary))
        .push(
            Row::new()
                .spacing(4)
                .align_y(Alignment::Start)
                .push(
                    form::Form::new("Senha", &state.password, Message::PasswordEdited)
                        .secure(!state.password_visible)
                        .on_submit_maybe(state.can_submit().then_some(Message::Submit))
                        .id(PASSWORD_INPUT_ID)
                        .size(text::P2_SIZE)
                        .padding(10),
                )
                .push(Container::new(toggle).padding([8, 0])),
        );

    let submit = if state.is_submitting() {
        button::primary_with(spinner::spinner(spinner_tick))
    } else {
        button::primary(None, "Cadastrar").on_press(Message::Submit)
    }
    .width(Length::Fill);

    let footer = Column::new()
        .spacing(4)
        .align_x(Alignment::Center)
        .push(submit)
        .push(text::p2_regular("ou").style(theme::text::secondary))
        .push(
            button::secondary(Some(icon::github_icon()), "Entre com Github")
                .width(Length::Fill)
                .on_press(Message::GithubLogin),
        );

    Container::new(
        Column::new()
            .spacing(16)
            .push(header)
            .push(email)
            .push(password)
            .push(separation())
            .push(footer),
    )
    .padding(16)
    .max_width(CARD_WIDTH)
    .style(theme::card::form)
    .into()
}
