use iced::{
    alignment::{Horizontal, Vertical},
    Length,
};
use login_ui::{component::toast::toast, icon, widget::*};

use crate::{
    app::Message,
    notification::{Icon, Toasts},
};

fn glyph<'a>(kind: Icon) -> Text<'a> {
    match kind {
        Icon::Check => icon::check_icon(),
        Icon::Info => icon::info_icon(),
    }
}

/// Toast stack pinned to the bottom right corner, newest at the bottom.
pub fn toasts_view(toasts: &Toasts) -> Element<'_, Message> {
    let column = toasts.iter().rev().fold(Column::new().spacing(10), |col, t| {
        col.push(toast(
            Some(glyph(t.notification.icon)),
            &t.notification.title,
            &t.notification.description,
            t.notification
                .action
                .as_ref()
                .map(|a| (a.label, Message::ToastAction(t.id))),
            Message::DismissToast(t.id),
        ))
    });

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(24)
        .into()
}
