use iced::{Alignment, Length};

use crate::{
    component::{button, text},
    icon, theme,
    widget::*,
};

pub const TOAST_WIDTH: f32 = 356.0;

/// Transient notification card.
///
/// `action` is an optional labelled button; `on_close` is emitted by the cross
/// in the top right corner.
pub fn toast<'a, T: 'a + Clone>(
    glyph: Option<Text<'a>>,
    title: &'a str,
    description: &'a str,
    action: Option<(&'static str, T)>,
    on_close: T,
) -> Container<'a, T> {
    let header = Row::new()
        .spacing(8)
        .align_y(Alignment::Center)
        .push_maybe(glyph.map(|g| g.style(theme::text::primary)))
        .push(
            Container::new(text::p2_semibold(title).style(theme::text::primary))
                .width(Length::Fill),
        )
        .push(button::icon(icon::cross_icon().size(text::CAPTION_SIZE)).on_press(on_close));

    let body = Row::new()
        .spacing(8)
        .align_y(Alignment::End)
        .push(
            Container::new(text::p2_regular(description).style(theme::text::secondary))
                .width(Length::Fill),
        )
        .push_maybe(action.map(|(label, message)| {
            button::primary(None, label)
                .width(Length::Shrink)
                .padding([2, 8])
                .on_press(message)
        }));

    Container::new(Column::new().spacing(6).push(header).push(body))
        .padding(16)
        .width(Length::Fixed(TOAST_WIDTH))
        .style(theme::notification::toast)
}
