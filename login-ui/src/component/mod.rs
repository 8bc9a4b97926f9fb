pub mod button;
pub mod form;
pub mod spinner;
pub mod text;
pub mod toast;

use iced::Length;

use crate::{theme, widget::*};

/// Thin horizontal rule.
pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Column::new())
        .style(theme::container::separator)
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
}
