use iced::widget::container::Style;
use iced::{Background, Border, Shadow, Vector};

use super::palette::ContainerPalette;
use super::Theme;
use crate::color;

fn notification(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                width: 1.0,
                color,
                radius: 8.0.into(),
            }
        } else {
            Border {
                radius: 8.0.into(),
                ..Default::default()
            }
        },
        shadow: Shadow {
            color: color::SHADOW,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
    }
}

pub fn toast(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.toast)
}
