use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

const RADIUS: f32 = 6.0;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

fn style(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: Border {
            radius: RADIUS.into(),
            width: if p.border.is_some() { 1.0 } else { 0.0 },
            color: p.border.unwrap_or(Color::TRANSPARENT),
        },
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => {
            if let Some(pressed) = p.pressed {
                style(&pressed)
            } else {
                button(p, Status::Active)
            }
        }
        Status::Disabled => {
            let base = style(&p.disabled.unwrap_or(p.active));
            Style {
                text_color: Color {
                    a: 0.5,
                    ..base.text_color
                },
                ..base
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_fades_text() {
        let theme = <Theme as Default>::default();
        let active = primary(&theme, Status::Active);
        let disabled = primary(&theme, Status::Disabled);
        assert_eq!(disabled.text_color.a, 0.5);
        assert_eq!(active.text_color.a, 1.0);
    }

    #[test]
    fn pressed_falls_back_to_active() {
        let theme = <Theme as Default>::default();
        let pressed = transparent(&theme, Status::Pressed);
        let active = transparent(&theme, Status::Active);
        assert_eq!(pressed.background, active.background);
        assert_eq!(pressed.text_color, active.text_color);
    }
}
