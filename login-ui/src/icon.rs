//! Icon glyphs.
//!
//! Glyphs come from the fallback fonts picked by the text shaper, so every icon
//! is rendered with advanced shaping.

use crate::{component::text::P1_SIZE, widget::*};
use iced::{advanced::text::Shaping, alignment, Length};

fn glyph<'a>(unicode: char) -> Text<'a> {
    Text::new(unicode.to_string())
        .shaping(Shaping::Advanced)
        .width(Length::Fixed(20.0))
        .align_x(alignment::Horizontal::Center)
        .size(P1_SIZE)
}

pub fn check_icon<'a>() -> Text<'a> {
    glyph('\u{2713}')
}

pub fn info_icon<'a>() -> Text<'a> {
    glyph('\u{2139}')
}

pub fn cross_icon<'a>() -> Text<'a> {
    glyph('\u{2715}')
}

pub fn eye_icon<'a>() -> Text<'a> {
    glyph('\u{25C9}')
}

pub fn eye_slash_icon<'a>() -> Text<'a> {
    glyph('\u{25CE}')
}

pub fn github_icon<'a>() -> Text<'a> {
    glyph('\u{2B22}')
}
