use crate::{component::text::P1_SIZE, widget::*};
use iced::advanced::text::Shaping;

/// Braille frames of the busy indicator, advanced one per animation tick.
pub const FRAMES: [char; 10] = [
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

pub fn frame(tick: usize) -> char {
    FRAMES[tick % FRAMES.len()]
}

pub fn spinner<'a>(tick: usize) -> Text<'a> {
    Text::new(frame(tick).to_string())
        .shaping(Shaping::Advanced)
        .size(P1_SIZE)
}
