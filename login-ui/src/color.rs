use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

// Zinc scale, light to dark.
pub const ZINC_50: Color = Color::from_rgb(
    0xFA as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xFA as f32 / 255.0,
);
pub const ZINC_100: Color = Color::from_rgb(
    0xF4 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF5 as f32 / 255.0,
);
pub const ZINC_200: Color = Color::from_rgb(
    0xE4 as f32 / 255.0,
    0xE4 as f32 / 255.0,
    0xE7 as f32 / 255.0,
);
pub const ZINC_400: Color = Color::from_rgb(
    0xA1 as f32 / 255.0,
    0xA1 as f32 / 255.0,
    0xAA as f32 / 255.0,
);
pub const ZINC_500: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x7A as f32 / 255.0,
);
pub const ZINC_800: Color = Color::from_rgb(
    0x27 as f32 / 255.0,
    0x27 as f32 / 255.0,
    0x2A as f32 / 255.0,
);
pub const ZINC_900: Color = Color::from_rgb(
    0x18 as f32 / 255.0,
    0x18 as f32 / 255.0,
    0x1B as f32 / 255.0,
);

pub const RED: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);

pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.08);
