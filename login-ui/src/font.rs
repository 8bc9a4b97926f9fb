use iced::{
    font::{Family, Stretch, Weight},
    Font,
};

pub const SEMIBOLD: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Semibold,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const MEDIUM: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Medium,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const REGULAR: Font = Font::DEFAULT;
