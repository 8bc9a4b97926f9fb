use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub separator: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub form: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub toast: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::WHITE,
            },
            text: Text {
                primary: color::ZINC_900,
                secondary: color::ZINC_500,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::ZINC_900,
                        text: color::ZINC_50,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::ZINC_800,
                        text: color::ZINC_50,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::ZINC_800,
                        text: color::ZINC_50,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::ZINC_800,
                        text: color::ZINC_50,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::ZINC_100,
                        text: color::ZINC_900,
                        border: color::ZINC_200.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::ZINC_200,
                        text: color::ZINC_900,
                        border: color::ZINC_200.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::ZINC_200,
                        text: color::ZINC_900,
                        border: color::ZINC_400.into(),
                    }),
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::ZINC_500,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::ZINC_900,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                form: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::ZINC_200.into(),
                },
            },
            notifications: Notifications {
                toast: ContainerPalette {
                    background: color::WHITE,
                    text: color::ZINC_900.into(),
                    border: color::ZINC_200.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::ZINC_500,
                        placeholder: color::ZINC_400,
                        value: color::ZINC_900,
                        selection: color::ZINC_200,
                        border: Some(color::ZINC_200),
                    },
                    focused: TextInputPalette {
                        background: color::WHITE,
                        icon: color::ZINC_500,
                        placeholder: color::ZINC_400,
                        value: color::ZINC_900,
                        selection: color::ZINC_200,
                        border: Some(color::ZINC_400),
                    },
                    disabled: TextInputPalette {
                        background: color::ZINC_100,
                        icon: color::ZINC_400,
                        placeholder: color::ZINC_400,
                        value: color::ZINC_500,
                        selection: color::ZINC_200,
                        border: Some(color::ZINC_200),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::ZINC_500,
                        placeholder: color::ZINC_400,
                        value: color::ZINC_900,
                        selection: color::ZINC_200,
                        border: Some(color::RED),
                    },
                    focused: TextInputPalette {
                        background: color::WHITE,
                        icon: color::ZINC_500,
                        placeholder: color::ZINC_400,
                        value: color::ZINC_900,
                        selection: color::ZINC_200,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::ZINC_100,
                        icon: color::ZINC_400,
                        placeholder: color::ZINC_400,
                        value: color::ZINC_500,
                        selection: color::ZINC_200,
                        border: Some(color::RED),
                    },
                },
            },
            separator: color::ZINC_200,
        }
    }
}
