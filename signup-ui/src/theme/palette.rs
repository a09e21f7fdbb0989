use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub radio_buttons: RadioButtons,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub accent: iced::Color,
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
    pub link: Button,
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
    pub simple: ContainerPalette,
    pub highlight: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub default: ContainerPalette,
    pub destructive: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
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

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadioButtons {
    pub dot: iced::Color,
    pub text: iced::Color,
    pub border: iced::Color,
    pub background: iced::Color,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::YELLOW_50,
            },
            text: Text {
                primary: color::YELLOW_900,
                secondary: color::YELLOW_800,
                accent: color::GREY_7,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::YELLOW_600,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::YELLOW_700,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::YELLOW_700,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::YELLOW_600,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::YELLOW_800,
                        border: color::YELLOW_600.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::YELLOW_100,
                        text: color::YELLOW_900,
                        border: color::YELLOW_700.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::YELLOW_800,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::YELLOW_900,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLACK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLACK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_1.into(),
                },
                highlight: ContainerPalette {
                    background: color::YELLOW_100,
                    text: color::YELLOW_900.into(),
                    border: None,
                },
            },
            notifications: Notifications {
                default: ContainerPalette {
                    background: color::WHITE,
                    text: color::GREY_7.into(),
                    border: color::GREY_1.into(),
                },
                destructive: ContainerPalette {
                    background: color::RED,
                    text: color::WHITE.into(),
                    border: color::RED.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::BLACK,
                        selection: color::YELLOW_100,
                        border: color::GREY_1.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_7,
                        selection: color::YELLOW_100,
                        border: color::GREY_1.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_RED,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::BLACK,
                        selection: color::YELLOW_100,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_7,
                        selection: color::YELLOW_100,
                        border: color::RED.into(),
                    },
                },
            },
            radio_buttons: RadioButtons {
                dot: color::YELLOW_600,
                text: color::YELLOW_900,
                border: color::YELLOW_600,
                background: color::WHITE,
            },
        }
    }
}
