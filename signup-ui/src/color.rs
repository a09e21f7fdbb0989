use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

pub const GREY_7: Color = Color::from_rgb(
    0x37 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x51 as f32 / 255.0,
); // #374151
pub const GREY_3: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
); // #9CA3AF
pub const GREY_1: Color = Color::from_rgb(
    0xE5 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
); // #E5E7EB

// Amber/yellow scale used by the signup screens.
pub const YELLOW_50: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xFC as f32 / 255.0,
    0xE8 as f32 / 255.0,
); // #FEFCE8
pub const YELLOW_100: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xF9 as f32 / 255.0,
    0xC3 as f32 / 255.0,
); // #FEF9C3
pub const YELLOW_600: Color = Color::from_rgb(
    0xCA as f32 / 255.0,
    0x8A as f32 / 255.0,
    0x04 as f32 / 255.0,
); // #CA8A04
pub const YELLOW_700: Color = Color::from_rgb(
    0xA1 as f32 / 255.0,
    0x62 as f32 / 255.0,
    0x07 as f32 / 255.0,
); // #A16207
pub const YELLOW_800: Color = Color::from_rgb(
    0x85 as f32 / 255.0,
    0x4D as f32 / 255.0,
    0x0E as f32 / 255.0,
); // #854D0E
pub const YELLOW_900: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x12 as f32 / 255.0,
); // #713F12

pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
); // #DC2626
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xE2 as f32 / 255.0,
    0xE2 as f32 / 255.0,
); // #FEE2E2
