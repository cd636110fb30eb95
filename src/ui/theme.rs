use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);

pub const CARD_BORDER: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
pub const CARD_TITLE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CARD_LABEL: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

pub const CATEGORY_TAG: Color = Color::Rgb(0x1e, 0x40, 0xaf);
pub const CATEGORY_TAG_BG: Color = Color::Rgb(0xdb, 0xea, 0xfe);
pub const CUISINE_TAG: Color = Color::Rgb(0x16, 0x65, 0x34);
pub const CUISINE_TAG_BG: Color = Color::Rgb(0xdc, 0xfc, 0xe7);

pub const SKIP_BUTTON: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SAVE_BUTTON: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
