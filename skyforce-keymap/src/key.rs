use core::str::FromStr;

use crate::Error;

/// Logical key. The discriminant is the HID Keyboard/Keypad usage ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[allow(non_camel_case_types)]
pub enum KeyCode {
    #[default]
    None = 0x00,
    A = 0x04,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit1_Exclamation,
    Digit2_At,
    Digit3_Number,
    Digit4_Dollar,
    Digit5_Percent,
    Digit6_Circumflex,
    Digit7_Ampersand,
    Digit8_Asterisk,
    Digit9_LeftParenthesis,
    Digit0_RightParenthesis,
    Enter,
    Escape,
    Delete, // Backspace
    Tab,
    Space,
    HyphenMinus_LowLine,
    Equal_Plus,
    LeftSquareBracket_LeftCurlyBracket,
    RightSquareBracket_RightCurlyBracket,
    Backslash_VerticalBar,
    Semicolon_Colon = 0x33,
    Apostrophe_Quotation,
    Grave_Tilde,
    Comma_LessThan,
    Period_GreaterThan,
    Slash_Question,
    CapsLock,
    PageUp = 0x4b,
    DeleteForward,
    PageDown = 0x4e,
    RightArrow,
    LeftArrow,
    DownArrow,
    UpArrow,
    LeftControl = 0xe0,
    LeftShift,
    LeftAlt,
    LeftGui, // Win key(Windows), Command key(Mac), Meta key
    RightControl,
    RightShift,
    RightAlt,
}

impl KeyCode {
    pub const ALL: [KeyCode; 68] = [
        KeyCode::None,
        KeyCode::A,
        KeyCode::B,
        KeyCode::C,
        KeyCode::D,
        KeyCode::E,
        KeyCode::F,
        KeyCode::G,
        KeyCode::H,
        KeyCode::I,
        KeyCode::J,
        KeyCode::K,
        KeyCode::L,
        KeyCode::M,
        KeyCode::N,
        KeyCode::O,
        KeyCode::P,
        KeyCode::Q,
        KeyCode::R,
        KeyCode::S,
        KeyCode::T,
        KeyCode::U,
        KeyCode::V,
        KeyCode::W,
        KeyCode::X,
        KeyCode::Y,
        KeyCode::Z,
        KeyCode::Digit1_Exclamation,
        KeyCode::Digit2_At,
        KeyCode::Digit3_Number,
        KeyCode::Digit4_Dollar,
        KeyCode::Digit5_Percent,
        KeyCode::Digit6_Circumflex,
        KeyCode::Digit7_Ampersand,
        KeyCode::Digit8_Asterisk,
        KeyCode::Digit9_LeftParenthesis,
        KeyCode::Digit0_RightParenthesis,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::Delete,
        KeyCode::Tab,
        KeyCode::Space,
        KeyCode::HyphenMinus_LowLine,
        KeyCode::Equal_Plus,
        KeyCode::LeftSquareBracket_LeftCurlyBracket,
        KeyCode::RightSquareBracket_RightCurlyBracket,
        KeyCode::Backslash_VerticalBar,
        KeyCode::Semicolon_Colon,
        KeyCode::Apostrophe_Quotation,
        KeyCode::Grave_Tilde,
        KeyCode::Comma_LessThan,
        KeyCode::Period_GreaterThan,
        KeyCode::Slash_Question,
        KeyCode::CapsLock,
        KeyCode::PageUp,
        KeyCode::DeleteForward,
        KeyCode::PageDown,
        KeyCode::RightArrow,
        KeyCode::LeftArrow,
        KeyCode::DownArrow,
        KeyCode::UpArrow,
        KeyCode::LeftControl,
        KeyCode::LeftShift,
        KeyCode::LeftAlt,
        KeyCode::LeftGui,
        KeyCode::RightControl,
        KeyCode::RightShift,
        KeyCode::RightAlt,
    ];

    pub const fn usage_id(&self) -> u8 {
        *self as u8
    }

    pub const fn is_noop(&self) -> bool {
        matches!(self, KeyCode::None)
    }

    pub const fn is_modifier_key(&self) -> bool {
        (*self as u8) >= 0xe0 && (*self as u8) <= 0xe7
    }

    pub const fn is_keyboard_key(&self) -> bool {
        (*self as u8) >= 0x04 && (*self as u8) < 0xe0
    }

    /// Bit of this key in the HID modifier byte, or zero.
    pub const fn modifier_key_flag(&self) -> u8 {
        if self.is_modifier_key() {
            1 << ((*self as u8) - 0xe0)
        } else {
            0x00
        }
    }

    /// Unshifted ASCII for printable keys.
    pub const fn ascii(&self) -> Option<char> {
        const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz1234567890";
        let c = match self {
            KeyCode::Enter => '\n',
            KeyCode::Tab => '\t',
            KeyCode::Space => ' ',
            KeyCode::HyphenMinus_LowLine => '-',
            KeyCode::Equal_Plus => '=',
            KeyCode::LeftSquareBracket_LeftCurlyBracket => '[',
            KeyCode::RightSquareBracket_RightCurlyBracket => ']',
            KeyCode::Backslash_VerticalBar => '\\',
            KeyCode::Semicolon_Colon => ';',
            KeyCode::Apostrophe_Quotation => '\'',
            KeyCode::Grave_Tilde => '`',
            KeyCode::Comma_LessThan => ',',
            KeyCode::Period_GreaterThan => '.',
            KeyCode::Slash_Question => '/',
            _ => {
                let id = *self as u8;
                if id >= 0x04 && id <= 0x27 {
                    CHARS[(id - 0x04) as usize] as char
                } else {
                    return None;
                }
            }
        };
        Some(c)
    }

    /// Token used by the layout tool.
    pub const fn token(&self) -> &'static str {
        match self {
            KeyCode::None => "KC_NO",
            KeyCode::A => "KC_A",
            KeyCode::B => "KC_B",
            KeyCode::C => "KC_C",
            KeyCode::D => "KC_D",
            KeyCode::E => "KC_E",
            KeyCode::F => "KC_F",
            KeyCode::G => "KC_G",
            KeyCode::H => "KC_H",
            KeyCode::I => "KC_I",
            KeyCode::J => "KC_J",
            KeyCode::K => "KC_K",
            KeyCode::L => "KC_L",
            KeyCode::M => "KC_M",
            KeyCode::N => "KC_N",
            KeyCode::O => "KC_O",
            KeyCode::P => "KC_P",
            KeyCode::Q => "KC_Q",
            KeyCode::R => "KC_R",
            KeyCode::S => "KC_S",
            KeyCode::T => "KC_T",
            KeyCode::U => "KC_U",
            KeyCode::V => "KC_V",
            KeyCode::W => "KC_W",
            KeyCode::X => "KC_X",
            KeyCode::Y => "KC_Y",
            KeyCode::Z => "KC_Z",
            KeyCode::Digit1_Exclamation => "KC_1",
            KeyCode::Digit2_At => "KC_2",
            KeyCode::Digit3_Number => "KC_3",
            KeyCode::Digit4_Dollar => "KC_4",
            KeyCode::Digit5_Percent => "KC_5",
            KeyCode::Digit6_Circumflex => "KC_6",
            KeyCode::Digit7_Ampersand => "KC_7",
            KeyCode::Digit8_Asterisk => "KC_8",
            KeyCode::Digit9_LeftParenthesis => "KC_9",
            KeyCode::Digit0_RightParenthesis => "KC_0",
            KeyCode::Enter => "KC_ENT",
            KeyCode::Escape => "KC_ESC",
            KeyCode::Delete => "KC_BSPC",
            KeyCode::Tab => "KC_TAB",
            KeyCode::Space => "KC_SPC",
            KeyCode::HyphenMinus_LowLine => "KC_MINS",
            KeyCode::Equal_Plus => "KC_EQL",
            KeyCode::LeftSquareBracket_LeftCurlyBracket => "KC_LBRC",
            KeyCode::RightSquareBracket_RightCurlyBracket => "KC_RBRC",
            KeyCode::Backslash_VerticalBar => "KC_BSLS",
            KeyCode::Semicolon_Colon => "KC_SCLN",
            KeyCode::Apostrophe_Quotation => "KC_QUOT",
            KeyCode::Grave_Tilde => "KC_GRV",
            KeyCode::Comma_LessThan => "KC_COMM",
            KeyCode::Period_GreaterThan => "KC_DOT",
            KeyCode::Slash_Question => "KC_SLSH",
            KeyCode::CapsLock => "KC_CAPS",
            KeyCode::PageUp => "KC_PGUP",
            KeyCode::DeleteForward => "KC_DEL",
            KeyCode::PageDown => "KC_PGDN",
            KeyCode::RightArrow => "KC_RGHT",
            KeyCode::LeftArrow => "KC_LEFT",
            KeyCode::DownArrow => "KC_DOWN",
            KeyCode::UpArrow => "KC_UP",
            KeyCode::LeftControl => "KC_LCTL",
            KeyCode::LeftShift => "KC_LSFT",
            KeyCode::LeftAlt => "KC_LALT",
            KeyCode::LeftGui => "KC_LGUI",
            KeyCode::RightControl => "KC_RCTL",
            KeyCode::RightShift => "KC_RSFT",
            KeyCode::RightAlt => "KC_RALT",
        }
    }

    /// Parses a layout-tool token. Accepts the canonical spelling and the
    /// long QMK aliases.
    pub fn from_token(token: &str) -> Result<KeyCode, Error> {
        if let Some(key) = Self::ALL.iter().find(|key| key.token() == token) {
            return Ok(*key);
        }
        let key = match token {
            "KC_ESCAPE" => KeyCode::Escape,
            "KC_ENTER" => KeyCode::Enter,
            "KC_SPACE" => KeyCode::Space,
            "KC_BACKSPACE" => KeyCode::Delete,
            "KC_DELETE" => KeyCode::DeleteForward,
            "KC_CAPSLOCK" => KeyCode::CapsLock,
            "KC_GRAVE" => KeyCode::Grave_Tilde,
            "KC_MINUS" => KeyCode::HyphenMinus_LowLine,
            "KC_EQUAL" => KeyCode::Equal_Plus,
            "KC_LBRACKET" => KeyCode::LeftSquareBracket_LeftCurlyBracket,
            "KC_RBRACKET" => KeyCode::RightSquareBracket_RightCurlyBracket,
            "KC_BSLASH" => KeyCode::Backslash_VerticalBar,
            "KC_SCOLON" => KeyCode::Semicolon_Colon,
            "KC_QUOTE" => KeyCode::Apostrophe_Quotation,
            "KC_COMMA" => KeyCode::Comma_LessThan,
            "KC_SLASH" => KeyCode::Slash_Question,
            "KC_PGDOWN" => KeyCode::PageDown,
            "KC_RIGHT" => KeyCode::RightArrow,
            "KC_LCTRL" => KeyCode::LeftControl,
            "KC_RCTRL" => KeyCode::RightControl,
            "KC_LSHIFT" => KeyCode::LeftShift,
            "KC_RSHIFT" => KeyCode::RightShift,
            _ => return Err(Error::unknown_token(token)),
        };
        Ok(key)
    }
}

impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCode::from_token(s)
    }
}
