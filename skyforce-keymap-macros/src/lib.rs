use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, LitStr};

macro_rules! key {
    ($n:literal, $i:ident) => {
        ($n, quote!(::skyforce_keymap::KeyCode::$i))
    };
}

fn token_table() -> HashMap<&'static str, TokenStream> {
    [
        key!("", None),
        key!("KC_NO", None),
        key!("KC_A", A),
        key!("KC_B", B),
        key!("KC_C", C),
        key!("KC_D", D),
        key!("KC_E", E),
        key!("KC_F", F),
        key!("KC_G", G),
        key!("KC_H", H),
        key!("KC_I", I),
        key!("KC_J", J),
        key!("KC_K", K),
        key!("KC_L", L),
        key!("KC_M", M),
        key!("KC_N", N),
        key!("KC_O", O),
        key!("KC_P", P),
        key!("KC_Q", Q),
        key!("KC_R", R),
        key!("KC_S", S),
        key!("KC_T", T),
        key!("KC_U", U),
        key!("KC_V", V),
        key!("KC_W", W),
        key!("KC_X", X),
        key!("KC_Y", Y),
        key!("KC_Z", Z),
        key!("KC_1", Digit1_Exclamation),
        key!("KC_2", Digit2_At),
        key!("KC_3", Digit3_Number),
        key!("KC_4", Digit4_Dollar),
        key!("KC_5", Digit5_Percent),
        key!("KC_6", Digit6_Circumflex),
        key!("KC_7", Digit7_Ampersand),
        key!("KC_8", Digit8_Asterisk),
        key!("KC_9", Digit9_LeftParenthesis),
        key!("KC_0", Digit0_RightParenthesis),
        key!("KC_ENT", Enter),
        key!("KC_ENTER", Enter),
        key!("KC_ESC", Escape),
        key!("KC_ESCAPE", Escape),
        key!("KC_BSPC", Delete),
        key!("KC_BACKSPACE", Delete),
        key!("KC_TAB", Tab),
        key!("KC_SPC", Space),
        key!("KC_SPACE", Space),
        key!("KC_MINS", HyphenMinus_LowLine),
        key!("KC_MINUS", HyphenMinus_LowLine),
        key!("KC_EQL", Equal_Plus),
        key!("KC_EQUAL", Equal_Plus),
        key!("KC_LBRC", LeftSquareBracket_LeftCurlyBracket),
        key!("KC_LBRACKET", LeftSquareBracket_LeftCurlyBracket),
        key!("KC_RBRC", RightSquareBracket_RightCurlyBracket),
        key!("KC_RBRACKET", RightSquareBracket_RightCurlyBracket),
        key!("KC_BSLS", Backslash_VerticalBar),
        key!("KC_BSLASH", Backslash_VerticalBar),
        key!("KC_SCLN", Semicolon_Colon),
        key!("KC_SCOLON", Semicolon_Colon),
        key!("KC_QUOT", Apostrophe_Quotation),
        key!("KC_QUOTE", Apostrophe_Quotation),
        key!("KC_GRV", Grave_Tilde),
        key!("KC_GRAVE", Grave_Tilde),
        key!("KC_COMM", Comma_LessThan),
        key!("KC_COMMA", Comma_LessThan),
        key!("KC_DOT", Period_GreaterThan),
        key!("KC_SLSH", Slash_Question),
        key!("KC_SLASH", Slash_Question),
        key!("KC_CAPS", CapsLock),
        key!("KC_CAPSLOCK", CapsLock),
        key!("KC_PGUP", PageUp),
        key!("KC_DEL", DeleteForward),
        key!("KC_DELETE", DeleteForward),
        key!("KC_PGDN", PageDown),
        key!("KC_PGDOWN", PageDown),
        key!("KC_RGHT", RightArrow),
        key!("KC_RIGHT", RightArrow),
        key!("KC_LEFT", LeftArrow),
        key!("KC_DOWN", DownArrow),
        key!("KC_UP", UpArrow),
        key!("KC_LCTL", LeftControl),
        key!("KC_LCTRL", LeftControl),
        key!("KC_LSFT", LeftShift),
        key!("KC_LSHIFT", LeftShift),
        key!("KC_LALT", LeftAlt),
        key!("KC_LGUI", LeftGui),
        key!("KC_RCTL", RightControl),
        key!("KC_RCTRL", RightControl),
        key!("KC_RSFT", RightShift),
        key!("KC_RSHIFT", RightShift),
        key!("KC_RALT", RightAlt),
    ]
    .into_iter()
    .collect()
}

/// Builds a `[[KeyCode; COLS]; ROWS]` from a table of layout-tool tokens.
///
/// ```ignore
/// const KEY_CODES: [[KeyCode; 3]; 2] = keymap! {r"
///     | KC_ESC | KC_1 | KC_2 |
///     | KC_TAB | KC_Q |      |
/// "};
/// ```
///
/// An empty cell is `KC_NO`.
#[proc_macro]
pub fn keymap(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as LitStr).value();
    proc_macro::TokenStream::from(expand(&input))
}

fn expand(input: &str) -> TokenStream {
    let table = token_table();
    let mut width = None;

    let mut rows = Vec::new();
    for (index, line) in input
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        if line.len() < 2 || !line.starts_with('|') || !line.ends_with('|') {
            let message = format!("keymap: Row {} must start and end with '|'", index);
            return quote!(compile_error!(#message));
        }
        let cells = line[1..line.len() - 1]
            .split('|')
            .map(str::trim)
            .collect::<Vec<_>>();

        match width {
            None => width = Some(cells.len()),
            Some(width) if width != cells.len() => {
                let message = format!(
                    "keymap: Row {} has {} keys, expected {}",
                    index,
                    cells.len(),
                    width
                );
                return quote!(compile_error!(#message));
            }
            Some(_) => {}
        }

        let keys = cells
            .into_iter()
            .map(|k| {
                if let Some(key) = table.get(k) {
                    key.clone()
                } else {
                    let message = "keymap: Unknown token: ".to_string() + k;
                    quote!(compile_error!(#message))
                }
            })
            .collect::<Vec<_>>();
        rows.push(quote!([#(#keys),*]));
    }

    quote!([#(#rows),*])
}
