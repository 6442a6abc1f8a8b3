use skyforce_keymap_macros::keymap;

use crate::{KeyCode, KeyPosition, Vec};

pub const MATRIX_ROWS: usize = 5;
pub const MATRIX_COLS: usize = 15;

/// Fixed grid of key codes indexed by matrix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap<const ROWS: usize, const COLS: usize> {
    key_codes: [[KeyCode; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Keymap<ROWS, COLS> {
    pub const fn new(key_codes: [[KeyCode; COLS]; ROWS]) -> Self {
        // positions are addressed with u8
        assert!(ROWS <= 256 && COLS <= 256, "keymap too large");
        Keymap { key_codes }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Key at (`row`, `col`), or [`KeyCode::None`] outside the matrix.
    pub const fn get(&self, row: usize, col: usize) -> KeyCode {
        if row >= ROWS || col >= COLS {
            return KeyCode::None;
        }
        self.key_codes[row][col]
    }

    pub const fn key(&self, position: KeyPosition) -> KeyCode {
        self.get(position.row as usize, position.col as usize)
    }

    /// Translates the switches pressed in one scan. Unwired switches are
    /// skipped and anything past `RO` keys is dropped.
    pub fn keys<const RO: usize>(&self, positions: &[KeyPosition]) -> Vec<KeyCode, RO> {
        let mut keys = Vec::new();
        for key in positions
            .iter()
            .map(|position| self.key(*position))
            .filter(|key| !key.is_noop())
        {
            if keys.push(key).is_err() {
                break;
            }
        }
        keys
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyPosition, KeyCode)> + '_ {
        self.key_codes.iter().enumerate().flat_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .map(move |(col, key)| (KeyPosition::new(row as u8, col as u8), *key))
        })
    }

    pub fn positions_of<const N: usize>(&self, key: KeyCode) -> Vec<KeyPosition, N> {
        let mut positions = Vec::new();
        for (position, _) in self.iter().filter(|(_, k)| *k == key) {
            if positions.push(position).is_err() {
                break;
            }
        }
        positions
    }
}

// Enter is wired to two columns.
pub static SKYFORCE: Keymap<MATRIX_ROWS, MATRIX_COLS> = Keymap::new(keymap! {r"
    | KC_ESC  | KC_1    | KC_2    | KC_3  | KC_4  | KC_5   | KC_6  | KC_7  | KC_8    | KC_9   | KC_0    | KC_MINS | KC_EQL  | KC_BSPC | KC_GRV  |
    | KC_TAB  | KC_Q    | KC_W    | KC_E  | KC_R  | KC_T   | KC_Y  | KC_U  | KC_I    | KC_O   | KC_P    | KC_LBRC | KC_RBRC | KC_BSLS | KC_DEL  |
    | KC_CAPS | KC_A    | KC_S    | KC_D  | KC_F  | KC_G   | KC_H  | KC_J  | KC_K    | KC_L   | KC_SCLN | KC_QUOT | KC_ENT  | KC_ENT  | KC_PGUP |
    | KC_LSFT | KC_Z    | KC_X    | KC_C  | KC_V  | KC_B   | KC_N  | KC_M  | KC_COMM | KC_DOT | KC_SLSH | KC_NO   | KC_RSFT | KC_UP   | KC_PGDN |
    | KC_LCTL | KC_LGUI | KC_LALT | KC_NO | KC_NO | KC_SPC | KC_NO | KC_NO | KC_NO   | KC_RALT| KC_RCTL | KC_NO   | KC_LEFT | KC_DOWN | KC_RGHT |
"});

/// Looks up the Skyforce matrix. Accepts any integer type; negative or
/// oversized coordinates read as [`KeyCode::None`].
pub fn get<R, C>(row: R, col: C) -> KeyCode
where
    R: TryInto<usize>,
    C: TryInto<usize>,
{
    match (row.try_into(), col.try_into()) {
        (Ok(row), Ok(col)) => SKYFORCE.get(row, col),
        _ => KeyCode::None,
    }
}
