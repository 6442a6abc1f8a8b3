use skyforce_keymap::{get, keymap, KeyCode, KeyPosition, Keymap, MATRIX_COLS, MATRIX_ROWS, SKYFORCE};

const EXPECTED: [[&str; 15]; 5] = [
    [
        "KC_ESC", "KC_1", "KC_2", "KC_3", "KC_4", "KC_5", "KC_6", "KC_7", "KC_8", "KC_9", "KC_0",
        "KC_MINS", "KC_EQL", "KC_BSPC", "KC_GRV",
    ],
    [
        "KC_TAB", "KC_Q", "KC_W", "KC_E", "KC_R", "KC_T", "KC_Y", "KC_U", "KC_I", "KC_O", "KC_P",
        "KC_LBRC", "KC_RBRC", "KC_BSLS", "KC_DEL",
    ],
    [
        "KC_CAPS", "KC_A", "KC_S", "KC_D", "KC_F", "KC_G", "KC_H", "KC_J", "KC_K", "KC_L",
        "KC_SCLN", "KC_QUOT", "KC_ENT", "KC_ENT", "KC_PGUP",
    ],
    [
        "KC_LSFT", "KC_Z", "KC_X", "KC_C", "KC_V", "KC_B", "KC_N", "KC_M", "KC_COMM", "KC_DOT",
        "KC_SLSH", "KC_NO", "KC_RSFT", "KC_UP", "KC_PGDN",
    ],
    [
        "KC_LCTL", "KC_LGUI", "KC_LALT", "KC_NO", "KC_NO", "KC_SPC", "KC_NO", "KC_NO", "KC_NO",
        "KC_RALT", "KC_RCTL", "KC_NO", "KC_LEFT", "KC_DOWN", "KC_RGHT",
    ],
];

#[test]
fn every_position_matches_layout() {
    for (row, tokens) in EXPECTED.iter().enumerate() {
        for (col, token) in tokens.iter().enumerate() {
            let expected = KeyCode::from_token(token).unwrap();
            assert_eq!(get(row, col), expected, "({}, {})", row, col);
            assert_eq!(get(row, col).token(), *token);
            assert_eq!(SKYFORCE.key(KeyPosition::new(row as u8, col as u8)), expected);
        }
    }
}

#[test]
fn iter_visits_every_position() {
    let cells = SKYFORCE.iter().collect::<Vec<_>>();
    assert_eq!(cells.len(), MATRIX_ROWS * MATRIX_COLS);
    for (position, key) in cells {
        let token = EXPECTED[position.row as usize][position.col as usize];
        assert_eq!(key.token(), token);
    }
}

#[test]
fn rows_out_of_range() {
    for row in [5usize, 6, 255, 256, 1 << 20, usize::MAX] {
        for col in 0..MATRIX_COLS {
            assert_eq!(get(row, col), KeyCode::None);
        }
    }
    for row in [-1i32, -5, i32::MIN] {
        assert_eq!(get(row, 0), KeyCode::None);
    }
    assert_eq!(get(-1i8 as u8, 0u8), KeyCode::None);
}

#[test]
fn cols_out_of_range() {
    for row in 0..MATRIX_ROWS {
        for col in [15usize, 16, 255, 1 << 20, usize::MAX] {
            assert_eq!(get(row, col), KeyCode::None);
        }
        assert_eq!(get(row, -1i16), KeyCode::None);
        assert_eq!(get(row as u8, u8::MAX), KeyCode::None);
    }
}

#[test]
fn bounds_are_exclusive() {
    assert_eq!(get(4, 14), KeyCode::RightArrow);
    assert_eq!(get(5, 0), KeyCode::None);
    assert_eq!(get(0, 15), KeyCode::None);
    assert_eq!(get(5, 15), KeyCode::None);
}

#[test]
fn layout_scenario() {
    assert_eq!(get(0, 0), KeyCode::Escape);
    assert_eq!(get(1, 1), KeyCode::Q);
    assert_eq!(get(2, 12), KeyCode::Enter);
    assert_eq!(get(2, 13), KeyCode::Enter);
    assert_eq!(get(4, 5), KeyCode::Space);
    assert_eq!(get(9, 9), KeyCode::None);
}

#[test]
fn lookups_are_idempotent() {
    for _ in 0..3 {
        assert_eq!(get(3, 12), KeyCode::RightShift);
        assert_eq!(get(3, 11), KeyCode::None);
        assert_eq!(get(100, 100), KeyCode::None);
    }
}

#[test]
fn wired_positions_are_never_empty() {
    for (position, key) in SKYFORCE.iter() {
        assert!(!key.token().is_empty(), "{:?}", position);
    }
}

#[test]
fn scan_cycle_translation() {
    let pressed = [
        KeyPosition::from([3, 0]),
        KeyPosition::from([1, 1]),
        KeyPosition::from([4, 3]),
        KeyPosition::from([7, 0]),
    ];
    let keys = SKYFORCE.keys::<6>(&pressed);
    assert_eq!(keys.as_slice(), &[KeyCode::LeftShift, KeyCode::Q]);
    assert_eq!(keys[0].modifier_key_flag(), 0x02);
    assert_eq!(keys[1].ascii(), Some('q'));
}

#[test]
fn keymap_macro_builds_custom_tables() {
    const NUMPAD: Keymap<2, 2> = Keymap::new(keymap! {r"
        | KC_1 | KC_2   |
        | KC_0 | KC_ENT |
    "});
    assert_eq!(NUMPAD.get(1, 1), KeyCode::Enter);
    assert_eq!(NUMPAD.get(2, 0), KeyCode::None);
}
