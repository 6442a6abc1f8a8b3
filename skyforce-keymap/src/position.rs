/// Physical switch location on the key matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPosition {
    pub row: u8,
    pub col: u8,
}

impl KeyPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        KeyPosition { row, col }
    }
}

impl From<[u8; 2]> for KeyPosition {
    fn from(value: [u8; 2]) -> Self {
        KeyPosition {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<KeyPosition> for [u8; 2] {
    fn from(value: KeyPosition) -> Self {
        [value.row, value.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_matrix_identifier() {
        assert_eq!(KeyPosition::from([2, 12]), KeyPosition::new(2, 12));
        assert_eq!(<[u8; 2]>::from(KeyPosition::new(4, 14)), [4, 14]);
    }

    #[test]
    fn orders_row_major() {
        assert!(KeyPosition::new(0, 14) < KeyPosition::new(1, 0));
        assert!(KeyPosition::new(2, 12) < KeyPosition::new(2, 13));
    }
}
