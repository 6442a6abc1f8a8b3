//! Key matrix layout of the Skyforce board.
//!
//! The board is a 5×15 ANSI matrix. [`get`] turns a scanned (row, col) into a
//! [`KeyCode`]; anything outside the matrix reads as [`KeyCode::None`].

#![cfg_attr(not(test), no_std)]

extern crate self as skyforce_keymap;

mod error;
pub mod key;
pub mod keymap;
pub mod position;

pub use error::Error;
pub use heapless::Vec;
pub use key::KeyCode;
pub use keymap::{get, Keymap, MATRIX_COLS, MATRIX_ROWS, SKYFORCE};
pub use position::KeyPosition;
pub use skyforce_keymap_macros::keymap;
