use core::fmt;

use heapless::String;

/// Longest token kept in an [`Error`]; longer input is cut off.
pub const TOKEN_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    UnknownToken { token: String<TOKEN_CAPACITY> },
}

impl Error {
    pub(crate) fn unknown_token(token: &str) -> Self {
        let mut truncated = String::new();
        for c in token.chars() {
            if truncated.push(c).is_err() {
                break;
            }
        }
        Error::UnknownToken { token: truncated }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownToken { token } => write!(f, "unknown key code token `{}`", token),
        }
    }
}
