//! Write keys and their validation.

use std::fmt;

use alef_common::{Result, error::Error};

use crate::index;

/// A candidate write key for [`Sequence::set`](crate::Sequence::set).
///
/// Sequences address elements by integer position only, but callers may
/// hold a would-be position as a float or as text. `Key` carries the value
/// as supplied so that validation can report it back verbatim: integer
/// keys (and integer-valued floats such as `3.0`) resolve to positions,
/// everything else fails with `InvalidKey`.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// An integer position, possibly negative (counted from the back).
    Int(i64),
    /// A floating-point position. Valid only when finite and whole.
    Float(f64),
    /// A textual key. Never valid: a sequence is not a map.
    Text(String),
}

impl Key {
    /// Resolves the key against a sequence of length `len` into a 0-based
    /// offset. Writable positions are `1..=len + 1`, where `len + 1` is the
    /// append slot; any other target would leave a hole and is rejected.
    pub(crate) fn resolve(&self, len: usize) -> Result<usize> {
        let position = match *self {
            Key::Int(position) => position,
            Key::Float(value) => {
                if !value.is_finite() || value.fract() != 0.0 {
                    return Err(Error::invalid_key(
                        self.to_string(),
                        "sequence keys must be integers",
                    ));
                }
                value as i64
            }
            Key::Text(_) => {
                return Err(Error::invalid_key(
                    self.to_string(),
                    "sequence keys must be integers",
                ));
            }
        };
        let position = index::translate(position, len);
        if position >= 1 && position <= len as i64 + 1 {
            Ok(position as usize - 1)
        } else {
            Err(Error::invalid_key(
                self.to_string(),
                format!(
                    "writable positions are 1..={} for a sequence of length {len}",
                    len + 1
                ),
            ))
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(position) => write!(f, "{position}"),
            Key::Float(value) => write!(f, "{value:?}"),
            Key::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<i64> for Key {
    fn from(position: i64) -> Key {
        Key::Int(position)
    }
}

impl From<i32> for Key {
    fn from(position: i32) -> Key {
        Key::Int(position as i64)
    }
}

impl From<u32> for Key {
    fn from(position: u32) -> Key {
        Key::Int(position as i64)
    }
}

impl From<usize> for Key {
    fn from(position: usize) -> Key {
        Key::Int(position as i64)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Key {
        Key::Float(value)
    }
}

impl From<f32> for Key {
    fn from(value: f32) -> Key {
        Key::Float(value as f64)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Key {
        Key::Text(text.to_string())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Key {
        Key::Text(text)
    }
}
