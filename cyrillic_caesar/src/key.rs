//! Validated shift key

use std::fmt;
use std::str::FromStr;

use crate::alphabet::LEN;
use crate::error::{CaesarError, Result};

/// Largest accepted key magnitude
pub const MAX_KEY: i32 = LEN as i32 - 1;

/// A signed shift in `[-MAX_KEY, MAX_KEY]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftKey(i32);

impl ShiftKey {
    pub fn new(key: i32) -> Result<Self> {
        if (-MAX_KEY..=MAX_KEY).contains(&key) {
            Ok(Self(key))
        } else {
            Err(CaesarError::KeyOutOfRange { key: key.into() })
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn negated(self) -> Self {
        Self(-self.0)
    }

    /// The key reduced to `[0, LEN)`; never negative.
    pub fn offset(self) -> usize {
        self.0.rem_euclid(LEN as i32) as usize
    }

    /// Shifts an alphabet position by this key with wraparound.
    pub fn apply(self, index: usize) -> usize {
        (index + self.offset()) % LEN
    }
}

impl FromStr for ShiftKey {
    type Err = CaesarError;

    fn from_str(token: &str) -> Result<Self> {
        let key: i64 = token.trim().parse().map_err(|_| CaesarError::InvalidKey {
            token: token.to_string(),
        })?;
        i32::try_from(key)
            .map_err(|_| CaesarError::KeyOutOfRange { key })
            .and_then(Self::new)
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert!(ShiftKey::new(32).is_ok());
        assert!(ShiftKey::new(-32).is_ok());
        assert!(matches!(ShiftKey::new(33), Err(CaesarError::KeyOutOfRange { key: 33 })));
        assert!(matches!(ShiftKey::new(-33), Err(CaesarError::KeyOutOfRange { key: -33 })));
    }

    #[test]
    fn test_offset_is_non_negative() {
        assert_eq!(ShiftKey::new(-1).unwrap().offset(), 32);
        assert_eq!(ShiftKey::new(-32).unwrap().offset(), 1);
        assert_eq!(ShiftKey::new(0).unwrap().offset(), 0);
        assert_eq!(ShiftKey::new(5).unwrap().offset(), 5);
    }

    #[test]
    fn test_apply_wraps() {
        let key = ShiftKey::new(-1).unwrap();
        assert_eq!(key.apply(0), 32);
        assert_eq!(ShiftKey::new(2).unwrap().apply(32), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("-3".parse::<ShiftKey>().unwrap().value(), -3);
        assert_eq!(" 7 ".parse::<ShiftKey>().unwrap().value(), 7);
        assert!(matches!("abc".parse::<ShiftKey>(), Err(CaesarError::InvalidKey { .. })));
        assert!(matches!("99".parse::<ShiftKey>(), Err(CaesarError::KeyOutOfRange { key: 99 })));
        assert!(matches!(
            "99999999999".parse::<ShiftKey>(),
            Err(CaesarError::KeyOutOfRange { .. })
        ));
    }
}
