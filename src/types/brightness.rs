//! Brightness control for Wiz lights.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Brightness level from 0 to 100 percent, sent as the `dimming` parameter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MIN: u8 = 0;
    const MAX: u8 = 100;

    /// Full brightness.
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_full(&self) -> bool {
        self.value == Self::MAX
    }

    /// Returns None if value is outside the valid range (0-100).
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_bulb_tools::Brightness;
    ///
    /// assert!(Brightness::create(0).is_some());
    /// assert!(Brightness::create(100).is_some());
    /// assert!(Brightness::create(101).is_none());
    /// assert!(Brightness::create(-1).is_none());
    /// ```
    pub fn create(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Brightness { value: value as u8 })
        } else {
            None
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<i64> for Brightness {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Brightness::create(value).ok_or(Error::InvalidBrightness(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert!(Brightness::new().is_full());
        assert_eq!(Brightness::new().value(), 100);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Brightness::try_from(40).unwrap().value(), 40);
        assert_eq!(
            Brightness::try_from(250).unwrap_err(),
            Error::InvalidBrightness(250)
        );
        assert_eq!(
            Brightness::try_from(-5).unwrap_err(),
            Error::InvalidBrightness(-5)
        );
    }
}
