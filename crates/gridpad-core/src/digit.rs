//! Cell value representation.

use std::fmt::{self, Display};

/// A single-character cell value in the range `0`-`9`.
///
/// Each variant corresponds to exactly one decimal digit. A cell holds an
/// `Option<Digit>`, where `None` is an empty cell.
///
/// # Examples
///
/// ```
/// use gridpad_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
/// assert_eq!(digit.as_char(), '5');
///
/// assert_eq!(Digit::from_char('7'), Some(Digit::D7));
/// assert_eq!(Digit::from_char('x'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 0 to 9.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    ///
    /// ```should_panic
    /// use gridpad_core::Digit;
    ///
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value: {value}"),
        }
    }

    /// Parses a digit from its character form.
    ///
    /// Returns `None` for anything other than an ASCII decimal digit.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let value = c.to_digit(10)?;
        u8::try_from(value).ok().map(Self::from_value)
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the character form of this digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.value()) as char
    }

    /// Returns the string form of this digit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D0 => "0",
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Digit::from_value(0), Digit::D0);
        assert_eq!(Digit::from_value(9), Digit::D9);
        assert_eq!(Digit::D0.value(), 0);
        assert_eq!(Digit::D9.value(), 9);

        assert_eq!(Digit::ALL.len(), 10);
        assert_eq!(Digit::ALL[0], Digit::D0);
        assert_eq!(Digit::ALL[9], Digit::D9);

        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::from_char(digit.as_char()), Some(digit));
            assert_eq!(digit.to_string(), digit.as_str());
        }

        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
        let c: char = Digit::D3.into();
        assert_eq!(c, '3');
    }

    #[test]
    fn test_from_char_rejects_non_digits() {
        for c in ['a', ' ', '-', '٣', 'Ⅻ'] {
            assert_eq!(Digit::from_char(c), None, "{c:?}");
        }
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Digit::from_value(10);
    }
}
