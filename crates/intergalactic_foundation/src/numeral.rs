//! The classical Roman numeral letters.

use std::fmt;

/// One of the seven classical Roman numeral letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RomanLetter {
    /// 1
    I,
    /// 5
    V,
    /// 10
    X,
    /// 50
    L,
    /// 100
    C,
    /// 500
    D,
    /// 1000
    M,
}

impl RomanLetter {
    /// All letters in ascending value order.
    pub const ALL: [RomanLetter; 7] = [
        RomanLetter::I,
        RomanLetter::V,
        RomanLetter::X,
        RomanLetter::L,
        RomanLetter::C,
        RomanLetter::D,
        RomanLetter::M,
    ];

    /// Returns the numeric value of this letter.
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
            Self::L => 50,
            Self::C => 100,
            Self::D => 500,
            Self::M => 1000,
        }
    }

    /// Parses a letter, ignoring case.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'I' => Some(Self::I),
            'V' => Some(Self::V),
            'X' => Some(Self::X),
            'L' => Some(Self::L),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// Returns the uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::V => 'V',
            Self::X => 'X',
            Self::L => 'L',
            Self::C => 'C',
            Self::D => 'D',
            Self::M => 'M',
        }
    }

    /// V, L and D may never appear twice in a row.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        !matches!(self, Self::V | Self::L | Self::D)
    }

    /// Returns true if `self` may be written immediately before `larger`
    /// to be subtracted from it (IV, IX, XL, XC, CD, CM).
    #[must_use]
    pub const fn can_precede(self, larger: Self) -> bool {
        matches!(
            (self, larger),
            (Self::I, Self::V | Self::X) | (Self::X, Self::L | Self::C) | (Self::C, Self::D | Self::M)
        )
    }
}

impl fmt::Display for RomanLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
