//! Cell contents and player colors.

use std::fmt;

/// The content of a single board cell.
///
/// Each variant carries a signed value so that summing a line of cells
/// reveals an alignment: four red pawns sum to `+4`, four yellow pawns to
/// `-4`, and any mixed or partially empty line stays strictly between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Pawn {
    Red = 1,
    Yellow = -1,
    #[default]
    Empty = 0,
}

impl Pawn {
    /// Returns the signed value used in line sums.
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Returns true if the cell holds no pawn.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Pawn::Empty)
    }

    /// Returns the color of the pawn, or `None` for an empty cell.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Pawn::Red => Some(Color::Red),
            Pawn::Yellow => Some(Color::Yellow),
            Pawn::Empty => None,
        }
    }

    /// Returns the single-character symbol for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Pawn::Red => 'R',
            Pawn::Yellow => 'Y',
            Pawn::Empty => '.',
        }
    }
}

impl fmt::Display for Pawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pawn::Red => write!(f, "Red"),
            Pawn::Yellow => write!(f, "Yellow"),
            Pawn::Empty => write!(f, "Empty"),
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// Both colors, red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Yellow];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Returns the pawn this color drops.
    #[inline]
    pub const fn pawn(self) -> Pawn {
        match self {
            Color::Red => Pawn::Red,
            Color::Yellow => Pawn::Yellow,
        }
    }
}

impl From<Color> for Pawn {
    fn from(color: Color) -> Self {
        color.pawn()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Yellow => write!(f, "Yellow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_values() {
        assert_eq!(Pawn::Red.value(), 1);
        assert_eq!(Pawn::Yellow.value(), -1);
        assert_eq!(Pawn::Empty.value(), 0);
    }

    #[test]
    fn default_pawn_is_empty() {
        assert!(Pawn::default().is_empty());
    }

    #[test]
    fn opposite_color() {
        assert_eq!(Color::Red.opposite(), Color::Yellow);
        assert_eq!(Color::Yellow.opposite(), Color::Red);
    }

    #[test]
    fn color_pawn_roundtrip() {
        for color in Color::ALL {
            assert_eq!(color.pawn().color(), Some(color));
        }
        assert_eq!(Pawn::Empty.color(), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Red), "Red");
        assert_eq!(format!("{}", Pawn::Yellow), "Yellow");
        assert_eq!(Pawn::Empty.to_char(), '.');
    }

    #[test]
    fn four_of_a_kind_sums_to_four() {
        let red: i8 = [Pawn::Red; 4].iter().map(|p| p.value()).sum();
        let yellow: i8 = [Pawn::Yellow; 4].iter().map(|p| p.value()).sum();
        assert_eq!(red, 4);
        assert_eq!(yellow, -4);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_pawn() -> impl Strategy<Value = Pawn> {
            prop_oneof![Just(Pawn::Red), Just(Pawn::Yellow), Just(Pawn::Empty)]
        }

        proptest! {
            #[test]
            fn sum_magnitude_four_means_four_identical_pawns(
                line in prop::array::uniform4(any_pawn())
            ) {
                let sum: i8 = line.iter().map(|p| p.value()).sum();
                let uniform = !line[0].is_empty() && line.iter().all(|&p| p == line[0]);
                prop_assert_eq!(sum.abs() == 4, uniform);
            }
        }
    }
}
