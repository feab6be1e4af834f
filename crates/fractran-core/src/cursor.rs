use std::fmt;

/// Observable phase of a selected instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Timing {
    /// The instruction is selected but its fraction has not been applied.
    Before,
    /// The fraction has been applied; the next step resumes searching.
    After,
}

/// Marker identifying one selected instruction and its phase.
///
/// A cursor is an immutable value replaced wholesale on every transition,
/// never mutated in place, so equality against a caller-supplied cursor is
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Cursor {
    /// Zero-based index of the selected fraction.
    pub index: usize,
    /// Whether the fraction has been applied yet.
    pub timing: Timing,
}

impl Cursor {
    /// Creates a cursor at `index` in the given phase.
    #[must_use]
    pub const fn new(index: usize, timing: Timing) -> Self {
        Self { index, timing }
    }

    /// Cursor for an instruction that is selected but not yet applied.
    #[must_use]
    pub const fn before(index: usize) -> Self {
        Self::new(index, Timing::Before)
    }

    /// Cursor for an instruction whose fraction has just been applied.
    #[must_use]
    pub const fn after(index: usize) -> Self {
        Self::new(index, Timing::After)
    }
}

/// Engine position: between instructions, or holding an in-flight cursor.
///
/// The explicit `Searching` variant replaces a nullable cursor so all three
/// phases of the instruction cycle are exhaustively matchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Position {
    /// No instruction in flight; the next step scans for a divisor match.
    #[default]
    Searching,
    /// An instruction is in flight at the contained cursor.
    Selected(Cursor),
}

impl Position {
    /// Returns the in-flight cursor, if any.
    #[must_use]
    pub const fn cursor(self) -> Option<Cursor> {
        match self {
            Self::Searching => None,
            Self::Selected(cursor) => Some(cursor),
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.timing)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Searching => f.write_str("searching"),
            Self::Selected(cursor) => write!(f, "{cursor}"),
        }
    }
}
