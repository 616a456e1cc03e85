//! Row counts reported by store mutations.

use std::fmt;

/// Number of rows a single write statement touched.
///
/// # Examples
/// ```
/// use user_directory::domain::RowsAffected;
///
/// assert!(RowsAffected::new(1).is_any());
/// assert!(!RowsAffected::NONE.is_any());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RowsAffected(u64);

impl RowsAffected {
    /// No row matched.
    pub const NONE: Self = Self(0);
    /// Exactly one row matched.
    pub const ONE: Self = Self(1);

    /// Wrap a raw row count.
    pub const fn new(rows: u64) -> Self {
        Self(rows)
    }

    /// Raw row count.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether the statement touched at least one row.
    pub const fn is_any(self) -> bool {
        self.0 > 0
    }
}

impl From<usize> for RowsAffected {
    fn from(value: usize) -> Self {
        Self(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for RowsAffected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
