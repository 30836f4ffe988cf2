//! Effective configuration for a fold run.

use std::fmt;

/// Column used when no width option is given.
pub const DEFAULT_BREAK_COLUMN: usize = 80;

/// Smallest column the engine accepts. At 1 every character would need a
/// break before it and the terminator rule degenerates.
pub const MIN_BREAK_COLUMN: usize = 2;

/// The single line terminator the engine recognizes and inserts.
pub const LINE_TERMINATOR: u8 = b'\n';

/// One-based column at which a line feed is placed, at the latest, on every
/// output line. Always `>= MIN_BREAK_COLUMN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BreakColumn(usize);

impl BreakColumn {
    pub fn new(column: usize) -> Option<Self> {
        (column >= MIN_BREAK_COLUMN).then_some(Self(column))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BreakColumn {
    fn default() -> Self {
        Self(DEFAULT_BREAK_COLUMN)
    }
}

impl fmt::Display for BreakColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Configuration produced by the argument resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldConfig {
    pub break_column: BreakColumn,
}

impl FoldConfig {
    pub fn new(break_column: BreakColumn) -> Self {
        Self { break_column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_columns_below_two() {
        assert_eq!(BreakColumn::new(0), None);
        assert_eq!(BreakColumn::new(1), None);
        assert_eq!(BreakColumn::new(2).map(BreakColumn::get), Some(2));
    }

    #[test]
    fn default_is_eighty() {
        assert_eq!(FoldConfig::default().break_column.get(), 80);
        assert_eq!(BreakColumn::default().to_string(), "80");
    }
}
