//! Fixed-size field snapshot shared by live gameplay and splash frames.

use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

const W: usize = FIELD_WIDTH as usize;
const H: usize = FIELD_HEIGHT as usize;

/// One frame of the 10x20 play field.
///
/// Cells hold an occupancy value: `0` is empty, anything else is filled.
/// A snapshot is built once (by the host or a splash source) and only read
/// afterwards; the builder-style helpers consume and return `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSnapshot {
    cells: [[u8; W]; H],
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl FieldSnapshot {
    pub const fn empty() -> Self {
        Self { cells: [[0; W]; H] }
    }

    /// Build from row-major cell values (`rows[row][column]`).
    pub const fn from_rows(cells: [[u8; W]; H]) -> Self {
        Self { cells }
    }

    /// Build by asking `f(column, row)` whether each cell is filled.
    pub fn from_fn(mut f: impl FnMut(u16, u16) -> bool) -> Self {
        let mut cells = [[0u8; W]; H];
        for (row, line) in cells.iter_mut().enumerate() {
            for (column, cell) in line.iter_mut().enumerate() {
                *cell = u8::from(f(column as u16, row as u16));
            }
        }
        Self { cells }
    }

    /// Return a copy with one cell replaced. Out-of-range coordinates are ignored.
    pub fn with_cell(mut self, column: u16, row: u16, value: u8) -> Self {
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|line| line.get_mut(column as usize))
        {
            *cell = value;
        }
        self
    }

    /// Occupancy value at `(column, row)`; out of range reads as empty.
    #[inline]
    pub fn value(&self, column: u16, row: u16) -> u8 {
        self.cells
            .get(row as usize)
            .and_then(|line| line.get(column as usize))
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn is_filled(&self, column: u16, row: u16) -> bool {
        self.value(column, row) != 0
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn rows(&self) -> &[[u8; W]; H] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_no_filled_cells() {
        let field = FieldSnapshot::empty();
        assert_eq!(field.filled_count(), 0);
        assert!(!field.is_filled(0, 0));
    }

    #[test]
    fn with_cell_marks_only_that_cell() {
        let field = FieldSnapshot::empty().with_cell(3, 7, 1);
        assert!(field.is_filled(3, 7));
        assert!(!field.is_filled(7, 3));
        assert_eq!(field.filled_count(), 1);
    }

    #[test]
    fn out_of_range_access_is_empty_and_ignored() {
        let field = FieldSnapshot::empty().with_cell(FIELD_WIDTH, 0, 1);
        assert_eq!(field.filled_count(), 0);
        assert_eq!(field.value(FIELD_WIDTH, FIELD_HEIGHT), 0);
    }

    #[test]
    fn from_fn_uses_column_then_row() {
        let field = FieldSnapshot::from_fn(|column, row| column == 0 && row == FIELD_HEIGHT - 1);
        assert!(field.is_filled(0, FIELD_HEIGHT - 1));
        assert_eq!(field.rows()[(FIELD_HEIGHT - 1) as usize][0], 1);
        assert_eq!(field.filled_count(), 1);
    }

    #[test]
    fn any_nonzero_value_counts_as_filled() {
        let field = FieldSnapshot::empty().with_cell(1, 1, 7);
        assert!(field.is_filled(1, 1));
        assert_eq!(field.value(1, 1), 7);
    }
}
