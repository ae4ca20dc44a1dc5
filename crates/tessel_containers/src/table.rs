//! Dense 2D tables of generic cells.
//!
//! A table with `columns × rows` cells is addressed by `(x, y)`, where `x`
//! is the column and `y` the row. Cells are stored in row-major order.

mod array;
mod vec;

pub use array::ArrayTable;
pub use vec::VecTable;

use anyhow::{Result, anyhow};
use std::{fmt, slice};

/// Read and write access to the cells of a dense 2D table.
pub trait Table {
    /// The type of value held by each cell.
    type Value;

    /// The number of columns (the width of the table).
    fn column_count(&self) -> usize;

    /// The number of rows (the height of the table).
    fn row_count(&self) -> usize;

    /// All cells in row-major order.
    fn as_slice(&self) -> &[Self::Value];

    /// All cells in row-major order.
    fn as_mut_slice(&mut self) -> &mut [Self::Value];

    /// The total number of cells.
    fn cell_count(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the table has no cells.
    fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Whether `(x, y)` is the position of a cell in the table.
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.column_count() && y < self.row_count()
    }

    /// Returns a reference to the value of the cell at `(x, y)`.
    ///
    /// # Errors
    /// If the position is outside the table.
    fn try_cell_value(&self, x: usize, y: usize) -> Result<&Self::Value> {
        let idx = linear_index(self.column_count(), self.row_count(), x, y)?;
        Ok(&self.as_slice()[idx])
    }

    /// Returns a reference to the value of the cell at `(x, y)`.
    ///
    /// # Panics
    /// If the position is outside the table.
    fn cell_value(&self, x: usize, y: usize) -> &Self::Value {
        match self.try_cell_value(x, y) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns a mutable reference to the value of the cell at `(x, y)`.
    ///
    /// # Errors
    /// If the position is outside the table.
    fn try_cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Self::Value> {
        let idx = linear_index(self.column_count(), self.row_count(), x, y)?;
        Ok(&mut self.as_mut_slice()[idx])
    }

    /// Returns a mutable reference to the value of the cell at `(x, y)`.
    ///
    /// # Panics
    /// If the position is outside the table.
    fn cell_mut(&mut self, x: usize, y: usize) -> &mut Self::Value {
        match self.try_cell_mut(x, y) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Replaces the value of the cell at `(x, y)`.
    ///
    /// # Errors
    /// If the position is outside the table.
    fn try_set_cell_value(&mut self, x: usize, y: usize, value: Self::Value) -> Result<()> {
        *self.try_cell_mut(x, y)? = value;
        Ok(())
    }

    /// Replaces the value of the cell at `(x, y)`.
    ///
    /// # Panics
    /// If the position is outside the table.
    fn set_cell_value(&mut self, x: usize, y: usize, value: Self::Value) {
        *self.cell_mut(x, y) = value;
    }

    /// Returns the cells of row `y` from left to right.
    ///
    /// # Errors
    /// If the row is outside the table.
    fn try_row(&self, y: usize) -> Result<&[Self::Value]> {
        let columns = self.column_count();
        if y >= self.row_count() {
            return Err(anyhow!(
                "Row {y} is outside table with {} rows",
                self.row_count()
            ));
        }
        Ok(&self.as_slice()[y * columns..(y + 1) * columns])
    }

    /// Returns the cells of row `y` from left to right.
    ///
    /// # Panics
    /// If the row is outside the table.
    fn row(&self, y: usize) -> &[Self::Value] {
        match self.try_row(y) {
            Ok(row) => row,
            Err(error) => panic!("{error}"),
        }
    }

    /// Iterates over all cells in row-major order.
    fn cells(&self) -> slice::Iter<'_, Self::Value> {
        self.as_slice().iter()
    }

    /// Iterates mutably over all cells in row-major order.
    fn cells_mut(&mut self) -> slice::IterMut<'_, Self::Value> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a copy of all cell values in row-major order.
    fn cell_values(&self) -> Vec<Self::Value>
    where
        Self::Value: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Iterates over the `(x, y)` position of every cell in row-major order.
    fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.column_count();
        (0..self.row_count()).flat_map(move |y| (0..columns).map(move |x| (x, y)))
    }
}

/// A [`Table`] whose dimensions can be changed.
///
/// Cells that remain inside the table keep their `(x, y)` position and
/// value, and new cells get the default value. Rows are added and removed
/// at the bottom and columns at the right.
///
/// A table always keeps at least one row and one column once resized: a
/// shrink that would leave fewer is rejected and reported by returning
/// `false`, leaving the table unchanged.
pub trait ResizableTable: Table {
    /// Appends `count` rows at the bottom.
    ///
    /// # Panics
    /// If the new number of cells overflows `usize`.
    fn add_rows(&mut self, count: usize);

    /// Removes the `count` bottom rows. Returns `false` without changing the
    /// table if fewer than one row would remain.
    fn remove_rows(&mut self, count: usize) -> bool;

    /// Appends `count` columns at the right.
    ///
    /// # Panics
    /// If the new number of cells overflows `usize`.
    fn add_columns(&mut self, count: usize);

    /// Removes the `count` rightmost columns. Returns `false` without
    /// changing the table if fewer than one column would remain.
    fn remove_columns(&mut self, count: usize) -> bool;

    /// Appends a row of default cells at the bottom.
    ///
    /// # Panics
    /// If the new number of cells overflows `usize`.
    fn add_row(&mut self) {
        self.add_rows(1);
    }

    /// Removes the bottom row. Returns `false` without changing the table if
    /// it has only one row.
    fn remove_row(&mut self) -> bool {
        self.remove_rows(1)
    }

    /// Appends a column of default cells at the right.
    ///
    /// # Panics
    /// If the new number of cells overflows `usize`.
    fn add_column(&mut self) {
        self.add_columns(1);
    }

    /// Removes the rightmost column. Returns `false` without changing the
    /// table if it has only one column.
    fn remove_column(&mut self) -> bool {
        self.remove_columns(1)
    }

    /// Adds or removes rows until there are `rows` of them. Returns `false`
    /// without changing the table if `rows` is zero.
    fn set_rows(&mut self, rows: usize) -> bool {
        let current = self.row_count();
        if rows >= current {
            self.add_rows(rows - current);
            true
        } else {
            self.remove_rows(current - rows)
        }
    }

    /// Adds or removes columns until there are `columns` of them. Returns
    /// `false` without changing the table if `columns` is zero.
    fn set_columns(&mut self, columns: usize) -> bool {
        let current = self.column_count();
        if columns >= current {
            self.add_columns(columns - current);
            true
        } else {
            self.remove_columns(current - columns)
        }
    }

    /// Resizes the table to `columns × rows` cells. Returns `false` without
    /// changing the table if either dimension is zero.
    fn set_dimensions(&mut self, columns: usize, rows: usize) -> bool {
        if columns == 0 || rows == 0 {
            tessel_log::debug!("Rejected resizing table to {columns}x{rows} cells");
            return false;
        }
        self.set_columns(columns) && self.set_rows(rows)
    }
}

fn linear_index(columns: usize, rows: usize, x: usize, y: usize) -> Result<usize> {
    if x < columns && y < rows {
        Ok(y * columns + x)
    } else {
        Err(anyhow!(
            "Cell ({x}, {y}) is outside table with {columns} columns and {rows} rows"
        ))
    }
}

/// Computes the number of cells in a table with the given dimensions.
///
/// # Errors
/// If the number overflows `usize`.
fn try_cell_count(columns: usize, rows: usize) -> Result<usize> {
    columns.checked_mul(rows).ok_or_else(|| {
        anyhow!("Number of cells in table with {columns} columns and {rows} rows overflows")
    })
}

fn cell_count(columns: usize, rows: usize) -> usize {
    match try_cell_count(columns, rows) {
        Ok(count) => count,
        Err(error) => panic!("{error}"),
    }
}

fn grown(what: &str, current: usize, count: usize) -> usize {
    match current.checked_add(count) {
        Some(grown) => grown,
        None => panic!("Adding {count} {what} to table with {current} {what} overflows"),
    }
}

/// Whether removing `count` of the `current` rows or columns leaves at
/// least one of them.
fn shrink_allowed(what: &str, count: usize, current: usize) -> bool {
    if count < current {
        true
    } else {
        tessel_log::debug!("Rejected removing {count} {what} from table with {current} {what}");
        false
    }
}

fn fmt_table<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    table: &impl Table<Value = T>,
) -> fmt::Result {
    for y in 0..table.row_count() {
        if y > 0 {
            writeln!(f)?;
        }
        for (x, value) in table.row(y).iter().enumerate() {
            if x > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
    }
    Ok(())
}
