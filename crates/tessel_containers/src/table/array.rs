//! Tables backed by a fixed-size boxed slice.

use super::{
    ResizableTable, Table, VecTable, cell_count, fmt_table, grown, shrink_allowed, try_cell_count,
};
use anyhow::Result;
use std::{
    fmt, mem,
    ops::{Index, IndexMut},
};

/// A table whose cells live in a single boxed slice of exactly
/// `columns × rows` values.
///
/// Every resize allocates a new slice and moves the kept cells over, so
/// prefer [`VecTable`] when the dimensions change often.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayTable<T> {
    columns: usize,
    rows: usize,
    cells: Box<[T]>,
}

impl<T: Default> ArrayTable<T> {
    /// Creates a new table with the given dimensions, filled with default
    /// values.
    ///
    /// # Panics
    /// If the number of cells overflows `usize`.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::from_fn(columns, rows, |_, _| T::default())
    }

    /// Creates a new table with the given dimensions, filled with default
    /// values.
    ///
    /// # Errors
    /// If the number of cells overflows `usize`.
    pub fn try_new(columns: usize, rows: usize) -> Result<Self> {
        try_cell_count(columns, rows)?;
        Ok(Self::new(columns, rows))
    }

    /// Moves the cells into a new slice with the given dimensions.
    fn reshape(&mut self, columns: usize, rows: usize) {
        let (old_columns, old_rows) = (self.columns, self.rows);
        let count = cell_count(columns, rows);

        tessel_log::with_trace_logging!(
            "Reallocating table from {}x{} to {}x{} cells", old_columns, old_rows, columns, rows;
            {
                let mut old_cells = mem::take(&mut self.cells);
                let mut cells = Vec::with_capacity(count);
                for y in 0..rows {
                    for x in 0..columns {
                        cells.push(if x < old_columns && y < old_rows {
                            mem::take(&mut old_cells[y * old_columns + x])
                        } else {
                            T::default()
                        });
                    }
                }
                self.cells = cells.into_boxed_slice();
            }
        );

        self.columns = columns;
        self.rows = rows;
    }
}

impl<T> ArrayTable<T> {
    /// Creates a new table with the given dimensions, filling cell `(x, y)`
    /// with the value returned by `f(x, y)`.
    ///
    /// # Panics
    /// If the number of cells overflows `usize`.
    pub fn from_fn(columns: usize, rows: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(cell_count(columns, rows));
        for y in 0..rows {
            for x in 0..columns {
                cells.push(f(x, y));
            }
        }
        Self {
            columns,
            rows,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Consumes the table and returns its cells in row-major order.
    pub fn into_cells(self) -> Box<[T]> {
        self.cells
    }
}

impl<T: Clone> ArrayTable<T> {
    /// Creates a new table with the same dimensions and cell values as the
    /// given table.
    pub fn from_table(table: &impl Table<Value = T>) -> Self {
        Self {
            columns: table.column_count(),
            rows: table.row_count(),
            cells: table.as_slice().into(),
        }
    }
}

impl<T> Table for ArrayTable<T> {
    type Value = T;

    fn column_count(&self) -> usize {
        self.columns
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn as_slice(&self) -> &[T] {
        &self.cells
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T: Default> ResizableTable for ArrayTable<T> {
    fn add_rows(&mut self, count: usize) {
        if count > 0 {
            self.reshape(self.columns, grown("rows", self.rows, count));
        }
    }

    fn remove_rows(&mut self, count: usize) -> bool {
        if !shrink_allowed("rows", count, self.rows) {
            return false;
        }
        if count > 0 {
            self.reshape(self.columns, self.rows - count);
        }
        true
    }

    fn add_columns(&mut self, count: usize) {
        if count > 0 {
            self.reshape(grown("columns", self.columns, count), self.rows);
        }
    }

    fn remove_columns(&mut self, count: usize) -> bool {
        if !shrink_allowed("columns", count, self.columns) {
            return false;
        }
        if count > 0 {
            self.reshape(self.columns - count, self.rows);
        }
        true
    }
}

impl<T> Index<(usize, usize)> for ArrayTable<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        self.cell_value(x, y)
    }
}

impl<T> IndexMut<(usize, usize)> for ArrayTable<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        self.cell_mut(x, y)
    }
}

impl<T> From<VecTable<T>> for ArrayTable<T> {
    fn from(table: VecTable<T>) -> Self {
        let (columns, rows) = (table.column_count(), table.row_count());
        Self {
            columns,
            rows,
            cells: table.into_cells().into_boxed_slice(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ArrayTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_table(f, self)
    }
}
