//! Tables backed by a growable vector.

use super::{
    ArrayTable, ResizableTable, Table, cell_count, fmt_table, grown, shrink_allowed,
    try_cell_count,
};
use anyhow::Result;
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A table whose cells live in a [`Vec`].
///
/// Adding or removing rows only touches the end of the vector. Adding or
/// removing columns moves the cells of every row into their new positions
/// within the same allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VecTable<T> {
    columns: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: Default> VecTable<T> {
    /// Creates a new table with the given dimensions, filled with default
    /// values.
    ///
    /// # Panics
    /// If the number of cells overflows `usize`.
    pub fn new(columns: usize, rows: usize) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(cell_count(columns, rows), T::default);
        Self {
            columns,
            rows,
            cells,
        }
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
}

impl<T> VecTable<T> {
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
            cells,
        }
    }

    /// Consumes the table and returns its cells in row-major order.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }
}

impl<T: Clone> VecTable<T> {
    /// Creates a new table with the same dimensions and cell values as the
    /// given table.
    pub fn from_table(table: &impl Table<Value = T>) -> Self {
        Self {
            columns: table.column_count(),
            rows: table.row_count(),
            cells: table.as_slice().to_vec(),
        }
    }
}

impl<T> Table for VecTable<T> {
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

impl<T: Default> ResizableTable for VecTable<T> {
    fn add_rows(&mut self, count: usize) {
        let rows = grown("rows", self.rows, count);
        self.cells
            .resize_with(cell_count(self.columns, rows), T::default);
        self.rows = rows;
    }

    fn remove_rows(&mut self, count: usize) -> bool {
        if !shrink_allowed("rows", count, self.rows) {
            return false;
        }
        self.rows -= count;
        self.cells.truncate(self.columns * self.rows);
        true
    }

    fn add_columns(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let old_columns = self.columns;
        let columns = grown("columns", old_columns, count);

        tessel_log::with_trace_logging!(
            "Widening table from {} to {} columns", old_columns, columns;
            {
                self.cells
                    .resize_with(cell_count(columns, self.rows), T::default);

                // Walk backwards so that every destination only holds a
                // default or an already moved cell
                for y in (0..self.rows).rev() {
                    for x in (0..old_columns).rev() {
                        self.cells.swap(y * old_columns + x, y * columns + x);
                    }
                }
            }
        );

        self.columns = columns;
    }

    fn remove_columns(&mut self, count: usize) -> bool {
        if !shrink_allowed("columns", count, self.columns) {
            return false;
        }
        if count == 0 {
            return true;
        }
        let old_columns = self.columns;
        let columns = old_columns - count;

        tessel_log::with_trace_logging!(
            "Narrowing table from {} to {} columns", old_columns, columns;
            {
                for y in 0..self.rows {
                    for x in 0..columns {
                        self.cells.swap(y * columns + x, y * old_columns + x);
                    }
                }
                self.cells.truncate(columns * self.rows);
            }
        );

        self.columns = columns;
        true
    }
}

impl<T> Index<(usize, usize)> for VecTable<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        self.cell_value(x, y)
    }
}

impl<T> IndexMut<(usize, usize)> for VecTable<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        self.cell_mut(x, y)
    }
}

impl<T> From<ArrayTable<T>> for VecTable<T> {
    fn from(table: ArrayTable<T>) -> Self {
        let (columns, rows) = (table.column_count(), table.row_count());
        Self {
            columns,
            rows,
            cells: table.into_cells().into_vec(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for VecTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_table(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_table(columns: usize, rows: usize) -> VecTable<i32> {
        VecTable::from_fn(columns, rows, |x, y| i32::try_from(10 * y + x).unwrap())
    }

    #[test]
    fn creating_table_gives_default_cells() {
        let table = VecTable::<String>::new(3, 2);

        assert_eq!(table.cell_count(), 6);
        assert!(table.cells().all(String::is_empty));
    }

    #[test]
    fn adding_column_keeps_existing_cells() {
        let mut table = create_table(3, 2);

        table.add_column();

        assert_eq!(table.column_count(), 4);
        assert_eq!(table.row(0), &[0, 1, 2, 0]);
        assert_eq!(table.row(1), &[10, 11, 12, 0]);
    }

    #[test]
    fn adding_several_columns_to_tall_table_keeps_existing_cells() {
        let mut table = create_table(2, 4);

        table.add_columns(3);

        for y in 0..4 {
            assert_eq!(table.row(y)[..2], create_table(2, 4).row(y)[..]);
            assert_eq!(table.row(y)[2..], [0, 0, 0]);
        }
    }

    #[test]
    fn removing_columns_keeps_leftmost_cells() {
        let mut table = create_table(4, 3);

        assert!(table.remove_columns(3));

        assert_eq!(table.column_count(), 1);
        assert_eq!(table.cell_values(), vec![0, 10, 20]);
    }

    #[test]
    fn adding_and_removing_rows_works_at_bottom() {
        let mut table = create_table(2, 2);

        table.add_row();
        table.set_cell_value(1, 2, 99);
        assert_eq!(table.row(2), &[0, 99]);

        assert!(table.remove_rows(2));
        assert_eq!(table.cell_values(), vec![0, 1]);
    }

    #[test]
    fn removing_only_row_is_rejected() {
        let mut table = create_table(3, 1);

        assert!(!table.remove_row());

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell_values(), vec![0, 1, 2]);
    }

    #[test]
    fn removing_only_column_is_rejected() {
        let mut table = create_table(1, 3);

        assert!(!table.remove_column());

        assert_eq!(table, create_table(1, 3));
    }

    #[test]
    fn table_can_be_indexed_by_position() {
        let mut table = create_table(2, 2);
        table[(0, 1)] = -1;
        assert_eq!(table[(0, 1)], -1);
        assert_eq!(table[(1, 1)], 11);
    }

    #[test]
    #[should_panic]
    fn indexing_outside_table_panics() {
        let table = create_table(2, 2);
        let _ = table[(2, 0)];
    }

    proptest! {
        #[test]
        fn resizing_preserves_cells_inside_both_sizes(
            columns in 1_usize..6,
            rows in 1_usize..6,
            new_columns in 1_usize..6,
            new_rows in 1_usize..6,
        ) {
            let original = create_table(columns, rows);
            let mut vec_table = original.clone();
            let mut array_table = ArrayTable::from(original.clone());

            prop_assert!(vec_table.set_dimensions(new_columns, new_rows));
            prop_assert!(array_table.set_dimensions(new_columns, new_rows));

            for (x, y) in vec_table.positions() {
                let expected = if x < columns && y < rows {
                    *original.cell_value(x, y)
                } else {
                    0
                };
                prop_assert_eq!(*vec_table.cell_value(x, y), expected);
            }
            prop_assert_eq!(vec_table.cell_values(), array_table.cell_values());
        }
    }
}
