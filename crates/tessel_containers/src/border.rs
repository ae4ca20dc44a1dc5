//! Border handling for tables.
//!
//! Stencil computations read the neighbors of every cell, including cells
//! on the edge of the table whose neighbors are outside of it. A
//! [`BorderHandling`] strategy maps any column or row index to one inside
//! the table, either by clamping it to the nearest edge ([`ClampBorder`]) or
//! by wrapping it around to the opposite side ([`WrapBorder`]).
//!
//! The strategies read their bounds through [`IndexBounds`] on every
//! mapping, so bounds that change over time (see [`LiveBounds`]) are always
//! respected.

use crate::table::Table;
use anyhow::{Result, anyhow};
use std::fmt;

/// The offsets of the eight neighbors of a cell.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The inclusive range of valid indices along one axis of a table.
pub trait IndexBounds {
    /// The smallest valid index.
    fn lower(&self) -> i64;

    /// The largest valid index.
    fn upper(&self) -> i64;
}

/// Maps column and row indices that may be outside a table to indices inside
/// it.
pub trait BorderHandling {
    /// Maps the given column index to one within the column bounds.
    fn column_index(&self, x: i64) -> i64;

    /// Maps the given row index to one within the row bounds.
    fn row_index(&self, y: i64) -> i64;
}

/// Bounds that never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedBounds {
    lower: i64,
    upper: i64,
}

/// Bounds obtained by calling the given functions on every access.
pub struct LiveBounds<L, U> {
    lower: L,
    upper: U,
}

/// Clamps indices to the nearest valid index.
#[derive(Clone, Copy, Debug)]
pub struct ClampBorder<C, R = C> {
    columns: C,
    rows: R,
}

/// Wraps indices around to the opposite side, as on a torus.
#[derive(Clone, Copy, Debug)]
pub struct WrapBorder<C, R = C> {
    columns: C,
    rows: R,
}

/// Reads the cells of a table at indices mapped by a border handling
/// strategy.
pub struct BorderedTableAccess<'a, Tab, B: ?Sized> {
    table: &'a Tab,
    border: &'a B,
}

/// Reads and writes the cells of a table at indices mapped by a border
/// handling strategy.
pub struct BorderedTableAccessMut<'a, Tab, B: ?Sized> {
    table: &'a mut Tab,
    border: &'a B,
}

/// Clamps the index to the given bounds.
///
/// The upper bound takes precedence if the bounds are empty.
pub fn clamp_index(index: i64, bounds: &impl IndexBounds) -> i64 {
    index.max(bounds.lower()).min(bounds.upper())
}

/// Wraps the index into the given bounds, giving the index in the range that
/// differs from it by a multiple of the length of the range.
///
/// The offset from the lower bound is reduced with a Euclidean remainder in
/// `i128`, so indices arbitrarily far outside the range wrap in constant
/// time.
///
/// # Panics
/// If the bounds are empty (the upper bound is smaller than the lower
/// bound).
pub fn wrap_index(index: i64, bounds: &impl IndexBounds) -> i64 {
    let (lower, upper) = (bounds.lower(), bounds.upper());
    assert!(
        upper >= lower,
        "Cannot wrap index {index} into empty range [{lower}, {upper}]"
    );
    let length = i128::from(upper) - i128::from(lower) + 1;
    let offset = (i128::from(index) - i128::from(lower)).rem_euclid(length);
    // The result lies in [lower, upper]
    (i128::from(lower) + offset) as i64
}

impl FixedBounds {
    /// Creates new bounds with the given inclusive lower and upper index.
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// Creates the bounds `[0, length - 1]` of an axis with the given
    /// number of cells. The bounds are empty if the length is zero.
    pub fn for_length(length: usize) -> Self {
        let upper = i64::try_from(length).map_or(i64::MAX, |length| length - 1);
        Self::new(0, upper)
    }
}

impl IndexBounds for FixedBounds {
    fn lower(&self) -> i64 {
        self.lower
    }

    fn upper(&self) -> i64 {
        self.upper
    }
}

impl<L, U> LiveBounds<L, U>
where
    L: Fn() -> i64,
    U: Fn() -> i64,
{
    /// Creates new bounds reading the lower and upper index from the given
    /// functions.
    pub fn new(lower: L, upper: U) -> Self {
        Self { lower, upper }
    }
}

impl<L, U> IndexBounds for LiveBounds<L, U>
where
    L: Fn() -> i64,
    U: Fn() -> i64,
{
    fn lower(&self) -> i64 {
        (self.lower)()
    }

    fn upper(&self) -> i64 {
        (self.upper)()
    }
}

impl<B: IndexBounds + ?Sized> IndexBounds for &B {
    fn lower(&self) -> i64 {
        (**self).lower()
    }

    fn upper(&self) -> i64 {
        (**self).upper()
    }
}

impl<L, U> fmt::Debug for LiveBounds<L, U>
where
    L: Fn() -> i64,
    U: Fn() -> i64,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveBounds")
            .field("lower", &self.lower())
            .field("upper", &self.upper())
            .finish()
    }
}

impl<C: IndexBounds, R: IndexBounds> ClampBorder<C, R> {
    /// Creates a strategy clamping columns to the `columns` bounds and rows
    /// to the `rows` bounds.
    pub fn new(columns: C, rows: R) -> Self {
        Self { columns, rows }
    }
}

impl ClampBorder<FixedBounds> {
    /// Creates a strategy for a table with the given fixed dimensions.
    pub fn for_extent(columns: usize, rows: usize) -> Self {
        Self::new(FixedBounds::for_length(columns), FixedBounds::for_length(rows))
    }
}

impl<C: IndexBounds, R: IndexBounds> BorderHandling for ClampBorder<C, R> {
    fn column_index(&self, x: i64) -> i64 {
        clamp_index(x, &self.columns)
    }

    fn row_index(&self, y: i64) -> i64 {
        clamp_index(y, &self.rows)
    }
}

impl<C: IndexBounds, R: IndexBounds> WrapBorder<C, R> {
    /// Creates a strategy wrapping columns around the `columns` bounds and
    /// rows around the `rows` bounds.
    pub fn new(columns: C, rows: R) -> Self {
        Self { columns, rows }
    }
}

impl WrapBorder<FixedBounds> {
    /// Creates a strategy for a table with the given fixed dimensions.
    pub fn for_extent(columns: usize, rows: usize) -> Self {
        Self::new(FixedBounds::for_length(columns), FixedBounds::for_length(rows))
    }
}

impl<C: IndexBounds, R: IndexBounds> BorderHandling for WrapBorder<C, R> {
    /// # Panics
    /// If the column bounds are empty.
    fn column_index(&self, x: i64) -> i64 {
        wrap_index(x, &self.columns)
    }

    /// # Panics
    /// If the row bounds are empty.
    fn row_index(&self, y: i64) -> i64 {
        wrap_index(y, &self.rows)
    }
}

fn mapped_position(border: &(impl BorderHandling + ?Sized), x: i64, y: i64) -> Result<(usize, usize)> {
    let (column, row) = (border.column_index(x), border.row_index(y));
    match (usize::try_from(column), usize::try_from(row)) {
        (Ok(column), Ok(row)) => Ok((column, row)),
        _ => Err(anyhow!(
            "Position ({x}, {y}) was mapped to invalid position ({column}, {row})"
        )),
    }
}

impl<'a, Tab: Table, B: BorderHandling + ?Sized> BorderedTableAccess<'a, Tab, B> {
    /// Creates an accessor reading the given table through the given border
    /// handling strategy.
    pub fn new(table: &'a Tab, border: &'a B) -> Self {
        Self { table, border }
    }

    /// Returns the value of the cell at the mapped position of `(x, y)`.
    ///
    /// # Errors
    /// If the mapped position is outside the table.
    pub fn try_cell(&self, x: i64, y: i64) -> Result<&'a Tab::Value> {
        let (column, row) = mapped_position(self.border, x, y)?;
        self.table.try_cell_value(column, row)
    }

    /// Returns the value of the cell at the mapped position of `(x, y)`.
    ///
    /// # Panics
    /// If the mapped position is outside the table.
    pub fn cell(&self, x: i64, y: i64) -> &'a Tab::Value {
        match self.try_cell(x, y) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Iterates over the cells at the given offsets from `(x, y)`.
    ///
    /// # Errors
    /// Each item is an error if the offset position overflows `i64` or its
    /// mapped position is outside the table.
    pub fn try_neighbors<'o>(
        &self,
        x: i64,
        y: i64,
        offsets: &'o [(i64, i64)],
    ) -> impl Iterator<Item = Result<&'a Tab::Value>> + use<'a, 'o, Tab, B> {
        let access = *self;
        offsets.iter().map(move |&(dx, dy)| {
            match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(x), Some(y)) => access.try_cell(x, y),
                _ => Err(anyhow!(
                    "Offset ({dx}, {dy}) from position ({x}, {y}) overflows"
                )),
            }
        })
    }

    /// Iterates over the cells at the given offsets from `(x, y)`.
    ///
    /// # Panics
    /// If any offset position overflows `i64` or any mapped position is
    /// outside the table.
    pub fn neighbors<'o>(
        &self,
        x: i64,
        y: i64,
        offsets: &'o [(i64, i64)],
    ) -> impl Iterator<Item = &'a Tab::Value> + use<'a, 'o, Tab, B> {
        self.try_neighbors(x, y, offsets)
            .map(|result| match result {
                Ok(value) => value,
                Err(error) => panic!("{error}"),
            })
    }

    /// Returns a closure giving the cell at the mapped position of `(x, y)`.
    pub fn as_fn(&self) -> impl Fn(i64, i64) -> &'a Tab::Value + use<'a, Tab, B> {
        let access = *self;
        move |x, y| access.cell(x, y)
    }
}

impl<'a, Tab: Table, B: BorderHandling + ?Sized> BorderedTableAccessMut<'a, Tab, B> {
    /// Creates an accessor reading and writing the given table through the
    /// given border handling strategy.
    pub fn new(table: &'a mut Tab, border: &'a B) -> Self {
        Self { table, border }
    }

    /// Returns the value of the cell at the mapped position of `(x, y)`.
    ///
    /// # Errors
    /// If the mapped position is outside the table.
    pub fn try_cell(&self, x: i64, y: i64) -> Result<&Tab::Value> {
        let (column, row) = mapped_position(self.border, x, y)?;
        self.table.try_cell_value(column, row)
    }

    /// Returns the value of the cell at the mapped position of `(x, y)`.
    ///
    /// # Panics
    /// If the mapped position is outside the table.
    pub fn cell(&self, x: i64, y: i64) -> &Tab::Value {
        match self.try_cell(x, y) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns a mutable reference to the cell at the mapped position of
    /// `(x, y)`.
    ///
    /// # Errors
    /// If the mapped position is outside the table.
    pub fn try_cell_mut(&mut self, x: i64, y: i64) -> Result<&mut Tab::Value> {
        let (column, row) = mapped_position(self.border, x, y)?;
        self.table.try_cell_mut(column, row)
    }

    /// Returns a mutable reference to the cell at the mapped position of
    /// `(x, y)`.
    ///
    /// # Panics
    /// If the mapped position is outside the table.
    pub fn cell_mut(&mut self, x: i64, y: i64) -> &mut Tab::Value {
        match self.try_cell_mut(x, y) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Replaces the value of the cell at the mapped position of `(x, y)`.
    ///
    /// # Panics
    /// If the mapped position is outside the table.
    pub fn set_cell_value(&mut self, x: i64, y: i64, value: Tab::Value) {
        *self.cell_mut(x, y) = value;
    }

    /// Reborrows as a read-only accessor.
    pub fn as_access(&self) -> BorderedTableAccess<'_, Tab, B> {
        BorderedTableAccess {
            table: &*self.table,
            border: self.border,
        }
    }
}

impl<Tab, B: ?Sized> Clone for BorderedTableAccess<'_, Tab, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Tab, B: ?Sized> Copy for BorderedTableAccess<'_, Tab, B> {}

impl<Tab: Table, B: ?Sized> fmt::Debug for BorderedTableAccess<'_, Tab, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BorderedTableAccess")
            .field("columns", &self.table.column_count())
            .field("rows", &self.table.row_count())
            .finish_non_exhaustive()
    }
}

impl<Tab: Table, B: ?Sized> fmt::Debug for BorderedTableAccessMut<'_, Tab, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BorderedTableAccessMut")
            .field("columns", &self.table.column_count())
            .field("rows", &self.table.row_count())
            .finish_non_exhaustive()
    }
}
