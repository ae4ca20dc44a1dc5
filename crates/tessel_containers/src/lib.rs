//! Dense 2D tables and border handling for stencil computations.

pub mod border;
pub mod table;

pub use border::{
    BorderHandling, BorderedTableAccess, BorderedTableAccessMut, ClampBorder, FixedBounds,
    IndexBounds, LiveBounds, MOORE_OFFSETS, WrapBorder,
};
pub use table::{ArrayTable, ResizableTable, Table, VecTable};
