//! Swizzling: reading the components of a vector in an arbitrary order and
//! multiplicity.
//!
//! Two builders are offered, both recording one to four axes in a chain
//! like `.y().x().x()`:
//!
//! - The [`accessor`] builder is bound to a source vector and produces a
//!   live [`SwizzleView`](accessor::SwizzleView) of it (or a single
//!   [`AxisGetter`](accessor::AxisGetter)).
//! - The [`converter`] builder is bound only to a source type and produces
//!   a reusable [`Converter`](converter::Converter) from that type to a
//!   new [`Vector`](crate::Vector) (or a single extractor function).
//!
//! Which axes can be recorded depends on the axis capability traits of the
//! source type, so asking a 2D vector for its z-component is a compile
//! error.

pub mod accessor;
pub mod converter;

use crate::axis::AxesXY;
use accessor::AccessorBuilder;

/// Extension trait for starting an [`accessor`] chain with method syntax.
pub trait Swizzle: AxesXY + Sized {
    /// Starts recording axes to read from this vector.
    fn swizzle(&self) -> AccessorBuilder<'_, Self, 0> {
        accessor::of(self)
    }
}

impl<V: AxesXY> Swizzle for V {}

/// Returns a copy of the given array with the given item appended.
///
/// `M` must be `N + 1`.
fn appended<T: Copy, const N: usize, const M: usize>(items: [T; N], item: T) -> [T; M] {
    debug_assert_eq!(M, N + 1);
    std::array::from_fn(|i| if i < N { items[i] } else { item })
}
