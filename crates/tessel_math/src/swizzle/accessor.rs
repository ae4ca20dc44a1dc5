//! Swizzle views bound to a source vector.
//!
//! ```
//! use tessel_math::{MutableVector2, Vector2, VectorLike, swizzle::accessor};
//!
//! let source = MutableVector2::new(3.0, 5.0);
//! let view = accessor::of(&source).y().x().build();
//! assert_eq!(view.to_vector(), Vector2::new(5.0, 3.0));
//!
//! source.set_x(9.0);
//! assert_eq!(view.to_vector(), Vector2::new(5.0, 9.0));
//! ```
//!
//! Axes the source does not have are not available:
//!
//! ```compile_fail
//! use tessel_math::{Vector2, swizzle::accessor};
//!
//! let source = Vector2::new(1.0, 2.0);
//! let view = accessor::of(&source).x().z().build();
//! ```

use super::appended;
use crate::{
    axis::{AxesXY, AxesXYZ, AxesXYZW, Axis, axes_to_string},
    vector::{Dim, SupportedDim, Vector, VectorLike},
};
use std::{array, fmt};

/// Records the axes to read from a source vector. `N` is the number of
/// axes recorded so far.
///
/// Obtained from [`of`] or [`Swizzle::swizzle`](super::Swizzle::swizzle).
pub struct AccessorBuilder<'a, V, const N: usize> {
    source: &'a V,
    axes: [Axis; N],
    getters: [fn(&V) -> f64; N],
}

/// Reads a single axis of a source vector.
pub struct AxisGetter<'a, V> {
    source: &'a V,
    axis: Axis,
    getter: fn(&V) -> f64,
}

/// A live view of two to four axes of a source vector.
///
/// The view stores no components of its own: every read goes to the source,
/// so updates of a [`MutableVector`](crate::MutableVector) source are seen
/// immediately. The view is itself a vector with `N` components and can be
/// used in vector algebra or swizzled further.
pub struct SwizzleView<'a, V, const N: usize> {
    source: &'a V,
    axes: [Axis; N],
    getters: [fn(&V) -> f64; N],
}

/// Starts recording axes to read from the given source vector.
pub fn of<V: AxesXY>(source: &V) -> AccessorBuilder<'_, V, 0> {
    AccessorBuilder {
        source,
        axes: [],
        getters: [],
    }
}

impl<'a, V, const N: usize> AccessorBuilder<'a, V, N> {
    /// The axes recorded so far.
    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    fn select<const M: usize>(self, axis: Axis, getter: fn(&V) -> f64) -> AccessorBuilder<'a, V, M> {
        AccessorBuilder {
            source: self.source,
            axes: appended(self.axes, axis),
            getters: appended(self.getters, getter),
        }
    }
}

macro_rules! impl_axis_selection {
    ($level:literal => $next:literal) => {
        impl<'a, V: AxesXY> AccessorBuilder<'a, V, $level> {
            /// Records the x-axis.
            pub fn x(self) -> AccessorBuilder<'a, V, $next> {
                self.select(Axis::X, <V as AxesXY>::x)
            }

            /// Records the y-axis.
            pub fn y(self) -> AccessorBuilder<'a, V, $next> {
                self.select(Axis::Y, <V as AxesXY>::y)
            }
        }

        impl<'a, V: AxesXYZ> AccessorBuilder<'a, V, $level> {
            /// Records the z-axis.
            pub fn z(self) -> AccessorBuilder<'a, V, $next> {
                self.select(Axis::Z, <V as AxesXYZ>::z)
            }
        }

        impl<'a, V: AxesXYZW> AccessorBuilder<'a, V, $level> {
            /// Records the w-axis.
            pub fn w(self) -> AccessorBuilder<'a, V, $next> {
                self.select(Axis::W, <V as AxesXYZW>::w)
            }
        }
    };
}

impl_axis_selection!(0 => 1);
impl_axis_selection!(1 => 2);
impl_axis_selection!(2 => 3);
impl_axis_selection!(3 => 4);

impl<'a, V> AccessorBuilder<'a, V, 1> {
    /// Finishes the chain with a getter for the single recorded axis.
    pub fn build(self) -> AxisGetter<'a, V> {
        AxisGetter {
            source: self.source,
            axis: self.axes[0],
            getter: self.getters[0],
        }
    }
}

macro_rules! impl_view_build {
    ($($dim:literal),+) => {
        $(
            impl<'a, V> AccessorBuilder<'a, V, $dim> {
                /// Finishes the chain with a live view of the recorded axes.
                pub fn build(self) -> SwizzleView<'a, V, $dim> {
                    SwizzleView {
                        source: self.source,
                        axes: self.axes,
                        getters: self.getters,
                    }
                }
            }
        )+
    };
}

impl_view_build!(2, 3, 4);

impl<'a, V> AxisGetter<'a, V> {
    /// Reads the current value of the axis from the source.
    #[inline]
    pub fn get(&self) -> f64 {
        (self.getter)(self.source)
    }

    /// The axis being read.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Converts the getter into a plain closure.
    pub fn into_fn(self) -> impl Fn() -> f64 + 'a {
        move || self.get()
    }
}

impl<'a, V, const N: usize> SwizzleView<'a, V, N> {
    /// The source axis read for each component of the view.
    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    /// The vector the view reads from.
    pub fn source(&self) -> &'a V {
        self.source
    }

    fn read(&self) -> [f64; N] {
        array::from_fn(|i| (self.getters[i])(self.source))
    }
}

impl<V, const N: usize> VectorLike<N> for SwizzleView<'_, V, N>
where
    Dim<N>: SupportedDim,
{
    type Owned = Vector<N>;

    fn components(&self) -> [f64; N] {
        self.read()
    }
}

macro_rules! impl_view_axes {
    ($dim:literal, $trait:ident, $($axis:ident => $idx:literal),+) => {
        impl<V> $trait for SwizzleView<'_, V, $dim> {
            $(
                #[inline]
                fn $axis(&self) -> f64 {
                    (self.getters[$idx])(self.source)
                }
            )+
        }
    };
}

impl_view_axes!(2, AxesXY, x => 0, y => 1);
impl_view_axes!(3, AxesXY, x => 0, y => 1);
impl_view_axes!(4, AxesXY, x => 0, y => 1);
impl_view_axes!(3, AxesXYZ, z => 2);
impl_view_axes!(4, AxesXYZ, z => 2);
impl_view_axes!(4, AxesXYZW, w => 3);

impl<V, const N: usize> Clone for AccessorBuilder<'_, V, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, const N: usize> Copy for AccessorBuilder<'_, V, N> {}

impl<V> Clone for AxisGetter<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for AxisGetter<'_, V> {}

impl<V, const N: usize> Clone for SwizzleView<'_, V, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, const N: usize> Copy for SwizzleView<'_, V, N> {}

impl<V, const N: usize> fmt::Debug for AccessorBuilder<'_, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorBuilder")
            .field("axes", &axes_to_string(&self.axes))
            .finish_non_exhaustive()
    }
}

impl<V> fmt::Debug for AxisGetter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisGetter")
            .field("axis", &self.axis)
            .field("value", &self.get())
            .finish()
    }
}

impl<V, const N: usize> fmt::Debug for SwizzleView<'_, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwizzleView")
            .field("axes", &axes_to_string(&self.axes))
            .field("components", &self.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        swizzle::Swizzle,
        vector::{MutableVector2, MutableVector3, Spatial, Vector2, Vector3, Vector4},
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn view_reorders_axes_of_source() {
        let source = Vector3::new(1.0, 2.0, 3.0);
        let view = of(&source).z().x().y().build();
        assert_eq!(view.to_vector(), Vector3::new(3.0, 1.0, 2.0));
        assert_eq!(view.axes(), &[Axis::Z, Axis::X, Axis::Y]);
    }

    #[test]
    fn view_follows_updates_of_mutable_source() {
        let source = MutableVector2::new(3.0, 5.0);
        let view = of(&source).y().x().build();
        assert_eq!(view.to_vector(), Vector2::new(5.0, 3.0));

        source.set_x(9.0);
        assert_eq!(view.to_vector(), Vector2::new(5.0, 9.0));
        assert_eq!(AxesXY::y(&view), 9.0);
    }

    #[test]
    fn axes_can_be_repeated() {
        let source = Vector2::new(1.0, 2.0);
        let view = source.swizzle().x().x().y().x().build();
        assert_eq!(view.to_vector(), Vector4::new(1.0, 1.0, 2.0, 1.0));
    }

    #[test]
    fn view_can_widen_low_dimensional_source() {
        let source = Vector2::new(1.0, 2.0);
        let view = source.swizzle().y().y().y().build();
        assert_eq!(view.to_vector(), Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(AxesXYZ::z(&view), 2.0);
    }

    #[test]
    fn single_axis_chain_gives_getter() {
        let source = MutableVector3::new(1.0, 2.0, 3.0);
        let getter = of(&source).z().build();
        assert_eq!(getter.axis(), Axis::Z);
        assert_eq!(getter.get(), 3.0);

        source.set_z(-1.0);
        let read_z = getter.into_fn();
        assert_eq!(read_z(), -1.0);
    }

    #[test]
    fn algebra_on_view_gives_immutable_vector() {
        let source = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let view = source.swizzle().w().z().y().build();
        let sum: Vector3 = view.add(&Vector3::same(1.0));
        assert_eq!(sum, Vector3::new(5.0, 4.0, 3.0));
        assert_abs_diff_eq!(view.magnitude(), 29.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn spatial_operations_work_on_views() {
        let source = Vector3::new(0.0, 0.0, 1.0);
        let view = source.swizzle().z().y().x().build();
        assert_abs_diff_eq!(view.theta(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(view.cross_product(&Vector3::unit_y()), Vector3::unit_z());
    }

    #[test]
    fn views_can_be_swizzled_further() {
        let source = MutableVector3::new(1.0, 2.0, 3.0);
        let view = source.swizzle().z().y().x().build();
        let nested = view.swizzle().x().z().build();
        assert_eq!(nested.to_vector(), Vector2::new(3.0, 1.0));

        source.set_components([4.0, 5.0, 6.0]);
        assert_eq!(nested.to_vector(), Vector2::new(6.0, 4.0));
    }

    #[test]
    fn partial_chains_can_be_reused() {
        let source = Vector3::new(1.0, 2.0, 3.0);
        let prefix = source.swizzle().y();
        let first = prefix.x().build();
        let second = prefix.z().build();
        assert_eq!(first.to_vector(), Vector2::new(2.0, 1.0));
        assert_eq!(second.to_vector(), Vector2::new(2.0, 3.0));
        assert_eq!(prefix.axes(), &[Axis::Y]);
    }

    #[test]
    fn view_debug_output_shows_axes_and_components() {
        let source = Vector2::new(1.0, 2.0);
        let view = source.swizzle().y().x().build();
        assert_eq!(
            format!("{view:?}"),
            "SwizzleView { axes: \"yx\", components: [2.0, 1.0] }"
        );
    }
}
