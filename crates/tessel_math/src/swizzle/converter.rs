//! Reusable swizzle conversions between vector types.
//!
//! A chain is started with one of the free functions [`x`], [`y`], [`z`] and
//! [`w`] and fixes the source type `V` for all of its axes:
//!
//! ```
//! use tessel_math::{Vector2, Vector3, swizzle::converter};
//!
//! let xz = converter::x::<Vector3>().z().build();
//! assert_eq!(xz.apply(&Vector3::new(1.0, 2.0, 3.0)), Vector2::new(1.0, 3.0));
//! assert_eq!(xz.apply(&Vector3::new(4.0, 5.0, 6.0)), Vector2::new(4.0, 6.0));
//! ```
//!
//! Every axis is checked against the source type, whether it starts the
//! chain or is appended later:
//!
//! ```compile_fail
//! use tessel_math::{Vector2, swizzle::converter};
//!
//! let xz = converter::x::<Vector2>().z().build();
//! ```
//!
//! ```compile_fail
//! use tessel_math::{Vector3, swizzle::converter};
//!
//! let w = converter::w::<Vector3>().build();
//! ```

use super::appended;
use crate::{
    axis::{AxesXY, AxesXYZ, AxesXYZW, Axis, axes_to_string},
    vector::{Dim, SupportedDim, Vector},
};
use std::{array, fmt};

/// Records the axes to extract from vectors of type `V`. `N` is the number
/// of axes recorded so far.
pub struct ConverterBuilder<V, const N: usize> {
    axes: [Axis; N],
    extractors: [fn(&V) -> f64; N],
}

/// Converts vectors of type `V` to `N`-dimensional [`Vector`]s by
/// extracting a fixed sequence of axes.
pub struct Converter<V, const N: usize> {
    axes: [Axis; N],
    extractors: [fn(&V) -> f64; N],
}

/// Starts a conversion chain with the x-axis.
pub fn x<V: AxesXY>() -> ConverterBuilder<V, 1> {
    ConverterBuilder::start(Axis::X, <V as AxesXY>::x)
}

/// Starts a conversion chain with the y-axis.
pub fn y<V: AxesXY>() -> ConverterBuilder<V, 1> {
    ConverterBuilder::start(Axis::Y, <V as AxesXY>::y)
}

/// Starts a conversion chain with the z-axis.
pub fn z<V: AxesXYZ>() -> ConverterBuilder<V, 1> {
    ConverterBuilder::start(Axis::Z, <V as AxesXYZ>::z)
}

/// Starts a conversion chain with the w-axis.
pub fn w<V: AxesXYZW>() -> ConverterBuilder<V, 1> {
    ConverterBuilder::start(Axis::W, <V as AxesXYZW>::w)
}

impl<V> ConverterBuilder<V, 1> {
    fn start(axis: Axis, extractor: fn(&V) -> f64) -> Self {
        Self {
            axes: [axis],
            extractors: [extractor],
        }
    }

    /// Finishes the chain, returning the extractor for the single recorded
    /// axis.
    pub fn build(self) -> fn(&V) -> f64 {
        self.extractors[0]
    }
}

impl<V, const N: usize> ConverterBuilder<V, N> {
    /// The axes recorded so far.
    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    fn append<const M: usize>(self, axis: Axis, extractor: fn(&V) -> f64) -> ConverterBuilder<V, M> {
        ConverterBuilder {
            axes: appended(self.axes, axis),
            extractors: appended(self.extractors, extractor),
        }
    }
}

macro_rules! impl_axis_selection {
    ($level:literal => $next:literal) => {
        impl<V: AxesXY> ConverterBuilder<V, $level> {
            /// Appends the x-axis.
            pub fn x(self) -> ConverterBuilder<V, $next> {
                self.append(Axis::X, <V as AxesXY>::x)
            }

            /// Appends the y-axis.
            pub fn y(self) -> ConverterBuilder<V, $next> {
                self.append(Axis::Y, <V as AxesXY>::y)
            }
        }

        impl<V: AxesXYZ> ConverterBuilder<V, $level> {
            /// Appends the z-axis.
            pub fn z(self) -> ConverterBuilder<V, $next> {
                self.append(Axis::Z, <V as AxesXYZ>::z)
            }
        }

        impl<V: AxesXYZW> ConverterBuilder<V, $level> {
            /// Appends the w-axis.
            pub fn w(self) -> ConverterBuilder<V, $next> {
                self.append(Axis::W, <V as AxesXYZW>::w)
            }
        }
    };
}

impl_axis_selection!(1 => 2);
impl_axis_selection!(2 => 3);
impl_axis_selection!(3 => 4);

macro_rules! impl_converter_build {
    ($($dim:literal),+) => {
        $(
            impl<V> ConverterBuilder<V, $dim> {
                /// Finishes the chain with a converter extracting the recorded
                /// axes.
                pub fn build(self) -> Converter<V, $dim> {
                    Converter {
                        axes: self.axes,
                        extractors: self.extractors,
                    }
                }
            }
        )+
    };
}

impl_converter_build!(2, 3, 4);

impl<V, const N: usize> Converter<V, N>
where
    Dim<N>: SupportedDim,
{
    /// Creates a new vector from the recorded axes of the given source.
    pub fn apply(&self, source: &V) -> Vector<N> {
        Vector::from_components(array::from_fn(|i| (self.extractors[i])(source)))
    }

    /// The source axis extracted for each component of the result.
    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    /// Converts the converter into a plain closure.
    pub fn into_fn(self) -> impl Fn(&V) -> Vector<N> {
        move |source: &V| self.apply(source)
    }
}

impl<V, const N: usize> Clone for ConverterBuilder<V, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, const N: usize> Copy for ConverterBuilder<V, N> {}

impl<V, const N: usize> Clone for Converter<V, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, const N: usize> Copy for Converter<V, N> {}

impl<V, const N: usize> fmt::Debug for ConverterBuilder<V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterBuilder")
            .field("axes", &axes_to_string(&self.axes))
            .finish_non_exhaustive()
    }
}

impl<V, const N: usize> fmt::Debug for Converter<V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("axes", &axes_to_string(&self.axes))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        swizzle::{Swizzle, accessor::SwizzleView},
        vector::{MutableVector3, Vector2, Vector3, Vector4, VectorLike},
    };

    #[test]
    fn converter_extracts_recorded_axes_from_each_input() {
        let xz = x::<Vector3>().z().build();
        assert_eq!(xz.apply(&Vector3::new(1.0, 2.0, 3.0)), Vector2::new(1.0, 3.0));
        assert_eq!(xz.apply(&Vector3::new(4.0, 5.0, 6.0)), Vector2::new(4.0, 6.0));
        assert_eq!(xz.axes(), &[Axis::X, Axis::Z]);
    }

    #[test]
    fn single_axis_chain_gives_extractor_function() {
        let extract_w = w::<Vector4>().build();
        assert_eq!(extract_w(&Vector4::new(1.0, 2.0, 3.0, 4.0)), 4.0);
    }

    #[test]
    fn converter_can_widen_low_dimensional_input() {
        let to_4d = y::<Vector2>().x().y().x().build();
        assert_eq!(
            to_4d.apply(&Vector2::new(1.0, 2.0)),
            Vector4::new(2.0, 1.0, 2.0, 1.0)
        );
    }

    #[test]
    fn converter_reads_current_components_of_mutable_input() {
        let zyx = z::<MutableVector3>().y().x().build();
        let source = MutableVector3::new(1.0, 2.0, 3.0);
        assert_eq!(zyx.apply(&source), Vector3::new(3.0, 2.0, 1.0));

        source.set_y(7.0);
        assert_eq!(zyx.apply(&source), Vector3::new(3.0, 7.0, 1.0));
    }

    #[test]
    fn converter_result_does_not_follow_later_updates() {
        let source = MutableVector3::new(1.0, 2.0, 3.0);
        let converted = x::<MutableVector3>().y().build().apply(&source);
        source.set_x(0.0);
        assert_eq!(converted, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn converter_function_can_be_mapped_over_vectors() {
        let yx = y::<Vector2>().x().build().into_fn();
        let swapped: Vec<_> = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]
            .iter()
            .map(yx)
            .collect();
        assert_eq!(swapped, [Vector2::new(2.0, 1.0), Vector2::new(4.0, 3.0)]);
    }

    #[test]
    fn converter_accepts_swizzle_views() {
        let source = Vector3::new(1.0, 2.0, 3.0);
        let view = source.swizzle().z().y().x().build();
        let first_two = x::<SwizzleView<'_, Vector3, 3>>().y().build();
        assert_eq!(first_two.apply(&view), Vector2::new(3.0, 2.0));
        assert_eq!(view.to_vector(), Vector3::new(3.0, 2.0, 1.0));
    }
}
