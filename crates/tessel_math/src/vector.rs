//! Vectors.
//!
//! Vectors come in two ownership variants sharing the same algebra:
//!
//! - [`Vector`] (aliased as [`Vector2`], [`Vector3`] and [`Vector4`]) is an
//!   immutable `Copy` value. Every operation returns a new vector.
//! - [`MutableVector`] (aliased as [`MutableVector2`], [`MutableVector3`] and
//!   [`MutableVector4`]) has identity semantics. Its components can be
//!   updated in place through a shared reference.
//!
//! The algebra is written once in [`VectorLike`], which only needs to read
//! the components of a vector and knows how to construct its result type
//! through [`FromComponents`]. Operations that only make sense for a specific
//! dimension live in [`Planar`] (2D) and [`Spatial`] (3D).

mod immutable;
mod mutable;

pub use immutable::{Vector, Vector2, Vector3, Vector4};
pub use mutable::{MutableVector, MutableVector2, MutableVector3, MutableVector4};

use anyhow::{Result, anyhow};
use std::{array, fmt};

/// Type-level marker for a vector dimension.
///
/// Vectors only exist for the dimensions whose marker implements
/// [`SupportedDim`], which are 2, 3 and 4:
///
/// ```compile_fail
/// use tessel_math::Vector;
///
/// let v = Vector::<5>::from_components([1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
///
/// ```compile_fail
/// use tessel_math::MutableVector;
///
/// let v = MutableVector::<1>::from_components([1.0]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dim<const N: usize>;

/// Implemented for the [`Dim`] of every supported vector dimension. The
/// trait is sealed.
pub trait SupportedDim: sealed::Sealed {}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_supported_dim {
    ($($dim:literal),+) => {
        $(
            impl sealed::Sealed for Dim<$dim> {}
            impl SupportedDim for Dim<$dim> {}
        )+
    };
}

impl_supported_dim!(2, 3, 4);

/// Construction of a vector type from its `N` components.
pub trait FromComponents<const N: usize>: Sized {
    /// Creates a vector with the given components.
    fn from_components(components: [f64; N]) -> Self;
}

/// Read-only algebra shared by every `N`-dimensional vector type.
///
/// Implementors only provide [`components`](Self::components). Operations
/// returning a vector produce [`Owned`](Self::Owned), so immutable vectors
/// give immutable results and mutable vectors give new mutable vectors.
///
/// Numeric edge cases saturate instead of failing: dividing by zero gives a
/// vector of NaNs and normalizing the zero vector gives the zero vector.
pub trait VectorLike<const N: usize>
where
    Dim<N>: SupportedDim,
{
    /// The type of the vectors returned by value-producing operations.
    type Owned: VectorLike<N> + FromComponents<N>;

    /// The current components of the vector.
    fn components(&self) -> [f64; N];

    /// Returns the component with the given axis index.
    ///
    /// # Panics
    /// If the index is not smaller than `N`.
    fn component(&self, index: usize) -> f64 {
        match self.try_component(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the component with the given axis index.
    ///
    /// # Errors
    /// If the index is not smaller than `N`.
    fn try_component(&self, index: usize) -> Result<f64> {
        self.components().get(index).copied().ok_or_else(|| {
            anyhow!(
                "Invalid axis index {} for vector with {} components",
                index,
                N
            )
        })
    }

    /// Adds another vector to this one.
    fn add(&self, other: &impl VectorLike<N>) -> Self::Owned {
        let (a, b) = (self.components(), other.components());
        FromComponents::from_components(array::from_fn(|i| a[i] + b[i]))
    }

    /// Subtracts another vector from this one.
    fn subtract(&self, other: &impl VectorLike<N>) -> Self::Owned {
        let (a, b) = (self.components(), other.components());
        FromComponents::from_components(array::from_fn(|i| a[i] - b[i]))
    }

    /// Multiplies each component with the given factor.
    fn multiply(&self, factor: f64) -> Self::Owned {
        FromComponents::from_components(self.components().map(|c| c * factor))
    }

    /// Divides each component by the given divisor. A zero divisor gives a
    /// vector where every component is NaN.
    fn divide(&self, divisor: f64) -> Self::Owned {
        FromComponents::from_components(divided(self.components(), divisor))
    }

    /// Computes the dot product with another vector.
    fn dot_product(&self, other: &impl VectorLike<N>) -> f64 {
        let (a, b) = (self.components(), other.components());
        a.iter().zip(&b).map(|(a, b)| a * b).sum()
    }

    /// Computes the Euclidean length of the vector.
    fn magnitude(&self) -> f64 {
        magnitude(&self.components())
    }

    /// Computes the unit vector pointing in the same direction. The zero
    /// vector is returned unchanged.
    fn normalize(&self) -> Self::Owned {
        FromComponents::from_components(normalized(self.components()))
    }

    /// Returns the vector with every component negated.
    fn inverse(&self) -> Self::Owned {
        FromComponents::from_components(self.components().map(|c| -c))
    }

    /// Computes the Euclidean distance to another vector.
    fn distance(&self, other: &impl VectorLike<N>) -> f64 {
        let (a, b) = (self.components(), other.components());
        magnitude(&array::from_fn::<_, N, _>(|i| a[i] - b[i]))
    }

    /// Takes an immutable snapshot of the current components.
    fn to_vector(&self) -> Vector<N> {
        Vector::from_components(self.components())
    }
}

/// Operations specific to 2D vectors.
pub trait Planar: VectorLike<2> {
    /// The polar angle of the vector, measured counterclockwise from the
    /// x-axis, in `[-π, π]`.
    fn phi(&self) -> f64 {
        let [x, y] = self.components();
        y.atan2(x)
    }

    /// Computes the cross product of the two vectors embedded in the xy-plane.
    /// Only the z-component of the result is non-zero.
    fn cross_product(&self, other: &impl VectorLike<2>) -> Vector3 {
        let ([ax, ay], [bx, by]) = (self.components(), other.components());
        Vector3::new(0.0, 0.0, ax * by - ay * bx)
    }
}

/// Operations specific to 3D vectors.
pub trait Spatial: VectorLike<3> {
    /// The polar angle of the vector, measured from the z-axis, in `[0, π]`.
    fn theta(&self) -> f64 {
        let [x, y, z] = self.components();
        x.hypot(y).atan2(z)
    }

    /// The azimuthal angle of the vector, measured counterclockwise from the
    /// x-axis in the xy-plane, in `[-π, π]`.
    fn phi(&self) -> f64 {
        let [x, y, _] = self.components();
        y.atan2(x)
    }

    /// Computes the cross product with another vector.
    fn cross_product(&self, other: &impl VectorLike<3>) -> <Self as VectorLike<3>>::Owned {
        let ([ax, ay, az], [bx, by, bz]) = (self.components(), other.components());
        FromComponents::from_components([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<V: VectorLike<2> + ?Sized> Planar for V {}

impl<V: VectorLike<3> + ?Sized> Spatial for V {}

fn magnitude<const N: usize>(components: &[f64; N]) -> f64 {
    components.iter().map(|c| c * c).sum::<f64>().sqrt()
}

fn divided<const N: usize>(components: [f64; N], divisor: f64) -> [f64; N] {
    if divisor == 0.0 {
        [f64::NAN; N]
    } else {
        components.map(|c| c / divisor)
    }
}

fn normalized<const N: usize>(components: [f64; N]) -> [f64; N] {
    let magnitude = magnitude(&components);
    if magnitude == 0.0 {
        [0.0; N]
    } else {
        components.map(|c| c / magnitude)
    }
}

/// Whether the components have identical bit patterns. NaNs with the same
/// payload compare equal, while `0.0` and `-0.0` do not.
fn bitwise_eq<const N: usize>(a: &[f64; N], b: &[f64; N]) -> bool {
    a.iter().zip(b).all(|(a, b)| a.to_bits() == b.to_bits())
}

fn fmt_debug(f: &mut fmt::Formatter<'_>, type_name: &str, components: &[f64]) -> fmt::Result {
    let name = format!("{type_name}{}", components.len());
    let mut debug = f.debug_struct(&name);
    for (axis, value) in crate::Axis::ALL.iter().zip(components) {
        debug.field(axis.name(), value);
    }
    debug.finish()
}

fn fmt_display(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    let precision = f.precision().unwrap_or(6);
    write!(f, "[")?;
    for (idx, value) in components.iter().enumerate() {
        if idx > 0 {
            write!(f, "; ")?;
        }
        write!(f, "{value:.precision$}")?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    prop_compose! {
        fn vector2_strategy(max_coord: f64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
        ) -> Vector2 {
            Vector2::new(x, y)
        }
    }

    prop_compose! {
        fn vector3_strategy(max_coord: f64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn vector4_strategy(max_coord: f64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
            w in -max_coord..max_coord,
        ) -> Vector4 {
            Vector4::new(x, y, z, w)
        }
    }

    #[test]
    fn algebra_on_mutable_vector_gives_new_mutable_vector() {
        let v = MutableVector3::new(1.0, 2.0, 3.0);
        let sum: MutableVector3 = v.add(&Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(sum, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn mixing_ownership_variants_in_algebra_works() {
        let a = Vector2::new(1.0, 2.0);
        let b = MutableVector2::new(3.0, 4.0);
        assert_eq!(a.add(&b), Vector2::new(4.0, 6.0));
        assert_abs_diff_eq!(a.dot_product(&b), 11.0, epsilon = EPSILON);
        assert_abs_diff_eq!(b.distance(&a), 8.0_f64.sqrt(), epsilon = EPSILON);
    }

    #[test]
    fn components_are_addressable_by_index() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.component(0), 1.0);
        assert_eq!(v.component(3), 4.0);
        assert!(v.try_component(4).is_err());
    }

    #[test]
    #[should_panic]
    fn requesting_axis_index_beyond_dimension_panics() {
        Vector2::new(1.0, 2.0).component(2);
    }

    #[test]
    fn dividing_by_zero_gives_nan_vector() {
        let v = Vector3::new(1.0, 0.0, -2.0).divide(0.0);
        assert!(v.components().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn normalizing_zero_vector_gives_zero_vector() {
        assert_eq!(Vector2::zeros().normalize(), Vector2::zeros());
        assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
        assert_eq!(Vector4::zeros().normalize(), Vector4::zeros());
    }

    #[test]
    fn polar_angle_of_2d_vector_is_measured_from_x_axis() {
        assert_abs_diff_eq!(Vector2::new(0.0, 2.0).phi(), std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(Vector2::new(-1.0, 0.0).phi(), std::f64::consts::PI);
    }

    #[test]
    fn cross_product_of_2d_vectors_only_has_z_component() {
        let cross = Vector2::new(1.0, 0.0).cross_product(&Vector2::new(0.0, 2.0));
        assert_eq!(cross, Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn spherical_angles_of_axis_vectors_are_correct() {
        use std::f64::consts::{FRAC_PI_2, PI};

        assert_abs_diff_eq!(Vector3::unit_z().theta(), 0.0);
        assert_abs_diff_eq!(Vector3::unit_z().inverse().theta(), PI);
        assert_abs_diff_eq!(Vector3::unit_x().theta(), FRAC_PI_2);
        assert_abs_diff_eq!(Vector3::unit_y().phi(), FRAC_PI_2);
    }

    #[test]
    fn cross_product_of_unit_axes_follows_right_hand_rule() {
        assert_eq!(Vector3::unit_x().cross_product(&Vector3::unit_y()), Vector3::unit_z());
        assert_eq!(Vector3::unit_y().cross_product(&Vector3::unit_z()), Vector3::unit_x());
        assert_eq!(Vector3::unit_z().cross_product(&Vector3::unit_x()), Vector3::unit_y());
    }

    #[test]
    fn distance_includes_w_component() {
        let a = Vector4::new(0.0, 0.0, 0.0, 0.0);
        let b = Vector4::new(0.0, 0.0, 0.0, 2.0);
        assert_abs_diff_eq!(a.distance(&b), 2.0, epsilon = EPSILON);
    }

    proptest! {
        #[test]
        fn normalized_nonzero_vector_has_unit_magnitude(v in vector3_strategy(1e3)) {
            prop_assume!(v.magnitude() > 1e-6);
            prop_assert!(approx::abs_diff_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn adding_then_subtracting_gives_original_vector(
            v in vector4_strategy(1e3),
            w in vector4_strategy(1e3),
        ) {
            prop_assert!(approx::abs_diff_eq!(v.add(&w).subtract(&w), v, epsilon = 1e-9));
        }
    }

    proptest! {
        #[test]
        fn dividing_then_multiplying_gives_original_vector(
            v in vector2_strategy(1e3),
            divisor in prop_oneof![-1e3..-1e-3, 1e-3..1e3],
        ) {
            prop_assert!(approx::relative_eq!(
                v.divide(divisor).multiply(divisor),
                v,
                epsilon = 1e-9,
                max_relative = 1e-9
            ));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_anticommutative(
            a in vector3_strategy(1e2),
            b in vector3_strategy(1e2),
        ) {
            prop_assert!(approx::abs_diff_eq!(
                a.cross_product(&b),
                b.cross_product(&a).inverse(),
                epsilon = 1e-9
            ));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_orthogonal_to_operands(
            a in vector3_strategy(1e2),
            b in vector3_strategy(1e2),
        ) {
            let cross = a.cross_product(&b);
            prop_assert!(approx::abs_diff_eq!(cross.dot_product(&a), 0.0, epsilon = 1e-6));
            prop_assert!(approx::abs_diff_eq!(cross.dot_product(&b), 0.0, epsilon = 1e-6));
        }
    }
}
