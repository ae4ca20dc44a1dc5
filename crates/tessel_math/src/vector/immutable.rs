//! Immutable vectors.

use super::{Dim, FromComponents, SupportedDim, VectorLike, bitwise_eq, fmt_debug, fmt_display};
use crate::axis::Axis;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
};

/// An immutable vector with `N` double precision components.
///
/// Equality and hashing compare the bit patterns of the components, so the
/// type is [`Eq`] and can be used as a map key: a NaN equals any NaN with the
/// same bits, while `0.0` and `-0.0` are different. Use the [`approx`]
/// traits to compare within a tolerance.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Vector<const N: usize>
where
    Dim<N>: SupportedDim,
{
    components: [f64; N],
}

/// An immutable 2-dimensional vector.
pub type Vector2 = Vector<2>;

/// An immutable 3-dimensional vector.
pub type Vector3 = Vector<3>;

/// An immutable 4-dimensional vector.
pub type Vector4 = Vector<4>;

// SAFETY: `Vector<N>` is a transparent wrapper around `[f64; N]`, which is
// `Pod`.
unsafe impl<const N: usize> Zeroable for Vector<N>
where
    Dim<N>: SupportedDim,
{
}

unsafe impl<const N: usize> Pod for Vector<N>
where
    Dim<N>: SupportedDim,
{
}

impl<const N: usize> Vector<N>
where
    Dim<N>: SupportedDim,
{
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn from_components(components: [f64; N]) -> Self {
        Self { components }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_components([0.0; N])
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::from_components([value; N])
    }

    /// Creates a new vector with the current components of any other vector
    /// of the same dimension.
    #[inline]
    pub fn from_vector(vector: &impl VectorLike<N>) -> Self {
        Self::from_components(vector.components())
    }

    /// The components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.components
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self::from_components(self.components.map(f))
    }

    /// Reinterprets a slice of vectors as a flat slice of their components.
    #[inline]
    pub fn flatten_slice(vectors: &[Self]) -> &[f64] {
        bytemuck::cast_slice(vectors)
    }
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self::from_components([x, y])
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Creates the vector with the given length `r` and polar angle `phi`.
    #[inline]
    pub fn from_polar(r: f64, phi: f64) -> Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self::new(r * cos_phi, r * sin_phi)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.components[1]
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f64) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_components([x, y, z])
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Creates the vector with the given spherical coordinates: length `r`,
    /// polar angle `theta` from the z-axis and azimuthal angle `phi`.
    #[inline]
    pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Self {
        Self::from_components(spherical_to_cartesian(r, theta, phi))
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.components[2]
    }

    /// Converts the vector to 2D by dropping the z-component.
    #[inline]
    pub const fn truncated(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f64) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_components([x, y, z, w])
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.components[3]
    }

    /// Converts the vector to 3D by dropping the w-component.
    #[inline]
    pub const fn truncated(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

pub(super) fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> [f64; 3] {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    [r * sin_theta * cos_phi, r * sin_theta * sin_phi, r * cos_theta]
}

impl<const N: usize> VectorLike<N> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    type Owned = Self;

    #[inline]
    fn components(&self) -> [f64; N] {
        self.components
    }
}

impl<const N: usize> FromComponents<N> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from_components(components: [f64; N]) -> Self {
        Self::from_components(components)
    }
}

impl_axes!(Vector, |vector, idx| vector.components[idx]);

impl<const N: usize> Default for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> PartialEq for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn eq(&self, other: &Self) -> bool {
        bitwise_eq(&self.components, &other.components)
    }
}

impl<const N: usize> Eq for Vector<N>
where
    Dim<N>: SupportedDim,
{
}

impl<const N: usize> Hash for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in &self.components {
            component.to_bits().hash(state);
        }
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Self::from_components(components)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N]
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(vector: Vector<N>) -> Self {
        vector.components
    }
}

impl<const N: usize> AsRef<[f64; N]> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn as_ref(&self) -> &[f64; N] {
        &self.components
    }
}

impl<const N: usize> Index<usize> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<const N: usize> Index<Axis> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    type Output = f64;

    #[inline]
    fn index(&self, axis: Axis) -> &Self::Output {
        &self.components[axis.index()]
    }
}

impl_binop!(Add, add, Vector<N>, Vector<N>, Vector<N>, |a, b| {
    <Vector<N> as VectorLike<N>>::add(a, b)
});

impl_binop!(Sub, sub, Vector<N>, Vector<N>, Vector<N>, |a, b| {
    a.subtract(b)
});

impl_binop!(Mul, mul, Vector<N>, f64, Vector<N>, |a, b| {
    a.multiply(*b)
});

impl_binop!(Mul, mul, f64, Vector<N>, Vector<N>, |a, b| {
    b.multiply(*a)
});

impl_binop!(Div, div, Vector<N>, f64, Vector<N>, |a, b| {
    a.divide(*b)
});

impl_binop_assign!(AddAssign, add_assign, Vector<N>, Vector<N>, |a, b| {
    *a = <Vector<N> as VectorLike<N>>::add(a, b);
});

impl_binop_assign!(SubAssign, sub_assign, Vector<N>, Vector<N>, |a, b| {
    *a = a.subtract(b);
});

impl_binop_assign!(MulAssign, mul_assign, Vector<N>, f64, |a, b| {
    *a = a.multiply(*b);
});

impl_binop_assign!(DivAssign, div_assign, Vector<N>, f64, |a, b| {
    *a = a.divide(*b);
});

impl_unary_op!(Neg, neg, Vector<N>, Vector<N>, |val| { val.inverse() });

impl<const N: usize> AbsDiffEq for Vector<N>
where
    Dim<N>: SupportedDim,
{
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize> fmt::Debug for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(f, "Vector", &self.components)
    }
}

impl<const N: usize> fmt::Display for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(f, &self.components)
    }
}

#[cfg(feature = "nalgebra")]
impl<const N: usize> From<Vector<N>> for nalgebra::SVector<f64, N>
where
    Dim<N>: SupportedDim,
{
    fn from(vector: Vector<N>) -> Self {
        Self::from(vector.components)
    }
}

#[cfg(feature = "nalgebra")]
impl<const N: usize> From<nalgebra::SVector<f64, N>> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn from(vector: nalgebra::SVector<f64, N>) -> Self {
        Self::from_components(vector.into())
    }
}
