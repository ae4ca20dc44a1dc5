//! Mutable vectors.

use super::{
    Dim, FromComponents, SupportedDim, Vector, VectorLike, bitwise_eq, divided, fmt_debug,
    fmt_display, magnitude, normalized,
};
use crate::atomic::AtomicF64;
use anyhow::{Result, anyhow};
use std::fmt;

/// A vector with `N` double precision components that can be updated in
/// place through a shared reference.
///
/// Every component is a separate [`AtomicF64`], so a mutable vector can be
/// shared between threads (e.g. in an [`Arc`](std::sync::Arc)). A store to
/// one component is visible to every later load of that component, but
/// updates of multiple components are not atomic as a whole: a reader
/// running concurrently with [`set`](Self::set) or one of the `inplace_`
/// operations may observe some components updated and others not yet.
///
/// Comparisons with [`PartialEq`] use the bit patterns of the current
/// components, also against immutable [`Vector`]s. Mutable vectors are not
/// [`Hash`] since their value may change while stored.
pub struct MutableVector<const N: usize>
where
    Dim<N>: SupportedDim,
{
    components: [AtomicF64; N],
}

/// A mutable 2-dimensional vector.
pub type MutableVector2 = MutableVector<2>;

/// A mutable 3-dimensional vector.
pub type MutableVector3 = MutableVector<3>;

/// A mutable 4-dimensional vector.
pub type MutableVector4 = MutableVector<4>;

impl<const N: usize> MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    /// Creates a new vector with the given components.
    #[inline]
    pub fn from_components(components: [f64; N]) -> Self {
        Self {
            components: components.map(AtomicF64::new),
        }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_components([0.0; N])
    }

    /// Creates a new vector with the current components of any other vector
    /// of the same dimension.
    #[inline]
    pub fn from_vector(vector: &impl VectorLike<N>) -> Self {
        Self::from_components(vector.components())
    }

    /// Takes an immutable snapshot of the current components.
    #[inline]
    pub fn freeze(&self) -> Vector<N> {
        Vector::from_components(self.components())
    }

    /// Overwrites all components with the given values.
    pub fn set_components(&self, components: [f64; N]) -> &Self {
        for (cell, value) in self.components.iter().zip(components) {
            cell.store(value);
        }
        self
    }

    /// Overwrites all components with the current components of the given
    /// vector.
    pub fn set(&self, vector: &impl VectorLike<N>) -> &Self {
        self.set_components(vector.components())
    }

    /// Sets the component with the given axis index.
    ///
    /// # Panics
    /// If the index is not smaller than `N`.
    pub fn set_component(&self, index: usize, value: f64) -> &Self {
        if let Err(error) = self.try_set_component(index, value) {
            panic!("{error}");
        }
        self
    }

    /// Sets the component with the given axis index.
    ///
    /// # Errors
    /// If the index is not smaller than `N`.
    pub fn try_set_component(&self, index: usize, value: f64) -> Result<&Self> {
        let cell = self.components.get(index).ok_or_else(|| {
            anyhow!("Invalid axis index {index} for vector with {N} components")
        })?;
        cell.store(value);
        Ok(self)
    }

    /// Adds the given vector to this one.
    pub fn inplace_add(&self, other: &impl VectorLike<N>) -> &Self {
        for (cell, value) in self.components.iter().zip(other.components()) {
            cell.store(cell.load() + value);
        }
        self
    }

    /// Subtracts the given vector from this one.
    pub fn inplace_subtract(&self, other: &impl VectorLike<N>) -> &Self {
        for (cell, value) in self.components.iter().zip(other.components()) {
            cell.store(cell.load() - value);
        }
        self
    }

    /// Multiplies each component with the given factor.
    pub fn inplace_multiply(&self, factor: f64) -> &Self {
        for cell in &self.components {
            cell.store(cell.load() * factor);
        }
        self
    }

    /// Divides each component by the given divisor. A zero divisor sets
    /// every component to NaN.
    pub fn inplace_divide(&self, divisor: f64) -> &Self {
        self.set_components(divided(self.components(), divisor))
    }

    /// Scales the vector to unit length. The zero vector is left untouched.
    pub fn inplace_normalize(&self) -> &Self {
        let components = self.components();
        if magnitude(&components) == 0.0 {
            return self;
        }
        self.set_components(normalized(components))
    }

    /// Negates every component.
    pub fn inplace_inverse(&self) -> &Self {
        for cell in &self.components {
            cell.store(-cell.load());
        }
        self
    }
}

impl MutableVector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_components([x, y])
    }

    /// Sets the x-component.
    #[inline]
    pub fn set_x(&self, x: f64) -> &Self {
        self.components[0].store(x);
        self
    }

    /// Sets the y-component.
    #[inline]
    pub fn set_y(&self, y: f64) -> &Self {
        self.components[1].store(y);
        self
    }

    /// Sets the components from the given length `r` and polar angle `phi`.
    pub fn set_polar(&self, r: f64, phi: f64) -> &Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        self.set_components([r * cos_phi, r * sin_phi])
    }
}

impl MutableVector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_components([x, y, z])
    }

    /// Sets the x-component.
    #[inline]
    pub fn set_x(&self, x: f64) -> &Self {
        self.components[0].store(x);
        self
    }

    /// Sets the y-component.
    #[inline]
    pub fn set_y(&self, y: f64) -> &Self {
        self.components[1].store(y);
        self
    }

    /// Sets the z-component.
    #[inline]
    pub fn set_z(&self, z: f64) -> &Self {
        self.components[2].store(z);
        self
    }

    /// Sets the components from the given spherical coordinates: length `r`,
    /// polar angle `theta` from the z-axis and azimuthal angle `phi`.
    pub fn set_polar(&self, r: f64, theta: f64, phi: f64) -> &Self {
        self.set_components(super::immutable::spherical_to_cartesian(r, theta, phi))
    }
}

impl MutableVector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_components([x, y, z, w])
    }

    /// Sets the x-component.
    #[inline]
    pub fn set_x(&self, x: f64) -> &Self {
        self.components[0].store(x);
        self
    }

    /// Sets the y-component.
    #[inline]
    pub fn set_y(&self, y: f64) -> &Self {
        self.components[1].store(y);
        self
    }

    /// Sets the z-component.
    #[inline]
    pub fn set_z(&self, z: f64) -> &Self {
        self.components[2].store(z);
        self
    }

    /// Sets the w-component.
    #[inline]
    pub fn set_w(&self, w: f64) -> &Self {
        self.components[3].store(w);
        self
    }
}

impl<const N: usize> VectorLike<N> for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    type Owned = Self;

    #[inline]
    fn components(&self) -> [f64; N] {
        std::array::from_fn(|i| self.components[i].load())
    }
}

impl<const N: usize> FromComponents<N> for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from_components(components: [f64; N]) -> Self {
        Self::from_components(components)
    }
}

impl_axes!(MutableVector, |vector, idx| vector.components[idx].load());

impl<const N: usize> Default for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> Clone for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    /// Creates a new, independent vector with the current components.
    fn clone(&self) -> Self {
        Self::from_vector(self)
    }
}

impl<const N: usize> PartialEq for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    fn eq(&self, other: &Self) -> bool {
        bitwise_eq(&self.components(), &other.components())
    }
}

impl<const N: usize> PartialEq<Vector<N>> for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    fn eq(&self, other: &Vector<N>) -> bool {
        bitwise_eq(&self.components(), other.as_array())
    }
}

impl<const N: usize> PartialEq<MutableVector<N>> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    fn eq(&self, other: &MutableVector<N>) -> bool {
        other == self
    }
}

impl<const N: usize> From<[f64; N]> for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Self::from_components(components)
    }
}

impl<const N: usize> From<Vector<N>> for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(vector: Vector<N>) -> Self {
        Self::from_vector(&vector)
    }
}

impl<const N: usize> From<&MutableVector<N>> for Vector<N>
where
    Dim<N>: SupportedDim,
{
    #[inline]
    fn from(vector: &MutableVector<N>) -> Self {
        vector.freeze()
    }
}

impl<const N: usize> fmt::Debug for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(f, "MutableVector", &self.components())
    }
}

impl<const N: usize> fmt::Display for MutableVector<N>
where
    Dim<N>: SupportedDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(f, &self.components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        axis::{AxesXY, AxesXYZW},
        vector::{Spatial, Vector2, Vector3, Vector4},
    };
    use approx::assert_abs_diff_eq;
    use std::{sync::Arc, thread};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn inplace_operations_can_be_chained() {
        let v = MutableVector3::new(1.0, 2.0, 3.0);
        v.inplace_add(&Vector3::same(1.0))
            .inplace_multiply(2.0)
            .inplace_subtract(&Vector3::new(4.0, 6.0, 8.0));
        assert_eq!(v, Vector3::zeros());
    }

    #[test]
    fn inplace_inverse_negates_components() {
        let v = MutableVector2::new(1.0, -2.0);
        v.inplace_inverse();
        assert_eq!(v, Vector2::new(-1.0, 2.0));
    }

    #[test]
    fn inplace_division_by_zero_sets_every_component_to_nan() {
        let v = MutableVector4::new(1.0, 0.0, -1.0, 5.0);
        v.inplace_divide(0.0);
        assert!(v.components().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn inplace_normalizing_gives_unit_vector() {
        let v = MutableVector3::new(0.0, 3.0, 4.0);
        v.inplace_normalize();
        assert_abs_diff_eq!(v.freeze(), Vector3::new(0.0, 0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn inplace_normalizing_zero_vector_leaves_it_untouched() {
        let v = MutableVector2::new(-0.0, 0.0);
        v.inplace_normalize();
        assert_eq!(v, Vector2::new(-0.0, 0.0));
    }

    #[test]
    fn setting_axes_individually_works() {
        let v = MutableVector4::zeros();
        v.set_x(1.0).set_y(2.0).set_z(3.0).set_w(4.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(AxesXYZW::w(&v), 4.0);
        assert_eq!(AxesXY::x(&v), 1.0);
    }

    #[test]
    fn setting_component_by_index_works() {
        let v = MutableVector3::zeros();
        v.set_component(2, 5.0);
        assert_eq!(v.component(2), 5.0);
        assert!(v.try_set_component(3, 1.0).is_err());
    }

    #[test]
    #[should_panic]
    fn setting_component_beyond_dimension_panics() {
        MutableVector2::zeros().set_component(2, 1.0);
    }

    #[test]
    fn setting_from_other_vector_copies_components() {
        let v = MutableVector2::zeros();
        let other = MutableVector2::new(7.0, 8.0);
        v.set(&other);
        other.set_x(0.0);
        assert_eq!(v, Vector2::new(7.0, 8.0));
    }

    #[test]
    fn setting_2d_polar_coordinates_gives_cartesian_components() {
        let v = MutableVector2::zeros();
        v.set_polar(2.0, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(v.freeze(), Vector2::new(0.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn setting_3d_polar_coordinates_gives_cartesian_components() {
        let v = MutableVector3::zeros();
        v.set_polar(2.0, std::f64::consts::FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(v.freeze(), Vector3::new(2.0, 0.0, 0.0), epsilon = EPSILON);

        v.set_polar(1.5, 0.4, 2.0);
        assert_abs_diff_eq!(v.magnitude(), 1.5, epsilon = EPSILON);
        assert_abs_diff_eq!(v.theta(), 0.4, epsilon = EPSILON);
        assert_abs_diff_eq!(v.phi(), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn frozen_snapshot_does_not_follow_later_updates() {
        let v = MutableVector2::new(1.0, 2.0);
        let frozen = v.freeze();
        v.set_x(10.0);
        assert_eq!(frozen, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn cloning_gives_independent_vector() {
        let v = MutableVector2::new(1.0, 2.0);
        let cloned = v.clone();
        v.set_y(0.0);
        assert_eq!(cloned, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn equality_holds_across_ownership_variants() {
        let immutable = Vector3::new(1.0, 2.0, 3.0);
        let mutable = MutableVector3::from(immutable);
        assert_eq!(mutable, immutable);
        assert_eq!(immutable, mutable);
        mutable.set_z(0.0);
        assert_ne!(mutable, immutable);
        assert_ne!(immutable, mutable);
    }

    #[test]
    fn mutable_vectors_are_displayed_like_immutable_ones() {
        let v = MutableVector2::new(1.0, 2.0);
        assert_eq!(v.to_string(), Vector2::new(1.0, 2.0).to_string());
        assert_eq!(format!("{v:?}"), "MutableVector2 { x: 1.0, y: 2.0 }");
    }

    #[test]
    fn update_from_other_thread_is_visible_through_shared_vector() {
        let v = Arc::new(MutableVector3::zeros());
        let writer = {
            let v = Arc::clone(&v);
            thread::spawn(move || {
                v.set_components([1.0, 2.0, 3.0]);
            })
        };
        writer.join().unwrap();
        assert_eq!(*v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn concurrent_writers_to_separate_components_do_not_interfere() {
        let v = MutableVector4::zeros();
        thread::scope(|scope| {
            for index in 0..4 {
                let v = &v;
                scope.spawn(move || {
                    for step in 0..100 {
                        v.set_component(index, f64::from(step));
                    }
                });
            }
        });
        assert_eq!(v, Vector4::same(99.0));
    }
}
